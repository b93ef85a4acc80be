use serde::Serialize;
use tera::{Context, Tera};
use thiserror::Error;

use super::models::{ArticleCardView, ArticleDetailView};

pub const SKELETON_CARDS: usize = 3;
const STREAM_MARKER: &str = "<!--articles-stream-->";

const TEMPLATES: [(&str, &str); 7] = [
    ("base.html", include_str!("../../../templates/base.html")),
    ("macros.html", include_str!("../../../templates/macros.html")),
    ("index.html", include_str!("../../../templates/index.html")),
    ("article_list.html", include_str!("../../../templates/article_list.html")),
    ("article.html", include_str!("../../../templates/article.html")),
    ("not_found.html", include_str!("../../../templates/not_found.html")),
    ("error.html", include_str!("../../../templates/error.html")),
];

#[derive(Debug, Error)]
pub enum ViewError {
    #[error("template error: {0}")]
    Template(#[from] tera::Error),
    #[error("template {0} is missing the stream marker")]
    MissingStreamMarker(&'static str),
}

/// The list page split around the point where article cards are streamed in.
#[derive(Debug, Clone)]
pub struct IndexShell {
    pub head: String,
    pub tail: String,
}

#[derive(Serialize)]
struct ListContext<'a> {
    articles: &'a [ArticleCardView],
    failed: bool,
}

/// Renders pages from the templates compiled into the binary.
pub struct PageRenderer {
    tera: Tera,
    site_title: String,
}

impl PageRenderer {
    pub fn new(site_title: impl Into<String>) -> Result<Self, ViewError> {
        let mut tera = Tera::default();
        tera.add_raw_templates(TEMPLATES)?;
        Ok(Self {
            tera,
            site_title: site_title.into(),
        })
    }

    fn page_context(&self, draft: bool) -> Context {
        let mut context = Context::new();
        context.insert("site_title", &self.site_title);
        context.insert("draft", &draft);
        context
    }

    pub fn index_shell(&self, draft: bool) -> Result<IndexShell, ViewError> {
        let mut context = self.page_context(draft);
        context.insert("skeleton_count", &SKELETON_CARDS);
        let page = self.tera.render("index.html", &context)?;
        let (head, tail) = page
            .split_once(STREAM_MARKER)
            .ok_or(ViewError::MissingStreamMarker("index.html"))?;
        Ok(IndexShell {
            head: head.to_string(),
            tail: tail.to_string(),
        })
    }

    pub fn article_list(&self, articles: &[ArticleCardView]) -> Result<String, ViewError> {
        let context = Context::from_serialize(ListContext {
            articles,
            failed: false,
        })?;
        Ok(self.tera.render("article_list.html", &context)?)
    }

    pub fn article_list_failed(&self) -> Result<String, ViewError> {
        let context = Context::from_serialize(ListContext {
            articles: &[],
            failed: true,
        })?;
        Ok(self.tera.render("article_list.html", &context)?)
    }

    pub fn article(&self, article: &ArticleDetailView, draft: bool) -> Result<String, ViewError> {
        let mut context = self.page_context(draft);
        context.insert("article", article);
        Ok(self.tera.render("article.html", &context)?)
    }

    pub fn not_found(&self) -> Result<String, ViewError> {
        Ok(self.tera.render("not_found.html", &self.page_context(false))?)
    }

    pub fn error(&self, message: &str) -> Result<String, ViewError> {
        let mut context = self.page_context(false);
        context.insert("message", message);
        Ok(self.tera.render("error.html", &context)?)
    }
}
