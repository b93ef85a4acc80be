use serde::Serialize;

use super::{
    format::formatted_date,
    image::ImageView,
    rich_text::{render_document, to_html},
};
use crate::domain::article::Article;
use url::Url;

/// Detail page path for `slug`, with the slug encoded as a single path segment.
pub fn article_href(slug: &str) -> String {
    let Ok(mut url) = Url::parse("http://localhost/articles") else {
        return format!("/articles/{slug}");
    };
    if let Ok(mut segments) = url.path_segments_mut() {
        segments.push(slug);
    }
    url.path().to_string()
}

#[derive(Debug, Clone, Serialize)]
pub struct ArticleCardView {
    pub title: String,
    pub slug: String,
    pub href: String,
    pub summary: String,
    pub author_name: String,
    pub category_name: String,
    pub image: ImageView,
}

impl From<&Article> for ArticleCardView {
    fn from(article: &Article) -> Self {
        Self {
            title: article.title.as_str().to_string(),
            slug: article.slug.as_str().to_string(),
            href: article_href(article.slug.as_str()),
            summary: article.summary.clone(),
            author_name: article.author_name.clone(),
            category_name: article.category_name.clone(),
            image: ImageView::cover(article.image_url(), article.title.as_str()),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ArticleDetailView {
    pub title: String,
    pub summary: String,
    pub author_name: String,
    pub category_name: String,
    /// Absent when the CMS date does not parse.
    pub date: Option<String>,
    pub image: ImageView,
    /// Pre-rendered and escaped body markup.
    pub body_html: String,
    pub suggestion: Option<ArticleCardView>,
}

impl ArticleDetailView {
    pub fn new(article: &Article, suggestion: Option<&Article>) -> Self {
        let body = render_document(&article.details.document, &article.details.assets);
        Self {
            title: article.title.as_str().to_string(),
            summary: article.summary.clone(),
            author_name: article.author_name.clone(),
            category_name: article.category_name.clone(),
            date: formatted_date(&article.date),
            image: ImageView::cover(article.image_url(), article.title.as_str()),
            body_html: to_html(&body),
            suggestion: suggestion.map(ArticleCardView::from),
        }
    }
}
