// tests/support/builders.rs
use knowledge_articles::domain::{
    article::{Article, ArticleId, ArticleSlug, ArticleTitle, ImageRef},
    rich_text::{Asset, Document, Node, RichText},
};

/// 記事エンティティを組み立てるテスト用ビルダー
pub struct ArticleBuilder {
    id: String,
    title: String,
    slug: String,
    summary: String,
    date: String,
    content: Vec<Node>,
    assets: Vec<Asset>,
    image: Option<String>,
}

impl ArticleBuilder {
    pub fn new(slug: &str) -> Self {
        Self {
            id: format!("entry-{slug}"),
            title: format!("Article {slug}"),
            slug: slug.to_string(),
            summary: format!("Summary of {slug}"),
            date: "2024-01-15".to_string(),
            content: vec![Node::Paragraph(vec![Node::text("Body text")])],
            assets: Vec::new(),
            image: Some(format!("https://images.ctfassets.net/space/{slug}.png")),
        }
    }

    pub fn id(mut self, id: &str) -> Self {
        self.id = id.to_string();
        self
    }

    pub fn title(mut self, title: &str) -> Self {
        self.title = title.to_string();
        self
    }

    pub fn date(mut self, date: &str) -> Self {
        self.date = date.to_string();
        self
    }

    pub fn content(mut self, content: Vec<Node>) -> Self {
        self.content = content;
        self
    }

    pub fn asset(mut self, asset: Asset) -> Self {
        self.assets.push(asset);
        self
    }

    pub fn without_image(mut self) -> Self {
        self.image = None;
        self
    }

    pub fn build(self) -> Article {
        Article {
            id: ArticleId::new(self.id).unwrap(),
            title: ArticleTitle::new(self.title).unwrap(),
            slug: ArticleSlug::new(self.slug).unwrap(),
            summary: self.summary,
            author_name: "Ada Lovelace".to_string(),
            category_name: "Guides".to_string(),
            date: self.date,
            details: RichText {
                document: Document {
                    content: self.content,
                },
                assets: self.assets.into_iter().collect(),
            },
            image: self.image.map(|url| ImageRef { url }),
        }
    }
}

pub fn article(slug: &str) -> Article {
    ArticleBuilder::new(slug).build()
}

/// 公開済みの記事三件 (alpha, beta, gamma)
pub fn sample_articles() -> Vec<Article> {
    ["alpha", "beta", "gamma"].into_iter().map(article).collect()
}
