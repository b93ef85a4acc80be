use super::value_objects::{ArticleId, ArticleSlug, ArticleTitle};
use crate::domain::rich_text::RichText;

/// Cover image reference. The binary stays with the CMS asset host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageRef {
    pub url: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Article {
    pub id: ArticleId,
    pub title: ArticleTitle,
    pub slug: ArticleSlug,
    pub summary: String,
    pub author_name: String,
    pub category_name: String,
    /// Raw CMS date string; formatting may fail and is handled at render time.
    pub date: String,
    pub details: RichText,
    pub image: Option<ImageRef>,
}

impl Article {
    pub fn image_url(&self) -> Option<&str> {
        self.image.as_ref().map(|image| image.url.as_str())
    }
}
