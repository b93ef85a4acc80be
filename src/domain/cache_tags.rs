use crate::domain::article::Article;

/// Tag attached to every article fetch, list or single.
pub const ARTICLES_TAG: &str = "articles";

/// Ordered, duplicate-free set of cache tags.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CacheTagSet(Vec<String>);

impl CacheTagSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Tags for a fetch that returned `articles`: every entry id, then [`ARTICLES_TAG`].
    pub fn for_articles<'a>(articles: impl IntoIterator<Item = &'a Article>) -> Self {
        let mut tags = Self::new();
        for article in articles {
            tags.insert(article.id.as_str());
        }
        tags.insert(ARTICLES_TAG);
        tags
    }

    pub fn insert(&mut self, tag: impl Into<String>) {
        let tag = tag.into();
        if !self.0.contains(&tag) {
            self.0.push(tag);
        }
    }

    pub fn contains(&self, tag: &str) -> bool {
        self.0.iter().any(|t| t == tag)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
