use crate::application::ApplicationResult;
use crate::domain::article::{Article, ArticleSlug};
use async_trait::async_trait;
use std::fmt;
use std::sync::Arc;

/// Which side of the CMS to read: published content or drafts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContentMode {
    Published,
    Preview,
}

impl ContentMode {
    pub fn from_draft(draft: bool) -> Self {
        if draft { Self::Preview } else { Self::Published }
    }

    pub fn is_preview(self) -> bool {
        matches!(self, Self::Preview)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Published => "published",
            Self::Preview => "preview",
        }
    }
}

impl fmt::Display for ContentMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArticleFilter {
    /// Every entry that has a slug, newest first.
    Latest { limit: u32 },
    /// At most one entry with this slug.
    BySlug(ArticleSlug),
}

#[async_trait]
pub trait ContentClient: Send + Sync {
    fn mode(&self) -> ContentMode;

    /// Fetch article entries already mapped to display-valid records, in upstream order.
    async fn fetch_articles(&self, filter: &ArticleFilter) -> ApplicationResult<Vec<Article>>;
}

/// Mode-keyed access to content clients. Implementations construct each client lazily and
/// hand out the same instance for the same mode afterwards.
pub trait ContentClientProvider: Send + Sync {
    fn client(&self, mode: ContentMode) -> ApplicationResult<Arc<dyn ContentClient>>;
}
