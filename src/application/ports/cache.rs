use crate::domain::{article::Article, cache_tags::CacheTagSet};
use async_trait::async_trait;
use std::sync::Arc;

#[derive(Debug, Clone)]
pub enum CachedContent {
    Listing(Arc<Vec<Article>>),
    Single(Arc<Article>),
}

/// Response cache with tag-based invalidation.
#[async_trait]
pub trait TaggedCache: Send + Sync {
    async fn get(&self, key: &str) -> Option<CachedContent>;

    /// Current invalidation generation. Take it before fetching anything destined for
    /// [`TaggedCache::insert`].
    fn generation(&self) -> u64;

    /// Store `content` under `key` and register the key with every tag in `tags`, unless one of
    /// those tags was invalidated after `since`. Returns whether the entry was kept.
    async fn insert(
        &self,
        key: String,
        content: CachedContent,
        tags: &CacheTagSet,
        since: u64,
    ) -> bool;

    /// Evict every key registered under `tag`. Returns the number of keys evicted.
    async fn invalidate_tag(&self, tag: &str) -> usize;
}
