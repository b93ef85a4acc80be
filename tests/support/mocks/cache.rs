// tests/support/mocks/cache.rs
use async_trait::async_trait;
use knowledge_articles::{
    application::ports::cache::{CachedContent, TaggedCache},
    domain::cache_tags::CacheTagSet,
    infrastructure::cache::MokaTaggedCache,
};
use std::sync::Mutex;

/// Real tagged cache that also records every invalidated tag.
#[derive(Default)]
pub struct RecordingCache {
    inner: MokaTaggedCache,
    invalidated: Mutex<Vec<String>>,
}

impl RecordingCache {
    pub fn invalidated(&self) -> Vec<String> {
        self.invalidated.lock().unwrap().clone()
    }
}

#[async_trait]
impl TaggedCache for RecordingCache {
    async fn get(&self, key: &str) -> Option<CachedContent> {
        self.inner.get(key).await
    }

    fn generation(&self) -> u64 {
        self.inner.generation()
    }

    async fn insert(
        &self,
        key: String,
        content: CachedContent,
        tags: &CacheTagSet,
        since: u64,
    ) -> bool {
        self.inner.insert(key, content, tags, since).await
    }

    async fn invalidate_tag(&self, tag: &str) -> usize {
        self.invalidated.lock().unwrap().push(tag.to_string());
        self.inner.invalidate_tag(tag).await
    }
}
