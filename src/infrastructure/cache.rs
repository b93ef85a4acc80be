//! In-process response cache with a tag index.

use crate::application::ports::cache::{CachedContent, TaggedCache};
use crate::domain::cache_tags::CacheTagSet;
use async_trait::async_trait;
use dashmap::DashMap;
use moka::future::Cache;
use std::{
    collections::HashSet,
    sync::atomic::{AtomicU64, Ordering},
    time::Duration,
};
use tracing::debug;

pub const DEFAULT_TTL_SECS: u64 = 300;
pub const DEFAULT_MAX_ENTRIES: u64 = 1_000;

pub struct MokaTaggedCache {
    entries: Cache<String, CachedContent>,
    /// tag -> keys registered under it. Keys evicted by TTL may linger here until the tag is
    /// invalidated; invalidating a missing key is a no-op.
    tags: DashMap<String, HashSet<String>>,
    generation: AtomicU64,
    /// tag -> generation of its latest invalidation.
    invalidated_at: DashMap<String, u64>,
}

impl MokaTaggedCache {
    pub fn new(ttl: Duration, max_entries: u64) -> Self {
        let entries = Cache::builder()
            .max_capacity(max_entries)
            .time_to_live(ttl)
            .build();

        Self {
            entries,
            tags: DashMap::new(),
            generation: AtomicU64::new(0),
            invalidated_at: DashMap::new(),
        }
    }

    fn invalidated_since(&self, tags: &CacheTagSet, since: u64) -> bool {
        tags.iter().any(|tag| {
            self.invalidated_at
                .get(tag)
                .is_some_and(|generation| *generation > since)
        })
    }
}

impl Default for MokaTaggedCache {
    fn default() -> Self {
        Self::new(Duration::from_secs(DEFAULT_TTL_SECS), DEFAULT_MAX_ENTRIES)
    }
}

#[async_trait]
impl TaggedCache for MokaTaggedCache {
    async fn get(&self, key: &str) -> Option<CachedContent> {
        let hit = self.entries.get(key).await;
        debug!(key = %key, hit = hit.is_some(), "cache lookup");
        hit
    }

    fn generation(&self) -> u64 {
        self.generation.load(Ordering::Acquire)
    }

    async fn insert(
        &self,
        key: String,
        content: CachedContent,
        tags: &CacheTagSet,
        since: u64,
    ) -> bool {
        if self.invalidated_since(tags, since) {
            debug!(key = %key, since, "skipping cache entry fetched before an invalidation");
            return false;
        }

        for tag in tags.iter() {
            self.tags
                .entry(tag.to_string())
                .or_default()
                .insert(key.clone());
        }
        self.entries.insert(key.clone(), content).await;

        // An invalidation may have landed between the check and the insert.
        if self.invalidated_since(tags, since) {
            self.entries.remove(&key).await;
            debug!(key = %key, since, "dropped cache entry invalidated while inserting");
            return false;
        }
        true
    }

    async fn invalidate_tag(&self, tag: &str) -> usize {
        let generation = self.generation.fetch_add(1, Ordering::AcqRel) + 1;
        self.invalidated_at.insert(tag.to_string(), generation);

        let Some((_, keys)) = self.tags.remove(tag) else {
            debug!(tag = %tag, "no cache entries registered for tag");
            return 0;
        };

        let mut evicted = 0;
        for key in &keys {
            if self.entries.remove(key).await.is_some() {
                evicted += 1;
            }
        }
        debug!(tag = %tag, keys = keys.len(), evicted, "tag invalidated");
        evicted
    }
}
