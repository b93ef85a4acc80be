// src/application/services/mod.rs
use std::sync::Arc;

use crate::application::{
    commands::{DraftModeService, RevalidationService},
    ports::{
        ClockPort, ContentClientProviderPort, DraftTokenIssuerPort, SecretVerifierPort,
        TaggedCachePort,
    },
    queries::articles::{ArticleQueryService, CachedArticleReader},
};

pub struct ApplicationServices {
    pub article_reader: Arc<CachedArticleReader>,
    pub revalidation: Arc<RevalidationService>,
    pub draft_mode: Arc<DraftModeService>,
}

impl ApplicationServices {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        content_clients: Arc<ContentClientProviderPort>,
        cache: Arc<TaggedCachePort>,
        preview_secret: Arc<SecretVerifierPort>,
        revalidate_secret: Arc<SecretVerifierPort>,
        draft_tokens: Arc<DraftTokenIssuerPort>,
        clock: Arc<ClockPort>,
        list_limit: u32,
    ) -> Self {
        let article_queries = Arc::new(ArticleQueryService::new(Arc::clone(&content_clients)));

        let article_reader = Arc::new(CachedArticleReader::new(
            Arc::clone(&article_queries),
            Arc::clone(&cache),
            list_limit,
        ));

        let revalidation = Arc::new(RevalidationService::new(
            Arc::clone(&cache),
            Arc::clone(&revalidate_secret),
            Arc::clone(&clock),
        ));

        let draft_mode = Arc::new(DraftModeService::new(
            Arc::clone(&preview_secret),
            Arc::clone(&draft_tokens),
        ));

        Self {
            article_reader,
            revalidation,
            draft_mode,
        }
    }

    /// Warm the published cache, logging instead of failing.
    pub async fn prefetch_content(&self) {
        match self.article_reader.prefetch().await {
            Ok(count) => tracing::info!(count, "prefetched published articles"),
            Err(err) => tracing::warn!(error = %err, "article prefetch failed"),
        }
    }
}
