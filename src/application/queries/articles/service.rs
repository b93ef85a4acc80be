use std::sync::Arc;

use crate::application::{
    ApplicationResult,
    ports::content::{ContentClient, ContentClientProvider, ContentMode},
};

/// Read-side article queries against the CMS.
///
/// Queries return their data together with the cache tags it was built from; they never touch
/// a cache themselves (see [`super::CachedArticleReader`]).
pub struct ArticleQueryService {
    pub(super) clients: Arc<dyn ContentClientProvider>,
}

impl ArticleQueryService {
    pub fn new(clients: Arc<dyn ContentClientProvider>) -> Self {
        Self { clients }
    }

    pub(super) fn client_for(&self, draft: bool) -> ApplicationResult<Arc<dyn ContentClient>> {
        self.clients.client(ContentMode::from_draft(draft))
    }
}
