// tests/support/mocks/content.rs
use async_trait::async_trait;
use knowledge_articles::{
    application::{
        ApplicationResult,
        error::ApplicationError,
        ports::content::{ArticleFilter, ContentClient, ContentClientProvider, ContentMode},
    },
    domain::article::Article,
};
use std::sync::{
    Arc, Mutex,
    atomic::{AtomicBool, Ordering},
};

/// In-memory CMS with separate published and preview content.
///
/// Every fetch is recorded with the mode of the client that made it.
#[derive(Default)]
pub struct StubContent {
    published: Mutex<Vec<Article>>,
    preview: Mutex<Vec<Article>>,
    fetches: Mutex<Vec<(ContentMode, ArticleFilter)>>,
    failing: AtomicBool,
}

impl StubContent {
    pub fn new(published: Vec<Article>, preview: Vec<Article>) -> Arc<Self> {
        Arc::new(Self {
            published: Mutex::new(published),
            preview: Mutex::new(preview),
            ..Self::default()
        })
    }

    pub fn set_published(&self, articles: Vec<Article>) {
        *self.published.lock().unwrap() = articles;
    }

    pub fn fail_requests(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    pub fn fetches(&self) -> Vec<(ContentMode, ArticleFilter)> {
        self.fetches.lock().unwrap().clone()
    }

    pub fn modes(&self) -> Vec<ContentMode> {
        self.fetches().into_iter().map(|(mode, _)| mode).collect()
    }

    pub fn fetch_count(&self) -> usize {
        self.fetches.lock().unwrap().len()
    }

    fn entries(&self, mode: ContentMode) -> Vec<Article> {
        match mode {
            ContentMode::Published => self.published.lock().unwrap().clone(),
            ContentMode::Preview => self.preview.lock().unwrap().clone(),
        }
    }
}

pub struct StubClient {
    content: Arc<StubContent>,
    mode: ContentMode,
}

#[async_trait]
impl ContentClient for StubClient {
    fn mode(&self) -> ContentMode {
        self.mode
    }

    async fn fetch_articles(&self, filter: &ArticleFilter) -> ApplicationResult<Vec<Article>> {
        self.content
            .fetches
            .lock()
            .unwrap()
            .push((self.mode, filter.clone()));

        if self.content.failing.load(Ordering::SeqCst) {
            return Err(ApplicationError::infrastructure("Contentful unavailable"));
        }

        let entries = self.content.entries(self.mode);
        let found = match filter {
            ArticleFilter::Latest { limit } => {
                entries.into_iter().take(*limit as usize).collect()
            }
            ArticleFilter::BySlug(slug) => entries
                .into_iter()
                .filter(|article| article.slug == *slug)
                .take(1)
                .collect(),
        };
        Ok(found)
    }
}

/// Client registry handing out [`StubClient`]s over shared [`StubContent`].
pub struct StubProvider(pub Arc<StubContent>);

impl ContentClientProvider for StubProvider {
    fn client(&self, mode: ContentMode) -> ApplicationResult<Arc<dyn ContentClient>> {
        Ok(Arc::new(StubClient {
            content: Arc::clone(&self.0),
            mode,
        }))
    }
}
