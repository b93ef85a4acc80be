// tests/support/helpers.rs
use super::mocks::{FixedClock, RecordingCache, StubContent, StubProvider};
use axum::{
    Router,
    body::{self, Body},
    http::{Request, Response, StatusCode},
};
use knowledge_articles::{
    application::{
        ports::{
            ClockPort, ContentClientProviderPort, DraftTokenIssuerPort, SecretVerifierPort,
            TaggedCachePort, security::DraftTokenIssuer,
        },
        services::ApplicationServices,
    },
    domain::article::Article,
    infrastructure::security::{HmacDraftTokens, SharedSecret},
    presentation::{
        http::{routes::build_router_with_rate_limiter, state::HttpState},
        views::PageRenderer,
    },
};
use serde_json::Value;
use std::sync::Arc;
use tower::util::ServiceExt as _;

pub const PREVIEW_SECRET: &str = "preview-secret";
pub const REVALIDATE_SECRET: &str = "revalidate-secret";
pub const LIST_LIMIT: u32 = 3;

pub struct TestApp {
    pub router: Router,
    pub content: Arc<StubContent>,
    pub cache: Arc<RecordingCache>,
}

impl TestApp {
    pub async fn send(&self, request: Request<Body>) -> Response<Body> {
        self.router.clone().oneshot(request).await.unwrap()
    }

    pub async fn get(&self, uri: &str) -> Response<Body> {
        self.send(Request::get(uri).body(Body::empty()).unwrap()).await
    }

    pub async fn get_with_cookie(&self, uri: &str, cookie: &str) -> Response<Body> {
        self.send(
            Request::get(uri)
                .header("cookie", cookie)
                .body(Body::empty())
                .unwrap(),
        )
        .await
    }
}

pub fn build_test_app(published: Vec<Article>, preview: Vec<Article>) -> TestApp {
    let content = StubContent::new(published, preview);
    let cache = Arc::new(RecordingCache::default());

    let providers: Arc<ContentClientProviderPort> = Arc::new(StubProvider(Arc::clone(&content)));
    let tagged_cache: Arc<TaggedCachePort> = cache.clone();
    let preview_secret: Arc<SecretVerifierPort> =
        Arc::new(SharedSecret::new(Some(PREVIEW_SECRET.to_string())));
    let revalidate_secret: Arc<SecretVerifierPort> =
        Arc::new(SharedSecret::new(Some(REVALIDATE_SECRET.to_string())));
    let draft_tokens: Arc<DraftTokenIssuerPort> =
        Arc::new(HmacDraftTokens::new(Some(PREVIEW_SECRET)));
    let clock: Arc<ClockPort> = Arc::new(FixedClock);

    let services = Arc::new(ApplicationServices::new(
        providers,
        tagged_cache,
        preview_secret,
        revalidate_secret,
        draft_tokens,
        clock,
        LIST_LIMIT,
    ));
    let views = Arc::new(PageRenderer::new("Knowledge Articles").unwrap());
    let state = HttpState { services, views };

    TestApp {
        router: build_router_with_rate_limiter(state, false),
        content,
        cache,
    }
}

pub fn make_test_app() -> TestApp {
    build_test_app(super::builders::sample_articles(), Vec::new())
}

/// A `Cookie` header value carrying a valid draft token.
pub fn draft_cookie() -> String {
    let token = HmacDraftTokens::new(Some(PREVIEW_SECRET)).issue().unwrap();
    format!("draft_mode={token}")
}

pub async fn body_string(resp: Response<Body>) -> String {
    let bytes = body::to_bytes(resp.into_body(), 1024 * 1024).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

pub async fn body_json(resp: Response<Body>) -> Value {
    let bytes = body::to_bytes(resp.into_body(), 1024 * 1024).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

/// Assert that a response is an ErrorResponse JSON with the expected status and error string.
pub async fn assert_error_response(resp: Response<Body>, expected_status: StatusCode, expected_error: &str) {
    assert_eq!(resp.status(), expected_status);
    let v = body_json(resp).await;
    assert_eq!(v.get("error").and_then(Value::as_str), Some(expected_error));
    assert!(v.get("message").and_then(Value::as_str).is_some());
}
