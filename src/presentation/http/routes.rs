// src/presentation/http/routes.rs
use crate::presentation::http::state::HttpState;
use crate::presentation::http::{
    controllers::{assets, draft, pages, revalidate},
    middleware::rate_limit::rate_limit_layer,
    openapi::{self, StatusResponse},
};
use axum::{
    Extension, Router,
    routing::{get, post},
};
use tower_http::{compression::CompressionLayer, trace::TraceLayer};

pub fn build_router(state: HttpState) -> Router {
    build_router_with_rate_limiter(state, true)
}

pub fn build_router_with_rate_limiter(state: HttpState, enable_rate_limit: bool) -> Router {
    let mut api = Router::new()
        .route("/api/draft", get(draft::enable_draft))
        .route("/api/disable-draft", get(draft::disable_draft))
        .route("/api/revalidate", post(revalidate::revalidate));
    if enable_rate_limit {
        if let Some(limiter) = rate_limit_layer() {
            api = api.layer(limiter);
        }
    }

    Router::new()
        .route("/", get(pages::index))
        .route("/articles/{slug}", get(pages::article))
        .route("/placeholder.svg", get(assets::placeholder))
        .route("/health", get(health))
        .route("/api-docs/openapi.json", get(openapi::serve_openapi))
        .merge(api)
        .fallback(pages::not_found)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(Extension(state))
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service health check.", body = crate::presentation::http::openapi::StatusResponse)
    ),
    tag = "System"
)]
pub async fn health() -> axum::Json<StatusResponse> {
    axum::Json(StatusResponse {
        status: "ok".into(),
    })
}
