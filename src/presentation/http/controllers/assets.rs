use axum::{http::header, response::IntoResponse};

const PLACEHOLDER_SVG: &str = include_str!("../../../../assets/placeholder.svg");

/// Stand-in for articles without a cover image.
pub async fn placeholder() -> impl IntoResponse {
    (
        [
            (header::CONTENT_TYPE, "image/svg+xml"),
            (header::CACHE_CONTROL, "public, max-age=86400"),
        ],
        PLACEHOLDER_SVG,
    )
}
