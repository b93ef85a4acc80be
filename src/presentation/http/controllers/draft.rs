// src/presentation/http/controllers/draft.rs
use crate::presentation::http::{
    error::{HttpResult, IntoHttpResult},
    extractors::DRAFT_COOKIE,
    redirect::safe_redirect_target,
    state::HttpState,
};
use axum::{
    Extension,
    extract::Query,
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use serde::Deserialize;
use utoipa::IntoParams;

#[derive(Debug, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct DraftParams {
    /// Must equal the configured preview secret.
    pub secret: Option<String>,
    /// Same-origin path to land on; anything else redirects to `/`.
    pub redirect_to: Option<String>,
}

fn found(location: String, cookie: String) -> Response {
    (
        StatusCode::FOUND,
        [(header::LOCATION, location), (header::SET_COOKIE, cookie)],
    )
        .into_response()
}

#[utoipa::path(
    get,
    path = "/api/draft",
    params(DraftParams),
    responses(
        (status = 302, description = "Draft cookie set; redirects to the requested page."),
        (status = 404, description = "Missing or invalid secret.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Preview"
)]
pub async fn enable_draft(
    Extension(state): Extension<HttpState>,
    Query(params): Query<DraftParams>,
) -> HttpResult<Response> {
    let token = state
        .services
        .draft_mode
        .enable(params.secret.as_deref())
        .into_http()?;
    let target = safe_redirect_target(params.redirect_to.as_deref());
    tracing::info!(redirect_to = %target, "redirecting into draft mode");

    let cookie = format!("{DRAFT_COOKIE}={token}; Path=/; HttpOnly; SameSite=None; Secure");
    Ok(found(target, cookie))
}

#[utoipa::path(
    get,
    path = "/api/disable-draft",
    responses(
        (status = 302, description = "Draft cookie cleared; redirects to `/`.")
    ),
    tag = "Preview"
)]
pub async fn disable_draft() -> Response {
    let cookie =
        format!("{DRAFT_COOKIE}=; Path=/; HttpOnly; SameSite=None; Secure; Max-Age=0");
    found("/".to_string(), cookie)
}
