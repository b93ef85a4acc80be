// src/presentation/http/controllers/revalidate.rs
use crate::application::{commands::RevalidateCommand, dto::RevalidationDto, error::ApplicationError};
use crate::presentation::http::{
    error::{HttpError, HttpResult, IntoHttpResult},
    extractors::RevalidationKey,
    state::HttpState,
};
use axum::{Extension, Json, body::Bytes};
use serde::Deserialize;
use utoipa::ToSchema;

/// Publish webhook payload. Contentful sends the entry with its `sys` block; manual callers may
/// send `entityId` directly.
#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RevalidateRequest {
    #[serde(default)]
    pub entity_id: Option<String>,
    #[serde(default)]
    pub sys: Option<SysRef>,
}

#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct SysRef {
    #[serde(default)]
    pub id: Option<String>,
}

impl From<RevalidateRequest> for RevalidateCommand {
    fn from(request: RevalidateRequest) -> Self {
        let entity_id = request
            .entity_id
            .filter(|id| !id.trim().is_empty())
            .or_else(|| request.sys.and_then(|sys| sys.id));
        Self { entity_id }
    }
}

#[utoipa::path(
    post,
    path = "/api/revalidate",
    request_body = RevalidateRequest,
    params(
        ("x-vercel-reval-key" = String, Header, description = "Revalidation secret")
    ),
    responses(
        (status = 200, description = "Cached content for the entity was evicted.", body = RevalidationDto),
        (status = 400, description = "Body is not JSON or names no entity.", body = crate::presentation::http::error::ErrorResponse),
        (status = 401, description = "Missing or invalid secret.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Revalidation"
)]
pub async fn revalidate(
    Extension(state): Extension<HttpState>,
    RevalidationKey(key): RevalidationKey,
    body: Bytes,
) -> HttpResult<Json<RevalidationDto>> {
    let service = &state.services.revalidation;
    service.authorize(key.as_deref()).into_http()?;

    let request: RevalidateRequest = serde_json::from_slice(&body).map_err(|err| {
        tracing::warn!(error = %err, "invalid revalidation payload");
        HttpError::from_error(ApplicationError::validation("Invalid JSON body"))
    })?;

    let revalidated = service.revalidate(request.into()).await.into_http()?;
    Ok(Json(revalidated))
}
