// src/presentation/http/extractors.rs
use crate::{
    application::error::ApplicationError, presentation::http::state::HttpState,
};
use axum::{Extension, extract::FromRequestParts, http::request::Parts};
use headers::{Cookie, HeaderMapExt};

use super::error::HttpError;

pub const DRAFT_COOKIE: &str = "draft_mode";
pub const REVALIDATE_KEY_HEADER: &str = "x-vercel-reval-key";

/// Whether the request carries a valid draft cookie. Forged or stale tokens read as published.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DraftMode(pub bool);

/// Raw value of the revalidation secret header, if any.
#[derive(Debug, Clone)]
pub struct RevalidationKey(pub Option<String>);

async fn app_state<S: Send + Sync>(parts: &mut Parts, state: &S) -> Result<HttpState, HttpError> {
    let Extension(app_state) = Extension::<HttpState>::from_request_parts(parts, state)
        .await
        .map_err(|_| {
            HttpError::from_error(ApplicationError::Infrastructure(
                "application state missing".into(),
            ))
        })?;
    Ok(app_state)
}

impl<S> FromRequestParts<S> for DraftMode
where
    S: Send + Sync,
{
    type Rejection = HttpError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let app_state = app_state(parts, state).await?;
        let cookie = parts.headers.typed_get::<Cookie>();
        let token = cookie.as_ref().and_then(|cookie| cookie.get(DRAFT_COOKIE));
        Ok(Self(app_state.services.draft_mode.is_enabled(token)))
    }
}

impl<S> FromRequestParts<S> for RevalidationKey
where
    S: Send + Sync,
{
    type Rejection = HttpError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let key = parts
            .headers
            .get(REVALIDATE_KEY_HEADER)
            .and_then(|value| value.to_str().ok())
            .map(str::to_string);
        Ok(Self(key))
    }
}
