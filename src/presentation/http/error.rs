use crate::{
    application::{ApplicationResult, error::ApplicationError},
    presentation::views::PageRenderer,
};
use axum::{
    Json,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use utoipa::ToSchema;

/// JSON error for the `/api/*` endpoints.
#[derive(Debug)]
pub struct HttpError {
    status: StatusCode,
    message: String,
}

impl HttpError {
    pub fn from_error(err: ApplicationError) -> Self {
        match err {
            ApplicationError::Validation(msg) => Self::new(StatusCode::BAD_REQUEST, msg),
            ApplicationError::NotFound(msg) => Self::new(StatusCode::NOT_FOUND, msg),
            ApplicationError::Unauthorized(msg) => Self::new(StatusCode::UNAUTHORIZED, msg),
            ApplicationError::Infrastructure(msg) => {
                tracing::error!(error = %msg, "request failed");
                Self::new(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
            ApplicationError::Domain(domain_err) => {
                Self::new(StatusCode::BAD_REQUEST, domain_err.to_string())
            }
        }
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    fn new(status: StatusCode, message: String) -> Self {
        Self { status, message }
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let payload = ErrorResponse {
            error: self
                .status
                .canonical_reason()
                .unwrap_or("error")
                .to_string(),
            message: self.message,
        };
        (self.status, Json(payload)).into_response()
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}

pub type HttpResult<T> = Result<T, HttpError>;

pub trait IntoHttpResult<T> {
    fn into_http(self) -> HttpResult<T>;
}

impl<T> IntoHttpResult<T> for ApplicationResult<T> {
    fn into_http(self) -> HttpResult<T> {
        self.map_err(HttpError::from_error)
    }
}

/// HTML error for the page routes: 404 page for missing content, error page otherwise.
pub struct PageError {
    views: Arc<PageRenderer>,
    kind: PageErrorKind,
}

enum PageErrorKind {
    NotFound,
    Failure(String),
}

impl PageError {
    pub fn not_found(views: Arc<PageRenderer>) -> Self {
        Self {
            views,
            kind: PageErrorKind::NotFound,
        }
    }

    pub fn failure(views: Arc<PageRenderer>, cause: impl ToString) -> Self {
        Self {
            views,
            kind: PageErrorKind::Failure(cause.to_string()),
        }
    }

    pub fn from_error(views: Arc<PageRenderer>, err: ApplicationError) -> Self {
        match err {
            ApplicationError::NotFound(_)
            | ApplicationError::Validation(_)
            | ApplicationError::Domain(_) => Self::not_found(views),
            other => Self::failure(views, other),
        }
    }
}

impl IntoResponse for PageError {
    fn into_response(self) -> Response {
        let (status, rendered) = match &self.kind {
            PageErrorKind::NotFound => (StatusCode::NOT_FOUND, self.views.not_found()),
            PageErrorKind::Failure(cause) => {
                tracing::error!(error = %cause, "page rendering failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    self.views
                        .error("The content service is unavailable. Please try again later."),
                )
            }
        };
        match rendered {
            Ok(html) => (status, Html(html)).into_response(),
            Err(err) => {
                tracing::error!(error = %err, "error page rendering failed");
                (status, status.canonical_reason().unwrap_or("error")).into_response()
            }
        }
    }
}

pub type PageResult<T> = Result<T, PageError>;
