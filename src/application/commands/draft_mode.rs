use std::sync::Arc;

use crate::application::{
    ApplicationResult,
    error::ApplicationError,
    ports::security::{DraftTokenIssuer, SecretVerifier},
};

/// Draft mode is a per-browser flag carried in a signed cookie.
pub struct DraftModeService {
    secret: Arc<dyn SecretVerifier>,
    tokens: Arc<dyn DraftTokenIssuer>,
}

impl DraftModeService {
    pub fn new(secret: Arc<dyn SecretVerifier>, tokens: Arc<dyn DraftTokenIssuer>) -> Self {
        Self { secret, tokens }
    }

    /// Returns the cookie value enabling draft mode. A missing or wrong secret is reported as
    /// not found so the endpoint does not advertise itself.
    pub fn enable(&self, secret: Option<&str>) -> ApplicationResult<String> {
        let Some(secret) = secret.filter(|s| !s.is_empty()) else {
            tracing::error!("missing draft mode secret parameter");
            return Err(ApplicationError::not_found("page not found"));
        };

        if !self.secret.verify(secret) {
            tracing::error!("invalid draft mode secret");
            return Err(ApplicationError::not_found("page not found"));
        }

        let token = self.tokens.issue()?;
        tracing::info!("draft mode enabled");
        Ok(token)
    }

    pub fn is_enabled(&self, cookie: Option<&str>) -> bool {
        cookie.is_some_and(|token| self.tokens.verify(token))
    }
}
