use crate::application::error::ApplicationError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ContentfulError {
    #[error("{0} must be set")]
    MissingSetting(&'static str),
    #[error("invalid Contentful endpoint: {0}")]
    Endpoint(#[from] url::ParseError),
    #[error("request to Contentful failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("Contentful responded with status {status}: {body}")]
    Status { status: u16, body: String },
    #[error("Contentful GraphQL error: {0}")]
    GraphQl(String),
}

impl From<ContentfulError> for ApplicationError {
    fn from(err: ContentfulError) -> Self {
        Self::infrastructure(err.to_string())
    }
}
