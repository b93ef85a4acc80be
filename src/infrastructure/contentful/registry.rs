use super::client::ContentfulClient;
use crate::application::{
    ApplicationResult,
    ports::content::{ContentClient, ContentClientProvider, ContentMode},
};
use std::{
    fmt,
    sync::{Arc, OnceLock},
};

pub const DEFAULT_GRAPHQL_URL: &str = "https://graphql.contentful.com";
pub const DEFAULT_ENVIRONMENT: &str = "master";

#[derive(Clone)]
pub struct ContentfulSettings {
    pub space_id: Option<String>,
    pub environment: String,
    pub graphql_url: String,
    pub access_token: Option<String>,
    pub preview_access_token: Option<String>,
}

impl Default for ContentfulSettings {
    fn default() -> Self {
        Self {
            space_id: None,
            environment: DEFAULT_ENVIRONMENT.into(),
            graphql_url: DEFAULT_GRAPHQL_URL.into(),
            access_token: None,
            preview_access_token: None,
        }
    }
}

impl fmt::Debug for ContentfulSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ContentfulSettings")
            .field("space_id", &self.space_id)
            .field("environment", &self.environment)
            .field("graphql_url", &self.graphql_url)
            .field("access_token", &self.access_token.as_ref().map(|_| "<redacted>"))
            .field(
                "preview_access_token",
                &self.preview_access_token.as_ref().map(|_| "<redacted>"),
            )
            .finish()
    }
}

/// Lazily built, mode-keyed Contentful clients sharing one HTTP connection pool.
///
/// A missing credential surfaces on first use of that mode, not at startup, so a site without
/// a preview token still serves published content.
pub struct ContentfulClients {
    settings: ContentfulSettings,
    http: reqwest::Client,
    published: OnceLock<Arc<ContentfulClient>>,
    preview: OnceLock<Arc<ContentfulClient>>,
}

impl ContentfulClients {
    pub fn new(settings: ContentfulSettings) -> Self {
        Self::with_http_client(settings, reqwest::Client::new())
    }

    pub fn with_http_client(settings: ContentfulSettings, http: reqwest::Client) -> Self {
        Self {
            settings,
            http,
            published: OnceLock::new(),
            preview: OnceLock::new(),
        }
    }

    fn slot(&self, mode: ContentMode) -> &OnceLock<Arc<ContentfulClient>> {
        match mode {
            ContentMode::Published => &self.published,
            ContentMode::Preview => &self.preview,
        }
    }
}

impl ContentClientProvider for ContentfulClients {
    fn client(&self, mode: ContentMode) -> ApplicationResult<Arc<dyn ContentClient>> {
        let slot = self.slot(mode);
        if let Some(existing) = slot.get() {
            let client: Arc<dyn ContentClient> = existing.clone();
            return Ok(client);
        }

        // Two racing callers may both build a client; both are equivalent and only one is kept.
        let built = ContentfulClient::new(self.http.clone(), &self.settings, mode)?;
        tracing::debug!(%mode, endpoint = %built.endpoint(), "constructed Contentful client");
        let client: Arc<dyn ContentClient> = slot.get_or_init(|| Arc::new(built)).clone();
        Ok(client)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings() -> ContentfulSettings {
        ContentfulSettings {
            space_id: Some("space".into()),
            access_token: Some("published-token".into()),
            ..ContentfulSettings::default()
        }
    }

    #[test]
    fn reuses_client_per_mode() {
        let clients = ContentfulClients::new(settings());
        let first = clients.client(ContentMode::Published).unwrap();
        let second = clients.client(ContentMode::Published).unwrap();
        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(first.mode(), ContentMode::Published);
    }

    #[test]
    fn missing_preview_token_fails_fast() {
        let clients = ContentfulClients::new(settings());
        let err = clients.client(ContentMode::Preview).err().unwrap();
        assert!(
            err.to_string()
                .contains("CONTENTFUL_PREVIEW_ACCESS_TOKEN must be set")
        );
    }

    #[test]
    fn missing_space_fails_fast() {
        let clients = ContentfulClients::new(ContentfulSettings {
            space_id: None,
            ..settings()
        });
        let err = clients.client(ContentMode::Published).err().unwrap();
        assert!(err.to_string().contains("CONTENTFUL_SPACE_ID must be set"));
    }

    #[test]
    fn debug_output_redacts_tokens() {
        let rendered = format!("{:?}", settings());
        assert!(!rendered.contains("published-token"));
        assert!(rendered.contains("<redacted>"));
    }
}
