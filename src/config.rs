// src/config.rs
use crate::infrastructure::{
    cache::{DEFAULT_MAX_ENTRIES, DEFAULT_TTL_SECS},
    contentful::{
        ContentfulSettings,
        registry::{DEFAULT_ENVIRONMENT, DEFAULT_GRAPHQL_URL},
    },
};
use crate::application::queries::articles::{DEFAULT_LIMIT, MAX_LIMIT};
use std::{env, str::FromStr, time::Duration};
use thiserror::Error;

pub const DEFAULT_SITE_TITLE: &str = "Knowledge Articles";

#[derive(Clone)]
pub struct AppConfig {
    listen_addr: String,
    contentful: ContentfulSettings,
    preview_secret: Option<String>,
    revalidate_secret: Option<String>,
    list_limit: u32,
    cache_ttl: Duration,
    cache_max_entries: u64,
    site_title: String,
    prefetch_on_start: bool,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

fn default_listen_addr() -> String {
    "127.0.0.1:3000".into()
}

impl AppConfig {
    /// Build configuration from environment variables. CMS credentials are optional here; the
    /// content client reports them when a request first needs them.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Allow dotenv files to populate env vars when present.
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`AppConfig::from_env`] over an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let contentful = ContentfulSettings {
            space_id: non_empty("CONTENTFUL_SPACE_ID"),
            environment: non_empty("CONTENTFUL_ENVIRONMENT")
                .unwrap_or_else(|| DEFAULT_ENVIRONMENT.to_string()),
            graphql_url: non_empty("CONTENTFUL_GRAPHQL_URL")
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or_else(|| DEFAULT_GRAPHQL_URL.to_string()),
            access_token: non_empty("CONTENTFUL_ACCESS_TOKEN"),
            preview_access_token: non_empty("CONTENTFUL_PREVIEW_ACCESS_TOKEN"),
        };

        let list_limit = parse_or(non_empty("ARTICLE_LIST_LIMIT"), "ARTICLE_LIST_LIMIT", DEFAULT_LIMIT)?;
        if list_limit == 0 || list_limit > MAX_LIMIT {
            return Err(ConfigError::Invalid(format!(
                "ARTICLE_LIST_LIMIT must be between 1 and {MAX_LIMIT}"
            )));
        }

        let cache_ttl_secs = parse_or(non_empty("CACHE_TTL_SECONDS"), "CACHE_TTL_SECONDS", DEFAULT_TTL_SECS)?;
        let cache_max_entries = parse_or(
            non_empty("CACHE_MAX_ENTRIES"),
            "CACHE_MAX_ENTRIES",
            DEFAULT_MAX_ENTRIES,
        )?;

        let prefetch_on_start = non_empty("PREFETCH_ON_START")
            .map(|v| !(v == "0" || v.eq_ignore_ascii_case("false")))
            .unwrap_or(true);

        Ok(Self {
            listen_addr: non_empty("LISTEN_ADDR").unwrap_or_else(default_listen_addr),
            contentful,
            preview_secret: non_empty("CONTENTFUL_PREVIEW_SECRET"),
            revalidate_secret: non_empty("CONTENTFUL_REVALIDATE_SECRET"),
            list_limit,
            cache_ttl: Duration::from_secs(cache_ttl_secs),
            cache_max_entries,
            site_title: non_empty("SITE_TITLE").unwrap_or_else(|| DEFAULT_SITE_TITLE.to_string()),
            prefetch_on_start,
        })
    }

    pub fn listen_addr(&self) -> &str {
        &self.listen_addr
    }

    pub fn contentful_settings(&self) -> &ContentfulSettings {
        &self.contentful
    }

    pub fn preview_secret(&self) -> Option<&str> {
        self.preview_secret.as_deref()
    }

    pub fn revalidate_secret(&self) -> Option<&str> {
        self.revalidate_secret.as_deref()
    }

    pub fn list_limit(&self) -> u32 {
        self.list_limit
    }

    pub fn cache_ttl(&self) -> Duration {
        self.cache_ttl
    }

    pub fn cache_max_entries(&self) -> u64 {
        self.cache_max_entries
    }

    pub fn site_title(&self) -> &str {
        &self.site_title
    }

    /// Whether to warm the published cache in the background at startup.
    pub fn prefetch_on_start(&self) -> bool {
        self.prefetch_on_start
    }
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("listen_addr", &self.listen_addr)
            .field("contentful", &self.contentful)
            .field("preview_secret", &self.preview_secret.as_ref().map(|_| "<redacted>"))
            .field("revalidate_secret", &self.revalidate_secret.as_ref().map(|_| "<redacted>"))
            .field("list_limit", &self.list_limit)
            .field("cache_ttl", &self.cache_ttl)
            .field("cache_max_entries", &self.cache_max_entries)
            .field("site_title", &self.site_title)
            .field("prefetch_on_start", &self.prefetch_on_start)
            .finish()
    }
}

fn parse_or<T: FromStr>(value: Option<String>, key: &str, default: T) -> Result<T, ConfigError> {
    match value {
        None => Ok(default),
        Some(raw) => raw
            .parse::<T>()
            .map_err(|_| ConfigError::Invalid(format!("{key} must be a number, got {raw:?}"))),
    }
}
