use super::{
    error::ContentfulError,
    extract::extract_articles,
    graphql::{GraphQlRequest, GraphQlResponse},
    registry::ContentfulSettings,
};
use crate::application::{
    ApplicationResult,
    ports::content::{ArticleFilter, ContentClient, ContentMode},
};
use crate::domain::article::Article;
use async_trait::async_trait;
use url::Url;

/// GraphQL client bound to one space, environment and access token.
pub struct ContentfulClient {
    http: reqwest::Client,
    endpoint: Url,
    access_token: String,
    mode: ContentMode,
}

impl ContentfulClient {
    pub fn new(
        http: reqwest::Client,
        settings: &ContentfulSettings,
        mode: ContentMode,
    ) -> Result<Self, ContentfulError> {
        let space_id = non_empty(settings.space_id.as_deref())
            .ok_or(ContentfulError::MissingSetting("CONTENTFUL_SPACE_ID"))?;

        let access_token = match mode {
            ContentMode::Published => non_empty(settings.access_token.as_deref())
                .ok_or(ContentfulError::MissingSetting("CONTENTFUL_ACCESS_TOKEN"))?,
            ContentMode::Preview => non_empty(settings.preview_access_token.as_deref())
                .ok_or(ContentfulError::MissingSetting("CONTENTFUL_PREVIEW_ACCESS_TOKEN"))?,
        };

        let endpoint = Url::parse(&format!(
            "{}/content/v1/spaces/{}/environments/{}",
            settings.graphql_url.trim_end_matches('/'),
            space_id,
            settings.environment,
        ))?;

        Ok(Self {
            http,
            endpoint,
            access_token: access_token.to_string(),
            mode,
        })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    async fn query(&self, filter: &ArticleFilter) -> Result<Vec<Article>, ContentfulError> {
        let request = GraphQlRequest::for_filter(filter, self.mode.is_preview());

        let response = self
            .http
            .post(self.endpoint.clone())
            .bearer_auth(&self.access_token)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ContentfulError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let payload: GraphQlResponse = response.json().await?;
        Ok(extract_articles(payload.into_collection()?))
    }
}

#[async_trait]
impl ContentClient for ContentfulClient {
    fn mode(&self) -> ContentMode {
        self.mode
    }

    async fn fetch_articles(&self, filter: &ArticleFilter) -> ApplicationResult<Vec<Article>> {
        self.query(filter).await.map_err(|err| {
            tracing::error!(mode = %self.mode, error = %err, "Contentful query failed");
            err.into()
        })
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}
