use super::ArticleQueryService;
use crate::{
    application::{ApplicationResult, dto::Tagged, ports::content::ArticleFilter},
    domain::{article::Article, cache_tags::CacheTagSet},
};

pub const DEFAULT_LIMIT: u32 = 3;
pub const MAX_LIMIT: u32 = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ListArticlesQuery {
    pub draft: bool,
    pub limit: Option<u32>,
}

impl ListArticlesQuery {
    /// Effective page size: unset or zero falls back to the default, larger values are capped.
    pub fn effective_limit(&self) -> u32 {
        match self.limit {
            None | Some(0) => DEFAULT_LIMIT,
            Some(limit) => limit.min(MAX_LIMIT),
        }
    }
}

impl ArticleQueryService {
    pub async fn list_articles(
        &self,
        query: ListArticlesQuery,
    ) -> ApplicationResult<Tagged<Vec<Article>>> {
        let client = self.client_for(query.draft)?;
        let filter = ArticleFilter::Latest {
            limit: query.effective_limit(),
        };
        let articles = client.fetch_articles(&filter).await?;

        tracing::debug!(
            mode = %client.mode(),
            count = articles.len(),
            "fetched article listing"
        );

        let tags = CacheTagSet::for_articles(&articles);
        Ok(Tagged::new(articles, tags))
    }
}
