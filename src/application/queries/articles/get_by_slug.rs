use super::ArticleQueryService;
use crate::{
    application::{ApplicationResult, dto::Tagged, ports::content::ArticleFilter},
    domain::{
        article::{Article, ArticleSlug},
        cache_tags::CacheTagSet,
    },
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GetArticleBySlugQuery {
    pub slug: String,
    pub draft: bool,
}

impl ArticleQueryService {
    /// `Ok(None)` when no entry carries the slug.
    pub async fn get_article_by_slug(
        &self,
        query: GetArticleBySlugQuery,
    ) -> ApplicationResult<Option<Tagged<Article>>> {
        let slug = ArticleSlug::new(query.slug)?;
        let client = self.client_for(query.draft)?;
        let entries = client
            .fetch_articles(&ArticleFilter::BySlug(slug.clone()))
            .await?;

        let Some(article) = entries.into_iter().find(|article| article.slug == slug) else {
            tracing::debug!(slug = %slug, mode = %client.mode(), "no article for slug");
            return Ok(None);
        };

        let tags = CacheTagSet::for_articles([&article]);
        Ok(Some(Tagged::new(article, tags)))
    }
}
