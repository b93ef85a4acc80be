use std::sync::Arc;

use super::{
    ArticleQueryService, GetArticleBySlugQuery, ListArticlesQuery, suggested::next_after,
};
use crate::{
    application::{
        ApplicationResult,
        dto::Tagged,
        ports::cache::{CachedContent, TaggedCache},
    },
    domain::article::Article,
};

/// Article reads as the pages consume them.
///
/// Published reads go through the tagged cache; a miss runs the query and then registers the
/// result under the tags the query reported. Draft reads always hit the CMS. Misses for a slug
/// are not cached, so a later publish of that slug shows up without revalidation.
pub struct CachedArticleReader {
    queries: Arc<ArticleQueryService>,
    cache: Arc<dyn TaggedCache>,
    list_limit: u32,
}

impl CachedArticleReader {
    pub fn new(
        queries: Arc<ArticleQueryService>,
        cache: Arc<dyn TaggedCache>,
        list_limit: u32,
    ) -> Self {
        Self {
            queries,
            cache,
            list_limit,
        }
    }

    fn listing_query(&self, draft: bool) -> ListArticlesQuery {
        ListArticlesQuery {
            draft,
            limit: Some(self.list_limit),
        }
    }

    pub async fn list_articles(&self, draft: bool) -> ApplicationResult<Arc<Vec<Article>>> {
        let query = self.listing_query(draft);
        if draft {
            let tagged = self.queries.list_articles(query).await?;
            return Ok(Arc::new(tagged.into_value()));
        }

        let key = format!("articles:list:{}", query.effective_limit());
        if let Some(CachedContent::Listing(articles)) = self.cache.get(&key).await {
            tracing::debug!(%key, "article listing served from cache");
            return Ok(articles);
        }

        let since = self.cache.generation();
        let tagged = self.queries.list_articles(query).await?.map(Arc::new);
        self.register(key, CachedContent::Listing(Arc::clone(&tagged.value)), &tagged, since)
            .await;
        Ok(tagged.value)
    }

    pub async fn article_by_slug(
        &self,
        slug: &str,
        draft: bool,
    ) -> ApplicationResult<Option<Arc<Article>>> {
        let query = GetArticleBySlugQuery {
            slug: slug.to_string(),
            draft,
        };
        if draft {
            let found = self.queries.get_article_by_slug(query).await?;
            return Ok(found.map(|tagged| Arc::new(tagged.into_value())));
        }

        let key = format!("articles:slug:{slug}");
        if let Some(CachedContent::Single(article)) = self.cache.get(&key).await {
            tracing::debug!(%key, "article served from cache");
            return Ok(Some(article));
        }

        let since = self.cache.generation();
        let Some(tagged) = self.queries.get_article_by_slug(query).await? else {
            return Ok(None);
        };
        let tagged = tagged.map(Arc::new);
        self.register(key, CachedContent::Single(Arc::clone(&tagged.value)), &tagged, since)
            .await;
        Ok(Some(tagged.value))
    }

    /// The "for you" article shown under `current_slug`.
    pub async fn suggested_article(
        &self,
        current_slug: &str,
        draft: bool,
    ) -> ApplicationResult<Option<Article>> {
        let articles = self.list_articles(draft).await?;
        Ok(next_after(&articles, current_slug).cloned())
    }

    /// Populate the cache with the published listing and every listed article.
    /// Returns how many articles were fetched.
    pub async fn prefetch(&self) -> ApplicationResult<usize> {
        let articles = self.list_articles(false).await?;
        let mut fetched = 0;
        for article in articles.iter() {
            match self.article_by_slug(article.slug.as_str(), false).await {
                Ok(Some(_)) => fetched += 1,
                Ok(None) => {
                    tracing::warn!(slug = %article.slug, "listed article vanished during prefetch");
                }
                Err(err) => {
                    tracing::warn!(slug = %article.slug, error = %err, "article prefetch failed");
                }
            }
        }
        Ok(fetched)
    }

    async fn register<T>(
        &self,
        key: String,
        content: CachedContent,
        tagged: &Tagged<T>,
        since: u64,
    ) {
        tracing::debug!(
            %key,
            tags = ?tagged.tags.iter().collect::<Vec<_>>(),
            "registering cache entry"
        );
        if !self.cache.insert(key, content, &tagged.tags, since).await {
            tracing::debug!("cache entry superseded by a revalidation");
        }
    }
}
