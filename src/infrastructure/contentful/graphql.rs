//! Wire types for the Contentful GraphQL Content API.

use super::error::ContentfulError;
use crate::application::ports::content::ArticleFilter;
use crate::domain::rich_text::Document;
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

/// Fixed field set requested for every article.
pub const ARTICLE_COLLECTION_QUERY: &str = r"
query KnowledgeArticles($where: KnowledgeArticleFilter, $limit: Int, $preview: Boolean) {
  knowledgeArticleCollection(where: $where, order: [date_DESC], limit: $limit, preview: $preview) {
    items {
      sys { id }
      title
      slug
      summary
      details {
        json
        links {
          assets {
            block {
              sys { id }
              url
              description
              width
              height
            }
          }
        }
      }
      date
      authorName
      categoryName
      articleImage { url }
    }
  }
}
";

#[derive(Debug, Serialize)]
pub struct GraphQlRequest {
    pub query: &'static str,
    pub variables: CollectionVariables,
}

#[derive(Debug, Serialize)]
pub struct CollectionVariables {
    #[serde(rename = "where")]
    pub filter: Value,
    pub limit: u32,
    pub preview: bool,
}

impl GraphQlRequest {
    pub fn for_filter(filter: &ArticleFilter, preview: bool) -> Self {
        let (filter, limit) = match filter {
            ArticleFilter::Latest { limit } => (json!({ "slug_exists": true }), *limit),
            ArticleFilter::BySlug(slug) => (json!({ "slug": slug.as_str() }), 1),
        };
        Self {
            query: ARTICLE_COLLECTION_QUERY,
            variables: CollectionVariables {
                filter,
                limit,
                preview,
            },
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct GraphQlResponse {
    #[serde(default)]
    pub data: Option<CollectionData>,
    #[serde(default)]
    pub errors: Vec<GraphQlErrorMessage>,
}

#[derive(Debug, Deserialize)]
pub struct GraphQlErrorMessage {
    pub message: String,
}

#[derive(Debug, Deserialize)]
pub struct CollectionData {
    #[serde(rename = "knowledgeArticleCollection", default)]
    pub collection: Option<RawCollection>,
}

#[derive(Debug, Default, Deserialize)]
pub struct RawCollection {
    #[serde(default)]
    pub items: Vec<Option<RawArticle>>,
}

impl GraphQlResponse {
    /// The article collection, or an empty one when the path is absent. Errors fail the call
    /// only when no data came back with them.
    pub fn into_collection(self) -> Result<RawCollection, ContentfulError> {
        let messages = self
            .errors
            .iter()
            .map(|err| err.message.as_str())
            .collect::<Vec<_>>()
            .join("; ");

        match self.data {
            Some(data) => {
                if !messages.is_empty() {
                    tracing::warn!(errors = %messages, "Contentful returned partial errors");
                }
                Ok(data.collection.unwrap_or_default())
            }
            None if !messages.is_empty() => Err(ContentfulError::GraphQl(messages)),
            None => Ok(RawCollection::default()),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct RawSys {
    #[serde(default)]
    pub id: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawArticle {
    #[serde(default)]
    pub sys: Option<RawSys>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub slug: Option<String>,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub details: Option<RawRichText>,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub author_name: Option<String>,
    #[serde(default)]
    pub category_name: Option<String>,
    #[serde(default)]
    pub article_image: Option<RawImage>,
}

#[derive(Debug, Deserialize)]
pub struct RawRichText {
    #[serde(default)]
    pub json: Option<Document>,
    #[serde(default)]
    pub links: Option<RawRichTextLinks>,
}

#[derive(Debug, Deserialize)]
pub struct RawRichTextLinks {
    #[serde(default)]
    pub assets: Option<RawAssetLinks>,
}

#[derive(Debug, Deserialize)]
pub struct RawAssetLinks {
    #[serde(default)]
    pub block: Vec<Option<RawAsset>>,
}

#[derive(Debug, Deserialize)]
pub struct RawAsset {
    #[serde(default)]
    pub sys: Option<RawSys>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub width: Option<u32>,
    #[serde(default)]
    pub height: Option<u32>,
}

#[derive(Debug, Deserialize)]
pub struct RawImage {
    #[serde(default)]
    pub url: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::article::ArticleSlug;

    #[test]
    fn slug_goes_into_variables_not_query_text() {
        let slug = ArticleSlug::new("a\" } evil { \"").unwrap();
        let request = GraphQlRequest::for_filter(&ArticleFilter::BySlug(slug), true);
        let body = serde_json::to_value(&request).unwrap();

        assert_eq!(body["variables"]["where"]["slug"], "a\" } evil { \"");
        assert_eq!(body["variables"]["limit"], 1);
        assert_eq!(body["variables"]["preview"], true);
        assert!(!request.query.contains("evil"));
    }

    #[test]
    fn listing_filters_on_slug_presence() {
        let request = GraphQlRequest::for_filter(&ArticleFilter::Latest { limit: 3 }, false);
        let body = serde_json::to_value(&request).unwrap();
        assert_eq!(body["variables"]["where"], json!({ "slug_exists": true }));
        assert_eq!(body["variables"]["limit"], 3);
        assert_eq!(body["variables"]["preview"], false);
    }

    #[test]
    fn errors_without_data_fail() {
        let response: GraphQlResponse = serde_json::from_value(json!({
            "errors": [{ "message": "bad token" }, { "message": "try again" }]
        }))
        .unwrap();
        let err = response.into_collection().unwrap_err();
        assert_eq!(err.to_string(), "Contentful GraphQL error: bad token; try again");
    }

    #[test]
    fn missing_collection_is_empty() {
        let response: GraphQlResponse =
            serde_json::from_value(json!({ "data": { "knowledgeArticleCollection": null } }))
                .unwrap();
        assert!(response.into_collection().unwrap().items.is_empty());
    }
}
