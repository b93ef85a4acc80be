use super::graphql::{RawArticle, RawAsset, RawCollection, RawRichText};
use crate::domain::{
    article::{Article, ArticleId, ArticleSlug, ArticleTitle, ImageRef},
    errors::{DomainError, DomainResult},
    rich_text::{Asset, AssetLinks, RichText},
};

/// Map a raw entry collection into display-valid articles, keeping upstream order.
/// Entries missing a required field are skipped with a warning.
pub fn extract_articles(collection: RawCollection) -> Vec<Article> {
    collection
        .items
        .into_iter()
        .flatten()
        .filter_map(|raw| match into_article(raw) {
            Ok(article) => Some(article),
            Err(err) => {
                tracing::warn!(error = %err, "skipping incomplete article entry");
                None
            }
        })
        .collect()
}

fn into_article(raw: RawArticle) -> DomainResult<Article> {
    let id = raw
        .sys
        .and_then(|sys| sys.id)
        .filter(|id| !id.trim().is_empty())
        .ok_or_else(|| DomainError::IncompleteEntry {
            id: "<unknown>".into(),
            field: "sys.id",
        })?;

    let title = required(raw.title, &id, "title")?;
    let slug = required(raw.slug, &id, "slug")?;
    let summary = required(raw.summary, &id, "summary")?;
    let date = required(raw.date, &id, "date")?;
    let author_name = required(raw.author_name, &id, "authorName")?;
    let category_name = required(raw.category_name, &id, "categoryName")?;

    let image = raw
        .article_image
        .and_then(|image| image.url)
        .filter(|url| !url.trim().is_empty())
        .map(|url| ImageRef {
            url: normalize_asset_url(&url),
        });

    Ok(Article {
        id: ArticleId::new(id)?,
        title: ArticleTitle::new(title)?,
        slug: ArticleSlug::new(slug)?,
        summary,
        author_name,
        category_name,
        date,
        details: raw.details.map(into_rich_text).unwrap_or_default(),
        image,
    })
}

fn required(value: Option<String>, id: &str, field: &'static str) -> DomainResult<String> {
    value
        .filter(|v| !v.trim().is_empty())
        .ok_or_else(|| DomainError::IncompleteEntry {
            id: id.to_string(),
            field,
        })
}

fn into_rich_text(raw: RawRichText) -> RichText {
    let assets = raw
        .links
        .and_then(|links| links.assets)
        .map(|assets| assets.block)
        .unwrap_or_default()
        .into_iter()
        .flatten()
        .filter_map(into_asset)
        .collect::<AssetLinks>();

    RichText {
        document: raw.json.unwrap_or_default(),
        assets,
    }
}

fn into_asset(raw: RawAsset) -> Option<Asset> {
    let id = raw.sys.and_then(|sys| sys.id)?;
    let url = raw.url.filter(|url| !url.is_empty())?;
    Some(Asset {
        id,
        url: normalize_asset_url(&url),
        description: raw.description.filter(|d| !d.is_empty()),
        width: raw.width,
        height: raw.height,
    })
}

/// Contentful may hand out protocol-relative asset URLs (`//images.ctfassets.net/...`).
pub fn normalize_asset_url(url: &str) -> String {
    if url.starts_with("//") {
        format!("https:{url}")
    } else {
        url.to_string()
    }
}
