// src/presentation/http/controllers/pages.rs
use crate::presentation::http::{
    error::{PageError, PageResult},
    extractors::DraftMode,
    state::HttpState,
};
use crate::presentation::views::{ArticleCardView, ArticleDetailView};
use axum::{
    Extension,
    body::Body,
    extract::Path,
    http::header,
    response::{Html, IntoResponse, Response},
};
use std::{convert::Infallible, sync::Arc};

/// List page. The layout and skeleton cards go out first; the cards follow once the CMS
/// answers, inside a `<template>` that an inline script swaps in.
pub async fn index(
    Extension(state): Extension<HttpState>,
    DraftMode(draft): DraftMode,
) -> PageResult<Response> {
    let shell = state
        .views
        .index_shell(draft)
        .map_err(|err| PageError::failure(Arc::clone(&state.views), err))?;
    let reader = Arc::clone(&state.services.article_reader);
    let views = Arc::clone(&state.views);

    let body = async_stream::stream! {
        yield Ok::<_, Infallible>(shell.head);

        let fragment = match reader.list_articles(draft).await {
            Ok(articles) => {
                let cards: Vec<ArticleCardView> =
                    articles.iter().map(ArticleCardView::from).collect();
                views.article_list(&cards)
            }
            Err(err) => {
                tracing::error!(error = %err, draft, "failed to fetch articles");
                views.article_list_failed()
            }
        };
        match fragment {
            Ok(html) => yield Ok(html),
            Err(err) => tracing::error!(error = %err, "article list rendering failed"),
        }

        yield Ok(shell.tail);
    };

    Ok((
        [(header::CONTENT_TYPE, "text/html; charset=utf-8")],
        Body::from_stream(body),
    )
        .into_response())
}

pub async fn article(
    Extension(state): Extension<HttpState>,
    DraftMode(draft): DraftMode,
    Path(slug): Path<String>,
) -> PageResult<Html<String>> {
    let reader = &state.services.article_reader;
    let (article, suggestion) = tokio::join!(
        reader.article_by_slug(&slug, draft),
        reader.suggested_article(&slug, draft)
    );

    let page_error = |err| PageError::from_error(Arc::clone(&state.views), err);
    let Some(article) = article.map_err(page_error)? else {
        tracing::info!(%slug, draft, "article not found");
        return Err(PageError::not_found(Arc::clone(&state.views)));
    };
    let suggestion = suggestion.map_err(page_error)?;

    let view = ArticleDetailView::new(&article, suggestion.as_ref());
    state
        .views
        .article(&view, draft)
        .map(Html)
        .map_err(|err| PageError::failure(Arc::clone(&state.views), err))
}

pub async fn not_found(Extension(state): Extension<HttpState>) -> PageError {
    PageError::not_found(state.views)
}
