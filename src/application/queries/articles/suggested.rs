use crate::domain::article::Article;

/// Pick the article to suggest after `current_slug`: the next one in listing order, wrapping
/// around to the first. `None` when the current article is not listed or nothing else is.
pub fn next_after<'a>(articles: &'a [Article], current_slug: &str) -> Option<&'a Article> {
    if articles.len() < 2 {
        return None;
    }
    let index = articles
        .iter()
        .position(|article| article.slug == *current_slug)?;
    articles.get((index + 1) % articles.len())
}
