mod cached;
mod get_by_slug;
mod list;
mod service;
pub mod suggested;

pub use cached::CachedArticleReader;
pub use get_by_slug::GetArticleBySlugQuery;
pub use list::{DEFAULT_LIMIT, ListArticlesQuery, MAX_LIMIT};
pub use service::ArticleQueryService;
