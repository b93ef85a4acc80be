pub mod article;
pub mod cache_tags;
pub mod errors;
pub mod rich_text;
