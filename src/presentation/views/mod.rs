pub mod format;
pub mod image;
pub mod models;
pub mod rich_text;
pub mod templates;

pub use models::{ArticleCardView, ArticleDetailView};
pub use templates::{IndexShell, PageRenderer, ViewError};
