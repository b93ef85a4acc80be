pub mod entity;
pub mod value_objects;

pub use entity::{Article, ImageRef};
pub use value_objects::{ArticleId, ArticleSlug, ArticleTitle};
