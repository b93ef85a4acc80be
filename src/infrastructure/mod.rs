pub mod cache;
pub mod contentful;
pub mod security;
pub mod time;
