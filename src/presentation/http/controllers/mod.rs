// src/presentation/http/controllers/mod.rs
pub mod assets;
pub mod draft;
pub mod pages;
pub mod revalidate;
