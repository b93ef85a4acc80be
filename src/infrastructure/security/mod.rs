// src/infrastructure/security/mod.rs
pub mod draft_token;
pub mod secret;

pub use draft_token::HmacDraftTokens;
pub use secret::SharedSecret;
