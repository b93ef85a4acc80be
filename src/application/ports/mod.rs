// src/application/ports/mod.rs
pub mod cache;
pub mod content;
pub mod security;
pub mod time;

// Type aliases to make port injection sites more descriptive and reduce `dyn` noise
pub type ContentClientProviderPort = dyn content::ContentClientProvider;
pub type TaggedCachePort = dyn cache::TaggedCache;
pub type SecretVerifierPort = dyn security::SecretVerifier;
pub type DraftTokenIssuerPort = dyn security::DraftTokenIssuer;
pub type ClockPort = dyn time::Clock;
