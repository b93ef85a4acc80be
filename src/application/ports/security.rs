use crate::application::ApplicationResult;

/// Shared secret presented by a caller (query parameter or header).
pub trait SecretVerifier: Send + Sync {
    /// `false` when no secret is configured.
    fn verify(&self, candidate: &str) -> bool;
}

/// Issues and checks the value stored in the draft mode cookie.
pub trait DraftTokenIssuer: Send + Sync {
    fn issue(&self) -> ApplicationResult<String>;
    fn verify(&self, token: &str) -> bool;
}
