use crate::application::ports::security::SecretVerifier;
use subtle::ConstantTimeEq;

/// Server-side shared secret. An unset or blank secret never matches.
pub struct SharedSecret(Option<String>);

impl SharedSecret {
    pub fn new(secret: Option<String>) -> Self {
        Self(secret.filter(|s| !s.is_empty()))
    }

    pub fn is_configured(&self) -> bool {
        self.0.is_some()
    }
}

impl SecretVerifier for SharedSecret {
    fn verify(&self, candidate: &str) -> bool {
        self.0
            .as_deref()
            .is_some_and(|expected| expected.as_bytes().ct_eq(candidate.as_bytes()).into())
    }
}
