use crate::application::{
    ApplicationResult, error::ApplicationError, ports::security::DraftTokenIssuer,
};
use base64::{Engine as _, engine::general_purpose::URL_SAFE_NO_PAD};
use hmac::{Hmac, Mac};
use sha2::Sha256;

type HmacSha256 = Hmac<Sha256>;

const DRAFT_TOKEN_CONTEXT: &[u8] = b"knowledge-articles:draft-mode:v1";

/// Draft cookie values are an HMAC over a fixed context, keyed by the preview secret, so the
/// cookie cannot be forged and rotating the secret revokes every draft session.
pub struct HmacDraftTokens {
    key: Option<Vec<u8>>,
}

impl HmacDraftTokens {
    pub fn new(preview_secret: Option<&str>) -> Self {
        Self {
            key: preview_secret
                .filter(|s| !s.is_empty())
                .map(|s| s.as_bytes().to_vec()),
        }
    }

    fn mac(&self) -> Option<HmacSha256> {
        let key = self.key.as_deref()?;
        let mut mac = HmacSha256::new_from_slice(key).ok()?;
        mac.update(DRAFT_TOKEN_CONTEXT);
        Some(mac)
    }
}

impl DraftTokenIssuer for HmacDraftTokens {
    fn issue(&self) -> ApplicationResult<String> {
        let mac = self
            .mac()
            .ok_or_else(|| ApplicationError::infrastructure("draft mode is not configured"))?;
        Ok(URL_SAFE_NO_PAD.encode(mac.finalize().into_bytes()))
    }

    fn verify(&self, token: &str) -> bool {
        let Some(mac) = self.mac() else {
            return false;
        };
        let Ok(signature) = URL_SAFE_NO_PAD.decode(token) else {
            return false;
        };
        mac.verify_slice(&signature).is_ok()
    }
}
