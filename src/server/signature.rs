//! HMAC-SHA256 signature primitives for signed asset URLs.
//!
//! Every servable URL carries `expires` and `signature` query parameters;
//! the signature covers the asset's public path concatenated with the
//! decimal expiry. Only URLs signed with the server's secret are served.

use hmac::{Hmac, Mac};
use sha2::Sha256;
use std::sync::Arc;

type HmacSha256 = Hmac<Sha256>;

/// The process-wide signing key. Immutable after startup.
#[derive(Clone)]
pub struct SigningKey {
    key: Arc<[u8]>,
}

impl std::fmt::Debug for SigningKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SigningKey").field("key", &"[REDACTED]").finish()
    }
}

impl SigningKey {
    pub fn new(key: impl Into<Vec<u8>>) -> Self {
        Self {
            key: key.into().into(),
        }
    }

    /// Create a test signing key (for testing only).
    #[cfg(test)]
    pub fn test_key() -> Self {
        Self::new(b"test-signing-key-for-tests".to_vec())
    }

    /// Sign a canonical string and return the signature as lowercase hex.
    pub fn sign(&self, canonical: &str) -> String {
        let mut mac =
            HmacSha256::new_from_slice(&self.key).expect("HMAC can take key of any size");
        mac.update(canonical.as_bytes());
        let result = mac.finalize();
        hex::encode(result.into_bytes())
    }

    /// Verify a hex-encoded signature over a canonical string.
    ///
    /// Comparison happens through `Mac::verify_slice`, which is
    /// constant-time. Malformed hex fails verification.
    pub fn verify(&self, canonical: &str, signature_hex: &str) -> bool {
        let Ok(sig_bytes) = hex::decode(signature_hex) else {
            return false;
        };

        let mut mac =
            HmacSha256::new_from_slice(&self.key).expect("HMAC can take key of any size");
        mac.update(canonical.as_bytes());

        mac.verify_slice(&sig_bytes).is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sign_and_verify() {
        let key = SigningKey::new(b"test-secret-key".to_vec());
        let canonical = "folder1/master.m3u81700000000";

        let signature = key.sign(canonical);
        assert!(key.verify(canonical, &signature));
    }

    #[test]
    fn test_signature_is_64_hex_chars() {
        let key = SigningKey::new(b"test-secret-key".to_vec());
        let signature = key.sign("g/segment1.ts1700000000");

        assert_eq!(signature.len(), 64);
        assert!(signature.chars().all(|c| c.is_ascii_hexdigit()));
        assert_eq!(signature, signature.to_lowercase());
    }

    #[test]
    fn test_verify_invalid_signature() {
        let key = SigningKey::new(b"test-secret-key".to_vec());

        assert!(!key.verify("g/segment1.ts1700000000", "invalid-signature"));
    }

    #[test]
    fn test_verify_flipped_character() {
        let key = SigningKey::new(b"test-secret-key".to_vec());
        let canonical = "g/segment1.ts1700000000";

        let mut signature = key.sign(canonical);
        let flipped = if signature.ends_with('0') { "1" } else { "0" };
        signature.replace_range(signature.len() - 1.., flipped);

        assert!(!key.verify(canonical, &signature));
    }

    #[test]
    fn test_verify_wrong_canonical() {
        let key = SigningKey::new(b"test-secret-key".to_vec());

        let signature = key.sign("g/segment1.ts1700000000");
        assert!(!key.verify("g/segment1.ts1700000001", &signature));
    }

    #[test]
    fn test_different_keys_produce_different_signatures() {
        let key1 = SigningKey::new(b"key1".to_vec());
        let key2 = SigningKey::new(b"key2".to_vec());
        let canonical = "folder1/master.m3u81700000000";

        let sig1 = key1.sign(canonical);
        let sig2 = key2.sign(canonical);

        assert_ne!(sig1, sig2);
        assert!(!key2.verify(canonical, &sig1));
    }

    #[test]
    fn test_debug_redacts_key() {
        let key = SigningKey::new(b"super-secret".to_vec());
        let rendered = format!("{:?}", key);

        assert!(rendered.contains("REDACTED"));
        assert!(!rendered.contains("super-secret"));
    }
}
