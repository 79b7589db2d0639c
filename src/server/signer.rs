//! Signed-URL issuance.

use std::time::{SystemTime, UNIX_EPOCH};

use super::signature::SigningKey;

/// A freshly issued signed URL for one asset.
#[derive(Debug, Clone)]
pub struct SignedUrl {
    pub url: url::Url,
    pub expires: u64,
    pub signature: String,
}

/// Issues signed URLs under a fixed public base URL.
///
/// The canonical signing input is the asset's public path (the part after
/// `/hls/`, no leading slash) concatenated directly with the decimal
/// expiry. Issuance and verification must agree on this exactly.
#[derive(Debug, Clone)]
pub struct UrlSigner {
    key: SigningKey,
    base_url: url::Url,
}

impl UrlSigner {
    pub fn new(key: SigningKey, base_url: url::Url) -> Self {
        Self { key, base_url }
    }

    /// The canonical string covered by the signature.
    pub fn canonical(asset_path: &str, expires: u64) -> String {
        format!("{}{}", asset_path, expires)
    }

    /// Issue a signed URL valid for `ttl` seconds from now. An absurdly
    /// large TTL saturates at the maximum expiry instead of wrapping.
    pub fn issue(&self, asset_path: &str, ttl: u64) -> SignedUrl {
        self.issue_at(asset_path, unix_now().saturating_add(ttl))
    }

    /// Issue a signed URL with an explicit expiry timestamp.
    pub fn issue_at(&self, asset_path: &str, expires: u64) -> SignedUrl {
        let signature = self.key.sign(&Self::canonical(asset_path, expires));

        let mut url = self.base_url.clone();
        url.set_path(&format!("/hls/{}", asset_path));
        url.query_pairs_mut()
            .append_pair("expires", &expires.to_string())
            .append_pair("signature", &signature);

        SignedUrl {
            url,
            expires,
            signature,
        }
    }

    pub fn key(&self) -> &SigningKey {
        &self.key
    }
}

/// Current time as integer seconds since the Unix epoch.
pub fn unix_now() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("system clock is before the Unix epoch")
        .as_secs()
}
