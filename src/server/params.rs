use serde::Deserialize;

/// Query parameters for the /generate-url endpoint.
#[derive(Debug, Deserialize)]
pub struct GenerateUrlParams {
    /// Asset path relative to the asset root.
    #[serde(default)]
    pub file: Option<String>,

    /// Requested TTL in seconds; falls back to the configured default.
    #[serde(rename = "expiresIn", default)]
    pub expires_in: Option<u64>,
}

/// Query parameters carried by every signed asset URL.
#[derive(Debug, Deserialize)]
pub struct SignedUrlParams {
    /// Expiry as decimal Unix seconds.
    #[serde(default)]
    pub expires: Option<String>,

    /// 64-char lowercase hex HMAC-SHA256 signature.
    #[serde(default)]
    pub signature: Option<String>,
}
