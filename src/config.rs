//! Process configuration.
//!
//! All knobs come from the environment and are read exactly once at startup
//! into an immutable [`Config`] that is shared through the router state.

use std::path::PathBuf;

/// Immutable server configuration, constructed once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Bind address host part.
    pub host: String,

    /// Bind address port part.
    pub port: u16,

    /// Base URL (scheme + host) used when rendering signed URLs.
    pub public_base_url: url::Url,

    /// Canonicalized directory below which all servable assets live.
    pub asset_root: PathBuf,

    /// HMAC-SHA256 key material for URL signing.
    pub secret: Vec<u8>,

    /// Static API key guarding the /generate-url endpoint.
    pub api_key: String,

    /// TTL in seconds for URLs issued by /generate-url when the caller
    /// does not pass `expiresIn`.
    pub default_ttl: u64,

    /// TTL in seconds minted for every reference rewritten inside a
    /// served manifest. Independent of the parent link's remaining life.
    pub rewrite_ttl: u64,

    /// CORS origin, `*` for any.
    pub cors_allowed_origin: String,
}

impl Config {
    /// Build the configuration from the process environment.
    ///
    /// Fails when `HLSGATE_SECRET` or `HLSGATE_API_KEY` is missing or
    /// empty, or when the asset root does not exist. The asset root is
    /// canonicalized here so every later boundary check compares
    /// symlink-resolved paths.
    pub fn from_env() -> anyhow::Result<Self> {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse()
            .map_err(|_| anyhow::anyhow!("PORT must be a number"))?;

        let public_base_url = std::env::var("HLSGATE_PUBLIC_URL")
            .unwrap_or_else(|_| format!("http://localhost:{}", port));
        let public_base_url = url::Url::parse(&public_base_url)?;

        let asset_root =
            std::env::var("HLSGATE_ASSET_ROOT").unwrap_or_else(|_| "hls".to_string());
        let asset_root = std::fs::canonicalize(&asset_root).map_err(|e| {
            anyhow::anyhow!("asset root {:?} is not accessible: {}", asset_root, e)
        })?;

        let secret = std::env::var("HLSGATE_SECRET")
            .map_err(|_| anyhow::anyhow!("HLSGATE_SECRET must be set"))?;
        if secret.is_empty() {
            anyhow::bail!("HLSGATE_SECRET must not be empty");
        }
        // Hex-encoded keys are decoded, anything else is used as raw bytes.
        let secret = hex::decode(&secret).unwrap_or_else(|_| secret.into_bytes());

        let api_key = std::env::var("HLSGATE_API_KEY")
            .map_err(|_| anyhow::anyhow!("HLSGATE_API_KEY must be set"))?;
        if api_key.is_empty() {
            anyhow::bail!("HLSGATE_API_KEY must not be empty");
        }

        let default_ttl = parse_ttl_var("HLSGATE_DEFAULT_TTL")?.unwrap_or(3600);
        let rewrite_ttl = parse_ttl_var("HLSGATE_REWRITE_TTL")?.unwrap_or(3600);

        let cors_allowed_origin =
            std::env::var("CORS_ALLOWED_ORIGIN").unwrap_or_else(|_| "*".to_string());

        Ok(Self {
            host,
            port,
            public_base_url,
            asset_root,
            secret,
            api_key,
            default_ttl,
            rewrite_ttl,
            cors_allowed_origin,
        })
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_ttl_var(name: &str) -> anyhow::Result<Option<u64>> {
    match std::env::var(name) {
        Ok(v) => {
            let ttl: u64 = v
                .parse()
                .map_err(|_| anyhow::anyhow!("{} must be a number of seconds", name))?;
            Ok(Some(ttl))
        }
        Err(_) => Ok(None),
    }
}
