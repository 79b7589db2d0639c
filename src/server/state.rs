use std::sync::Arc;

use super::{signature::SigningKey, signer::UrlSigner};
use crate::config::Config;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub signer: UrlSigner,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let signer = UrlSigner::new(
            SigningKey::new(config.secret.clone()),
            config.public_base_url.clone(),
        );
        Self {
            config: Arc::new(config),
            signer,
        }
    }
}
