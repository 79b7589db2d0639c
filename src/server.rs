pub mod handlers;
pub mod params;
pub mod router;
pub mod signature;
pub mod signer;
pub mod state;
pub mod verify;

pub use router::create_router;
pub use signature::SigningKey;
pub use signer::UrlSigner;
pub use state::AppState;
