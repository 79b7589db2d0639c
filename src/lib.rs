pub mod config;
pub mod error;
pub mod media;
pub mod playlist;
pub mod sandbox;
pub mod server;

pub use error::Error;
pub type Result<T> = std::result::Result<T, Error>;
