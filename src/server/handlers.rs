pub mod generate_url;
pub mod hls;

pub use generate_url::handle_generate_url;
pub use hls::handle_asset;
