//! Configuration model loaded from external sources.

use serde::Deserialize;

#[derive(Clone, Debug, Deserialize)]
/// Basic configuration shared across handlers.
pub struct ServerConfig {
    pub address: String,
    pub port: u16,
    pub templates_dir: String,
    /// Endpoint of the remote ideas API.
    pub api_url: String,
    /// Image shown on cards whose post carries no usable image.
    pub fallback_image: String,
}
