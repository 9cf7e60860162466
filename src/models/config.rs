//! Configuration model loaded from external sources.

use serde::Deserialize;

/// Runtime settings for the listing API: where to bind and which SQLite
/// file backs the pool.
#[derive(Clone, Debug, Deserialize)]
pub struct ServerConfig {
    pub address: String,
    pub port: u16,
    pub database_url: String,
}

impl ServerConfig {
    pub fn bind_addr(&self) -> (String, u16) {
        (self.address.clone(), self.port)
    }
}
