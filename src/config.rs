use std::net::SocketAddr;

use anyhow::Result;
use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub database_url: String,
    pub listen_addr: SocketAddr,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_url: "catalog.db".to_string(),
            listen_addr: SocketAddr::from(([127, 0, 0, 1], 3000)),
        }
    }
}

impl Config {
    /// Defaults, overridden by `libris.toml`, overridden by `LIBRIS_*`
    /// environment variables.
    pub fn read_config() -> Result<Self> {
        Ok(Figment::from(Serialized::defaults(Config::default()))
            .merge(Toml::file("libris.toml"))
            .merge(Env::prefixed("LIBRIS_"))
            .extract()?)
    }
}
