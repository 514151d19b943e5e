use std::path::PathBuf;

use anyhow::Context;
use serde::Deserialize;

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub store: StoreConfig,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub listen_addr: String,
    pub max_request_bytes: usize,
    pub max_connections: usize,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    pub db_path: PathBuf,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen_addr: "127.0.0.1:3999".to_string(),
            max_request_bytes: 4096,
            max_connections: 64,
        }
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            db_path: PathBuf::from("test.db"),
        }
    }
}

impl Config {
    /// Loads configuration from the YAML file named by `ROSTER_CONFIG`,
    /// falling back to defaults. `ROSTER_LISTEN` and `ROSTER_DB`
    /// override the corresponding fields either way.
    pub fn load() -> anyhow::Result<Self> {
        let mut cfg = match std::env::var("ROSTER_CONFIG") {
            Ok(path) => {
                let text = std::fs::read_to_string(&path)
                    .with_context(|| format!("reading config file {path}"))?;
                serde_yaml::from_str(&text)
                    .with_context(|| format!("parsing config file {path}"))?
            }
            Err(_) => Self::default(),
        };

        if let Ok(addr) = std::env::var("ROSTER_LISTEN") {
            cfg.server.listen_addr = addr;
        }
        if let Ok(path) = std::env::var("ROSTER_DB") {
            cfg.store.db_path = PathBuf::from(path);
        }

        Ok(cfg)
    }
}
