use std::path::PathBuf;

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct CorsConfig {
    pub allow_origins: Vec<String>,
    pub max_age: u64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub cors: CorsConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct StorageConfig {
    /// Holds `db.json` and the `uploads/` artifact tree.
    pub data_dir: PathBuf,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub storage: StorageConfig,
    /// Public base URL embedded in certificate QR codes, so scanned links
    /// work both locally and behind a deployment hostname.
    pub public_base_url: String,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        let s = Config::builder()
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 8000)?
            .set_default("server.cors.allow_origins", vec!["*".to_string()])?
            .set_default("server.cors.max_age", 3600)?
            .set_default("storage.data_dir", "./data")?
            .set_default("public_base_url", "http://127.0.0.1:8000")?
            // Load from config/config.toml
            .add_source(File::with_name("config/config").required(false))
            // Override from environment (e.g., KARIGAR__PUBLIC_BASE_URL)
            .add_source(Environment::with_prefix("KARIGAR").separator("__"))
            .build()?;

        s.try_deserialize()
    }

    /// Path of the persisted record document.
    pub fn db_path(&self) -> PathBuf {
        self.storage.data_dir.join("db.json")
    }

    /// Root of the binary artifact tree.
    pub fn uploads_dir(&self) -> PathBuf {
        self.storage.data_dir.join("uploads")
    }
}
