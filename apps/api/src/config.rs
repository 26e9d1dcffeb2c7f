//! API server configuration.
//!
//! Sources are layered, later ones winning:
//!
//! ```text
//! built-in defaults  →  ./inventory.toml (optional)  →  INVENTORY_* env vars
//! ```
//!
//! A `.env` file in the working directory is loaded into the environment
//! first, so its values count as env vars.

use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;
use std::time::Duration;

use directories::ProjectDirs;
use inventory_db::DbConfig;
use serde::Deserialize;

/// Default HTTP port.
pub const DEFAULT_PORT: u16 = 5000;

/// Database file name inside the platform data directory.
const DATABASE_FILE: &str = "inventory.db";

/// API server configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    /// Interface to bind.
    pub host: IpAddr,

    /// HTTP port.
    pub port: u16,

    /// SQLite file path, or `:memory:`. Defaults to the platform data dir.
    #[serde(default)]
    pub database_path: Option<PathBuf>,

    /// Upper bound on pooled SQLite connections.
    pub max_connections: u32,

    /// Seconds a request waits for a pooled connection.
    pub acquire_timeout_secs: u64,
}

impl ApiConfig {
    /// Loads configuration from `.env`, `inventory.toml` and the process
    /// environment.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_environment(config::Environment::with_prefix("INVENTORY"))
    }

    /// Builds the layered configuration with a caller-supplied env source.
    fn from_environment(env: config::Environment) -> Result<Self, ConfigError> {
        let settings = config::Config::builder()
            .set_default("host", "0.0.0.0")?
            .set_default("port", DEFAULT_PORT)?
            .set_default("max_connections", 5)?
            .set_default("acquire_timeout_secs", 30)?
            .add_source(config::File::with_name("inventory").required(false))
            .add_source(env.try_parsing(true))
            .build()?;

        let config: ApiConfig = settings.try_deserialize()?;

        if config.max_connections == 0 {
            return Err(ConfigError::InvalidValue("max_connections".to_string()));
        }

        Ok(config)
    }

    /// Address the HTTP listener binds to.
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    /// Resolves the database path, creating the platform data directory when
    /// no explicit path was configured.
    ///
    /// ## Platform-Specific Paths
    /// - Linux: `~/.local/share/inventory-tracker/inventory.db`
    /// - macOS: `~/Library/Application Support/com.inventory.inventory-tracker/inventory.db`
    /// - Windows: `%APPDATA%\inventory\inventory-tracker\data\inventory.db`
    pub fn database_path(&self) -> Result<PathBuf, ConfigError> {
        if let Some(path) = &self.database_path {
            return Ok(path.clone());
        }

        let proj_dirs = ProjectDirs::from("com", "inventory", "inventory-tracker")
            .ok_or(ConfigError::NoDataDir)?;
        let data_dir = proj_dirs.data_dir();

        std::fs::create_dir_all(data_dir).map_err(ConfigError::DataDir)?;

        Ok(data_dir.join(DATABASE_FILE))
    }

    /// Pool settings for [`inventory_db::Database::new`].
    pub fn db_config(&self) -> Result<DbConfig, ConfigError> {
        Ok(DbConfig::new(self.database_path()?)
            .max_connections(self.max_connections)
            .acquire_timeout(Duration::from_secs(self.acquire_timeout_secs)))
    }
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    Load(#[from] config::ConfigError),

    #[error("Invalid value for {0}")]
    InvalidValue(String),

    #[error("Could not determine app data directory")]
    NoDataDir,

    #[error("Could not create app data directory: {0}")]
    DataDir(std::io::Error),
}
