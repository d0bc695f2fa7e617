//! Application configuration management.

use rust_decimal::Decimal;
use serde::Deserialize;

/// Application configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Server configuration.
    #[serde(default)]
    pub server: ServerConfig,
    /// Database configuration.
    pub database: DatabaseConfig,
    /// Statement rules.
    #[serde(default)]
    pub ledger: LedgerConfig,
}

/// Server configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Host to bind to.
    #[serde(default = "default_host")]
    pub host: String,
    /// Port to listen on.
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    5000
}

/// Database configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    /// Database connection URL.
    pub url: String,
    /// Maximum number of connections in the pool.
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
    /// Minimum number of connections in the pool.
    #[serde(default = "default_min_connections")]
    pub min_connections: u32,
}

fn default_max_connections() -> u32 {
    10
}

fn default_min_connections() -> u32 {
    1
}

/// Bounds applied to every statement before it reaches the store.
#[derive(Debug, Clone, Deserialize)]
pub struct LedgerConfig {
    /// Maximum description length in characters, after sanitization.
    #[serde(default = "default_description_max_len")]
    pub description_max_len: usize,
    /// Exclusive upper bound for a statement value.
    #[serde(default = "default_value_ceiling")]
    pub value_ceiling: Decimal,
}

impl Default for LedgerConfig {
    fn default() -> Self {
        Self {
            description_max_len: default_description_max_len(),
            value_ceiling: default_value_ceiling(),
        }
    }
}

fn default_description_max_len() -> usize {
    26
}

fn default_value_ceiling() -> Decimal {
    Decimal::from(100_000)
}

impl AppConfig {
    /// Loads configuration from environment and config files.
    ///
    /// Later sources win: `config/default`, `config/{RUN_MODE}`, then
    /// `LEDGERLY__SECTION__KEY` environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(config::Environment::with_prefix("LEDGERLY").separator("__"))
            .build()?;

        config.try_deserialize()
    }
}
