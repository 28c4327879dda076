//! Application configuration management.
//!
//! Settings are read from plain, unprefixed environment variables
//! (`DB_HOST`, `DB_USER`, `DB_PASSWORD`, `DB_NAME`, `PORT`, ...) so existing
//! deployments keep working. Optional `config/default.toml` and
//! `config/{RUN_MODE}.toml` files may provide the same flat keys in lower case.

use serde::Deserialize;

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Server configuration.
    pub server: ServerConfig,
    /// Database configuration.
    pub database: DatabaseConfig,
    /// Log output format.
    pub log_format: LogFormat,
}

/// Server configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Host to bind to.
    pub host: String,
    /// Port to listen on.
    pub port: u16,
}

/// Database configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatabaseConfig {
    /// Database host.
    pub host: String,
    /// Database port.
    pub port: u16,
    /// Login role.
    pub user: String,
    /// Login password.
    pub password: String,
    /// Database name.
    pub name: String,
    /// Maximum number of connections in the pool.
    pub max_connections: u32,
    /// Minimum number of connections in the pool.
    pub min_connections: u32,
}

/// Log line format for the tracing subscriber.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// Human readable, multi-field lines.
    Pretty,
    /// One JSON object per line.
    Json,
}

impl LogFormat {
    fn parse(raw: &str) -> Self {
        if raw.eq_ignore_ascii_case("json") {
            Self::Json
        } else {
            Self::Pretty
        }
    }
}

/// Flat view of every recognised key, as the config sources provide them.
#[derive(Debug, Deserialize)]
struct Settings {
    host: String,
    port: u16,
    db_host: String,
    db_port: u16,
    db_user: String,
    db_password: String,
    db_name: String,
    db_max_connections: u32,
    db_min_connections: u32,
    log_format: String,
}

impl From<Settings> for AppConfig {
    fn from(s: Settings) -> Self {
        Self {
            server: ServerConfig {
                host: s.host,
                port: s.port,
            },
            database: DatabaseConfig {
                host: s.db_host,
                port: s.db_port,
                user: s.db_user,
                password: s.db_password,
                name: s.db_name,
                max_connections: s.db_max_connections,
                min_connections: s.db_min_connections,
            },
            log_format: LogFormat::parse(&s.log_format),
        }
    }
}

impl AppConfig {
    /// Loads configuration from defaults, config files and environment.
    ///
    /// # Errors
    ///
    /// Returns an error if a provided value cannot be converted, e.g. a
    /// non-numeric `PORT`.
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .set_default("host", "0.0.0.0")?
            .set_default("port", 8080_i64)?
            .set_default("db_host", "localhost")?
            .set_default("db_port", 5432_i64)?
            .set_default("db_user", "budgetuser")?
            .set_default("db_password", "budgetpass")?
            .set_default("db_name", "budgetplan")?
            .set_default("db_max_connections", 10_i64)?
            .set_default("db_min_connections", 1_i64)?
            .set_default("log_format", "pretty")?
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(config::Environment::default().ignore_empty(true))
            .build()?;

        let settings: Settings = config.try_deserialize()?;
        Ok(settings.into())
    }
}
