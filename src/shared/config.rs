use serde::{Deserialize, Serialize};
use thiserror::Error;

const ENV_PREFIX: &str = "SUBSCRIPTION_STORE";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Database url must not be empty")]
    EmptyDatabaseUrl,

    #[error("Database max_connections must be greater than 0")]
    ZeroMaxConnections,

    #[error("Database connection_timeout must be greater than 0")]
    ZeroConnectionTimeout,

    #[error("Unknown log level: {0}")]
    InvalidLogLevel(String),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub database: DatabaseConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    /// Seconds to wait for a pooled connection or a locked database.
    pub connection_timeout: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
    #[serde(default)]
    pub json: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            database: DatabaseConfig {
                url: "sqlite:data/subscriptions.db".to_string(),
                max_connections: 5,
                connection_timeout: 30,
            },
            logging: LoggingConfig::default(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json: false,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        let mut cfg = Self::default();

        if let Some(v) = read_env("DATABASE_URL") {
            let v = v.trim();
            if !v.is_empty() {
                cfg.database.url = v.to_string();
            }
        }
        if let Some(value) = read_env("DATABASE_MAX_CONNECTIONS").and_then(|v| parse_u32(&v)) {
            cfg.database.max_connections = value;
        }
        if let Some(value) = read_env("DATABASE_CONNECTION_TIMEOUT").and_then(|v| parse_u64(&v)) {
            cfg.database.connection_timeout = value;
        }
        if let Some(v) = read_env("LOG_LEVEL") {
            cfg.logging.level = v.trim().to_ascii_lowercase();
        }
        if let Some(v) = read_env("LOG_JSON") {
            cfg.logging.json = parse_bool(&v, cfg.logging.json);
        }

        cfg
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.database.url.trim().is_empty() {
            return Err(ConfigError::EmptyDatabaseUrl);
        }
        if self.database.max_connections == 0 {
            return Err(ConfigError::ZeroMaxConnections);
        }
        if self.database.connection_timeout == 0 {
            return Err(ConfigError::ZeroConnectionTimeout);
        }
        match self.logging.level.as_str() {
            "trace" | "debug" | "info" | "warn" | "error" => Ok(()),
            other => Err(ConfigError::InvalidLogLevel(other.to_string())),
        }
    }
}

fn read_env(suffix: &str) -> Option<String> {
    std::env::var(format!("{ENV_PREFIX}_{suffix}")).ok()
}

fn parse_bool(s: &str, default: bool) -> bool {
    match s.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => true,
        "0" | "false" | "no" | "off" => false,
        _ => default,
    }
}

fn parse_u32(value: &str) -> Option<u32> {
    value.trim().parse::<u32>().ok()
}

fn parse_u64(value: &str) -> Option<u64> {
    value.trim().parse::<u64>().ok()
}
