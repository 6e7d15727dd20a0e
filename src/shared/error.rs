use std::fmt;

#[derive(Debug)]
pub enum AppError {
    Database(String),
    Crypto(String),
    NotFound(String),
    DuplicateEntry(String),
    InvalidInput(String),
    ConfigurationError(String),
    Internal(String),
}

impl AppError {
    /// The message carried by the error, without the kind prefix used by `Display`.
    pub fn message(&self) -> &str {
        match self {
            AppError::Database(msg)
            | AppError::Crypto(msg)
            | AppError::NotFound(msg)
            | AppError::DuplicateEntry(msg)
            | AppError::InvalidInput(msg)
            | AppError::ConfigurationError(msg)
            | AppError::Internal(msg) => msg,
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, AppError::NotFound(_))
    }

    pub fn is_duplicate_entry(&self) -> bool {
        matches!(self, AppError::DuplicateEntry(_))
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Database(msg) => write!(f, "Database error: {}", msg),
            AppError::Crypto(msg) => write!(f, "Crypto error: {}", msg),
            AppError::NotFound(msg) => write!(f, "Not found: {}", msg),
            AppError::DuplicateEntry(msg) => write!(f, "Duplicate entry: {}", msg),
            AppError::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            AppError::ConfigurationError(msg) => write!(f, "Configuration error: {}", msg),
            AppError::Internal(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}

impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        AppError::Database(err.to_string())
    }
}

impl From<sqlx::migrate::MigrateError> for AppError {
    fn from(err: sqlx::migrate::MigrateError) -> Self {
        AppError::Database(err.to_string())
    }
}

impl From<argon2::password_hash::Error> for AppError {
    fn from(err: argon2::password_hash::Error) -> Self {
        AppError::Crypto(err.to_string())
    }
}

impl From<crate::shared::config::ConfigError> for AppError {
    fn from(err: crate::shared::config::ConfigError) -> Self {
        AppError::ConfigurationError(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
