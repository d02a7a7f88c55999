/// Configuration management for Blog Service
///
/// Everything comes from environment variables (a `.env` file is loaded by the
/// binary when present). Pool tuning lives in `db_pool::DbConfig`.
use db_pool::env_utils::{env_non_empty, env_or, parse_env_optional};
use std::fmt;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0} must be set when DATABASE_URL is not provided")]
    MissingVar(&'static str),

    #[error("invalid value for {key}: '{value}'")]
    Invalid { key: &'static str, value: String },
}

/// Main application configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub app: AppConfig,
    pub database: DatabaseConfig,
}

/// Application settings
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Application environment (development, staging, production)
    pub env: String,
    pub host: String,
    pub port: u16,
    pub workers: usize,
}

/// Database configuration
#[derive(Clone)]
pub struct DatabaseConfig {
    /// PostgreSQL connection URL
    pub url: String,
}

impl fmt::Debug for DatabaseConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DatabaseConfig")
            .field("url", &"[REDACTED]")
            .finish()
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Config {
            app: AppConfig {
                env: env_or("APP_ENV", "development"),
                host: env_or("SERVER_HOST", "0.0.0.0"),
                port: parse_required_or_default("SERVER_PORT", 4000)?,
                workers: parse_required_or_default("HTTP_WORKERS", 4)?,
            },
            database: DatabaseConfig {
                url: database_url_from_env()?,
            },
        })
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.app.host, self.app.port)
    }
}

/// `DATABASE_URL` wins; otherwise the URL is assembled from the `POSTGRES_*`
/// variables used by the container setup.
fn database_url_from_env() -> Result<String, ConfigError> {
    if let Some(url) = env_non_empty("DATABASE_URL") {
        return Ok(url);
    }

    let user = env_non_empty("POSTGRES_USER").ok_or(ConfigError::MissingVar("POSTGRES_USER"))?;
    let database = env_non_empty("POSTGRES_DB").ok_or(ConfigError::MissingVar("POSTGRES_DB"))?;
    let password = std::env::var("POSTGRES_PASSWORD").unwrap_or_default();
    let host = env_or("POSTGRES_HOST", "database");
    let port: u16 = parse_required_or_default("POSTGRES_PORT", 5432)?;

    Ok(postgres_url(&user, &password, &host, port, &database))
}

/// Build a `postgres://` URL, percent-encoding the credentials and database name
pub fn postgres_url(user: &str, password: &str, host: &str, port: u16, database: &str) -> String {
    let credentials = if password.is_empty() {
        urlencoding::encode(user).into_owned()
    } else {
        format!(
            "{}:{}",
            urlencoding::encode(user),
            urlencoding::encode(password)
        )
    };

    format!(
        "postgres://{}@{}:{}/{}?sslmode=disable",
        credentials,
        host,
        port,
        urlencoding::encode(database)
    )
}

/// Missing means default; present but unparsable is an error.
fn parse_required_or_default<T: std::str::FromStr>(
    key: &'static str,
    default: T,
) -> Result<T, ConfigError> {
    match env_non_empty(key) {
        None => Ok(default),
        Some(value) => parse_env_optional(key).ok_or(ConfigError::Invalid { key, value }),
    }
}
