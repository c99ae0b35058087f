//! Application configuration structs
//!
//! Loads configuration from environment variables (and a `.env` file when
//! present).

use serde::Deserialize;
use std::env;

use crate::auth::{DEFAULT_TOKEN_EXPIRY_SECS, MAX_TOKEN_EXPIRY_SECS};

/// Main application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub app: AppSettings,
    pub api: ServerConfig,
    pub database: DatabaseConfig,
    pub jwt: JwtConfig,
    pub cookie: CookieConfig,
    pub cors: CorsConfig,
}

/// General application settings
#[derive(Debug, Clone, Deserialize)]
pub struct AppSettings {
    #[serde(default = "default_app_name")]
    pub name: String,
    #[serde(default = "default_env")]
    pub env: Environment,
    #[serde(default)]
    pub log_format: LogFormat,
}

/// Environment type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Development,
    Staging,
    Production,
}

impl Environment {
    #[must_use]
    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }

    #[must_use]
    pub fn is_development(&self) -> bool {
        matches!(self, Self::Development)
    }

    fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "production" => Some(Self::Production),
            "staging" => Some(Self::Staging),
            "development" => Some(Self::Development),
            _ => None,
        }
    }
}

/// Log output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

/// HTTP server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

impl ServerConfig {
    #[must_use]
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Database configuration
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    pub url: String,
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
    #[serde(default = "default_min_connections")]
    pub min_connections: u32,
    #[serde(default = "default_run_migrations")]
    pub run_migrations: bool,
}

/// JWT configuration
#[derive(Clone, Deserialize)]
pub struct JwtConfig {
    pub secret: String,
    #[serde(default = "default_token_expiry")]
    pub token_expiry: i64,
}

impl std::fmt::Debug for JwtConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtConfig")
            .field("secret", &"[REDACTED]")
            .field("token_expiry", &self.token_expiry)
            .finish()
    }
}

/// Session cookie configuration
#[derive(Debug, Clone, Deserialize)]
pub struct CookieConfig {
    #[serde(default = "default_cookie_secure")]
    pub secure: bool,
    #[serde(default)]
    pub domain: Option<String>,
}

impl Default for CookieConfig {
    fn default() -> Self {
        Self {
            secure: default_cookie_secure(),
            domain: None,
        }
    }
}

/// CORS configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CorsConfig {
    #[serde(default)]
    pub allowed_origins: Vec<String>,
}

// Default value functions
fn default_app_name() -> String {
    "auth-server".to_string()
}

fn default_env() -> Environment {
    Environment::Development
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_max_connections() -> u32 {
    20
}

fn default_min_connections() -> u32 {
    5
}

fn default_run_migrations() -> bool {
    true
}

fn default_token_expiry() -> i64 {
    DEFAULT_TOKEN_EXPIRY_SECS
}

fn default_cookie_secure() -> bool {
    true
}

fn parse_bool(s: &str) -> Option<bool> {
    match s.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// Build a Postgres URL from the discrete `DB_*` variables
fn compose_database_url<F>(var: &F) -> Option<String>
where
    F: Fn(&'static str) -> Option<String>,
{
    let host = var("DB_HOST")?;
    let user = var("DB_USER")?;
    let name = var("DB_NAME")?;
    let port = var("DB_PORT").unwrap_or_else(|| "5432".to_string());
    let password = var("DB_PASSWORD").unwrap_or_default();
    let ssl_mode = var("SSL_MODE").unwrap_or_else(|| "disable".to_string());

    Some(format!(
        "postgres://{user}:{password}@{host}:{port}/{name}?sslmode={ssl_mode}"
    ))
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    /// Returns an error if required environment variables are missing
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup
    ///
    /// Empty values are treated as unset.
    ///
    /// # Errors
    /// Returns an error if required variables are missing or invalid
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&'static str) -> Option<String>,
    {
        let var = |key: &'static str| lookup(key).filter(|v| !v.trim().is_empty());

        let env = match var("APP_ENV") {
            Some(s) => Environment::parse(&s)
                .ok_or(ConfigError::InvalidValue("APP_ENV", s))?,
            None => default_env(),
        };

        let log_format = match var("LOG_FORMAT").as_deref() {
            Some("json") => LogFormat::Json,
            Some("pretty") => LogFormat::Pretty,
            Some(other) => {
                return Err(ConfigError::InvalidValue("LOG_FORMAT", other.to_string()))
            }
            None if env.is_production() => LogFormat::Json,
            None => LogFormat::default(),
        };

        let port = match var("API_PORT") {
            Some(s) => s
                .parse()
                .map_err(|_| ConfigError::InvalidValue("API_PORT", s))?,
            None => default_port(),
        };

        let database_url = var("DATABASE_URL")
            .or_else(|| compose_database_url(&var))
            .ok_or(ConfigError::MissingVar("DATABASE_URL"))?;

        let token_expiry = match var("JWT_TOKEN_EXPIRY") {
            Some(s) => match s.parse::<i64>() {
                Ok(secs) if secs > 0 && secs <= MAX_TOKEN_EXPIRY_SECS => secs,
                _ => return Err(ConfigError::InvalidValue("JWT_TOKEN_EXPIRY", s)),
            },
            None => default_token_expiry(),
        };

        Ok(Self {
            app: AppSettings {
                name: var("APP_NAME").unwrap_or_else(default_app_name),
                env,
                log_format,
            },
            api: ServerConfig {
                host: var("API_HOST").unwrap_or_else(default_host),
                port,
            },
            database: DatabaseConfig {
                url: database_url,
                max_connections: var("DATABASE_MAX_CONNECTIONS")
                    .and_then(|s| s.parse().ok())
                    .unwrap_or_else(default_max_connections),
                min_connections: var("DATABASE_MIN_CONNECTIONS")
                    .and_then(|s| s.parse().ok())
                    .unwrap_or_else(default_min_connections),
                run_migrations: var("DATABASE_RUN_MIGRATIONS")
                    .and_then(|s| parse_bool(&s))
                    .unwrap_or_else(default_run_migrations),
            },
            jwt: JwtConfig {
                secret: var("JWT_SECRET").ok_or(ConfigError::MissingVar("JWT_SECRET"))?,
                token_expiry,
            },
            cookie: CookieConfig {
                secure: var("COOKIE_SECURE")
                    .and_then(|s| parse_bool(&s))
                    .unwrap_or_else(default_cookie_secure),
                domain: var("COOKIE_DOMAIN"),
            },
            cors: CorsConfig {
                allowed_origins: var("CORS_ALLOWED_ORIGINS")
                    .map(|s| {
                        s.split(',')
                            .map(str::trim)
                            .filter(|o| !o.is_empty())
                            .map(String::from)
                            .collect()
                    })
                    .unwrap_or_default(),
            },
        })
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingVar(&'static str),

    #[error("Invalid value for {0}: {1}")]
    InvalidValue(&'static str, String),
}
