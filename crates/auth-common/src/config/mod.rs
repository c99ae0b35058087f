//! Configuration structs

mod app_config;

pub use app_config::{
    AppConfig, AppSettings, ConfigError, CookieConfig, CorsConfig, DatabaseConfig, Environment,
    JwtConfig, LogFormat, ServerConfig,
};
