//! Configuration structs

mod app_config;

pub use app_config::{
    AppConfig, AppSettings, ConfigError, CorsConfig, Environment, ServerConfig, SessionConfig,
    StorageConfig, MAX_SESSION_TTL_SECONDS,
};
