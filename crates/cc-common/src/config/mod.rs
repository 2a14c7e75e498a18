//! Configuration structs

mod app_config;

pub use app_config::{
    AppConfig, AppSettings, ConfigError, CorsConfig, DatabaseConfig, Environment,
    FrontendConfig, JwtConfig, MailConfig, MailTemplates, RateLimitConfig, RedisConfig,
    ServerConfig, StorageConfig, VerificationConfig,
};
