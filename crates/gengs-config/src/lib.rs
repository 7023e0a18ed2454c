mod api_config;
mod auth_config;
mod config;
mod database_config;
mod error;
mod log_level;
mod logging_config;
mod server_config;

pub use api_config::ApiConfig;
pub use auth_config::AuthConfig;
pub use config::Config;
pub use database_config::DatabaseConfig;
pub use error::{ConfigError, ConfigErrorResult};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use server_config::ServerConfig;

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 3000;
const MIN_PORT: u16 = 1024;
const DEFAULT_STORE_URI: &str = "mongodb://localhost:27017";
const DEFAULT_DATABASE_NAME: &str = "toko_online";
const DEFAULT_TOKEN_TTL_SECS: u64 = 3600;
const MIN_JWT_SECRET_LENGTH: usize = 32;
const DEFAULT_API_NAME: &str = "GenGs API";
const DEFAULT_API_VERSION: &str = "1.0.0";
const DEFAULT_LOG_LEVEL_STRING: &str = "info";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const DEFAULT_LOG_DIRECTORY: &str = "log";

#[cfg(test)]
mod tests;
