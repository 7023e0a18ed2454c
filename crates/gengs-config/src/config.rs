use crate::{
    ApiConfig, AuthConfig, ConfigError, ConfigErrorResult, DatabaseConfig, LoggingConfig,
    ServerConfig,
};

use std::path::PathBuf;
use std::str::FromStr;

use log::{info, warn};
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub auth: AuthConfig,
    pub api: ApiConfig,
    pub logging: LoggingConfig,
}

impl Config {
    /// Load config with full production error handling.
    ///
    /// Loading order:
    /// 1. Check for GENGS_CONFIG_DIR env var, else use ./.gengs/
    /// 2. Auto-create config directory if it doesn't exist
    /// 3. Load config.toml if it exists, else use defaults
    /// 4. Apply GENGS_* environment variable overrides
    ///
    /// Does NOT validate - call validate() after load().
    pub fn load() -> ConfigErrorResult<Self> {
        let config_dir = Self::config_dir()?;

        // Auto-create config directory
        if !config_dir.exists() {
            std::fs::create_dir_all(&config_dir).map_err(|e| ConfigError::Io {
                path: config_dir.clone(),
                source: e,
            })?;
        }

        let config_path = config_dir.join("config.toml");

        let mut config = if config_path.exists() {
            Self::load_toml(&config_path)?
        } else {
            Config::default()
        };

        config.apply_env_overrides();

        Ok(config)
    }

    /// Load and parse TOML file with detailed error context.
    fn load_toml(path: &PathBuf) -> ConfigErrorResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.clone(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::Toml {
            path: path.clone(),
            source: e,
        })
    }

    /// Get the config directory.
    /// Priority: GENGS_CONFIG_DIR env var > ./.gengs/ (relative to cwd)
    pub fn config_dir() -> Result<PathBuf, ConfigError> {
        if let Ok(dir) = std::env::var("GENGS_CONFIG_DIR") {
            return Ok(PathBuf::from(dir));
        }

        let cwd = std::env::current_dir()
            .map_err(|_| ConfigError::config("Cannot determine current working directory"))?;
        Ok(cwd.join(".gengs"))
    }

    /// Validate all configuration.
    /// Call after load() to catch all errors at startup.
    pub fn validate(&self) -> ConfigErrorResult<()> {
        self.server.validate()?;
        self.database.validate()?;
        self.auth.validate()?;

        Ok(())
    }

    /// Get bind address as string.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// Log configuration summary (NEVER logs secrets or credentialed URIs).
    pub fn log_summary(&self) {
        info!("Configuration loaded:");
        info!("  server: {}:{}", self.server.host, self.server.port);
        info!("  database: {}", self.database.name);
        info!(
            "  auth: HS256 (token ttl {}s)",
            self.auth.token_ttl_secs
        );
        info!("  api: {} v{}", self.api.name, self.api.version);
        info!(
            "  logging: {} (colored: {})",
            *self.logging.level, self.logging.colored
        );
    }

    fn apply_env_overrides(&mut self) {
        // Server
        Self::apply_env_string("GENGS_SERVER_HOST", &mut self.server.host);
        Self::apply_env_parse("GENGS_SERVER_PORT", &mut self.server.port);

        // Database
        Self::apply_env_string("GENGS_DATABASE_URI", &mut self.database.uri);
        Self::apply_env_string("GENGS_DATABASE_NAME", &mut self.database.name);

        // Auth
        Self::apply_env_option_string("GENGS_AUTH_JWT_SECRET", &mut self.auth.jwt_secret);
        Self::apply_env_parse("GENGS_AUTH_TOKEN_TTL_SECS", &mut self.auth.token_ttl_secs);

        // Api
        Self::apply_env_string("GENGS_API_NAME", &mut self.api.name);
        Self::apply_env_string("GENGS_API_VERSION", &mut self.api.version);

        // Logging
        Self::apply_env_parse("GENGS_LOG_LEVEL", &mut self.logging.level);
        Self::apply_env_parse("GENGS_LOG_COLORED", &mut self.logging.colored);
        Self::apply_env_option_string("GENGS_LOG_FILE", &mut self.logging.file);
    }

    fn apply_env_string(key: &str, target: &mut String) {
        if let Ok(value) = std::env::var(key) {
            *target = value;
        }
    }

    fn apply_env_option_string(key: &str, target: &mut Option<String>) {
        if let Ok(value) = std::env::var(key) {
            *target = Some(value);
        }
    }

    fn apply_env_parse<T: FromStr>(key: &str, target: &mut T) {
        if let Ok(value) = std::env::var(key) {
            match value.parse::<T>() {
                Ok(parsed) => *target = parsed,
                Err(_) => warn!("Ignoring {}: cannot parse '{}'", key, value),
            }
        }
    }
}
