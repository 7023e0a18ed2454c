use crate::{ConfigError, ConfigErrorResult, DEFAULT_DATABASE_NAME, DEFAULT_STORE_URI};

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    /// Store connection string (may carry credentials - never logged)
    pub uri: String,
    /// Logical database name within the store
    pub name: String,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            uri: String::from(DEFAULT_STORE_URI),
            name: String::from(DEFAULT_DATABASE_NAME),
        }
    }
}

impl DatabaseConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.uri.is_empty() {
            return Err(ConfigError::database("database.uri cannot be empty"));
        }

        if self.name.is_empty() {
            return Err(ConfigError::database("database.name cannot be empty"));
        }

        Ok(())
    }
}
