use crate::{DEFAULT_API_NAME, DEFAULT_API_VERSION};

use serde::Deserialize;

/// Display identity reported by GET /api/info
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    pub name: String,
    pub version: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            name: String::from(DEFAULT_API_NAME),
            version: String::from(DEFAULT_API_VERSION),
        }
    }
}
