use crate::{ConfigError, ConfigErrorResult, DEFAULT_TOKEN_TTL_SECS, MIN_JWT_SECRET_LENGTH};

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AuthConfig {
    /// Shared secret for HS256 signing and verification.
    /// Required: supplied via config.toml or GENGS_AUTH_JWT_SECRET.
    pub jwt_secret: Option<String>,
    /// Lifetime of issued tokens
    pub token_ttl_secs: u64,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            jwt_secret: None,
            token_ttl_secs: DEFAULT_TOKEN_TTL_SECS,
        }
    }
}

impl AuthConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        let Some(ref secret) = self.jwt_secret else {
            return Err(ConfigError::auth(
                "auth.jwt_secret is required (set it in config.toml or GENGS_AUTH_JWT_SECRET)",
            ));
        };

        if secret.len() < MIN_JWT_SECRET_LENGTH {
            return Err(ConfigError::auth(format!(
                "auth.jwt_secret must be at least {} characters",
                MIN_JWT_SECRET_LENGTH
            )));
        }

        if self.token_ttl_secs == 0 {
            return Err(ConfigError::auth("auth.token_ttl_secs must be positive"));
        }

        Ok(())
    }
}
