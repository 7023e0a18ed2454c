use crate::{AuthError, Result as AuthErrorResult};

use std::panic::Location;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// Claims embedded in a bearer token.
///
/// Rebuilt from the credential on every request and discarded when the
/// request completes; never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (the authenticated user)
    pub sub: String,
    /// Expiration timestamp (Unix)
    pub exp: i64,
    /// Issued at timestamp (Unix)
    pub iat: i64,
}

impl Claims {
    /// Claims for a freshly issued token valid for `ttl_secs` from now.
    pub fn new(subject: impl Into<String>, ttl_secs: u64) -> Self {
        let now = chrono::Utc::now().timestamp();
        Self {
            sub: subject.into(),
            exp: now + ttl_secs as i64,
            iat: now,
        }
    }

    /// Validate claims after signature verification
    #[track_caller]
    pub fn validate(&self) -> AuthErrorResult<()> {
        if self.sub.is_empty() {
            return Err(AuthError::InvalidClaim {
                claim: "sub".to_string(),
                message: "sub cannot be empty".to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }
        if self.sub.len() > 128 {
            return Err(AuthError::InvalidClaim {
                claim: "sub".to_string(),
                message: "sub exceeds maximum length".to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        Ok(())
    }
}
