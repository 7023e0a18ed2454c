use crate::{AuthError, Claims, Result as AuthErrorResult};

use std::panic::Location;

use error_location::ErrorLocation;
use jsonwebtoken::{Algorithm, EncodingKey, Header, encode};

/// Mints bearer tokens signed with the shared secret.
pub struct TokenIssuer {
    encoding_key: EncodingKey,
    ttl_secs: u64,
}

impl TokenIssuer {
    /// Create issuer with HS256 (symmetric secret)
    pub fn with_hs256(secret: &[u8], ttl_secs: u64) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret),
            ttl_secs,
        }
    }

    /// Issue a token for `subject`, valid for the configured TTL
    #[track_caller]
    pub fn issue(&self, subject: &str) -> AuthErrorResult<String> {
        let claims = Claims::new(subject, self.ttl_secs);
        claims.validate()?;

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key).map_err(|e| {
            AuthError::JwtEncode {
                source: e,
                location: ErrorLocation::from(Location::caller()),
            }
        })
    }
}
