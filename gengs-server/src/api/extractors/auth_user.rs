//! Axum extractor guarding protected routes.
//!
//! The extractor is the authentication stage of the pipeline: it either
//! enriches the request with verified claims or terminates it with a 401
//! before the handler runs. Verification is stateless and happens on every
//! request.

use crate::{ApiError, app_state::AppState};

use gengs_auth::{AuthError, Claims};

use std::future::Future;
use std::panic::Location;

use axum::{extract::FromRequestParts, http::request::Parts};
use error_location::ErrorLocation;

/// Identity decoded from the bearer credential
pub struct AuthUser(pub Claims);

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = ApiError;

    #[allow(clippy::manual_async_fn)]
    fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> impl Future<Output = Result<Self, Self::Rejection>> + Send {
        async move {
            let Some(header_value) = parts.headers.get("authorization") else {
                log::warn!("Missing Authorization header");
                return Err(AuthError::MissingHeader {
                    location: ErrorLocation::from(Location::caller()),
                }
                .into());
            };

            let header = header_value.to_str().map_err(|_| {
                log::warn!("Authorization header is not valid UTF-8");
                AuthError::InvalidToken {
                    message: "authorization header is not valid UTF-8".to_string(),
                    location: ErrorLocation::from(Location::caller()),
                }
            })?;

            let Some(token) = header.strip_prefix("Bearer ") else {
                log::warn!("Invalid authorization scheme: expected 'Bearer'");
                return Err(AuthError::InvalidScheme {
                    location: ErrorLocation::from(Location::caller()),
                }
                .into());
            };

            let claims = state.jwt_validator.validate(token).map_err(|e| {
                log::warn!("Credential rejected: {}", e);
                e
            })?;

            log::debug!("Authenticated request for {}", claims.sub);
            Ok(AuthUser(claims))
        }
    }
}
