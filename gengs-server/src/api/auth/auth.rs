//! Token issuance for the protected routes.

use crate::{ApiError, ApiResult, LoginRequest, TokenResponse};

use crate::app_state::AppState;

use std::panic::Location;

use axum::{Json, extract::State};
use error_location::ErrorLocation;

/// POST /auth/login
///
/// Issue a bearer token for the supplied username. There is no account
/// database; any non-empty username gets a token signed with the shared
/// secret.
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> ApiResult<Json<TokenResponse>> {
    let username = payload.username.trim();
    if username.is_empty() {
        return Err(ApiError::Validation {
            message: "username is required and cannot be empty".to_string(),
            field: Some("username".to_string()),
            location: ErrorLocation::from(Location::caller()),
        });
    }

    let token = state.token_issuer.issue(username)?;
    log::info!("Issued token for {}", username);

    Ok(Json(TokenResponse { token }))
}
