//! User REST API handlers
//!
//! Each handler performs at most one repository call; validation happens
//! before the store is touched.

use crate::{ApiError, ApiResult, CreateUserRequest, UpdateUserRequest, UserDto, UserResponse};

use crate::app_state::AppState;

use gengs_core::User;
use gengs_db::UserRepository;

use std::panic::Location;

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use bson::oid::ObjectId;
use error_location::ErrorLocation;

// =============================================================================
// Handlers
// =============================================================================

/// GET /api/users
///
/// List all users
pub async fn list_users(State(state): State<AppState>) -> ApiResult<Json<Vec<UserDto>>> {
    let repo = user_repository(&state)?;
    let users = repo.find_all().await?;

    Ok(Json(users.into_iter().map(UserDto::from).collect()))
}

/// POST /api/users
///
/// Add a new user
pub async fn create_user(
    State(state): State<AppState>,
    Json(payload): Json<CreateUserRequest>,
) -> ApiResult<(StatusCode, Json<UserResponse>)> {
    let user = User::new(payload.name, payload.age)?;

    let repo = user_repository(&state)?;
    let created = repo.create(&user).await?;

    Ok((
        StatusCode::CREATED,
        Json(UserResponse {
            message: "User added".to_string(),
            data: created.into(),
        }),
    ))
}

/// PUT /api/users/{id}
///
/// Update a user's name; no other field is ever touched
pub async fn update_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<UpdateUserRequest>,
) -> ApiResult<Json<UserResponse>> {
    let user_id = ObjectId::parse_str(&id)?;
    gengs_core::validate_name(&payload.name)?;

    let repo = user_repository(&state)?;
    let updated = repo
        .update_name(user_id, &payload.name)
        .await?
        .ok_or_else(|| ApiError::NotFound {
            message: format!("User {} not found", id),
            location: ErrorLocation::from(Location::caller()),
        })?;

    Ok(Json(UserResponse {
        message: "User updated".to_string(),
        data: updated.into(),
    }))
}

/// DELETE /api/users/{id}
///
/// Remove a user, returning the pre-deletion snapshot
pub async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<UserResponse>> {
    let user_id = ObjectId::parse_str(&id)?;

    let repo = user_repository(&state)?;
    let deleted = repo
        .delete_by_id(user_id)
        .await?
        .ok_or_else(|| ApiError::NotFound {
            message: format!("User {} not found", id),
            location: ErrorLocation::from(Location::caller()),
        })?;

    Ok(Json(UserResponse {
        message: "User deleted".to_string(),
        data: deleted.into(),
    }))
}

// =============================================================================
// Helpers
// =============================================================================

/// Repository over the injected store handle; errors in degraded mode
#[track_caller]
fn user_repository(state: &AppState) -> ApiResult<UserRepository> {
    let database = state.database.clone().ok_or_else(|| ApiError::Internal {
        message: "User store is not connected".to_string(),
        location: ErrorLocation::from(Location::caller()),
    })?;

    Ok(UserRepository::new(database))
}
