use crate::{AuthUser, ProfileResponse};

use axum::Json;

/// GET /protected/profile
///
/// Only reachable with a valid bearer credential; the extractor rejects the
/// request with 401 before this body runs otherwise.
pub async fn get_profile(AuthUser(claims): AuthUser) -> Json<ProfileResponse> {
    Json(ProfileResponse {
        message: "Welcome to your profile".to_string(),
        user: claims,
    })
}
