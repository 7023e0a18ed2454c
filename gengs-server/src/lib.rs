pub mod api;
pub mod app_state;
pub mod banners;
pub mod error;
pub mod health;
pub mod logger;
pub mod routes;

#[cfg(test)]
mod tests;

pub use api::{
    auth::{auth::login, login_request::LoginRequest, token_response::TokenResponse},
    error::ApiError,
    error::Result as ApiResult,
    extractors::auth_user::AuthUser,
    messages::{
        feedback_request::FeedbackRequest,
        info_response::{ApiInfo, InfoResponse},
        message_response::MessageResponse,
        messages::{feedback, halo, info, kirim},
        send_request::SendRequest,
    },
    profile::{profile::get_profile, profile_response::ProfileResponse},
    users::{
        create_user_request::CreateUserRequest,
        update_user_request::UpdateUserRequest,
        user_dto::UserDto,
        user_response::UserResponse,
        users::{create_user, delete_user, list_users, update_user},
    },
};

pub use crate::app_state::AppState;
pub use crate::routes::build_router;
