use crate::api::{auth::auth, messages::messages, profile::profile, users::users};
use crate::app_state::AppState;
use crate::{banners, health};

use axum::{
    Router,
    routing::{get, post, put},
};
use tower_http::cors::{Any, CorsLayer};

/// Build the application router with all endpoints
pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Base routes
        .route("/", get(banners::home))
        .route("/about", get(banners::about))
        // Health check endpoint
        .route("/health", get(health::health_check))
        // API routes
        .route("/api/halo", get(messages::halo))
        .route("/api/kirim", post(messages::kirim))
        .route("/api/info", get(messages::info))
        .route("/api/feedback", post(messages::feedback))
        // User CRUD
        .route("/api/users", get(users::list_users).post(users::create_user))
        .route(
            "/api/users/{id}",
            put(users::update_user).delete(users::delete_user),
        )
        // Auth
        .route("/auth/login", post(auth::login))
        .route("/protected/profile", get(profile::get_profile))
        // Add shared state
        .with_state(state)
        // CORS middleware (allow all origins)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
}
