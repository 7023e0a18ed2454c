use crate::app_state::AppState;

use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use serde_json::json;

/// GET /health - component status
pub async fn health_check(State(state): State<AppState>) -> Response {
    let store = if state.database.is_some() {
        "connected"
    } else {
        "unavailable"
    };

    let health = json!({
        "status": "healthy",
        "version": env!("CARGO_PKG_VERSION"),
        "components": {
            "store": store,
            "auth": "operational",
        },
        "timestamp": chrono::Utc::now().to_rfc3339(),
    });

    (StatusCode::OK, Json(health)).into_response()
}
