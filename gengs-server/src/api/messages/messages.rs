//! Greeting and echo handlers.
//!
//! Static handlers ignore their input entirely; echo handlers copy one body
//! field verbatim into a fixed surrounding message. None of them touch the
//! store.

use crate::{ApiInfo, FeedbackRequest, InfoResponse, MessageResponse, SendRequest};

use crate::app_state::AppState;

use axum::{Json, extract::State};

/// GET /api/halo
///
/// Constant greeting
pub async fn halo() -> Json<MessageResponse> {
    Json(MessageResponse {
        message: "Halo, GenGs! Ini respons dari server. 🎉".to_string(),
    })
}

/// POST /api/kirim
///
/// Echo the submitted name back in a greeting
pub async fn kirim(Json(payload): Json<SendRequest>) -> Json<MessageResponse> {
    Json(MessageResponse {
        message: format!("Halo, {}! Data kamu sudah diterima. 😊", payload.nama),
    })
}

/// GET /api/info
///
/// Report the configured API identity
pub async fn info(State(state): State<AppState>) -> Json<InfoResponse> {
    Json(InfoResponse {
        message: ApiInfo {
            name: state.api.name.clone(),
            version: state.api.version.clone(),
        },
    })
}

/// POST /api/feedback
///
/// Echo the submitted feedback back in a thank-you message
pub async fn feedback(Json(payload): Json<FeedbackRequest>) -> Json<MessageResponse> {
    Json(MessageResponse {
        message: format!("Terima kasih atas feedback-nya: {}!", payload.feedback),
    })
}
