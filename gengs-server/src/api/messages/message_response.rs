use serde::Serialize;

/// Single-message response shared by the greeting and echo endpoints
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}
