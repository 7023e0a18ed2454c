use serde::Deserialize;

/// Partial update: only the name can change through this endpoint
#[derive(Debug, Deserialize)]
pub struct UpdateUserRequest {
    pub name: String,
}
