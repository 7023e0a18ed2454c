use serde::Serialize;

/// GET /api/info response
#[derive(Debug, Serialize)]
pub struct InfoResponse {
    pub message: ApiInfo,
}

#[derive(Debug, Serialize)]
pub struct ApiInfo {
    pub name: String,
    pub version: String,
}
