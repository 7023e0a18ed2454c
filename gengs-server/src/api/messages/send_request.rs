use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct SendRequest {
    /// Name to greet (required)
    pub nama: String,
}
