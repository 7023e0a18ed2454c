use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct CreateUserRequest {
    /// Display name (required)
    pub name: String,

    /// Optional age in years
    #[serde(default)]
    pub age: Option<i64>,
}
