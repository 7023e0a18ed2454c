use gengs_core::User;

use serde::Serialize;

/// User DTO for JSON serialization; the id is the store's 24-char hex form
#[derive(Debug, Serialize)]
pub struct UserDto {
    pub id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub age: Option<i64>,
}

impl From<User> for UserDto {
    fn from(u: User) -> Self {
        Self {
            id: u.id.map(|id| id.to_hex()).unwrap_or_default(),
            name: u.name,
            age: u.age,
        }
    }
}
