//! User entity - the only record type this API persists.

use crate::{CoreError, Result as CoreResult};

use std::panic::Location;

use bson::oid::ObjectId;
use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// Longest accepted user name, in characters.
pub const MAX_NAME_LENGTH: usize = 100;

/// A user record as stored in the `users` collection.
/// The identifier is assigned by the store on insert and immutable afterwards;
/// an unsaved user carries `id: None`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age: Option<i64>,
}

impl User {
    /// Build an unsaved user from caller-supplied fields.
    #[track_caller]
    pub fn new(name: String, age: Option<i64>) -> CoreResult<Self> {
        validate_name(&name)?;
        validate_age(age)?;

        Ok(Self {
            id: None,
            name,
            age,
        })
    }

    /// Whether the store has assigned an identifier yet
    pub fn is_persisted(&self) -> bool {
        self.id.is_some()
    }
}

/// Name constraints shared by create and update-name.
#[track_caller]
pub fn validate_name(name: &str) -> CoreResult<()> {
    if name.trim().is_empty() {
        return Err(CoreError::Validation {
            message: "name is required and cannot be empty".to_string(),
            field: Some("name".to_string()),
            location: ErrorLocation::from(Location::caller()),
        });
    }

    if name.chars().count() > MAX_NAME_LENGTH {
        return Err(CoreError::Validation {
            message: format!("name exceeds maximum length of {} characters", MAX_NAME_LENGTH),
            field: Some("name".to_string()),
            location: ErrorLocation::from(Location::caller()),
        });
    }

    Ok(())
}

/// Age is optional; when present it must be non-negative.
#[track_caller]
pub fn validate_age(age: Option<i64>) -> CoreResult<()> {
    if let Some(age) = age {
        if age < 0 {
            return Err(CoreError::Validation {
                message: "age cannot be negative".to_string(),
                field: Some("age".to_string()),
                location: ErrorLocation::from(Location::caller()),
            });
        }
    }

    Ok(())
}
