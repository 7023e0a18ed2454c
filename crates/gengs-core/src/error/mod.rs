use std::result::Result as StdResult;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Validation error: {message} {location}")]
    Validation {
        message: String,
        /// Field the constraint applies to, when there is a single one
        field: Option<String>,
        location: ErrorLocation,
    },
}

pub type Result<T> = StdResult<T, CoreError>;
