use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DbError {
    #[error("Store error: {source} {location}")]
    Mongo {
        source: mongodb::error::Error,
        location: ErrorLocation,
    },

    #[error("Store returned an unexpected identifier: {value} {location}")]
    UnexpectedId {
        value: String,
        location: ErrorLocation,
    },
}

impl From<mongodb::error::Error> for DbError {
    #[track_caller]
    fn from(source: mongodb::error::Error) -> Self {
        Self::Mongo {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, DbError>;
