pub mod connection;
pub mod error;
pub mod repositories;

pub use connection::connect;
pub use error::{DbError, Result};
pub use repositories::user_repository::UserRepository;

// The handle type callers hold; single connection shared by all requests.
pub use mongodb::Database;
