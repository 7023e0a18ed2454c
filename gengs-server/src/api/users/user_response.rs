use crate::UserDto;
use serde::Serialize;

/// Mutation response: outcome message plus the affected record
#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub message: String,
    pub data: UserDto,
}
