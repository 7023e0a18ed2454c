use gengs_auth::Claims;

use serde::Serialize;

/// Protected profile response: the identity decoded from the credential
#[derive(Debug, Serialize)]
pub struct ProfileResponse {
    pub message: String,
    pub user: Claims,
}
