use gengs_auth::{JwtValidator, TokenIssuer};
use gengs_config::ApiConfig;
use gengs_db::Database;

use std::sync::Arc;

/// Shared application state for route handlers.
///
/// Cloned per request; the store handle and JWT machinery are the only state
/// shared across requests.
#[derive(Clone)]
pub struct AppState {
    /// None when the store connector failed at startup (degraded mode):
    /// user endpoints then fail per operation instead of at boot.
    pub database: Option<Database>,
    pub jwt_validator: Arc<JwtValidator>,
    pub token_issuer: Arc<TokenIssuer>,
    pub api: ApiConfig,
}
