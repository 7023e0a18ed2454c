#![allow(dead_code)]

//! Test infrastructure for gengs-server API tests

use gengs_auth::{Claims, JwtValidator, TokenIssuer};
use gengs_config::ApiConfig;
use gengs_db::Database;
use gengs_server::AppState;

use std::sync::Arc;

use jsonwebtoken::{Algorithm, EncodingKey, Header, encode};

pub const TEST_SECRET: &[u8] = b"test-secret-key-at-least-32-bytes";

/// AppState with no store attached (degraded mode)
pub fn create_test_app_state() -> AppState {
    AppState {
        database: None,
        jwt_validator: Arc::new(JwtValidator::with_hs256(TEST_SECRET)),
        token_issuer: Arc::new(TokenIssuer::with_hs256(TEST_SECRET, 3600)),
        api: ApiConfig::default(),
    }
}

/// AppState backed by a disposable database on the store named by
/// GENGS_TEST_STORE_URI. Returns None when the variable is unset or the
/// store cannot be reached, so callers skip instead of failing.
pub async fn create_store_backed_app_state() -> Option<(AppState, Database)> {
    let uri = std::env::var("GENGS_TEST_STORE_URI").ok()?;

    let name = format!(
        "gengs_test_{}_{}",
        std::process::id(),
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .subsec_nanos()
    );

    let database = gengs_db::connect(&uri, &name).await.ok()?;

    // Probe the store so unreachable setups skip rather than fail later
    gengs_db::UserRepository::new(database.clone())
        .find_all()
        .await
        .ok()?;

    let state = AppState {
        database: Some(database.clone()),
        jwt_validator: Arc::new(JwtValidator::with_hs256(TEST_SECRET)),
        token_issuer: Arc::new(TokenIssuer::with_hs256(TEST_SECRET, 3600)),
        api: ApiConfig::default(),
    };

    Some((state, database))
}

/// Mint a token directly, bypassing the issuer. Negative `ttl_secs`
/// produces an already-expired token.
pub fn mint_token(sub: &str, ttl_secs: i64) -> String {
    let now = chrono::Utc::now().timestamp();
    let claims = Claims {
        sub: sub.to_string(),
        exp: now + ttl_secs,
        iat: now,
    };

    encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(TEST_SECRET),
    )
    .unwrap()
}
