use crate::{AuthError, JwtValidator, TokenIssuer};

#[test]
fn given_issued_token_when_validated_with_same_secret_then_round_trips() {
    let secret = b"test-secret-key-at-least-32-bytes";
    let issuer = TokenIssuer::with_hs256(secret, 3600);
    let validator = JwtValidator::with_hs256(secret);

    let token = issuer.issue("budi").unwrap();
    let claims = validator.validate(&token).unwrap();

    assert_eq!(claims.sub, "budi");
    assert!(claims.exp > claims.iat);
    assert_eq!(claims.exp - claims.iat, 3600);
}

#[test]
fn given_issued_token_when_validated_with_other_secret_then_rejected() {
    let issuer = TokenIssuer::with_hs256(b"test-secret-key-at-least-32-bytes", 3600);
    let validator = JwtValidator::with_hs256(b"other-secret-key-at-least-32-byte");

    let token = issuer.issue("budi").unwrap();

    assert!(validator.validate(&token).is_err());
}

#[test]
fn given_empty_subject_when_issuing_then_returns_invalid_claim_error() {
    let issuer = TokenIssuer::with_hs256(b"test-secret-key-at-least-32-bytes", 3600);

    let result = issuer.issue("");

    assert!(matches!(result, Err(AuthError::InvalidClaim { .. })));
}
