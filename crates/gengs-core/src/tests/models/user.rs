use crate::{CoreError, MAX_NAME_LENGTH, User, validate_age, validate_name};

use bson::oid::ObjectId;

#[test]
fn test_user_new() {
    let user = User::new("Budi".to_string(), Some(30)).unwrap();

    assert_eq!(user.name, "Budi");
    assert_eq!(user.age, Some(30));
    assert!(user.id.is_none());
    assert!(!user.is_persisted());
}

#[test]
fn test_user_new_without_age() {
    let user = User::new("Budi".to_string(), None).unwrap();

    assert_eq!(user.age, None);
}

#[test]
fn test_user_new_rejects_empty_name() {
    let result = User::new(String::new(), None);

    assert!(matches!(
        result,
        Err(CoreError::Validation { ref field, .. }) if field.as_deref() == Some("name")
    ));
}

#[test]
fn test_user_new_rejects_whitespace_name() {
    let result = User::new("   ".to_string(), None);

    assert!(result.is_err());
}

#[test]
fn test_user_new_rejects_negative_age() {
    let result = User::new("Budi".to_string(), Some(-1));

    assert!(matches!(
        result,
        Err(CoreError::Validation { ref field, .. }) if field.as_deref() == Some("age")
    ));
}

#[test]
fn test_validate_name_length_boundary() {
    let at_limit = "a".repeat(MAX_NAME_LENGTH);
    let over_limit = "a".repeat(MAX_NAME_LENGTH + 1);

    assert!(validate_name(&at_limit).is_ok());
    assert!(validate_name(&over_limit).is_err());
}

#[test]
fn test_validate_age_accepts_zero() {
    assert!(validate_age(Some(0)).is_ok());
    assert!(validate_age(None).is_ok());
}

#[test]
fn test_user_is_persisted_with_id() {
    let mut user = User::new("Budi".to_string(), None).unwrap();
    user.id = Some(ObjectId::new());

    assert!(user.is_persisted());
}

#[test]
fn test_user_serializes_without_unset_fields() {
    let user = User::new("Budi".to_string(), None).unwrap();
    let json = serde_json::to_value(&user).unwrap();

    assert!(json.get("_id").is_none());
    assert!(json.get("age").is_none());
    assert_eq!(json["name"], "Budi");
}
