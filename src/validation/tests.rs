//! Tests for field constraints

use super::*;

#[test]
fn test_not_blank() {
    let mut violations = Violations::new();
    violations
        .not_blank("id", None)
        .not_blank("name", Some("   "))
        .not_blank("reference", Some("julian test"));

    assert_eq!(violations.len(), 2);
    assert_eq!(violations.get("id"), Some(&[NOT_BLANK.to_string()][..]));
    assert!(violations.contains("name"));
    assert!(!violations.contains("reference"));
}

#[test]
fn test_not_null() {
    let mut violations = Violations::new();
    let amount: Option<String> = None;
    let action = Some("credit".to_string());
    violations
        .not_null("amount", amount.as_ref())
        .not_null("action", action.as_ref());

    assert_eq!(violations.get("amount"), Some(&[NOT_PROVIDED.to_string()][..]));
    assert!(!violations.contains("action"));
}

#[test]
fn test_currency() {
    let mut violations = Violations::new();
    violations
        .currency("currency", Some("AUD"))
        .currency("settlement", Some("AUDS"))
        .currency("other", Some("aud"))
        .currency("unset", None);

    assert!(!violations.contains("currency"));
    assert!(violations.contains("settlement"));
    assert!(violations.contains("other"));
    assert!(!violations.contains("unset"));
}

#[test]
fn test_email_and_url() {
    let mut violations = Violations::new();
    violations
        .email("email", Some("user@email.test"))
        .email("bad_email", Some("not-an-email"))
        .url("url", Some("http://sdktest.local"))
        .url("bad_url", Some("sdktest"))
        .url("script", Some("javascript:alert(1)"))
        .url("ftp", Some("ftp://sdktest.local/file"));

    assert!(!violations.contains("email"));
    assert_eq!(violations.get("bad_email"), Some(&[INVALID_EMAIL.to_string()][..]));
    assert!(!violations.contains("url"));
    assert_eq!(violations.get("bad_url"), Some(&[INVALID_URL.to_string()][..]));
    assert_eq!(violations.get("script"), Some(&[INVALID_URL.to_string()][..]));
    assert!(violations.contains("ftp"));
}

#[test]
fn test_amount() {
    let mut violations = Violations::new();
    violations
        .amount("a", Some("10.00"))
        .amount("b", Some("0"))
        .amount("c", Some("-1"))
        .amount("d", Some("ten"));

    assert!(!violations.contains("a"));
    assert!(violations.contains("b"));
    assert!(violations.contains("c"));
    assert!(violations.contains("d"));
}

#[test]
fn test_zulu_datetime() {
    let mut violations = Violations::new();
    violations
        .zulu_datetime("created_at", Some("2019-07-31T06:08:07Z"))
        .zulu_datetime("updated_at", Some("31/07/2019"));

    assert!(!violations.contains("created_at"));
    assert_eq!(
        violations.get("updated_at"),
        Some(&[INVALID_DATETIME.to_string()][..])
    );
}

#[test]
fn test_nested_prefix() {
    let mut gateway = Violations::new();
    gateway.not_blank("line_of_business", None);

    let mut violations = Violations::new();
    violations.nested("gateway", gateway);

    assert!(violations.contains("gateway.line_of_business"));
}

#[test]
fn test_violations_serialize_as_map() {
    let mut violations = Violations::new();
    violations.not_blank("id", None).currency("currency", Some("AUDS"));

    let json = serde_json::to_value(&violations).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "currency": ["This value is not a valid currency."],
            "id": ["This value should not be blank."]
        })
    );
    assert_eq!(
        violations.to_string(),
        "currency: This value is not a valid currency.; id: This value should not be blank."
    );
}
