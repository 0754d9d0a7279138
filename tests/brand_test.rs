use serde_json::json;
use small_utils::core::brand::DEFAULT_MISMATCH_PREFIX;
use small_utils::{create_brand, BrandDescriptor, BrandTag, Branded, Unbrand, Unknown, UtilsError};

struct EmailTag;

impl BrandTag for EmailTag {
    const NAME: &'static str = "EMail";
}

type Email = Branded<String, EmailTag>;

fn email_predicate(value: &Unknown) -> bool {
    value.as_str().is_some_and(|s| s.contains('@'))
}

fn email() -> BrandDescriptor<String, EmailTag> {
    create_brand(email_predicate as fn(&Unknown) -> bool)
}

#[test]
fn test_from_returns_valid_email() {
    let email: Email = email().from(json!("a@b.com"), None).unwrap();
    assert_eq!(email.as_inner(), "a@b.com");
}

#[test]
fn test_from_rejects_with_default_message() {
    let err = email().from(json!("not-an-email"), None).unwrap_err();
    assert!(matches!(err, UtilsError::TypeMismatch { .. }));
    assert_eq!(
        err.to_string(),
        "Value does not match the brand criteria: not-an-email"
    );
}

#[test]
fn test_from_rejects_with_custom_message() {
    let err = email().from(json!("x"), Some("bad email")).unwrap_err();
    assert_eq!(err.to_string(), "bad email");
}

#[test]
fn test_is_never_fails_on_foreign_input() {
    let descriptor = email();
    let inputs = [
        json!(123),
        Unknown::Null,
        json!(""),
        json!([]),
        json!({}),
        json!(false),
    ];
    for input in &inputs {
        assert!(!descriptor.is(input), "{}", input);
    }
    assert!(!descriptor.is_present(None));
}

#[test]
fn test_default_message_uses_stringified_value() {
    let descriptor = email();
    for (input, rendered) in [
        (json!(123), "123"),
        (Unknown::Null, "null"),
        (json!([1, 2]), "1,2"),
        (json!({"a": 1}), "[object Object]"),
    ] {
        let err = descriptor.from(input, None).unwrap_err();
        assert_eq!(err.to_string(), format!("{}{}", DEFAULT_MISMATCH_PREFIX, rendered));
    }
}

#[test]
fn test_unbrand_returns_base() {
    let email = email().from(json!("z@z"), None).unwrap();
    let base: String = email.unbrand();
    assert_eq!(base, "z@z");
    assert_eq!("plain".to_string().unbrand(), "plain");
}

#[test]
fn test_branded_values_serialize_as_base() -> anyhow::Result<()> {
    let email = email().from(json!("s@t"), None)?;
    assert_eq!(serde_json::to_string(&email)?, "\"s@t\"");
    Ok(())
}
