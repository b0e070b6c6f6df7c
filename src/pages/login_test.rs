use super::*;

#[test]
fn validate_email_input_trims() {
    assert_eq!(validate_email_input("  user@example.com  "), Ok("user@example.com".to_owned()));
}

#[test]
fn validate_email_input_requires_value() {
    assert_eq!(validate_email_input("   "), Err("Enter an email first."));
}

#[test]
fn validate_email_input_requires_at_sign() {
    assert_eq!(validate_email_input("user.example.com"), Err("That does not look like an email address."));
}
