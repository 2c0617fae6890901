//! Input validation rules
//!
//! Pure, stateless predicates invoked by the service flows before any
//! persistence call. Each rule reports a distinct human-readable message as a
//! [`Error::BadInput`]. Length bounds count Unicode scalar values, not bytes.
//!
//! # Rules
//!
//! - Username: 2 to 20 characters
//! - Email: standard email-address syntax
//! - Password: at least 6 characters with one lowercase and one uppercase letter
//! - Task content: 1 to 100 characters

use crate::error::Error;
use validator::ValidateEmail;

pub const USERNAME_LENGTH_MSG: &str = "Username must be between 2 and 20 characters long.";
pub const EMAIL_FORMAT_MSG: &str = "Must be a valid email.";
pub const PASSWORD_FORMAT_MSG: &str =
    "Password must contain an upper and lower case character and be at least 6 characters long.";
pub const TASK_CONTENT_LENGTH_MSG: &str = "Task must be between 1 and 100 characters long.";

/// Validates the username length.
pub fn validate_username(username: &str) -> Result<(), Error> {
    let len = username.chars().count();
    if !(2..=20).contains(&len) {
        return Err(Error::BadInput(USERNAME_LENGTH_MSG.to_string()));
    }
    Ok(())
}

/// Validates the email syntax.
pub fn validate_email(email: &str) -> Result<(), Error> {
    if !email.validate_email() {
        return Err(Error::BadInput(EMAIL_FORMAT_MSG.to_string()));
    }
    Ok(())
}

/// Validates the password format: length and character classes.
pub fn validate_password(password: &str) -> Result<(), Error> {
    let long_enough = password.chars().count() >= 6;
    let has_lower = password.chars().any(|c| c.is_lowercase());
    let has_upper = password.chars().any(|c| c.is_uppercase());

    if !(long_enough && has_lower && has_upper) {
        return Err(Error::BadInput(PASSWORD_FORMAT_MSG.to_string()));
    }
    Ok(())
}

/// Validates the task content length.
///
/// Bounds apply to the raw string; surrounding whitespace is not trimmed.
pub fn validate_task_content(content: &str) -> Result<(), Error> {
    let len = content.chars().count();
    if !(1..=100).contains(&len) {
        return Err(Error::BadInput(TASK_CONTENT_LENGTH_MSG.to_string()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn message(result: Result<(), Error>) -> String {
        match result {
            Err(Error::BadInput(msg)) => msg,
            other => panic!("Expected BadInput, got {:?}", other),
        }
    }

    #[test]
    fn test_username_bounds() {
        assert!(validate_username("a").is_err());
        assert!(validate_username("").is_err());
        assert!(validate_username(&"x".repeat(21)).is_err());

        assert!(validate_username("ab").is_ok());
        assert!(validate_username(&"x".repeat(20)).is_ok());
    }

    #[test]
    fn test_email_syntax() {
        assert!(validate_email("a@b.com").is_ok());
        assert!(validate_email("first.last@example.co.uk").is_ok());

        assert!(validate_email("").is_err());
        assert!(validate_email("not-an-email").is_err());
        assert!(validate_email("missing@tld@twice.com").is_err());
        assert!(validate_email("@nodomain").is_err());
    }

    #[test]
    fn test_password_rules() {
        assert!(validate_password("Abcdef1").is_ok());
        assert!(validate_password("aBcdef").is_ok());

        // Too short
        assert!(validate_password("Abc1").is_err());
        // No uppercase
        assert!(validate_password("abcdef1").is_err());
        // No lowercase
        assert!(validate_password("ABCDEF1").is_err());
        assert!(validate_password("").is_err());
    }

    #[test]
    fn test_task_content_bounds() {
        assert!(validate_task_content("").is_err());
        assert!(validate_task_content(&"x".repeat(101)).is_err());

        assert!(validate_task_content("x").is_ok());
        assert!(validate_task_content("buy milk").is_ok());
        assert!(validate_task_content(&"x".repeat(100)).is_ok());
    }

    #[test]
    fn test_whitespace_content_counts_as_is() {
        // Bounds apply to the raw string, so whitespace-only content passes
        assert!(validate_task_content("   ").is_ok());
    }

    #[test]
    fn test_messages_are_distinct_per_field() {
        let messages = vec![
            message(validate_username("")),
            message(validate_email("nope")),
            message(validate_password("short")),
            message(validate_task_content("")),
        ];

        for (i, a) in messages.iter().enumerate() {
            for b in messages.iter().skip(i + 1) {
                assert_ne!(a, b);
            }
        }
    }
}
