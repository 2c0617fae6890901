//! Domain error type
//!
//! Every non-success path in the core surfaces as one of these kinds; the API
//! layer maps them to HTTP statuses. Validation and lookup failures are raised
//! at the point of detection and never retried.
//!
//! Login failures deliberately collapse "no such user" and "wrong password"
//! into the single `InvalidCredentials` kind so the response does not reveal
//! which part was wrong.

use crate::auth::{password::PasswordError, token::TokenError};

/// Result type alias for domain operations
pub type Result<T> = std::result::Result<T, Error>;

/// Unified domain error
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Input failed a validation rule (format, length, malformed identifier)
    #[error("{0}")]
    BadInput(String),

    /// A uniqueness rule was violated (duplicate email)
    #[error("{0}")]
    Conflict(String),

    /// Login failed; does not distinguish missing user from wrong password
    #[error("Invalid credentials.")]
    InvalidCredentials,

    /// Caller is not allowed to act on the resource
    #[error("{0}")]
    Unauthorized(String),

    /// The resource does not resolve
    #[error("{0}")]
    NotFound(String),

    /// Anything unexpected; details are logged, never sent to clients
    #[error("{0}")]
    Internal(String),
}

/// Maps storage errors into domain kinds.
///
/// A unique-constraint violation on the users email column becomes `Conflict`:
/// the signup pre-check is check-then-insert, so under concurrent signups the
/// database constraint is the authoritative backstop and must produce the same
/// outcome as the pre-check.
impl From<sqlx::Error> for Error {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::RowNotFound => Error::NotFound("Resource not found.".to_string()),
            sqlx::Error::Database(db_err) => {
                if let Some(constraint) = db_err.constraint() {
                    if constraint.contains("email") {
                        return Error::Conflict("Email is already registered.".to_string());
                    }
                    // Any other constraint (foreign key, check) is a server-side
                    // invariant break, not a client conflict; the name stays in
                    // the logs and out of the response
                    return Error::Internal(format!("Constraint violation: {}", constraint));
                }
                Error::Internal(format!("Database error: {}", db_err))
            }
            _ => Error::Internal(format!("Database error: {}", err)),
        }
    }
}

impl From<PasswordError> for Error {
    fn from(err: PasswordError) -> Self {
        Error::Internal(format!("Password operation failed: {}", err))
    }
}

impl From<TokenError> for Error {
    fn from(err: TokenError) -> Self {
        match err {
            TokenError::Invalid => Error::Unauthorized("Authentication invalid.".to_string()),
            TokenError::Sign(msg) => Error::Internal(format!("Token signing failed: {}", msg)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::BadInput("Task must be between 1 and 100 characters long.".to_string());
        assert_eq!(
            err.to_string(),
            "Task must be between 1 and 100 characters long."
        );

        assert_eq!(Error::InvalidCredentials.to_string(), "Invalid credentials.");
    }

    #[test]
    fn test_row_not_found_maps_to_not_found() {
        let err = Error::from(sqlx::Error::RowNotFound);
        assert!(matches!(err, Error::NotFound(_)));
    }

    #[test]
    fn test_token_errors_map_to_kinds() {
        assert!(matches!(
            Error::from(TokenError::Invalid),
            Error::Unauthorized(_)
        ));
        assert!(matches!(
            Error::from(TokenError::Sign("boom".to_string())),
            Error::Internal(_)
        ));
    }
}
