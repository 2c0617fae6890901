//! Bearer token issuance and verification
//!
//! Tokens are HS256-signed JWTs carrying the user id as the `sub` claim and
//! expiring 24 hours after issuance. They are stateless: nothing is persisted
//! and there is no revocation list.
//!
//! Verification is deliberately opaque. Signature mismatch, expiry, a
//! malformed token, and a missing subject all surface as [`TokenError::Invalid`]
//! so the caller (and therefore the client) learns nothing about why a
//! credential was rejected.
//!
//! # Example
//!
//! ```
//! use taskboard_shared::auth::token::{issue, verify};
//! use uuid::Uuid;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let secret = "test-secret-key-at-least-32-bytes-long";
//! let user_id = Uuid::new_v4();
//!
//! let token = issue(user_id, secret)?;
//! assert_eq!(verify(&token, secret)?, user_id);
//! # Ok(())
//! # }
//! ```

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Token issuer claim value
const ISSUER: &str = "taskboard";

/// How long an issued token stays valid, in hours
pub const TOKEN_TTL_HOURS: i64 = 24;

/// Error type for token operations
#[derive(Debug, thiserror::Error)]
pub enum TokenError {
    /// Failed to sign a token
    #[error("Failed to sign token: {0}")]
    Sign(String),

    /// Verification failed for any reason (signature, expiry, format, claims)
    #[error("Invalid token")]
    Invalid,
}

/// JWT claims carried by a bearer token
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject - user ID
    pub sub: Uuid,

    /// Issuer - always "taskboard"
    pub iss: String,

    /// Issued at (Unix timestamp)
    pub iat: i64,

    /// Expiration time (Unix timestamp)
    pub exp: i64,
}

impl Claims {
    /// Creates claims for a user with the standard 24-hour expiry
    pub fn new(user_id: Uuid) -> Self {
        Self::with_expiration(user_id, Duration::hours(TOKEN_TTL_HOURS))
    }

    /// Creates claims with a custom expiry, measured from now.
    ///
    /// A negative duration produces an already-expired token, which the tests
    /// use to exercise expiry handling.
    pub fn with_expiration(user_id: Uuid, expires_in: Duration) -> Self {
        let now = Utc::now();

        Self {
            sub: user_id,
            iss: ISSUER.to_string(),
            iat: now.timestamp(),
            exp: (now + expires_in).timestamp(),
        }
    }
}

/// Signs claims into a JWT string.
pub fn sign(claims: &Claims, secret: &str) -> Result<String, TokenError> {
    let header = Header::new(Algorithm::HS256);
    let key = EncodingKey::from_secret(secret.as_bytes());

    encode(&header, claims, &key).map_err(|e| TokenError::Sign(format!("Token encoding failed: {}", e)))
}

/// Issues a fresh 24-hour token for a user.
pub fn issue(user_id: Uuid, secret: &str) -> Result<String, TokenError> {
    sign(&Claims::new(user_id), secret)
}

/// Verifies a token and returns the user id it was issued for.
///
/// Checks the signature, expiry, and issuer. Every failure mode maps to
/// [`TokenError::Invalid`]; the distinction is intentionally not exposed.
pub fn verify(token: &str, secret: &str) -> Result<Uuid, TokenError> {
    let key = DecodingKey::from_secret(secret.as_bytes());

    let mut validation = Validation::new(Algorithm::HS256);
    validation.set_issuer(&[ISSUER]);
    validation.validate_exp = true;

    let token_data = decode::<Claims>(token, &key, &validation).map_err(|_| TokenError::Invalid)?;

    Ok(token_data.claims.sub)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &str = "test-secret-key-at-least-32-bytes-long";

    #[test]
    fn test_issue_and_verify_roundtrip() {
        let user_id = Uuid::new_v4();

        let token = issue(user_id, SECRET).expect("Should issue token");
        let verified = verify(&token, SECRET).expect("Should verify token");

        assert_eq!(verified, user_id);
    }

    #[test]
    fn test_verify_with_wrong_secret() {
        let token = issue(Uuid::new_v4(), SECRET).expect("Should issue token");

        let result = verify(&token, "a-completely-different-secret-value");
        assert!(matches!(result, Err(TokenError::Invalid)));
    }

    #[test]
    fn test_verify_tampered_signature() {
        let token = issue(Uuid::new_v4(), SECRET).expect("Should issue token");

        // Flip the last character of the signature segment
        let mut tampered = token.clone();
        let last = tampered.pop().unwrap();
        tampered.push(if last == 'A' { 'B' } else { 'A' });

        assert!(matches!(verify(&tampered, SECRET), Err(TokenError::Invalid)));
    }

    #[test]
    fn test_verify_expired_token() {
        // Expired an hour ago, well past jsonwebtoken's default leeway
        let claims = Claims::with_expiration(Uuid::new_v4(), Duration::seconds(-3600));
        let token = sign(&claims, SECRET).expect("Should sign token");

        assert!(matches!(verify(&token, SECRET), Err(TokenError::Invalid)));
    }

    #[test]
    fn test_verify_malformed_token() {
        assert!(matches!(verify("not-a-jwt", SECRET), Err(TokenError::Invalid)));
        assert!(matches!(verify("", SECRET), Err(TokenError::Invalid)));
        assert!(matches!(
            verify("aGVhZGVy.cGF5bG9hZA", SECRET),
            Err(TokenError::Invalid)
        ));
    }

    #[test]
    fn test_verify_wrong_issuer() {
        let mut claims = Claims::new(Uuid::new_v4());
        claims.iss = "someone-else".to_string();
        let token = sign(&claims, SECRET).expect("Should sign token");

        assert!(matches!(verify(&token, SECRET), Err(TokenError::Invalid)));
    }

    #[test]
    fn test_claims_expiry_window() {
        let claims = Claims::new(Uuid::new_v4());
        let lifetime = claims.exp - claims.iat;

        assert_eq!(lifetime, TOKEN_TTL_HOURS * 3600);
    }
}
