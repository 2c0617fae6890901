//! Password hashing using Argon2id
//!
//! Plaintext passwords never reach storage: signup hashes them here, and login
//! verifies against the stored hash. The cost parameters are the argon2 crate
//! defaults and are embedded in the PHC string, so they can be raised later
//! without invalidating existing hashes.
//!
//! # Example
//!
//! ```
//! use taskboard_shared::auth::password::{hash_password, verify_password};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let hash = hash_password("Abcdef1")?;
//! assert!(verify_password("Abcdef1", &hash)?);
//! assert!(!verify_password("wrong", &hash)?);
//! # Ok(())
//! # }
//! ```

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};

/// Error type for password hashing operations
#[derive(Debug, thiserror::Error)]
pub enum PasswordError {
    /// Failed to hash password
    #[error("Failed to hash password: {0}")]
    HashError(String),

    /// Failed to verify password
    #[error("Failed to verify password: {0}")]
    VerifyError(String),

    /// Invalid password hash format
    #[error("Invalid password hash format: {0}")]
    InvalidHash(String),
}

/// Hashes a password with a freshly generated random salt.
///
/// Returns a PHC string (`$argon2id$v=19$...`) that embeds the algorithm,
/// parameters, salt, and hash.
///
/// # Errors
///
/// Returns `PasswordError::HashError` if hashing fails.
pub fn hash_password(password: &str) -> Result<String, PasswordError> {
    let salt = SaltString::generate(&mut OsRng);

    let password_hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| PasswordError::HashError(format!("Hash generation failed: {}", e)))?;

    Ok(password_hash.to_string())
}

/// Verifies a password against a stored hash.
///
/// Uses the argon2 crate's constant-time verification. A wrong password is
/// `Ok(false)`, not an error; only a malformed hash or an internal failure
/// produces `Err`.
pub fn verify_password(password: &str, hash: &str) -> Result<bool, PasswordError> {
    let parsed_hash = PasswordHash::new(hash)
        .map_err(|e| PasswordError::InvalidHash(format!("Failed to parse hash: {}", e)))?;

    match Argon2::default().verify_password(password.as_bytes(), &parsed_hash) {
        Ok(_) => Ok(true),
        Err(argon2::password_hash::Error::Password) => Ok(false),
        Err(e) => Err(PasswordError::VerifyError(format!(
            "Verification failed: {}",
            e
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_is_phc_string() {
        let hash = hash_password("Abcdef1").expect("Hash should succeed");
        assert!(hash.starts_with("$argon2id$"));
        assert_ne!(hash, "Abcdef1");
    }

    #[test]
    fn test_same_password_hashes_differently() {
        let hash1 = hash_password("Abcdef1").expect("Hash 1 should succeed");
        let hash2 = hash_password("Abcdef1").expect("Hash 2 should succeed");

        // Random salt per call
        assert_ne!(hash1, hash2);
    }

    #[test]
    fn test_verify_correct_password() {
        let hash = hash_password("correct_password").expect("Hash should succeed");
        assert!(verify_password("correct_password", &hash).expect("Verify should succeed"));
    }

    #[test]
    fn test_verify_wrong_password() {
        let hash = hash_password("correct_password").expect("Hash should succeed");
        assert!(!verify_password("wrong_password", &hash).expect("Verify should succeed"));
    }

    #[test]
    fn test_verify_hash_of_other_password() {
        let hash = hash_password("Qwerty9").expect("Hash should succeed");
        assert!(!verify_password("Abcdef1", &hash).expect("Verify should succeed"));
    }

    #[test]
    fn test_verify_invalid_hash_is_error() {
        assert!(verify_password("password", "not-a-phc-string").is_err());
        assert!(verify_password("password", "$argon2id$truncated").is_err());
    }

    #[test]
    fn test_hash_verify_roundtrip() {
        let passwords = vec![
            "Abcdef1",
            "With Spaces 9A",
            "special!@#$%Aa",
            "unicode-密码-Aa1",
        ];

        for password in passwords {
            let hash = hash_password(password).expect("Hash should succeed");
            assert!(
                verify_password(password, &hash).expect("Verify should succeed"),
                "Password '{}' should verify",
                password
            );
        }
    }
}
