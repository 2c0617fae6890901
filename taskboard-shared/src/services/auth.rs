//! Signup and login flows
//!
//! Orchestrates the validation rules, password hashing, the user directory,
//! and token issuance. Both entry points return a bearer token on success.
//!
//! Failure messages are deliberately coarse: login never reveals whether the
//! email or the password was wrong, and signup reports only which field was
//! rejected, not what was found in the directory.

use sqlx::PgPool;
use uuid::Uuid;

use crate::auth::{password, token};
use crate::error::Error;
use crate::models::user::{CreateUser, User};
use crate::validation;

/// Message for a signup attempt with an email that is already registered
pub const EMAIL_TAKEN_MSG: &str = "Email is already registered.";

/// Signup input
#[derive(Debug, Clone)]
pub struct SignupInput {
    pub email: String,
    pub username: String,
    pub password: String,
}

/// Signup and login orchestration
#[derive(Clone)]
pub struct AuthService {
    db: PgPool,
    token_secret: String,
}

impl AuthService {
    /// Creates the service with its database pool and signing secret.
    pub fn new(db: PgPool, token_secret: impl Into<String>) -> Self {
        Self {
            db,
            token_secret: token_secret.into(),
        }
    }

    /// Registers a new user and returns a bearer token for them.
    ///
    /// Steps: validate username, email, and password; check email uniqueness;
    /// hash the password; create the user; issue a token.
    ///
    /// # Errors
    ///
    /// - `BadInput` if any field fails its validation rule
    /// - `Conflict` if the email is already registered. The pre-check is
    ///   check-then-insert, so a concurrent signup can slip past it; the
    ///   database unique constraint is the backstop and maps to the same
    ///   `Conflict` outcome via `From<sqlx::Error>`.
    pub async fn signup(&self, input: SignupInput) -> Result<String, Error> {
        validation::validate_username(&input.username)?;
        validation::validate_email(&input.email)?;
        validation::validate_password(&input.password)?;

        if User::find_by_email(&self.db, &input.email).await?.is_some() {
            return Err(Error::Conflict(EMAIL_TAKEN_MSG.to_string()));
        }

        let password_hash = password::hash_password(&input.password)?;

        let user = User::create(
            &self.db,
            CreateUser {
                email: input.email,
                username: input.username,
                password_hash,
            },
        )
        .await?;

        tracing::info!(user_id = %user.id, "user registered");

        Ok(token::issue(user.id, &self.token_secret)?)
    }

    /// Authenticates a user by email and password and returns a bearer token.
    ///
    /// # Errors
    ///
    /// `InvalidCredentials` whether the email is unknown or the password does
    /// not match; the two cases are indistinguishable to the caller.
    pub async fn login(&self, email: &str, password_input: &str) -> Result<String, Error> {
        let user = User::find_by_email(&self.db, email)
            .await?
            .ok_or(Error::InvalidCredentials)?;

        let valid = password::verify_password(password_input, &user.password_hash)?;
        if !valid {
            return Err(Error::InvalidCredentials);
        }

        Ok(token::issue(user.id, &self.token_secret)?)
    }

    /// Rotates a user's password: verifies the current one, then re-hashes
    /// and stores the new one.
    pub async fn change_password(
        &self,
        user_id: Uuid,
        current: &str,
        new_password: &str,
    ) -> Result<(), Error> {
        validation::validate_password(new_password)?;

        let user = User::find_by_id(&self.db, user_id)
            .await?
            .ok_or(Error::InvalidCredentials)?;

        if !password::verify_password(current, &user.password_hash)? {
            return Err(Error::InvalidCredentials);
        }

        let password_hash = password::hash_password(new_password)?;
        User::update_password_hash(&self.db, user_id, &password_hash).await?;

        Ok(())
    }

    /// Deletes a user account; all of their tasks are removed by cascade.
    pub async fn delete_account(&self, user_id: Uuid) -> Result<(), Error> {
        let deleted = User::delete(&self.db, user_id).await?;
        if !deleted {
            return Err(Error::NotFound("No user exists with that id.".to_string()));
        }

        tracing::info!(user_id = %user_id, "user account deleted");
        Ok(())
    }
}
