//! Authentication endpoints
//!
//! # Endpoints
//!
//! - `POST /v1/auth/signup` - Register a new user, returns a bearer token
//! - `POST /v1/auth/login` - Authenticate, returns a bearer token
//!
//! Validation, uniqueness checks, and credential verification all happen in
//! the shared [`AuthService`]; these handlers only shape requests and
//! responses.
//!
//! [`AuthService`]: taskboard_shared::services::AuthService

use crate::{app::AppState, error::ApiResult};
use axum::{extract::State, http::StatusCode, Json};
use serde::{Deserialize, Serialize};
use taskboard_shared::services::auth::SignupInput;

/// Signup request
#[derive(Debug, Deserialize)]
pub struct SignupRequest {
    /// Email address, unique per account
    pub email: String,

    /// Display name, 2-20 characters
    pub username: String,

    /// Password; at least 6 characters with upper and lower case
    pub password: String,
}

/// Login request
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    /// Email address
    pub email: String,

    /// Password
    pub password: String,
}

/// Token response, shared by signup and login
#[derive(Debug, Serialize, Deserialize)]
pub struct TokenResponse {
    /// Bearer token, valid for 24 hours
    pub token: String,
}

/// Registers a new user.
///
/// # Endpoint
///
/// ```text
/// POST /v1/auth/signup
/// {"email": "a@b.com", "username": "ab", "password": "Abcdef1"}
/// ```
///
/// # Errors
///
/// - `400 Bad Request`: a field failed validation
/// - `409 Conflict`: email already registered
pub async fn signup(
    State(state): State<AppState>,
    Json(req): Json<SignupRequest>,
) -> ApiResult<(StatusCode, Json<TokenResponse>)> {
    let token = state
        .auth
        .signup(SignupInput {
            email: req.email,
            username: req.username,
            password: req.password,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(TokenResponse { token })))
}

/// Authenticates a user.
///
/// # Endpoint
///
/// ```text
/// POST /v1/auth/login
/// {"email": "a@b.com", "password": "Abcdef1"}
/// ```
///
/// # Errors
///
/// - `401 Unauthorized`: unknown email or wrong password, reported
///   identically as "Invalid credentials."
pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> ApiResult<Json<TokenResponse>> {
    let token = state.auth.login(&req.email, &req.password).await?;

    Ok(Json(TokenResponse { token }))
}
