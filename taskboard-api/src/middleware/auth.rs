//! Bearer-token authentication middleware
//!
//! Runs before every task route: extracts the `Authorization: Bearer` header,
//! verifies the token, loads the user it names, and stores the resolved
//! [`CurrentUser`] in the request extensions. Handlers receive the caller as
//! an explicit value; nothing downstream re-checks the credential.
//!
//! A missing header is reported as "authentication required"; any failure to
//! verify the token or resolve the user is the single opaque "authentication
//! invalid", so clients cannot probe for which step rejected them.

use axum::{
    extract::{Request, State},
    http::header,
    middleware::Next,
    response::Response,
};
use taskboard_shared::{auth::token, models::user::User};

use crate::{app::AppState, error::ApiError};

/// Message when no bearer credential is presented
pub const AUTHENTICATION_REQUIRED_MSG: &str = "Authentication required.";

/// Message when the credential or the user behind it does not check out
pub const AUTHENTICATION_INVALID_MSG: &str = "Authentication invalid.";

/// The authenticated caller, resolved once per request
#[derive(Debug, Clone)]
pub struct CurrentUser(pub User);

/// Authenticates the request and injects [`CurrentUser`].
pub async fn require_auth(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let auth_header = req
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .ok_or_else(|| ApiError::Unauthorized(AUTHENTICATION_REQUIRED_MSG.to_string()))?;

    let token = auth_header
        .strip_prefix("Bearer ")
        .filter(|t| !t.is_empty())
        .ok_or_else(|| ApiError::Unauthorized(AUTHENTICATION_REQUIRED_MSG.to_string()))?;

    let user_id = token::verify(token, state.jwt_secret())
        .map_err(|_| ApiError::Unauthorized(AUTHENTICATION_INVALID_MSG.to_string()))?;

    let user = User::find_by_id(&state.db, user_id)
        .await?
        .ok_or_else(|| ApiError::Unauthorized(AUTHENTICATION_INVALID_MSG.to_string()))?;

    req.extensions_mut().insert(CurrentUser(user));

    Ok(next.run(req).await)
}
