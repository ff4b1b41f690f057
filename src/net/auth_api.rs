//! Authentication service calls.

use super::error::ApiError;
use super::http;
use super::types::{Credentials, TokenResponse, User};
use crate::config;

/// Submit credentials to `POST /api/auth/login`; returns the issued bearer
/// token.
///
/// # Errors
///
/// `ApiError::Unauthorized` when the backend rejects the credentials,
/// `ApiError::Service` on transport failure.
pub async fn login(credentials: &Credentials) -> Result<String, ApiError> {
    let response: TokenResponse = http::post_json(&config::login(), credentials).await?;
    Ok(response.token)
}

/// Verify a stored credential against `GET /api/auth/validate`; returns the
/// resolved user record.
///
/// # Errors
///
/// `ApiError::Unauthorized` when the token is invalid or expired,
/// `ApiError::Service` on transport failure.
pub async fn validate(token: &str) -> Result<User, ApiError> {
    http::get_json_bearer(&config::validate(), token).await
}
