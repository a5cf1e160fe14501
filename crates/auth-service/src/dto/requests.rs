//! Request DTOs for API endpoints
//!
//! All request DTOs implement `Deserialize` and `Validate` for input validation.

use serde::Deserialize;
use validator::Validate;

// ============================================================================
// Auth Requests
// ============================================================================

/// User registration request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(length(min = 1, max = 64, message = "Username must be 1-64 characters"))]
    pub username: String,

    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[validate(length(min = 1, max = 128, message = "Password must be 1-128 characters"))]
    pub password: String,

    #[validate(length(max = 128, message = "Full name must be at most 128 characters"))]
    #[serde(default)]
    pub full_name: Option<String>,
}

/// Login with email and password.
///
/// Fields are not validated: anything that matches no account is rejected as
/// invalid credentials.
#[derive(Debug, Clone, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// OAuth2 password-grant form posted to the token endpoint.
///
/// The `username` field carries the account's email address.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct TokenRequest {
    pub username: String,
    pub password: String,
}

impl From<TokenRequest> for LoginRequest {
    fn from(form: TokenRequest) -> Self {
        Self {
            email: form.username,
            password: form.password,
        }
    }
}
