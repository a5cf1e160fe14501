//! Test fixtures and data generators
//!
//! Provides reusable test data for integration tests.

use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};

/// Counter for unique test data
static COUNTER: AtomicU64 = AtomicU64::new(1);

/// Get a unique suffix for test data
pub fn unique_suffix() -> u64 {
    COUNTER.fetch_add(1, Ordering::SeqCst)
}

/// Registration request
#[derive(Debug, Clone, Serialize)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
}

impl RegisterRequest {
    pub fn new(username: &str, email: &str, password: &str) -> Self {
        Self {
            username: username.to_string(),
            email: email.to_string(),
            password: password.to_string(),
            full_name: None,
        }
    }

    pub fn unique() -> Self {
        let suffix = unique_suffix();
        Self::new(
            &format!("testuser{suffix}"),
            &format!("test{suffix}@example.com"),
            "TestPass123!",
        )
    }
}

/// Token form (`username` carries the email)
#[derive(Debug, Serialize)]
pub struct TokenForm {
    pub username: String,
    pub password: String,
}

impl TokenForm {
    pub fn new(email: &str, password: &str) -> Self {
        Self {
            username: email.to_string(),
            password: password.to_string(),
        }
    }

    pub fn from_register(reg: &RegisterRequest) -> Self {
        Self::new(&reg.email, &reg.password)
    }
}

/// Registration confirmation
#[derive(Debug, Deserialize)]
pub struct RegisterResponse {
    pub msg: String,
}

/// Token response
#[derive(Debug, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub token_type: String,
}

/// Current user response
#[derive(Debug, Deserialize)]
pub struct UserResponse {
    pub username: String,
    pub email: String,
    pub full_name: Option<String>,
    pub disabled: Option<bool>,
}

/// Error envelope
#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    pub error: ErrorDetail,
}

/// Error detail
#[derive(Debug, Deserialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
}
