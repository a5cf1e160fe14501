//! Response DTOs for API endpoints
//!
//! All response DTOs implement `Serialize` for JSON output.
//! None of them carries a password hash.

use chrono::{DateTime, Utc};
use serde::Serialize;

// ============================================================================
// Auth Responses
// ============================================================================

/// Confirmation returned after a successful registration
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct RegisterResponse {
    pub msg: String,
}

impl RegisterResponse {
    pub fn registered() -> Self {
        Self {
            msg: "User registered successfully".to_string(),
        }
    }
}

/// Bearer token issued by a successful login
#[derive(Debug, Clone, Serialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub token_type: String,
}

impl TokenResponse {
    pub fn bearer(access_token: String) -> Self {
        Self {
            access_token,
            token_type: "bearer".to_string(),
        }
    }
}

// ============================================================================
// User Responses
// ============================================================================

/// Current user (from /users/me)
#[derive(Debug, Clone, Serialize)]
pub struct CurrentUserResponse {
    pub username: String,
    pub email: String,
    pub full_name: Option<String>,
    pub disabled: Option<bool>,
}

// ============================================================================
// Health Responses
// ============================================================================

/// Health check response
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: DateTime<Utc>,
}

impl HealthResponse {
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            timestamp: Utc::now(),
        }
    }
}

/// Readiness check response
#[derive(Debug, Clone, Serialize)]
pub struct ReadinessResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub checks: HealthChecks,
}

/// Health check status for each dependency
#[derive(Debug, Clone, Serialize)]
pub struct HealthChecks {
    pub storage: String,
}

impl ReadinessResponse {
    pub fn ready(storage_healthy: bool) -> Self {
        let status_str = |healthy: bool| {
            if healthy {
                "healthy".to_string()
            } else {
                "unhealthy".to_string()
            }
        };

        Self {
            status: if storage_healthy { "ready" } else { "not_ready" }.to_string(),
            timestamp: Utc::now(),
            checks: HealthChecks {
                storage: status_str(storage_healthy),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_response() {
        let json = serde_json::to_value(RegisterResponse::registered()).unwrap();
        assert_eq!(json, serde_json::json!({"msg": "User registered successfully"}));
    }

    #[test]
    fn test_token_response() {
        let json = serde_json::to_value(TokenResponse::bearer("tok".to_string())).unwrap();
        assert_eq!(json["access_token"], "tok");
        assert_eq!(json["token_type"], "bearer");
    }

    #[test]
    fn test_health_response() {
        let health = HealthResponse::healthy();
        assert_eq!(health.status, "healthy");
    }

    #[test]
    fn test_readiness_response() {
        let ready = ReadinessResponse::ready(true);
        assert_eq!(ready.status, "ready");
        assert_eq!(ready.checks.storage, "healthy");

        let not_ready = ReadinessResponse::ready(false);
        assert_eq!(not_ready.status, "not_ready");
        assert_eq!(not_ready.checks.storage, "unhealthy");
    }
}
