//! Application error types
//!
//! Unified error handling for the entire application.

use auth_core::DomainError;

/// Application-wide error type
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    // Registration errors
    #[error("Username already registered")]
    DuplicateUsername,

    #[error("Email already registered")]
    DuplicateEmail,

    // Authentication errors
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Invalid token")]
    InvalidToken,

    #[error("Not authenticated")]
    MissingAuth,

    /// A stored password hash could not be parsed or checked.
    /// The message stays generic so the hash scheme is not disclosed.
    #[error("Credential verification failed")]
    VerificationError,

    // Validation errors
    #[error("Validation error: {0}")]
    Validation(String),

    // Storage errors
    #[error("Storage error: {0}")]
    Storage(String),

    // Internal errors
    #[error("Internal server error")]
    Internal(#[source] anyhow::Error),

    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),
}

impl AppError {
    /// Get HTTP status code for this error
    #[must_use]
    pub fn status_code(&self) -> u16 {
        match self {
            // 400 Bad Request
            Self::DuplicateUsername
            | Self::DuplicateEmail
            | Self::InvalidCredentials
            | Self::InvalidToken
            | Self::Validation(_) => 400,

            // 401 Unauthorized
            Self::MissingAuth => 401,

            // 500 Internal Server Error
            Self::VerificationError | Self::Storage(_) | Self::Internal(_) | Self::Config(_) => {
                500
            }
        }
    }

    /// Get error code for API responses
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::DuplicateUsername => "DUPLICATE_USERNAME",
            Self::DuplicateEmail => "DUPLICATE_EMAIL",
            Self::InvalidCredentials => "INVALID_CREDENTIALS",
            Self::InvalidToken => "INVALID_TOKEN",
            Self::MissingAuth => "MISSING_AUTH",
            Self::VerificationError => "VERIFICATION_ERROR",
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::Storage(_) => "STORAGE_ERROR",
            Self::Internal(_) => "INTERNAL_ERROR",
            Self::Config(_) => "CONFIG_ERROR",
        }
    }

    /// Message safe to send to clients.
    ///
    /// Server errors collapse to a fixed string; details go to the logs.
    #[must_use]
    pub fn public_message(&self) -> String {
        if self.is_server_error() {
            "Internal server error".to_string()
        } else {
            self.to_string()
        }
    }

    /// Check if this is a server error (5xx)
    #[must_use]
    pub fn is_server_error(&self) -> bool {
        let status = self.status_code();
        (500..600).contains(&status)
    }
}

impl From<DomainError> for AppError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::UsernameTaken => Self::DuplicateUsername,
            DomainError::EmailTaken => Self::DuplicateEmail,
            DomainError::Storage(msg) | DomainError::Serialization(msg) => Self::Storage(msg),
        }
    }
}
