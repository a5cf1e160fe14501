//! Error handling utilities for stores

use std::io;
use std::path::Path;

use auth_core::error::DomainError;

/// Convert an I/O failure on `path` to a DomainError
pub fn map_io_error(action: &str, path: &Path, e: &io::Error) -> DomainError {
    DomainError::Storage(format!("Failed to {action} {}: {e}", path.display()))
}

/// Convert a JSON failure on `path` to a DomainError
pub fn map_json_error(path: &Path, e: &serde_json::Error) -> DomainError {
    DomainError::Serialization(format!("Invalid user store {}: {e}", path.display()))
}
