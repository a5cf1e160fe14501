//! User record - a registered account and its credential

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// The full credential store contents, keyed by username.
///
/// A `BTreeMap` keeps serialization order stable, so writing back an
/// unchanged store produces identical bytes.
pub type UserMap = BTreeMap<String, UserRecord>;

/// A registered user as persisted in the credential store
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    pub username: String,
    pub email: String,
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub disabled: Option<bool>,
    /// Salted password hash in PHC string format
    #[serde(rename = "hashed_password")]
    pub password_hash: String,
}

impl UserRecord {
    /// Create a new record with required fields
    pub fn new(username: String, email: String, password_hash: String) -> Self {
        Self {
            username,
            email,
            full_name: None,
            disabled: None,
            password_hash,
        }
    }

    /// Set the display name
    #[must_use]
    pub fn with_full_name(mut self, full_name: Option<String>) -> Self {
        self.full_name = full_name;
        self
    }

    /// Check if the account is flagged as disabled
    #[inline]
    pub fn is_disabled(&self) -> bool {
        self.disabled.unwrap_or(false)
    }
}
