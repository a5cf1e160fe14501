//! Store traits (ports) - define the interface for data access
//!
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation.

use async_trait::async_trait;

use crate::entities::{Session, UserMap, UserRecord};
use crate::error::DomainError;

/// Result type for store operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// User Store
// ============================================================================

#[async_trait]
pub trait UserStore: Send + Sync {
    /// Read the full store. Returns an empty map when nothing was saved yet.
    async fn load(&self) -> RepoResult<UserMap>;

    /// Replace the full store with `users`
    async fn save(&self, users: &UserMap) -> RepoResult<()>;

    /// Find a user by username
    async fn get(&self, username: &str) -> RepoResult<Option<UserRecord>>;

    /// Insert or overwrite a user, keyed by its username
    async fn put(&self, user: UserRecord) -> RepoResult<()>;

    /// Insert a user that must not collide with an existing username or email.
    ///
    /// The uniqueness check and the write happen as one step.
    async fn insert_new(&self, user: UserRecord) -> RepoResult<()>;

    /// Find a user by email (first match wins)
    async fn find_by_email(&self, email: &str) -> RepoResult<Option<UserRecord>> {
        let users = self.load().await?;
        Ok(users.into_values().find(|user| user.email == email))
    }
}

// ============================================================================
// Session Store
// ============================================================================

#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Store a session under its `session_id`
    async fn insert(&self, session: Session) -> RepoResult<()>;

    /// Look up a session by token
    async fn get(&self, session_id: &str) -> RepoResult<Option<Session>>;

    /// Remove a session, returning whether it existed
    async fn remove(&self, session_id: &str) -> RepoResult<bool>;

    /// Drop every session that has expired, returning how many were removed
    async fn purge_expired(&self) -> RepoResult<usize>;
}

/// Check a username and email against the store's uniqueness rules
pub fn check_unique(users: &UserMap, username: &str, email: &str) -> RepoResult<()> {
    if users.contains_key(username) {
        return Err(DomainError::UsernameTaken);
    }
    if users.values().any(|user| user.email == email) {
        return Err(DomainError::EmailTaken);
    }
    Ok(())
}
