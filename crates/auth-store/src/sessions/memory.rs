//! In-memory session table
//!
//! Sessions are keyed by their opaque token and live for the lifetime of the process.

use async_trait::async_trait;
use chrono::Utc;
use dashmap::DashMap;

use auth_core::entities::Session;
use auth_core::traits::{RepoResult, SessionStore};

/// Session table backed by a concurrent hash map
#[derive(Debug, Default)]
pub struct InMemorySessionStore {
    sessions: DashMap<String, Session>,
}

impl InMemorySessionStore {
    /// Create an empty session table
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored sessions
    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    /// Check if the table is empty
    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}

#[async_trait]
impl SessionStore for InMemorySessionStore {
    async fn insert(&self, session: Session) -> RepoResult<()> {
        tracing::debug!(username = %session.username, "Stored session");
        self.sessions.insert(session.session_id.clone(), session);
        Ok(())
    }

    async fn get(&self, session_id: &str) -> RepoResult<Option<Session>> {
        Ok(self.sessions.get(session_id).map(|entry| entry.value().clone()))
    }

    async fn remove(&self, session_id: &str) -> RepoResult<bool> {
        Ok(self.sessions.remove(session_id).is_some())
    }

    async fn purge_expired(&self) -> RepoResult<usize> {
        let now = Utc::now();
        let before = self.sessions.len();
        self.sessions.retain(|_, session| !session.is_expired_at(now));
        Ok(before.saturating_sub(self.sessions.len()))
    }
}
