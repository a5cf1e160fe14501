//! Session entity - a bearer token bound to a username

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// A login session stored server-side and looked up by its token
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// Opaque random token handed to the client
    pub session_id: String,
    pub username: String,
    pub issued_at: DateTime<Utc>,
    /// `None` means the session never expires
    pub expires_at: Option<DateTime<Utc>>,
}

impl Session {
    /// Create a session issued now, optionally expiring after `ttl`.
    ///
    /// A `ttl` past the representable range expires at `DateTime::MAX_UTC`.
    pub fn new(session_id: String, username: String, ttl: Option<Duration>) -> Self {
        let issued_at = Utc::now();
        Self {
            session_id,
            username,
            issued_at,
            expires_at: ttl.map(|ttl| {
                issued_at
                    .checked_add_signed(ttl)
                    .unwrap_or(DateTime::<Utc>::MAX_UTC)
            }),
        }
    }

    /// Check if the session has expired at the given instant
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        self.expires_at.is_some_and(|expires_at| now >= expires_at)
    }

    /// Check if the session has expired
    pub fn is_expired(&self) -> bool {
        self.is_expired_at(Utc::now())
    }
}
