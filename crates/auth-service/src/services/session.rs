//! Session service
//!
//! Issues opaque bearer tokens and resolves them back to users.

use auth_common::auth::generate_session_token;
use auth_core::entities::{Session, UserRecord};
use tracing::{debug, instrument};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Session service
pub struct SessionService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> SessionService<'a> {
    /// Create a new SessionService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Start a session for `user` and store it in the session table.
    ///
    /// Expired sessions are swept first so the table stays bounded.
    #[instrument(skip(self, user), fields(username = %user.username))]
    pub async fn issue(&self, user: &UserRecord) -> ServiceResult<Session> {
        let purged = self.ctx.session_store().purge_expired().await?;
        if purged > 0 {
            debug!(purged, "Expired sessions purged");
        }

        let session = Session::new(
            generate_session_token(),
            user.username.clone(),
            self.ctx.session_ttl(),
        );

        self.ctx.session_store().insert(session.clone()).await?;

        debug!(expires_at = ?session.expires_at, "Session issued");
        Ok(session)
    }

    /// Resolve a bearer token to the user it was issued for.
    ///
    /// Unknown tokens, expired sessions and sessions whose user is gone all
    /// resolve to `None`. Expired sessions are dropped from the table.
    #[instrument(skip_all)]
    pub async fn resolve(&self, token: &str) -> ServiceResult<Option<UserRecord>> {
        let Some(session) = self.ctx.session_store().get(token).await? else {
            return Ok(None);
        };

        if session.is_expired() {
            self.ctx.session_store().remove(token).await?;
            debug!(username = %session.username, "Expired session removed");
            return Ok(None);
        }

        self.ctx
            .user_store()
            .get(&session.username)
            .await
            .map_err(Into::into)
    }
}
