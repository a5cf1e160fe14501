//! Authentication service
//!
//! Handles user registration, login and bearer token resolution.

use auth_common::AppError;
use auth_core::entities::UserRecord;
use auth_core::traits::check_unique;
use tracing::{info, instrument, warn};
use validator::Validate;

use crate::dto::{
    CurrentUserResponse, LoginRequest, RegisterRequest, RegisterResponse, TokenResponse,
};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};
use super::session::SessionService;

/// Authentication service
pub struct AuthService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> AuthService<'a> {
    /// Create a new AuthService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Register a new user
    #[instrument(skip(self, request), fields(username = %request.username, email = %request.email))]
    pub async fn register(&self, request: RegisterRequest) -> ServiceResult<RegisterResponse> {
        request
            .validate()
            .map_err(|e| ServiceError::validation(e.to_string()))?;

        // Reject duplicates before hashing; insert_new re-checks under the write lock
        let users = self.ctx.user_store().load().await?;
        check_unique(&users, &request.username, &request.email).map_err(|e| {
            warn!(error = %e, "Registration rejected");
            ServiceError::from(e)
        })?;

        let password_service = self.ctx.password_service().clone();
        let password = request.password;
        let password_hash = run_blocking(move || password_service.hash(&password)).await??;

        let user = UserRecord::new(request.username, request.email, password_hash)
            .with_full_name(request.full_name);

        self.ctx.user_store().insert_new(user).await.map_err(|e| {
            if e.is_conflict() {
                warn!(error = %e, "Registration lost a race with a concurrent request");
            }
            ServiceError::from(e)
        })?;

        info!("User registered successfully");

        Ok(RegisterResponse::registered())
    }

    /// Login with email and password
    ///
    /// An unknown email and a wrong password fail with the same error, and
    /// both run one password verification.
    #[instrument(skip(self, request), fields(email = %request.email))]
    pub async fn login(&self, request: LoginRequest) -> ServiceResult<TokenResponse> {
        let user = self.ctx.user_store().find_by_email(&request.email).await?;
        let password_service = self.ctx.password_service().clone();
        let password = request.password;

        let Some(user) = user else {
            run_blocking(move || password_service.verify_dummy(&password)).await?;
            warn!("Login failed: user not found");
            return Err(AppError::InvalidCredentials.into());
        };

        let password_hash = user.password_hash.clone();
        let is_valid =
            run_blocking(move || password_service.verify(&password, &password_hash)).await??;

        if !is_valid {
            warn!(username = %user.username, "Login failed: invalid password");
            return Err(AppError::InvalidCredentials.into());
        }

        let session = SessionService::new(self.ctx).issue(&user).await?;

        info!(username = %user.username, "User logged in successfully");

        Ok(TokenResponse::bearer(session.session_id))
    }

    /// Resolve a bearer token to the current user
    #[instrument(skip_all)]
    pub async fn whoami(&self, token: &str) -> ServiceResult<CurrentUserResponse> {
        let user = SessionService::new(self.ctx)
            .resolve(token)
            .await?
            .ok_or_else(|| {
                warn!("Token did not resolve to a user");
                ServiceError::App(AppError::InvalidToken)
            })?;

        Ok(CurrentUserResponse::from(user))
    }
}

/// Run CPU-heavy password work off the async worker threads
async fn run_blocking<T, F>(f: F) -> ServiceResult<T>
where
    T: Send + 'static,
    F: FnOnce() -> T + Send + 'static,
{
    tokio::task::spawn_blocking(f)
        .await
        .map_err(|e| ServiceError::internal(format!("Password task failed: {e}")))
}
