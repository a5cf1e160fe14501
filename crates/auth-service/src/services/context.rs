//! Service context - dependency container for services
//!
//! Holds the credential store, the session table and the password hasher.

use std::sync::Arc;

use auth_common::auth::PasswordService;
use auth_core::traits::{SessionStore, UserStore};
use chrono::Duration;

use super::error::{ServiceError, ServiceResult};

/// Service context containing all dependencies
///
/// Passed by reference to every service. It provides access to:
/// - The credential store (single read path for login and token resolution)
/// - The session table
/// - The password hasher
/// - The optional session lifetime
#[derive(Clone)]
pub struct ServiceContext {
    user_store: Arc<dyn UserStore>,
    session_store: Arc<dyn SessionStore>,
    password_service: PasswordService,
    session_ttl: Option<Duration>,
}

impl ServiceContext {
    /// Create a new service context
    pub fn new(
        user_store: Arc<dyn UserStore>,
        session_store: Arc<dyn SessionStore>,
        password_service: PasswordService,
        session_ttl: Option<Duration>,
    ) -> Self {
        Self {
            user_store,
            session_store,
            password_service,
            session_ttl,
        }
    }

    /// Get the credential store
    pub fn user_store(&self) -> &dyn UserStore {
        self.user_store.as_ref()
    }

    /// Get the session table
    pub fn session_store(&self) -> &dyn SessionStore {
        self.session_store.as_ref()
    }

    /// Get the password hasher
    pub fn password_service(&self) -> &PasswordService {
        &self.password_service
    }

    /// Lifetime of newly issued sessions, `None` when sessions never expire
    pub fn session_ttl(&self) -> Option<Duration> {
        self.session_ttl
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("user_store", &"dyn UserStore")
            .field("session_store", &"dyn SessionStore")
            .field("session_ttl", &self.session_ttl)
            .finish()
    }
}

/// Builder for creating ServiceContext
#[derive(Default)]
pub struct ServiceContextBuilder {
    user_store: Option<Arc<dyn UserStore>>,
    session_store: Option<Arc<dyn SessionStore>>,
    password_service: Option<PasswordService>,
    session_ttl: Option<Duration>,
}

impl ServiceContextBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn user_store(mut self, store: Arc<dyn UserStore>) -> Self {
        self.user_store = Some(store);
        self
    }

    pub fn session_store(mut self, store: Arc<dyn SessionStore>) -> Self {
        self.session_store = Some(store);
        self
    }

    pub fn password_service(mut self, service: PasswordService) -> Self {
        self.password_service = Some(service);
        self
    }

    pub fn session_ttl(mut self, ttl: Option<Duration>) -> Self {
        self.session_ttl = ttl;
        self
    }

    /// Build the ServiceContext
    ///
    /// # Errors
    /// Returns `ServiceError::Validation` if a store is missing
    pub fn build(self) -> ServiceResult<ServiceContext> {
        Ok(ServiceContext::new(
            self.user_store
                .ok_or_else(|| ServiceError::validation("user_store is required"))?,
            self.session_store
                .ok_or_else(|| ServiceError::validation("session_store is required"))?,
            self.password_service.unwrap_or_default(),
            self.session_ttl,
        ))
    }
}
