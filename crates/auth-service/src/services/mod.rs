//! Business logic services
//!
//! This module contains the service layer implementations that handle
//! registration, login and session resolution.

pub mod auth;
pub mod context;
pub mod error;
pub mod session;

pub use auth::AuthService;
pub use context::{ServiceContext, ServiceContextBuilder};
pub use error::{ServiceError, ServiceResult};
pub use session::SessionService;
