//! # auth-core
//!
//! Domain layer containing the user record, the session entity, and the store traits.
//! This crate has zero dependencies on infrastructure (file system, web framework, etc.).

pub mod entities;
pub mod error;
pub mod traits;

// Re-export commonly used types at crate root
pub use entities::{Session, UserMap, UserRecord};
pub use error::DomainError;
pub use traits::{RepoResult, SessionStore, UserStore};
