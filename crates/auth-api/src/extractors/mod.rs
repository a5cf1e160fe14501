//! Axum extractors for request handling
//!
//! Custom extractors for bearer authentication and validated bodies.

mod auth;
mod validated;

pub use auth::BearerToken;
pub use validated::{ValidatedForm, ValidatedJson};
