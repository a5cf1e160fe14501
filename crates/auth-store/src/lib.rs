//! # auth-store
//!
//! Infrastructure layer implementing the store traits from `auth-core`:
//! a JSON flat-file credential store, an in-memory credential store,
//! and an in-memory session table.

pub mod error;
pub mod sessions;
pub mod users;

pub use sessions::InMemorySessionStore;
pub use users::{InMemoryUserStore, JsonFileUserStore};
