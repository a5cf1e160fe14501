//! Store traits (ports)

mod repositories;

pub use repositories::{check_unique, RepoResult, SessionStore, UserStore};
