//! Authentication utilities

mod password;
mod token;

pub use password::{hash_password, verify_password, PasswordService};
pub use token::{generate_session_token, SESSION_TOKEN_BYTES};
