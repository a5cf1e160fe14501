//! Domain entities - core business objects

mod session;
mod user;

pub use session::Session;
pub use user::{UserMap, UserRecord};
