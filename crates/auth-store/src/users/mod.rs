//! Credential store implementations

mod json_file;
mod memory;

pub use json_file::JsonFileUserStore;
pub use memory::InMemoryUserStore;
