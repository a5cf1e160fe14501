//! Session table implementations

mod memory;

pub use memory::InMemorySessionStore;
