//! Session slot adapters.

mod atomic_io;
mod file;
mod memory;

pub use file::FileSessionStore;
pub use memory::InMemorySessionStore;
