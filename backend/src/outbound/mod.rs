//! Outbound adapters implementing the domain's driven ports.
//!
//! - **memory**: `RwLock`-guarded collections seeded from the fixture store.
//! - **session**: the current-user slot, in memory or as files on disk.
//!
//! Adapters translate storage failures into port errors. They contain no
//! business rules beyond the uniqueness checks they enforce under lock.

pub mod memory;
pub mod session;
