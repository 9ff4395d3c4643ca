//! In-memory placement store.

mod id_sequence;
mod seed;
mod store;

pub use seed::SeedError;
pub use store::{InMemoryPlacementStore, StoreSeed};
