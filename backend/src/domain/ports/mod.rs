//! Domain ports defining the edges of the hexagon.
//!
//! Driven ports (repositories and the session store) describe what the
//! domain needs from storage. Each exposes a typed error built with
//! `define_port_error!` so the service can map failures predictably.
//! Driving ports describe what inbound adapters may ask of the domain.

mod macros;
pub(crate) use macros::define_port_error;

mod account;
mod application_repository;
mod applications;
mod catalogue_query;
mod catalogue_repository;
mod session_store;
mod user_repository;

pub use account::{AccountCommand, SessionQuery};
#[cfg(test)]
pub use application_repository::MockApplicationRepository;
pub use application_repository::{ApplicationRepository, ApplicationRepositoryError};
pub use applications::{ApplicationsCommand, ApplicationsQuery};
pub use catalogue_query::CatalogueQuery;
#[cfg(test)]
pub use catalogue_repository::MockCatalogueRepository;
pub use catalogue_repository::{CatalogueRepository, CatalogueRepositoryError};
#[cfg(test)]
pub use session_store::MockSessionStore;
pub use session_store::{SessionStore, SessionStoreError};
#[cfg(test)]
pub use user_repository::MockUserRepository;
pub use user_repository::{UserRepository, UserRepositoryError};
