//! Read-side port for companies and positions.

use async_trait::async_trait;

use crate::domain::{Company, CompanyId, Position, PositionId};

use super::define_port_error;

define_port_error! {
    /// Errors raised when reading the catalogue.
    pub enum CatalogueRepositoryError {
        /// Reading the collections failed.
        Query { message: String } => "catalogue query failed: {message}",
    }
}

/// Port for reading companies and their positions.
///
/// Companies are returned without positions attached. Both collections keep
/// insertion order.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CatalogueRepository: Send + Sync {
    /// Every company in insertion order.
    async fn list_companies(&self) -> Result<Vec<Company>, CatalogueRepositoryError>;

    /// A single company.
    async fn find_company(&self, id: &CompanyId)
    -> Result<Option<Company>, CatalogueRepositoryError>;

    /// Positions in insertion order, restricted to one company when given.
    async fn list_positions(
        &self,
        company_id: Option<CompanyId>,
    ) -> Result<Vec<Position>, CatalogueRepositoryError>;

    /// A single position.
    async fn find_position(
        &self,
        id: &PositionId,
    ) -> Result<Option<Position>, CatalogueRepositoryError>;
}
