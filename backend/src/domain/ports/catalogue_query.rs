//! Driving port for browsing companies and positions.

use async_trait::async_trait;

use crate::domain::{Company, CompanyId, Error, Position, PositionId};

/// Catalogue reads. Companies always carry their positions.
#[async_trait]
pub trait CatalogueQuery: Send + Sync {
    /// Every company in insertion order.
    async fn companies(&self) -> Result<Vec<Company>, Error>;

    /// Companies whose name, description or location contains `term`,
    /// ignoring case. A blank term returns every company.
    async fn search_companies(&self, term: &str) -> Result<Vec<Company>, Error>;

    /// A single company.
    async fn company(&self, id: &CompanyId) -> Result<Option<Company>, Error>;

    /// Every position, or only those of `company_id`.
    async fn positions(&self, company_id: Option<CompanyId>) -> Result<Vec<Position>, Error>;

    /// A single position.
    async fn position(&self, id: &PositionId) -> Result<Option<Position>, Error>;
}
