//! Driving ports for submitting and tracking applications.

use async_trait::async_trait;

use crate::domain::{
    Application, ApplicationId, ApplicationStatus, ApplicationSummary, EnrichedApplication, Error,
    PositionId, UserId,
};

/// Application mutations.
#[async_trait]
pub trait ApplicationsCommand: Send + Sync {
    /// Apply for a position.
    ///
    /// Fails with `PositionNotFound` or `DuplicateApplication`; neither
    /// failure changes the collection.
    async fn apply_for_position(
        &self,
        user_id: &UserId,
        position_id: &PositionId,
    ) -> Result<Application, Error>;

    /// Replace an application's status. `None` when the id is unknown.
    async fn update_application_status(
        &self,
        id: &ApplicationId,
        status: ApplicationStatus,
    ) -> Result<Option<Application>, Error>;
}

/// Application reads.
#[async_trait]
pub trait ApplicationsQuery: Send + Sync {
    /// The user's applications joined with their company and position.
    ///
    /// Applications whose company or position cannot be resolved are left out.
    async fn user_applications(&self, user_id: &UserId)
    -> Result<Vec<EnrichedApplication>, Error>;

    /// Whether the user has applied for the position.
    async fn has_applied(&self, user_id: &UserId, position_id: &PositionId) -> Result<bool, Error>;

    /// Dashboard totals for the user.
    async fn application_summary(&self, user_id: &UserId) -> Result<ApplicationSummary, Error>;
}
