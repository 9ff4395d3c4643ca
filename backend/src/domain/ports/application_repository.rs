//! Port abstraction for application storage.

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::domain::{Application, ApplicationId, ApplicationStatus, Position, PositionId, UserId};

use super::define_port_error;

define_port_error! {
    /// Errors raised by application repository adapters.
    pub enum ApplicationRepositoryError {
        /// An application for the same user and position already exists.
        Duplicate { user_id: String, position_id: String } =>
            "user {user_id} already applied for position {position_id}",
        /// Reading or mutating the collection failed.
        Query { message: String } => "application repository query failed: {message}",
    }
}

/// Storage for submitted applications. Applications are never deleted.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ApplicationRepository: Send + Sync {
    /// Applications belonging to the user, in insertion order.
    async fn list_for_user(
        &self,
        user_id: &UserId,
    ) -> Result<Vec<Application>, ApplicationRepositoryError>;

    /// Whether the user has applied for the position.
    async fn exists(
        &self,
        user_id: &UserId,
        position_id: &PositionId,
    ) -> Result<bool, ApplicationRepositoryError>;

    /// Create an `applied` application for the position.
    ///
    /// The duplicate check and the append happen under one write.
    async fn submit(
        &self,
        user_id: &UserId,
        position: &Position,
        today: NaiveDate,
    ) -> Result<Application, ApplicationRepositoryError>;

    /// Set the status and update date, returning the updated record.
    async fn update_status(
        &self,
        id: &ApplicationId,
        status: ApplicationStatus,
        today: NaiveDate,
    ) -> Result<Option<Application>, ApplicationRepositoryError>;
}
