//! Application entity.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::ApplicationStatus;
use crate::domain::{ApplicationId, CompanyId, Position, PositionId, UserId};

/// Complete application record, used when restoring stored applications.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationDraft {
    pub id: ApplicationId,
    pub user_id: UserId,
    pub company_id: CompanyId,
    pub position_id: PositionId,
    pub status: ApplicationStatus,
    pub applied_date: NaiveDate,
    pub updated_date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// A student's application for a position.
///
/// ## Invariants
/// - `company_id` is the owning company of `position_id`. New applications
///   take it from the position itself.
/// - Only `status` and `updated_date` change after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "ApplicationDraft", into = "ApplicationDraft")]
pub struct Application {
    id: ApplicationId,
    user_id: UserId,
    company_id: CompanyId,
    position_id: PositionId,
    status: ApplicationStatus,
    applied_date: NaiveDate,
    updated_date: NaiveDate,
    notes: Option<String>,
}

impl Application {
    /// Start a fresh application in the `applied` state.
    ///
    /// # Examples
    /// ```
    /// use chrono::NaiveDate;
    /// use placement_portal::domain::{
    ///     Application, ApplicationId, ApplicationStatus, CompanyId, Position, PositionDraft,
    ///     PositionId, UserId,
    /// };
    ///
    /// let today = NaiveDate::from_ymd_opt(2025, 4, 10).unwrap();
    /// let position = Position::new(PositionDraft {
    ///     id: PositionId::new("p1").unwrap(),
    ///     company_id: CompanyId::new("c1").unwrap(),
    ///     title: "Engineer".into(),
    ///     description: String::new(),
    ///     requirements: Vec::new(),
    ///     salary: None,
    ///     deadline: today,
    /// })
    /// .unwrap();
    ///
    /// let app = Application::submit(
    ///     ApplicationId::new("1").unwrap(),
    ///     UserId::new("u1").unwrap(),
    ///     &position,
    ///     today,
    /// );
    /// assert_eq!(app.status(), ApplicationStatus::Applied);
    /// assert_eq!(app.company_id().as_ref(), "c1");
    /// ```
    pub fn submit(id: ApplicationId, user_id: UserId, position: &Position, today: NaiveDate) -> Self {
        Self {
            id,
            user_id,
            company_id: position.company_id().clone(),
            position_id: position.id().clone(),
            status: ApplicationStatus::Applied,
            applied_date: today,
            updated_date: today,
            notes: None,
        }
    }

    /// Replace the status and stamp the update date.
    pub fn update_status(&mut self, status: ApplicationStatus, today: NaiveDate) {
        self.status = status;
        self.updated_date = today;
    }

    pub fn id(&self) -> &ApplicationId {
        &self.id
    }

    pub fn user_id(&self) -> &UserId {
        &self.user_id
    }

    pub fn company_id(&self) -> &CompanyId {
        &self.company_id
    }

    pub fn position_id(&self) -> &PositionId {
        &self.position_id
    }

    pub fn status(&self) -> ApplicationStatus {
        self.status
    }

    pub fn applied_date(&self) -> NaiveDate {
        self.applied_date
    }

    pub fn updated_date(&self) -> NaiveDate {
        self.updated_date
    }

    pub fn notes(&self) -> Option<&str> {
        self.notes.as_deref()
    }
}

impl From<ApplicationDraft> for Application {
    fn from(draft: ApplicationDraft) -> Self {
        Self {
            id: draft.id,
            user_id: draft.user_id,
            company_id: draft.company_id,
            position_id: draft.position_id,
            status: draft.status,
            applied_date: draft.applied_date,
            updated_date: draft.updated_date,
            notes: draft.notes,
        }
    }
}

impl From<Application> for ApplicationDraft {
    fn from(value: Application) -> Self {
        Self {
            id: value.id,
            user_id: value.user_id,
            company_id: value.company_id,
            position_id: value.position_id,
            status: value.status,
            applied_date: value.applied_date,
            updated_date: value.updated_date,
            notes: value.notes,
        }
    }
}
