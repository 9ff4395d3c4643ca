//! Raw fixture record types.
//!
//! These mirror the serialised shape of the backend's domain records without
//! depending on them. Identifiers stay as strings here; the backend validates
//! them when converting.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A student account in the fixture store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRecord {
    /// Unique identifier.
    pub id: String,
    /// Full name.
    pub name: String,
    /// Login email, matched case-sensitively.
    pub email: String,
    /// Institute roll number.
    pub roll_number: String,
    /// Academic branch.
    pub branch: String,
    /// Year of study, starting at 1.
    pub year: u8,
    /// Optional avatar URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}

/// An employer profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyRecord {
    /// Unique identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Optional logo URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo: Option<String>,
    /// Short profile text.
    pub description: String,
    /// Office location.
    pub location: String,
}

/// Salary band offered for a position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SalaryRecord {
    /// Lower bound.
    pub min: u64,
    /// Upper bound.
    pub max: u64,
    /// ISO currency code.
    pub currency: String,
}

/// A job opening owned by one company.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PositionRecord {
    /// Unique identifier.
    pub id: String,
    /// Owning company.
    pub company_id: String,
    /// Job title.
    pub title: String,
    /// Role description.
    pub description: String,
    /// Eligibility requirements, in display order.
    #[serde(default)]
    pub requirements: Vec<String>,
    /// Optional salary band.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub salary: Option<SalaryRecord>,
    /// Last day to apply.
    pub deadline: NaiveDate,
}

/// Application status as stored in fixtures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApplicationStatusRecord {
    /// Awaiting review.
    Pending,
    /// Submitted by the student.
    Applied,
    /// Offer made.
    Selected,
    /// Turned down.
    Rejected,
}

/// A student's application to a position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationRecord {
    /// Unique identifier.
    pub id: String,
    /// Applicant.
    pub user_id: String,
    /// Company owning the position.
    pub company_id: String,
    /// Position applied for.
    pub position_id: String,
    /// Current status.
    pub status: ApplicationStatusRecord,
    /// Day the application was made.
    pub applied_date: NaiveDate,
    /// Day of the last status change.
    pub updated_date: NaiveDate,
    /// Optional free-text note.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}
