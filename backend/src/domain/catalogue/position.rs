//! Job opening entity and salary range.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{CatalogueValidationError, validate_non_empty_field};
use crate::domain::{CompanyId, PositionId};

/// Annual salary band.
///
/// ## Invariants
/// - `min <= max`.
/// - `currency` is non-blank.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "SalaryRangeDto", into = "SalaryRangeDto")]
pub struct SalaryRange {
    min: u64,
    max: u64,
    currency: String,
}

impl SalaryRange {
    /// Validate and construct a salary band.
    pub fn new(
        min: u64,
        max: u64,
        currency: impl Into<String>,
    ) -> Result<Self, CatalogueValidationError> {
        if min > max {
            return Err(CatalogueValidationError::InvalidSalaryRange { min, max });
        }
        let currency = validate_non_empty_field(currency.into(), "salary.currency")?;
        Ok(Self { min, max, currency })
    }

    pub fn min(&self) -> u64 {
        self.min
    }

    pub fn max(&self) -> u64 {
        self.max
    }

    pub fn currency(&self) -> &str {
        self.currency.as_str()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct SalaryRangeDto {
    min: u64,
    max: u64,
    currency: String,
}

impl From<SalaryRange> for SalaryRangeDto {
    fn from(value: SalaryRange) -> Self {
        Self {
            min: value.min,
            max: value.max,
            currency: value.currency,
        }
    }
}

impl TryFrom<SalaryRangeDto> for SalaryRange {
    type Error = CatalogueValidationError;

    fn try_from(value: SalaryRangeDto) -> Result<Self, Self::Error> {
        Self::new(value.min, value.max, value.currency)
    }
}

/// Input payload for [`Position::new`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(deny_unknown_fields)]
pub struct PositionDraft {
    pub id: PositionId,
    pub company_id: CompanyId,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub requirements: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub salary: Option<SalaryRange>,
    pub deadline: NaiveDate,
}

/// Job opening offered by a company.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Position {
    id: PositionId,
    company_id: CompanyId,
    title: String,
    description: String,
    requirements: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    salary: Option<SalaryRange>,
    deadline: NaiveDate,
}

impl Position {
    /// Validate and construct a position.
    pub fn new(draft: PositionDraft) -> Result<Self, CatalogueValidationError> {
        Self::try_from(draft)
    }

    pub fn id(&self) -> &PositionId {
        &self.id
    }

    pub fn company_id(&self) -> &CompanyId {
        &self.company_id
    }

    pub fn title(&self) -> &str {
        self.title.as_str()
    }

    pub fn description(&self) -> &str {
        self.description.as_str()
    }

    pub fn requirements(&self) -> &[String] {
        &self.requirements
    }

    pub fn salary(&self) -> Option<&SalaryRange> {
        self.salary.as_ref()
    }

    pub fn deadline(&self) -> NaiveDate {
        self.deadline
    }
}

impl TryFrom<PositionDraft> for Position {
    type Error = CatalogueValidationError;

    fn try_from(draft: PositionDraft) -> Result<Self, Self::Error> {
        let title = validate_non_empty_field(draft.title, "position.title")?;

        Ok(Self {
            id: draft.id,
            company_id: draft.company_id,
            title,
            description: draft.description,
            requirements: draft.requirements,
            salary: draft.salary,
            deadline: draft.deadline,
        })
    }
}

impl<'de> Deserialize<'de> for Position {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        PositionDraft::deserialize(deserializer)?
            .try_into()
            .map_err(serde::de::Error::custom)
    }
}
