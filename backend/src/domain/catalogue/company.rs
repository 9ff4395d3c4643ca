//! Employer entity.

use serde::{Deserialize, Serialize};

use super::{CatalogueValidationError, Position, matches_term, validate_non_empty_field};
use crate::domain::CompanyId;

/// Input payload for [`Company::new`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(deny_unknown_fields)]
pub struct CompanyDraft {
    pub id: CompanyId,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo: Option<String>,
    pub description: String,
    pub location: String,
}

/// Employer with its open positions attached.
///
/// Positions are empty until a reader attaches them with
/// [`Company::with_positions`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Company {
    id: CompanyId,
    name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    logo: Option<String>,
    description: String,
    location: String,
    positions: Vec<Position>,
}

impl Company {
    /// Validate and construct a company with no positions attached.
    pub fn new(draft: CompanyDraft) -> Result<Self, CatalogueValidationError> {
        Self::try_from(draft)
    }

    /// Replace the attached positions.
    pub fn with_positions(mut self, positions: Vec<Position>) -> Self {
        self.positions = positions;
        self
    }

    /// Whether the name, description or location contains `term`,
    /// ignoring case.
    pub fn matches(&self, term: &str) -> bool {
        matches_term(
            &[
                self.name.as_str(),
                self.description.as_str(),
                self.location.as_str(),
            ],
            term,
        )
    }

    pub fn id(&self) -> &CompanyId {
        &self.id
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn logo(&self) -> Option<&str> {
        self.logo.as_deref()
    }

    pub fn description(&self) -> &str {
        self.description.as_str()
    }

    pub fn location(&self) -> &str {
        self.location.as_str()
    }

    pub fn positions(&self) -> &[Position] {
        &self.positions
    }
}

impl TryFrom<CompanyDraft> for Company {
    type Error = CatalogueValidationError;

    fn try_from(draft: CompanyDraft) -> Result<Self, Self::Error> {
        let name = validate_non_empty_field(draft.name, "company.name")?;

        Ok(Self {
            id: draft.id,
            name,
            logo: draft.logo,
            description: draft.description,
            location: draft.location,
            positions: Vec::new(),
        })
    }
}
