//! Company and position read models.
//!
//! Companies own the positions whose `companyId` matches their id. The
//! association is resolved at read time, so positions are stored once.

use std::fmt;

mod company;
mod position;


pub use company::{Company, CompanyDraft};
pub use position::{Position, PositionDraft, SalaryRange};

/// Validation errors returned by catalogue constructors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogueValidationError {
    EmptyField { field: &'static str },
    InvalidSalaryRange { min: u64, max: u64 },
}

impl fmt::Display for CatalogueValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyField { field } => write!(f, "{field} must not be empty"),
            Self::InvalidSalaryRange { min, max } => {
                write!(f, "salary range must have min <= max (got [{min}, {max}])")
            }
        }
    }
}

impl std::error::Error for CatalogueValidationError {}

fn validate_non_empty_field(
    value: String,
    field: &'static str,
) -> Result<String, CatalogueValidationError> {
    if value.trim().is_empty() {
        return Err(CatalogueValidationError::EmptyField { field });
    }
    Ok(value)
}

/// Case-insensitive substring match used by company search.
///
/// A blank needle matches everything.
pub(crate) fn matches_term(haystacks: &[&str], term: &str) -> bool {
    let needle = term.trim().to_lowercase();
    if needle.is_empty() {
        return true;
    }
    haystacks
        .iter()
        .any(|hay| hay.to_lowercase().contains(&needle))
}
