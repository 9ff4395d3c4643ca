//! Application lifecycle status.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Where an application stands with the employer.
///
/// Transitions are unconstrained: any status may replace any other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApplicationStatus {
    /// Received but not yet processed.
    Pending,
    /// Submitted by the student.
    Applied,
    /// Offer extended.
    Selected,
    /// Turned down.
    Rejected,
}

impl ApplicationStatus {
    /// Every status in display order.
    pub const ALL: [Self; 4] = [Self::Pending, Self::Applied, Self::Selected, Self::Rejected];

    /// Lowercase wire name.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Applied => "applied",
            Self::Selected => "selected",
            Self::Rejected => "rejected",
        }
    }
}

impl fmt::Display for ApplicationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a status name is not recognised.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown application status `{input}`; expected pending, applied, selected or rejected")]
pub struct ParseApplicationStatusError {
    input: String,
}

impl FromStr for ApplicationStatus {
    type Err = ParseApplicationStatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        Self::ALL
            .into_iter()
            .find(|status| status.as_str().eq_ignore_ascii_case(needle))
            .ok_or_else(|| ParseApplicationStatusError {
                input: s.to_owned(),
            })
    }
}
