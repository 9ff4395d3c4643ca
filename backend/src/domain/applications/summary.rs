//! Dashboard statistics for a student's applications.

use serde::Serialize;

use super::{Application, ApplicationStatus};

/// Number of applications in each status.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusCounts {
    pub pending: usize,
    pub applied: usize,
    pub selected: usize,
    pub rejected: usize,
}

impl StatusCounts {
    fn record(&mut self, status: ApplicationStatus) {
        let slot = match status {
            ApplicationStatus::Pending => &mut self.pending,
            ApplicationStatus::Applied => &mut self.applied,
            ApplicationStatus::Selected => &mut self.selected,
            ApplicationStatus::Rejected => &mut self.rejected,
        };
        *slot += 1;
    }
}

/// Totals shown on the student dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationSummary {
    pub total: usize,
    pub by_status: StatusCounts,
    pub companies: usize,
}

impl ApplicationSummary {
    /// Tally `applications` against a catalogue of `companies` employers.
    pub fn tally<'a>(applications: impl IntoIterator<Item = &'a Application>, companies: usize) -> Self {
        let mut by_status = StatusCounts::default();
        let mut total = 0;
        for application in applications {
            by_status.record(application.status());
            total += 1;
        }
        Self {
            total,
            by_status,
            companies,
        }
    }
}
