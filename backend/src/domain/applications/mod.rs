//! Placement applications and their read projections.

mod application;
mod enriched;
mod status;
mod summary;

pub use application::{Application, ApplicationDraft};
pub use enriched::EnrichedApplication;
pub use status::{ApplicationStatus, ParseApplicationStatusError};
pub use summary::{ApplicationSummary, StatusCounts};
