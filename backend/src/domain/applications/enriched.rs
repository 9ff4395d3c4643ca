//! Application joined with the records it references.

use serde::Serialize;

use super::Application;
use crate::domain::{Company, Position};

/// Application with its company and position resolved.
///
/// Serialises as the application's own fields plus `company` and `position`
/// objects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EnrichedApplication {
    #[serde(flatten)]
    pub application: Application,
    pub company: Company,
    pub position: Position,
}
