//! Wiring of settings, fixtures and adapters into a ready service.

use std::sync::Arc;

use mockable::DefaultClock;
use placement_fixtures::{FixtureError, FixtureSet, GenerationError, generate_students};
use thiserror::Error;
use tracing::info;

use crate::domain::PlacementService;
use crate::domain::ports::SessionStoreError;
use crate::outbound::memory::{InMemoryPlacementStore, SeedError};
use crate::outbound::session::FileSessionStore;
use crate::settings::PortalSettings;

/// Service over the in-memory store with a file-backed session slot.
pub type PortalService = PlacementService<
    InMemoryPlacementStore,
    InMemoryPlacementStore,
    InMemoryPlacementStore,
    FileSessionStore,
>;

/// Failures while assembling the service.
#[derive(Debug, Error)]
pub enum BootstrapError {
    /// The fixture document could not be loaded or failed validation.
    #[error(transparent)]
    Fixtures(#[from] FixtureError),
    /// Synthetic students could not be generated.
    #[error(transparent)]
    Generation(#[from] GenerationError),
    /// A fixture record broke a domain invariant.
    #[error(transparent)]
    Seed(#[from] SeedError),
    /// The session directory could not be opened.
    #[error(transparent)]
    Session(#[from] SessionStoreError),
}

/// Load the configured fixture set, extended with synthetic students.
///
/// Synthetic student ids continue after the largest numeric fixture user id.
///
/// # Errors
///
/// Returns [`BootstrapError`] when the fixtures cannot be read or extended.
pub fn load_fixtures(settings: &PortalSettings) -> Result<FixtureSet, BootstrapError> {
    let fixtures = match &settings.fixture_path {
        Some(path) => FixtureSet::from_file(path)?,
        None => FixtureSet::bundled()?,
    };
    if settings.synthetic_students == 0 {
        return Ok(fixtures);
    }

    let first_id = fixtures
        .users()
        .iter()
        .filter_map(|user| user.id.parse::<u64>().ok())
        .max()
        .map_or(1, |max| max.saturating_add(1));
    let students = generate_students(
        settings.synthetic_seed,
        settings.synthetic_students,
        first_id,
    )?;
    info!(
        count = students.len(),
        seed = settings.synthetic_seed,
        "appending synthetic students"
    );
    Ok(fixtures.with_students(students)?)
}

/// Build the portal service described by `settings`.
///
/// # Errors
///
/// Returns [`BootstrapError`] when fixtures, seeding or the session
/// directory fail.
pub fn build_service(settings: &PortalSettings) -> Result<PortalService, BootstrapError> {
    let store = Arc::new(InMemoryPlacementStore::from_fixtures(load_fixtures(settings)?)?);
    let sessions = Arc::new(FileSessionStore::open(&settings.session_dir())?);

    Ok(PlacementService::new(
        Arc::clone(&store),
        Arc::clone(&store),
        store,
        sessions,
        Arc::new(DefaultClock),
    ))
}
