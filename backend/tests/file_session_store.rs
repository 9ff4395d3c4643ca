//! File-backed session behaviour across service restarts.
#![expect(
    clippy::expect_used,
    reason = "test code uses expect for clear failure messages"
)]

use std::path::Path;
use std::sync::Arc;

use chrono::NaiveDate;
use placement_fixtures::FixtureSet;
use placement_portal::domain::ports::{AccountCommand, SessionQuery, SessionStore};
use placement_portal::domain::{CURRENT_USER_KEY, ErrorCode, LoginCredentials, PlacementService};
use placement_portal::outbound::memory::InMemoryPlacementStore;
use placement_portal::outbound::session::FileSessionStore;
use placement_portal::test_support::FixedClock;
use rstest::{fixture, rstest};
use tempfile::TempDir;

type Service = PlacementService<
    InMemoryPlacementStore,
    InMemoryPlacementStore,
    InMemoryPlacementStore,
    FileSessionStore,
>;

#[fixture]
fn session_dir() -> TempDir {
    tempfile::tempdir().expect("temp dir")
}

fn start_service(dir: &Path) -> Service {
    let fixtures = FixtureSet::bundled().expect("bundled fixtures");
    let store = Arc::new(InMemoryPlacementStore::from_fixtures(fixtures).expect("seeded store"));
    let sessions = FileSessionStore::open(dir).expect("session directory");
    PlacementService::new(
        Arc::clone(&store),
        Arc::clone(&store),
        store,
        Arc::new(sessions),
        Arc::new(FixedClock::on(
            NaiveDate::from_ymd_opt(2025, 4, 10).expect("valid date"),
        )),
    )
}

fn john() -> LoginCredentials {
    LoginCredentials::try_from_parts("john.doe@example.edu", "secret").expect("credentials")
}

#[rstest]
#[tokio::test]
async fn session_survives_restart(session_dir: TempDir) {
    let dir = session_dir.path().join("sessions");
    let user = start_service(&dir).login(&john()).await.expect("login");

    let restarted = start_service(&dir);
    let current = restarted.current_user().await.expect("restored session");
    assert_eq!(current, user);
}

#[rstest]
#[tokio::test]
async fn logout_removes_the_session_file(session_dir: TempDir) {
    let dir = session_dir.path();
    let service = start_service(dir);
    service.login(&john()).await.expect("login");
    assert!(dir.join(format!("{CURRENT_USER_KEY}.json")).exists());

    service.logout().await.expect("logout");
    assert!(!dir.join(format!("{CURRENT_USER_KEY}.json")).exists());
    assert!(start_service(dir).current_user().await.is_none());
}

#[rstest]
#[tokio::test]
async fn corrupt_session_reads_as_logged_out(session_dir: TempDir) {
    let dir = session_dir.path();
    std::fs::write(dir.join(format!("{CURRENT_USER_KEY}.json")), "{not json")
        .expect("write corrupt session");

    assert!(start_service(dir).current_user().await.is_none());
}

#[rstest]
#[tokio::test]
async fn store_round_trips_raw_values(session_dir: TempDir) {
    let store = FileSessionStore::open(session_dir.path()).expect("session directory");
    assert_eq!(store.get("slot").await.expect("read"), None);

    store.set("slot", "first").await.expect("write");
    store.set("slot", "second").await.expect("overwrite");
    assert_eq!(
        store.get("slot").await.expect("read").as_deref(),
        Some("second")
    );

    store.remove("slot").await.expect("remove");
    store.remove("slot").await.expect("removing twice is fine");
    assert_eq!(store.get("slot").await.expect("read"), None);
}

#[rstest]
#[tokio::test]
async fn padded_email_matches_no_account(session_dir: TempDir) {
    let service = start_service(session_dir.path());
    let padded = LoginCredentials::try_from_parts(" john.doe@example.edu ", "secret")
        .expect("credentials");

    let err = service.login(&padded).await.expect_err("exact match only");

    assert_eq!(err.code(), ErrorCode::InvalidCredentials);
    assert!(service.current_user().await.is_none());
}
