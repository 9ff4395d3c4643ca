//! `RwLock`-guarded collections implementing the repository ports.

use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use async_trait::async_trait;
use chrono::NaiveDate;

use super::id_sequence::IdSequence;
use crate::domain::ports::{
    ApplicationRepository, ApplicationRepositoryError, CatalogueRepository,
    CatalogueRepositoryError, UserRepository, UserRepositoryError,
};
use crate::domain::{
    Application, ApplicationId, ApplicationStatus, Company, CompanyId, NewUser, Position,
    PositionId, User, UserId,
};

const POISONED: &str = "placement store lock poisoned";

/// Initial contents of an [`InMemoryPlacementStore`].
///
/// Records are stored as given. Referential checks belong to whoever builds
/// the seed; the fixture crate performs them for bundled data.
#[derive(Debug, Clone, Default)]
pub struct StoreSeed {
    pub users: Vec<User>,
    pub companies: Vec<Company>,
    pub positions: Vec<Position>,
    pub applications: Vec<Application>,
}

#[derive(Debug, Default)]
struct StoreState {
    users: Vec<User>,
    companies: Vec<Company>,
    positions: Vec<Position>,
    applications: Vec<Application>,
    user_ids: IdSequence,
    application_ids: IdSequence,
}

/// Process-local store backing the user, catalogue and application ports.
///
/// All collections keep insertion order. The store is `Send + Sync`, so one
/// instance can back every port through shared `Arc`s.
#[derive(Debug, Default)]
pub struct InMemoryPlacementStore {
    state: RwLock<StoreState>,
}

impl InMemoryPlacementStore {
    /// Build a store holding `seed`.
    pub fn seeded(seed: StoreSeed) -> Self {
        let StoreSeed {
            users,
            companies,
            positions,
            applications,
        } = seed;
        let user_ids = IdSequence::after(users.iter().map(|user| user.id().numeric()));
        let application_ids =
            IdSequence::after(applications.iter().map(|app| app.id().numeric()));

        Self {
            state: RwLock::new(StoreState {
                users,
                companies,
                positions,
                applications,
                user_ids,
                application_ids,
            }),
        }
    }

    /// Number of stored users.
    pub fn user_count(&self) -> usize {
        self.read().map_or(0, |state| state.users.len())
    }

    /// Number of stored applications.
    pub fn application_count(&self) -> usize {
        self.read().map_or(0, |state| state.applications.len())
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, StoreState>, String> {
        self.state.read().map_err(|_| POISONED.to_owned())
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, StoreState>, String> {
        self.state.write().map_err(|_| POISONED.to_owned())
    }
}

#[async_trait]
impl UserRepository for InMemoryPlacementStore {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, UserRepositoryError> {
        let state = self.read().map_err(UserRepositoryError::query)?;
        Ok(state
            .users
            .iter()
            .find(|user| user.email().as_ref() == email)
            .cloned())
    }

    async fn insert(&self, draft: NewUser) -> Result<User, UserRepositoryError> {
        let mut state = self.write().map_err(UserRepositoryError::query)?;
        if state.users.iter().any(|user| user.email() == draft.email()) {
            return Err(UserRepositoryError::duplicate_email(draft.email().as_ref()));
        }

        let raw = state
            .user_ids
            .allocate()
            .ok_or_else(|| UserRepositoryError::query("user identifiers exhausted"))?;
        let id = UserId::new(raw).map_err(|err| UserRepositoryError::query(err.to_string()))?;
        let user = User::from_new(id, draft);
        state.users.push(user.clone());
        Ok(user)
    }

    async fn remove(&self, id: &UserId) -> Result<bool, UserRepositoryError> {
        let mut state = self.write().map_err(UserRepositoryError::query)?;
        let before = state.users.len();
        state.users.retain(|user| user.id() != id);
        Ok(state.users.len() != before)
    }
}

#[async_trait]
impl CatalogueRepository for InMemoryPlacementStore {
    async fn list_companies(&self) -> Result<Vec<Company>, CatalogueRepositoryError> {
        let state = self.read().map_err(CatalogueRepositoryError::query)?;
        Ok(state.companies.clone())
    }

    async fn find_company(
        &self,
        id: &CompanyId,
    ) -> Result<Option<Company>, CatalogueRepositoryError> {
        let state = self.read().map_err(CatalogueRepositoryError::query)?;
        Ok(state.companies.iter().find(|c| c.id() == id).cloned())
    }

    async fn list_positions(
        &self,
        company_id: Option<CompanyId>,
    ) -> Result<Vec<Position>, CatalogueRepositoryError> {
        let state = self.read().map_err(CatalogueRepositoryError::query)?;
        Ok(state
            .positions
            .iter()
            .filter(|position| {
                company_id
                    .as_ref()
                    .is_none_or(|wanted| position.company_id() == wanted)
            })
            .cloned()
            .collect())
    }

    async fn find_position(
        &self,
        id: &PositionId,
    ) -> Result<Option<Position>, CatalogueRepositoryError> {
        let state = self.read().map_err(CatalogueRepositoryError::query)?;
        Ok(state.positions.iter().find(|p| p.id() == id).cloned())
    }
}

#[async_trait]
impl ApplicationRepository for InMemoryPlacementStore {
    async fn list_for_user(
        &self,
        user_id: &UserId,
    ) -> Result<Vec<Application>, ApplicationRepositoryError> {
        let state = self.read().map_err(ApplicationRepositoryError::query)?;
        Ok(state
            .applications
            .iter()
            .filter(|app| app.user_id() == user_id)
            .cloned()
            .collect())
    }

    async fn exists(
        &self,
        user_id: &UserId,
        position_id: &PositionId,
    ) -> Result<bool, ApplicationRepositoryError> {
        let state = self.read().map_err(ApplicationRepositoryError::query)?;
        Ok(state
            .applications
            .iter()
            .any(|app| app.user_id() == user_id && app.position_id() == position_id))
    }

    async fn submit(
        &self,
        user_id: &UserId,
        position: &Position,
        today: NaiveDate,
    ) -> Result<Application, ApplicationRepositoryError> {
        let mut state = self.write().map_err(ApplicationRepositoryError::query)?;
        let duplicate = state
            .applications
            .iter()
            .any(|app| app.user_id() == user_id && app.position_id() == position.id());
        if duplicate {
            return Err(ApplicationRepositoryError::duplicate(
                user_id.as_ref(),
                position.id().as_ref(),
            ));
        }

        let raw = state
            .application_ids
            .allocate()
            .ok_or_else(|| ApplicationRepositoryError::query("application identifiers exhausted"))?;
        let id = ApplicationId::new(raw)
            .map_err(|err| ApplicationRepositoryError::query(err.to_string()))?;
        let application = Application::submit(id, user_id.clone(), position, today);
        state.applications.push(application.clone());
        Ok(application)
    }

    async fn update_status(
        &self,
        id: &ApplicationId,
        status: ApplicationStatus,
        today: NaiveDate,
    ) -> Result<Option<Application>, ApplicationRepositoryError> {
        let mut state = self.write().map_err(ApplicationRepositoryError::query)?;
        let Some(application) = state.applications.iter_mut().find(|app| app.id() == id) else {
            return Ok(None);
        };
        application.update_status(status, today);
        Ok(Some(application.clone()))
    }
}
