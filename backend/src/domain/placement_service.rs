//! Placement portal domain service.
//!
//! [`PlacementService`] implements every driving port over four driven
//! ports: users, catalogue, applications and the session slot. It owns all
//! business checks. Repositories only store, and enforce uniqueness under
//! their own write lock.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::NaiveDate;
use mockable::Clock;
use tracing::{debug, info, warn};

use crate::domain::ports::{
    AccountCommand, ApplicationRepository, ApplicationRepositoryError, ApplicationsCommand,
    ApplicationsQuery, CatalogueQuery, CatalogueRepository, CatalogueRepositoryError,
    SessionQuery, SessionStore, SessionStoreError, UserRepository, UserRepositoryError,
};
use crate::domain::{
    Application, ApplicationId, ApplicationStatus, ApplicationSummary, CURRENT_USER_KEY, Company,
    CompanyId, EnrichedApplication, Error, LoginCredentials, NewUser, Position, PositionId,
    RegistrationRequest, User, UserId,
};

fn map_user_error(error: UserRepositoryError) -> Error {
    match error {
        UserRepositoryError::DuplicateEmail { email } => {
            Error::email_in_use(format!("email {email} is already registered"))
        }
        UserRepositoryError::Query { message } => {
            Error::internal(format!("user repository error: {message}"))
        }
    }
}

fn map_catalogue_error(error: CatalogueRepositoryError) -> Error {
    match error {
        CatalogueRepositoryError::Query { message } => {
            Error::internal(format!("catalogue repository error: {message}"))
        }
    }
}

fn map_application_error(error: ApplicationRepositoryError) -> Error {
    match error {
        ApplicationRepositoryError::Duplicate {
            user_id,
            position_id,
        } => Error::duplicate_application(format!(
            "user {user_id} has already applied for position {position_id}"
        )),
        ApplicationRepositoryError::Query { message } => {
            Error::internal(format!("application repository error: {message}"))
        }
    }
}

fn map_session_error(error: SessionStoreError) -> Error {
    Error::internal(format!("session store error: {error}"))
}

/// Domain service for the placement portal.
///
/// # Examples
/// ```
/// use std::sync::Arc;
///
/// use mockable::DefaultClock;
/// use placement_portal::domain::PlacementService;
/// use placement_portal::outbound::memory::InMemoryPlacementStore;
/// use placement_portal::outbound::session::InMemorySessionStore;
///
/// let store = Arc::new(InMemoryPlacementStore::default());
/// let service = PlacementService::new(
///     Arc::clone(&store),
///     Arc::clone(&store),
///     store,
///     Arc::new(InMemorySessionStore::default()),
///     Arc::new(DefaultClock),
/// );
/// # let _ = service;
/// ```
pub struct PlacementService<U, C, A, S> {
    users: Arc<U>,
    catalogue: Arc<C>,
    applications: Arc<A>,
    sessions: Arc<S>,
    clock: Arc<dyn Clock>,
}

// Manual impl so the adapters themselves need not be `Clone`.
impl<U, C, A, S> Clone for PlacementService<U, C, A, S> {
    fn clone(&self) -> Self {
        Self {
            users: Arc::clone(&self.users),
            catalogue: Arc::clone(&self.catalogue),
            applications: Arc::clone(&self.applications),
            sessions: Arc::clone(&self.sessions),
            clock: Arc::clone(&self.clock),
        }
    }
}

impl<U, C, A, S> PlacementService<U, C, A, S> {
    /// Create a service over the given ports.
    pub fn new(
        users: Arc<U>,
        catalogue: Arc<C>,
        applications: Arc<A>,
        sessions: Arc<S>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            users,
            catalogue,
            applications,
            sessions,
            clock,
        }
    }

    /// Today's calendar date in the local timezone.
    fn today(&self) -> NaiveDate {
        self.clock.local().date_naive()
    }
}

impl<U, C, A, S> PlacementService<U, C, A, S>
where
    U: UserRepository,
    C: CatalogueRepository,
    A: ApplicationRepository,
    S: SessionStore,
{
    async fn persist_session(&self, user: &User) -> Result<(), Error> {
        let payload = serde_json::to_string(user)
            .map_err(|err| Error::internal(format!("failed to serialise session: {err}")))?;
        self.sessions
            .set(CURRENT_USER_KEY, &payload)
            .await
            .map_err(map_session_error)
    }

    /// Attach to each company the positions that reference it, keeping
    /// position insertion order.
    async fn attach_positions(&self, companies: Vec<Company>) -> Result<Vec<Company>, Error> {
        let positions = self
            .catalogue
            .list_positions(None)
            .await
            .map_err(map_catalogue_error)?;

        let mut by_company: HashMap<CompanyId, Vec<Position>> = HashMap::new();
        for position in positions {
            by_company
                .entry(position.company_id().clone())
                .or_default()
                .push(position);
        }

        Ok(companies
            .into_iter()
            .map(|company| {
                let positions = by_company.remove(company.id()).unwrap_or_default();
                company.with_positions(positions)
            })
            .collect())
    }

    async fn list_companies(&self) -> Result<Vec<Company>, Error> {
        self.catalogue
            .list_companies()
            .await
            .map_err(map_catalogue_error)
    }
}

#[async_trait]
impl<U, C, A, S> AccountCommand for PlacementService<U, C, A, S>
where
    U: UserRepository,
    C: CatalogueRepository,
    A: ApplicationRepository,
    S: SessionStore,
{
    async fn login(&self, credentials: &LoginCredentials) -> Result<User, Error> {
        let user = self
            .users
            .find_by_email(credentials.email())
            .await
            .map_err(map_user_error)?
            .ok_or_else(|| {
                info!(email = credentials.email(), "login rejected: unknown email");
                Error::invalid_credentials("no account matches the supplied email")
            })?;

        self.persist_session(&user).await?;
        info!(user_id = %user.id(), email = %user.email(), "user logged in");
        Ok(user)
    }

    async fn register(&self, request: RegistrationRequest) -> Result<User, Error> {
        let draft = NewUser::try_from(request)
            .map_err(|err| Error::invalid_request(format!("invalid registration: {err}")))?;

        let user = self.users.insert(draft).await.map_err(map_user_error)?;
        if let Err(error) = self.persist_session(&user).await {
            warn!(user_id = %user.id(), "session write failed; rolling back registration");
            if let Err(rollback) = self.users.remove(user.id()).await {
                warn!(user_id = %user.id(), error = %rollback, "registration rollback failed");
            }
            return Err(error);
        }
        info!(user_id = %user.id(), email = %user.email(), "user registered");
        Ok(user)
    }

    async fn logout(&self) -> Result<(), Error> {
        self.sessions
            .remove(CURRENT_USER_KEY)
            .await
            .map_err(map_session_error)?;
        info!("session cleared");
        Ok(())
    }
}

#[async_trait]
impl<U, C, A, S> SessionQuery for PlacementService<U, C, A, S>
where
    U: UserRepository,
    C: CatalogueRepository,
    A: ApplicationRepository,
    S: SessionStore,
{
    async fn current_user(&self) -> Option<User> {
        let payload = match self.sessions.get(CURRENT_USER_KEY).await {
            Ok(Some(payload)) => payload,
            Ok(None) => {
                debug!("no active session");
                return None;
            }
            Err(error) => {
                warn!(error = %error, "session store unreadable; treating as logged out");
                return None;
            }
        };

        match serde_json::from_str::<User>(&payload) {
            Ok(user) => {
                debug!(user_id = %user.id(), "session restored");
                Some(user)
            }
            Err(error) => {
                warn!(error = %error, "ignoring malformed session payload");
                None
            }
        }
    }
}

#[async_trait]
impl<U, C, A, S> CatalogueQuery for PlacementService<U, C, A, S>
where
    U: UserRepository,
    C: CatalogueRepository,
    A: ApplicationRepository,
    S: SessionStore,
{
    async fn companies(&self) -> Result<Vec<Company>, Error> {
        let companies = self.list_companies().await?;
        self.attach_positions(companies).await
    }

    async fn search_companies(&self, term: &str) -> Result<Vec<Company>, Error> {
        let matching = self
            .list_companies()
            .await?
            .into_iter()
            .filter(|company| company.matches(term))
            .collect();
        self.attach_positions(matching).await
    }

    async fn company(&self, id: &CompanyId) -> Result<Option<Company>, Error> {
        let Some(company) = self
            .catalogue
            .find_company(id)
            .await
            .map_err(map_catalogue_error)?
        else {
            return Ok(None);
        };

        let positions = self
            .catalogue
            .list_positions(Some(id.clone()))
            .await
            .map_err(map_catalogue_error)?;
        Ok(Some(company.with_positions(positions)))
    }

    async fn positions(&self, company_id: Option<CompanyId>) -> Result<Vec<Position>, Error> {
        self.catalogue
            .list_positions(company_id)
            .await
            .map_err(map_catalogue_error)
    }

    async fn position(&self, id: &PositionId) -> Result<Option<Position>, Error> {
        self.catalogue
            .find_position(id)
            .await
            .map_err(map_catalogue_error)
    }
}

#[async_trait]
impl<U, C, A, S> ApplicationsCommand for PlacementService<U, C, A, S>
where
    U: UserRepository,
    C: CatalogueRepository,
    A: ApplicationRepository,
    S: SessionStore,
{
    async fn apply_for_position(
        &self,
        user_id: &UserId,
        position_id: &PositionId,
    ) -> Result<Application, Error> {
        let position = self
            .catalogue
            .find_position(position_id)
            .await
            .map_err(map_catalogue_error)?
            .ok_or_else(|| Error::position_not_found(format!("position {position_id} not found")))?;

        let application = self
            .applications
            .submit(user_id, &position, self.today())
            .await
            .map_err(map_application_error)?;

        info!(
            application_id = %application.id(),
            user_id = %user_id,
            position_id = %position_id,
            "application submitted"
        );
        Ok(application)
    }

    async fn update_application_status(
        &self,
        id: &ApplicationId,
        status: ApplicationStatus,
    ) -> Result<Option<Application>, Error> {
        let updated = self
            .applications
            .update_status(id, status, self.today())
            .await
            .map_err(map_application_error)?;

        match &updated {
            Some(_) => info!(application_id = %id, status = %status, "application status updated"),
            None => debug!(application_id = %id, "status update for unknown application"),
        }
        Ok(updated)
    }
}

#[async_trait]
impl<U, C, A, S> ApplicationsQuery for PlacementService<U, C, A, S>
where
    U: UserRepository,
    C: CatalogueRepository,
    A: ApplicationRepository,
    S: SessionStore,
{
    async fn user_applications(&self, user_id: &UserId) -> Result<Vec<EnrichedApplication>, Error> {
        let applications = self
            .applications
            .list_for_user(user_id)
            .await
            .map_err(map_application_error)?;
        if applications.is_empty() {
            return Ok(Vec::new());
        }

        let companies: HashMap<CompanyId, Company> = self
            .companies()
            .await?
            .into_iter()
            .map(|company| (company.id().clone(), company))
            .collect();
        let positions: HashMap<PositionId, Position> = self
            .positions(None)
            .await?
            .into_iter()
            .map(|position| (position.id().clone(), position))
            .collect();

        let mut enriched = Vec::with_capacity(applications.len());
        for application in applications {
            let company = companies.get(application.company_id());
            let position = positions.get(application.position_id());
            match (company, position) {
                (Some(company), Some(position)) => enriched.push(EnrichedApplication {
                    company: company.clone(),
                    position: position.clone(),
                    application,
                }),
                (company, position) => warn!(
                    application_id = %application.id(),
                    company_id = %application.company_id(),
                    position_id = %application.position_id(),
                    company_missing = company.is_none(),
                    position_missing = position.is_none(),
                    "omitting application with dangling reference"
                ),
            }
        }
        Ok(enriched)
    }

    async fn has_applied(&self, user_id: &UserId, position_id: &PositionId) -> Result<bool, Error> {
        self.applications
            .exists(user_id, position_id)
            .await
            .map_err(map_application_error)
    }

    async fn application_summary(&self, user_id: &UserId) -> Result<ApplicationSummary, Error> {
        let applications = self
            .applications
            .list_for_user(user_id)
            .await
            .map_err(map_application_error)?;
        let companies = self.list_companies().await?.len();
        Ok(ApplicationSummary::tally(&applications, companies))
    }
}

#[cfg(test)]
#[path = "placement_service_tests.rs"]
mod tests;
