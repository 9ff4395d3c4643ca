//! Conversion of fixture records into a seeded store.

use placement_fixtures::{
    ApplicationRecord, ApplicationStatusRecord, CompanyRecord, FixtureCollections, FixtureSet,
    PositionRecord, UserRecord,
};
use thiserror::Error;

use super::{InMemoryPlacementStore, StoreSeed};
use crate::domain::{
    Application, ApplicationDraft, ApplicationId, ApplicationStatus, Company, CompanyDraft,
    CompanyId, NewUser, Position, PositionDraft, PositionId, RegistrationRequest, SalaryRange,
    User, UserId,
};

/// Raised when a fixture record does not satisfy a domain invariant.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("fixture {collection} record {id} is invalid: {message}")]
pub struct SeedError {
    collection: &'static str,
    id: String,
    message: String,
}

impl SeedError {
    fn new(collection: &'static str, id: &str, message: impl ToString) -> Self {
        Self {
            collection,
            id: id.to_owned(),
            message: message.to_string(),
        }
    }

    /// Collection holding the offending record.
    pub fn collection(&self) -> &'static str {
        self.collection
    }

    /// Identifier of the offending record.
    pub fn id(&self) -> &str {
        self.id.as_str()
    }
}

impl InMemoryPlacementStore {
    /// Seed a store from a validated fixture set.
    ///
    /// # Errors
    ///
    /// Returns [`SeedError`] if a record breaks a domain rule the fixture
    /// crate does not check.
    ///
    /// # Examples
    /// ```
    /// use placement_fixtures::FixtureSet;
    /// use placement_portal::outbound::memory::InMemoryPlacementStore;
    ///
    /// let fixtures = FixtureSet::bundled().expect("bundled fixtures");
    /// let store = InMemoryPlacementStore::from_fixtures(fixtures).expect("seeded");
    /// assert_eq!(store.user_count(), 2);
    /// ```
    pub fn from_fixtures(fixtures: FixtureSet) -> Result<Self, SeedError> {
        let FixtureCollections {
            users,
            companies,
            positions,
            applications,
        } = fixtures.into_collections();

        let seed = StoreSeed {
            users: users.into_iter().map(user).collect::<Result<_, _>>()?,
            companies: companies.into_iter().map(company).collect::<Result<_, _>>()?,
            positions: positions.into_iter().map(position).collect::<Result<_, _>>()?,
            applications: applications
                .into_iter()
                .map(application)
                .collect::<Result<_, _>>()?,
        };
        Ok(Self::seeded(seed))
    }
}

fn user(record: UserRecord) -> Result<User, SeedError> {
    let err = |message: &dyn ToString| SeedError::new("users", &record.id, message.to_string());
    let id = UserId::new(&record.id).map_err(|e| err(&e))?;
    let draft = NewUser::try_from(RegistrationRequest {
        name: record.name.clone(),
        email: record.email.clone(),
        roll_number: record.roll_number.clone(),
        branch: record.branch.clone(),
        year: record.year,
        avatar: record.avatar.clone(),
    })
    .map_err(|e| err(&e))?;
    Ok(User::from_new(id, draft))
}

fn company(record: CompanyRecord) -> Result<Company, SeedError> {
    let id = CompanyId::new(&record.id).map_err(|e| SeedError::new("companies", &record.id, e))?;
    let CompanyRecord {
        id: raw_id,
        name,
        logo,
        description,
        location,
    } = record;
    Company::new(CompanyDraft {
        id,
        name,
        logo,
        description,
        location,
    })
    .map_err(|e| SeedError::new("companies", &raw_id, e))
}

fn position(record: PositionRecord) -> Result<Position, SeedError> {
    let invalid = |e: &dyn ToString| SeedError::new("positions", &record.id, e.to_string());
    let id = PositionId::new(&record.id).map_err(|e| invalid(&e))?;
    let company_id = CompanyId::new(&record.company_id).map_err(|e| invalid(&e))?;
    let salary = record
        .salary
        .as_ref()
        .map(|s| SalaryRange::new(s.min, s.max, s.currency.clone()))
        .transpose()
        .map_err(|e| invalid(&e))?;

    Position::new(PositionDraft {
        id,
        company_id,
        title: record.title.clone(),
        description: record.description.clone(),
        requirements: record.requirements.clone(),
        salary,
        deadline: record.deadline,
    })
    .map_err(|e| invalid(&e))
}

fn application(record: ApplicationRecord) -> Result<Application, SeedError> {
    let invalid = |e: &dyn ToString| SeedError::new("applications", &record.id, e.to_string());
    Ok(Application::from(ApplicationDraft {
        id: ApplicationId::new(&record.id).map_err(|e| invalid(&e))?,
        user_id: UserId::new(&record.user_id).map_err(|e| invalid(&e))?,
        company_id: CompanyId::new(&record.company_id).map_err(|e| invalid(&e))?,
        position_id: PositionId::new(&record.position_id).map_err(|e| invalid(&e))?,
        status: status(record.status),
        applied_date: record.applied_date,
        updated_date: record.updated_date,
        notes: record.notes.clone(),
    }))
}

fn status(record: ApplicationStatusRecord) -> ApplicationStatus {
    match record {
        ApplicationStatusRecord::Pending => ApplicationStatus::Pending,
        ApplicationStatusRecord::Applied => ApplicationStatus::Applied,
        ApplicationStatusRecord::Selected => ApplicationStatus::Selected,
        ApplicationStatusRecord::Rejected => ApplicationStatus::Rejected,
    }
}
