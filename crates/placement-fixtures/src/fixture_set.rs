//! Fixture set parsing and referential validation.
//!
//! A fixture set is the seed dataset standing in for a real backing
//! database. It is loaded from JSON and validated as a whole so the backend
//! can trust every cross-reference it contains.

use std::collections::{HashMap, HashSet};
use std::path::Path;

use cap_std::{ambient_authority, fs::Dir};
use serde::Deserialize;

use crate::error::FixtureError;
use crate::records::{ApplicationRecord, CompanyRecord, PositionRecord, UserRecord};
use crate::validation::{is_blank, is_valid_email, is_valid_name};

/// Current supported fixture format version.
const SUPPORTED_VERSION: u32 = 1;

/// Dataset compiled into the crate.
const BUNDLED_FIXTURES: &str = include_str!("../fixtures/placement.json");

/// A validated seed dataset.
///
/// ## Invariants
/// - Identifiers are unique within each collection and emails are unique.
/// - Every position references an existing company.
/// - Every application references an existing user and position, names the
///   position's owning company, and is the only application for its
///   (user, position) pair.
///
/// # Example
///
/// ```
/// use placement_fixtures::FixtureSet;
///
/// let json = r#"{
///     "version": 1,
///     "companies": [{"id": "c1", "name": "Acme", "description": "Tools", "location": "Pune"}],
///     "positions": [{
///         "id": "p1", "companyId": "c1", "title": "Engineer",
///         "description": "Build things", "deadline": "2025-06-01"
///     }]
/// }"#;
///
/// let fixtures = FixtureSet::from_json(json).expect("valid fixtures");
/// assert_eq!(fixtures.positions_for_company("c1").count(), 1);
/// assert!(fixtures.users().is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixtureSet {
    version: u32,
    collections: FixtureCollections,
}

/// Owned collections extracted from a [`FixtureSet`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FixtureCollections {
    /// Student accounts, in document order.
    pub users: Vec<UserRecord>,
    /// Companies, in document order.
    pub companies: Vec<CompanyRecord>,
    /// Positions, in document order.
    pub positions: Vec<PositionRecord>,
    /// Applications, in document order.
    pub applications: Vec<ApplicationRecord>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawFixtureSet {
    version: u32,
    #[serde(default)]
    users: Vec<UserRecord>,
    companies: Vec<CompanyRecord>,
    #[serde(default)]
    positions: Vec<PositionRecord>,
    #[serde(default)]
    applications: Vec<ApplicationRecord>,
}

impl FixtureSet {
    /// Parses and validates a fixture set from a JSON string.
    ///
    /// # Errors
    ///
    /// Returns [`FixtureError`] if the JSON is malformed, the version is
    /// unsupported, or any record or cross-reference is invalid.
    pub fn from_json(json: &str) -> Result<Self, FixtureError> {
        let raw: RawFixtureSet = serde_json::from_str(json).map_err(|e| FixtureError::Parse {
            message: e.to_string(),
        })?;

        if raw.version != SUPPORTED_VERSION {
            return Err(FixtureError::UnsupportedVersion {
                expected: SUPPORTED_VERSION,
                actual: raw.version,
            });
        }

        Self::from_collections(FixtureCollections {
            users: raw.users,
            companies: raw.companies,
            positions: raw.positions,
            applications: raw.applications,
        })
    }

    /// Loads a fixture set from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns [`FixtureError::Io`] if the file cannot be read, or any
    /// parsing error from [`FixtureSet::from_json`].
    pub fn from_file(path: &Path) -> Result<Self, FixtureError> {
        let io_error = |message: String| FixtureError::Io {
            path: path.to_path_buf(),
            message,
        };
        let parent = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        let file_name = path
            .file_name()
            .ok_or_else(|| io_error("fixture path must name a file".to_owned()))?;
        let dir = Dir::open_ambient_dir(parent, ambient_authority())
            .map_err(|e| io_error(e.to_string()))?;
        let contents = dir
            .read_to_string(Path::new(file_name))
            .map_err(|e| io_error(e.to_string()))?;

        Self::from_json(&contents)
    }

    /// Loads the dataset bundled with the crate.
    ///
    /// # Errors
    ///
    /// Returns [`FixtureError`] only if the bundled document is corrupt.
    pub fn bundled() -> Result<Self, FixtureError> {
        Self::from_json(BUNDLED_FIXTURES)
    }

    /// Validates already-parsed collections.
    ///
    /// # Errors
    ///
    /// Returns [`FixtureError`] describing the first invalid record or
    /// dangling reference.
    pub fn from_collections(collections: FixtureCollections) -> Result<Self, FixtureError> {
        validate(&collections)?;
        Ok(Self {
            version: SUPPORTED_VERSION,
            collections,
        })
    }

    /// Appends generated students and revalidates the set.
    ///
    /// # Errors
    ///
    /// Returns [`FixtureError`] if a student collides with an existing id or
    /// email, or fails field validation.
    pub fn with_students(self, students: Vec<UserRecord>) -> Result<Self, FixtureError> {
        let mut collections = self.collections;
        collections.users.extend(students);
        Self::from_collections(collections)
    }

    /// Returns the fixture format version.
    #[must_use]
    pub const fn version(&self) -> u32 {
        self.version
    }

    /// Returns the students.
    #[must_use]
    pub fn users(&self) -> &[UserRecord] {
        &self.collections.users
    }

    /// Returns the companies.
    #[must_use]
    pub fn companies(&self) -> &[CompanyRecord] {
        &self.collections.companies
    }

    /// Returns the positions.
    #[must_use]
    pub fn positions(&self) -> &[PositionRecord] {
        &self.collections.positions
    }

    /// Returns the applications.
    #[must_use]
    pub fn applications(&self) -> &[ApplicationRecord] {
        &self.collections.applications
    }

    /// Iterates the positions owned by a company, in document order.
    pub fn positions_for_company<'a>(
        &'a self,
        company_id: &'a str,
    ) -> impl Iterator<Item = &'a PositionRecord> + 'a {
        self.collections
            .positions
            .iter()
            .filter(move |position| position.company_id == company_id)
    }

    /// Consumes the set, returning its collections.
    #[must_use]
    pub fn into_collections(self) -> FixtureCollections {
        self.collections
    }
}

fn validate(collections: &FixtureCollections) -> Result<(), FixtureError> {
    let user_ids = unique_ids("user", collections.users.iter().map(|u| u.id.as_str()))?;
    let company_ids = unique_ids(
        "company",
        collections.companies.iter().map(|c| c.id.as_str()),
    )?;
    unique_ids(
        "position",
        collections.positions.iter().map(|p| p.id.as_str()),
    )?;
    unique_ids(
        "application",
        collections.applications.iter().map(|a| a.id.as_str()),
    )?;

    validate_users(&collections.users)?;
    for company in &collections.companies {
        if is_blank(&company.name) {
            return Err(invalid("company", &company.id, "name must not be blank"));
        }
    }
    for position in &collections.positions {
        validate_position(position, &company_ids)?;
    }

    let position_owners: HashMap<&str, &str> = collections
        .positions
        .iter()
        .map(|p| (p.id.as_str(), p.company_id.as_str()))
        .collect();
    let mut pairs = HashSet::new();
    for application in &collections.applications {
        if !user_ids.contains(application.user_id.as_str()) {
            return Err(FixtureError::UnknownUser {
                application_id: application.id.clone(),
                user_id: application.user_id.clone(),
            });
        }
        let Some(owner) = position_owners.get(application.position_id.as_str()) else {
            return Err(FixtureError::UnknownPosition {
                application_id: application.id.clone(),
                position_id: application.position_id.clone(),
            });
        };
        if *owner != application.company_id {
            return Err(FixtureError::CompanyMismatch {
                application_id: application.id.clone(),
                expected: (*owner).to_owned(),
                actual: application.company_id.clone(),
            });
        }
        if !pairs.insert((
            application.user_id.as_str(),
            application.position_id.as_str(),
        )) {
            return Err(FixtureError::DuplicateApplication {
                user_id: application.user_id.clone(),
                position_id: application.position_id.clone(),
            });
        }
    }

    Ok(())
}

fn validate_users(users: &[UserRecord]) -> Result<(), FixtureError> {
    let mut emails = HashSet::new();
    for user in users {
        if !is_valid_name(&user.name) {
            return Err(invalid("user", &user.id, "name is blank or too long"));
        }
        if !is_valid_email(&user.email) {
            return Err(invalid("user", &user.id, "email is malformed"));
        }
        if is_blank(&user.roll_number) || is_blank(&user.branch) {
            return Err(invalid(
                "user",
                &user.id,
                "roll number and branch are required",
            ));
        }
        if user.year == 0 {
            return Err(invalid("user", &user.id, "year must be at least 1"));
        }
        if !emails.insert(user.email.as_str()) {
            return Err(FixtureError::DuplicateEmail {
                email: user.email.clone(),
            });
        }
    }
    Ok(())
}

fn validate_position(
    position: &PositionRecord,
    company_ids: &HashSet<&str>,
) -> Result<(), FixtureError> {
    if is_blank(&position.title) {
        return Err(invalid("position", &position.id, "title must not be blank"));
    }
    if !company_ids.contains(position.company_id.as_str()) {
        return Err(FixtureError::UnknownCompany {
            position_id: position.id.clone(),
            company_id: position.company_id.clone(),
        });
    }
    if let Some(salary) = &position.salary {
        if salary.min > salary.max {
            return Err(invalid(
                "position",
                &position.id,
                "salary minimum exceeds maximum",
            ));
        }
        if is_blank(&salary.currency) {
            return Err(invalid(
                "position",
                &position.id,
                "salary currency must not be blank",
            ));
        }
    }
    Ok(())
}

fn unique_ids<'a>(
    collection: &'static str,
    ids: impl Iterator<Item = &'a str>,
) -> Result<HashSet<&'a str>, FixtureError> {
    let mut seen = HashSet::new();
    for id in ids {
        if is_blank(id) {
            return Err(invalid(collection, id, "id must not be blank"));
        }
        if !seen.insert(id) {
            return Err(FixtureError::DuplicateId {
                collection,
                id: id.to_owned(),
            });
        }
    }
    Ok(seen)
}

fn invalid(collection: &'static str, id: &str, message: &str) -> FixtureError {
    FixtureError::InvalidRecord {
        collection,
        id: id.to_owned(),
        message: message.to_owned(),
    }
}
