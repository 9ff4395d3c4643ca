//! Domain primitives, aggregates and services.
//!
//! Purpose: define the placement portal's strongly typed records and the
//! service that mutates them. Types document their invariants and serde
//! contracts in Rustdoc. Adapters live in `crate::outbound` and talk to the
//! domain only through [`ports`].
//!
//! Public surface:
//! - Error / ErrorCode: transport-agnostic failure payload.
//! - User, Company, Position, Application: the four record kinds.
//! - PlacementService: implements every driving port.

pub mod applications;
pub mod auth;
pub mod catalogue;
pub mod error;
pub mod ids;
pub mod ports;
pub mod session;
pub mod user;

mod placement_service;

pub use self::applications::{
    Application, ApplicationDraft, ApplicationStatus, ApplicationSummary, EnrichedApplication,
    ParseApplicationStatusError, StatusCounts,
};
pub use self::auth::{LoginCredentials, LoginValidationError};
pub use self::catalogue::{
    CatalogueValidationError, Company, CompanyDraft, Position, PositionDraft, SalaryRange,
};
pub use self::error::{Error, ErrorCode, ErrorValidationError};
pub use self::ids::{ApplicationId, CompanyId, IdValidationError, PositionId, UserId};
pub use self::placement_service::PlacementService;
pub use self::session::CURRENT_USER_KEY;
pub use self::user::{
    Email, NAME_MAX, NewUser, PersonName, RegistrationRequest, User, UserValidationError,
};

/// Result alias for driving port operations.
///
/// # Examples
/// ```
/// use placement_portal::domain::{DomainResult, Error};
///
/// fn lookup() -> DomainResult<()> {
///     Err(Error::not_found("nope"))
/// }
/// assert!(lookup().is_err());
/// ```
pub type DomainResult<T> = Result<T, Error>;
