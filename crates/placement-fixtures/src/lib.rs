//! Seed data for the campus placement portal.
//!
//! This crate owns the fixture store: a versioned JSON document listing
//! students, companies, positions and applications. It is independent of the
//! backend domain types so the backend can convert records at the point of
//! use without a circular dependency.
//!
//! # Overview
//!
//! The crate supports:
//!
//! - Loading fixture sets from JSON strings, files, or the bundled dataset
//! - Referential validation (positions reference companies, applications
//!   reference users and positions with a consistent company)
//! - Deterministic synthetic students generated from a numeric seed
//!
//! # Example
//!
//! ```
//! use placement_fixtures::FixtureSet;
//!
//! let fixtures = FixtureSet::bundled().expect("bundled fixtures are valid");
//! assert_eq!(fixtures.companies().len(), 5);
//! assert_eq!(fixtures.positions_for_company("1").count(), 2);
//! ```

mod error;
mod fixture_set;
mod generator;
mod records;
mod validation;

pub use error::{FixtureError, GenerationError};
pub use fixture_set::{FixtureCollections, FixtureSet};
pub use generator::generate_students;
pub use records::{
    ApplicationRecord, ApplicationStatusRecord, CompanyRecord, PositionRecord, SalaryRecord,
    UserRecord,
};
pub use validation::{NAME_MAX, is_valid_email, is_valid_name};
