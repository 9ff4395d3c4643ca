//! Deterministic synthetic students.
//!
//! Produces reproducible student accounts for demos and load-style tests.
//! The same seed always yields identical records.

use fake::Fake;
use fake::faker::name::raw::{FirstName, LastName};
use fake::locales::EN;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::error::GenerationError;
use crate::records::UserRecord;
use crate::validation::{NAME_MAX, is_valid_email, is_valid_name, sanitize_name};

/// Maximum number of attempts to generate a valid name.
const MAX_NAME_ATTEMPTS: usize = 100;

/// Email domain for generated students, disjoint from the bundled fixtures.
const STUDENT_EMAIL_DOMAIN: &str = "students.example.edu";

/// Branch names paired with their roll number prefix.
const BRANCHES: [(&str, &str); 4] = [
    ("Computer Science", "CS"),
    ("Information Technology", "IT"),
    ("Electronics and Communication", "EC"),
    ("Mechanical Engineering", "ME"),
];

/// Highest year of study assigned to generated students.
const MAX_YEAR: u8 = 4;

/// Generates `count` students with identifiers starting at `first_id`.
///
/// Each student gets a faker-derived name, an email under a dedicated
/// domain that embeds the identifier (so emails never collide), a branch,
/// a year between 1 and 4, and a roll number built from the branch prefix
/// and identifier.
///
/// # Errors
///
/// Returns [`GenerationError`] if a valid name cannot be produced or the
/// identifier range overflows.
///
/// # Example
///
/// ```
/// use placement_fixtures::generate_students;
///
/// let first = generate_students(7, 3, 100).expect("generated");
/// let second = generate_students(7, 3, 100).expect("generated");
///
/// assert_eq!(first.len(), 3);
/// assert_eq!(first, second);
/// assert_eq!(first[0].id, "100");
/// ```
pub fn generate_students(
    seed: u64,
    count: usize,
    first_id: u64,
) -> Result<Vec<UserRecord>, GenerationError> {
    let overflow = GenerationError::IdOverflow { first_id, count };
    let span = u64::try_from(count).map_err(|_| overflow.clone())?;
    first_id.checked_add(span).ok_or(overflow)?;

    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (first_id..first_id + span)
        .map(|id| generate_student(&mut rng, id))
        .collect()
}

fn generate_student(rng: &mut ChaCha8Rng, id: u64) -> Result<UserRecord, GenerationError> {
    let (first, last) = generate_name(rng)?;
    let branch_index = rng.random_range(0..BRANCHES.len());
    let (branch, prefix) = BRANCHES.get(branch_index).copied().unwrap_or(BRANCHES[0]);
    let year = rng.random_range(1..=MAX_YEAR);

    let local = format!("{}.{}.{id}", first.to_lowercase(), last.to_lowercase())
        .replace(' ', "");
    let email = format!("{local}@{STUDENT_EMAIL_DOMAIN}");
    debug_assert!(is_valid_email(&email), "generated email must validate");

    Ok(UserRecord {
        id: id.to_string(),
        name: format!("{first} {last}"),
        email,
        roll_number: format!("{prefix}{id:06}"),
        branch: branch.to_owned(),
        year,
        avatar: None,
    })
}

/// Generates a first and last name, retrying until the pair is valid.
fn generate_name(rng: &mut ChaCha8Rng) -> Result<(String, String), GenerationError> {
    for _ in 0..MAX_NAME_ATTEMPTS {
        let first: String = FirstName(EN).fake_with_rng(rng);
        let last: String = LastName(EN).fake_with_rng(rng);

        let first = sanitize_name(&first).trim().to_owned();
        let last = sanitize_name(&last).trim().to_owned();
        if first.is_empty() || last.is_empty() {
            continue;
        }

        let full = format!("{first} {last}");
        if full.chars().count() <= NAME_MAX && is_valid_name(&full) {
            return Ok((first, last));
        }
    }

    Err(GenerationError::NameGenerationFailed {
        max_attempts: MAX_NAME_ATTEMPTS,
    })
}
