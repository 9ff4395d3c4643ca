//! Portal configuration loaded via OrthoConfig.
//!
//! Values come from `PLACEMENT_*` environment variables and configuration
//! files. Command-line subcommands are parsed separately by the binary.

use std::ffi::OsString;
use std::path::PathBuf;

use ortho_config::OrthoConfig;
use serde::Deserialize;
use thiserror::Error;

const DEFAULT_SESSION_DIR: &str = ".placement-session";

/// Seed used for synthetic students when none is configured.
pub const DEFAULT_SYNTHETIC_SEED: u64 = 2025;

/// Raised when configuration sources cannot be merged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("failed to load placement settings: {message}")]
pub struct SettingsError {
    message: String,
}

/// Runtime settings for the placement portal.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "PLACEMENT")]
pub struct PortalSettings {
    /// Directory holding file-backed session slots.
    pub session_dir: Option<PathBuf>,
    /// Alternate fixture document replacing the bundled dataset.
    pub fixture_path: Option<PathBuf>,
    /// Number of synthetic students appended after fixture users.
    #[ortho_config(default = 0)]
    pub synthetic_students: usize,
    /// Seed for synthetic student generation.
    #[ortho_config(default = DEFAULT_SYNTHETIC_SEED)]
    pub synthetic_seed: u64,
    /// Emit logs as JSON instead of the compact format. Read it through the
    /// `log_json()` accessor.
    pub log_json: Option<bool>,
}

impl PortalSettings {
    /// Load settings without consulting process arguments.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError`] when a source cannot be parsed.
    pub fn load_from_env() -> Result<Self, SettingsError> {
        Self::load_from_iter([OsString::from("placement")]).map_err(|err| SettingsError {
            message: err.to_string(),
        })
    }

    /// Configured session directory, falling back to `.placement-session`.
    pub fn session_dir(&self) -> PathBuf {
        self.session_dir
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_SESSION_DIR))
    }

    /// Whether logs are emitted as JSON. Off unless configured.
    pub fn log_json(&self) -> bool {
        self.log_json.unwrap_or(false)
    }
}
