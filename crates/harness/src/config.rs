//! Harness configuration via `fieldcheck.toml`
//!
//! Tunes the catalog's canonical inputs for a particular backend. A project
//! keeps the file next to its test suite; absent a file, the defaults apply.

use crate::error::{HarnessError, HarnessResult};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::info;

/// Config file name
pub const CONFIG_FILE_NAME: &str = "fieldcheck.toml";

/// Default valid input for the datetime rule
pub const DEFAULT_DATETIME: &str = "2014-02-28 12:24:35";

/// Default key assumed not to exist for the foreign-key rule
pub const DEFAULT_MISSING_FOREIGN_KEY: i64 = 999999;

/// Harness configuration loaded from `fieldcheck.toml`.
///
/// # Example
///
/// ```toml
/// datetime_valid_default = "2014-02-28 12:24:35"
/// missing_foreign_key = 999999
/// alphanumeric_foreign_key_probe = true
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HarnessConfig {
    /// Valid input used by the datetime rule when the caller supplies none.
    #[serde(default = "default_datetime")]
    pub datetime_valid_default: String,
    /// Key probed as non-existent by the foreign-key rule.
    #[serde(default = "default_missing_foreign_key")]
    pub missing_foreign_key: i64,
    /// Probe foreign keys with an alphanumeric string. Disable for backends
    /// that error instead of failing validation on a string vs integer key.
    #[serde(default = "default_true")]
    pub alphanumeric_foreign_key_probe: bool,
}

fn default_datetime() -> String {
    DEFAULT_DATETIME.to_string()
}

fn default_missing_foreign_key() -> i64 {
    DEFAULT_MISSING_FOREIGN_KEY
}

fn default_true() -> bool {
    true
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self {
            datetime_valid_default: default_datetime(),
            missing_foreign_key: default_missing_foreign_key(),
            alphanumeric_foreign_key_probe: true,
        }
    }
}

impl HarnessConfig {
    /// Returns the default config file content with comments.
    pub fn default_toml() -> &'static str {
        r#"# fieldcheck harness configuration

# Valid input for the datetime rule when a check supplies none
datetime_valid_default = "2014-02-28 12:24:35"

# Foreign key assumed not to exist in the test fixtures
missing_foreign_key = 999999

# Probe foreign-key fields with the string "abc123".
# Set to false when the backend rejects string keys before validation runs.
alphanumeric_foreign_key_probe = true
"#
    }

    /// Read and parse config from a file path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_file(path: &Path) -> HarnessResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            HarnessError::Config(format!(
                "Failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;
        let config: HarnessConfig = toml::from_str(&content).map_err(|e| {
            HarnessError::Config(format!(
                "Failed to parse config file '{}': {}",
                path.display(),
                e
            ))
        })?;
        info!(target: "fieldcheck::config", path = %path.display(), "Loaded harness config");
        Ok(config)
    }

    /// Write the default config file if it does not already exist.
    ///
    /// Returns `Ok(())` whether the file was created or already existed.
    pub fn write_default_if_missing(path: &Path) -> HarnessResult<()> {
        if !path.exists() {
            std::fs::write(path, Self::default_toml()).map_err(|e| {
                HarnessError::Config(format!(
                    "Failed to write default config file '{}': {}",
                    path.display(),
                    e
                ))
            })?;
        }
        Ok(())
    }

    /// Serialize this config to TOML and write it to the given path.
    pub fn write_to_file(&self, path: &Path) -> HarnessResult<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| HarnessError::Config(format!("Failed to serialize config: {}", e)))?;
        std::fs::write(path, content).map_err(|e| {
            HarnessError::Config(format!(
                "Failed to write config file '{}': {}",
                path.display(),
                e
            ))
        })
    }
}
