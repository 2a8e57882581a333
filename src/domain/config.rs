use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::domain::error::ConfigError;

/// Sweep settings loaded from a TOML file. Every field is optional; CLI
/// flags take precedence over file values.
///
/// ```toml
/// bits = [8, 10, 12]
/// seed = 42
/// alphabet = "abcdefghijklmnopqrstuvwxyz"
/// input_length = 10
/// max_draws = 1000000
/// timeout_ms = 60000
/// ```
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct SweepConfig {
    pub bits: Option<Vec<u32>>,
    pub seed: Option<u64>,
    pub alphabet: Option<String>,
    pub input_length: Option<usize>,
    pub max_draws: Option<u64>,
    pub timeout_ms: Option<u64>,
}

impl SweepConfig {
    pub fn from_toml_str(path: &Path, text: &str) -> Result<Self, ConfigError> {
        toml::from_str(text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(path, &text)
    }
}
