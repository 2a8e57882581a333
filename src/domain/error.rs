use std::path::PathBuf;

use thiserror::Error;

use crate::io::{Format, IoError};

/// Errors produced by the truncator.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TruncateError {
    /// Requested width is zero, odd, or wider than the digest.
    ///
    /// Widths are exact bit counts, not whole hex nibbles, so the sweep's
    /// step-2 widths such as 10 and 14 are accepted.
    #[error("invalid parameter: bits must be a positive even number no greater than {max}, got {bits}")]
    InvalidParameter { bits: u32, max: u32 },
}

/// Errors produced before a collision search or sweep starts.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    /// Digest width rejected by the truncator.
    #[error(transparent)]
    Truncate(#[from] TruncateError),

    /// Input alphabet or length cannot describe a usable input space.
    #[error("invalid parameter: {message}")]
    InputSpace { message: String },

    /// Unbounded search over a space where no collision is assured.
    #[error(
        "invalid parameter: an unbounded search over {size} inputs may never collide at {bits} bits; set max_draws or timeout_ms"
    )]
    UnreachableCollision { bits: u32, size: u64 },

    /// Sweep was given no widths to run.
    #[error("invalid parameter: sweep needs at least one digest width")]
    EmptySweep,
}

impl SearchError {
    pub(crate) fn input_space(message: impl Into<String>) -> Self {
        Self::InputSpace {
            message: message.into(),
        }
    }
}

/// Errors produced while loading a sweep configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Config file could not be read.
    #[error("failed to read config file `{}`: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Config file is not valid TOML for the sweep schema.
    #[error("failed to parse config file `{}`: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Errors produced by the `sweep` command boundary.
#[derive(Debug, Error)]
pub enum SweepCommandError {
    /// Config file could not be loaded.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Widths or input space were rejected before the sweep started.
    #[error(transparent)]
    Search(#[from] SearchError),

    /// Output format could not be resolved from flags or output path.
    #[error("failed to resolve output format: {source}")]
    ResolveOutput {
        #[source]
        source: IoError,
    },

    /// Output file could not be created.
    #[error("failed to create output file `{}`: {source}", path.display())]
    CreateOutput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Table could not be written in the declared format.
    #[error("failed to write {format} output: {source}")]
    WriteOutput {
        format: Format,
        #[source]
        source: IoError,
    },
}

impl SweepCommandError {
    /// `(exit code, error kind)` for the CLI error envelope.
    pub fn classify(&self) -> (i32, &'static str) {
        match self {
            Self::WriteOutput { .. } => (1, "internal_error"),
            _ => (3, "input_usage_error"),
        }
    }
}
