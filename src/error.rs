//! Application-level error types.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while loading settings or building the clock face.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("required environment variable {name} is not set")]
    MissingVar { name: String },

    #[error("environment variable {name}={value:?} is invalid: {reason}")]
    InvalidVar {
        name: String,
        value: String,
        reason: String,
    },

    #[error("CITY{index} and TZ{index} must be set together ({which} is missing)")]
    UnpairedCity { index: usize, which: &'static str },

    #[error("unknown time zone {name:?}: {source}")]
    TimeZone {
        name: String,
        #[source]
        source: jiff::Error,
    },

    #[error("cannot render format {format:?}: {source}")]
    Format {
        format: String,
        #[source]
        source: jiff::Error,
    },

    #[error("rotation pool holds {available} cities but {needed} are needed")]
    PoolTooSmall { available: usize, needed: usize },

    #[error("cannot read font file {}: {source}", .path.display())]
    Font {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl AppError {
    pub(crate) fn invalid(name: &str, value: &str, reason: impl Into<String>) -> Self {
        Self::InvalidVar {
            name: name.to_string(),
            value: value.to_string(),
            reason: reason.into(),
        }
    }
}

/// Convenience alias for `Result<T, AppError>`.
pub type Result<T> = std::result::Result<T, AppError>;
