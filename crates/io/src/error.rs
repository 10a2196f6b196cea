//! Error types for almanac-io.

use std::path::PathBuf;

/// Error type for all fallible operations in the almanac-io crate.
///
/// This enum covers filesystem failures, malformed event files, record-level
/// validation problems and summary serialisation errors.
#[derive(Debug, thiserror::Error)]
pub enum IoError {
    /// Returned when a required file does not exist on disk.
    #[error("file not found: {}", path.display())]
    FileNotFound {
        /// Path that could not be found.
        path: PathBuf,
    },

    /// Wraps an underlying filesystem error.
    #[error("i/o error on {}: {source}", path.display())]
    Io {
        /// Path being read or written.
        path: PathBuf,
        /// The underlying error.
        source: std::io::Error,
    },

    /// Returned when an event file is not valid TOML or has the wrong shape.
    #[error("failed to parse {}: {reason}", path.display())]
    Parse {
        /// Path of the offending file.
        path: PathBuf,
        /// Description of the parse failure.
        reason: String,
    },

    /// Returned when one or more event records fail validation.
    #[error("{count} validation error(s): {details}")]
    Validation {
        /// Number of accumulated validation failures.
        count: usize,
        /// Human-readable summary of the failures.
        details: String,
    },

    /// Returned when a summary cannot be serialised.
    #[error("serialization error: {reason}")]
    Serialize {
        /// Description of the serialisation failure.
        reason: String,
    },
}

impl From<serde_json::Error> for IoError {
    fn from(e: serde_json::Error) -> Self {
        IoError::Serialize {
            reason: e.to_string(),
        }
    }
}
