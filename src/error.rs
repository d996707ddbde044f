//! Error types for the activity directory and its startup path.

use std::path::PathBuf;

use thiserror::Error;

/// Rejections from signup/unregister. The display strings are the exact
/// messages returned to clients.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DirectoryError {
    #[error("Activity not found")]
    ActivityNotFound { activity: String },

    #[error("Student already signed up for this activity")]
    AlreadySignedUp { activity: String, email: String },

    #[error("Student not registered for this activity")]
    NotRegistered { activity: String, email: String },
}

impl DirectoryError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, DirectoryError::ActivityNotFound { .. })
    }
}

/// Failures while loading a seed file given by `ACTIVITIES_SEED`.
#[derive(Debug, Error)]
pub enum SeedError {
    #[error("failed to read seed file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse seed file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("activity {activity:?} lists {email} more than once")]
    DuplicateParticipant { activity: String, email: String },
}

/// Bad values in the process environment.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value {value:?} for {key}")]
    Invalid { key: &'static str, value: String },
}
