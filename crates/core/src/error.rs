//! Error types for catalog loading, validation and submission.

use thiserror::Error;

use crate::form::Field;

/// Failure while reading the team/player catalog.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// Transport-level failure (DNS, TLS, connection reset, timeout).
    #[error("catalog request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The endpoint answered with a non-success status.
    #[error("catalog endpoint returned HTTP {status}")]
    Status {
        /// Response status code.
        status: u16,
    },

    /// The body was not a bootstrap document.
    #[error("catalog document could not be parsed: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Failure while writing a prediction to the remote store.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Transport-level failure before a response arrived.
    #[error("store request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The store answered with a non-success status.
    #[error("store rejected insert with HTTP {status}: {body}")]
    Rejected {
        /// Response status code.
        status: u16,
        /// Response body, for the log.
        body: String,
    },

    /// The access key cannot be sent as a header.
    #[error("invalid store credentials: {0}")]
    InvalidHeader(#[from] reqwest::header::InvalidHeaderValue),
}

/// A form field that would block submission.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A required field is blank.
    #[error("{} is required", .0.label())]
    Required(Field),

    /// The email is not shaped like `local@domain`.
    #[error("{value:?} is not a valid email address")]
    InvalidEmail {
        /// Trimmed input.
        value: String,
    },

    /// The leave date is not a calendar date.
    #[error("{value:?} is not a date (expected YYYY-MM-DD)")]
    InvalidDate {
        /// Trimmed input.
        value: String,
    },
}

impl ValidationError {
    /// Field the error refers to, used to move focus.
    pub fn field(&self) -> Field {
        match self {
            ValidationError::Required(field) => *field,
            ValidationError::InvalidEmail { .. } => Field::Email,
            ValidationError::InvalidDate { .. } => Field::ManagerLeaveDate,
        }
    }
}

/// Why a submit request did not start a write.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SubmitRejected {
    /// An earlier write has not settled yet.
    #[error("a submission is already in progress")]
    InFlight,

    /// The form failed validation.
    #[error(transparent)]
    Invalid(#[from] ValidationError),
}

/// Startup configuration problems.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// A required setting is blank.
    #[error("{key} is not configured (set the {env_var} environment variable)")]
    Missing {
        /// Configuration key.
        key: &'static str,
        /// Environment variable that supplies it.
        env_var: &'static str,
    },

    /// A source could not be read or deserialized.
    #[error("configuration could not be loaded: {0}")]
    Load(#[from] ::config::ConfigError),

    /// The shared HTTP client failed to build.
    #[error("HTTP client could not be built: {0}")]
    Client(#[from] reqwest::Error),
}
