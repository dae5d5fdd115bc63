//! Error types for dashboard actions.
//!
//! None of these are fatal. A failed action leaves state untouched and is
//! reported to the user as a transient notice.

use thiserror::Error;

/// Malformed user input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("username must not be empty")]
    EmptyUsername,
    #[error("email must not be empty")]
    EmptyEmail,
    #[error("`{0}` is not a valid email address")]
    InvalidEmail(String),
    #[error("avatar must not be empty")]
    EmptyAvatar,
    #[error("avatar upload must be an image, got `{0}`")]
    NotAnImage(String),
}

/// Action attempted from the wrong session state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PreconditionError {
    #[error("log in to change your settings")]
    NotLoggedIn,
    #[error("already logged in")]
    AlreadyLoggedIn,
}

/// The browser could not hand over the chosen file.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("could not read `{name}`: {reason}")]
pub struct UploadError {
    pub name: String,
    pub reason: String,
}

/// Failures of the persistent key-value store.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("client storage is not available")]
    Unavailable,
    #[error("client storage rejected the write: {0}")]
    Write(String),
    #[error("could not encode session record")]
    Encode(#[from] serde_json::Error),
}

/// Any error a dashboard action can produce.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DashboardError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Precondition(#[from] PreconditionError),
    #[error(transparent)]
    Upload(#[from] UploadError),
    #[error("session not saved: {0}")]
    Store(String),
}

impl From<StoreError> for DashboardError {
    fn from(err: StoreError) -> Self {
        Self::Store(err.to_string())
    }
}
