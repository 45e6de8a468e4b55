//! Error types for the subscription intake workflow.
//!
//! Every error in this crate is either terminal for the session
//! ([`PermissionError`]) or recoverable by re-prompting the user
//! ([`IntakeError`], [`StoreError`]). Nothing here is fatal to the process.

use thiserror::Error;

/// Failure acquiring a push token from the platform provider.
///
/// Terminal for the session unless the user re-grants permission outside
/// this crate. An unsupported platform is not an error; see
/// [`Capability::Unsupported`](crate::provider::Capability).
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum PermissionError {
    #[error("Permission for notifications was denied")]
    Denied,
}

/// Validation failure for a subscribe attempt.
///
/// Both variants are locally recoverable: no external call has been made
/// yet, so the caller re-prompts rather than retrying automatically.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum IntakeError {
    /// Token acquisition has not completed (or was never granted).
    /// Checked before any parsing, since a missing token cannot be fixed
    /// by editing the form.
    #[error("Push token not ready. Please try again.")]
    NoToken,

    /// The companies field parsed to an empty list; it is the single
    /// required field.
    #[error("Please enter at least one company")]
    NoCompanies,
}

/// Failure writing a subscription record to a store.
///
/// Opaque to the caller: network, quota, and local-IO failures all surface
/// identically as a generic failure with no automatic retry.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Store is locked by another process")]
    Locked,

    #[error("Store rejected the record: {0}")]
    Rejected(String),
}

impl From<serde_json::Error> for StoreError {
    fn from(e: serde_json::Error) -> Self {
        StoreError::Serialization(e.to_string())
    }
}

/// Result type for store operations.
pub type Result<T> = std::result::Result<T, StoreError>;
