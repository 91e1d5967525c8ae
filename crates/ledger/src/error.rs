//! Ledger error model.

use thiserror::Error;

/// Result type used across the ledger domain.
pub type LedgerResult<T> = Result<T, LedgerError>;

/// Ledger-level error.
///
/// Every variant is a deterministic validation failure raised before any
/// mutation happens. Nothing here is retryable; the transport layer owns
/// the translation to client-facing responses.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum LedgerError {
    /// A referenced user name does not exist in the ledger.
    #[error("{0} is not a user")]
    UnknownUser(String),

    /// `create_user` was called with a name that already exists.
    #[error("{0} is already a user")]
    DuplicateUser(String),

    /// An IOU amount was zero, negative, or non-finite.
    #[error("amount must be a positive number, got {0}")]
    InvalidAmount(f64),

    /// A user name was empty or whitespace-only.
    #[error("user name must not be empty")]
    EmptyName,
}

impl LedgerError {
    pub fn unknown_user(name: impl Into<String>) -> Self {
        Self::UnknownUser(name.into())
    }

    pub fn duplicate_user(name: impl Into<String>) -> Self {
        Self::DuplicateUser(name.into())
    }
}
