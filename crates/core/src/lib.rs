//! Shared primitives for all Rust crates in Rolebook.

#![forbid(unsafe_code)]

use std::fmt::Display;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type used across Rolebook crates.
pub type AppResult<T> = Result<T, AppError>;

/// A validated non-empty UTF-8 string.
///
/// The value is stored verbatim; only all-whitespace input is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NonEmptyString(String);

impl NonEmptyString {
    /// Creates a validated non-empty string.
    pub fn new(value: impl Into<String>) -> AppResult<Self> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(AppError::Validation(
                "value must not be empty or whitespace".to_owned(),
            ));
        }

        Ok(Self(value))
    }

    /// Returns the underlying string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl From<NonEmptyString> for String {
    fn from(value: NonEmptyString) -> Self {
        value.0
    }
}

/// Common application error categories.
#[derive(Debug, Error)]
pub enum AppError {
    /// Invalid input or violated invariant.
    #[error("validation error: {0}")]
    Validation(String),

    /// Requested resource does not exist.
    #[error("not found: {0}")]
    NotFound(String),

    /// Write operation conflicts with existing state.
    #[error("conflict: {0}")]
    Conflict(String),

    /// Internal unexpected error.
    #[error("internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Not-found error for an account looked up by its identifier while
    /// attaching a role.
    #[must_use]
    pub fn account_id_not_found(id: impl Display) -> Self {
        Self::NotFound(format!("There is not an account with id : {id}"))
    }

    /// Not-found error for an account referenced by a user id or email.
    #[must_use]
    pub fn account_not_found(reference: impl Display) -> Self {
        Self::NotFound(format!("There is not an account with user : {reference}"))
    }

    /// Returns the message without the category prefix.
    #[must_use]
    pub fn detail(&self) -> &str {
        match self {
            Self::Validation(message)
            | Self::NotFound(message)
            | Self::Conflict(message)
            | Self::Internal(message) => message.as_str(),
        }
    }
}
