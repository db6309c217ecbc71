//! Store error taxonomy.

use crate::model::reminder::{ReminderId, ReminderValidationError};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type StoreResult<T> = Result<T, StoreError>;

/// Failure outcomes for reminder store operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// Input failed a precondition; nothing was changed.
    InvalidArgument(String),
    /// The referenced reminder does not currently exist.
    NotFound(ReminderId),
    /// A caller-supplied id is already in use or was used before.
    Conflict(ReminderId),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidArgument(message) => write!(f, "invalid argument: {message}"),
            Self::NotFound(id) => write!(f, "reminder not found: {id}"),
            Self::Conflict(id) => write!(f, "reminder id already used: {id}"),
        }
    }
}

impl Error for StoreError {}

impl From<ReminderValidationError> for StoreError {
    fn from(value: ReminderValidationError) -> Self {
        Self::InvalidArgument(value.to_string())
    }
}

impl StoreError {
    pub(crate) fn code(&self) -> &'static str {
        match self {
            Self::InvalidArgument(_) => "invalid_argument",
            Self::NotFound(_) => "not_found",
            Self::Conflict(_) => "conflict",
        }
    }
}
