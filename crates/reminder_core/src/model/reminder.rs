//! Reminder domain model.
//!
//! # Responsibility
//! - Define the canonical reminder record owned by the store.
//! - Define creation requests and sparse update patches.
//!
//! # Invariants
//! - `id` is stable and never reused for another reminder.
//! - `title` is non-empty after trimming.
//! - `created_at` and `is_completed` are never changed by a patch.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Opaque identifier assigned to a reminder at creation.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type ReminderId = String;

/// Model-level validation failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReminderValidationError {
    /// Title is empty or whitespace only.
    EmptyTitle,
    /// Id is empty or whitespace only.
    EmptyId,
}

impl Display for ReminderValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyTitle => write!(f, "title must not be empty"),
            Self::EmptyId => write!(f, "id must not be empty"),
        }
    }
}

impl Error for ReminderValidationError {}

/// Canonical reminder record.
///
/// Deserialization runs `validate`, so decoded records hold the same
/// invariants as ones created by the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "ReminderRecord")]
pub struct Reminder {
    pub id: ReminderId,
    pub title: String,
    pub description: Option<String>,
    /// `None` means no deadline.
    pub due_date: Option<DateTime<Utc>>,
    pub is_completed: bool,
    /// Fixed at creation.
    pub created_at: DateTime<Utc>,
}

/// Unchecked wire shape decoded before `Reminder::validate` runs.
#[derive(Deserialize)]
struct ReminderRecord {
    id: ReminderId,
    title: String,
    description: Option<String>,
    due_date: Option<DateTime<Utc>>,
    is_completed: bool,
    created_at: DateTime<Utc>,
}

impl TryFrom<ReminderRecord> for Reminder {
    type Error = ReminderValidationError;

    fn try_from(value: ReminderRecord) -> Result<Self, Self::Error> {
        let reminder = Self {
            id: value.id,
            title: value.title,
            description: value.description,
            due_date: value.due_date,
            is_completed: value.is_completed,
            created_at: value.created_at,
        };
        reminder.validate()?;
        Ok(reminder)
    }
}

impl Reminder {
    /// Checks record-level invariants: non-blank id and title.
    pub fn validate(&self) -> Result<(), ReminderValidationError> {
        if self.id.trim().is_empty() {
            return Err(ReminderValidationError::EmptyId);
        }
        validate_title(&self.title)
    }

    /// Builds a fresh, incomplete reminder from a validated request.
    pub(crate) fn from_request(
        id: ReminderId,
        request: NewReminder,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            title: request.title,
            description: request.description,
            due_date: request.due_date,
            is_completed: false,
            created_at,
        }
    }

    /// Applies the fields present in `patch`, leaving the rest untouched.
    ///
    /// Completion state and creation time are not part of a patch.
    pub(crate) fn apply(&mut self, patch: ReminderPatch) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
        if let Some(due_date) = patch.due_date {
            self.due_date = due_date;
        }
    }

    /// Returns whether the reminder has a deadline at or before `cutoff`.
    pub fn is_due_by(&self, cutoff: DateTime<Utc>) -> bool {
        self.due_date.is_some_and(|due| due <= cutoff)
    }
}

/// Creation request for a reminder.
///
/// `id` is only meaningful for stores using `IdPolicy::CallerSupplied`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewReminder {
    pub id: Option<ReminderId>,
    pub title: String,
    pub description: Option<String>,
    pub due_date: Option<DateTime<Utc>>,
}

impl NewReminder {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    pub fn with_id(mut self, id: impl Into<ReminderId>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_due_date(mut self, due_date: DateTime<Utc>) -> Self {
        self.due_date = Some(due_date);
        self
    }

    pub fn validate(&self) -> Result<(), ReminderValidationError> {
        validate_title(&self.title)
    }
}

/// Sparse update payload: `None` means "leave unchanged".
///
/// `description` and `due_date` are doubly optional so a patch can clear
/// them: `Some(None)` removes the value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReminderPatch {
    pub title: Option<String>,
    pub description: Option<Option<String>>,
    pub due_date: Option<Option<DateTime<Utc>>>,
}

impl ReminderPatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(Some(description.into()));
        self
    }

    pub fn clear_description(mut self) -> Self {
        self.description = Some(None);
        self
    }

    pub fn due_date(mut self, due_date: DateTime<Utc>) -> Self {
        self.due_date = Some(Some(due_date));
        self
    }

    pub fn clear_due_date(mut self) -> Self {
        self.due_date = Some(None);
        self
    }

    /// Returns whether applying this patch would change nothing.
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.description.is_none() && self.due_date.is_none()
    }

    pub fn validate(&self) -> Result<(), ReminderValidationError> {
        match &self.title {
            Some(title) => validate_title(title),
            None => Ok(()),
        }
    }
}

fn validate_title(title: &str) -> Result<(), ReminderValidationError> {
    if title.trim().is_empty() {
        return Err(ReminderValidationError::EmptyTitle);
    }
    Ok(())
}
