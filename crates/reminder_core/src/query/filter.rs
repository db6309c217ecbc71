//! Reminder list filters.
//!
//! # Responsibility
//! - Describe which reminders a list query selects.
//! - Normalize due-by references to the end of their calendar day.
//!
//! # Invariants
//! - Filters never reorder; callers scan in insertion order.
//! - Reminders without a due date never match `DueBy`.

use crate::model::reminder::Reminder;
use chrono::{DateTime, Duration, NaiveDate, TimeZone, Utc};

/// Selection criteria for list queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReminderFilter {
    /// Every stored reminder.
    #[default]
    All,
    /// Reminders with `is_completed == true`.
    Completed,
    /// Reminders with `is_completed == false`.
    Incomplete,
    /// Reminders with a due date at or before the given cut-off instant.
    DueBy(DateTime<Utc>),
}

impl ReminderFilter {
    /// Builds a due-by filter covering the whole calendar day of `reference`.
    ///
    /// The day is taken in the reference's own time zone, so pass a
    /// `DateTime<Local>` for local-time semantics.
    pub fn due_by<Tz: TimeZone>(reference: &DateTime<Tz>) -> Self {
        Self::DueBy(end_of_day(reference))
    }

    pub fn matches(&self, reminder: &Reminder) -> bool {
        match self {
            Self::All => true,
            Self::Completed => reminder.is_completed,
            Self::Incomplete => !reminder.is_completed,
            Self::DueBy(cutoff) => reminder.is_due_by(*cutoff),
        }
    }

    pub(crate) fn label(&self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Completed => "completed",
            Self::Incomplete => "incomplete",
            Self::DueBy(_) => "due_by",
        }
    }
}

/// Returns 23:59:59.999 of the calendar day containing `reference`.
///
/// When that wall-clock time is ambiguous the later instant wins. When it
/// falls in a gap, the cut-off is one millisecond before the next day starts.
pub fn end_of_day<Tz: TimeZone>(reference: &DateTime<Tz>) -> DateTime<Utc> {
    let tz = reference.timezone();
    let day = reference.date_naive();
    day.and_hms_milli_opt(23, 59, 59, 999)
        .and_then(|naive| tz.from_local_datetime(&naive).latest())
        .map(|end| end.with_timezone(&Utc))
        .or_else(|| {
            start_of_next_day(&tz, day).map(|start| start - Duration::milliseconds(1))
        })
        .unwrap_or_else(|| reference.with_timezone(&Utc))
}

fn start_of_next_day<Tz: TimeZone>(tz: &Tz, day: NaiveDate) -> Option<DateTime<Utc>> {
    let midnight = day.succ_opt()?.and_hms_opt(0, 0, 0)?;
    tz.from_local_datetime(&midnight)
        .earliest()
        .map(|start| start.with_timezone(&Utc))
}
