//! Core domain logic for the reminder store.
//! This crate is the single source of truth for reminder invariants.

pub mod logging;
pub mod model;
pub mod query;
pub mod store;

pub use logging::{
    default_log_level, init_logging, logging_status, LogLevel, LoggingConfig, LoggingError,
};
pub use model::reminder::{
    NewReminder, Reminder, ReminderId, ReminderPatch, ReminderValidationError,
};
pub use query::filter::{end_of_day, ReminderFilter};
pub use store::error::{StoreError, StoreResult};
pub use store::ids::IdPolicy;
pub use store::reminder_store::ReminderStore;
pub use store::shared::SharedReminderStore;

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
