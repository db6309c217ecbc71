//! Domain model for reminder records.
//!
//! # Responsibility
//! - Define the canonical reminder shape and its request/patch inputs.
//!
//! # Invariants
//! - Every reminder is identified by a stable `ReminderId`.
//! - Removal hard-deletes the record; its id stays retired and is never
//!   reassigned to a different reminder.

pub mod reminder;
