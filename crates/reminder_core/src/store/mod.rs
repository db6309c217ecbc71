//! Reminder store and its supporting types.
//!
//! # Responsibility
//! - Own the reminder collection and guarantee id uniqueness.
//! - Return semantic errors (`NotFound`, `Conflict`, `InvalidArgument`) as
//!   values the caller must inspect.

pub mod error;
pub mod ids;
pub mod reminder_store;
pub mod shared;
