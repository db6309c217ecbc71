//! Query helpers for reminder list operations.
//!
//! # Responsibility
//! - Define list filters and calendar-day normalization.
//! - Keep date policy out of the store's mutation paths.

pub mod filter;
