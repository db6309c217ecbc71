//! Identifier allocation policies.
//!
//! # Invariants
//! - One policy per store instance; it cannot change after construction.
//! - Allocator state lives inside the store, never in process-wide statics.
//! - Caller-supplied ids are retired forever, even after removal.
//! - Sequential ids never repeat because the counter only moves forward.
//! - Random ids only have to avoid the ids that are currently live.

use crate::model::reminder::ReminderId;
use crate::store::error::{StoreError, StoreResult};
use std::collections::HashSet;
use uuid::Uuid;

/// How a store assigns identifiers to new reminders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IdPolicy {
    /// Per-store counter: `"1"`, `"2"`, ... strictly increasing.
    #[default]
    Sequential,
    /// Random UUID v4 tokens.
    Random,
    /// Caller passes the id in `NewReminder::id`.
    CallerSupplied,
}

impl IdPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Sequential => "sequential",
            Self::Random => "random",
            Self::CallerSupplied => "caller_supplied",
        }
    }
}

#[derive(Debug)]
pub(crate) struct IdAllocator {
    policy: IdPolicy,
    last_issued: u64,
    /// Populated only under `IdPolicy::CallerSupplied`.
    retired: HashSet<ReminderId>,
}

impl IdAllocator {
    pub(crate) fn new(policy: IdPolicy) -> Self {
        Self {
            policy,
            last_issued: 0,
            retired: HashSet::new(),
        }
    }

    pub(crate) fn policy(&self) -> IdPolicy {
        self.policy
    }

    /// Resolves the id for a new reminder without recording it.
    ///
    /// `is_live` reports whether an id belongs to a stored reminder. Call
    /// `commit` once the reminder is actually inserted.
    pub(crate) fn allocate(
        &self,
        requested: Option<&str>,
        is_live: impl Fn(&str) -> bool,
    ) -> StoreResult<ReminderId> {
        match (self.policy, requested) {
            (IdPolicy::CallerSupplied, Some(id)) => {
                if id.trim().is_empty() {
                    return Err(StoreError::InvalidArgument(
                        "reminder id must not be empty".to_string(),
                    ));
                }
                if self.retired.contains(id) || is_live(id) {
                    return Err(StoreError::Conflict(id.to_string()));
                }
                Ok(id.to_string())
            }
            (IdPolicy::CallerSupplied, None) => Err(StoreError::InvalidArgument(
                "reminder id is required by the caller_supplied id policy".to_string(),
            )),
            (policy, Some(_)) => Err(StoreError::InvalidArgument(format!(
                "reminder id is assigned by the store under the {} id policy",
                policy.as_str()
            ))),
            (IdPolicy::Sequential, None) => Ok((self.last_issued + 1).to_string()),
            (IdPolicy::Random, None) => {
                let mut token = Uuid::new_v4().to_string();
                while is_live(&token) {
                    token = Uuid::new_v4().to_string();
                }
                Ok(token)
            }
        }
    }

    pub(crate) fn commit(&mut self, id: &str) {
        match self.policy {
            IdPolicy::Sequential => self.last_issued += 1,
            IdPolicy::Random => {}
            IdPolicy::CallerSupplied => {
                self.retired.insert(id.to_string());
            }
        }
    }

    #[cfg(test)]
    pub(crate) fn retained_ids(&self) -> usize {
        self.retired.len()
    }
}

#[cfg(test)]
mod tests {
    use super::{IdAllocator, IdPolicy};
    use crate::store::error::StoreError;

    fn no_live(_: &str) -> bool {
        false
    }

    #[test]
    fn sequential_ids_increase_only_on_commit() {
        let mut ids = IdAllocator::new(IdPolicy::Sequential);
        assert_eq!(ids.allocate(None, no_live).unwrap(), "1");
        assert_eq!(ids.allocate(None, no_live).unwrap(), "1");

        ids.commit("1");
        assert_eq!(ids.allocate(None, no_live).unwrap(), "2");
    }

    #[test]
    fn random_ids_parse_as_uuid() {
        let ids = IdAllocator::new(IdPolicy::Random);
        let id = ids.allocate(None, no_live).unwrap();
        assert!(uuid::Uuid::parse_str(&id).is_ok());
    }

    #[test]
    fn caller_supplied_rejects_retired_ids() {
        let mut ids = IdAllocator::new(IdPolicy::CallerSupplied);
        assert_eq!(ids.allocate(Some("abc"), no_live).unwrap(), "abc");
        ids.commit("abc");

        assert!(matches!(
            ids.allocate(Some("abc"), no_live),
            Err(StoreError::Conflict(id)) if id == "abc"
        ));
        assert!(matches!(ids.allocate(None, no_live), Err(StoreError::InvalidArgument(_))));
        assert!(matches!(
            ids.allocate(Some("  "), no_live),
            Err(StoreError::InvalidArgument(_))
        ));
    }

    #[test]
    fn generated_policies_retain_nothing() {
        for policy in [IdPolicy::Sequential, IdPolicy::Random] {
            let mut ids = IdAllocator::new(policy);
            for _ in 0..100 {
                let id = ids.allocate(None, no_live).unwrap();
                ids.commit(&id);
            }
            assert_eq!(ids.retained_ids(), 0);
        }
    }

    #[test]
    fn caller_supplied_rejects_live_ids() {
        let ids = IdAllocator::new(IdPolicy::CallerSupplied);
        assert!(matches!(
            ids.allocate(Some("live"), |id| id == "live"),
            Err(StoreError::Conflict(id)) if id == "live"
        ));
    }

    #[test]
    fn random_retries_past_live_ids() {
        let ids = IdAllocator::new(IdPolicy::Random);
        let first = ids.allocate(None, no_live).unwrap();

        let second = ids.allocate(None, |id| id == first).unwrap();
        assert_ne!(second, first);
    }

    #[test]
    fn generated_policies_reject_requested_ids() {
        for policy in [IdPolicy::Sequential, IdPolicy::Random] {
            let ids = IdAllocator::new(policy);
            assert!(matches!(
                ids.allocate(Some("7"), no_live),
                Err(StoreError::InvalidArgument(_))
            ));
        }
    }
}
