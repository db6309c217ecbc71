//! Thread-safe handle around a single reminder store.
//!
//! # Invariants
//! - Every operation holds one whole-store lock from start to finish.
//! - Clones share the same underlying store.

use crate::model::reminder::{NewReminder, Reminder, ReminderPatch};
use crate::query::filter::ReminderFilter;
use crate::store::error::StoreResult;
use crate::store::ids::IdPolicy;
use crate::store::reminder_store::ReminderStore;
use chrono::{DateTime, TimeZone};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// Cloneable, lock-guarded reminder store.
#[derive(Debug, Clone, Default)]
pub struct SharedReminderStore {
    inner: Arc<Mutex<ReminderStore>>,
}

impl SharedReminderStore {
    pub fn new(store: ReminderStore) -> Self {
        Self {
            inner: Arc::new(Mutex::new(store)),
        }
    }

    pub fn with_id_policy(policy: IdPolicy) -> Self {
        Self::new(ReminderStore::with_id_policy(policy))
    }

    // Store operations validate before mutating; a poisoned store is still consistent.
    fn lock(&self) -> MutexGuard<'_, ReminderStore> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn id_policy(&self) -> IdPolicy {
        self.lock().id_policy()
    }

    pub fn create(&self, request: NewReminder) -> StoreResult<Reminder> {
        self.lock().create(request)
    }

    pub fn exists(&self, id: &str) -> bool {
        self.lock().exists(id)
    }

    pub fn get(&self, id: &str) -> Option<Reminder> {
        self.lock().get(id)
    }

    pub fn update(&self, id: &str, patch: ReminderPatch) -> StoreResult<()> {
        self.lock().update(id, patch)
    }

    pub fn set_completed(&self, id: &str, value: bool) -> StoreResult<()> {
        self.lock().set_completed(id, value)
    }

    pub fn mark_completed(&self, id: &str) -> StoreResult<()> {
        self.lock().mark_completed(id)
    }

    pub fn unmark_completed(&self, id: &str) -> StoreResult<()> {
        self.lock().unmark_completed(id)
    }

    pub fn remove(&self, id: &str) -> bool {
        self.lock().remove(id)
    }

    pub fn list(&self, filter: &ReminderFilter) -> Vec<Reminder> {
        self.lock().list(filter)
    }

    pub fn list_all(&self) -> Vec<Reminder> {
        self.lock().list_all()
    }

    pub fn list_completed(&self) -> Vec<Reminder> {
        self.lock().list_completed()
    }

    pub fn list_incomplete(&self) -> Vec<Reminder> {
        self.lock().list_incomplete()
    }

    pub fn list_due_by<Tz: TimeZone>(&self, reference: &DateTime<Tz>) -> Vec<Reminder> {
        self.lock().list_due_by(reference)
    }

    pub fn list_due_today(&self) -> Vec<Reminder> {
        self.lock().list_due_today()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }
}
