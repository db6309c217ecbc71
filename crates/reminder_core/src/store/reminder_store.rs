//! In-memory reminder store.
//!
//! # Responsibility
//! - Own every reminder record and the id allocator.
//! - Provide create/read/update/delete and filtered list APIs.
//!
//! # Invariants
//! - Records are kept in insertion order; mutation never reorders them.
//! - Write paths validate input before touching any record.
//! - List APIs return cloned snapshots, never live views.
//! - Diagnostics are metadata only: ids and outcomes, never titles.

use crate::model::reminder::{NewReminder, Reminder, ReminderId, ReminderPatch};
use crate::query::filter::ReminderFilter;
use crate::store::error::{StoreError, StoreResult};
use crate::store::ids::{IdAllocator, IdPolicy};
use chrono::{DateTime, Local, TimeZone, Utc};
use log::debug;

/// Reminder collection with a per-instance id allocator.
#[derive(Debug)]
pub struct ReminderStore {
    reminders: Vec<Reminder>,
    ids: IdAllocator,
}

impl Default for ReminderStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ReminderStore {
    /// Creates an empty store using `IdPolicy::Sequential`.
    pub fn new() -> Self {
        Self::with_id_policy(IdPolicy::default())
    }

    /// Creates an empty store with a fixed id policy.
    pub fn with_id_policy(policy: IdPolicy) -> Self {
        Self {
            reminders: Vec::new(),
            ids: IdAllocator::new(policy),
        }
    }

    pub fn id_policy(&self) -> IdPolicy {
        self.ids.policy()
    }

    /// Creates a reminder and returns a copy of the stored record.
    ///
    /// # Errors
    /// - `InvalidArgument` for a blank title, or an id that does not fit the
    ///   store's id policy.
    /// - `Conflict` when a caller-supplied id was already used.
    pub fn create(&mut self, request: NewReminder) -> StoreResult<Reminder> {
        let outcome = self.try_create(request);
        match &outcome {
            Ok(reminder) => debug!(
                "event=reminder_create module=store status=ok id={} has_due_date={}",
                reminder.id,
                reminder.due_date.is_some()
            ),
            Err(err) => debug!(
                "event=reminder_create module=store status=error code={}",
                err.code()
            ),
        }
        outcome
    }

    fn try_create(&mut self, request: NewReminder) -> StoreResult<Reminder> {
        request.validate()?;
        let id = self
            .ids
            .allocate(request.id.as_deref(), |id| self.exists(id))?;
        let reminder = Reminder::from_request(id, request, Utc::now());

        self.ids.commit(&reminder.id);
        self.reminders.push(reminder.clone());
        Ok(reminder)
    }

    pub fn exists(&self, id: &str) -> bool {
        self.position(id).is_some()
    }

    /// Returns the current state of a reminder, or `None` when absent.
    pub fn get(&self, id: &str) -> Option<Reminder> {
        self.position(id).map(|index| self.reminders[index].clone())
    }

    /// Applies a sparse patch to title/description/due date.
    ///
    /// An empty patch on an existing id succeeds without changes.
    pub fn update(&mut self, id: &str, patch: ReminderPatch) -> StoreResult<()> {
        patch.validate()?;
        let empty = patch.is_empty();
        let reminder = self.find_mut(id)?;
        reminder.apply(patch);

        debug!("event=reminder_update module=store status=ok id={id} empty_patch={empty}");
        Ok(())
    }

    /// Sets the completion flag to exactly `value`. Idempotent.
    pub fn set_completed(&mut self, id: &str, value: bool) -> StoreResult<()> {
        let reminder = self.find_mut(id)?;
        reminder.is_completed = value;

        debug!("event=reminder_set_completed module=store status=ok id={id} value={value}");
        Ok(())
    }

    pub fn mark_completed(&mut self, id: &str) -> StoreResult<()> {
        self.set_completed(id, true)
    }

    pub fn unmark_completed(&mut self, id: &str) -> StoreResult<()> {
        self.set_completed(id, false)
    }

    /// Deletes a reminder. Returns `false` when the id was already absent.
    ///
    /// Caller-supplied ids stay retired; sequential ids are never reissued.
    pub fn remove(&mut self, id: &str) -> bool {
        let Some(index) = self.position(id) else {
            debug!("event=reminder_remove module=store status=absent id={id}");
            return false;
        };
        self.reminders.remove(index);

        debug!("event=reminder_remove module=store status=ok id={id}");
        true
    }

    /// Returns a snapshot of the reminders matching `filter`.
    pub fn list(&self, filter: &ReminderFilter) -> Vec<Reminder> {
        let items: Vec<Reminder> = self
            .reminders
            .iter()
            .filter(|reminder| filter.matches(reminder))
            .cloned()
            .collect();

        debug!(
            "event=reminder_list module=store status=ok filter={} count={}",
            filter.label(),
            items.len()
        );
        items
    }

    pub fn list_all(&self) -> Vec<Reminder> {
        self.list(&ReminderFilter::All)
    }

    pub fn list_completed(&self) -> Vec<Reminder> {
        self.list(&ReminderFilter::Completed)
    }

    pub fn list_incomplete(&self) -> Vec<Reminder> {
        self.list(&ReminderFilter::Incomplete)
    }

    /// Lists reminders due on or before the end of `reference`'s calendar day.
    ///
    /// Reminders without a due date are never included.
    pub fn list_due_by<Tz: TimeZone>(&self, reference: &DateTime<Tz>) -> Vec<Reminder> {
        self.list(&ReminderFilter::due_by(reference))
    }

    /// Lists reminders due by the end of today, local time.
    pub fn list_due_today(&self) -> Vec<Reminder> {
        self.list_due_by(&Local::now())
    }

    pub fn len(&self) -> usize {
        self.reminders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.reminders.is_empty()
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.reminders.iter().position(|reminder| reminder.id == id)
    }

    fn find_mut(&mut self, id: &str) -> StoreResult<&mut Reminder> {
        self.reminders
            .iter_mut()
            .find(|reminder| reminder.id == id)
            .ok_or_else(|| StoreError::NotFound(ReminderId::from(id)))
    }
}
