use reminder_core::{IdPolicy, NewReminder, ReminderPatch, SharedReminderStore, StoreError};
use std::collections::HashSet;
use std::thread;

#[test]
fn concurrent_creates_yield_unique_ids() {
    let store = SharedReminderStore::default();

    let handles: Vec<_> = (0..8)
        .map(|worker| {
            let store = store.clone();
            thread::spawn(move || {
                (0..25)
                    .map(|n| {
                        store
                            .create(NewReminder::new(format!("w{worker}-{n}")))
                            .unwrap()
                            .id
                    })
                    .collect::<Vec<_>>()
            })
        })
        .collect();

    let mut ids = HashSet::new();
    for handle in handles {
        for id in handle.join().unwrap() {
            assert!(ids.insert(id), "duplicate id issued");
        }
    }

    assert_eq!(ids.len(), 200);
    assert_eq!(store.len(), 200);
}

#[test]
fn clones_share_one_store() {
    let store = SharedReminderStore::with_id_policy(IdPolicy::CallerSupplied);
    let other = store.clone();

    store.create(NewReminder::new("shared").with_id("s1")).unwrap();

    assert!(other.exists("s1"));
    other.set_completed("s1", true).unwrap();
    assert_eq!(store.list_completed().len(), 1);
    assert!(store.list_incomplete().is_empty());
    assert!(matches!(
        other.create(NewReminder::new("dup").with_id("s1")),
        Err(StoreError::Conflict(_))
    ));
}

#[test]
fn shared_store_forwards_not_found_and_removal() {
    let store = SharedReminderStore::default();
    let created = store.create(NewReminder::new("temp")).unwrap();

    store
        .update(&created.id, ReminderPatch::new().description("more"))
        .unwrap();
    assert_eq!(
        store.get(&created.id).unwrap().description.as_deref(),
        Some("more")
    );

    assert!(store.remove(&created.id));
    assert!(store.is_empty());
    assert!(store.list_all().is_empty());
    assert!(matches!(
        store.update(&created.id, ReminderPatch::new()),
        Err(StoreError::NotFound(_))
    ));
}

#[test]
fn shared_store_marks_and_unmarks_completion() {
    let store = SharedReminderStore::with_id_policy(IdPolicy::Random);
    assert_eq!(store.id_policy(), IdPolicy::Random);
    let created = store.create(NewReminder::new("water plants")).unwrap();

    store.mark_completed(&created.id).unwrap();
    store.mark_completed(&created.id).unwrap();
    assert!(store.get(&created.id).unwrap().is_completed);

    store.unmark_completed(&created.id).unwrap();
    assert!(!store.get(&created.id).unwrap().is_completed);
    assert_eq!(store.list_incomplete().len(), 1);

    assert!(matches!(
        store.mark_completed("missing"),
        Err(StoreError::NotFound(id)) if id == "missing"
    ));
    assert!(matches!(
        store.unmark_completed("missing"),
        Err(StoreError::NotFound(_))
    ));
}

#[test]
fn default_shared_store_uses_sequential_ids() {
    let store = SharedReminderStore::default();
    assert_eq!(store.id_policy(), IdPolicy::Sequential);
    assert_eq!(store.create(NewReminder::new("first")).unwrap().id, "1");
}
