//! CLI smoke entry point.
//!
//! # Responsibility
//! - Verify `reminder_core` linkage by running a fixed reminder scenario.
//! - Own all text rendering; the core store never formats output.

use chrono::{TimeZone, Utc};
use log::info;
use reminder_core::{
    default_log_level, init_logging, LoggingConfig, NewReminder, Reminder, ReminderPatch,
    ReminderStore, StoreResult,
};
use std::process::ExitCode;

const LOG_DIR_ENV: &str = "REMINDERS_LOG_DIR";
const LOG_LEVEL_ENV: &str = "REMINDERS_LOG_LEVEL";

fn main() -> ExitCode {
    setup_logging();
    println!("reminder_core version={}", reminder_core::core_version());

    match run_demo() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("demo failed: {err}");
            ExitCode::FAILURE
        }
    }
}

fn setup_logging() {
    let Ok(log_dir) = std::env::var(LOG_DIR_ENV) else {
        return;
    };
    let level = std::env::var(LOG_LEVEL_ENV)
        .unwrap_or_else(|_| default_log_level().as_str().to_string());

    let started =
        LoggingConfig::parse(&level, &log_dir).and_then(|config| init_logging(&config));
    if let Err(err) = started {
        eprintln!("logging disabled: {err}");
    }
}

fn run_demo() -> StoreResult<()> {
    let mut store = ReminderStore::new();

    let mut request = NewReminder::new("Buy groceries").with_description("Milk, Eggs, Bread");
    request.due_date = Utc.with_ymd_and_hms(2025, 3, 15, 0, 0, 0).single();
    let groceries = store.create(request)?;
    let doctor = store.create(
        NewReminder::new("Doctor appointment").with_description("Visit Dr. Smith at 5 PM"),
    )?;

    print_section("all reminders", &store.list_all());
    if let Some(found) = store.get(&groceries.id) {
        print_section("lookup", &[found]);
    }

    store.update(
        &groceries.id,
        ReminderPatch::new()
            .title("Buy groceries and fruits")
            .description("Milk, Eggs, Bread, Apples"),
    )?;
    println!("exists {}: {}", doctor.id, store.exists(&doctor.id));

    store.mark_completed(&groceries.id)?;
    print_section("completed", &store.list_completed());
    print_section("due today", &store.list_due_today());

    println!("removed {}: {}", doctor.id, store.remove(&doctor.id));
    print_section("all reminders", &store.list_all());
    info!("event=demo_run module=cli status=ok remaining={}", store.len());
    Ok(())
}

fn print_section(heading: &str, reminders: &[Reminder]) {
    println!("== {heading} ({})", reminders.len());
    for reminder in reminders {
        println!("{}", render(reminder));
    }
}

fn render(reminder: &Reminder) -> String {
    let due = reminder
        .due_date
        .map(|due| due.format("%Y-%m-%d").to_string())
        .unwrap_or_else(|| "-".to_string());
    format!(
        "[{}] #{} {} due={} created={} {}",
        if reminder.is_completed { "x" } else { " " },
        reminder.id,
        reminder.title,
        due,
        reminder.created_at.format("%Y-%m-%d"),
        reminder.description.as_deref().unwrap_or("")
    )
}
