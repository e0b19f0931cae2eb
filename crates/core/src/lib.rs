//! Study tracker core data models.
//!
//! This crate defines the task and reminder records, the per-day
//! completion ledger, and the [`TrackerState`] that owns them.

#![warn(missing_docs)]

// Identities and time
mod id;
mod clock;

// Records
mod task;
mod reminder;
mod ledger;
mod error;
mod serde_fmt;

// State owner
mod state;
mod edit;

// Re-exports
pub use id::{IdGenerator, ReminderId, TaskId};
pub use clock::{Clock, FixedClock, SystemClock};

pub use task::{Category, Task, TaskFields, TaskForm};
pub use reminder::{Reminder, ReminderFields, ReminderForm};
pub use ledger::ProgressLedger;
pub use error::ValidationError;
pub use serde_fmt::{format_date, format_datetime, parse_date, parse_datetime, DATE_FORMAT};

pub use state::{ChangeListener, TrackerData, TrackerState};
pub use edit::EditSession;
