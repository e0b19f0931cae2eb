//! Tracker state - the single owner of tasks, reminders and the ledger.
//!
//! Every mutation is synchronous. Invalid input and unknown ids are silent
//! no-ops: the operation returns `None` and nothing changes. Applied
//! mutations notify each subscribed [`ChangeListener`] with the new data.

use std::sync::Arc;
use serde::{Deserialize, Serialize};
use tracing::debug;
use crate::clock::{Clock, SystemClock};
use crate::id::{IdGenerator, ReminderId, TaskId};
use crate::ledger::ProgressLedger;
use crate::reminder::{Reminder, ReminderForm};
use crate::task::{Task, TaskForm};

/// The persisted part of the tracker.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackerData {
    /// Tasks in display order
    #[serde(default)]
    pub todos: Vec<Task>,

    /// Reminders in display order
    #[serde(default)]
    pub reminders: Vec<Reminder>,

    /// Completions per day
    #[serde(default)]
    pub progress: ProgressLedger,
}

impl TrackerData {
    /// Largest task or reminder id present.
    pub fn max_id(&self) -> u64 {
        let tasks = self.todos.iter().map(|t| t.id.as_u64());
        let reminders = self.reminders.iter().map(|r| r.id.as_u64());
        tasks.chain(reminders).max().unwrap_or(0)
    }
}

/// Receives the full data after each applied mutation.
pub trait ChangeListener: Send {
    /// Called once per applied mutation.
    fn on_change(&mut self, data: &TrackerData);
}

impl<F> ChangeListener for F
where
    F: FnMut(&TrackerData) + Send,
{
    fn on_change(&mut self, data: &TrackerData) {
        self(data)
    }
}

/// Owner of all tracker data.
pub struct TrackerState {
    data: TrackerData,
    ids: IdGenerator,
    clock: Arc<dyn Clock>,
    listeners: Vec<Box<dyn ChangeListener>>,
}

impl TrackerState {
    /// Create an empty tracker.
    pub fn new() -> Self {
        Self::from_data(TrackerData::default())
    }

    /// Create a tracker around previously loaded data.
    pub fn from_data(data: TrackerData) -> Self {
        let ids = IdGenerator::seeded(data.max_id());
        Self {
            data,
            ids,
            clock: Arc::new(SystemClock),
            listeners: Vec::new(),
        }
    }

    /// Use a different clock.
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    /// Register a listener for applied mutations.
    pub fn subscribe(&mut self, listener: impl ChangeListener + 'static) {
        self.listeners.push(Box::new(listener));
    }

    /// Current data.
    pub fn data(&self) -> &TrackerData {
        &self.data
    }

    /// Tasks in insertion order.
    pub fn tasks(&self) -> &[Task] {
        &self.data.todos
    }

    /// Look up a task.
    pub fn task(&self, id: TaskId) -> Option<&Task> {
        self.data.todos.iter().find(|t| t.id == id)
    }

    /// Reminders in insertion order.
    pub fn reminders(&self) -> &[Reminder] {
        &self.data.reminders
    }

    /// Look up a reminder.
    pub fn reminder(&self, id: ReminderId) -> Option<&Reminder> {
        self.data.reminders.iter().find(|r| r.id == id)
    }

    /// The completion ledger.
    pub fn ledger(&self) -> &ProgressLedger {
        &self.data.progress
    }

    // === Tasks ===

    /// Append a new incomplete task.
    pub fn add_task(&mut self, form: &TaskForm) -> Option<&Task> {
        let fields = match form.parse() {
            Ok(fields) => fields,
            Err(e) => {
                debug!(reason = %e, "add_task rejected");
                return None;
            }
        };

        let id = TaskId::new(self.ids.next(self.clock.now_millis()));
        self.data.todos.push(Task::new(id, fields));
        self.notify();
        self.data.todos.last()
    }

    /// Replace a task's text, category and due date in place.
    pub fn update_task(&mut self, id: TaskId, form: &TaskForm) -> Option<&Task> {
        let fields = match form.parse() {
            Ok(fields) => fields,
            Err(e) => {
                debug!(%id, reason = %e, "update_task rejected");
                return None;
            }
        };
        let Some(idx) = self.position(id) else {
            debug!(%id, "update_task: no such task");
            return None;
        };

        self.data.todos[idx].apply(fields);
        self.notify();
        self.data.todos.get(idx)
    }

    /// Flip a task's completion flag.
    ///
    /// Completing a task counts one completion for today in the ledger.
    /// Un-completing it does not take the count back.
    pub fn toggle_task(&mut self, id: TaskId) -> Option<&Task> {
        let Some(idx) = self.position(id) else {
            debug!(%id, "toggle_task: no such task");
            return None;
        };

        let task = &mut self.data.todos[idx];
        task.completed = !task.completed;
        if task.completed {
            let today = self.clock.today();
            let count = self.data.progress.record_completion(today);
            debug!(%id, %today, count, "completion recorded");
        }
        self.notify();
        self.data.todos.get(idx)
    }

    /// Remove a task. Ledger counts are left as they are.
    pub fn delete_task(&mut self, id: TaskId) -> Option<Task> {
        let Some(idx) = self.position(id) else {
            debug!(%id, "delete_task: no such task");
            return None;
        };

        let removed = self.data.todos.remove(idx);
        self.notify();
        Some(removed)
    }

    // === Reminders ===

    /// Append a new reminder.
    pub fn add_reminder(&mut self, form: &ReminderForm) -> Option<&Reminder> {
        let fields = match form.parse() {
            Ok(fields) => fields,
            Err(e) => {
                debug!(reason = %e, "add_reminder rejected");
                return None;
            }
        };

        let id = ReminderId::new(self.ids.next(self.clock.now_millis()));
        self.data.reminders.push(Reminder::new(id, fields));
        self.notify();
        self.data.reminders.last()
    }

    /// Remove a reminder.
    pub fn delete_reminder(&mut self, id: ReminderId) -> Option<Reminder> {
        let Some(idx) = self.data.reminders.iter().position(|r| r.id == id) else {
            debug!(%id, "delete_reminder: no such reminder");
            return None;
        };

        let removed = self.data.reminders.remove(idx);
        self.notify();
        Some(removed)
    }

    fn position(&self, id: TaskId) -> Option<usize> {
        self.data.todos.iter().position(|t| t.id == id)
    }

    fn notify(&mut self) {
        for listener in self.listeners.iter_mut() {
            listener.on_change(&self.data);
        }
    }
}

impl Default for TrackerState {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for TrackerState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TrackerState")
            .field("data", &self.data)
            .field("last_id", &self.ids.last())
            .field("listeners", &self.listeners.len())
            .finish()
    }
}
