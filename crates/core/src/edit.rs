//! Edit session - at most one task is being edited at a time.

use tracing::debug;
use crate::id::TaskId;
use crate::state::TrackerState;
use crate::task::{Task, TaskForm};

#[derive(Debug, Clone)]
struct Draft {
    task_id: TaskId,
    form: TaskForm,
}

/// Holds the task currently being edited and its unsaved form.
///
/// Edits only reach the store through [`EditSession::commit`].
#[derive(Debug, Clone, Default)]
pub struct EditSession {
    draft: Option<Draft>,
}

impl EditSession {
    /// Create a session with nothing being edited.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start editing `task`, pre-filling the form from it.
    ///
    /// Any edit already in progress is dropped without saving; its task id
    /// is returned.
    pub fn begin(&mut self, task: &Task) -> Option<TaskId> {
        let discarded = self.draft.take().map(|d| d.task_id);
        if let Some(prev) = discarded {
            debug!(%prev, next = %task.id, "discarding unsaved edit");
        }
        self.draft = Some(Draft {
            task_id: task.id,
            form: TaskForm::from_task(task),
        });
        discarded
    }

    /// Id of the task being edited.
    pub fn editing(&self) -> Option<TaskId> {
        self.draft.as_ref().map(|d| d.task_id)
    }

    /// The unsaved form.
    pub fn form(&self) -> Option<&TaskForm> {
        self.draft.as_ref().map(|d| &d.form)
    }

    /// Mutable access to the unsaved form.
    pub fn form_mut(&mut self) -> Option<&mut TaskForm> {
        self.draft.as_mut().map(|d| &mut d.form)
    }

    /// Submit the form as an update.
    ///
    /// A form that fails validation keeps the session open. Otherwise the
    /// session closes, even if the task has since been deleted.
    pub fn commit<'a>(&mut self, state: &'a mut TrackerState) -> Option<&'a Task> {
        let draft = self.draft.as_ref()?;
        if let Err(e) = draft.form.parse() {
            debug!(id = %draft.task_id, reason = %e, "edit not committed");
            return None;
        }

        let draft = self.draft.take()?;
        state.update_task(draft.task_id, &draft.form)
    }

    /// Close the session without saving.
    pub fn cancel(&mut self) -> Option<TaskId> {
        self.draft.take().map(|d| d.task_id)
    }
}
