//! Task model - a to-do item with a category and optional due date.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use crate::error::ValidationError;
use crate::id::TaskId;
use crate::serde_fmt;

/// A task on the to-do list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    /// Unique identifier, fixed at creation
    pub id: TaskId,

    /// Display text as entered
    pub text: String,

    /// Category
    pub category: Category,

    /// Optional due date
    #[serde(default, with = "serde_fmt::optional_date")]
    pub due_date: Option<NaiveDate>,

    /// Whether the task is done
    #[serde(default)]
    pub completed: bool,
}

impl Task {
    /// Create an incomplete task from validated fields.
    pub fn new(id: TaskId, fields: TaskFields) -> Self {
        Self {
            id,
            text: fields.text,
            category: fields.category,
            due_date: fields.due_date,
            completed: false,
        }
    }

    /// Replace the editable fields, keeping id and completion.
    pub fn apply(&mut self, fields: TaskFields) {
        self.text = fields.text;
        self.category = fields.category;
        self.due_date = fields.due_date;
    }
}

impl std::fmt::Display for Task {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.text, self.category)?;
        if let Some(due) = self.due_date {
            write!(f, " - {}", serde_fmt::format_date(due))?;
        }
        Ok(())
    }
}

/// Task categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    /// Study session
    Study,
    /// Assignment
    Assignment,
    /// Project work
    Project,
    /// Personal errand
    Personal,
}

impl Category {
    /// Every category, in menu order.
    pub const ALL: [Category; 4] = [
        Category::Study,
        Category::Assignment,
        Category::Project,
        Category::Personal,
    ];

    /// Display name, also the persisted form.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Study => "Study",
            Category::Assignment => "Assignment",
            Category::Project => "Project",
            Category::Personal => "Personal",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Category {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(ValidationError::MissingCategory);
        }
        Category::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| ValidationError::UnknownCategory(s.to_string()))
    }
}

/// Raw task form input, as typed by the user.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskForm {
    /// Task text
    pub text: String,
    /// Category name, empty when none is selected
    pub category: String,
    /// Due date as `YYYY-MM-DD`, empty when unset
    pub due_date: String,
}

impl TaskForm {
    /// Build a form from its three fields.
    pub fn new(
        text: impl Into<String>,
        category: impl Into<String>,
        due_date: impl Into<String>,
    ) -> Self {
        Self {
            text: text.into(),
            category: category.into(),
            due_date: due_date.into(),
        }
    }

    /// Pre-fill a form with an existing task's values.
    pub fn from_task(task: &Task) -> Self {
        Self {
            text: task.text.clone(),
            category: task.category.as_str().to_string(),
            due_date: task.due_date.map(serde_fmt::format_date).unwrap_or_default(),
        }
    }

    /// Validate the form.
    pub fn parse(&self) -> Result<TaskFields, ValidationError> {
        if self.text.trim().is_empty() {
            return Err(ValidationError::EmptyText);
        }
        let category = self.category.parse::<Category>()?;
        let due_date = match self.due_date.trim() {
            "" => None,
            raw => Some(
                serde_fmt::parse_date(raw)
                    .ok_or_else(|| ValidationError::InvalidDueDate(raw.to_string()))?,
            ),
        };

        Ok(TaskFields {
            text: self.text.clone(),
            category,
            due_date,
        })
    }
}

/// Validated task fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskFields {
    /// Non-blank text
    pub text: String,
    /// Category
    pub category: Category,
    /// Optional due date
    pub due_date: Option<NaiveDate>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_form() {
        let fields = TaskForm::new("Read Ch.1", "Study", "2024-05-01").parse().unwrap();
        assert_eq!(fields.text, "Read Ch.1");
        assert_eq!(fields.category, Category::Study);
        assert_eq!(fields.due_date, NaiveDate::from_ymd_opt(2024, 5, 1));
    }

    #[test]
    fn test_parse_rejects_blank_text_before_category() {
        assert_eq!(TaskForm::new("   ", "", "").parse(), Err(ValidationError::EmptyText));
        assert_eq!(TaskForm::new("x", "", "").parse(), Err(ValidationError::MissingCategory));
        assert_eq!(
            TaskForm::new("x", "Chores", "").parse(),
            Err(ValidationError::UnknownCategory("Chores".to_string()))
        );
        assert_eq!(
            TaskForm::new("x", "Study", "next week").parse(),
            Err(ValidationError::InvalidDueDate("next week".to_string()))
        );
    }

    #[test]
    fn test_text_is_kept_as_entered() {
        let fields = TaskForm::new("  padded ", "personal", "").parse().unwrap();
        assert_eq!(fields.text, "  padded ");
        assert_eq!(fields.category, Category::Personal);
        assert!(fields.due_date.is_none());
    }

    #[test]
    fn test_task_json_matches_stored_layout() {
        let task = Task::new(
            TaskId::new(1714550400000),
            TaskForm::new("Essay", "Assignment", "").parse().unwrap(),
        );
        let json = serde_json::to_value(&task).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "id": 1714550400000u64,
                "text": "Essay",
                "category": "Assignment",
                "dueDate": "",
                "completed": false
            })
        );

        let back: Task = serde_json::from_value(json).unwrap();
        assert_eq!(back, task);
    }

    #[test]
    fn test_form_from_task_round_trips() {
        let task = Task::new(
            TaskId::new(1),
            TaskForm::new("Lab", "Project", "2024-06-30").parse().unwrap(),
        );
        let form = TaskForm::from_task(&task);
        assert_eq!(form, TaskForm::new("Lab", "Project", "2024-06-30"));
    }
}
