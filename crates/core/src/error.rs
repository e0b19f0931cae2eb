//! Validation errors for form input.

/// Why a form submission was rejected.
///
/// State operations never return these; they are exposed so a host can
/// explain a rejected submission.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// Task text is empty after trimming
    #[error("task text must not be empty")]
    EmptyText,

    /// No category selected
    #[error("a category is required")]
    MissingCategory,

    /// Category is not one of the known names
    #[error("unknown category: {0}")]
    UnknownCategory(String),

    /// Due date is not a `YYYY-MM-DD` date
    #[error("invalid due date: {0}")]
    InvalidDueDate(String),

    /// Reminder message is empty after trimming
    #[error("reminder message must not be empty")]
    EmptyMessage,

    /// No reminder time given
    #[error("a reminder time is required")]
    MissingTime,

    /// Reminder time is not a `YYYY-MM-DDTHH:MM` date-time
    #[error("invalid reminder time: {0}")]
    InvalidTime(String),
}
