//! Reminder model - a timestamped message.
//!
//! The reminder time is stored for display only; nothing fires when it
//! passes.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use crate::error::ValidationError;
use crate::id::ReminderId;
use crate::serde_fmt;

/// A reminder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reminder {
    /// Unique identifier
    pub id: ReminderId,

    /// Message as entered
    pub message: String,

    /// Local date-time the reminder is for
    #[serde(with = "serde_fmt::local_datetime")]
    pub time: NaiveDateTime,
}

impl Reminder {
    /// Create a reminder from validated fields.
    pub fn new(id: ReminderId, fields: ReminderFields) -> Self {
        Self {
            id,
            message: fields.message,
            time: fields.time,
        }
    }
}

impl std::fmt::Display for Reminder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} at {}", self.message, serde_fmt::format_datetime(self.time))
    }
}

/// Raw reminder form input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReminderForm {
    /// Message text
    pub message: String,
    /// Date-time as `YYYY-MM-DDTHH:MM`
    pub time: String,
}

impl ReminderForm {
    /// Build a form from its two fields.
    pub fn new(message: impl Into<String>, time: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            time: time.into(),
        }
    }

    /// Validate the form.
    pub fn parse(&self) -> Result<ReminderFields, ValidationError> {
        if self.message.trim().is_empty() {
            return Err(ValidationError::EmptyMessage);
        }
        let raw = self.time.trim();
        if raw.is_empty() {
            return Err(ValidationError::MissingTime);
        }
        let time = serde_fmt::parse_datetime(raw)
            .ok_or_else(|| ValidationError::InvalidTime(raw.to_string()))?;

        Ok(ReminderFields {
            message: self.message.clone(),
            time,
        })
    }
}

/// Validated reminder fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReminderFields {
    /// Non-blank message
    pub message: String,
    /// Reminder time
    pub time: NaiveDateTime,
}
