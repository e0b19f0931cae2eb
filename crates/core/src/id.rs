//! Unique identifiers for tracker records.
//!
//! Ids are plain integers derived from wall-clock milliseconds, so blobs
//! written by earlier versions of the dashboard load unchanged.

use serde::{Deserialize, Serialize};

/// Unique identifier for a Task
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(u64);

impl TaskId {
    /// Wrap a raw id value.
    pub fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// Raw integer value.
    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for TaskId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

impl std::str::FromStr for TaskId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.trim().parse()?))
    }
}

/// Unique identifier for a Reminder
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReminderId(u64);

impl ReminderId {
    /// Wrap a raw id value.
    pub fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// Raw integer value.
    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for ReminderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

impl std::str::FromStr for ReminderId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.trim().parse()?))
    }
}

/// Issues strictly increasing, timestamp-derived ids.
///
/// Tasks and reminders share one generator, so an id is never handed out
/// twice even when two records are created inside the same millisecond or
/// the wall clock steps backwards.
#[derive(Debug, Clone, Default)]
pub struct IdGenerator {
    last: u64,
}

impl IdGenerator {
    /// Create a generator that will only issue ids above `last`.
    pub fn seeded(last: u64) -> Self {
        Self { last }
    }

    /// Record an id that already exists (e.g. loaded from storage).
    pub fn observe(&mut self, id: u64) {
        self.last = self.last.max(id);
    }

    /// Largest id issued or observed so far.
    pub fn last(&self) -> u64 {
        self.last
    }

    /// Issue the next id for the given wall-clock time.
    pub fn next(&mut self, now_millis: u64) -> u64 {
        let id = now_millis.max(self.last.saturating_add(1));
        self.last = id;
        id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_follow_clock() {
        let mut ids = IdGenerator::default();
        assert_eq!(ids.next(1_000), 1_000);
        assert_eq!(ids.next(2_000), 2_000);
    }

    #[test]
    fn test_ids_never_repeat_within_same_millisecond() {
        let mut ids = IdGenerator::default();
        let a = ids.next(5_000);
        let b = ids.next(5_000);
        let c = ids.next(4_000);
        assert_eq!(a, 5_000);
        assert_eq!(b, 5_001);
        assert_eq!(c, 5_002);
    }

    #[test]
    fn test_seeded_generator_skips_loaded_ids() {
        let mut ids = IdGenerator::seeded(10);
        ids.observe(7);
        assert_eq!(ids.last(), 10);
        assert_eq!(ids.next(3), 11);
    }

    #[test]
    fn test_task_id_parse_and_display() {
        let id: TaskId = " 1714550400000 ".parse().unwrap();
        assert_eq!(id.as_u64(), 1_714_550_400_000);
        assert_eq!(id.to_string(), "1714550400000");
        assert!("abc".parse::<ReminderId>().is_err());
    }
}
