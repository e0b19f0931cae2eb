//! Per-day completion counter.
//!
//! Entries only ever grow. Un-completing a task or deleting it leaves the
//! recorded counts untouched.

use std::collections::BTreeMap;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use crate::serde_fmt;

/// Mapping from calendar date (`YYYY-MM-DD`) to tasks completed that day.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProgressLedger {
    entries: BTreeMap<String, u32>,
}

impl ProgressLedger {
    /// Create an empty ledger.
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one completion on `date`, returning the new count for that day.
    pub fn record_completion(&mut self, date: NaiveDate) -> u32 {
        let count = self.entries.entry(serde_fmt::format_date(date)).or_insert(0);
        *count = count.saturating_add(1);
        *count
    }

    /// Completions recorded on `date`.
    pub fn count(&self, date: NaiveDate) -> u32 {
        self.entries
            .get(&serde_fmt::format_date(date))
            .copied()
            .unwrap_or(0)
    }

    /// All entries, ascending by date string.
    pub fn snapshot(&self) -> Vec<(String, u32)> {
        self.entries.iter().map(|(d, c)| (d.clone(), *c)).collect()
    }

    /// Iterate entries in date order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> {
        self.entries.iter().map(|(d, c)| (d.as_str(), *c))
    }

    /// Sum of all counts.
    pub fn total(&self) -> u64 {
        self.entries.values().map(|c| u64::from(*c)).sum()
    }

    /// Number of days with at least one entry.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when nothing has been recorded.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 5, d).unwrap()
    }

    #[test]
    fn test_record_creates_then_increments() {
        let mut ledger = ProgressLedger::new();
        assert_eq!(ledger.count(day(1)), 0);
        assert_eq!(ledger.record_completion(day(1)), 1);
        assert_eq!(ledger.record_completion(day(1)), 2);
        assert_eq!(ledger.count(day(1)), 2);
        assert_eq!(ledger.len(), 1);
    }

    #[test]
    fn test_snapshot_sorted_by_date() {
        let mut ledger = ProgressLedger::new();
        ledger.record_completion(day(20));
        ledger.record_completion(day(3));
        ledger.record_completion(day(11));
        ledger.record_completion(day(3));

        let snapshot = ledger.snapshot();
        let dates: Vec<_> = snapshot.iter().map(|(d, _)| d.as_str()).collect();
        assert_eq!(dates, vec!["2024-05-03", "2024-05-11", "2024-05-20"]);
        assert_eq!(snapshot[0].1, 2);
        assert_eq!(ledger.total(), 4);
    }

    #[test]
    fn test_loads_flat_mapping() {
        let ledger: ProgressLedger =
            serde_json::from_str(r#"{"2024-05-02": 3, "2024-04-30": 1}"#).unwrap();
        assert_eq!(
            ledger.snapshot(),
            vec![("2024-04-30".to_string(), 1), ("2024-05-02".to_string(), 3)]
        );
    }
}
