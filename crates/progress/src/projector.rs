//! Chart projection - display series derived from tracker state.
//!
//! Nothing here is cached. Every call recomputes from the current data.

use serde::Serialize;
use studytrack_core::{ProgressLedger, Task};

/// Completed vs. pending task counts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompletionSummary {
    /// Tasks marked completed
    pub completed_count: usize,

    /// Tasks not yet completed
    pub pending_count: usize,
}

impl CompletionSummary {
    /// Total tasks counted.
    pub fn total(&self) -> usize {
        self.completed_count + self.pending_count
    }
}

/// One point of the daily completion line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DailyPoint {
    /// Calendar date, `YYYY-MM-DD`
    pub date: String,

    /// Completions recorded that day
    pub count: u32,
}

/// The single row fed to the completed/pending bar chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BarRow {
    /// Row label
    pub name: &'static str,

    /// Completed bar
    pub completed: usize,

    /// Pending bar
    pub pending: usize,
}

/// Stateless projector from tracker data to chart series.
#[derive(Debug, Clone, Copy, Default)]
pub struct ChartProjector;

impl ChartProjector {
    /// Label of the bar chart row.
    pub const BAR_LABEL: &'static str = "Tasks";

    /// Count tasks by completion flag.
    pub fn completion_summary(&self, tasks: &[Task]) -> CompletionSummary {
        let completed_count = tasks.iter().filter(|t| t.completed).count();
        CompletionSummary {
            completed_count,
            pending_count: tasks.len() - completed_count,
        }
    }

    /// Ledger entries as a date-ordered series.
    pub fn daily_series(&self, ledger: &ProgressLedger) -> Vec<DailyPoint> {
        ledger
            .snapshot()
            .into_iter()
            .map(|(date, count)| DailyPoint { date, count })
            .collect()
    }

    /// The summary shaped as the one-row bar chart input.
    pub fn bar_rows(&self, tasks: &[Task]) -> Vec<BarRow> {
        let summary = self.completion_summary(tasks);
        vec![BarRow {
            name: Self::BAR_LABEL,
            completed: summary.completed_count,
            pending: summary.pending_count,
        }]
    }
}
