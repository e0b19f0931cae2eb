//! Progress projection.
//!
//! Turns tracker state into the series the dashboard charts display.

#![warn(missing_docs)]

pub mod projector;

pub use projector::{BarRow, ChartProjector, CompletionSummary, DailyPoint};
