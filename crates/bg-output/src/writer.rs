//! The `OutputWriter` trait implemented by all backend writers.

use crate::{BurglaryEventRow, OutputResult, TickSummaryRow};

/// Trait implemented by the CSV and SQLite writers.
///
/// Errors never reach the observer callbacks directly — they are stored by
/// [`SimOutputObserver`][crate::SimOutputObserver] and retrieved with its
/// `take_error` after the run.
pub trait OutputWriter {
    /// Write a batch of burglary events (one tick's worth).
    fn write_burglaries(&mut self, rows: &[BurglaryEventRow]) -> OutputResult<()>;

    /// Write one tick summary row.
    fn write_tick_summary(&mut self, row: &TickSummaryRow) -> OutputResult<()>;

    /// Flush and close all underlying file handles.
    ///
    /// Idempotent — safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}
