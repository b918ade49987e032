//! The `OutputWriter` trait implemented by backend writers.

use crate::{CarEventRow, OutputResult, TickSummaryRow};

/// A sink for car events and periodic summaries.
///
/// Errors are returned here but swallowed by the observer, which keeps the
/// first one for [`EventLogObserver::take_error`][crate::EventLogObserver::take_error].
pub trait OutputWriter {
    /// Write a batch of car events.
    fn write_events(&mut self, rows: &[CarEventRow]) -> OutputResult<()>;

    /// Write one tick summary row.
    fn write_tick_summary(&mut self, row: &TickSummaryRow) -> OutputResult<()>;

    /// Flush all underlying file handles.  Idempotent.
    fn finish(&mut self) -> OutputResult<()>;
}
