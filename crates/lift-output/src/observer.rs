//! `EventLogObserver<W>`: bridges `CarObserver` to an `OutputWriter`.

use lift_core::{CarConfig, Floor, Tick};
use lift_dispatch::{CarObserver, CarSnapshot, DirectionState};
use lift_orders::OrderKind;

use crate::row::{CarEventRow, EventKind, TickSummaryRow};
use crate::writer::OutputWriter;
use crate::{OutputError, OutputResult};

/// A [`CarObserver`] that records every car event and a periodic state
/// summary to any [`OutputWriter`].
///
/// Errors from the writer are stored internally because observer hooks have
/// no return value.  After the run, check with [`take_error`][Self::take_error].
pub struct EventLogObserver<W: OutputWriter> {
    writer:           W,
    tick_millis:      u64,
    summary_interval: u64,
    last_error:       Option<OutputError>,
}

impl<W: OutputWriter> EventLogObserver<W> {
    /// Create an observer backed by `writer`.  Summaries default to one per
    /// simulated second.
    pub fn new(writer: W, config: &CarConfig) -> Self {
        let clock = config.make_clock();
        Self {
            writer,
            tick_millis:      clock.tick_millis as u64,
            summary_interval: clock.ticks_for_secs(1).max(1),
            last_error:       None,
        }
    }

    /// Write a summary row every `ticks` ticks; zero disables summaries.
    pub fn with_summary_interval(mut self, ticks: u64) -> Self {
        self.summary_interval = ticks;
        self
    }

    /// Take the stored write error, if any.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Unwrap the inner writer (e.g. to inspect files after the run).
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn elapsed_ms(&self, tick: Tick) -> u64 {
        tick.0 * self.tick_millis
    }

    fn event(&mut self, tick: Tick, event: EventKind, floor: i32, detail: String) {
        let row = CarEventRow {
            tick: tick.0,
            elapsed_ms: self.elapsed_ms(tick),
            event,
            floor,
            detail,
        };
        let result = self.writer.write_events(std::slice::from_ref(&row));
        self.store_err(result);
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> CarObserver for EventLogObserver<W> {
    fn on_state_change(&mut self, tick: Tick, floor: Floor, from: DirectionState, to: DirectionState) {
        self.event(tick, EventKind::StateChange, floor.0, format!("{from}->{to}"));
    }

    fn on_floor(&mut self, tick: Tick, floor: Floor) {
        self.event(tick, EventKind::Arrival, floor.0, String::new());
    }

    fn on_doors_open(&mut self, tick: Tick, floor: Floor, served: &[OrderKind]) {
        let detail = served.iter().map(OrderKind::to_string).collect::<Vec<_>>().join("+");
        self.event(tick, EventKind::DoorsOpen, floor.0, detail);
    }

    fn on_order_added(&mut self, tick: Tick, floor: Floor, kind: OrderKind, added: bool) {
        let event = if added { EventKind::OrderAdded } else { EventKind::OrderDuplicate };
        self.event(tick, event, floor.0, kind.to_string());
    }

    fn on_order_rejected(&mut self, tick: Tick, floor: i32, kind: OrderKind) {
        self.event(tick, EventKind::OrderRejected, floor, kind.to_string());
    }

    fn on_tick_end(&mut self, tick: Tick, snapshot: &CarSnapshot) {
        if self.summary_interval == 0 || !tick.0.is_multiple_of(self.summary_interval) {
            return;
        }
        let row = TickSummaryRow {
            tick:       tick.0,
            elapsed_ms: self.elapsed_ms(tick),
            floor:      snapshot.floor.0,
            state:      snapshot.state.to_string(),
            motion:     snapshot.motion.to_string(),
            pending:    snapshot.pending as u64,
        };
        let result = self.writer.write_tick_summary(&row);
        self.store_err(result);
    }

    fn on_sim_end(&mut self, _final_tick: Tick) {
        let result = self.writer.finish();
        self.store_err(result);
    }
}
