//! The deterministic offline runner.

use std::fmt;

use tracing::{debug, info};

use lift_core::{CarConfig, Floor, Tick, TrafficRng};
use lift_dispatch::{CarObserver, DirectionState};
use lift_orders::{OrderKind, OrderRequest, RequestQueue};

use crate::{Controller, SimResult};

// ── Traffic ───────────────────────────────────────────────────────────────────

/// Parameters for random passenger traffic.
#[derive(Clone, Debug, PartialEq)]
pub struct TrafficConfig {
    pub seed:             u64,
    /// Chance of a new request on any one tick, in `[0, 1]`.
    pub call_probability: f64,
    /// Stop generating after this many requests.
    pub max_calls:        u32,
}

/// Seeded request generator.
pub(crate) struct Traffic {
    rng:         TrafficRng,
    probability: f64,
    remaining:   u32,
}

impl Traffic {
    pub(crate) fn new(config: &TrafficConfig) -> Self {
        Self {
            rng:         TrafficRng::new(config.seed),
            probability: config.call_probability,
            remaining:   config.max_calls,
        }
    }

    fn exhausted(&self) -> bool {
        self.remaining == 0
    }

    /// Maybe produce one request on a building with `total_floors` floors.
    ///
    /// Hall calls never point out of the building: a DOWN call on the ground
    /// floor becomes UP, an UP call on the top floor becomes DOWN.
    fn draw(&mut self, total_floors: u32) -> Option<OrderRequest> {
        if self.remaining == 0 || !self.rng.gen_bool(self.probability) {
            return None;
        }
        self.remaining -= 1;
        let top = total_floors as i32;
        let floor = self.rng.gen_range(1..=top);
        let kind = match *self.rng.choose(&OrderKind::ALL)? {
            OrderKind::Down if floor == 1 => OrderKind::Up,
            OrderKind::Up if floor == top => OrderKind::Down,
            kind => kind,
        };
        Some(OrderRequest::new(floor, kind))
    }
}

// ── SimSummary ────────────────────────────────────────────────────────────────

/// Outcome of an offline run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SimSummary {
    pub final_tick:  Tick,
    pub final_floor: Floor,
    pub final_state: DirectionState,
    /// Requests that reached the registry (including duplicates).
    pub accepted:    usize,
    /// Requests refused at the range check.
    pub rejected:    usize,
    /// Orders still pending at the end.
    pub pending:     usize,
    /// `false` if the tick limit was hit before the car came to rest.
    pub completed:   bool,
}

impl fmt::Display for SimSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} at floor {} ({}): {} accepted, {} rejected, {} pending{}",
            self.final_tick,
            self.final_floor,
            self.final_state,
            self.accepted,
            self.rejected,
            self.pending,
            if self.completed { "" } else { ", tick limit reached" },
        )
    }
}

// ── Sim ───────────────────────────────────────────────────────────────────────

/// Offline runner: feeds scripted and random requests to a [`Controller`]
/// and ticks it as fast as possible.
///
/// Each tick:
///
/// 1. **Script**: requests stamped at or before the current tick are
///    submitted; rejected ones are counted and logged.
/// 2. **Traffic**: with the configured probability, one random request.
/// 3. **Step**: the clock advances one tick and the car performs whatever
///    came due.
///
/// Create via [`SimBuilder`][crate::SimBuilder].
pub struct Sim<O> {
    pub(crate) controller: Controller<O>,
    pub(crate) script:     RequestQueue,
    pub(crate) traffic:    Option<Traffic>,
    pub(crate) config:     CarConfig,
    pub(crate) accepted:   usize,
    pub(crate) rejected:   usize,
}

impl<O: CarObserver> Sim<O> {
    /// The controller being driven.  Clones share the car.
    pub fn controller(&self) -> &Controller<O> {
        &self.controller
    }

    /// Run exactly `n` ticks.
    pub fn run_ticks(&mut self, n: u64) -> SimResult<SimSummary> {
        for _ in 0..n {
            self.step();
        }
        Ok(self.summary(true))
    }

    /// Run until the script and traffic are exhausted and the car has
    /// nothing left to do, or until `max_ticks` ticks have passed.
    pub fn run_until_idle(&mut self, max_ticks: u64) -> SimResult<SimSummary> {
        let start = self.controller.now();
        let mut completed = false;
        while self.controller.now().since(start) < max_ticks {
            if self.finished() {
                completed = true;
                break;
            }
            self.step();
        }
        // The last step may have been the one that finished.
        completed |= self.finished();

        let end = self.controller.finish();
        info!(%end, completed, "simulation ended");
        Ok(self.summary(completed))
    }

    /// Consume the sim and return its observer.
    pub fn into_observer(self) -> Option<O> {
        self.controller.into_observer().ok()
    }

    // ── Internals ─────────────────────────────────────────────────────────

    fn finished(&self) -> bool {
        self.script.is_empty()
            && self.traffic.as_ref().is_none_or(Traffic::exhausted)
            && self.controller.is_quiescent()
    }

    fn step(&mut self) {
        let now = self.controller.now();

        for request in self.script.drain_through(now) {
            self.submit(request);
        }
        let generated = self
            .traffic
            .as_mut()
            .and_then(|traffic| traffic.draw(self.config.total_floors));
        if let Some(request) = generated {
            debug!(%now, floor = request.floor, kind = %request.kind, "random request");
            self.submit(request);
        }

        self.controller.tick();
    }

    fn submit(&mut self, request: OrderRequest) {
        match self.controller.add_order(request.floor, request.kind) {
            Ok(_) => self.accepted += 1,
            Err(_) => self.rejected += 1,
        }
    }

    fn summary(&self, completed: bool) -> SimSummary {
        let snapshot = self.controller.snapshot();
        SimSummary {
            final_tick:  self.controller.now(),
            final_floor: snapshot.floor,
            final_state: snapshot.state,
            accepted:    self.accepted,
            rejected:    self.rejected,
            pending:     snapshot.pending,
            completed,
        }
    }
}
