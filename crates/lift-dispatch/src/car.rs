//! The car: position, dispatch state, pending orders, and the sweep stepper.

use std::fmt;

use tracing::{debug, info, warn};

use lift_core::{CarConfig, Floor, LiftResult, Tick};
use lift_orders::{OrderKind, OrderRegistry};

use crate::estimator::{self, Estimate};
use crate::{policy, CarObserver, DirectionState, Heading};

// ── Motion ────────────────────────────────────────────────────────────────────

/// Where the car is inside a sweep.
///
/// The car uses a teleport-at-arrival model: while `Travelling` it still
/// reports the floor it left, and `floor` changes at `arrives_at`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Motion {
    /// Stationary with the doors closed.
    #[default]
    Parked,
    /// Between floors, heading `heading`.
    Travelling { heading: Heading, arrives_at: Tick },
    /// Stopped at a floor with the doors open.
    DoorsOpen { closes_at: Tick },
}

impl fmt::Display for Motion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Motion::Parked => f.write_str("parked"),
            Motion::Travelling { heading, arrives_at } => {
                write!(f, "travelling {heading} until {arrives_at}")
            }
            Motion::DoorsOpen { closes_at } => write!(f, "doors open until {closes_at}"),
        }
    }
}

// ── CarSnapshot ───────────────────────────────────────────────────────────────

/// A copy of the car's observable state, taken under one lock.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CarSnapshot {
    pub floor:   Floor,
    pub state:   DirectionState,
    pub motion:  Motion,
    /// Pending orders across all three sets.
    pub pending: usize,
}

// ── Car ───────────────────────────────────────────────────────────────────────

/// One elevator car.
///
/// `Car` is plain data plus the stepping logic; it knows nothing about
/// threads or wall-clock time.  Whoever owns the clock calls
/// [`advance`][Car::advance] with the current tick, and the car performs every
/// travel step and door cycle whose deadline has passed.
///
/// # Sweep lifecycle
///
/// ```text
/// Parked, IDLE ──should_move──▶ pick heading, check start floor
///        ▲                                   │
///        │ sweep finished                    ▼
///   settle_or_depart ◀── doors close ◀── DoorsOpen ◀── stop warranted
///        │                                   ▲
///        └──▶ Travelling ──arrival──▶ check floor
/// ```
///
/// An emergency stop parks the car at the next event: open doors are
/// abandoned at once, an in-flight travel step finishes first.
#[derive(Clone, Debug)]
pub struct Car {
    config:       CarConfig,
    floor:        Floor,
    state:        DirectionState,
    orders:       OrderRegistry,
    motion:       Motion,
    travel_ticks: u64,
    door_ticks:   u64,
}

impl Car {
    /// A car parked on the ground floor, idle, with no orders.
    pub fn new(config: CarConfig) -> LiftResult<Self> {
        config.validate()?;
        let clock = config.make_clock();
        Ok(Self {
            travel_ticks: clock.ticks_for_secs(config.floor_travel_secs),
            door_ticks:   clock.ticks_for_secs(config.door_open_secs),
            config,
            floor:        Floor::GROUND,
            state:        DirectionState::Idle,
            orders:       OrderRegistry::new(),
            motion:       Motion::Parked,
        })
    }

    // ── Builder-style setup ───────────────────────────────────────────────

    /// Place the car at `floor`.  No range check: tests and replays may
    /// start anywhere.
    pub fn placed_at(mut self, floor: Floor) -> Self {
        self.floor = floor;
        self
    }

    /// Start in `state`.  A moving state resumes its sweep on the next
    /// `advance`, beginning with the current floor.
    pub fn with_state(mut self, state: DirectionState) -> Self {
        self.state = state;
        self
    }

    /// Replace the pending orders wholesale.
    pub fn with_orders(mut self, orders: OrderRegistry) -> Self {
        self.orders = orders;
        self
    }

    // ── Queries ───────────────────────────────────────────────────────────

    #[inline]
    pub fn config(&self) -> &CarConfig {
        &self.config
    }

    #[inline]
    pub fn floor(&self) -> Floor {
        self.floor
    }

    #[inline]
    pub fn state(&self) -> DirectionState {
        self.state
    }

    #[inline]
    pub fn orders(&self) -> &OrderRegistry {
        &self.orders
    }

    #[inline]
    pub fn motion(&self) -> Motion {
        self.motion
    }

    /// `true` if the car is idle and some pending order is on another floor.
    pub fn should_move(&self) -> bool {
        self.pick_heading().is_some()
    }

    /// `true` when nothing is pending and no sweep is in progress.
    pub fn is_settled(&self) -> bool {
        self.orders.is_empty()
            && self.motion == Motion::Parked
            && !self.state.is_moving()
    }

    /// `true` when the next `advance` would do nothing: no sweep in
    /// progress and none about to start.  Orders at the current floor may
    /// still be pending.
    pub fn is_quiescent(&self) -> bool {
        self.motion == Motion::Parked && !self.state.is_moving() && !self.should_move()
    }

    pub fn snapshot(&self) -> CarSnapshot {
        CarSnapshot {
            floor:   self.floor,
            state:   self.state,
            motion:  self.motion,
            pending: self.orders.len(),
        }
    }

    /// Seconds until the car would reach floor `raw`.
    pub fn estimated_time(&self, raw: i32) -> LiftResult<u64> {
        estimator::estimate(&self.config, self.floor, self.state, &self.orders, raw)
    }

    /// Floors and stops behind [`estimated_time`][Car::estimated_time].
    pub fn estimate_breakdown(&self, raw: i32) -> LiftResult<Estimate> {
        estimator::estimate_breakdown(&self.config, self.floor, self.state, &self.orders, raw)
    }

    // ── Commands ──────────────────────────────────────────────────────────

    /// Register an order.
    ///
    /// Fails with `LiftError::InvalidFloor` if `raw` is outside the
    /// configured range, leaving the car untouched.  Otherwise returns
    /// whether the order was new.
    pub fn add_order(&mut self, raw: i32, kind: OrderKind) -> LiftResult<bool> {
        let floor = self.config.floor(raw)?;
        let added = self.orders.add(kind, floor);
        if added {
            info!(%floor, %kind, "order added");
        }
        Ok(added)
    }

    /// Halt the car and drop every pending order.  Idempotent.
    pub fn emergency_stop<O: CarObserver>(&mut self, at: Tick, observer: &mut O) {
        self.orders.clear_all();
        if self.state != DirectionState::EmergencyStopped {
            warn!(floor = %self.floor, "Emergency break activated");
            self.set_state(at, DirectionState::EmergencyStopped, observer);
        }
        if let Motion::DoorsOpen { .. } = self.motion {
            self.motion = Motion::Parked;
        }
    }

    /// Leave the emergency stop and return to `IDLE`.
    ///
    /// Orders accepted while stopped are discarded.  Returns `false` (and
    /// does nothing) if the car was not stopped.
    pub fn reset<O: CarObserver>(&mut self, at: Tick, observer: &mut O) -> bool {
        if self.state != DirectionState::EmergencyStopped {
            return false;
        }
        self.orders.clear_all();
        info!(floor = %self.floor, "emergency stop cleared");
        self.set_state(at, DirectionState::Idle, observer);
        true
    }

    // ── Stepping ──────────────────────────────────────────────────────────

    /// Perform everything due at or before `now`.
    ///
    /// Deadlines chain from the event that scheduled them, not from `now`,
    /// so a late call catches up without drifting.  A sweep that ends here
    /// does not start the next one; the next call does.
    pub fn advance<O: CarObserver>(&mut self, now: Tick, observer: &mut O) {
        let mut sweep_ended = false;
        loop {
            match self.motion {
                Motion::Parked => {
                    if sweep_ended {
                        return;
                    }
                    let heading = match self.state {
                        DirectionState::EmergencyStopped => return,
                        DirectionState::Idle => match self.pick_heading() {
                            Some(heading) => {
                                self.set_state(now, heading.into(), observer);
                                heading
                            }
                            None => return,
                        },
                        DirectionState::MovingUp   => Heading::Up,
                        DirectionState::MovingDown => Heading::Down,
                    };
                    sweep_ended = self.serve_floor(heading, now, observer);
                }

                Motion::Travelling { heading, arrives_at } => {
                    if now < arrives_at {
                        return;
                    }
                    self.floor = heading.step(self.floor);
                    debug!(floor = %self.floor, "Current floor: {}", self.floor);
                    observer.on_floor(arrives_at, self.floor);
                    sweep_ended = match self.state.heading() {
                        Some(heading) => self.serve_floor(heading, arrives_at, observer),
                        None => self.park(),
                    };
                }

                Motion::DoorsOpen { closes_at } => {
                    if now < closes_at {
                        return;
                    }
                    sweep_ended = match self.state.heading() {
                        Some(heading) => self.settle_or_depart(heading, closes_at, observer),
                        None => self.park(),
                    };
                }
            }
        }
    }

    // ── Internals ─────────────────────────────────────────────────────────

    /// Heading towards the first pending floor other than the current one.
    fn pick_heading(&self) -> Option<Heading> {
        if self.state != DirectionState::Idle {
            return None;
        }
        self.orders
            .all_pending_floors()
            .find_map(|floor| Heading::towards(self.floor, floor))
    }

    /// Apply the stop policy at the current floor.  Returns `true` if the
    /// sweep ended here.
    fn serve_floor<O: CarObserver>(&mut self, heading: Heading, at: Tick, observer: &mut O) -> bool {
        let served = policy::orders_served_at(&self.orders, heading, self.floor);
        if served.is_empty() {
            return self.settle_or_depart(heading, at, observer);
        }
        for &kind in &served {
            self.orders.remove(kind, self.floor);
        }
        info!(floor = %self.floor, ?served, "opening door");
        observer.on_doors_open(at, self.floor, &served);
        self.motion = Motion::DoorsOpen { closes_at: at + self.door_ticks };
        false
    }

    /// End the sweep if nothing lies ahead, otherwise depart for the next
    /// floor.  Returns `true` if the sweep ended.
    fn settle_or_depart<O: CarObserver>(&mut self, heading: Heading, at: Tick, observer: &mut O) -> bool {
        if policy::sweep_finished(&self.orders, heading, self.floor) {
            self.motion = Motion::Parked;
            self.set_state(at, DirectionState::Idle, observer);
            true
        } else {
            self.motion = Motion::Travelling { heading, arrives_at: at + self.travel_ticks };
            false
        }
    }

    /// Stop without a state change; used when the sweep was cut short.
    fn park(&mut self) -> bool {
        self.motion = Motion::Parked;
        true
    }

    fn set_state<O: CarObserver>(&mut self, at: Tick, to: DirectionState, observer: &mut O) {
        let from = self.state;
        if from == to {
            return;
        }
        self.state = to;
        info!(%from, %to, "Current state: {to}");
        observer.on_state_change(at, self.floor, from, to);
    }
}
