//! The shared car handle used by request handlers and the periodic driver.

use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tracing::warn;

use lift_core::{CarConfig, Floor, LiftResult, SimClock, Tick};
use lift_dispatch::{Car, CarObserver, CarSnapshot, DirectionState, NoopObserver};
use lift_orders::OrderKind;

use crate::{reply, SimResult};

struct Inner<O> {
    car:      Car,
    clock:    SimClock,
    observer: O,
}

/// A cloneable handle to one car, its clock, and its observer.
///
/// Every operation takes the lock exactly once and releases it before
/// returning; nothing blocks while holding it.  Clones share the same car.
///
/// A poisoned lock is recovered rather than propagated: every critical
/// section leaves the car in a consistent state before it can panic.
pub struct Controller<O = NoopObserver> {
    inner: Arc<Mutex<Inner<O>>>,
}

impl<O> Clone for Controller<O> {
    fn clone(&self) -> Self {
        Self { inner: Arc::clone(&self.inner) }
    }
}

impl<O> fmt::Debug for Controller<O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Controller").finish_non_exhaustive()
    }
}

impl Controller<NoopObserver> {
    /// A controller for a fresh car with no observer.
    pub fn new(config: CarConfig) -> SimResult<Self> {
        Self::observed(config, NoopObserver)
    }
}

impl<O: CarObserver> Controller<O> {
    /// A controller for a fresh car reporting to `observer`.
    pub fn observed(config: CarConfig, observer: O) -> SimResult<Self> {
        Ok(Self::from_car(Car::new(config)?, observer))
    }

    /// Wrap an already configured car.  The clock starts at tick 0.
    pub fn from_car(car: Car, observer: O) -> Self {
        let clock = car.config().make_clock();
        Self {
            inner: Arc::new(Mutex::new(Inner { car, clock, observer })),
        }
    }

    fn lock(&self) -> MutexGuard<'_, Inner<O>> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    // ── Requests ──────────────────────────────────────────────────────────

    /// Register an order.  Returns whether it was new.
    ///
    /// Out-of-range floors fail with `LiftError::InvalidFloor` and leave the
    /// car untouched.
    pub fn add_order(&self, floor: i32, kind: OrderKind) -> LiftResult<bool> {
        let mut guard = self.lock();
        let Inner { car, clock, observer } = &mut *guard;
        let now = clock.current_tick;
        match car.add_order(floor, kind) {
            Ok(added) => {
                observer.on_order_added(now, Floor(floor), kind, added);
                Ok(added)
            }
            Err(e) => {
                warn!(floor, %kind, "request rejected: {e}");
                observer.on_order_rejected(now, floor, kind);
                Err(e)
            }
        }
    }

    /// Register an order and describe it the way a button panel would.
    ///
    /// Car calls are answered with the arrival estimate, computed under the
    /// same lock as the insertion.
    pub fn request(&self, floor: i32, kind: OrderKind) -> LiftResult<String> {
        let mut guard = self.lock();
        let Inner { car, clock, observer } = &mut *guard;
        let now = clock.current_tick;
        let added = match car.add_order(floor, kind) {
            Ok(added) => added,
            Err(e) => {
                warn!(floor, %kind, "request rejected: {e}");
                observer.on_order_rejected(now, floor, kind);
                return Err(e);
            }
        };
        observer.on_order_added(now, Floor(floor), kind, added);
        if kind.is_hall_call() {
            Ok(reply::button_pushed(kind, Floor(floor)))
        } else {
            Ok(reply::going_to(Floor(floor), car.estimated_time(floor)?))
        }
    }

    /// Halt the car and discard every pending order.  Idempotent.
    pub fn emergency_stop(&self) {
        let mut guard = self.lock();
        let Inner { car, clock, observer } = &mut *guard;
        car.emergency_stop(clock.current_tick, observer);
    }

    /// Clear an emergency stop.  Returns `false` if the car was not stopped.
    pub fn reset(&self) -> bool {
        let mut guard = self.lock();
        let Inner { car, clock, observer } = &mut *guard;
        car.reset(clock.current_tick, observer)
    }

    // ── Queries ───────────────────────────────────────────────────────────

    pub fn state(&self) -> DirectionState {
        self.lock().car.state()
    }

    pub fn current_floor(&self) -> Floor {
        self.lock().car.floor()
    }

    pub fn snapshot(&self) -> CarSnapshot {
        self.lock().car.snapshot()
    }

    /// Seconds until the car reaches `floor`.
    pub fn estimated_time(&self, floor: i32) -> LiftResult<u64> {
        self.lock().car.estimated_time(floor)
    }

    /// `true` when nothing is pending and the car is not in a sweep.
    pub fn is_settled(&self) -> bool {
        self.lock().car.is_settled()
    }

    /// `true` when ticking would change nothing.
    pub fn is_quiescent(&self) -> bool {
        self.lock().car.is_quiescent()
    }

    pub fn now(&self) -> Tick {
        self.lock().clock.current_tick
    }

    pub fn config(&self) -> CarConfig {
        self.lock().car.config().clone()
    }

    /// Real-time length of one tick.
    pub fn tick_duration(&self) -> std::time::Duration {
        self.lock().clock.tick_duration()
    }

    // ── Clock ─────────────────────────────────────────────────────────────

    /// Advance the clock one tick and perform whatever the car has due.
    pub fn tick(&self) -> Tick {
        let mut guard = self.lock();
        let Inner { car, clock, observer } = &mut *guard;
        let now = clock.advance();
        car.advance(now, observer);
        observer.on_tick_end(now, &car.snapshot());
        now
    }

    // ── Observer access ───────────────────────────────────────────────────

    /// Run `f` against the observer under the lock.
    pub fn inspect_observer<R>(&self, f: impl FnOnce(&mut O) -> R) -> R {
        f(&mut self.lock().observer)
    }

    /// Fire the end-of-run hook at the current tick.
    pub(crate) fn finish(&self) -> Tick {
        let mut guard = self.lock();
        let now = guard.clock.current_tick;
        guard.observer.on_sim_end(now);
        now
    }

    /// Recover the observer once this is the last handle.
    ///
    /// Returns `self` unchanged if other clones are still alive.
    pub fn into_observer(self) -> Result<O, Self> {
        match Arc::try_unwrap(self.inner) {
            Ok(mutex) => Ok(mutex.into_inner().unwrap_or_else(PoisonError::into_inner).observer),
            Err(inner) => Err(Self { inner }),
        }
    }
}
