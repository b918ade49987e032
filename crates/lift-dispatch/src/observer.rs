//! Observer trait for car events and data collection.

use lift_core::{Floor, Tick};
use lift_orders::OrderKind;

use crate::{CarSnapshot, DirectionState};

/// Callbacks invoked as the car moves and as requests reach it.
///
/// [`Car::advance`][crate::Car::advance] fires the movement hooks; the
/// controller in `lift-sim` fires the request and tick hooks.  All methods
/// have default no-op implementations so implementors only override what
/// they care about.
///
/// # Example: door counter
///
/// ```rust,ignore
/// #[derive(Default)]
/// struct DoorCounter { stops: usize }
///
/// impl CarObserver for DoorCounter {
///     fn on_doors_open(&mut self, _tick: Tick, _floor: Floor, _served: &[OrderKind]) {
///         self.stops += 1;
///     }
/// }
/// ```
pub trait CarObserver {
    /// The dispatch state changed from `from` to `to` with the car at `floor`.
    fn on_state_change(&mut self, _tick: Tick, _floor: Floor, _from: DirectionState, _to: DirectionState) {}

    /// The car arrived at `floor`.  Fired once per floor travelled.
    fn on_floor(&mut self, _tick: Tick, _floor: Floor) {}

    /// The doors opened at `floor`, satisfying the orders in `served`.
    fn on_doors_open(&mut self, _tick: Tick, _floor: Floor, _served: &[OrderKind]) {}

    /// A request passed the range check and reached the registry.
    ///
    /// `added` is `false` when the same order was already pending.
    fn on_order_added(&mut self, _tick: Tick, _floor: Floor, _kind: OrderKind, _added: bool) {}

    /// A request was rejected at the boundary.
    fn on_order_rejected(&mut self, _tick: Tick, _floor: i32, _kind: OrderKind) {}

    /// Called after every clock tick with the car's state at the end of it.
    fn on_tick_end(&mut self, _tick: Tick, _snapshot: &CarSnapshot) {}

    /// Called once when an offline run finishes.
    fn on_sim_end(&mut self, _final_tick: Tick) {}
}

/// A [`CarObserver`] that does nothing.
#[derive(Copy, Clone, Debug, Default)]
pub struct NoopObserver;

impl CarObserver for NoopObserver {}
