//! `lift-dispatch`: the single-car dispatch core.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                  |
//! |---------------|-----------------------------------------------------------|
//! | [`car`]       | `Car`, `Motion`, `CarSnapshot`: the sweep state machine   |
//! | [`direction`] | `DirectionState`, `Heading`                               |
//! | [`policy`]    | Stop rules shared by the stepper and the estimator        |
//! | [`estimator`] | `estimate`, `estimate_breakdown`, `Estimate`              |
//! | [`observer`]  | `CarObserver`, `NoopObserver`                             |
//!
//! # Sweep model
//!
//! ```text
//! IDLE ──pending order elsewhere──▶ MOVING_UP / MOVING_DOWN
//!   ▲                                        │ one floor per floor_travel_secs,
//!   └──── nothing left ahead of the car ◀────┘ doors open door_open_secs per stop
//!
//! any state ──emergency_stop──▶ EMERGENCY_STOPPED ──reset──▶ IDLE
//! ```
//!
//! Nothing here blocks or sleeps.  Travel and door dwell are deadlines in
//! [`Tick`][lift_core::Tick]s, and [`Car::advance`] performs whatever has
//! come due.

pub mod car;
pub mod direction;
pub mod estimator;
pub mod observer;
pub mod policy;

#[cfg(test)]
mod tests;

pub use car::{Car, CarSnapshot, Motion};
pub use direction::{DirectionState, Heading};
pub use estimator::{estimate, estimate_breakdown, Estimate};
pub use observer::{CarObserver, NoopObserver};
