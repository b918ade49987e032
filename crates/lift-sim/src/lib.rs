//! `lift-sim`: shared controller, live driver, and offline runner.
//!
//! # Crate layout
//!
//! | Module         | Contents                                                 |
//! |----------------|----------------------------------------------------------|
//! | [`controller`] | `Controller`: `Arc<Mutex<..>>` handle over one car       |
//! | [`driver`]     | `PeriodicDriver`: ticks a controller in real time        |
//! | [`sim`]        | `Sim`, `SimSummary`, `TrafficConfig`: offline runs       |
//! | [`builder`]    | `SimBuilder`                                             |
//! | [`reply`]      | Boundary reply text                                      |
//! | [`error`]      | `SimError`, `SimResult<T>`                               |
//!
//! # Two ways to drive a car
//!
//! ```text
//! live      PeriodicDriver ──tick every tick_millis──▶ Controller ◀── request handlers
//! offline   Sim::run_until_idle ──script, traffic, tick──▶ Controller
//! ```
//!
//! Both go through the same `Controller::tick`, so a scenario replayed
//! offline behaves exactly as it would live.
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use lift_core::CarConfig;
//! use lift_sim::SimBuilder;
//!
//! let mut sim = SimBuilder::new(CarConfig::default())
//!     .script(script)
//!     .build()?;
//! let summary = sim.run_until_idle(10_000)?;
//! println!("{summary}");
//! ```

pub mod builder;
pub mod controller;
pub mod driver;
pub mod error;
pub mod reply;
pub mod sim;


pub use builder::SimBuilder;
pub use controller::Controller;
pub use driver::PeriodicDriver;
pub use error::{SimError, SimResult};
pub use sim::{Sim, SimSummary, TrafficConfig};
