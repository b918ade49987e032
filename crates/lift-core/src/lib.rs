//! `lift-core`: foundational types for the `rust_lift` elevator simulator.
//!
//! This crate is a dependency of every other `lift-*` crate.  It has no
//! `lift-*` dependencies and few external ones (`rand`, `thiserror`, and
//! `serde`/`serde_json` for configuration loading).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`floor`]       | `Floor`                                               |
//! | [`time`]        | `Tick`, `SimClock`                                    |
//! | [`config`]      | `CarConfig` (floor range, timing constants)           |
//! | [`rng`]         | `TrafficRng` (seeded passenger traffic)               |
//! | [`error`]       | `LiftError`, `LiftResult`                             |

pub mod config;
pub mod error;
pub mod floor;
pub mod rng;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::CarConfig;
pub use error::{LiftError, LiftResult};
pub use floor::Floor;
pub use rng::TrafficRng;
pub use time::{SimClock, Tick};
