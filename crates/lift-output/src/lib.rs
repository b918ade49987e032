//! `lift-output`: run output writers for the rust_lift simulator.
//!
//! | Backend | Files created                           |
//! |---------|-----------------------------------------|
//! | CSV     | `car_events.csv`, `tick_summaries.csv`  |
//!
//! Backends implement [`OutputWriter`] and are driven by
//! [`EventLogObserver`], which implements `lift_dispatch::CarObserver`.
//!
//! # Usage
//!
//! ```rust,ignore
//! use lift_output::{CsvWriter, EventLogObserver};
//!
//! let writer = CsvWriter::new(Path::new("./output"))?;
//! let mut sim = SimBuilder::new(config.clone())
//!     .observer(EventLogObserver::new(writer, &config))
//!     .build()?;
//! sim.run_until_idle(100_000)?;
//! if let Some(mut obs) = sim.into_observer() {
//!     obs.take_error().map(|e| eprintln!("output error: {e}"));
//! }
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod writer;


pub use csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use observer::EventLogObserver;
pub use row::{CarEventRow, EventKind, TickSummaryRow};
pub use writer::OutputWriter;
