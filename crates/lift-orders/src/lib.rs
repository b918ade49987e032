//! `lift-orders`: pending orders, scripted requests, and CSV loading.
//!
//! # Crate layout
//!
//! | Module            | Contents                                                |
//! |-------------------|---------------------------------------------------------|
//! | [`registry`]      | `OrderKind`, `OrderSet`, `OrderRegistry`                |
//! | [`request_queue`] | `OrderRequest`, `RequestQueue` (`BTreeMap<Tick, Vec<_>>`) |
//! | [`loader`]        | `load_requests_csv`, `load_requests_reader`             |
//! | [`error`]         | `OrderError`, `OrderResult<T>`                          |
//!
//! # Order model (summary)
//!
//! The car keeps three independent floor sets:
//!
//! ```text
//! hall_up    floors where someone pressed the UP call button
//! hall_down  floors where someone pressed the DOWN call button
//! car_calls  floors selected from inside the car (NEUTRAL orders)
//! ```
//!
//! A floor may sit in several sets at once.  The registry performs no
//! validation; floor-range checks belong to the request boundary.

pub mod error;
pub mod loader;
pub mod registry;
pub mod request_queue;


pub use error::{OrderError, OrderResult};
pub use loader::{load_requests_csv, load_requests_reader};
pub use registry::{OrderKind, OrderRegistry, OrderSet};
pub use request_queue::{OrderRequest, RequestQueue};
