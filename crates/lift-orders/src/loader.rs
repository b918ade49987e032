//! CSV scenario loader.
//!
//! # CSV format
//!
//! One row per button press.
//!
//! ```csv
//! tick,floor,kind
//! 0,5,up
//! 0,8,neutral
//! 12,3,down
//! 40,1,car
//! ```
//!
//! **`kind`** field: `up`, `down`, `neutral` (alias `car`), any case.
//!
//! Floors are not range-checked here: an out-of-range press is a valid
//! scenario event that the request boundary is expected to reject.

use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use lift_core::Tick;

use crate::{OrderError, OrderKind, OrderRequest, RequestQueue};

// ── CSV record ────────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct RequestRecord {
    tick:  u64,
    floor: i32,
    kind:  String,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load a scripted request queue from a CSV file.
pub fn load_requests_csv(path: &Path) -> Result<RequestQueue, OrderError> {
    let file = std::fs::File::open(path)
        .map_err(OrderError::Io)?;
    load_requests_reader(file)
}

/// Like [`load_requests_csv`] but accepts any `Read` source.
///
/// Useful for testing (pass a `std::io::Cursor`) or embedded scenarios.
pub fn load_requests_reader<R: Read>(reader: R) -> Result<RequestQueue, OrderError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let mut queue = RequestQueue::new();

    for (line, result) in csv_reader.deserialize::<RequestRecord>().enumerate() {
        let row = result.map_err(|e| OrderError::Parse(e.to_string()))?;
        let kind: OrderKind = row.kind.parse().map_err(|e| match e {
            // Row numbers are 1-based and skip the header.
            OrderError::Parse(msg) => OrderError::Parse(format!("row {}: {msg}", line + 1)),
            other => other,
        })?;
        queue.push(Tick(row.tick), OrderRequest::new(row.floor, kind));
    }

    Ok(queue)
}
