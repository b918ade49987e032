//! Human-readable replies for the request boundary.
//!
//! ```text
//! hall call     "UP button pushed on floor 4"
//! car call      "Going to floor 7, estimated time to destination: 12 seconds"
//! stop          "Emergency break activated"
//! state query   "Current state: MOVING_UP"
//! eta query     "Estimated time to floor 3: 5 seconds"
//! out of range  "Floor must be between 1 and 10"
//! ```
//!
//! The last one is the `Display` text of `LiftError::InvalidFloor`.

use lift_core::Floor;
use lift_dispatch::DirectionState;
use lift_orders::OrderKind;

pub fn button_pushed(kind: OrderKind, floor: Floor) -> String {
    format!("{kind} button pushed on floor {floor}")
}

pub fn going_to(floor: Floor, eta_secs: u64) -> String {
    format!("Going to floor {floor}, estimated time to destination: {eta_secs} seconds")
}

pub fn emergency_stopped() -> String {
    "Emergency break activated".to_string()
}

pub fn current_state(state: DirectionState) -> String {
    format!("Current state: {state}")
}

pub fn estimated_time(floor: Floor, eta_secs: u64) -> String {
    format!("Estimated time to floor {floor}: {eta_secs} seconds")
}

pub fn reset(cleared: bool) -> String {
    if cleared {
        "Emergency stop cleared".to_string()
    } else {
        "Nothing to reset".to_string()
    }
}
