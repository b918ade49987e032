//! Plain data row types written by output backends.

use std::fmt;

/// What happened in a [`CarEventRow`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    StateChange,
    Arrival,
    DoorsOpen,
    OrderAdded,
    /// The order was already pending.
    OrderDuplicate,
    OrderRejected,
}

impl EventKind {
    pub fn as_str(self) -> &'static str {
        match self {
            EventKind::StateChange    => "state_change",
            EventKind::Arrival        => "arrival",
            EventKind::DoorsOpen      => "doors_open",
            EventKind::OrderAdded     => "order_added",
            EventKind::OrderDuplicate => "order_duplicate",
            EventKind::OrderRejected  => "order_rejected",
        }
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One car event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CarEventRow {
    pub tick:       u64,
    pub elapsed_ms: u64,
    pub event:      EventKind,
    /// The floor involved.  For rejected orders this is the raw request.
    pub floor:      i32,
    /// Free-form context: `IDLE->MOVING_UP`, `UP+NEUTRAL`, an order kind.
    pub detail:     String,
}

/// The car's state at the end of one sampled tick.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TickSummaryRow {
    pub tick:       u64,
    pub elapsed_ms: u64,
    pub floor:      i32,
    pub state:      String,
    pub motion:     String,
    pub pending:    u64,
}
