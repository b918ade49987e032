//! `RequestQueue`: scripted passenger requests keyed by arrival tick.
//!
//! Offline scenarios describe when each button is pressed.  The queue holds
//! those presses sparsely: each tick the simulator drains only the requests
//! due at that tick instead of scanning the whole script.

use std::collections::BTreeMap;

use lift_core::Tick;

use crate::OrderKind;

/// One button press as it arrives at the request boundary.
///
/// `floor` is the raw, unvalidated value; the boundary rejects it if it lies
/// outside the configured range.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[derive(serde::Serialize, serde::Deserialize)]
pub struct OrderRequest {
    pub floor: i32,
    pub kind:  OrderKind,
}

impl OrderRequest {
    pub fn new(floor: i32, kind: OrderKind) -> Self {
        Self { floor, kind }
    }
}

/// A map from simulation ticks to the requests arriving at that tick.
#[derive(Default, Debug)]
pub struct RequestQueue {
    inner: BTreeMap<Tick, Vec<OrderRequest>>,
    /// Cached total request count for O(1) `len()`.
    total: usize,
}

impl RequestQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule `request` to arrive at `tick`.  Requests for the same tick
    /// are delivered in push order.
    pub fn push(&mut self, tick: Tick, request: OrderRequest) {
        self.inner.entry(tick).or_default().push(request);
        self.total += 1;
    }

    /// Remove and return all requests scheduled for exactly `tick`.
    ///
    /// Returns `None` if nothing is queued for that tick (the common case).
    pub fn drain_tick(&mut self, tick: Tick) -> Option<Vec<OrderRequest>> {
        let requests = self.inner.remove(&tick)?;
        self.total -= requests.len();
        Some(requests)
    }

    /// Remove and return every request due at or before `tick`, oldest first.
    ///
    /// Used when a run starts after some scripted ticks have already passed.
    pub fn drain_through(&mut self, tick: Tick) -> Vec<OrderRequest> {
        let later = self.inner.split_off(&tick.offset(1));
        let due = std::mem::replace(&mut self.inner, later);
        let requests: Vec<OrderRequest> = due.into_values().flatten().collect();
        self.total -= requests.len();
        requests
    }

    /// The earliest tick with at least one queued request, or `None` if empty.
    pub fn next_tick(&self) -> Option<Tick> {
        self.inner.keys().next().copied()
    }

    /// Total number of queued requests across all future ticks.
    pub fn len(&self) -> usize {
        self.total
    }

    pub fn is_empty(&self) -> bool {
        self.total == 0
    }
}

impl FromIterator<(Tick, OrderRequest)> for RequestQueue {
    fn from_iter<I: IntoIterator<Item = (Tick, OrderRequest)>>(iter: I) -> Self {
        let mut queue = RequestQueue::new();
        for (tick, request) in iter {
            queue.push(tick, request);
        }
        queue
    }
}
