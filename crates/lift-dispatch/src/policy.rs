//! Stop policy shared by the stepper and the arrival estimator.
//!
//! A car in a sweep serves, at every floor it reaches:
//!
//! ```text
//! car call                          always
//! hall call matching the heading    always          (UP calls going up, DOWN calls going down)
//! hall call against the heading     only at the sweep end
//! ```
//!
//! The sweep end is the highest pending floor going up and the lowest going
//! down.  Serving the opposite hall call there is what turns the car around:
//! the passenger waiting at the far end is picked up as the first stop of
//! the return sweep.
//!
//! [`Car`][crate::Car] applies these rules and removes what it served;
//! [`estimate`][crate::estimate] counts the same orders without touching
//! anything.  Both go through the predicates below so the two cannot drift.

use lift_core::Floor;
use lift_orders::{OrderKind, OrderRegistry};

use crate::Heading;

/// The hall-call kind that matches `heading`.
#[inline]
pub fn hall_kind(heading: Heading) -> OrderKind {
    match heading {
        Heading::Up   => OrderKind::Up,
        Heading::Down => OrderKind::Down,
    }
}

/// `true` if an order of `kind` is served at any floor a car passes while
/// heading `heading`.
#[inline]
pub fn serves_en_route(kind: OrderKind, heading: Heading) -> bool {
    kind == OrderKind::Neutral || kind == hall_kind(heading)
}

/// `true` if an order of `kind` is served only where the sweep heading
/// `heading` ends.
#[inline]
pub fn serves_at_sweep_end(kind: OrderKind, heading: Heading) -> bool {
    kind == hall_kind(heading.reverse())
}

/// The floor where a sweep heading `heading` ends: the highest pending floor
/// going up, the lowest going down, or `current` when nothing is pending.
pub fn sweep_end(orders: &OrderRegistry, heading: Heading, current: Floor) -> Floor {
    match heading {
        Heading::Up   => orders.highest_pending(),
        Heading::Down => orders.lowest_pending(),
    }
    .unwrap_or(current)
}

/// `true` once a sweep heading `heading` has nothing left ahead of `floor`.
pub fn sweep_finished(orders: &OrderRegistry, heading: Heading, floor: Floor) -> bool {
    if orders.is_empty() {
        return true;
    }
    let end = sweep_end(orders, heading, floor);
    match heading {
        Heading::Up   => floor >= end,
        Heading::Down => floor <= end,
    }
}

/// The pending orders at `floor` that a car heading `heading` stops for.
///
/// Empty means drive past.  Any non-empty result is a single door opening,
/// however many kinds it contains.
pub fn orders_served_at(orders: &OrderRegistry, heading: Heading, floor: Floor) -> Vec<OrderKind> {
    let at_end = floor == sweep_end(orders, heading, floor);
    OrderKind::ALL
        .into_iter()
        .filter(|&kind| orders.contains(kind, floor))
        .filter(|&kind| {
            serves_en_route(kind, heading) || (at_end && serves_at_sweep_end(kind, heading))
        })
        .collect()
}
