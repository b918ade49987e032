//! Arrival-time estimation.
//!
//! The estimate walks the route the sweep policy would take to `target`
//! without moving anything:
//!
//! ```text
//! target ahead of the sweep    one leg:  current → target
//! target behind the sweep      two legs: current → sweep end → target
//! idle / emergency-stopped     straight trip, no stops
//! ```
//!
//! Stops are counted per order set: car calls anywhere on the route, and on
//! each leg the hall calls that leg's heading serves.  A floor present in two
//! sets counts as two stops.

use lift_core::{CarConfig, Floor, LiftResult};
use lift_orders::{OrderKind, OrderRegistry};

use crate::{policy, DirectionState, Heading};

/// The components of an arrival estimate.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Estimate {
    pub floors_travelled:  u32,
    pub stops_encountered: u32,
}

impl Estimate {
    /// Total seconds under `config`'s timing constants.
    pub fn seconds(&self, config: &CarConfig) -> u64 {
        self.floors_travelled as u64 * config.floor_travel_secs as u64
            + self.stops_encountered as u64 * config.door_open_secs as u64
    }
}

/// One straight run of the predicted route.
#[derive(Copy, Clone, Debug)]
struct Leg {
    heading: Heading,
    from:    Floor,
    to:      Floor,
}

/// Seconds until a car at `current` in `state` reaches `target`.
///
/// Fails with `LiftError::InvalidFloor` if `target` is outside the
/// configured range.
pub fn estimate(
    config:  &CarConfig,
    current: Floor,
    state:   DirectionState,
    orders:  &OrderRegistry,
    target:  i32,
) -> LiftResult<u64> {
    estimate_breakdown(config, current, state, orders, target).map(|e| e.seconds(config))
}

/// Like [`estimate`] but returns floors and stops separately.
pub fn estimate_breakdown(
    config:  &CarConfig,
    current: Floor,
    state:   DirectionState,
    orders:  &OrderRegistry,
    target:  i32,
) -> LiftResult<Estimate> {
    let target = config.floor(target)?;
    if target == current {
        return Ok(Estimate::default());
    }

    let Some(heading) = state.heading() else {
        return Ok(Estimate {
            floors_travelled:  current.distance(target),
            stops_encountered: 0,
        });
    };

    let legs: Vec<Leg> = if Heading::towards(current, target) == Some(heading) {
        vec![Leg { heading, from: current, to: target }]
    } else {
        let end = policy::sweep_end(orders, heading, current);
        vec![
            Leg { heading,                     from: current, to: end },
            Leg { heading: heading.reverse(), from: end,     to: target },
        ]
    };

    Ok(Estimate {
        floors_travelled:  legs.iter().map(|leg| leg.from.distance(leg.to)).sum(),
        stops_encountered: count_stops(orders, &legs) as u32,
    })
}

fn count_stops(orders: &OrderRegistry, legs: &[Leg]) -> usize {
    let lo = legs.iter().map(|leg| leg.from.min(leg.to)).min().unwrap_or_default();
    let hi = legs.iter().map(|leg| leg.from.max(leg.to)).max().unwrap_or_default();

    OrderKind::ALL
        .into_iter()
        .map(|kind| {
            let set = orders.set(kind);
            if kind.is_hall_call() {
                legs.iter()
                    .filter(|leg| policy::serves_en_route(kind, leg.heading))
                    .map(|leg| set.count_between(leg.from, leg.to))
                    .sum()
            } else {
                // Car calls are served whatever the heading; count each once
                // over the whole route.
                set.count_between(lo, hi)
            }
        })
        .sum()
}
