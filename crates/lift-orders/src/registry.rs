//! The three pending-order collections.

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use lift_core::Floor;

use crate::OrderError;

// ── OrderKind ─────────────────────────────────────────────────────────────────

/// Which button produced an order.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[derive(serde::Serialize, serde::Deserialize)]
pub enum OrderKind {
    /// Hall call: UP button on a floor.
    Up,
    /// Hall call: DOWN button on a floor.
    Down,
    /// Car call: a destination selected from inside the car.
    Neutral,
}

impl OrderKind {
    pub const ALL: [OrderKind; 3] = [OrderKind::Up, OrderKind::Down, OrderKind::Neutral];

    /// `true` for the two hall-call kinds.
    #[inline]
    pub fn is_hall_call(self) -> bool {
        !matches!(self, OrderKind::Neutral)
    }
}

impl fmt::Display for OrderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            OrderKind::Up      => "UP",
            OrderKind::Down    => "DOWN",
            OrderKind::Neutral => "NEUTRAL",
        };
        f.write_str(s)
    }
}

impl FromStr for OrderKind {
    type Err = OrderError;

    /// Accepts `up`, `down`, `neutral`, and `car` (any case).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "up"              => Ok(OrderKind::Up),
            "down"            => Ok(OrderKind::Down),
            "neutral" | "car" => Ok(OrderKind::Neutral),
            other => Err(OrderError::Parse(format!(
                "invalid order kind {other:?}: expected \"up\", \"down\", or \"neutral\""
            ))),
        }
    }
}

// ── OrderSet ──────────────────────────────────────────────────────────────────

/// A set of floors with membership semantics only.
///
/// Backed by a `BTreeSet` so iteration is ascending and runs are
/// reproducible; callers must not rely on any other ordering property.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct OrderSet(BTreeSet<Floor>);

impl OrderSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `floor`.  Returns `false` if it was already present.
    #[inline]
    pub fn insert(&mut self, floor: Floor) -> bool {
        self.0.insert(floor)
    }

    /// Remove `floor`.  Returns `false` if it was not present.
    #[inline]
    pub fn remove(&mut self, floor: Floor) -> bool {
        self.0.remove(&floor)
    }

    #[inline]
    pub fn contains(&self, floor: Floor) -> bool {
        self.0.contains(&floor)
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Ascending iterator over member floors.
    pub fn iter(&self) -> std::collections::btree_set::Iter<'_, Floor> {
        self.0.iter()
    }

    /// Number of member floors in the inclusive range spanned by `a` and `b`.
    pub fn count_between(&self, a: Floor, b: Floor) -> usize {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        self.0.range(lo..=hi).count()
    }
}

impl FromIterator<Floor> for OrderSet {
    fn from_iter<I: IntoIterator<Item = Floor>>(iter: I) -> Self {
        OrderSet(iter.into_iter().collect())
    }
}

// ── OrderRegistry ─────────────────────────────────────────────────────────────

/// The car's pending orders: two hall-call sets and the car-call set.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct OrderRegistry {
    hall_up:   OrderSet,
    hall_down: OrderSet,
    car_calls: OrderSet,
}

impl OrderRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a registry from explicit floor lists.  Handy for scenarios and
    /// tests.
    pub fn from_floors(
        hall_up:   impl IntoIterator<Item = i32>,
        hall_down: impl IntoIterator<Item = i32>,
        car_calls: impl IntoIterator<Item = i32>,
    ) -> Self {
        Self {
            hall_up:   hall_up.into_iter().map(Floor).collect(),
            hall_down: hall_down.into_iter().map(Floor).collect(),
            car_calls: car_calls.into_iter().map(Floor).collect(),
        }
    }

    // ── Kind-generic access ───────────────────────────────────────────────

    /// The set holding orders of `kind`.
    #[inline]
    pub fn set(&self, kind: OrderKind) -> &OrderSet {
        match kind {
            OrderKind::Up      => &self.hall_up,
            OrderKind::Down    => &self.hall_down,
            OrderKind::Neutral => &self.car_calls,
        }
    }

    #[inline]
    fn set_mut(&mut self, kind: OrderKind) -> &mut OrderSet {
        match kind {
            OrderKind::Up      => &mut self.hall_up,
            OrderKind::Down    => &mut self.hall_down,
            OrderKind::Neutral => &mut self.car_calls,
        }
    }

    /// Add an order.  Returns `false` if it was already pending.
    pub fn add(&mut self, kind: OrderKind, floor: Floor) -> bool {
        self.set_mut(kind).insert(floor)
    }

    /// Remove an order from the set for `kind` only.  Returns `false` if it
    /// was not pending.
    pub fn remove(&mut self, kind: OrderKind, floor: Floor) -> bool {
        self.set_mut(kind).remove(floor)
    }

    #[inline]
    pub fn contains(&self, kind: OrderKind, floor: Floor) -> bool {
        self.set(kind).contains(floor)
    }

    // ── Named operations ──────────────────────────────────────────────────

    pub fn add_hall_up(&mut self, floor: Floor) -> bool {
        self.add(OrderKind::Up, floor)
    }

    pub fn add_hall_down(&mut self, floor: Floor) -> bool {
        self.add(OrderKind::Down, floor)
    }

    pub fn add_car_call(&mut self, floor: Floor) -> bool {
        self.add(OrderKind::Neutral, floor)
    }

    pub fn remove_hall_up(&mut self, floor: Floor) -> bool {
        self.remove(OrderKind::Up, floor)
    }

    pub fn remove_hall_down(&mut self, floor: Floor) -> bool {
        self.remove(OrderKind::Down, floor)
    }

    pub fn remove_car_call(&mut self, floor: Floor) -> bool {
        self.remove(OrderKind::Neutral, floor)
    }

    pub fn contains_hall_up(&self, floor: Floor) -> bool {
        self.hall_up.contains(floor)
    }

    pub fn contains_hall_down(&self, floor: Floor) -> bool {
        self.hall_down.contains(floor)
    }

    pub fn contains_car_call(&self, floor: Floor) -> bool {
        self.car_calls.contains(floor)
    }

    pub fn hall_up(&self) -> &OrderSet {
        &self.hall_up
    }

    pub fn hall_down(&self) -> &OrderSet {
        &self.hall_down
    }

    pub fn car_calls(&self) -> &OrderSet {
        &self.car_calls
    }

    /// Empty all three sets.
    pub fn clear_all(&mut self) {
        self.hall_up.clear();
        self.hall_down.clear();
        self.car_calls.clear();
    }

    // ── Union queries ─────────────────────────────────────────────────────

    /// Every pending floor: car calls, then hall-up, then hall-down, each
    /// ascending.  A floor present in several sets is yielded once per set.
    ///
    /// The iterator is `Clone`, so it can be restarted cheaply.
    pub fn all_pending_floors(&self) -> impl Iterator<Item = Floor> + Clone + '_ {
        self.car_calls
            .iter()
            .chain(self.hall_up.iter())
            .chain(self.hall_down.iter())
            .copied()
    }

    /// Highest pending floor across all sets, or `None` if nothing is pending.
    pub fn highest_pending(&self) -> Option<Floor> {
        OrderKind::ALL
            .iter()
            .filter_map(|&k| self.set(k).iter().next_back().copied())
            .max()
    }

    /// Lowest pending floor across all sets, or `None` if nothing is pending.
    pub fn lowest_pending(&self) -> Option<Floor> {
        OrderKind::ALL
            .iter()
            .filter_map(|&k| self.set(k).iter().next().copied())
            .min()
    }

    /// Total entries across the three sets (cross-set duplicates counted).
    pub fn len(&self) -> usize {
        self.hall_up.len() + self.hall_down.len() + self.car_calls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hall_up.is_empty() && self.hall_down.is_empty() && self.car_calls.is_empty()
    }
}
