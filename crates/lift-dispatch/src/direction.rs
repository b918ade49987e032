//! Direction state and travel heading.

use std::fmt;

use lift_core::Floor;

/// The car's dispatch state.  Exactly one holds at any time.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DirectionState {
    /// Not committed to a sweep.
    #[default]
    Idle,
    MovingUp,
    MovingDown,
    /// Halted by the emergency command.  Only an explicit reset leaves it.
    EmergencyStopped,
}

impl DirectionState {
    /// The heading of the current sweep, if the car is in one.
    #[inline]
    pub fn heading(self) -> Option<Heading> {
        match self {
            DirectionState::MovingUp   => Some(Heading::Up),
            DirectionState::MovingDown => Some(Heading::Down),
            DirectionState::Idle | DirectionState::EmergencyStopped => None,
        }
    }

    #[inline]
    pub fn is_moving(self) -> bool {
        self.heading().is_some()
    }
}

impl From<Heading> for DirectionState {
    fn from(heading: Heading) -> Self {
        match heading {
            Heading::Up   => DirectionState::MovingUp,
            Heading::Down => DirectionState::MovingDown,
        }
    }
}

impl fmt::Display for DirectionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            DirectionState::Idle             => "IDLE",
            DirectionState::MovingUp         => "MOVING_UP",
            DirectionState::MovingDown       => "MOVING_DOWN",
            DirectionState::EmergencyStopped => "EMERGENCY_STOPPED",
        };
        f.write_str(s)
    }
}

/// Direction of travel within a sweep.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Heading {
    Up,
    Down,
}

impl Heading {
    /// Heading needed to get from `from` to `to`, or `None` if they match.
    #[inline]
    pub fn towards(from: Floor, to: Floor) -> Option<Heading> {
        match to.cmp(&from) {
            std::cmp::Ordering::Greater => Some(Heading::Up),
            std::cmp::Ordering::Less    => Some(Heading::Down),
            std::cmp::Ordering::Equal   => None,
        }
    }

    /// The neighbouring floor in this heading.
    #[inline]
    pub fn step(self, floor: Floor) -> Floor {
        match self {
            Heading::Up   => floor.above(),
            Heading::Down => floor.below(),
        }
    }

    #[inline]
    pub fn reverse(self) -> Heading {
        match self {
            Heading::Up   => Heading::Down,
            Heading::Down => Heading::Up,
        }
    }
}

impl fmt::Display for Heading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Heading::Up   => "up",
            Heading::Down => "down",
        })
    }
}
