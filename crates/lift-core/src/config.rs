//! Car configuration: floor range and timing constants.
//!
//! Owned by the host and handed to the controller at construction; the
//! dispatch core only ever reads it.
//!
//! # JSON format
//!
//! ```json
//! {
//!   "total_floors": 10,
//!   "floor_travel_secs": 1,
//!   "door_open_secs": 3,
//!   "tick_millis": 100
//! }
//! ```
//!
//! Missing fields take their defaults.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::{Floor, LiftError, LiftResult, SimClock};

/// Immutable configuration for one car.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CarConfig {
    /// Number of floors served.  Valid floors are `1..=total_floors`.
    pub total_floors: u32,

    /// Seconds to travel one floor.  Must be positive.
    pub floor_travel_secs: u32,

    /// Seconds the doors stay open per stop.  Zero is allowed.
    pub door_open_secs: u32,

    /// Simulated milliseconds per clock tick; also the live driver cadence.
    pub tick_millis: u32,
}

impl Default for CarConfig {
    fn default() -> Self {
        Self {
            total_floors:      10,
            floor_travel_secs: 1,
            door_open_secs:    3,
            tick_millis:       100,
        }
    }
}

impl CarConfig {
    /// Parse and validate a configuration from a JSON string.
    pub fn from_json_str(s: &str) -> LiftResult<Self> {
        let config: CarConfig = serde_json::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse, and validate a JSON configuration file.
    pub fn load_json(path: &Path) -> LiftResult<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }

    /// Check the constraints the dispatch core relies on.
    pub fn validate(&self) -> LiftResult<()> {
        if self.total_floors < 1 {
            return Err(LiftError::Config("total_floors must be at least 1".into()));
        }
        if self.total_floors > i32::MAX as u32 {
            return Err(LiftError::Config(format!(
                "total_floors {} exceeds the supported maximum",
                self.total_floors
            )));
        }
        if self.floor_travel_secs == 0 {
            return Err(LiftError::Config("floor_travel_secs must be positive".into()));
        }
        if self.tick_millis == 0 {
            return Err(LiftError::Config("tick_millis must be positive".into()));
        }
        Ok(())
    }

    /// The highest floor served.
    #[inline]
    pub fn top_floor(&self) -> Floor {
        Floor(self.total_floors as i32)
    }

    /// `true` if `floor` lies in `[1, total_floors]`.
    #[inline]
    pub fn contains(&self, floor: Floor) -> bool {
        floor >= Floor::GROUND && floor <= self.top_floor()
    }

    /// Validate a raw request floor.
    ///
    /// This is the only range check in the system; the order registry and
    /// dispatch core accept whatever they are given.
    pub fn floor(&self, raw: i32) -> LiftResult<Floor> {
        let floor = Floor(raw);
        if self.contains(floor) {
            Ok(floor)
        } else {
            Err(LiftError::InvalidFloor { floor: raw, total_floors: self.total_floors })
        }
    }

    /// Construct a `SimClock` at this configuration's resolution.
    pub fn make_clock(&self) -> SimClock {
        SimClock::new(self.tick_millis)
    }
}
