//! Fluent builder for constructing a [`Sim`].

use lift_core::{CarConfig, LiftError};
use lift_dispatch::{Car, CarObserver, NoopObserver};
use lift_orders::RequestQueue;

use crate::sim::{Traffic, TrafficConfig};
use crate::{Controller, Sim, SimResult};

/// Fluent builder for [`Sim<O>`].
///
/// # Optional inputs (have defaults)
///
/// | Method            | Default                   |
/// |-------------------|---------------------------|
/// | `.observer(o)`    | `NoopObserver`            |
/// | `.script(q)`      | Empty `RequestQueue`      |
/// | `.start_floor(f)` | Floor 1                   |
/// | `.traffic(t)`     | No random traffic         |
///
/// # Example
///
/// ```rust,ignore
/// let script = load_requests_csv(Path::new("morning.csv"))?;
/// let mut sim = SimBuilder::new(CarConfig::default())
///     .script(script)
///     .observer(EventLogObserver::new(writer))
///     .build()?;
/// let summary = sim.run_until_idle(100_000)?;
/// ```
pub struct SimBuilder<O = NoopObserver> {
    config:      CarConfig,
    observer:    O,
    script:      RequestQueue,
    start_floor: i32,
    traffic:     Option<TrafficConfig>,
}

impl SimBuilder<NoopObserver> {
    pub fn new(config: CarConfig) -> Self {
        Self {
            config,
            observer:    NoopObserver,
            script:      RequestQueue::new(),
            start_floor: 1,
            traffic:     None,
        }
    }
}

impl<O: CarObserver> SimBuilder<O> {
    /// Report car events to `observer` instead.
    pub fn observer<P: CarObserver>(self, observer: P) -> SimBuilder<P> {
        SimBuilder {
            config:      self.config,
            observer,
            script:      self.script,
            start_floor: self.start_floor,
            traffic:     self.traffic,
        }
    }

    /// Scripted requests, keyed by the tick they are submitted at.
    pub fn script(mut self, script: RequestQueue) -> Self {
        self.script = script;
        self
    }

    /// Where the car starts.  Must lie inside the building.
    pub fn start_floor(mut self, floor: i32) -> Self {
        self.start_floor = floor;
        self
    }

    /// Add seeded random requests on top of the script.
    pub fn traffic(mut self, traffic: TrafficConfig) -> Self {
        self.traffic = Some(traffic);
        self
    }

    /// Validate inputs and return a ready-to-run [`Sim`].
    pub fn build(self) -> SimResult<Sim<O>> {
        self.config.validate()?;
        let start = self.config.floor(self.start_floor)?;

        let traffic = match &self.traffic {
            Some(t) if !(0.0..=1.0).contains(&t.call_probability) => {
                return Err(LiftError::Config(format!(
                    "call_probability {} is outside [0, 1]",
                    t.call_probability
                ))
                .into());
            }
            Some(t) => Some(Traffic::new(t)),
            None => None,
        };

        let car = Car::new(self.config.clone())?.placed_at(start);
        Ok(Sim {
            controller: Controller::from_car(car, self.observer),
            script:     self.script,
            traffic,
            config:     self.config,
            accepted:   0,
            rejected:   0,
        })
    }
}
