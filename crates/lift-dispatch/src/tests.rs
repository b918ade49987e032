//! Unit tests for lift-dispatch.

use lift_core::{CarConfig, Floor, Tick};
use lift_orders::{OrderKind, OrderRegistry};

use crate::{Car, CarObserver, DirectionState, Heading, Motion, NoopObserver};

// ── Helpers ───────────────────────────────────────────────────────────────────

/// Floors 1–10, 1 s per floor, 3 s doors, 100 ms ticks.
fn ten_floors() -> CarConfig {
    CarConfig::default()
}

/// hallUp {1,5,8}, hallDown {3,5,10}, carCall {2,3,8}.
fn busy_orders() -> OrderRegistry {
    OrderRegistry::from_floors([1, 5, 8], [3, 5, 10], [2, 3, 8])
}

fn car_at(floor: i32, state: DirectionState, orders: OrderRegistry) -> Car {
    Car::new(ten_floors())
        .unwrap()
        .placed_at(Floor(floor))
        .with_state(state)
        .with_orders(orders)
}

#[derive(Clone, Debug, PartialEq, Eq)]
enum Event {
    State(DirectionState, DirectionState),
    Floor(Floor),
    Doors(Floor, Vec<OrderKind>),
}

#[derive(Default)]
struct Recorder {
    events: Vec<Event>,
}

impl Recorder {
    fn floors(&self) -> Vec<i32> {
        self.events
            .iter()
            .filter_map(|e| match e {
                Event::Floor(f) => Some(f.0),
                _ => None,
            })
            .collect()
    }

    fn door_floors(&self) -> Vec<i32> {
        self.events
            .iter()
            .filter_map(|e| match e {
                Event::Doors(f, _) => Some(f.0),
                _ => None,
            })
            .collect()
    }
}

impl CarObserver for Recorder {
    fn on_state_change(&mut self, _tick: Tick, _floor: Floor, from: DirectionState, to: DirectionState) {
        self.events.push(Event::State(from, to));
    }

    fn on_floor(&mut self, _tick: Tick, floor: Floor) {
        self.events.push(Event::Floor(floor));
    }

    fn on_doors_open(&mut self, _tick: Tick, floor: Floor, served: &[OrderKind]) {
        self.events.push(Event::Doors(floor, served.to_vec()));
    }
}

/// Tick the car until it has nothing left to do.  Returns the last tick.
fn run_to_rest<O: CarObserver>(car: &mut Car, observer: &mut O) -> Tick {
    for t in 1..100_000 {
        let now = Tick(t);
        car.advance(now, observer);
        if car.is_settled() && !car.should_move() {
            return now;
        }
    }
    panic!("car never came to rest: {:?}", car.snapshot());
}

// ── Movement scenarios ────────────────────────────────────────────────────────

#[cfg(test)]
mod scenarios {
    use super::*;

    #[test]
    fn from_ground_floor_ends_at_three() {
        let mut car = car_at(1, DirectionState::Idle, busy_orders());
        let mut rec = Recorder::default();
        run_to_rest(&mut car, &mut rec);

        assert_eq!(car.floor(), Floor(3));
        assert_eq!(car.state(), DirectionState::Idle);
        assert!(car.orders().is_empty());
        assert_eq!(rec.door_floors(), vec![1, 2, 3, 5, 8, 10, 5, 3]);
    }

    #[test]
    fn from_top_floor_ends_at_eight() {
        let mut car = car_at(10, DirectionState::Idle, busy_orders());
        let mut rec = Recorder::default();
        run_to_rest(&mut car, &mut rec);

        assert_eq!(car.floor(), Floor(8));
        assert!(car.orders().is_empty());
        assert_eq!(rec.door_floors(), vec![10, 8, 5, 3, 2, 1, 5, 8]);
    }

    #[test]
    fn resumed_up_sweep_ends_at_one() {
        let mut car = car_at(5, DirectionState::MovingUp, busy_orders());
        run_to_rest(&mut car, &mut NoopObserver);
        assert_eq!(car.floor(), Floor(1));
        assert!(car.orders().is_empty());
    }

    #[test]
    fn resumed_down_sweep_ends_at_ten() {
        let mut car = car_at(5, DirectionState::MovingDown, busy_orders());
        run_to_rest(&mut car, &mut NoopObserver);
        assert_eq!(car.floor(), Floor(10));
        assert!(car.orders().is_empty());
    }

    #[test]
    fn turnaround_call_served_at_sweep_end_only() {
        // Going up from 1, the DOWN call at 4 is passed; the DOWN call at the
        // top of the sweep (6) is served.
        let orders = OrderRegistry::from_floors([], [4, 6], []);
        let mut car = car_at(1, DirectionState::Idle, orders);
        let mut rec = Recorder::default();
        run_to_rest(&mut car, &mut rec);

        assert_eq!(rec.door_floors(), vec![6, 4]);
        assert_eq!(car.floor(), Floor(4));
    }

    #[test]
    fn one_door_opening_per_floor_visit() {
        let orders = OrderRegistry::from_floors([4], [], [4]);
        let mut car = car_at(1, DirectionState::Idle, orders);
        let mut rec = Recorder::default();
        run_to_rest(&mut car, &mut rec);

        let doors: Vec<&Event> = rec.events.iter().filter(|e| matches!(e, Event::Doors(..))).collect();
        assert_eq!(doors, vec![&Event::Doors(Floor(4), vec![OrderKind::Up, OrderKind::Neutral])]);
    }

    #[test]
    fn zero_door_time_is_allowed() {
        let config = CarConfig { door_open_secs: 0, ..ten_floors() };
        let mut car = Car::new(config).unwrap().with_orders(busy_orders());
        run_to_rest(&mut car, &mut NoopObserver);
        assert_eq!(car.floor(), Floor(3));
        assert!(car.orders().is_empty());
    }
}

// ── Stepping and timing ───────────────────────────────────────────────────────

#[cfg(test)]
mod stepping {
    use super::*;

    #[test]
    fn single_call_timeline() {
        let mut car = Car::new(ten_floors()).unwrap();
        car.add_order(3, OrderKind::Neutral).unwrap();
        assert!(car.should_move());

        car.advance(Tick(1), &mut NoopObserver);
        assert_eq!(car.state(), DirectionState::MovingUp);
        assert_eq!(car.motion(), Motion::Travelling { heading: Heading::Up, arrives_at: Tick(11) });

        car.advance(Tick(10), &mut NoopObserver);
        assert_eq!(car.floor(), Floor(1), "still between floors");

        car.advance(Tick(11), &mut NoopObserver);
        assert_eq!(car.floor(), Floor(2));

        car.advance(Tick(21), &mut NoopObserver);
        assert_eq!(car.floor(), Floor(3));
        assert_eq!(car.motion(), Motion::DoorsOpen { closes_at: Tick(51) });
        assert!(car.orders().is_empty(), "order removed when the doors open");
        assert_eq!(car.state(), DirectionState::MovingUp);

        car.advance(Tick(51), &mut NoopObserver);
        assert_eq!(car.state(), DirectionState::Idle);
        assert_eq!(car.motion(), Motion::Parked);
    }

    #[test]
    fn late_advance_catches_up() {
        let mut car = Car::new(ten_floors()).unwrap();
        car.add_order(6, OrderKind::Neutral).unwrap();
        car.advance(Tick(1), &mut NoopObserver);
        car.advance(Tick(10_000), &mut NoopObserver);
        assert_eq!(car.floor(), Floor(6));
        assert_eq!(car.state(), DirectionState::Idle);
    }

    #[test]
    fn new_sweep_waits_for_next_tick() {
        // First sweep ends going up; the remaining DOWN call needs a new one.
        let orders = OrderRegistry::from_floors([], [2], [4]);
        let mut car = car_at(3, DirectionState::MovingUp, orders);
        car.advance(Tick(1), &mut NoopObserver);
        car.advance(Tick(1_000), &mut NoopObserver);
        assert_eq!(car.floor(), Floor(4));
        assert_eq!(car.state(), DirectionState::Idle);
        assert!(car.should_move());

        car.advance(Tick(1_001), &mut NoopObserver);
        assert_eq!(car.state(), DirectionState::MovingDown);
    }

    #[test]
    fn idle_tick_changes_nothing() {
        let mut car = Car::new(ten_floors()).unwrap();
        let before = car.snapshot();
        for t in 1..50 {
            car.advance(Tick(t), &mut NoopObserver);
        }
        assert_eq!(car.snapshot(), before);
    }

    #[test]
    fn order_at_current_floor_waits_while_idle() {
        let mut car = Car::new(ten_floors()).unwrap();
        car.add_order(1, OrderKind::Up).unwrap();
        assert!(!car.should_move());
        for t in 1..50 {
            car.advance(Tick(t), &mut NoopObserver);
        }
        assert_eq!(car.state(), DirectionState::Idle);
        assert!(car.orders().contains_hall_up(Floor(1)));
    }

    #[test]
    fn direction_is_monotonic_within_a_run() {
        let mut car = car_at(4, DirectionState::Idle, busy_orders());
        let mut rec = Recorder::default();
        run_to_rest(&mut car, &mut rec);

        let mut heading: Option<Heading> = None;
        let mut last = Floor(4);
        for event in &rec.events {
            match event {
                Event::State(_, to) => heading = to.heading(),
                Event::Floor(f) => {
                    let step = Heading::towards(last, *f);
                    assert!(heading.is_some(), "moved while not in a sweep");
                    assert_eq!(step, heading, "reversed inside a run at {f}");
                    last = *f;
                }
                Event::Doors(..) => {}
            }
        }
    }

    #[test]
    fn car_never_leaves_the_building() {
        let mut car = car_at(1, DirectionState::Idle, busy_orders());
        let mut rec = Recorder::default();
        run_to_rest(&mut car, &mut rec);
        assert!(rec.floors().iter().all(|&f| (1..=10).contains(&f)));
    }

    #[test]
    fn first_pending_floor_picks_direction() {
        // Car calls are examined before hall calls.
        let orders = OrderRegistry::from_floors([2], [], [9]);
        let mut car = car_at(5, DirectionState::Idle, orders);
        car.advance(Tick(1), &mut NoopObserver);
        assert_eq!(car.state(), DirectionState::MovingUp);
    }
}

// ── Commands ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod commands {
    use super::*;

    #[test]
    fn out_of_range_orders_are_rejected() {
        let mut car = Car::new(ten_floors()).unwrap();
        for raw in [0, -3, 11, i32::MAX] {
            let err = car.add_order(raw, OrderKind::Up).unwrap_err();
            assert!(err.is_invalid_floor());
        }
        assert!(car.orders().is_empty());
        assert_eq!(car.state(), DirectionState::Idle);
    }

    #[test]
    fn duplicate_order_reports_false() {
        let mut car = Car::new(ten_floors()).unwrap();
        assert!(car.add_order(7, OrderKind::Down).unwrap());
        assert!(!car.add_order(7, OrderKind::Down).unwrap());
        assert!(car.add_order(7, OrderKind::Up).unwrap());
        assert_eq!(car.orders().len(), 2);
    }

    #[test]
    fn emergency_stop_from_every_state() {
        for state in [
            DirectionState::Idle,
            DirectionState::MovingUp,
            DirectionState::MovingDown,
            DirectionState::EmergencyStopped,
        ] {
            let mut car = car_at(5, state, busy_orders());
            car.emergency_stop(Tick(0), &mut NoopObserver);
            assert_eq!(car.state(), DirectionState::EmergencyStopped);
            assert!(car.orders().is_empty());
        }
    }

    #[test]
    fn emergency_stop_is_idempotent() {
        let mut car = car_at(5, DirectionState::MovingUp, busy_orders());
        let mut rec = Recorder::default();
        car.emergency_stop(Tick(0), &mut rec);
        let once = car.snapshot();
        car.emergency_stop(Tick(1), &mut rec);
        assert_eq!(car.snapshot(), once);
        assert_eq!(rec.events.len(), 1, "one state change only");
    }

    #[test]
    fn emergency_stop_preempts_a_run() {
        let mut car = Car::new(ten_floors()).unwrap();
        car.add_order(9, OrderKind::Neutral).unwrap();
        car.advance(Tick(1), &mut NoopObserver);
        car.advance(Tick(25), &mut NoopObserver);
        assert_eq!(car.floor(), Floor(3));

        car.emergency_stop(Tick(25), &mut NoopObserver);
        for t in 26..500 {
            car.advance(Tick(t), &mut NoopObserver);
        }
        // The step already under way completes, then the car parks.
        assert_eq!(car.floor(), Floor(4));
        assert_eq!(car.motion(), Motion::Parked);
        assert_eq!(car.state(), DirectionState::EmergencyStopped);
    }

    #[test]
    fn emergency_stop_closes_open_doors() {
        let mut car = Car::new(ten_floors()).unwrap();
        car.add_order(2, OrderKind::Neutral).unwrap();
        car.add_order(5, OrderKind::Neutral).unwrap();
        car.advance(Tick(1), &mut NoopObserver);
        car.advance(Tick(11), &mut NoopObserver);
        assert!(matches!(car.motion(), Motion::DoorsOpen { .. }));

        car.emergency_stop(Tick(12), &mut NoopObserver);
        assert_eq!(car.motion(), Motion::Parked);
        car.advance(Tick(1_000), &mut NoopObserver);
        assert_eq!(car.floor(), Floor(2));
    }

    #[test]
    fn orders_accepted_while_stopped_are_dropped_on_reset() {
        let mut car = Car::new(ten_floors()).unwrap();
        car.emergency_stop(Tick(0), &mut NoopObserver);
        car.add_order(6, OrderKind::Neutral).unwrap();
        for t in 1..100 {
            car.advance(Tick(t), &mut NoopObserver);
        }
        assert_eq!(car.floor(), Floor(1), "a stopped car does not move");

        assert!(car.reset(Tick(100), &mut NoopObserver));
        assert_eq!(car.state(), DirectionState::Idle);
        assert!(car.orders().is_empty());
    }

    #[test]
    fn reset_only_leaves_emergency_stop() {
        let mut car = car_at(5, DirectionState::MovingUp, busy_orders());
        assert!(!car.reset(Tick(0), &mut NoopObserver));
        assert_eq!(car.state(), DirectionState::MovingUp);
        assert_eq!(car.orders().len(), 9);
    }

    #[test]
    fn service_resumes_after_reset() {
        let mut car = Car::new(ten_floors()).unwrap();
        car.emergency_stop(Tick(0), &mut NoopObserver);
        car.reset(Tick(1), &mut NoopObserver);
        car.add_order(4, OrderKind::Down).unwrap();
        run_to_rest(&mut car, &mut NoopObserver);
        assert_eq!(car.floor(), Floor(4));
    }

    #[test]
    fn invalid_config_is_rejected() {
        let config = CarConfig { floor_travel_secs: 0, ..ten_floors() };
        assert!(Car::new(config).is_err());
    }
}

// ── Stop policy ───────────────────────────────────────────────────────────────

#[cfg(test)]
mod policy {
    use super::*;
    use crate::policy::{orders_served_at, serves_en_route, sweep_end, sweep_finished};

    #[test]
    fn en_route_kinds() {
        assert!(serves_en_route(OrderKind::Neutral, Heading::Up));
        assert!(serves_en_route(OrderKind::Neutral, Heading::Down));
        assert!(serves_en_route(OrderKind::Up, Heading::Up));
        assert!(!serves_en_route(OrderKind::Up, Heading::Down));
        assert!(serves_en_route(OrderKind::Down, Heading::Down));
    }

    #[test]
    fn mid_sweep_opposite_call_is_passed() {
        let orders = busy_orders();
        assert_eq!(orders_served_at(&orders, Heading::Up, Floor(3)), vec![OrderKind::Neutral]);
        assert_eq!(
            orders_served_at(&orders, Heading::Down, Floor(5)),
            vec![OrderKind::Down],
        );
    }

    #[test]
    fn sweep_end_serves_opposite_call() {
        let orders = busy_orders();
        assert_eq!(orders_served_at(&orders, Heading::Up, Floor(10)), vec![OrderKind::Down]);
        assert_eq!(orders_served_at(&orders, Heading::Down, Floor(1)), vec![OrderKind::Up]);
    }

    #[test]
    fn sweep_end_falls_back_to_current() {
        let empty = OrderRegistry::new();
        assert_eq!(sweep_end(&empty, Heading::Up, Floor(4)), Floor(4));
        assert!(sweep_finished(&empty, Heading::Down, Floor(4)));
    }

    #[test]
    fn finished_once_past_the_extreme() {
        let orders = OrderRegistry::from_floors([], [], [3, 6]);
        assert!(!sweep_finished(&orders, Heading::Up, Floor(5)));
        assert!(sweep_finished(&orders, Heading::Up, Floor(6)));
        assert!(!sweep_finished(&orders, Heading::Down, Floor(4)));
        assert!(sweep_finished(&orders, Heading::Down, Floor(3)));
    }
}

// ── Estimator ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod estimator {
    use super::*;
    use crate::{estimate, estimate_breakdown, Estimate};

    #[test]
    fn behind_an_up_sweep() {
        let orders = OrderRegistry::from_floors([2, 3, 7], [3, 5], [3, 4, 5]);
        let e = estimate_breakdown(&ten_floors(), Floor(6), DirectionState::MovingUp, &orders, 2).unwrap();
        assert_eq!(e, Estimate { floors_travelled: 6, stops_encountered: 6 });
        assert_eq!(e.seconds(&ten_floors()), 6 + 6 * 3);
    }

    #[test]
    fn behind_a_down_sweep() {
        let orders = OrderRegistry::from_floors([2, 3, 5], [3, 7], [3, 4, 5]);
        let secs = estimate(&ten_floors(), Floor(6), DirectionState::MovingDown, &orders, 8).unwrap();
        assert_eq!(secs, 10 + 7 * 3);
    }

    #[test]
    fn ahead_of_a_down_sweep() {
        // carCall ∪ hallDown in [2, 6]: 3, 4, 5 and 3 again.
        let orders = OrderRegistry::from_floors([2, 3, 5], [3, 7], [3, 4, 5]);
        let e = estimate_breakdown(&ten_floors(), Floor(6), DirectionState::MovingDown, &orders, 2).unwrap();
        assert_eq!(e, Estimate { floors_travelled: 4, stops_encountered: 4 });
    }

    #[test]
    fn idle_is_a_straight_trip() {
        let secs = estimate(&ten_floors(), Floor(2), DirectionState::Idle, &busy_orders(), 9).unwrap();
        assert_eq!(secs, 7);
        let secs = estimate(&ten_floors(), Floor(9), DirectionState::EmergencyStopped, &busy_orders(), 2).unwrap();
        assert_eq!(secs, 7);
    }

    #[test]
    fn current_floor_is_zero() {
        for state in [DirectionState::Idle, DirectionState::MovingUp, DirectionState::MovingDown] {
            let secs = estimate(&ten_floors(), Floor(5), state, &busy_orders(), 5).unwrap();
            assert_eq!(secs, 0);
        }
    }

    #[test]
    fn out_of_range_target_fails() {
        let err = estimate(&ten_floors(), Floor(5), DirectionState::Idle, &busy_orders(), 11).unwrap_err();
        assert!(err.is_invalid_floor());
        assert_eq!(err.to_string(), "Floor must be between 1 and 10");
    }

    #[test]
    fn estimate_does_not_mutate() {
        let car = car_at(6, DirectionState::MovingUp, busy_orders());
        let before = car.snapshot();
        let _ = car.estimated_time(2).unwrap();
        let _ = car.estimate_breakdown(9).unwrap();
        assert_eq!(car.snapshot(), before);
        assert_eq!(car.orders(), &busy_orders());
    }
}
