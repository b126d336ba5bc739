//! Integration tests for lift-sim.

use lift_core::{
    CAR_CAPACITY, Client, ClientId, Direction, DispatchMode, ElevatorId, FloorId, GROUND,
    SimConfig, SimTime, Zone,
};
use lift_schedule::{
    Arrival, ArrivalTable, Event, EventKind, HourlyArrivals, ScheduleError, ScriptedArrivals,
};

use crate::{DayMetrics, NoopObserver, ServiceBuckets, Sim, SimBuilder, SimError, SimObserver, run_days};

// ── Helpers ───────────────────────────────────────────────────────────────────

/// Opening time of the default config.
const T0: SimTime = SimTime::from_hms(6, 0, 0);

fn f(n: u8) -> FloorId {
    FloorId(n)
}

/// On-demand config with breakdowns switched off.
fn quiet_config() -> SimConfig {
    SimConfig { stuck_probability: 0.0, ..SimConfig::default() }
}

/// Every car sticks at its first door opening and is repaired after exactly
/// `repair` seconds.
fn stuck_config(repair: u64) -> SimConfig {
    SimConfig { stuck_probability: 1.0, repair_secs: repair..=repair, ..SimConfig::default() }
}

fn trip(at: u64, origin: u8, destination: u8) -> Arrival {
    Arrival { time: T0 + at, origin: f(origin), destination: f(destination) }
}

fn scripted(config: SimConfig, arrivals: Vec<Arrival>) -> Sim<ScriptedArrivals> {
    SimBuilder::new(config, ScriptedArrivals::new(arrivals).unwrap())
        .build()
        .unwrap()
}

fn hourly(config: SimConfig, day: u32) -> Sim<HourlyArrivals> {
    SimBuilder::new(config, HourlyArrivals::new(ArrivalTable::default()).unwrap())
        .day(day)
        .build()
        .unwrap()
}

/// Records every observer callback.
#[derive(Default)]
struct Recorder {
    events:     Vec<(SimTime, EventKind, Option<ElevatorId>)>,
    /// (rider, car, drop time)
    delivered:  Vec<(Client, ElevatorId, SimTime)>,
    swaps:      Vec<(Client, ElevatorId)>,
    abandoned:  Vec<ClientId>,
    breakdowns: Vec<(ElevatorId, SimTime)>,
    day_end:    Option<DayMetrics>,
}

impl SimObserver for Recorder {
    fn on_event(&mut self, event: &Event) {
        self.events.push((event.time, event.kind, event.elevator));
    }
    fn on_delivered(&mut self, client: &Client, car: ElevatorId, now: SimTime) {
        self.delivered.push((client.clone(), car, now));
    }
    fn on_swap(&mut self, client: &Client, car: ElevatorId, _now: SimTime) {
        self.swaps.push((client.clone(), car));
    }
    fn on_abandoned(&mut self, client: &Client, _now: SimTime) {
        self.abandoned.push(client.id);
    }
    fn on_breakdown(&mut self, car: ElevatorId, _floor: FloorId, repair_at: SimTime) {
        self.breakdowns.push((car, repair_at));
    }
    fn on_day_end(&mut self, metrics: &DayMetrics) {
        self.day_end = Some(metrics.clone());
    }
}

/// Riders created today equal riders delivered, abandoned, still waiting, or
/// still aboard.
fn assert_conserved<G: lift_schedule::ArrivalGenerator>(sim: &Sim<G>, m: &DayMetrics) {
    let aboard: usize = sim.elevators.iter().map(|c| c.onboard.len()).sum();
    assert_eq!(
        sim.next_client as u64,
        m.delivered + m.abandoned + m.waiting_at_close + aboard as u64,
    );
}

// ── SimBuilder ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod builder_tests {
    use super::*;

    #[test]
    fn lays_out_building() {
        let sim = scripted(quiet_config(), vec![trip(0, 0, 10)]);
        assert_eq!(sim.floors.len(), 26);
        assert_eq!(sim.elevators.len(), 4);
        for (slot, car) in sim.elevators.iter().enumerate() {
            assert_eq!(car.id.slot(), slot);
            assert_eq!(car.floor, GROUND);
            assert!(car.moving_up);
        }
        assert_eq!(sim.clock.now, T0);
    }

    #[test]
    fn door_openings_queued_before_first_arrival() {
        let sim = scripted(quiet_config(), vec![trip(0, 0, 10)]);
        let kinds: Vec<EventKind> = sim.queue.iter().map(|e| e.kind).collect();
        assert_eq!(
            kinds,
            vec![
                EventKind::DoorOpen,
                EventKind::DoorOpen,
                EventKind::DoorOpen,
                EventKind::DoorOpen,
                EventKind::Arrival,
            ]
        );
        assert!(sim.queue.iter().all(|e| e.time == T0));
    }

    #[test]
    fn empty_generator_still_runs_cars() {
        let sim = scripted(quiet_config(), vec![]);
        assert_eq!(sim.queue.len(), 4);
    }

    #[test]
    fn invalid_config_rejected() {
        let config = SimConfig { close: T0, ..SimConfig::default() };
        let result = SimBuilder::new(config, ScriptedArrivals::default()).build();
        assert!(matches!(result, Err(SimError::Config(_))));

        let config = SimConfig { stuck_probability: 1.5, ..SimConfig::default() };
        let result = SimBuilder::new(config, ScriptedArrivals::default()).build();
        assert!(matches!(result, Err(SimError::Config(_))));
    }

    #[test]
    fn free_running_cars_start_inside_their_zone() {
        let config = quiet_config().with_mode(DispatchMode::FreeRunning);
        for day in 0..20 {
            let sim = hourly(config.clone(), day);
            for car in &sim.elevators {
                assert!(car.serves(car.floor), "{} placed at {}", car.id, car.floor);
                if car.floor == car.zone.top() {
                    assert!(!car.moving_up);
                }
            }
        }
    }

    #[test]
    fn placement_is_reproducible() {
        let config = quiet_config().with_mode(DispatchMode::FreeRunning);
        let a: Vec<FloorId> = hourly(config.clone(), 7).elevators.iter().map(|c| c.floor).collect();
        let b: Vec<FloorId> = hourly(config, 7).elevators.iter().map(|c| c.floor).collect();
        assert_eq!(a, b);
    }
}

// ── Event loop ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod loop_tests {
    use super::*;

    #[test]
    fn clock_never_moves_backwards() {
        let mut sim = hourly(SimConfig::default(), 0);
        let mut obs = Recorder::default();
        sim.run(&mut obs).unwrap();
        assert!(obs.events.windows(2).all(|w| w[0].0 <= w[1].0));
        assert!(obs.events.iter().all(|e| e.0 <= sim.clock.close));
    }

    #[test]
    fn step_returns_none_past_close() {
        let mut sim = scripted(quiet_config(), vec![]);
        let handled = sim.run_until(sim.clock.close, &mut NoopObserver);
        assert!(handled > 0);
        assert!(sim.step(&mut NoopObserver).is_none());
        assert!(!sim.queue.is_empty(), "cars keep cycling past closing time");
    }

    #[test]
    fn run_until_stops_at_time() {
        let mut sim = scripted(quiet_config(), vec![trip(0, 0, 10)]);
        let handled = sim.run_until(T0, &mut NoopObserver);
        assert_eq!(handled, 5);
        assert_eq!(sim.clock.now, T0);
        assert!(sim.queue.next_time().is_some_and(|t| t > T0));
    }

    #[test]
    fn day_runs_once() {
        let mut sim = scripted(quiet_config(), vec![]);
        sim.run(&mut NoopObserver).unwrap();
        assert!(matches!(sim.run(&mut NoopObserver), Err(SimError::DayFinished(0))));
    }

    #[test]
    fn same_seed_same_day() {
        let a = hourly(SimConfig::default(), 3).run(&mut NoopObserver).unwrap();
        let b = hourly(SimConfig::default(), 3).run(&mut NoopObserver).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn on_demand_day_accounts_for_every_rider() {
        let mut sim = hourly(SimConfig::default(), 1);
        let mut obs = Recorder::default();
        let m = sim.run(&mut obs).unwrap();
        assert!(m.delivered > 0);
        assert_eq!(m.service.total(), m.delivered);
        assert_eq!(obs.delivered.len() as u64, m.delivered);
        assert_eq!(obs.abandoned.len() as u64, m.abandoned);
        assert_eq!(obs.swaps.len() as u64, m.swaps);
        assert_eq!(obs.day_end.as_ref(), Some(&m));
        assert_conserved(&sim, &m);
    }

    #[test]
    fn free_running_day_delivers_and_swaps() {
        let mut sim = hourly(SimConfig::default().with_mode(DispatchMode::FreeRunning), 1);
        let m = sim.run(&mut NoopObserver).unwrap();
        assert_eq!(m.mode, DispatchMode::FreeRunning);
        assert!(m.delivered > 0);
        assert!(m.swaps > 0);
        assert_conserved(&sim, &m);
    }

    #[test]
    fn occupancy_is_bounded_by_capacity() {
        let m = hourly(SimConfig::default(), 2).run(&mut NoopObserver).unwrap();
        for occ in m.occupancy {
            assert!((0.0..=CAR_CAPACITY as f64).contains(&occ));
        }
        assert!(m.occupancy.iter().any(|&o| o > 0.0));
    }
}

// ── Properties ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod property_tests {
    use super::*;

    #[test]
    fn swap_flag_matches_zones() {
        for origin in 0..26u8 {
            for dest in 0..26u8 {
                if origin == dest {
                    continue;
                }
                let c = Client::new(ClientId(0), f(origin), f(dest), T0);
                let expected = match (Zone::of(f(origin)), Zone::of(f(dest))) {
                    (Some(a), Some(b)) => a != b,
                    _ => false,
                };
                assert_eq!(c.need_swap, expected, "{origin} → {dest}");
            }
        }
    }

    #[test]
    fn cars_never_exceed_capacity() {
        let crowd: Vec<Arrival> = (0..40).map(|_| trip(0, 0, 10)).collect();
        let mut sim = scripted(quiet_config(), crowd);
        let mut max_aboard = 0;
        while sim.step(&mut NoopObserver).is_some() {
            for car in &sim.elevators {
                assert!(car.onboard.len() <= CAR_CAPACITY);
                max_aboard = max_aboard.max(car.onboard.len());
            }
        }
        assert_eq!(max_aboard, CAR_CAPACITY);
        let m = sim.run(&mut NoopObserver).unwrap();
        assert_eq!(m.delivered, 40);
        assert_eq!(m.abandoned, 0);
    }

    #[test]
    fn service_time_is_drop_minus_arrival() {
        let mut sim = hourly(SimConfig::default(), 4);
        let mut obs = Recorder::default();
        let m = sim.run(&mut obs).unwrap();
        let mut buckets = ServiceBuckets::default();
        for (client, _, dropped_at) in &obs.delivered {
            assert!(*dropped_at >= client.arrival_time);
            assert_eq!(client.current_floor, client.desired_floor);
            buckets.record(dropped_at.since(client.arrival_time));
        }
        assert_eq!(buckets, m.service);
    }

    #[test]
    fn abandoned_riders_never_delivered() {
        // Heavy breakdowns make riders give up.
        let config = SimConfig { stuck_probability: 0.1, ..SimConfig::default() };
        let mut sim = hourly(config, 5);
        let mut obs = Recorder::default();
        let m = sim.run(&mut obs).unwrap();
        assert!(m.abandoned > 0);
        for (client, _, _) in &obs.delivered {
            assert!(!obs.abandoned.contains(&client.id));
        }
        let mut unique = obs.abandoned.clone();
        unique.sort();
        unique.dedup();
        assert_eq!(unique.len(), obs.abandoned.len(), "abandoned twice");
        assert_conserved(&sim, &m);
    }

    #[test]
    fn nobody_waits_past_threshold_at_close() {
        let config = SimConfig { stuck_probability: 0.1, ..SimConfig::default() };
        let mut sim = hourly(config, 6);
        sim.run(&mut NoopObserver).unwrap();
        let close = sim.clock.close;
        for floor in &sim.floors {
            for client in floor.waiting() {
                assert!(!client.has_abandoned(close, sim.config.abandon_after_secs));
            }
        }
    }
}

// ── Scenarios ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod scenario_tests {
    use super::*;

    #[test]
    fn single_rider_to_floor_ten() {
        let mut sim = scripted(quiet_config(), vec![trip(0, 0, 10)]);
        let mut obs = Recorder::default();
        let m = sim.run(&mut obs).unwrap();

        assert_eq!(obs.delivered.len(), 1);
        let (client, car, dropped_at) = &obs.delivered[0];
        assert_eq!(*car, ElevatorId(1));
        assert_eq!(client.current_floor, f(10));
        // dwell + door cycle + 10 floors
        assert_eq!(dropped_at.since(client.arrival_time), 5 + 4 + 10);
        assert_eq!(m.service.0[0], 1);
        assert_eq!(m.abandoned, 0);
        assert_eq!(m.delivered, 1);
    }

    #[test]
    fn cross_zone_rider_changes_cars_at_ground() {
        let mut sim = scripted(quiet_config(), vec![trip(60, 5, 20)]);
        let mut obs = Recorder::default();
        let m = sim.run(&mut obs).unwrap();

        assert_eq!(obs.swaps.len(), 1);
        let (swapped, first_car) = &obs.swaps[0];
        assert_eq!(swapped.current_floor, GROUND);
        assert_eq!(swapped.direction, Direction::Up);
        assert_eq!(Zone::of_elevator(*first_car), Zone::Low);

        assert_eq!(obs.delivered.len(), 1);
        let (delivered, second_car, _) = &obs.delivered[0];
        assert_eq!(delivered.origin, f(5));
        assert_eq!(delivered.current_floor, f(20));
        assert!(delivered.need_swap);
        assert_eq!(Zone::of_elevator(*second_car), Zone::High);
        assert_eq!(m.swaps, 1);
        assert_eq!(m.abandoned, 0);
    }

    #[test]
    fn rider_at_open_car_calls_nothing() {
        // All four cars stand at the ground floor with doors open at 06:00.
        let mut sim = scripted(quiet_config(), vec![trip(0, 0, 10)]);
        sim.run_until(T0, &mut NoopObserver);
        assert_eq!(sim.floors[0].len(), 1);
        assert!(sim.elevators.iter().all(|c| c.queues.is_empty()));

        let mut obs = Recorder::default();
        while let Some(event) = sim.step(&mut obs) {
            if event.kind == EventKind::DoorClose && event.elevator == Some(ElevatorId(1)) {
                break;
            }
        }
        assert_eq!(sim.elevators[0].onboard.len(), 1);
        assert_eq!(sim.floors[0].len(), 0);
    }

    #[test]
    fn rider_away_from_cars_calls_one() {
        let mut sim = scripted(quiet_config(), vec![trip(0, 3, 9)]);
        sim.run_until(T0, &mut NoopObserver);
        let called: Vec<usize> = (0..4).filter(|&i| !sim.elevators[i].queues.is_empty()).collect();
        assert_eq!(called, vec![0]);
        assert!(sim.elevators[0].queues.up.contains(&f(3)));
        assert!(sim.elevators[0].queues.up.contains(&f(9)));
    }

    #[test]
    fn full_car_calls_another_for_riders_left_behind() {
        let mut sim = scripted(quiet_config(), vec![]);
        sim.elevators[0].floor = f(3);
        for id in 0..CAR_CAPACITY as u32 + 3 {
            sim.floors[3].enqueue(Client::new(ClientId(id), f(3), f(9), T0));
        }

        while let Some(event) = sim.step(&mut NoopObserver) {
            if event.kind == EventKind::DoorClose && event.elevator == Some(ElevatorId(1)) {
                break;
            }
        }
        assert_eq!(sim.elevators[0].onboard.len(), CAR_CAPACITY);
        assert_eq!(sim.floors[3].len(), 3);
        // Car 2, still at the ground floor, now owes floor 3 a stop.
        assert!(sim.elevators[1].queues.up.contains(&f(3)));
        assert!(sim.elevators[1].queues.up.contains(&f(9)));
        assert!(sim.elevators[2..].iter().all(|c| c.queues.is_empty()));
    }

    #[test]
    fn wait_of_exactly_threshold_still_boards() {
        // Cars stick at 06:00:00, reopen at +895 and close at +900.
        let mut sim = scripted(stuck_config(895), vec![trip(0, 0, 5)]);
        sim.run_until(T0, &mut NoopObserver);
        sim.config.stuck_probability = 0.0;
        let mut obs = Recorder::default();
        let m = sim.run(&mut obs).unwrap();
        assert_eq!(m.abandoned, 0);
        assert_eq!(m.delivered, 1);
        assert_eq!(obs.delivered[0].0.wait_secs, 900);
    }

    #[test]
    fn wait_past_threshold_abandons() {
        let mut sim = scripted(stuck_config(896), vec![trip(0, 0, 5)]);
        sim.run_until(T0, &mut NoopObserver);
        sim.config.stuck_probability = 0.0;
        let mut obs = Recorder::default();
        let m = sim.run(&mut obs).unwrap();
        assert_eq!(m.abandoned, 1);
        assert_eq!(m.delivered, 0);
        assert_eq!(obs.abandoned, vec![ClientId(0)]);
        assert!(sim.elevators.iter().all(|c| c.onboard.is_empty()));
    }

    #[test]
    fn stuck_car_holds_doors_until_repaired() {
        let mut sim = scripted(stuck_config(300), vec![trip(0, 0, 5), trip(0, 0, 8)]);
        let mut obs = Recorder::default();
        sim.run_until(T0, &mut obs);
        assert_eq!(obs.breakdowns.len(), 4);
        assert!(sim.elevators.iter().all(|c| c.stuck));
        assert_eq!(sim.floors[0].len(), 2);
        sim.config.stuck_probability = 0.0;

        let mut repaired = false;
        loop {
            let waiting = sim.floors[0].len();
            let event = sim.step(&mut obs).unwrap();
            let car_one = event.elevator == Some(ElevatorId(1));
            match event.kind {
                EventKind::ElevatorFix if car_one => {
                    assert_eq!(event.time, T0 + 300);
                    repaired = true;
                }
                EventKind::DoorClose if car_one => {
                    assert!(repaired, "doors closed on a stuck car");
                    assert_eq!(waiting, 2, "riders left the line before boarding");
                    break;
                }
                EventKind::DoorClose => panic!("another car closed its doors first"),
                _ => {}
            }
        }

        let aboard: Vec<FloorId> = sim.elevators[0].onboard.iter().map(|c| c.desired_floor).collect();
        assert_eq!(aboard, vec![f(5), f(8)]);
        assert_eq!(sim.metrics.abandoned, 0);
        assert_eq!(sim.metrics.breakdowns, 4);
    }
}

// ── Metrics and multi-day runs ────────────────────────────────────────────────

#[cfg(test)]
mod metrics_tests {
    use super::*;

    #[test]
    fn bucket_boundaries() {
        assert_eq!(ServiceBuckets::bucket_of(0), 0);
        assert_eq!(ServiceBuckets::bucket_of(60), 0);
        assert_eq!(ServiceBuckets::bucket_of(61), 1);
        assert_eq!(ServiceBuckets::bucket_of(240), 3);
        assert_eq!(ServiceBuckets::bucket_of(300), 4);
        assert_eq!(ServiceBuckets::bucket_of(301), 5);
        assert_eq!(ServiceBuckets::bucket_of(10_000), 5);
    }

    #[test]
    fn mean_wait_over_delivered_riders() {
        let mut m = DayMetrics::new(0, DispatchMode::OnDemand);
        m.record_delivery(30, 10);
        m.record_delivery(90, 40);
        m.close();
        assert_eq!(m.delivered, 2);
        assert_eq!(m.service.0[0], 1);
        assert_eq!(m.service.0[1], 1);
        assert!((m.mean_wait_secs - 25.0).abs() < 1e-9);
    }

    #[test]
    fn empty_day_has_zero_mean_wait() {
        let m = scripted(quiet_config(), vec![]).run(&mut NoopObserver).unwrap();
        assert_eq!(m.delivered, 0);
        assert_eq!(m.mean_wait_secs, 0.0);
    }

    #[test]
    fn run_days_in_day_order() {
        let config = SimConfig::default();
        let days = run_days(&config, 3, |_| HourlyArrivals::new(ArrivalTable::default())).unwrap();
        assert_eq!(days.iter().map(|d| d.day).collect::<Vec<_>>(), vec![0, 1, 2]);
        let single = hourly(config, 1).run(&mut NoopObserver).unwrap();
        assert_eq!(days[1], single);
    }

    #[test]
    fn run_days_reports_generator_errors() {
        let result = run_days(&SimConfig::default(), 2, |_| {
            Err::<HourlyArrivals, _>(ScheduleError::Parse("bad table".into()))
        });
        assert!(matches!(result, Err(SimError::Schedule(_))));
    }
}
