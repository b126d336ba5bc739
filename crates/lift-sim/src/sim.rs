//! The `Sim` struct and its event loop.

use lift_building::{Elevator, Floor, order_elevator};
use lift_core::{
    Client, ClientId, Direction, DispatchMode, ElevatorId, FLOOR_COUNT, FloorId, GROUND,
    SimClock, SimConfig, SimRng, SimTime,
};
use lift_schedule::{Arrival, ArrivalGenerator, Event, EventKind, EventQueue};
use tracing::{debug, info, trace};

use crate::{DayMetrics, SimError, SimObserver, SimResult};

/// One operating day of the building.
///
/// `Sim<G>` owns every piece of mutable state: the clock, the event queue,
/// the 26 floors and 4 cars, the day's RNG and the arrival generator.  Events
/// are handled one at a time, in time order, each handler running to
/// completion before the next event is popped:
///
/// | Event         | Handler        | Schedules                              |
/// |---------------|----------------|----------------------------------------|
/// | `Arrival`     | `arriving`     | the next arrival                       |
/// | `DoorOpen`    | `door_open`    | `DoorClose` after the dwell, or `ElevatorFix` |
/// | `DoorClose`   | `door_close`   | `DoorOpen` at the next stop            |
/// | `ElevatorFix` | `elevator_fix` | `DoorOpen` at the same floor           |
///
/// Create via [`SimBuilder`][crate::SimBuilder].
pub struct Sim<G: ArrivalGenerator> {
    pub config: SimConfig,

    /// Day number; selects the RNG stream.
    pub day: u32,

    pub clock: SimClock,

    /// Pending events, earliest first, FIFO among equal times.
    pub queue: EventQueue,

    /// Indexed by floor number.
    pub floors: Vec<Floor>,

    /// Indexed by car slot (`ElevatorId::slot`).
    pub elevators: Vec<Elevator>,

    /// Running totals; finalised by [`run`][Sim::run].
    pub metrics: DayMetrics,

    pub rng: SimRng,

    pub generator: G,

    pub(crate) next_client: u32,
    pub(crate) finished:    bool,
}

impl<G: ArrivalGenerator> Sim<G> {
    // ── Public API ────────────────────────────────────────────────────────

    /// Run the day to closing time, then sweep out riders who gave up and
    /// return the day's metrics.
    ///
    /// # Errors
    /// [`SimError::DayFinished`] if the day has already been run.
    pub fn run<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<DayMetrics> {
        if self.finished {
            return Err(SimError::DayFinished(self.day));
        }
        while self.step(observer).is_some() {}
        Ok(self.finish_day(observer))
    }

    /// Handle exactly one event and return it.
    ///
    /// Returns `None` once the queue is empty or its next event lies past
    /// closing time.
    pub fn step<O: SimObserver>(&mut self, observer: &mut O) -> Option<Event> {
        let next = self.queue.next_time()?;
        if self.finished || self.clock.is_after_close(next) {
            return None;
        }
        let event = self.queue.pop()?;
        self.clock.advance_to(event.time);
        trace!(%event, "event");

        match event.kind {
            EventKind::Arrival => {
                if let Some(client) = event.client.clone() {
                    self.arriving(client);
                }
            }
            EventKind::DoorOpen    => self.with_car(&event, |sim, slot| sim.door_open(slot, observer)),
            EventKind::DoorClose   => self.with_car(&event, |sim, slot| sim.door_close(slot, observer)),
            EventKind::ElevatorFix => self.with_car(&event, |sim, slot| sim.elevator_fix(slot)),
        }

        observer.on_event(&event);
        Some(event)
    }

    /// Handle every event scheduled at or before `t`.  Returns how many were
    /// handled.
    pub fn run_until<O: SimObserver>(&mut self, t: SimTime, observer: &mut O) -> usize {
        let mut handled = 0;
        while self.queue.next_time().is_some_and(|next| next <= t) {
            if self.step(observer).is_none() {
                break;
            }
            handled += 1;
        }
        handled
    }

    /// Riders currently in any waiting line.
    pub fn waiting(&self) -> usize {
        self.floors.iter().map(Floor::len).sum()
    }

    /// The car with this id, if it exists.
    pub fn elevator(&self, id: ElevatorId) -> Option<&Elevator> {
        self.elevators.get(id.slot())
    }

    // ── Event handlers ────────────────────────────────────────────────────

    /// A rider walks up to its origin floor.
    ///
    /// The next arrival is drawn first so that the generator sees the clock
    /// of the arrival that triggered it.  On demand, the rider then calls a
    /// car, unless a car standing here with open doors will take it at
    /// DoorClose.
    fn arriving(&mut self, client: Client) {
        let now = self.clock.now;
        if let Some(next) = self.generator.next_arrival(now, &mut self.rng) {
            debug_assert!(next.time >= now, "arrival scheduled in the past");
            if !self.clock.is_after_close(next.time) {
                let id = ClientId(self.next_client);
                self.next_client += 1;
                self.queue.push(Self::arrival_event(id, next));
            }
        }

        let floor = client.current_floor;
        if self.config.mode == DispatchMode::OnDemand && !self.car_waiting_for(&client) {
            order_elevator(&mut self.elevators, floor, client.direction, client.leg_destination());
        }
        self.floors[floor.index()].enqueue(client);
    }

    /// Doors open: let riders out, re-dispatch swapped riders, and roll for
    /// a breakdown.
    fn door_open<O: SimObserver>(&mut self, slot: usize, observer: &mut O) {
        let now = self.clock.now;
        let car = &mut self.elevators[slot];
        let floor = car.floor;
        let id = car.id;

        car.settle_occupancy(now);
        car.doors_open = true;
        car.arrive();

        let dropped = self.floors[floor.index()].drop_clients(car, now);
        for client in &dropped.delivered {
            let service = client.time_in_system(now);
            self.metrics.record_delivery(service, client.wait_secs);
            observer.on_delivered(client, id, now);
        }
        for client in &dropped.swapped {
            self.metrics.swaps += 1;
            debug!(client = client.id.0, car = id.0, to = client.desired_floor.0, "rider changing zones");
            observer.on_swap(client, id, now);
        }

        if floor == GROUND && self.config.mode == DispatchMode::OnDemand {
            for destination in self.floors[GROUND.index()].take_reorders() {
                order_elevator(&mut self.elevators, GROUND, Direction::Up, destination);
            }
        }

        if self.rng.gen_bool(self.config.stuck_probability) {
            let repair = self.rng.gen_range(self.config.repair_secs.clone());
            let repair_at = now + repair;
            let car = &mut self.elevators[slot];
            car.break_down();
            self.metrics.breakdowns += 1;
            debug!(car = id.0, floor = floor.0, %repair_at, "car stuck");
            observer.on_breakdown(id, floor, repair_at);
            self.queue.push(Event::elevator_fix(repair_at, id, floor));
        } else {
            self.queue.push(Event::door_close(now + self.config.door_dwell_secs, id, floor));
        }
    }

    /// Doors close: board whoever can go, then travel to the next stop.
    fn door_close<O: SimObserver>(&mut self, slot: usize, observer: &mut O) {
        let now = self.clock.now;
        let abandon_after = self.config.abandon_after_secs;
        let mode = self.config.mode;
        let car = &mut self.elevators[slot];
        let floor = car.floor;
        car.doors_open = false;

        let line = &mut self.floors[floor.index()];
        let outcome = line.board_clients(car, now, abandon_after);
        for client in &outcome.abandoned {
            self.metrics.abandoned += 1;
            observer.on_abandoned(client, now);
        }

        car.settle_occupancy(now);
        car.board(outcome.boarding, now, mode);

        // A full car leaves riders behind who would have boarded: call
        // another car for them before this one departs.
        let left_behind: Vec<(Direction, FloorId)> = if mode == DispatchMode::OnDemand && car.free_space() == 0 {
            line.waiting()
                .into_iter()
                .filter(|c| c.can_board(car.zone, car.moving_up))
                .map(|c| (c.direction, c.leg_destination()))
                .collect()
        } else {
            Vec::new()
        };
        for (dir, destination) in left_behind {
            order_elevator(&mut self.elevators, floor, dir, destination);
        }

        let car = &mut self.elevators[slot];
        let secs = car.travel(&self.config);
        self.queue.push(Event::door_open(now + secs, car.id, car.floor));
    }

    /// A stuck car is working again: reopen its doors where it stands.
    fn elevator_fix(&mut self, slot: usize) {
        let now = self.clock.now;
        let car = &mut self.elevators[slot];
        car.repair();
        debug!(car = car.id.0, floor = car.floor.0, "car repaired");
        self.queue.push(Event::door_open(now, car.id, car.floor));
    }

    // ── End of day ────────────────────────────────────────────────────────

    /// Closing sweep: count everyone still waiting past the threshold as
    /// abandoned, settle occupancy at closing time, and finalise metrics.
    fn finish_day<O: SimObserver>(&mut self, observer: &mut O) -> DayMetrics {
        let close = self.clock.close;
        let window = self.clock.window_secs();

        for floor in &mut self.floors {
            for client in floor.sweep_abandoned(close, self.config.abandon_after_secs) {
                self.metrics.abandoned += 1;
                observer.on_abandoned(&client, close);
            }
        }
        self.metrics.waiting_at_close = self.waiting() as u64;

        for (slot, car) in self.elevators.iter_mut().enumerate() {
            car.settle_occupancy(close);
            self.metrics.occupancy[slot] = car.mean_occupancy(window);
        }
        self.metrics.close();
        self.finished = true;

        let m = &self.metrics;
        info!(
            day        = m.day,
            mode       = m.mode.as_str(),
            delivered  = m.delivered,
            abandoned  = m.abandoned,
            swaps      = m.swaps,
            breakdowns = m.breakdowns,
            mean_wait  = m.mean_wait_secs,
            "day closed"
        );
        observer.on_day_end(m);
        m.clone()
    }

    // ── Helpers ───────────────────────────────────────────────────────────

    pub(crate) fn arrival_event(id: ClientId, arrival: Arrival) -> Event {
        debug_assert!(arrival.origin != arrival.destination);
        debug_assert!(arrival.origin.0 < FLOOR_COUNT && arrival.destination.0 < FLOOR_COUNT);
        Event::arrival(Client::new(id, arrival.origin, arrival.destination, arrival.time))
    }

    /// Run `handler` for the car named by a door or repair event.
    fn with_car(&mut self, event: &Event, handler: impl FnOnce(&mut Self, usize)) {
        match event.elevator.map(ElevatorId::slot) {
            Some(slot) if slot < self.elevators.len() => handler(self, slot),
            _ => debug_assert!(false, "car event without a valid car: {event}"),
        }
    }

    /// A working car stands at the rider's floor with its doors open, heading
    /// the rider's way, with a seat for everyone already waiting.
    fn car_waiting_for(&self, client: &Client) -> bool {
        let floor = client.current_floor;
        let waiting = self.floors[floor.index()].len();
        self.elevators.iter().any(|car| {
            car.floor == floor
                && car.doors_open
                && !car.stuck
                && client.can_board(car.zone, car.moving_up)
                && car.free_space() > waiting
        })
    }
}
