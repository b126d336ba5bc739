//! One elevator car.
//!
//! # Position model
//!
//! `floor` is where the car last stopped. Between a DoorClose and the
//! following DoorOpen it is the floor the car is travelling to.  A travel step moves
//! the car in one go and returns how long the trip takes; the caller
//! schedules the arrival.
//!
//! # Occupancy accounting
//!
//! The roster only changes at door events.  Call
//! [`settle_occupancy`][Elevator::settle_occupancy] before every roster change
//! so that `occupancy_area` holds the exact rider-seconds carried so far.

use lift_core::{
    CAR_CAPACITY, Client, Direction, DispatchMode, ElevatorId, FloorId, GROUND, SimConfig,
    SimTime, Zone,
};

use crate::sweep::{SweepQueues, reload};

#[derive(Clone, Debug)]
pub struct Elevator {
    pub id:        ElevatorId,
    pub zone:      Zone,
    pub floor:     FloorId,
    pub moving_up: bool,
    pub doors_open: bool,
    pub stuck:     bool,

    /// Riders aboard, in boarding order.  Never longer than `CAR_CAPACITY`;
    /// the floor-side boarding logic enforces that.
    pub onboard: Vec<Client>,

    pub queues: SweepQueues,

    /// Rider-seconds carried since opening.
    pub occupancy_area: u64,
    last_settled:       SimTime,

    /// Times this car has been stuck today.
    pub breakdowns: u32,
}

impl Elevator {
    /// A car at `floor` at time `now`, doors closed, no requests.
    pub fn new(id: ElevatorId, floor: FloorId, moving_up: bool, now: SimTime) -> Self {
        Self {
            id,
            zone: Zone::of_elevator(id),
            floor,
            moving_up,
            doors_open: false,
            stuck: false,
            onboard: Vec::with_capacity(CAR_CAPACITY),
            queues: SweepQueues::new(),
            occupancy_area: 0,
            last_settled: now,
            breakdowns: 0,
        }
    }

    /// `true` if this car stops at `floor`.
    #[inline]
    pub fn serves(&self, floor: FloorId) -> bool {
        self.zone.serves(floor)
    }

    /// Seats left.
    #[inline]
    pub fn free_space(&self) -> usize {
        CAR_CAPACITY.saturating_sub(self.onboard.len())
    }

    /// Queue a stop at `floor` for travel in `dir`.
    #[inline]
    pub fn request(&mut self, floor: FloorId, dir: Direction) {
        self.queues.request(floor, dir, self.floor, self.moving_up);
    }

    /// Take `clients` aboard at `now`.
    ///
    /// On demand, each rider presses the button for its destination, or for
    /// the ground floor if the destination lies in the other zone.
    pub fn board(&mut self, clients: Vec<Client>, now: SimTime, mode: DispatchMode) {
        debug_assert!(self.onboard.len() + clients.len() <= CAR_CAPACITY);
        for mut client in clients {
            client.board(now);
            if mode == DispatchMode::OnDemand {
                if self.moving_up {
                    self.request(client.desired_floor, Direction::Up);
                } else if self.serves(client.desired_floor) {
                    self.request(client.desired_floor, Direction::Down);
                } else {
                    self.request(GROUND, Direction::Down);
                }
            }
            self.onboard.push(client);
        }
    }

    /// Fold rider-seconds up to `now` into `occupancy_area`.
    pub fn settle_occupancy(&mut self, now: SimTime) {
        self.occupancy_area += self.onboard.len() as u64 * now.since(self.last_settled);
        self.last_settled = self.last_settled.max(now);
    }

    /// Time-averaged number of riders over a window of `window_secs`.
    pub fn mean_occupancy(&self, window_secs: u64) -> f64 {
        if window_secs == 0 {
            return 0.0;
        }
        self.occupancy_area as f64 / window_secs as f64
    }

    /// Operational → Stuck.
    pub fn break_down(&mut self) {
        self.stuck = true;
        self.breakdowns += 1;
    }

    /// Stuck → Operational.
    pub fn repair(&mut self) {
        self.stuck = false;
    }

    /// The car has arrived at `floor`: clear the call it answers there.
    pub fn arrive(&mut self) {
        self.queues.clear_answered(self.floor, self.moving_up);
    }

    /// Move to the next stop and return the trip time in seconds.
    ///
    /// Riders aboard accumulate the trip time as transit time.
    pub fn travel(&mut self, config: &SimConfig) -> u64 {
        let secs = match config.mode {
            DispatchMode::FreeRunning => self.step_free_running(config),
            DispatchMode::OnDemand    => self.step_on_demand(config),
        };
        for client in &mut self.onboard {
            client.ride(secs);
        }
        secs
    }

    // ── Travel modes ──────────────────────────────────────────────────────

    /// One floor toward the end of the zone; the ground ↔ high-zone leg is a
    /// single non-stop hop.
    fn step_free_running(&mut self, config: &SimConfig) -> u64 {
        let next = match self.zone.step(self.floor, self.moving_up) {
            Some(f) => f,
            None => {
                self.moving_up = !self.moving_up;
                // A zone spans at least two floors, so the reverse step exists.
                self.zone.step(self.floor, self.moving_up).unwrap_or(self.floor)
            }
        };
        let secs = if self.floor.distance(next) > 1 { config.skip_leg_secs } else { config.floor_secs };
        self.floor = next;
        self.flip_at_ends();
        secs
    }

    fn step_on_demand(&mut self, config: &SimConfig) -> u64 {
        let from = self.floor;
        let next = self.next_stop();
        self.floor = next;
        if self.flip_at_ends() {
            self.queues.roll_over(self.moving_up);
        }
        config.base_door_cycle_secs + from.distance(next)
    }

    /// Pick the next on-demand stop, updating direction and queues.
    fn next_stop(&mut self) -> FloorId {
        self.moving_up = reload(&mut self.queues, self.moving_up);
        if let Some(next) = self.queues.pop_next(self.moving_up) {
            return next;
        }
        if self.floor == GROUND {
            // Nothing to do at the ground floor: run up the zone and sweep
            // back down through every floor.
            self.queues.load_default_sweep(self.zone);
            self.moving_up = true;
            self.zone.top()
        } else {
            self.moving_up = false;
            GROUND
        }
    }

    /// Reverse at the top of the zone or at the ground floor.  Returns `true`
    /// if the direction changed.
    fn flip_at_ends(&mut self) -> bool {
        let flip = (self.moving_up && self.floor == self.zone.top())
            || (!self.moving_up && self.floor == GROUND);
        if flip {
            self.moving_up = !self.moving_up;
        }
        flip
    }
}
