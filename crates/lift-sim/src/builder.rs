//! Fluent builder for constructing a [`Sim`].

use lift_building::{Elevator, Floor};
use lift_core::{
    ClientId, DispatchMode, ELEVATOR_COUNT, ElevatorId, FLOOR_COUNT, FloorId, GROUND, SimClock,
    SimConfig, SimRng, Zone,
};
use lift_schedule::{ArrivalGenerator, Event, EventQueue};

use crate::{DayMetrics, Sim, SimError, SimResult};

/// Fluent builder for [`Sim<G>`].
///
/// # Required inputs
///
/// - [`SimConfig`]: dispatch mode, timings, failure model, seed
/// - `G: ArrivalGenerator`: where riders come from
///
/// # Optional inputs (have defaults)
///
/// | Method      | Default |
/// |-------------|---------|
/// | `.day(d)`   | `0`     |
///
/// The day number selects the day's RNG stream, so the same `(seed, day)`
/// always replays the same day.
///
/// # Example
///
/// ```rust,ignore
/// let generator = HourlyArrivals::new(ArrivalTable::default())?;
/// let mut sim = SimBuilder::new(SimConfig::default(), generator)
///     .day(3)
///     .build()?;
/// let metrics = sim.run(&mut NoopObserver)?;
/// ```
pub struct SimBuilder<G: ArrivalGenerator> {
    config:    SimConfig,
    generator: G,
    day:       u32,
}

impl<G: ArrivalGenerator> SimBuilder<G> {
    pub fn new(config: SimConfig, generator: G) -> Self {
        Self { config, generator, day: 0 }
    }

    pub fn day(mut self, day: u32) -> Self {
        self.day = day;
        self
    }

    /// Validate the config, lay out the building, and seed the event queue
    /// with every car's first door opening and the day's first arrival.
    pub fn build(mut self) -> SimResult<Sim<G>> {
        self.config
            .validate()
            .map_err(|e| SimError::Config(e.to_string()))?;

        let open = self.config.open;
        let mut rng = SimRng::for_day(self.config.seed, self.day);

        let floors: Vec<Floor> = (0..FLOOR_COUNT).map(|n| Floor::new(FloorId(n))).collect();

        // ── Place the cars ────────────────────────────────────────────────
        //
        // On demand every car starts at the ground floor heading up.  Free
        // running cars start anywhere in their zone, heading up unless they
        // start at the top.
        let mut elevators = Vec::with_capacity(ELEVATOR_COUNT);
        for slot in 0..ELEVATOR_COUNT {
            let id = ElevatorId::from_slot(slot)?;
            let car = match self.config.mode {
                DispatchMode::OnDemand => Elevator::new(id, GROUND, true, open),
                DispatchMode::FreeRunning => {
                    let zone = Zone::of_elevator(id);
                    let floors: Vec<FloorId> = zone.service_floors().collect();
                    let floor = rng.choose(&floors).copied().unwrap_or(GROUND);
                    Elevator::new(id, floor, floor != zone.top(), open)
                }
            };
            elevators.push(car);
        }

        // ── Seed the queue ────────────────────────────────────────────────
        //
        // Door openings go in first so a rider arriving at opening time finds
        // the cars already standing with doors open.
        let mut queue = EventQueue::new();
        for car in &elevators {
            queue.push(Event::door_open(open, car.id, car.floor));
        }

        let clock = SimClock::new(open, self.config.close);
        let mut next_client = 0;
        if let Some(arrival) = self.generator.next_arrival(open, &mut rng) {
            if !clock.is_after_close(arrival.time) {
                queue.push(Sim::<G>::arrival_event(ClientId(next_client), arrival));
                next_client += 1;
            }
        }

        Ok(Sim {
            metrics:   DayMetrics::new(self.day, self.config.mode),
            config:    self.config,
            day:       self.day,
            clock,
            queue,
            floors,
            elevators,
            rng,
            generator: self.generator,
            next_client,
            finished:  false,
        })
    }
}
