//! Hall-call dispatch: pick one car for a rider's leg.
//!
//! Greedy, not optimal.  For each call:
//!
//! 1. **Eligibility**: a car qualifies if it is not stuck and serves both
//!    the call floor and the leg's destination.
//! 2. **Free car first**: the first eligible car with an empty current-sweep
//!    set in either direction takes the call outright.
//! 3. **Score**: otherwise every eligible car is scored by how far it must
//!    travel to reach the floor (see [`score`]); the lowest score wins and
//!    ties go to the lower car number.
//! 4. **Fallback**: if nothing qualified, the first working car of the
//!    call's zone, or failing that the zone's first car, takes the call.
//!    Requests on a stuck car wait for its repair.
//!
//! A car already standing at the call floor is never picked by steps 2–3: a
//! car cannot be called to where it is.

use lift_core::{Direction, ElevatorId, FloorId, Zone};
use tracing::debug;

use crate::Elevator;

/// Travel distance for `car` to reach `floor` in its current sweep, or
/// `None` if the car is already there.
///
/// Moving up and below the floor: the distance up.  Moving up and already
/// past it: up to the top of the zone and back down.  Moving down mirrors
/// this with the ground floor as the turning point.
pub fn score(car: &Elevator, floor: FloorId) -> Option<u64> {
    let (at, target, top) = (car.floor.0 as u64, floor.0 as u64, car.zone.top().0 as u64);
    if at == target {
        return None;
    }
    let s = match (car.moving_up, target > at) {
        (true, true)   => target - at,
        (true, false)  => (top - at) + (top - target),
        (false, false) => at - target,
        (false, true)  => at + target,
    };
    Some(s)
}

#[inline]
fn eligible(car: &Elevator, floor: FloorId, destination: FloorId) -> bool {
    !car.stuck && car.serves(floor) && car.serves(destination)
}

/// Choose the car for a call at `floor` heading to `destination`.
/// Returns an index into `cars`.
pub fn select_elevator(cars: &[Elevator], floor: FloorId, destination: FloorId) -> usize {
    let candidates = || {
        cars.iter()
            .enumerate()
            .filter(move |(_, c)| eligible(c, floor, destination) && c.floor != floor)
    };

    if let Some((i, _)) = candidates().find(|(_, c)| c.queues.has_open_sweep()) {
        return i;
    }

    let mut best: Option<(usize, u64)> = None;
    for (i, car) in candidates() {
        if let Some(s) = score(car, floor) {
            if best.is_none_or(|(_, b)| s < b) {
                best = Some((i, s));
            }
        }
    }
    if let Some((i, _)) = best {
        return i;
    }

    fallback(cars, floor, destination)
}

/// First working car of the call's zone, else the zone's first car.
fn fallback(cars: &[Elevator], floor: FloorId, destination: FloorId) -> usize {
    // A call never starts and ends on the ground floor, so one end has a zone.
    let zone = Zone::of(floor).or(Zone::of(destination)).unwrap_or(Zone::Low);
    let in_zone = zone.elevators();
    let pick = in_zone
        .iter()
        .copied()
        .find(|id| cars.get(id.slot()).is_some_and(|c| !c.stuck))
        .unwrap_or(in_zone[0]);
    debug!(%floor, %destination, car = pick.0, "dispatch fell back to zone default");
    pick.slot()
}

/// Assign the call `(floor → destination, dir)` to one car and queue both
/// stops on it.  Never fails.
pub fn order_elevator(
    cars:        &mut [Elevator],
    floor:       FloorId,
    dir:         Direction,
    destination: FloorId,
) -> ElevatorId {
    let i = select_elevator(cars, floor, destination);
    let car = &mut cars[i];
    car.request(floor, dir);
    car.request(destination, dir);
    debug!(car = car.id.0, from = floor.0, to = destination.0, ?dir, "call assigned");
    car.id
}
