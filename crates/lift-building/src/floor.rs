//! One floor's waiting line and the boarding/alighting rules.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use lift_core::{Client, FloorId, GROUND, SimTime};

use crate::Elevator;

/// Result of a boarding scan at DoorClose.
#[derive(Debug, Default)]
pub struct BoardOutcome {
    /// Riders leaving the line for the car, in line order.
    pub boarding:  Vec<Client>,
    /// Riders found to have given up while scanning the line.
    pub abandoned: Vec<Client>,
}

/// Result of letting riders out at DoorOpen.
#[derive(Debug, Default)]
pub struct DropOutcome {
    /// Riders who reached their destination.
    pub delivered: Vec<Client>,
    /// Riders who got off at the ground floor to change zones.  They are
    /// already back in this floor's line; the copies here are for reporting.
    pub swapped:   Vec<Client>,
}

/// A floor and the riders waiting on it, served in arrival order.
#[derive(Debug)]
pub struct Floor {
    pub id: FloorId,
    line:   BinaryHeap<Reverse<Client>>,
}

impl Floor {
    pub fn new(id: FloorId) -> Self {
        Self { id, line: BinaryHeap::new() }
    }

    /// Add a rider to the line.
    pub fn enqueue(&mut self, client: Client) {
        debug_assert_eq!(client.current_floor, self.id);
        self.line.push(Reverse(client));
    }

    pub fn len(&self) -> usize {
        self.line.len()
    }

    pub fn is_empty(&self) -> bool {
        self.line.is_empty()
    }

    /// Waiting riders in service order (earliest arrival first).
    pub fn waiting(&self) -> Vec<&Client> {
        let mut clients: Vec<&Client> = self.line.iter().map(|Reverse(c)| c).collect();
        clients.sort();
        clients
    }

    /// Move riders from the line into `car`'s free seats.
    ///
    /// Riders are scanned in arrival order while seats remain.  A rider who
    /// never boarded and waited more than `abandon_after_secs` leaves for
    /// good; a rider the car cannot take stays in line.  Riders past the
    /// point where the car filled up are not scanned.
    pub fn board_clients(&mut self, car: &Elevator, now: SimTime, abandon_after_secs: u64) -> BoardOutcome {
        let free = car.free_space();
        let mut outcome = BoardOutcome::default();
        let mut staying = Vec::new();

        while outcome.boarding.len() < free {
            let Some(Reverse(client)) = self.line.pop() else { break };
            if client.has_abandoned(now, abandon_after_secs) {
                outcome.abandoned.push(client);
            } else if client.can_board(car.zone, car.moving_up) {
                outcome.boarding.push(client);
            } else {
                staying.push(client);
            }
        }

        self.line.extend(staying.into_iter().map(Reverse));
        outcome
    }

    /// Let riders out of `car`, which stands at this floor.
    ///
    /// Riders whose destination is this floor are delivered.  At the ground
    /// floor, riders bound for the other zone get off and rejoin this line
    /// heading for their destination.
    pub fn drop_clients(&mut self, car: &mut Elevator, now: SimTime) -> DropOutcome {
        debug_assert_eq!(car.floor, self.id);
        let here = self.id;
        let mut outcome = DropOutcome::default();

        let aboard = std::mem::take(&mut car.onboard);
        for mut client in aboard {
            if client.desired_floor == here {
                client.alight(here, now);
                outcome.delivered.push(client);
            } else if here == GROUND && !car.serves(client.desired_floor) {
                client.alight(here, now);
                outcome.swapped.push(client.clone());
                self.line.push(Reverse(client));
            } else {
                car.onboard.push(client);
            }
        }
        outcome
    }

    /// Mark swapped riders who have not yet called their second car and
    /// return their destinations.
    pub fn take_reorders(&mut self) -> Vec<FloorId> {
        let mut destinations = Vec::new();
        let mut clients = std::mem::take(&mut self.line).into_vec();
        clients.sort_by(|a, b| a.0.cmp(&b.0));
        for Reverse(client) in &mut clients {
            if client.need_swap && !client.reorder && client.current_floor == self.id {
                client.reorder = true;
                destinations.push(client.desired_floor);
            }
        }
        self.line = BinaryHeap::from(clients);
        destinations
    }

    /// Remove every rider who has given up by `now`.  Used for the closing
    /// sweep; the rest of the line keeps its order.
    pub fn sweep_abandoned(&mut self, now: SimTime, abandon_after_secs: u64) -> Vec<Client> {
        let (gone, staying): (Vec<_>, Vec<_>) = std::mem::take(&mut self.line)
            .into_iter()
            .partition(|Reverse(c)| c.has_abandoned(now, abandon_after_secs));
        self.line = BinaryHeap::from(staying);
        let mut gone: Vec<Client> = gone.into_iter().map(|Reverse(c)| c).collect();
        gone.sort();
        gone
    }
}
