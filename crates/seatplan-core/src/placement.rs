//! Drop placement - turn a drop point into a checked move or swap.
//!
//! Steps for a drop at an absolute point:
//! 1. Optionally, a drop onto another person's tile swaps with them
//! 2. No table under the point: park the person unseated
//! 3. Otherwise snap to the nearest seat of the table under the point
//! 4. Decline if that seat is taken or the table is already full

use log::debug;
use seatplan_logic::floor::UNASSIGNED_POSITION;
use seatplan_logic::layout::{SeatLayout, SeatSlot};
use seatplan_logic::model::{PersonId, Point};
use seatplan_logic::occupancy::{has_room, occupant_of};
use seatplan_logic::resolver::{interior_point, nearest_slot, person_at_point, table_at_point};

use crate::classroom::Classroom;
use crate::mutate::{move_person, swap, TableTarget};

/// Why a drop was declined. The person stays where they were.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DropRejection {
    UnknownPerson,
    /// The nearest seat belongs to someone else.
    Occupied(PersonId),
    TableFull,
    /// The table under the point has no seats.
    NoSeat,
}

/// What a drop did.
#[derive(Debug, Clone, PartialEq)]
pub enum DropOutcome {
    Seated(SeatSlot),
    Swapped(PersonId),
    Unassigned,
    Rejected(DropRejection),
}

/// Drop behaviour knobs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DropOptions {
    pub layout: SeatLayout,
    /// Dropping onto another person's tile swaps the two.
    pub swap_on_drop: bool,
}

impl Default for DropOptions {
    fn default() -> Self {
        Self {
            layout: SeatLayout::default(),
            swap_on_drop: false,
        }
    }
}

/// Place person `id` at absolute `point`.
pub fn drop_person(
    classroom: &Classroom,
    id: &PersonId,
    point: Point,
    options: &DropOptions,
) -> (Classroom, DropOutcome) {
    if classroom.person(id).is_none() {
        return reject(classroom, DropRejection::UnknownPerson);
    }

    if options.swap_on_drop {
        if let Some(other) = person_at_point(point, &classroom.people, &classroom.tables, Some(id))
        {
            let other = other.id.clone();
            let next = swap(classroom, id, &other);
            return (next, DropOutcome::Swapped(other));
        }
    }

    let Some(table) = table_at_point(point, &classroom.tables) else {
        let next = move_person(classroom, id, UNASSIGNED_POSITION, TableTarget::Unassigned);
        return (next, DropOutcome::Unassigned);
    };

    let local = interior_point(table, point);
    let Some(slot) = nearest_slot(local, std::slice::from_ref(table), &options.layout) else {
        return reject(classroom, DropRejection::NoSeat);
    };

    if let Some(occupant) = occupant_of(&slot, &classroom.people, Some(id)) {
        return reject(classroom, DropRejection::Occupied(occupant.id.clone()));
    }
    if !has_room(table, &classroom.people, Some(id)) {
        return reject(classroom, DropRejection::TableFull);
    }

    let next = move_person(
        classroom,
        id,
        slot.position,
        TableTarget::Table(slot.table_id.clone()),
    );
    (next, DropOutcome::Seated(slot))
}

fn reject(classroom: &Classroom, reason: DropRejection) -> (Classroom, DropOutcome) {
    debug!("drop declined: {:?}", reason);
    (classroom.clone(), DropOutcome::Rejected(reason))
}
