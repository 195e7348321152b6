//! Randomizer - deals unlocked people into the seats locked people leave free.
//!
//! Algorithm:
//! 1. Pool every seat of every table (one pool, not per-table islands)
//! 2. Drop seats a locked person sits at (same table, inside the seat window)
//! 3. Shuffle the pool (Fisher–Yates)
//! 4. Deal one seat per unlocked person in roster order
//! 5. If the pool runs dry, the rest keep their current assignment
//!
//! Locked people are copied through untouched. A locked person sitting off
//! the seat grid still uses up one of their table's seats: the pooled seat
//! nearest to them is withheld, so a table never ends up over capacity.

use log::debug;
use rand::seq::SliceRandom;
use rand::Rng;
use seatplan_logic::layout::{SeatLayout, SeatSlot};
use seatplan_logic::model::{Person, Table};
use seatplan_logic::occupancy::SLOT_TOLERANCE;

use crate::classroom::Classroom;

/// Summary of one randomize pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DealReport {
    /// Seats available after locked people were accounted for.
    pub pooled: usize,
    /// Unlocked people who received a seat.
    pub dealt: usize,
    /// Unlocked people left where they were because seats ran out.
    pub unserved: usize,
}

/// Seats not held by a locked person, in table then slot order.
pub fn free_pool(people: &[Person], tables: &[Table], layout: &SeatLayout) -> Vec<SeatSlot> {
    let locked: Vec<&Person> = people.iter().filter(|p| p.is_locked).collect();
    let mut pool = Vec::new();

    for table in tables {
        let mut slots = layout.table_slots(table);
        let mut strays = Vec::new();

        for person in locked.iter().filter(|p| p.is_at(&table.id)) {
            match slots
                .iter()
                .position(|s| person.position.near(s.position, SLOT_TOLERANCE))
            {
                Some(i) => {
                    slots.remove(i);
                }
                None => strays.push(person.position),
            }
        }

        // Off-grid locked people still take a seat.
        for stray in strays {
            let nearest = slots
                .iter()
                .enumerate()
                .min_by(|(_, a), (_, b)| {
                    stray
                        .distance(a.position)
                        .total_cmp(&stray.distance(b.position))
                })
                .map(|(i, _)| i);
            if let Some(i) = nearest {
                slots.remove(i);
            }
        }

        pool.extend(slots);
    }

    pool
}

/// Reassign unlocked people to random free seats.
pub fn randomize_people(
    people: &[Person],
    tables: &[Table],
    layout: &SeatLayout,
    rng: &mut impl Rng,
) -> Vec<Person> {
    deal(people, tables, layout, rng).0
}

/// Like [`randomize_people`], also reporting how the deal went.
pub fn deal(
    people: &[Person],
    tables: &[Table],
    layout: &SeatLayout,
    rng: &mut impl Rng,
) -> (Vec<Person>, DealReport) {
    let mut pool = free_pool(people, tables, layout);
    pool.shuffle(rng);

    let mut report = DealReport {
        pooled: pool.len(),
        ..Default::default()
    };

    let mut seats = pool.into_iter();
    let updated = people
        .iter()
        .map(|person| {
            if person.is_locked {
                return person.clone();
            }
            match seats.next() {
                Some(slot) => {
                    report.dealt += 1;
                    Person {
                        table_id: Some(slot.table_id),
                        position: slot.position,
                        ..person.clone()
                    }
                }
                None => {
                    report.unserved += 1;
                    person.clone()
                }
            }
        })
        .collect();

    debug!(
        "Randomized seating: pooled={} dealt={} unserved={}",
        report.pooled, report.dealt, report.unserved
    );
    (updated, report)
}

/// Randomize a whole classroom, returning the replacement snapshot.
pub fn randomize(classroom: &Classroom, layout: &SeatLayout, rng: &mut impl Rng) -> Classroom {
    Classroom {
        people: randomize_people(&classroom.people, &classroom.tables, layout, rng),
        ..classroom.clone()
    }
}
