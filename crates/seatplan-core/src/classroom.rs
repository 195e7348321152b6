//! Classroom snapshot: the full seating state at one point in time.
//!
//! A snapshot is a plain value. Engine operations borrow one and return a
//! replacement; nothing here mutates a snapshot that has been handed out.

use rand::Rng;
use seatplan_logic::floor::{roster_people, FloorPlan};
use seatplan_logic::intake::IntakePlan;
use seatplan_logic::layout::SeatLayout;
use seatplan_logic::model::{Person, PersonId, Table, TableId};
use seatplan_logic::occupancy::{self, SLOT_TOLERANCE};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

use crate::randomize::randomize_people;

/// Class-wide settings captured at intake.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassConfig {
    pub class_size: u32,
    pub table_capacity: u32,
    pub table_count: u32,
    pub show_divider: bool,
}

/// People, tables and configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Classroom {
    pub people: Vec<Person>,
    pub tables: Vec<Table>,
    pub config: ClassConfig,
}

/// A broken snapshot invariant.
#[derive(Debug, Clone, PartialEq)]
pub enum Violation {
    /// Person references a table that does not exist.
    UnknownTable { person: PersonId, table: TableId },
    DuplicatePerson(PersonId),
    DuplicateTable(TableId),
    OverCapacity { table: TableId, seated: usize, capacity: u32 },
    /// Two people at one table inside the same-seat window.
    Collision { table: TableId, a: PersonId, b: PersonId },
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Violation::UnknownTable { person, table } => {
                write!(f, "person {} references unknown table {}", person, table)
            }
            Violation::DuplicatePerson(id) => write!(f, "duplicate person id {}", id),
            Violation::DuplicateTable(id) => write!(f, "duplicate table id {}", id),
            Violation::OverCapacity {
                table,
                seated,
                capacity,
            } => write!(f, "table {} seats {} of {}", table, seated, capacity),
            Violation::Collision { table, a, b } => {
                write!(f, "people {} and {} share a seat at table {}", a, b, table)
            }
        }
    }
}

impl Classroom {
    /// Build the first snapshot for a validated plan and deal everyone into
    /// random seats.
    pub fn from_plan(
        plan: &IntakePlan,
        floor: &FloorPlan,
        layout: &SeatLayout,
        rng: &mut impl Rng,
    ) -> Self {
        let tables = floor.arrange_tables(plan.table_count, plan.table_capacity);
        let people = roster_people(&plan.roster);
        let people = randomize_people(&people, &tables, layout, rng);

        Self {
            people,
            tables,
            config: ClassConfig {
                class_size: plan.class_size,
                table_capacity: plan.table_capacity,
                table_count: plan.table_count,
                show_divider: plan.show_divider,
            },
        }
    }

    pub fn person(&self, id: &PersonId) -> Option<&Person> {
        self.people.iter().find(|p| &p.id == id)
    }

    pub fn table(&self, id: &TableId) -> Option<&Table> {
        self.tables.iter().find(|t| &t.id == id)
    }

    /// Occupants of a table, derived from the people list.
    pub fn occupants(&self, table_id: &TableId) -> Vec<&Person> {
        occupancy::occupants(table_id, &self.people)
    }

    /// People not seated at any table.
    pub fn unassigned(&self) -> Vec<&Person> {
        self.people.iter().filter(|p| !p.is_seated()).collect()
    }

    pub fn total_seats(&self) -> u32 {
        self.tables.iter().map(|t| t.capacity).sum()
    }

    /// Every broken invariant, empty for a consistent snapshot.
    pub fn violations(&self) -> Vec<Violation> {
        let mut found = Vec::new();

        let mut table_ids = HashSet::new();
        for t in &self.tables {
            if !table_ids.insert(&t.id) {
                found.push(Violation::DuplicateTable(t.id.clone()));
            }
        }

        let mut person_ids = HashSet::new();
        for p in &self.people {
            if !person_ids.insert(&p.id) {
                found.push(Violation::DuplicatePerson(p.id.clone()));
            }
            if let Some(table) = &p.table_id {
                if !table_ids.contains(table) {
                    found.push(Violation::UnknownTable {
                        person: p.id.clone(),
                        table: table.clone(),
                    });
                }
            }
        }

        for t in &self.tables {
            let seated = self.occupants(&t.id);
            if seated.len() > t.capacity as usize {
                found.push(Violation::OverCapacity {
                    table: t.id.clone(),
                    seated: seated.len(),
                    capacity: t.capacity,
                });
            }
            for i in 0..seated.len() {
                for j in (i + 1)..seated.len() {
                    if seated[i].position.near(seated[j].position, SLOT_TOLERANCE) {
                        found.push(Violation::Collision {
                            table: t.id.clone(),
                            a: seated[i].id.clone(),
                            b: seated[j].id.clone(),
                        });
                    }
                }
            }
        }

        found
    }
}
