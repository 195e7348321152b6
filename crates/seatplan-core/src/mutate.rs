//! Assignment mutator - moves, lock toggles, swaps and table edits.
//!
//! Every operation borrows a snapshot and returns a replacement. Operations
//! are total: an id that does not resolve leaves the snapshot unchanged, so
//! stale callbacks after a reset cannot break a session.
//!
//! These are unconditional writes. Capacity and collision checks belong to
//! the caller (see [`crate::placement`]).

use log::debug;
use seatplan_logic::floor::MIN_TABLE_SIZE;
use seatplan_logic::model::{PersonId, Point, Size, TableId};

use crate::classroom::Classroom;

/// What a move does with the person's table assignment.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum TableTarget {
    /// Leave the current assignment alone.
    #[default]
    Keep,
    /// Seat at this table.
    Table(TableId),
    /// Clear the assignment.
    Unassigned,
}

/// Set a person's position and, per `target`, their table.
///
/// No-op if the person does not exist, or if `target` names a table that
/// does not exist.
pub fn move_person(
    classroom: &Classroom,
    id: &PersonId,
    position: Point,
    target: TableTarget,
) -> Classroom {
    if classroom.person(id).is_none() {
        debug!("move: unknown person {}", id);
        return classroom.clone();
    }
    if let TableTarget::Table(table_id) = &target {
        if classroom.table(table_id).is_none() {
            debug!("move: unknown table {}", table_id);
            return classroom.clone();
        }
    }

    let mut next = classroom.clone();
    for person in next.people.iter_mut().filter(|p| &p.id == id) {
        person.position = position;
        match &target {
            TableTarget::Keep => {}
            TableTarget::Table(table_id) => person.table_id = Some(table_id.clone()),
            TableTarget::Unassigned => person.table_id = None,
        }
    }
    next
}

/// Flip a person's lock flag. Nothing else changes.
pub fn toggle_lock(classroom: &Classroom, id: &PersonId) -> Classroom {
    let mut next = classroom.clone();
    match next.people.iter_mut().find(|p| &p.id == id) {
        Some(person) => person.is_locked = !person.is_locked,
        None => debug!("toggle_lock: unknown person {}", id),
    }
    next
}

/// Exchange table and position between two people.
///
/// Complete no-op if either is missing. Capacity is not checked: each
/// table keeps the same head count.
pub fn swap(classroom: &Classroom, a: &PersonId, b: &PersonId) -> Classroom {
    let (Some(first), Some(second)) = (classroom.person(a), classroom.person(b)) else {
        debug!("swap: unknown person in ({}, {})", a, b);
        return classroom.clone();
    };
    let first_seat = (first.table_id.clone(), first.position);
    let second_seat = (second.table_id.clone(), second.position);

    let mut next = classroom.clone();
    for person in next.people.iter_mut() {
        if &person.id == a {
            (person.table_id, person.position) = second_seat.clone();
        } else if &person.id == b {
            (person.table_id, person.position) = first_seat.clone();
        }
    }
    next
}

/// Move a table's top-left corner, clamped to the floor's positive quadrant.
pub fn move_table(classroom: &Classroom, id: &TableId, position: Point) -> Classroom {
    let mut next = classroom.clone();
    match next.tables.iter_mut().find(|t| &t.id == id) {
        Some(table) => table.position = Point::new(position.x.max(0.0), position.y.max(0.0)),
        None => debug!("move_table: unknown table {}", id),
    }
    next
}

/// Resize a table, never below [`MIN_TABLE_SIZE`].
pub fn resize_table(classroom: &Classroom, id: &TableId, size: Size) -> Classroom {
    let mut next = classroom.clone();
    match next.tables.iter_mut().find(|t| &t.id == id) {
        Some(table) => {
            table.dimensions = Size::new(
                size.width.max(MIN_TABLE_SIZE.width),
                size.height.max(MIN_TABLE_SIZE.height),
            )
        }
        None => debug!("resize_table: unknown table {}", id),
    }
    next
}

/// Set a table's display name. Blank clears it.
pub fn rename_table(classroom: &Classroom, id: &TableId, name: &str) -> Classroom {
    let mut next = classroom.clone();
    match next.tables.iter_mut().find(|t| &t.id == id) {
        Some(table) => {
            let trimmed = name.trim();
            table.name = (!trimmed.is_empty()).then(|| trimmed.to_string());
        }
        None => debug!("rename_table: unknown table {}", id),
    }
    next
}
