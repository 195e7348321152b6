//! Resolve free-form drop points to seats or people.
//!
//! [`nearest_slot`] is frame-agnostic: it compares the point directly to
//! table-relative slot positions, so the caller converts first (see
//! [`interior_point`]). [`person_at_point`] works in the absolute frame
//! against each seated person's rendered tile.

use crate::layout::{SeatLayout, SeatSlot};
use crate::model::{Person, PersonId, Point, Table};

/// Height of the header strip above a table's seating interior.
pub const TABLE_HEADER_HEIGHT: f32 = 25.0;
/// Rendered person tile.
pub const TILE_WIDTH: f32 = 120.0;
pub const TILE_HEIGHT: f32 = 60.0;
/// A drop within this distance of a tile center lands on that person.
pub const TILE_HIT_RADIUS: f32 = 20.0;

/// Closest slot to `point` across `tables`.
///
/// Ties go to the first slot found (table order, then slot order). Returns
/// `None` when no table has a seat.
pub fn nearest_slot(point: Point, tables: &[Table], layout: &SeatLayout) -> Option<SeatSlot> {
    let mut best: Option<(f32, SeatSlot)> = None;
    for table in tables {
        for slot in layout.table_slots(table) {
            let d = point.distance(slot.position);
            match &best {
                Some((min, _)) if d >= *min => {}
                _ => best = Some((d, slot)),
            }
        }
    }
    best.map(|(_, slot)| slot)
}

/// Convert an absolute point into `table`'s seating interior frame.
pub fn interior_point(table: &Table, absolute: Point) -> Point {
    Point::new(
        absolute.x - table.position.x,
        absolute.y - table.position.y - TABLE_HEADER_HEIGHT,
    )
}

/// Absolute center of a seated person's tile, if they are at a known table.
pub fn tile_center(person: &Person, tables: &[Table]) -> Option<Point> {
    let table_id = person.table_id.as_ref()?;
    let table = tables.iter().find(|t| &t.id == table_id)?;
    Some(Point::new(
        table.position.x + person.position.x + TILE_WIDTH / 2.0,
        table.position.y + person.position.y + TABLE_HEADER_HEIGHT + TILE_HEIGHT / 2.0,
    ))
}

/// The seated person whose tile center is within [`TILE_HIT_RADIUS`] of an
/// absolute `point`, skipping `exclude`.
///
/// Unseated people and people at unknown tables never match.
pub fn person_at_point<'a>(
    point: Point,
    people: &'a [Person],
    tables: &[Table],
    exclude: Option<&PersonId>,
) -> Option<&'a Person> {
    people.iter().find(|p| {
        Some(&p.id) != exclude
            && tile_center(p, tables).is_some_and(|c| point.distance(c) <= TILE_HIT_RADIUS)
    })
}

/// Topmost table under an absolute point.
///
/// Later tables in the list are drawn over earlier ones.
pub fn table_at_point(point: Point, tables: &[Table]) -> Option<&Table> {
    tables.iter().rev().find(|t| t.contains(point))
}
