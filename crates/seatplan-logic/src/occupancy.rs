//! Occupancy queries over the current people list.
//!
//! Seat coordinates are floating geometry that picks up jitter from drag
//! input, so "at this seat" means inside a square window of
//! [`SLOT_TOLERANCE`] units on each axis, not exact equality.

use crate::layout::{SeatLayout, SeatSlot};
use crate::model::{Person, PersonId, Table, TableId};

/// Per-axis half-width of the "same seat" window.
pub const SLOT_TOLERANCE: f32 = 10.0;

/// The person sitting at `slot`, ignoring `exclude`.
///
/// Pass the moving person as `exclude` when checking their own target.
pub fn occupant_of<'a>(
    slot: &SeatSlot,
    people: &'a [Person],
    exclude: Option<&PersonId>,
) -> Option<&'a Person> {
    people.iter().find(|p| {
        Some(&p.id) != exclude
            && p.is_at(&slot.table_id)
            && p.position.near(slot.position, SLOT_TOLERANCE)
    })
}

/// Whether anyone other than `exclude` sits at `slot`.
pub fn is_occupied(slot: &SeatSlot, people: &[Person], exclude: Option<&PersonId>) -> bool {
    occupant_of(slot, people, exclude).is_some()
}

/// People assigned to `table_id`, in roster order.
pub fn occupants<'a>(table_id: &TableId, people: &'a [Person]) -> Vec<&'a Person> {
    people.iter().filter(|p| p.is_at(table_id)).collect()
}

/// Number of people assigned to `table_id`.
pub fn occupant_count(table_id: &TableId, people: &[Person]) -> usize {
    people.iter().filter(|p| p.is_at(table_id)).count()
}

/// Whether `table` can take one more person, not counting `exclude`.
pub fn has_room(table: &Table, people: &[Person], exclude: Option<&PersonId>) -> bool {
    let seated = people
        .iter()
        .filter(|p| p.is_at(&table.id) && Some(&p.id) != exclude)
        .count();
    seated < table.capacity as usize
}

/// Slots of `table` nobody (other than `exclude`) sits at.
pub fn free_slots(
    table: &Table,
    layout: &SeatLayout,
    people: &[Person],
    exclude: Option<&PersonId>,
) -> Vec<SeatSlot> {
    layout
        .table_slots(table)
        .into_iter()
        .filter(|slot| !is_occupied(slot, people, exclude))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Point, Size};

    fn table(id: &str, capacity: u32) -> Table {
        Table::new(TableId::new(id), capacity, Point::ORIGIN, Size::new(304.0, 192.0))
    }

    fn seated(id: &str, table: &str, x: f32, y: f32) -> Person {
        let mut p = Person::new(PersonId::new(id), format!("P{id}"));
        p.table_id = Some(TableId::new(table));
        p.position = Point::new(x, y);
        p
    }

    #[test]
    fn test_occupant_within_tolerance() {
        let people = vec![seated("a", "1", 35.0, 95.0)];
        let slot = SeatSlot {
            table_id: TableId::new("1"),
            slot_index: 0,
            position: Point::new(30.0, 90.0),
        };
        assert_eq!(occupant_of(&slot, &people, None).map(|p| p.id.as_str()), Some("a"));
    }

    #[test]
    fn test_occupant_outside_tolerance() {
        let people = vec![seated("a", "1", 40.0, 90.0)];
        let slot = SeatSlot {
            table_id: TableId::new("1"),
            slot_index: 0,
            position: Point::new(30.0, 90.0),
        };
        assert!(occupant_of(&slot, &people, None).is_none());
    }

    #[test]
    fn test_occupant_other_table_ignored() {
        let people = vec![seated("a", "2", 30.0, 90.0)];
        let slot = SeatSlot {
            table_id: TableId::new("1"),
            slot_index: 0,
            position: Point::new(30.0, 90.0),
        };
        assert!(!is_occupied(&slot, &people, None));
    }

    #[test]
    fn test_occupant_excludes_self() {
        let people = vec![seated("a", "1", 30.0, 90.0)];
        let slot = SeatSlot {
            table_id: TableId::new("1"),
            slot_index: 0,
            position: Point::new(30.0, 90.0),
        };
        assert!(is_occupied(&slot, &people, None));
        assert!(!is_occupied(&slot, &people, Some(&PersonId::new("a"))));
    }

    #[test]
    fn test_counts_and_projection() {
        let mut loose = Person::new(PersonId::new("c"), "C");
        loose.position = Point::new(30.0, 90.0);
        let people = vec![
            seated("a", "1", 30.0, 90.0),
            seated("b", "2", 30.0, 90.0),
            seated("d", "1", 170.0, 90.0),
            loose,
        ];
        let t1 = TableId::new("1");
        assert_eq!(occupant_count(&t1, &people), 2);
        let ids: Vec<_> = occupants(&t1, &people).iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "d"]);
    }

    #[test]
    fn test_has_room() {
        let t = table("1", 2);
        let people = vec![seated("a", "1", 30.0, 90.0), seated("b", "1", 170.0, 90.0)];
        assert!(!has_room(&t, &people, None));
        assert!(has_room(&t, &people, Some(&PersonId::new("b"))));
    }

    #[test]
    fn test_free_slots() {
        let t = table("1", 4);
        let people = vec![seated("a", "1", 31.0, 61.0), seated("b", "1", 170.0, 140.0)];
        let free = free_slots(&t, &SeatLayout::SEATED, &people, None);
        let idx: Vec<_> = free.iter().map(|s| s.slot_index).collect();
        assert_eq!(idx, vec![1, 2]);

        let free = free_slots(&t, &SeatLayout::SEATED, &people, Some(&PersonId::new("a")));
        assert_eq!(free.len(), 3);
    }
}
