//! Integration tests for the geometry pipeline.
//!
//! Exercises: IntakeRequest → IntakePlan → FloorPlan tables → seat slots
//! → nearest-slot resolution → occupancy checks.
//!
//! All tests are pure logic: no randomness, no snapshots.

use seatplan_logic::floor::{roster_people, FloorPlan};
use seatplan_logic::intake::{validate_intake, IntakeRequest};
use seatplan_logic::layout::SeatLayout;
use seatplan_logic::model::{Point, TableId};
use seatplan_logic::occupancy::{free_slots, has_room, is_occupied, occupant_count};
use seatplan_logic::resolver::{interior_point, nearest_slot, person_at_point, tile_center};

fn roster(n: usize) -> Vec<String> {
    (0..n).map(|i| format!("Student {i}")).collect()
}

#[test]
fn every_layout_snaps_each_seat_to_itself() {
    for layout in [SeatLayout::SEATED, SeatLayout::DROP_SNAP] {
        for capacity in [1, 2, 3, 4, 5] {
            let tables = FloorPlan::default().arrange_tables(1, capacity);
            for slot in layout.table_slots(&tables[0]) {
                let hit = nearest_slot(slot.position, &tables, &layout).unwrap();
                assert_eq!(hit, slot, "capacity {capacity}");
            }
        }
    }
}

#[test]
fn absolute_drop_resolves_through_interior_frame() {
    let plan = validate_intake(&IntakeRequest::new(roster(16), 4)).unwrap();
    let tables = FloorPlan::default().arrange_tables(plan.table_count, plan.table_capacity);
    let layout = SeatLayout::SEATED;

    for table in &tables {
        for slot in layout.table_slots(table) {
            let absolute = Point::new(
                table.position.x + slot.position.x + 4.0,
                table.position.y + slot.position.y + 25.0 - 3.0,
            );
            assert!(table.contains(absolute));
            let local = interior_point(table, absolute);
            let hit = nearest_slot(local, std::slice::from_ref(table), &layout).unwrap();
            assert_eq!(hit.slot_index, slot.slot_index);
            assert_eq!(hit.table_id, table.id);
        }
    }
}

#[test]
fn filling_a_table_seat_by_seat() {
    let tables = FloorPlan::default().arrange_tables(1, 4);
    let table = &tables[0];
    let layout = SeatLayout::SEATED;
    let mut people = roster_people(&roster(5));

    for i in 0..4 {
        let free = free_slots(table, &layout, &people, None);
        assert_eq!(free.len(), 4 - i);
        assert!(has_room(table, &people, None));
        let seat = free[0].clone();
        people[i].table_id = Some(seat.table_id.clone());
        people[i].position = seat.position;
        assert!(is_occupied(&seat, &people, None));
    }

    assert!(free_slots(table, &layout, &people, None).is_empty());
    assert!(!has_room(table, &people, None));
    assert_eq!(occupant_count(&TableId::new("1"), &people), 4);
}

#[test]
fn tile_hits_follow_table_moves() {
    let mut tables = FloorPlan::default().arrange_tables(2, 2);
    let mut people = roster_people(&roster(2));
    people[0].table_id = Some(TableId::new("2"));
    people[0].position = SeatLayout::SEATED.slot_position(2, 1);

    let center = tile_center(&people[0], &tables).unwrap();
    assert_eq!(
        person_at_point(center, &people, &tables, None).map(|p| p.id.as_str()),
        Some("0")
    );

    tables[1].position = tables[1].position.offset(200.0, 0.0);
    assert!(person_at_point(center, &people, &tables, None).is_none());
    let moved = tile_center(&people[0], &tables).unwrap();
    assert_eq!(moved, center.offset(200.0, 0.0));
}
