//! Initial classroom floor arrangement.
//!
//! Tables are laid out on a near-square grid (`ceil(sqrt(n))` per row) and
//! people are created unseated in roster order.

use crate::model::{Person, PersonId, Point, Size, Table, TableId};
use serde::{Deserialize, Serialize};

/// Smallest size a table can be resized to.
pub const MIN_TABLE_SIZE: Size = Size::new(120.0, 80.0);
/// Where an unseated person is parked when dropped on open floor.
pub const UNASSIGNED_POSITION: Point = Point::new(50.0, 50.0);

/// Floor grid parameters for newly created tables.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FloorPlan {
    /// Top-left of the first table.
    pub origin: Point,
    pub table_size: Size,
    /// Space between neighbouring tables on both axes.
    pub gap: f32,
}

impl Default for FloorPlan {
    fn default() -> Self {
        Self {
            origin: Point::new(100.0, 100.0),
            table_size: Size::new(304.0, 192.0),
            gap: 50.0,
        }
    }
}

impl FloorPlan {
    /// Tables per row for `count` tables.
    pub fn tables_per_row(count: u32) -> u32 {
        if count == 0 {
            return 1;
        }
        let root = (count as f64).sqrt().ceil() as u32;
        root.max(1)
    }

    /// Top-left of table number `index` (0-based) out of `count`.
    pub fn table_position(&self, index: u32, count: u32) -> Point {
        let per_row = Self::tables_per_row(count);
        let row = (index / per_row) as f32;
        let col = (index % per_row) as f32;
        Point::new(
            self.origin.x + col * (self.table_size.width + self.gap),
            self.origin.y + row * (self.table_size.height + self.gap),
        )
    }

    /// Create `count` tables with ids "1"..="count".
    pub fn arrange_tables(&self, count: u32, capacity: u32) -> Vec<Table> {
        (0..count)
            .map(|i| {
                Table::new(
                    TableId::new((i + 1).to_string()),
                    capacity,
                    self.table_position(i, count),
                    self.table_size,
                )
            })
            .collect()
    }
}

/// People for a roster, ids "0".."n-1", unlocked and unseated.
pub fn roster_people(roster: &[String]) -> Vec<Person> {
    roster
        .iter()
        .enumerate()
        .map(|(i, name)| Person::new(PersonId::new(i.to_string()), name.clone()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tables_per_row() {
        assert_eq!(FloorPlan::tables_per_row(1), 1);
        assert_eq!(FloorPlan::tables_per_row(3), 2);
        assert_eq!(FloorPlan::tables_per_row(4), 2);
        assert_eq!(FloorPlan::tables_per_row(5), 3);
        assert_eq!(FloorPlan::tables_per_row(10), 4);
    }

    #[test]
    fn test_arrange_tables() {
        let floor = FloorPlan::default();
        let tables = floor.arrange_tables(3, 4);
        assert_eq!(tables.len(), 3);
        let ids: Vec<_> = tables.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2", "3"]);
        assert!(tables.iter().all(|t| t.capacity == 4 && t.name.is_none()));

        assert_eq!(tables[0].position, Point::new(100.0, 100.0));
        assert_eq!(tables[1].position, Point::new(454.0, 100.0));
        assert_eq!(tables[2].position, Point::new(100.0, 342.0));
    }

    #[test]
    fn test_arranged_tables_do_not_overlap() {
        let floor = FloorPlan::default();
        let tables = floor.arrange_tables(10, 2);
        for a in &tables {
            for b in &tables {
                if a.id == b.id {
                    continue;
                }
                let apart_x = a.position.x + a.dimensions.width < b.position.x
                    || b.position.x + b.dimensions.width < a.position.x;
                let apart_y = a.position.y + a.dimensions.height < b.position.y
                    || b.position.y + b.dimensions.height < a.position.y;
                assert!(apart_x || apart_y, "{} overlaps {}", a.id, b.id);
            }
        }
    }

    #[test]
    fn test_roster_people() {
        let names = vec!["Ada".to_string(), "Ada".to_string(), "Lin".to_string()];
        let people = roster_people(&names);
        assert_eq!(people.len(), 3);
        assert_eq!(people[1].id, PersonId::new("1"));
        assert_eq!(people[1].name, "Ada");
        assert!(people.iter().all(|p| !p.is_locked && p.table_id.is_none()));
    }
}
