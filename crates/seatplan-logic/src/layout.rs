//! Seat grid calculator.
//!
//! Maps a table's capacity to its fixed, ordered list of seat slots in the
//! table's interior frame. The mapping is a pure function of capacity and a
//! [`SeatLayout`] parameter set:
//!
//! | Capacity | Arrangement |
//! |----------|-------------|
//! | 1 | one centered seat |
//! | 2 | two seats side by side |
//! | 4 | 2×2 grid, `row = i / 2`, `col = i % 2` |
//! | other | one row at a fixed pitch (untuned fallback) |
//!
//! Two presets exist. [`SeatLayout::DROP_SNAP`] is tuned as drop-target
//! geometry, [`SeatLayout::SEATED`] as post-randomize placement. They are
//! not pixel-identical and are not meant to be. A session uses one layout
//! for everything unless it is given a separate drop-target layout.

use crate::model::{Point, Table, TableId};
use serde::{Deserialize, Serialize};

/// A derived seat: `(table, index, position)`.
///
/// Identity is `(table_id, slot_index)`, so two tables never share a slot
/// even when relative positions coincide.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeatSlot {
    pub table_id: TableId,
    pub slot_index: u32,
    /// Table-relative position.
    pub position: Point,
}

/// Origin and pitch of a row- or grid-shaped arrangement.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SeatRow {
    pub x: f32,
    pub y: f32,
    pub pitch: f32,
}

/// Numeric parameters for every arrangement.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SeatLayout {
    /// Capacity 1.
    pub single: Point,
    /// Capacity 2.
    pub pair: SeatRow,
    /// Capacity 4: column pitch in `quad.pitch`, row pitch separately.
    pub quad: SeatRow,
    pub quad_row_pitch: f32,
    /// Any other capacity.
    pub linear: SeatRow,
}

impl SeatLayout {
    /// Drop-target geometry.
    pub const DROP_SNAP: SeatLayout = SeatLayout {
        single: Point::new(80.0, 50.0),
        pair: SeatRow { x: 3.0, y: 50.0, pitch: 142.0 },
        quad: SeatRow { x: 13.0, y: 10.0, pitch: 142.0 },
        quad_row_pitch: 70.0,
        linear: SeatRow { x: -2.0, y: 25.0, pitch: 102.0 },
    };

    /// Post-randomize placement geometry.
    pub const SEATED: SeatLayout = SeatLayout {
        single: Point::new(100.0, 90.0),
        pair: SeatRow { x: 30.0, y: 90.0, pitch: 140.0 },
        quad: SeatRow { x: 30.0, y: 60.0, pitch: 140.0 },
        quad_row_pitch: 80.0,
        linear: SeatRow { x: 15.0, y: 60.0, pitch: 90.0 },
    };

    /// Position of seat `index` at a table of `capacity` seats.
    ///
    /// Callers keep `index < capacity`; the formula itself does not check.
    pub fn slot_position(&self, capacity: u32, index: u32) -> Point {
        match capacity {
            1 => self.single,
            2 => Point::new(self.pair.x + index as f32 * self.pair.pitch, self.pair.y),
            4 => {
                let row = (index / 2) as f32;
                let col = (index % 2) as f32;
                Point::new(
                    self.quad.x + col * self.quad.pitch,
                    self.quad.y + row * self.quad_row_pitch,
                )
            }
            _ => Point::new(
                self.linear.x + index as f32 * self.linear.pitch,
                self.linear.y,
            ),
        }
    }

    /// Ordered seat positions for a table of `capacity` seats.
    ///
    /// Length is exactly `capacity`. Capacity 0 yields no seats.
    pub fn slots_for_capacity(&self, capacity: u32) -> Vec<Point> {
        (0..capacity)
            .map(|i| self.slot_position(capacity, i))
            .collect()
    }

    /// Seat slots for one table.
    pub fn table_slots(&self, table: &Table) -> Vec<SeatSlot> {
        (0..table.capacity)
            .map(|i| SeatSlot {
                table_id: table.id.clone(),
                slot_index: i,
                position: self.slot_position(table.capacity, i),
            })
            .collect()
    }

    /// Every slot of every table, table order then slot order.
    pub fn all_slots(&self, tables: &[Table]) -> Vec<SeatSlot> {
        tables.iter().flat_map(|t| self.table_slots(t)).collect()
    }
}

impl Default for SeatLayout {
    fn default() -> Self {
        Self::SEATED
    }
}
