//! Plain data types shared by every seating module.
//!
//! Positions are `f32` layout units. A seated person's position is relative
//! to the interior of their table (below the table header); an unseated
//! person's position is absolute on the classroom floor.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A 2D coordinate in layout units.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const ORIGIN: Point = Point { x: 0.0, y: 0.0 };

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to `other`.
    pub fn distance(&self, other: Point) -> f32 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }

    /// True when both axes differ by strictly less than `tolerance`.
    ///
    /// This is a square window, not a circle.
    pub fn near(&self, other: Point, tolerance: f32) -> bool {
        (self.x - other.x).abs() < tolerance && (self.y - other.y).abs() < tolerance
    }

    pub fn offset(&self, dx: f32, dy: f32) -> Point {
        Point::new(self.x + dx, self.y + dy)
    }
}

/// Width and height of a rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// Stable person identifier, unique within a roster.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PersonId(pub String);

/// Stable table identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TableId(pub String);

impl PersonId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TableId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PersonId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Display for TableId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Someone on the roster.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Person {
    pub id: PersonId,
    pub name: String,
    /// Locked people are skipped by randomization.
    pub is_locked: bool,
    /// `None` means not seated.
    pub table_id: Option<TableId>,
    pub position: Point,
}

impl Person {
    /// A new unlocked, unseated person at the floor origin.
    pub fn new(id: PersonId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            is_locked: false,
            table_id: None,
            position: Point::ORIGIN,
        }
    }

    pub fn is_seated(&self) -> bool {
        self.table_id.is_some()
    }

    pub fn is_at(&self, table_id: &TableId) -> bool {
        self.table_id.as_ref() == Some(table_id)
    }
}

/// A table on the classroom floor.
///
/// Occupants are never stored here; see [`crate::occupancy::occupants`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Table {
    pub id: TableId,
    /// Number of seats. Always at least 1 for tables the engine creates.
    pub capacity: u32,
    /// Top-left corner, absolute.
    pub position: Point,
    pub dimensions: Size,
    /// Optional display name set by the user.
    pub name: Option<String>,
}

impl Table {
    pub fn new(id: TableId, capacity: u32, position: Point, dimensions: Size) -> Self {
        Self {
            id,
            capacity,
            position,
            dimensions,
            name: None,
        }
    }

    /// Name shown in headers: the custom name, or "Table <id>".
    pub fn display_name(&self) -> String {
        match &self.name {
            Some(name) => name.clone(),
            None => format!("Table {}", self.id),
        }
    }

    /// Whether an absolute point falls inside this table's rectangle.
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.position.x
            && point.x <= self.position.x + self.dimensions.width
            && point.y >= self.position.y
            && point.y <= self.position.y + self.dimensions.height
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_near_is_square_window() {
        let a = Point::new(0.0, 0.0);
        // Corner of the window is inside even though it is ~12.7 away.
        assert!(a.near(Point::new(9.0, 9.0), 10.0));
        assert!(!a.near(Point::new(10.0, 0.0), 10.0));
        assert!(!a.near(Point::new(0.0, -10.5), 10.0));
    }

    #[test]
    fn test_distance() {
        let d = Point::new(0.0, 0.0).distance(Point::new(3.0, 4.0));
        assert!((d - 5.0).abs() < 1e-6);
    }

    #[test]
    fn test_display_name() {
        let mut t = Table::new(TableId::new("3"), 4, Point::ORIGIN, Size::new(304.0, 192.0));
        assert_eq!(t.display_name(), "Table 3");
        t.name = Some("Window".into());
        assert_eq!(t.display_name(), "Window");
    }

    #[test]
    fn test_table_contains() {
        let t = Table::new(
            TableId::new("1"),
            2,
            Point::new(100.0, 100.0),
            Size::new(304.0, 192.0),
        );
        assert!(t.contains(Point::new(100.0, 100.0)));
        assert!(t.contains(Point::new(404.0, 292.0)));
        assert!(!t.contains(Point::new(99.0, 150.0)));
        assert!(!t.contains(Point::new(200.0, 293.0)));
    }

    #[test]
    fn test_person_defaults() {
        let p = Person::new(PersonId::new("0"), "Ada");
        assert!(!p.is_locked);
        assert!(!p.is_seated());
        assert_eq!(p.position, Point::ORIGIN);
    }
}
