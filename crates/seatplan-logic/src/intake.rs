//! Roster intake validation.
//!
//! Before a classroom exists the user supplies a roster, a table size and
//! optionally a table count. This module checks those against the product
//! limits and derives the table count, independent of any form or CLI.
//!
//! ```
//! use seatplan_logic::intake::{validate_intake, IntakeRequest};
//!
//! let roster: Vec<String> = (1..=9).map(|i| format!("Student {i}")).collect();
//! let plan = validate_intake(&IntakeRequest::new(roster, 4)).unwrap();
//! assert_eq!(plan.table_count, 3);
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Smallest class the product accepts.
pub const MIN_CLASS_SIZE: u32 = 9;
/// Largest class the product accepts.
pub const MAX_CLASS_SIZE: u32 = 40;
/// Table sizes offered at intake. The geometry handles any positive size.
pub const SUPPORTED_TABLE_SIZES: [u32; 3] = [1, 2, 4];

/// What the user asked for.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IntakeRequest {
    /// Display names in roster order. Duplicates are fine.
    pub roster: Vec<String>,
    /// Seats per table.
    pub table_capacity: u32,
    /// Desired number of tables (`None` = minimum feasible).
    pub table_count: Option<u32>,
    /// Whether the renderer draws a divider down each table.
    pub show_divider: bool,
}

impl IntakeRequest {
    pub fn new(roster: Vec<String>, table_capacity: u32) -> Self {
        Self {
            roster,
            table_capacity,
            table_count: None,
            show_divider: false,
        }
    }

    pub fn with_table_count(mut self, count: u32) -> Self {
        self.table_count = Some(count);
        self
    }

    pub fn with_divider(mut self, show: bool) -> Self {
        self.show_divider = show;
        self
    }
}

/// A request that passed validation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IntakePlan {
    pub roster: Vec<String>,
    pub class_size: u32,
    pub table_capacity: u32,
    pub table_count: u32,
    pub show_divider: bool,
}

/// Why intake rejected a request.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IntakeError {
    #[error("roster is empty")]
    EmptyRoster,
    #[error("class size {size} is below the minimum of {min}")]
    ClassTooSmall { size: u32, min: u32 },
    #[error("class size {size} is above the maximum of {max}")]
    ClassTooLarge { size: u32, max: u32 },
    #[error("table size {0} is not supported (choose 1, 2 or 4)")]
    UnsupportedCapacity(u32),
    #[error(
        "minimum {minimum} tables required for {class_size} students with table size {capacity} \
         ({requested} requested)"
    )]
    TooFewTables {
        requested: u32,
        minimum: u32,
        class_size: u32,
        capacity: u32,
    },
}

/// Fewest tables that seat `class_size` people at `capacity` each.
///
/// `capacity` must be positive.
pub fn min_tables(class_size: u32, capacity: u32) -> u32 {
    class_size.div_ceil(capacity)
}

/// Validate a request, returning the first violated rule.
///
/// Names are trimmed and blank entries dropped before the class is counted.
pub fn validate_intake(request: &IntakeRequest) -> Result<IntakePlan, IntakeError> {
    let roster: Vec<String> = request
        .roster
        .iter()
        .map(|name| name.trim())
        .filter(|name| !name.is_empty())
        .map(str::to_string)
        .collect();
    if roster.is_empty() {
        return Err(IntakeError::EmptyRoster);
    }

    let class_size = roster.len() as u32;
    if class_size < MIN_CLASS_SIZE {
        return Err(IntakeError::ClassTooSmall {
            size: class_size,
            min: MIN_CLASS_SIZE,
        });
    }
    if class_size > MAX_CLASS_SIZE {
        return Err(IntakeError::ClassTooLarge {
            size: class_size,
            max: MAX_CLASS_SIZE,
        });
    }

    if !SUPPORTED_TABLE_SIZES.contains(&request.table_capacity) {
        return Err(IntakeError::UnsupportedCapacity(request.table_capacity));
    }

    let minimum = min_tables(class_size, request.table_capacity);
    let table_count = match request.table_count {
        Some(requested) if requested < minimum => {
            return Err(IntakeError::TooFewTables {
                requested,
                minimum,
                class_size,
                capacity: request.table_capacity,
            });
        }
        Some(requested) => requested,
        None => minimum,
    };

    Ok(IntakePlan {
        roster,
        class_size,
        table_capacity: request.table_capacity,
        table_count,
        show_divider: request.show_divider,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn roster(n: usize) -> Vec<String> {
        (0..n).map(|i| format!("Student {i}")).collect()
    }

    #[test]
    fn test_min_tables() {
        assert_eq!(min_tables(9, 4), 3);
        assert_eq!(min_tables(8, 4), 2);
        assert_eq!(min_tables(40, 1), 40);
        assert_eq!(min_tables(9, 2), 5);
    }

    #[test]
    fn test_default_table_count_is_minimum() {
        let plan = validate_intake(&IntakeRequest::new(roster(9), 4)).unwrap();
        assert_eq!(plan.class_size, 9);
        assert_eq!(plan.table_count, 3);
        assert_eq!(plan.table_capacity, 4);
    }

    #[test]
    fn test_too_few_tables_reports_minimum() {
        let req = IntakeRequest::new(roster(10), 4).with_table_count(2);
        let err = validate_intake(&req).unwrap_err();
        assert_eq!(
            err,
            IntakeError::TooFewTables {
                requested: 2,
                minimum: 3,
                class_size: 10,
                capacity: 4
            }
        );
        assert!(err.to_string().contains("minimum 3 tables"));
    }

    #[test]
    fn test_extra_tables_accepted() {
        let req = IntakeRequest::new(roster(10), 4).with_table_count(6);
        assert_eq!(validate_intake(&req).unwrap().table_count, 6);
    }

    #[test]
    fn test_class_size_bounds() {
        assert_eq!(
            validate_intake(&IntakeRequest::new(roster(8), 4)),
            Err(IntakeError::ClassTooSmall { size: 8, min: 9 })
        );
        assert_eq!(
            validate_intake(&IntakeRequest::new(roster(41), 4)),
            Err(IntakeError::ClassTooLarge { size: 41, max: 40 })
        );
        assert!(validate_intake(&IntakeRequest::new(roster(40), 1)).is_ok());
        assert_eq!(
            validate_intake(&IntakeRequest::new(vec![], 4)),
            Err(IntakeError::EmptyRoster)
        );
    }

    #[test]
    fn test_unsupported_capacity() {
        assert_eq!(
            validate_intake(&IntakeRequest::new(roster(12), 3)),
            Err(IntakeError::UnsupportedCapacity(3))
        );
        assert_eq!(
            validate_intake(&IntakeRequest::new(roster(12), 0)),
            Err(IntakeError::UnsupportedCapacity(0))
        );
    }

    #[test]
    fn test_blank_names_do_not_count() {
        let mut names = roster(8);
        names.push("   ".to_string());
        names.push(String::new());
        assert_eq!(
            validate_intake(&IntakeRequest::new(names, 4)),
            Err(IntakeError::ClassTooSmall { size: 8, min: 9 })
        );

        let blanks = vec![" ".to_string(), "\t".to_string()];
        assert_eq!(
            validate_intake(&IntakeRequest::new(blanks, 4)),
            Err(IntakeError::EmptyRoster)
        );
    }

    #[test]
    fn test_roster_is_trimmed() {
        let mut names: Vec<String> = roster(9).into_iter().map(|n| format!("  {n} ")).collect();
        names.insert(3, "".to_string());
        let plan = validate_intake(&IntakeRequest::new(names, 4)).unwrap();
        assert_eq!(plan.class_size, 9);
        assert_eq!(plan.roster, roster(9));
    }

    #[test]
    fn test_duplicate_names_allowed() {
        let names = vec!["Sam".to_string(); 12];
        let plan = validate_intake(&IntakeRequest::new(names, 2)).unwrap();
        assert_eq!(plan.class_size, 12);
        assert_eq!(plan.table_count, 6);
    }
}
