//! Seatplan Core - seat assignment engine
//!
//! Assigns a roster to seats at grouped tables, randomizes unlocked people,
//! and applies manual moves and swaps. Geometry and validation rules come
//! from `seatplan-logic`; this crate adds snapshots, randomness and the
//! session that owns the current chart.
//!
//! # Architecture
//!
//! - **Snapshots**: a [`classroom::Classroom`] is a plain value; every
//!   operation returns a replacement instead of mutating in place
//! - **Operations**: pure functions in [`randomize`], [`mutate`] and
//!   [`placement`] taking `&Classroom`
//! - **Session**: [`session::SeatingSession`] holds the one live snapshot,
//!   the swap selection, and the RNG
//!
//! # Example
//!
//! ```rust
//! use seatplan_core::prelude::*;
//!
//! let roster: Vec<String> = (1..=10).map(|i| format!("Student {i}")).collect();
//! let mut session = SeatingSession::new(SessionOptions { seed: Some(7), ..Default::default() });
//! session.start(&IntakeRequest::new(roster, 4)).unwrap();
//!
//! session.toggle_lock(&PersonId::new("0"));
//! session.randomize();
//!
//! let room = session.classroom().unwrap();
//! assert!(room.violations().is_empty());
//! ```

pub mod classroom;
pub mod mutate;
pub mod placement;
pub mod randomize;
pub mod session;
pub mod swap_mode;

/// Commonly used types for convenient importing
pub mod prelude {
    pub use crate::classroom::{ClassConfig, Classroom, Violation};
    pub use crate::mutate::TableTarget;
    pub use crate::placement::{DropOptions, DropOutcome, DropRejection};
    pub use crate::session::{SeatingSession, SessionOptions};
    pub use crate::swap_mode::{SwapRequest, SwapSelection};
    pub use seatplan_logic::intake::{IntakeError, IntakeRequest};
    pub use seatplan_logic::layout::{SeatLayout, SeatSlot};
    pub use seatplan_logic::model::{Person, PersonId, Point, Size, Table, TableId};
}
