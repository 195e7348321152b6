//! Pure seating logic for Seatplan.
//!
//! This crate holds the geometry and validation rules of the seating engine.
//! Functions take plain data and return results: no randomness, no global
//! state, no rendering. The engine that owns snapshots and randomization
//! lives in `seatplan-core`.
//!
//! # Module Overview
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`model`] | People, tables, ids, points and sizes |
//! | [`layout`] | Seat grid calculator: capacity → ordered seat slots |
//! | [`occupancy`] | Who sits where, free seats, table headroom |
//! | [`resolver`] | Nearest seat to a drop point, drop-onto-person hits |
//! | [`intake`] | Roster/table-count validation before a classroom exists |
//! | [`floor`] | Initial table grid and roster-to-people conversion |

pub mod floor;
pub mod intake;
pub mod layout;
pub mod model;
pub mod occupancy;
pub mod resolver;
