//! Two-click swap selection.
//!
//! ```text
//! Idle      + select(p)       -> Armed(p)
//! Armed(p)  + select(p)       -> Idle               (cancel)
//! Armed(p)  + select(q), q!=p -> Idle, Swap(p, q)
//! ```

use seatplan_logic::model::PersonId;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SwapSelection {
    #[default]
    Idle,
    Armed(PersonId),
}

/// A swap requested by the second click.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SwapRequest {
    pub first: PersonId,
    pub second: PersonId,
}

impl SwapSelection {
    /// Feed one click. Returns the next state and the swap to perform, if any.
    pub fn select(self, id: PersonId) -> (SwapSelection, Option<SwapRequest>) {
        match self {
            SwapSelection::Idle => (SwapSelection::Armed(id), None),
            SwapSelection::Armed(armed) if armed == id => (SwapSelection::Idle, None),
            SwapSelection::Armed(armed) => (
                SwapSelection::Idle,
                Some(SwapRequest {
                    first: armed,
                    second: id,
                }),
            ),
        }
    }

    pub fn armed(&self) -> Option<&PersonId> {
        match self {
            SwapSelection::Idle => None,
            SwapSelection::Armed(id) => Some(id),
        }
    }
}
