//! Seating session - owns the single current classroom snapshot.
//!
//! The engine functions are state-in, state-out. A session is the one place
//! that holds "the current snapshot" and replaces it wholesale after each
//! operation. With no snapshot (before `start`, after `reset`) every
//! operation is a no-op.

use log::{debug, info};
use rand::rngs::StdRng;
use rand::SeedableRng;
use seatplan_logic::floor::FloorPlan;
use seatplan_logic::intake::{validate_intake, IntakeError, IntakeRequest};
use seatplan_logic::layout::SeatLayout;
use seatplan_logic::model::{PersonId, Point, Size, TableId};
use serde::{Deserialize, Serialize};

use crate::classroom::Classroom;
use crate::mutate::{self, TableTarget};
use crate::placement::{self, DropOptions, DropOutcome};
use crate::randomize;
use crate::swap_mode::{SwapRequest, SwapSelection};

/// Session-wide settings.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SessionOptions {
    /// Seat geometry for randomize and occupancy checks. Drops snap to it
    /// too unless `drop_layout` is set.
    pub layout: SeatLayout,
    /// Separate drop-target geometry, e.g. [`SeatLayout::DROP_SNAP`].
    pub drop_layout: Option<SeatLayout>,
    pub floor: FloorPlan,
    /// Fixed RNG seed for reproducible charts (`None` = entropy).
    pub seed: Option<u64>,
    /// Dropping a person onto another person's tile swaps them.
    pub swap_on_drop: bool,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self {
            layout: SeatLayout::default(),
            drop_layout: None,
            floor: FloorPlan::default(),
            seed: None,
            swap_on_drop: false,
        }
    }
}

/// The application-facing owner of seating state.
pub struct SeatingSession {
    current: Option<Classroom>,
    selection: SwapSelection,
    options: SessionOptions,
    rng: StdRng,
}

impl SeatingSession {
    pub fn new(options: SessionOptions) -> Self {
        let rng = match options.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self {
            current: None,
            selection: SwapSelection::Idle,
            options,
            rng,
        }
    }

    /// Validate a request and, if it passes, replace any existing snapshot
    /// with a freshly randomized one.
    ///
    /// On error nothing changes.
    pub fn start(&mut self, request: &IntakeRequest) -> Result<&Classroom, IntakeError> {
        let plan = validate_intake(request)?;
        let classroom = Classroom::from_plan(
            &plan,
            &self.options.floor,
            &self.options.layout,
            &mut self.rng,
        );
        info!(
            "Seating chart created: {} people, {} tables of {}",
            plan.class_size, plan.table_count, plan.table_capacity
        );
        self.selection = SwapSelection::Idle;
        Ok(&*self.current.insert(classroom))
    }

    /// Drop the snapshot and return to the unconfigured state.
    pub fn reset(&mut self) {
        if self.current.take().is_some() {
            info!("Seating chart reset");
        }
        self.selection = SwapSelection::Idle;
    }

    pub fn classroom(&self) -> Option<&Classroom> {
        self.current.as_ref()
    }

    pub fn options(&self) -> &SessionOptions {
        &self.options
    }

    pub fn selection(&self) -> &SwapSelection {
        &self.selection
    }

    /// Replace the snapshot with `f(current)`, if there is one.
    fn apply(&mut self, f: impl FnOnce(&Classroom) -> Classroom) {
        match self.current.as_ref() {
            Some(current) => self.current = Some(f(current)),
            None => debug!("no seating chart; operation ignored"),
        }
    }

    pub fn toggle_lock(&mut self, id: &PersonId) {
        self.apply(|c| mutate::toggle_lock(c, id));
    }

    pub fn move_person(&mut self, id: &PersonId, position: Point, target: TableTarget) {
        self.apply(|c| mutate::move_person(c, id, position, target));
    }

    pub fn swap(&mut self, a: &PersonId, b: &PersonId) {
        self.apply(|c| mutate::swap(c, a, b));
    }

    /// Checked placement at an absolute floor point.
    ///
    /// Returns `None` when there is no snapshot.
    pub fn drop_person(&mut self, id: &PersonId, point: Point) -> Option<DropOutcome> {
        let current = self.current.as_ref()?;
        let options = DropOptions {
            layout: self.options.drop_layout.unwrap_or(self.options.layout),
            swap_on_drop: self.options.swap_on_drop,
        };
        let (next, outcome) = placement::drop_person(current, id, point, &options);
        self.current = Some(next);
        Some(outcome)
    }

    /// Two-click swap: arm, cancel, or complete a swap.
    ///
    /// Returns the swap performed, if this click completed one.
    pub fn select_for_swap(&mut self, id: PersonId) -> Option<SwapRequest> {
        let (next, request) = std::mem::take(&mut self.selection).select(id);
        self.selection = next;
        if let Some(req) = &request {
            self.swap(&req.first, &req.second);
        }
        request
    }

    pub fn randomize(&mut self) {
        match self.current.as_ref() {
            Some(current) => {
                let next = randomize::randomize(current, &self.options.layout, &mut self.rng);
                self.current = Some(next);
            }
            None => debug!("no seating chart; randomize ignored"),
        }
    }

    pub fn move_table(&mut self, id: &TableId, position: Point) {
        self.apply(|c| mutate::move_table(c, id, position));
    }

    pub fn resize_table(&mut self, id: &TableId, size: Size) {
        self.apply(|c| mutate::resize_table(c, id, size));
    }

    pub fn rename_table(&mut self, id: &TableId, name: &str) {
        self.apply(|c| mutate::rename_table(c, id, name));
    }
}

impl Default for SeatingSession {
    fn default() -> Self {
        Self::new(SessionOptions::default())
    }
}
