//! Fixed-order activation of every tree, once per tick

use crate::agent;
use crate::core_types::Position;
use crate::error::SimError;
use crate::grid::ForestGrid;
use rustc_hash::FxHashSet;

/// Ordered list of tree ids, stepped in insertion order.
///
/// Burned-out trees are never removed; they keep receiving no-op steps so the
/// scheduled count stays equal to the tree count.
#[derive(Debug, Clone, Default)]
pub struct Scheduler {
    order: Vec<Position>,
    members: FxHashSet<Position>,
}

impl Scheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a tree id.
    ///
    /// # Errors
    /// `DuplicateAgent` if the id is already scheduled.
    pub fn add(&mut self, id: Position) -> Result<(), SimError> {
        if !self.members.insert(id) {
            return Err(SimError::DuplicateAgent(id));
        }
        self.order.push(id);
        Ok(())
    }

    /// Run one tick: step every scheduled tree once, in insertion order.
    ///
    /// Returns the number of trees ignited during the tick.
    pub fn step(&self, grid: &mut ForestGrid) -> usize {
        self.order.iter().map(|&id| agent::step(grid, id)).sum()
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn contains(&self, id: Position) -> bool {
        self.members.contains(&id)
    }

    /// Scheduled ids in activation order
    pub fn iter(&self) -> impl Iterator<Item = Position> + '_ {
        self.order.iter().copied()
    }
}
