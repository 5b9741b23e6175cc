//! Fixed-size 2D forest grid with at most one tree per slot
//!
//! The grid is non-toroidal: cells on an edge have fewer neighbours. Slots are
//! stored in row-major order, `row * width + col`.

use crate::agent::TreeCell;
use crate::core_types::{Condition, Position};
use crate::error::SimError;
use serde::{Deserialize, Serialize};

/// Rectangular grid of tree slots
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForestGrid {
    height: usize,
    width: usize,
    slots: Vec<Option<TreeCell>>,
}

impl ForestGrid {
    /// Create an empty grid
    pub fn new(height: usize, width: usize) -> Self {
        ForestGrid {
            height,
            width,
            slots: vec![None; height * width],
        }
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn in_bounds(&self, position: Position) -> bool {
        position.row < self.height && position.col < self.width
    }

    #[inline]
    fn index(&self, position: Position) -> Option<usize> {
        self.in_bounds(position)
            .then(|| position.row * self.width + position.col)
    }

    /// Put a tree into an empty slot.
    ///
    /// # Errors
    /// Checked in this order: `OutOfBounds` if the slot is outside the grid,
    /// `OccupiedSlot` if it already holds a tree, `PositionMismatch` if the tree
    /// belongs to a different slot.
    pub fn place(&mut self, position: Position, agent: TreeCell) -> Result<(), SimError> {
        let idx = self.index(position).ok_or(SimError::OutOfBounds {
            position,
            height: self.height,
            width: self.width,
        })?;
        if self.slots[idx].is_some() {
            return Err(SimError::OccupiedSlot(position));
        }
        if agent.position() != position {
            return Err(SimError::PositionMismatch {
                slot: position,
                agent: agent.position(),
            });
        }
        self.slots[idx] = Some(agent);
        Ok(())
    }

    /// Tree at a position, if the slot exists and is occupied
    pub fn get(&self, position: Position) -> Option<&TreeCell> {
        self.index(position).and_then(|idx| self.slots[idx].as_ref())
    }

    pub fn get_mut(&mut self, position: Position) -> Option<&mut TreeCell> {
        self.index(position)
            .and_then(move |idx| self.slots[idx].as_mut())
    }

    pub fn condition_at(&self, position: Position) -> Option<Condition> {
        self.get(position).map(TreeCell::condition)
    }

    /// Occupied von Neumann neighbours (up, down, left, right) of a position.
    ///
    /// Out-of-range directions are skipped. A position outside the grid has no
    /// neighbours.
    pub fn neighbors_of(&self, position: Position) -> Vec<Position> {
        if !self.in_bounds(position) {
            return Vec::new();
        }
        position
            .von_neumann()
            .filter(|&pos| self.get(pos).is_some())
            .collect()
    }

    /// Every slot with its occupant, in sweep order.
    ///
    /// Sweep order visits columns from the far edge (`width - 1`) back to the
    /// ignition edge (`0`), rows top to bottom within each column. Population and
    /// scheduling both follow it.
    pub fn iterate_all(&self) -> Vec<(Position, Option<&TreeCell>)> {
        sweep_order(self.height, self.width)
            .map(|pos| (pos, self.get(pos)))
            .collect()
    }

    /// Occupied slots in storage order
    pub fn agents(&self) -> impl Iterator<Item = &TreeCell> {
        self.slots.iter().flatten()
    }

    pub fn agent_count(&self) -> usize {
        self.agents().count()
    }

    /// Number of trees currently in `condition`
    pub fn count(&self, condition: Condition) -> usize {
        self.agents()
            .filter(|tree| tree.condition() == condition)
            .count()
    }
}

/// Slot positions of a `height x width` grid in sweep order
pub fn sweep_order(height: usize, width: usize) -> impl Iterator<Item = Position> {
    (0..width)
        .rev()
        .flat_map(move |col| (0..height).map(move |row| Position::new(row, col)))
}
