//! A single tree and the fire-spread rule it runs each tick

use crate::core_types::{Condition, Position};
use crate::grid::ForestGrid;
use serde::{Deserialize, Serialize};

/// A tree occupying one grid slot.
///
/// The tree's identity is its position. Condition changes only go forward through
/// [`TreeCell::ignite`] and [`TreeCell::burn_out`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreeCell {
    position: Position,
    condition: Condition,
}

impl TreeCell {
    /// Create an unburned tree
    pub fn new(position: Position) -> Self {
        TreeCell {
            position,
            condition: Condition::Fine,
        }
    }

    /// Create a tree that is already burning (ignition edge)
    pub fn burning(position: Position) -> Self {
        TreeCell {
            position,
            condition: Condition::OnFire,
        }
    }

    pub fn id(&self) -> Position {
        self.position
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn condition(&self) -> Condition {
        self.condition
    }

    pub fn is_burning(&self) -> bool {
        self.condition.is_burning()
    }

    /// Set a fine tree on fire. Returns whether the condition changed.
    pub fn ignite(&mut self) -> bool {
        if self.condition == Condition::Fine {
            self.condition = Condition::OnFire;
            true
        } else {
            false
        }
    }

    /// Finish burning. Returns whether the condition changed.
    pub fn burn_out(&mut self) -> bool {
        if self.condition == Condition::OnFire {
            self.condition = Condition::BurnedOut;
            true
        } else {
            false
        }
    }
}

/// Advance the tree at `id` by one step.
///
/// A burning tree ignites every fine von Neumann neighbour, then burns out. Fine and
/// burned-out trees are left alone, as is an empty slot. Changes land in `grid`
/// immediately, so trees stepped later in the same tick see them.
///
/// Returns the number of neighbours ignited.
pub fn step(grid: &mut ForestGrid, id: Position) -> usize {
    if !grid.get(id).is_some_and(TreeCell::is_burning) {
        return 0;
    }

    let mut ignited = 0;
    for neighbor in grid.neighbors_of(id) {
        if let Some(tree) = grid.get_mut(neighbor) {
            if tree.ignite() {
                ignited += 1;
            }
        }
    }

    if let Some(tree) = grid.get_mut(id) {
        tree.burn_out();
    }
    ignited
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_grid(height: usize, width: usize) -> ForestGrid {
        let mut grid = ForestGrid::new(height, width);
        for row in 0..height {
            for col in 0..width {
                let pos = Position::new(row, col);
                grid.place(pos, TreeCell::new(pos)).unwrap();
            }
        }
        grid
    }

    #[test]
    fn test_ignite_only_from_fine() {
        let mut tree = TreeCell::new(Position::new(0, 0));
        assert!(tree.ignite());
        assert_eq!(tree.condition(), Condition::OnFire);
        assert!(!tree.ignite());

        assert!(tree.burn_out());
        assert!(!tree.ignite());
        assert_eq!(tree.condition(), Condition::BurnedOut);
    }

    #[test]
    fn test_fine_tree_cannot_burn_out_directly() {
        let mut tree = TreeCell::new(Position::new(0, 0));
        assert!(!tree.burn_out());
        assert_eq!(tree.condition(), Condition::Fine);
    }

    #[test]
    fn test_burning_tree_spreads_to_fine_neighbors() {
        let mut grid = full_grid(3, 3);
        let center = Position::new(1, 1);
        grid.get_mut(center).unwrap().ignite();

        let ignited = step(&mut grid, center);

        assert_eq!(ignited, 4);
        assert_eq!(grid.condition_at(center), Some(Condition::BurnedOut));
        for pos in center.von_neumann() {
            assert_eq!(grid.condition_at(pos), Some(Condition::OnFire));
        }
        // Diagonals are untouched
        assert_eq!(grid.condition_at(Position::new(0, 0)), Some(Condition::Fine));
        assert_eq!(grid.condition_at(Position::new(2, 2)), Some(Condition::Fine));
    }

    #[test]
    fn test_burned_out_neighbors_are_not_reignited() {
        let mut grid = full_grid(1, 3);
        let left = Position::new(0, 0);
        let middle = Position::new(0, 1);
        grid.get_mut(left).unwrap().ignite();
        grid.get_mut(left).unwrap().burn_out();
        grid.get_mut(middle).unwrap().ignite();

        assert_eq!(step(&mut grid, middle), 1);
        assert_eq!(grid.condition_at(left), Some(Condition::BurnedOut));
        assert_eq!(grid.condition_at(Position::new(0, 2)), Some(Condition::OnFire));
    }

    #[test]
    fn test_fine_and_burned_trees_are_noops() {
        let mut grid = full_grid(2, 2);
        let before = grid.clone();
        assert_eq!(step(&mut grid, Position::new(0, 0)), 0);
        assert_eq!(grid, before);

        grid.get_mut(Position::new(1, 1)).unwrap().ignite();
        grid.get_mut(Position::new(1, 1)).unwrap().burn_out();
        let before = grid.clone();
        assert_eq!(step(&mut grid, Position::new(1, 1)), 0);
        assert_eq!(grid, before);
    }

    #[test]
    fn test_step_on_empty_slot_is_noop() {
        let mut grid = ForestGrid::new(2, 2);
        assert_eq!(step(&mut grid, Position::new(0, 1)), 0);
        assert_eq!(grid.agent_count(), 0);
    }
}
