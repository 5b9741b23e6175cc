//! Error types for grid placement, scheduling and model configuration

use crate::core_types::Position;

/// Errors raised while building a forest.
///
/// All of these are construction-time failures. Once a model exists, stepping it
/// cannot fail.
#[derive(Debug, Clone, PartialEq)]
pub enum SimError {
    /// Position lies outside the grid dimensions
    OutOfBounds {
        position: Position,
        height: usize,
        width: usize,
    },
    /// Slot already holds a tree
    OccupiedSlot(Position),
    /// Same tree added to the scheduler twice
    DuplicateAgent(Position),
    /// Tree's own position differs from the slot it is being placed into
    PositionMismatch { slot: Position, agent: Position },
    /// Model parameters rejected by validation
    InvalidConfig(String),
}

impl std::fmt::Display for SimError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SimError::OutOfBounds {
                position,
                height,
                width,
            } => write!(f, "Position {position} is outside the {height}x{width} grid"),
            SimError::OccupiedSlot(position) => write!(f, "Slot {position} is already occupied"),
            SimError::DuplicateAgent(id) => write!(f, "Tree {id} is already scheduled"),
            SimError::PositionMismatch { slot, agent } => {
                write!(f, "Tree at {agent} cannot be placed into slot {slot}")
            }
            SimError::InvalidConfig(msg) => write!(f, "Invalid model configuration: {msg}"),
        }
    }
}

impl std::error::Error for SimError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_names_offending_position() {
        let err = SimError::OutOfBounds {
            position: Position::new(4, 7),
            height: 3,
            width: 3,
        };
        assert_eq!(err.to_string(), "Position (4, 7) is outside the 3x3 grid");

        let err = SimError::OccupiedSlot(Position::new(1, 2));
        assert_eq!(err.to_string(), "Slot (1, 2) is already occupied");
    }
}
