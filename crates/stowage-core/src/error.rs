//! Error types for stowage operations

use thiserror::Error;

use crate::grid::Position;

/// Main error type for stowage operations.
#[derive(Debug, Error)]
pub enum StowageError {
    /// Manifest file could not be read or written.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A container floats above an empty cell.
    #[error("container at {position} is not supported by the cell below")]
    UnsupportedContainer { position: Position },

    /// A move was replayed against a plan it does not fit.
    #[error("illegal move {start} -> {end}: {reason}")]
    IllegalMove {
        start: Position,
        end: Position,
        reason: IllegalMoveReason,
    },
}

/// Why a move could not be applied to a plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum IllegalMoveReason {
    /// Start or end lies outside the grid.
    #[error("position outside the grid")]
    OutOfBounds,

    /// The source cell does not hold the weight the move expects.
    #[error("expected weight {expected} at source, found {found}")]
    SourceMismatch { expected: u32, found: u32 },

    /// The destination cell already holds a container.
    #[error("destination holds weight {found}")]
    DestinationOccupied { found: u32 },

    /// Moving an empty slot is meaningless.
    #[error("move carries no container")]
    EmptyContainer,

    /// Another container sits on top of the source.
    #[error("source is buried under another container")]
    Buried,

    /// Nothing would hold the container up at the destination once the
    /// source is vacated.
    #[error("destination is not supported")]
    Unsupported,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = StowageError::UnsupportedContainer {
            position: Position::new(3, 4),
        };
        assert_eq!(
            err.to_string(),
            "container at [03,04] is not supported by the cell below"
        );

        let err = StowageError::IllegalMove {
            start: Position::new(1, 1),
            end: Position::new(1, 2),
            reason: IllegalMoveReason::DestinationOccupied { found: 40 },
        };
        assert_eq!(
            err.to_string(),
            "illegal move [01,01] -> [01,02]: destination holds weight 40"
        );
    }
}
