//! Container moves.

use std::fmt;

use crate::cost::{crane_cost, slide_cost};
use crate::error::IllegalMoveReason;
use crate::grid::{Position, ROWS};

/// How a container travels between two cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MoveKind {
    /// Lifted off the top of one column and lowered onto another.
    Crane,
    /// Pushed sideways along its row.
    Slide,
}

/// A single container relocation: the edge label between two plans.
///
/// `weight` is the weight the source cell must hold when the move is applied;
/// `cost` is the crane time of the move alone, without positioning legs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ContainerMove {
    pub start: Position,
    pub end: Position,
    pub weight: u32,
    pub cost: u32,
    pub kind: MoveKind,
}

impl ContainerMove {
    /// Creates a crane move priced by Manhattan distance.
    pub fn crane(start: Position, end: Position, weight: u32) -> Self {
        Self {
            start,
            end,
            weight,
            cost: crane_cost(start, end),
            kind: MoveKind::Crane,
        }
    }

    /// Creates a slide priced by horizontal distance.
    pub fn slide(start: Position, end: Position, weight: u32) -> Self {
        Self {
            start,
            end,
            weight,
            cost: slide_cost(start, end),
            kind: MoveKind::Slide,
        }
    }

    /// Checks the move against cargo read through `weight_at`.
    ///
    /// The source must hold exactly `weight` with nothing on top, and the
    /// destination must be empty and supported with the source vacated.
    pub fn check_fits<F>(&self, weight_at: F) -> Result<(), IllegalMoveReason>
    where
        F: Fn(Position) -> u32,
    {
        if !self.start.is_in_hold() || !self.end.is_in_hold() {
            return Err(IllegalMoveReason::OutOfBounds);
        }
        if self.weight == 0 {
            return Err(IllegalMoveReason::EmptyContainer);
        }
        let found = weight_at(self.start);
        if found != self.weight {
            return Err(IllegalMoveReason::SourceMismatch {
                expected: self.weight,
                found,
            });
        }
        let found = weight_at(self.end);
        if found != 0 {
            return Err(IllegalMoveReason::DestinationOccupied { found });
        }

        if self.start.row() < ROWS {
            let above = Position::new(self.start.row() + 1, self.start.column());
            if weight_at(above) != 0 {
                return Err(IllegalMoveReason::Buried);
            }
        }
        if self.end.row() > 1 {
            let below = Position::new(self.end.row() - 1, self.end.column());
            if below == self.start || weight_at(below) == 0 {
                return Err(IllegalMoveReason::Unsupported);
            }
        }
        Ok(())
    }

    /// Returns the move that carries the same container back.
    pub fn inverse(&self) -> Self {
        Self {
            start: self.end,
            end: self.start,
            ..*self
        }
    }
}

impl fmt::Display for ContainerMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} -> {} ({} kg, {} min",
            self.start, self.end, self.weight, self.cost
        )?;
        if self.kind == MoveKind::Slide {
            write!(f, ", slide")?;
        }
        write!(f, ")")
    }
}
