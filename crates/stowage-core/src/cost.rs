//! Crane-time cost model.
//!
//! Costs are in crane minutes:
//! - **Crane lift**: Manhattan distance between source and destination cells.
//! - **Slide**: horizontal distance only, the row never changes.
//! - **Positioning legs**: travel between the PARK spot above the hold and a
//!   cell. These are never part of the search; a session adds them once after
//!   a plan is produced.

use crate::grid::{Position, ROWS};

/// The crane's home position, one tier above the hold over the first bay.
pub const PARK: Position = Position::new(ROWS + 1, 1);

/// Cost of lifting a container from `from` and lowering it at `to`.
#[inline]
pub fn crane_cost(from: Position, to: Position) -> u32 {
    (from.row().abs_diff(to.row()) + from.column().abs_diff(to.column())) as u32
}

/// Cost of sliding a container along its row from `from` to `to`.
#[inline]
pub fn slide_cost(from: Position, to: Position) -> u32 {
    debug_assert_eq!(from.row(), to.row(), "slides never change row");
    from.column().abs_diff(to.column()) as u32
}

/// Cost of moving the empty crane from PARK to `pos`.
///
/// Horizontal distance to the position's column plus the vertical drop from
/// the PARK tier down to the position's row.
#[inline]
pub fn park_to_position_cost(pos: Position) -> u32 {
    (pos.column().abs_diff(PARK.column()) + PARK.row().abs_diff(pos.row())) as u32
}

/// Cost of returning the crane from `pos` to PARK.
#[inline]
pub fn position_to_park_cost(pos: Position) -> u32 {
    park_to_position_cost(pos)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_crane_cost_is_manhattan() {
        assert_eq!(crane_cost(Position::new(2, 6), Position::new(1, 7)), 2);
        assert_eq!(crane_cost(Position::new(1, 1), Position::new(5, 12)), 15);
        assert_eq!(crane_cost(Position::new(3, 3), Position::new(3, 3)), 0);
    }

    #[test]
    fn test_slide_cost_is_horizontal() {
        assert_eq!(slide_cost(Position::new(4, 2), Position::new(4, 9)), 7);
        assert_eq!(slide_cost(Position::new(4, 9), Position::new(4, 2)), 7);
    }

    #[test]
    fn test_park_legs() {
        assert_eq!(PARK, Position::new(9, 1));
        // Straight down the first bay.
        assert_eq!(park_to_position_cost(Position::new(1, 1)), 8);
        // Across to bay 12 then down to tier 8.
        assert_eq!(park_to_position_cost(Position::new(8, 12)), 12);
        assert_eq!(position_to_park_cost(Position::new(3, 5)), 10);
    }

    #[test]
    fn test_park_legs_are_symmetric() {
        for row in 1..=ROWS {
            for column in 1..=crate::grid::COLUMNS {
                let pos = Position::new(row, column);
                assert_eq!(park_to_position_cost(pos), position_to_park_cost(pos));
            }
        }
    }
}
