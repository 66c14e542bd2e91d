//! Ship grid geometry.
//!
//! The hold is a fixed grid of `ROWS` tiers by `COLUMNS` bays. Tier 1 is the
//! bottom of the hold; bays `1..=PORT_COLUMNS` form the port side and the
//! remaining bays form the starboard side.

use std::fmt;

/// Number of tiers in the hold.
pub const ROWS: usize = 8;

/// Number of bays across the ship.
pub const COLUMNS: usize = 12;

/// Number of bays on the port side.
pub const PORT_COLUMNS: usize = COLUMNS / 2;

/// Raw container weights indexed as `grid[row][column]`, zero-based with
/// row 0 at the bottom. A weight of 0 is an empty cell.
pub type Grid = [[u32; COLUMNS]; ROWS];

/// A 1-indexed `(row, column)` cell position.
///
/// Positions are not validated on construction so that locations outside the
/// hold (such as the crane's PARK spot) can be expressed. Use
/// [`Position::checked`] when reading external input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    row: usize,
    column: usize,
}

impl Position {
    /// Creates a position from 1-indexed coordinates.
    #[inline]
    pub const fn new(row: usize, column: usize) -> Self {
        Self { row, column }
    }

    /// Creates a position, returning `None` if it lies outside the hold.
    pub fn checked(row: usize, column: usize) -> Option<Self> {
        let pos = Self::new(row, column);
        pos.is_in_hold().then_some(pos)
    }

    /// Creates a position from zero-based grid indices.
    #[inline]
    pub const fn from_index(row_index: usize, column_index: usize) -> Self {
        Self::new(row_index + 1, column_index + 1)
    }

    /// Returns the 1-indexed row (tier).
    #[inline]
    pub const fn row(&self) -> usize {
        self.row
    }

    /// Returns the 1-indexed column (bay).
    #[inline]
    pub const fn column(&self) -> usize {
        self.column
    }

    /// Returns the zero-based row index into a [`Grid`].
    #[inline]
    pub const fn row_index(&self) -> usize {
        self.row - 1
    }

    /// Returns the zero-based column index into a [`Grid`].
    #[inline]
    pub const fn column_index(&self) -> usize {
        self.column - 1
    }

    /// Returns true if the position addresses a cell of the hold.
    pub fn is_in_hold(&self) -> bool {
        (1..=ROWS).contains(&self.row) && (1..=COLUMNS).contains(&self.column)
    }

    /// Returns the side of the ship this position's column belongs to.
    pub fn side(&self) -> Side {
        Side::of_column_index(self.column_index())
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{:02},{:02}]", self.row, self.column)
    }
}

/// One half of the ship.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Side {
    Port,
    Starboard,
}

impl Side {
    /// Returns the side a zero-based column index belongs to.
    #[inline]
    pub fn of_column_index(column_index: usize) -> Self {
        if column_index < PORT_COLUMNS {
            Side::Port
        } else {
            Side::Starboard
        }
    }

    /// Returns the zero-based column indices of this side.
    pub fn column_indices(self) -> std::ops::Range<usize> {
        match self {
            Side::Port => 0..PORT_COLUMNS,
            Side::Starboard => PORT_COLUMNS..COLUMNS,
        }
    }

    /// Returns the other side.
    pub fn opposite(self) -> Self {
        match self {
            Side::Port => Side::Starboard,
            Side::Starboard => Side::Port,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Port => write!(f, "Port"),
            Side::Starboard => write!(f, "Starboard"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_display_is_zero_padded() {
        assert_eq!(Position::new(1, 7).to_string(), "[01,07]");
        assert_eq!(Position::new(8, 12).to_string(), "[08,12]");
    }

    #[test]
    fn test_checked_rejects_outside_hold() {
        assert!(Position::checked(0, 1).is_none());
        assert!(Position::checked(1, 0).is_none());
        assert!(Position::checked(ROWS + 1, 1).is_none());
        assert!(Position::checked(1, COLUMNS + 1).is_none());
        assert_eq!(Position::checked(8, 12), Some(Position::new(8, 12)));
    }

    #[test]
    fn test_index_round_trip() {
        let pos = Position::from_index(0, 11);
        assert_eq!(pos, Position::new(1, 12));
        assert_eq!(pos.row_index(), 0);
        assert_eq!(pos.column_index(), 11);
    }

    #[test]
    fn test_sides() {
        assert_eq!(Position::new(1, 6).side(), Side::Port);
        assert_eq!(Position::new(1, 7).side(), Side::Starboard);
        assert_eq!(Side::Port.column_indices(), 0..6);
        assert_eq!(Side::Starboard.column_indices(), 6..12);
        assert_eq!(Side::Port.opposite(), Side::Starboard);
    }
}
