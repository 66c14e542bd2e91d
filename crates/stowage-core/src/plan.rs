//! Immutable stowage plans.
//!
//! A [`StowagePlan`] is one loading configuration of the hold. Plans are
//! never mutated: applying a move derives a fresh plan and leaves the parent
//! untouched, so sibling branches of a search tree cannot alias each other.
//! Port and starboard totals are carried along and adjusted arithmetically
//! on every derived plan rather than rescanned.

use std::fmt;
use std::hash::{Hash, Hasher};

use tracing::warn;

use crate::error::StowageError;
use crate::grid::{Grid, Position, Side, COLUMNS, ROWS};
use crate::moves::ContainerMove;

/// A snapshot of the hold with derived side weights.
///
/// Equality and hashing look at grid contents only, so two plans reached by
/// different move sequences compare equal when the containers sit in the
/// same cells.
#[derive(Clone, Debug)]
pub struct StowagePlan {
    grid: Grid,
    port_weight: u64,
    starboard_weight: u64,
    /// Total weight of the root plan, inherited unchanged by every derived
    /// plan so the balance threshold stays fixed for a whole session.
    original_total_weight: u64,
}

impl StowagePlan {
    /// Creates a plan with an empty hold.
    pub fn empty() -> Self {
        Self {
            grid: [[0; COLUMNS]; ROWS],
            port_weight: 0,
            starboard_weight: 0,
            original_total_weight: 0,
        }
    }

    /// Builds a root plan from a raw grid.
    ///
    /// # Errors
    ///
    /// Returns [`StowageError::UnsupportedContainer`] for the lowest
    /// container that sits above an empty cell.
    pub fn from_grid(grid: Grid) -> Result<Self, StowageError> {
        for row in 1..ROWS {
            for column in 0..COLUMNS {
                if grid[row][column] != 0 && grid[row - 1][column] == 0 {
                    return Err(StowageError::UnsupportedContainer {
                        position: Position::from_index(row, column),
                    });
                }
            }
        }

        let (port_weight, starboard_weight) = side_weights(&grid);
        Ok(Self {
            grid,
            port_weight,
            starboard_weight,
            original_total_weight: port_weight + starboard_weight,
        })
    }

    /// Builds a root plan from `(position, weight)` cargo entries.
    ///
    /// Entries outside the hold are dropped with a warning. When two entries
    /// name the same cell the later one wins.
    pub fn from_cargo<I>(cargo: I) -> Result<Self, StowageError>
    where
        I: IntoIterator<Item = (Position, u32)>,
    {
        let mut grid = [[0; COLUMNS]; ROWS];
        for (position, weight) in cargo {
            if !position.is_in_hold() {
                warn!(%position, weight, "dropping cargo outside the hold");
                continue;
            }
            let cell = &mut grid[position.row_index()][position.column_index()];
            if *cell != 0 {
                warn!(%position, previous = *cell, weight, "cargo listed twice, keeping the later entry");
            }
            *cell = weight;
        }
        Self::from_grid(grid)
    }

    /// Returns the raw grid.
    #[inline]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Returns the weight at `position`, 0 for an empty cell.
    ///
    /// # Panics
    ///
    /// Panics if `position` lies outside the hold.
    #[inline]
    pub fn weight_at(&self, position: Position) -> u32 {
        self.grid[position.row_index()][position.column_index()]
    }

    /// Returns true if the cell at `position` is empty.
    #[inline]
    pub fn is_empty_at(&self, position: Position) -> bool {
        self.weight_at(position) == 0
    }

    /// Total weight of the port half.
    #[inline]
    pub fn port_weight(&self) -> u64 {
        self.port_weight
    }

    /// Total weight of the starboard half.
    #[inline]
    pub fn starboard_weight(&self) -> u64 {
        self.starboard_weight
    }

    /// Total weight currently in the hold.
    #[inline]
    pub fn total_weight(&self) -> u64 {
        self.port_weight + self.starboard_weight
    }

    /// Total weight of the root plan this plan was derived from.
    #[inline]
    pub fn original_total_weight(&self) -> u64 {
        self.original_total_weight
    }

    /// Returns `|port - starboard|`.
    #[inline]
    pub fn imbalance(&self) -> u64 {
        self.port_weight.abs_diff(self.starboard_weight)
    }

    /// Returns the heavier side, or `None` when both sides weigh the same.
    pub fn heavier_side(&self) -> Option<Side> {
        match self.port_weight.cmp(&self.starboard_weight) {
            std::cmp::Ordering::Greater => Some(Side::Port),
            std::cmp::Ordering::Less => Some(Side::Starboard),
            std::cmp::Ordering::Equal => None,
        }
    }

    /// Returns true if the imbalance is strictly below `percent` % of the
    /// original total weight.
    #[inline]
    pub fn is_within_tolerance(&self, percent: u32) -> bool {
        self.imbalance() * 100 < self.original_total_weight * u64::from(percent)
    }

    /// Returns the number of occupied cells.
    pub fn container_count(&self) -> usize {
        self.grid
            .iter()
            .flat_map(|row| row.iter())
            .filter(|&&w| w != 0)
            .count()
    }

    /// Iterates over occupied cells in row-major order from the bottom tier.
    pub fn containers(&self) -> impl Iterator<Item = (Position, u32)> + '_ {
        self.grid.iter().enumerate().flat_map(|(row, cells)| {
            cells
                .iter()
                .enumerate()
                .filter(|&(_, &w)| w != 0)
                .map(move |(column, &w)| (Position::from_index(row, column), w))
        })
    }

    /// Returns the number of stacked containers in a column (zero-based index).
    ///
    /// Because every container is supported, this is also the row index of
    /// the column's lowest free cell.
    pub fn column_height(&self, column_index: usize) -> usize {
        (0..ROWS)
            .take_while(|&row| self.grid[row][column_index] != 0)
            .count()
    }

    /// Returns the topmost container of a column, if any.
    pub fn top_container(&self, column_index: usize) -> Option<(Position, u32)> {
        (0..ROWS).rev().find_map(|row| {
            let weight = self.grid[row][column_index];
            (weight != 0).then(|| (Position::from_index(row, column_index), weight))
        })
    }

    /// Returns the lowest free cell of a column, or `None` if it is full.
    pub fn next_free(&self, column_index: usize) -> Option<Position> {
        let height = self.column_height(column_index);
        (height < ROWS).then(|| Position::from_index(height, column_index))
    }

    /// Returns true if a container could rest at `position`: bottom tier, or
    /// an occupied cell directly below.
    pub fn is_supported(&self, position: Position) -> bool {
        let row = position.row_index();
        row == 0 || self.grid[row - 1][position.column_index()] != 0
    }

    /// Returns true if nothing sits directly above `position`.
    pub fn is_exposed(&self, position: Position) -> bool {
        let row = position.row_index();
        row + 1 == ROWS || self.grid[row + 1][position.column_index()] == 0
    }

    /// Derives the plan that results from `mv`.
    ///
    /// # Errors
    ///
    /// Returns [`StowageError::IllegalMove`] for any move that
    /// [`ContainerMove::check_fits`] rejects, such as a buried source or a
    /// destination with nothing below it.
    pub fn try_apply(&self, mv: &ContainerMove) -> Result<StowagePlan, StowageError> {
        mv.check_fits(|position| self.weight_at(position))
            .map_err(|reason| StowageError::IllegalMove {
                start: mv.start,
                end: mv.end,
                reason,
            })?;

        let mut next = self.clone();
        next.grid[mv.start.row_index()][mv.start.column_index()] = 0;
        next.grid[mv.end.row_index()][mv.end.column_index()] = mv.weight;

        let weight = u64::from(mv.weight);
        match mv.start.side() {
            Side::Port => next.port_weight -= weight,
            Side::Starboard => next.starboard_weight -= weight,
        }
        match mv.end.side() {
            Side::Port => next.port_weight += weight,
            Side::Starboard => next.starboard_weight += weight,
        }
        Ok(next)
    }

    /// Derives the plan that results from `mv`.
    ///
    /// # Panics
    ///
    /// Panics if the move does not fit this plan. Moves produced by the move
    /// generator always fit; a panic here means the generator is broken.
    pub fn apply(&self, mv: &ContainerMove) -> StowagePlan {
        match self.try_apply(mv) {
            Ok(next) => next,
            Err(err) => panic!("called `StowagePlan::apply()` with a move that does not fit: {err}"),
        }
    }

    /// Replays a move sequence with checked application.
    pub fn replay<'a, I>(&self, moves: I) -> Result<StowagePlan, StowageError>
    where
        I: IntoIterator<Item = &'a ContainerMove>,
    {
        moves
            .into_iter()
            .try_fold(self.clone(), |plan, mv| plan.try_apply(mv))
    }
}

impl Default for StowagePlan {
    fn default() -> Self {
        Self::empty()
    }
}

impl PartialEq for StowagePlan {
    fn eq(&self, other: &Self) -> bool {
        self.grid == other.grid
    }
}

impl Eq for StowagePlan {}

impl Hash for StowagePlan {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.grid.hash(state);
    }
}

impl fmt::Display for StowagePlan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in (0..ROWS).rev() {
            write!(f, "{:>2} |", row + 1)?;
            for column in 0..COLUMNS {
                if column == COLUMNS / 2 {
                    write!(f, " |")?;
                }
                match self.grid[row][column] {
                    0 => write!(f, "{:>6}", ".")?,
                    w => write!(f, "{:>6}", w)?,
                }
            }
            writeln!(f)?;
        }
        write!(
            f,
            "port {} | starboard {} | imbalance {}",
            self.port_weight,
            self.starboard_weight,
            self.imbalance()
        )
    }
}

fn side_weights(grid: &Grid) -> (u64, u64) {
    let mut port = 0;
    let mut starboard = 0;
    for row in grid {
        for (column, &weight) in row.iter().enumerate() {
            match Side::of_column_index(column) {
                Side::Port => port += u64::from(weight),
                Side::Starboard => starboard += u64::from(weight),
            }
        }
    }
    (port, starboard)
}
