//! Best known cost per grid configuration.

use std::collections::HashMap;

use stowage_core::Grid;

/// Maps each grid reached so far to the lowest crane time it was reached at.
#[derive(Debug, Default)]
pub(crate) struct VisitedCosts {
    best: HashMap<Grid, u64>,
}

impl VisitedCosts {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Records `cost` for `grid` if it beats the known cost.
    ///
    /// Returns false when the table already holds a cost at or below `cost`;
    /// such a successor is dominated and must be discarded.
    pub(crate) fn offer(&mut self, grid: &Grid, cost: u64) -> bool {
        match self.best.get_mut(grid) {
            Some(best) if *best <= cost => false,
            Some(best) => {
                *best = cost;
                true
            }
            None => {
                self.best.insert(*grid, cost);
                true
            }
        }
    }

    /// Returns true if a cheaper path to `grid` has been recorded since an
    /// entry with `cost` was pushed.
    pub(crate) fn is_stale(&self, grid: &Grid, cost: u64) -> bool {
        self.best.get(grid).is_some_and(|&best| best < cost)
    }

    #[cfg(test)]
    pub(crate) fn best(&self, grid: &Grid) -> Option<u64> {
        self.best.get(grid).copied()
    }

    pub(crate) fn len(&self) -> usize {
        self.best.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stowage_core::{COLUMNS, ROWS};

    #[test]
    fn test_dominance() {
        let mut visited = VisitedCosts::new();
        let grid: Grid = [[0; COLUMNS]; ROWS];

        assert!(visited.offer(&grid, 5));
        assert!(!visited.offer(&grid, 5));
        assert!(!visited.offer(&grid, 9));
        assert_eq!(visited.best(&grid), Some(5));

        assert!(visited.offer(&grid, 3));
        assert_eq!(visited.best(&grid), Some(3));
        assert!(visited.is_stale(&grid, 5));
        assert!(!visited.is_stale(&grid, 3));
        assert_eq!(visited.len(), 1);
    }
}
