//! Move generation.
//!
//! Two families of moves leave a plan:
//!
//! - **Crane**: the topmost container of a column is lifted onto the lowest
//!   free cell of any other column.
//! - **Slide**: an exposed container is pushed along its row. Scanning stops
//!   at the first occupied cell in each direction; every supported empty cell
//!   passed on the way is a destination.
//!
//! Only topmost containers are ever exposed, so both families start from
//! column tops. Enumeration order is fixed: crane moves by source column then
//! destination column, then slides by source column with the left scan
//! (nearest first) before the right scan.

use smallvec::SmallVec;
use stowage_core::{ContainerMove, Position, StowagePlan, COLUMNS};

/// Slide destinations of a single container, nearest-left first.
pub type SlideDestinations = SmallVec<[Position; 8]>;

/// Enumerates legal single-container transitions.
#[derive(Debug, Clone, Copy, Default)]
pub struct MoveGenerator;

impl MoveGenerator {
    pub fn new() -> Self {
        Self
    }

    /// Returns every legal move from `plan`: crane moves, then slides.
    pub fn moves(&self, plan: &StowagePlan) -> Vec<ContainerMove> {
        let mut moves = self.crane_moves(plan);
        moves.extend(self.slide_moves(plan));
        moves
    }

    /// Returns crane moves ordered by source column then destination column.
    pub fn crane_moves(&self, plan: &StowagePlan) -> Vec<ContainerMove> {
        let free: SmallVec<[Option<Position>; COLUMNS]> =
            (0..COLUMNS).map(|column| plan.next_free(column)).collect();

        let mut moves = Vec::new();
        for source in 0..COLUMNS {
            let Some((start, weight)) = plan.top_container(source) else {
                continue;
            };
            for (destination, end) in free.iter().enumerate() {
                if destination == source {
                    continue;
                }
                if let Some(end) = *end {
                    moves.push(ContainerMove::crane(start, end, weight));
                }
            }
        }
        moves
    }

    /// Returns slide moves ordered by source column, left scan first.
    pub fn slide_moves(&self, plan: &StowagePlan) -> Vec<ContainerMove> {
        let mut moves = Vec::new();
        for source in 0..COLUMNS {
            let Some((start, weight)) = plan.top_container(source) else {
                continue;
            };
            for end in Self::slide_destinations(plan, start) {
                moves.push(ContainerMove::slide(start, end, weight));
            }
        }
        moves
    }

    /// Returns the cells an exposed container at `from` can slide to.
    ///
    /// Left destinations come first, nearest first, then right destinations.
    pub fn slide_destinations(plan: &StowagePlan, from: Position) -> SlideDestinations {
        let mut destinations = SlideDestinations::new();
        let row = from.row_index();
        let column = from.column_index();

        for c in (0..column).rev() {
            if !Self::scan_cell(plan, row, c, &mut destinations) {
                break;
            }
        }
        for c in column + 1..COLUMNS {
            if !Self::scan_cell(plan, row, c, &mut destinations) {
                break;
            }
        }
        destinations
    }

    /// Returns the plans reachable in one move, paired with the move.
    pub fn successors<'a>(
        &self,
        plan: &'a StowagePlan,
    ) -> impl Iterator<Item = (ContainerMove, StowagePlan)> + 'a {
        self.moves(plan).into_iter().map(move |mv| {
            let next = plan.apply(&mv);
            (mv, next)
        })
    }

    // Returns false once the scan hits an occupied cell.
    fn scan_cell(
        plan: &StowagePlan,
        row: usize,
        column: usize,
        destinations: &mut SlideDestinations,
    ) -> bool {
        let cell = Position::from_index(row, column);
        if !plan.is_empty_at(cell) {
            return false;
        }
        if plan.is_supported(cell) {
            destinations.push(cell);
        }
        true
    }
}

#[cfg(test)]
#[path = "generator_tests.rs"]
mod tests;
