//! Remaining-cost estimate used to order the frontier.

use stowage_core::{crane_cost, slide_cost, Position, Side, StowagePlan, COLUMNS};

/// Returned when no container on the heavy side can reach the light side.
pub const DEAD_END_COST: u64 = 999_999;

/// Estimates the crane time still needed to balance a plan.
///
/// The estimate is the cheapest single move that carries a top container
/// from the heavier side to the lighter side. It is not admissible: the
/// planner is a guided best-first search and the estimate only orders it.
///
/// # Example
///
/// ```
/// use stowage_core::{Position, StowagePlan};
/// use stowage_solver::BalanceHeuristic;
///
/// let plan = StowagePlan::from_cargo([
///     (Position::new(1, 6), 100),
///     (Position::new(2, 6), 100),
/// ])
/// .unwrap();
///
/// // Lifting the top container to [01,07] takes two minutes.
/// assert_eq!(BalanceHeuristic::new(10).estimate(&plan), 2);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct BalanceHeuristic {
    tolerance_percent: u32,
}

impl BalanceHeuristic {
    pub fn new(tolerance_percent: u32) -> Self {
        Self { tolerance_percent }
    }

    /// Returns 0 for a plan that is already balanced, the cheapest
    /// heavy-to-light move otherwise, or [`DEAD_END_COST`] if none exists.
    pub fn estimate(&self, plan: &StowagePlan) -> u64 {
        let Some(heavy) = plan.heavier_side() else {
            return 0;
        };
        if plan.is_within_tolerance(self.tolerance_percent) {
            return 0;
        }
        let light = heavy.opposite();

        let mut best = DEAD_END_COST;
        for column in heavy.column_indices() {
            let Some((start, _)) = plan.top_container(column) else {
                continue;
            };
            if let Some(cost) = cheapest_slide(plan, start, light) {
                best = best.min(cost);
            }
            for target in light.column_indices() {
                if let Some(end) = plan.next_free(target) {
                    best = best.min(u64::from(crane_cost(start, end)));
                }
            }
        }
        best
    }
}

// Slides toward the light side only; the first supported light-side cell is
// the cheapest one on that scan.
fn cheapest_slide(plan: &StowagePlan, start: Position, light: Side) -> Option<u64> {
    match light {
        Side::Starboard => scan_slide(plan, start, light, start.column_index() + 1..COLUMNS),
        Side::Port => scan_slide(plan, start, light, (0..start.column_index()).rev()),
    }
}

fn scan_slide<I>(plan: &StowagePlan, start: Position, light: Side, columns: I) -> Option<u64>
where
    I: Iterator<Item = usize>,
{
    let row = start.row_index();
    for column in columns {
        let cell = Position::from_index(row, column);
        if !plan.is_empty_at(cell) {
            return None;
        }
        if cell.side() == light && plan.is_supported(cell) {
            return Some(u64::from(slide_cost(start, cell)));
        }
    }
    None
}
