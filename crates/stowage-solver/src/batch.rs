//! Planning several ships at once.
//!
//! Each plan gets its own sequential search; rayon spreads the searches over
//! its thread pool. Outcomes come back in input order.

use rayon::prelude::*;
use stowage_core::StowagePlan;
use tracing::info;

use crate::planner::Planner;
use crate::result::PlannerOutcome;

/// Plans every root in `roots` in parallel.
///
/// # Example
///
/// ```
/// use stowage_core::StowagePlan;
/// use stowage_solver::{plan_all, Planner};
///
/// let roots = vec![StowagePlan::empty(), StowagePlan::empty()];
/// let outcomes = plan_all(&Planner::default(), &roots);
/// assert_eq!(outcomes.len(), 2);
/// assert!(outcomes.iter().all(|o| o.is_balanced()));
/// ```
pub fn plan_all(planner: &Planner, roots: &[StowagePlan]) -> Vec<PlannerOutcome> {
    info!(event = "batch_start", plans = roots.len());
    let outcomes: Vec<PlannerOutcome> = roots.par_iter().map(|root| planner.plan(root)).collect();
    info!(
        event = "batch_end",
        plans = outcomes.len(),
        balanced = outcomes.iter().filter(|o| o.is_balanced()).count(),
    );
    outcomes
}

#[cfg(test)]
mod tests {
    use super::*;
    use stowage_config::PlannerConfig;
    use stowage_test::scenarios::{balanced_plan, single_move_plan, two_move_plan};

    #[test]
    fn test_outcomes_keep_input_order() {
        let planner = Planner::default();
        let roots = vec![single_move_plan(), balanced_plan(), two_move_plan()];
        let outcomes = plan_all(&planner, &roots);

        let costs: Vec<_> = outcomes
            .iter()
            .map(|o| o.plan().map(|p| p.total_cost))
            .collect();
        assert_eq!(costs, vec![Some(2), Some(0), Some(8)]);
    }

    #[test]
    fn test_batch_matches_sequential() {
        let planner = Planner::new(PlannerConfig::default().with_max_expansions(1)).unwrap();
        let roots = vec![two_move_plan(), single_move_plan()];
        let parallel = plan_all(&planner, &roots);

        for (root, outcome) in roots.iter().zip(&parallel) {
            let sequential = planner.plan(root);
            assert_eq!(sequential.is_balanced(), outcome.is_balanced());
            assert_eq!(sequential.stats.expansions, outcome.stats.expansions);
        }
    }
}
