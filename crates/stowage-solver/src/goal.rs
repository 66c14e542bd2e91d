//! Goal test for balance planning.
//!
//! A plan is a goal when its imbalance is strictly below the tolerance share
//! of the original total weight, or when no sequence of moves could lower
//! its imbalance any further. The second clause is answered by a bounded
//! [`ReachabilityBound`] traversal; a capped traversal may accept a plan whose
//! true optimum lies beyond the cap. That approximation is accepted.

use stowage_config::PlannerConfig;
use stowage_core::StowagePlan;

use crate::reachability::{ReachabilityBound, ReachabilityEstimate};

/// Why a plan was or was not accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GoalVerdict {
    /// Neither clause holds.
    NotGoal,
    /// Port and starboard weigh exactly the same.
    Level,
    /// The imbalance is below the tolerance threshold.
    WithinTolerance,
    /// The plan already sits at the best imbalance the traversal found.
    BestReachable(ReachabilityEstimate),
}

impl GoalVerdict {
    /// Returns true for every verdict except [`GoalVerdict::NotGoal`].
    pub fn is_goal(&self) -> bool {
        !matches!(self, GoalVerdict::NotGoal)
    }
}

/// Two-clause goal test with a memoizing reachability bound.
#[derive(Debug)]
pub struct GoalTest {
    tolerance_percent: u32,
    bound: Option<ReachabilityBound>,
}

impl GoalTest {
    pub fn new(config: &PlannerConfig) -> Self {
        let tolerance_percent = config.balance.tolerance_percent;
        // A traversal that may not expand anything proves nothing.
        let reachability = &config.reachability;
        let bound = (reachability.enabled && reachability.max_expansions > 0)
            .then(|| ReachabilityBound::new(reachability, tolerance_percent));
        Self {
            tolerance_percent,
            bound,
        }
    }

    /// Classifies `plan`.
    ///
    /// A level plan is accepted without any traversal: zero is the smallest
    /// imbalance there is, so the second clause holds trivially.
    pub fn check(&mut self, plan: &StowagePlan) -> GoalVerdict {
        if plan.imbalance() == 0 {
            return GoalVerdict::Level;
        }
        if plan.is_within_tolerance(self.tolerance_percent) {
            return GoalVerdict::WithinTolerance;
        }
        let Some(bound) = self.bound.as_mut() else {
            return GoalVerdict::NotGoal;
        };

        let estimate = bound.estimate(plan);
        if estimate.min_imbalance >= plan.imbalance() {
            GoalVerdict::BestReachable(estimate)
        } else {
            GoalVerdict::NotGoal
        }
    }

    /// Returns the reachability bound, if the second clause is enabled.
    pub fn reachability(&self) -> Option<&ReachabilityBound> {
        self.bound.as_ref()
    }
}
