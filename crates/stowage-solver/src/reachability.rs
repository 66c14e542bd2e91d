//! Bounded search for the best imbalance reachable from a plan.
//!
//! The traversal is a plain breadth-first search over move sequences that
//! ignores crane time. It stops when the frontier empties, when its own
//! expansion cap is hit, or (with early exit on) as soon as it reaches a plan
//! inside the balance tolerance. Only the first case proves the minimum; the
//! others report the best value seen so far.

use std::collections::{HashMap, HashSet, VecDeque};

use stowage_config::ReachabilityConfig;
use stowage_core::{Grid, StowagePlan};
use tracing::trace;

use crate::generator::MoveGenerator;

/// Outcome of one reachability traversal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReachabilityEstimate {
    /// Smallest `|port - starboard|` seen, including the start plan.
    pub min_imbalance: u64,
    /// True if every reachable plan was visited.
    pub exhaustive: bool,
    /// Plans expanded during the traversal.
    pub expansions: u64,
    /// Distinct plans discovered, including the start plan.
    pub states_seen: usize,
}

/// Memoizing reachability traversal.
///
/// Results are cached per grid and original total weight, so a plan is
/// evaluated at most once for the life of the bound.
#[derive(Debug)]
pub struct ReachabilityBound {
    max_expansions: u64,
    early_exit: bool,
    tolerance_percent: u32,
    generator: MoveGenerator,
    memo: HashMap<(Grid, u64), ReachabilityEstimate>,
    runs: u64,
    memo_hits: u64,
}

impl ReachabilityBound {
    pub fn new(config: &ReachabilityConfig, tolerance_percent: u32) -> Self {
        Self {
            max_expansions: config.max_expansions,
            early_exit: config.early_exit,
            tolerance_percent,
            generator: MoveGenerator::new(),
            memo: HashMap::new(),
            runs: 0,
            memo_hits: 0,
        }
    }

    /// Returns the best imbalance reachable from `plan`.
    pub fn estimate(&mut self, plan: &StowagePlan) -> ReachabilityEstimate {
        let key = (*plan.grid(), plan.original_total_weight());
        if let Some(estimate) = self.memo.get(&key) {
            self.memo_hits += 1;
            return *estimate;
        }

        let estimate = self.traverse(plan);
        self.runs += 1;
        trace!(
            event = "reachability",
            imbalance = plan.imbalance(),
            min_imbalance = estimate.min_imbalance,
            exhaustive = estimate.exhaustive,
            expansions = estimate.expansions,
            states = estimate.states_seen,
        );
        self.memo.insert(key, estimate);
        estimate
    }

    /// Number of traversals actually run.
    pub fn runs(&self) -> u64 {
        self.runs
    }

    /// Number of estimates answered from the memo.
    pub fn memo_hits(&self) -> u64 {
        self.memo_hits
    }

    fn traverse(&self, start: &StowagePlan) -> ReachabilityEstimate {
        let mut best = start.imbalance();
        let mut expansions = 0;

        if self.early_exit && start.is_within_tolerance(self.tolerance_percent) {
            return ReachabilityEstimate {
                min_imbalance: best,
                exhaustive: false,
                expansions,
                states_seen: 1,
            };
        }

        let mut seen: HashSet<Grid> = HashSet::new();
        seen.insert(*start.grid());
        let mut queue = VecDeque::new();
        queue.push_back(start.clone());

        while let Some(plan) = queue.pop_front() {
            if expansions >= self.max_expansions {
                return ReachabilityEstimate {
                    min_imbalance: best,
                    exhaustive: false,
                    expansions,
                    states_seen: seen.len(),
                };
            }
            expansions += 1;

            for (_, next) in self.generator.successors(&plan) {
                if !seen.insert(*next.grid()) {
                    continue;
                }
                best = best.min(next.imbalance());
                if self.early_exit && next.is_within_tolerance(self.tolerance_percent) {
                    return ReachabilityEstimate {
                        min_imbalance: best,
                        exhaustive: false,
                        expansions,
                        states_seen: seen.len(),
                    };
                }
                queue.push_back(next);
            }
        }

        ReachabilityEstimate {
            min_imbalance: best,
            exhaustive: true,
            expansions,
            states_seen: seen.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stowage_core::{ContainerMove, Position};
    use stowage_test::scenarios::{balanced_plan, lopsided_plan, plan_from, single_move_plan};

    fn bound(max_expansions: u64, early_exit: bool) -> ReachabilityBound {
        let config = ReachabilityConfig {
            enabled: true,
            max_expansions,
            early_exit,
        };
        ReachabilityBound::new(&config, 10)
    }

    #[test]
    fn test_empty_hold_is_exhaustive() {
        let estimate = bound(200, true).estimate(&StowagePlan::empty());
        assert_eq!(estimate.min_imbalance, 0);
        assert!(estimate.exhaustive);
        assert_eq!(estimate.expansions, 1);
        assert_eq!(estimate.states_seen, 1);
    }

    #[test]
    fn test_balanced_start_exits_immediately() {
        let estimate = bound(200, true).estimate(&balanced_plan());
        assert_eq!(estimate.min_imbalance, 5);
        assert_eq!(estimate.expansions, 0);
        assert!(!estimate.exhaustive);
    }

    #[test]
    fn test_early_exit_on_first_balanced_successor() {
        let estimate = bound(200, true).estimate(&single_move_plan());
        assert_eq!(estimate.min_imbalance, 0);
        assert!(!estimate.exhaustive);
        assert_eq!(estimate.expansions, 1);
    }

    #[test]
    fn test_single_container_is_exhaustive() {
        // One container can reach every supported cell; the best it can do is
        // its own weight on either side.
        let plan = plan_from(&[(1, 3, 40)]);
        let estimate = bound(1_000, false).estimate(&plan);
        assert_eq!(estimate.min_imbalance, 40);
        assert!(estimate.exhaustive);
        assert_eq!(estimate.states_seen, 12);
    }

    #[test]
    fn test_two_containers_find_the_split() {
        // 60 and 50 on port: moving the 50 across leaves 10.
        let plan = plan_from(&[(1, 1, 60), (2, 1, 50)]);
        let estimate = bound(10_000, false).estimate(&plan);
        assert_eq!(estimate.min_imbalance, 10);
        assert!(estimate.exhaustive);
    }

    #[test]
    fn test_cap_makes_result_best_effort() {
        let estimate = bound(1, false).estimate(&lopsided_plan());
        assert!(!estimate.exhaustive);
        assert_eq!(estimate.expansions, 1);
        assert_eq!(estimate.min_imbalance, 880);
    }

    #[test]
    fn test_memo_hits_for_repeated_grids() {
        let mut bound = bound(50, true);
        let plan = plan_from(&[(1, 1, 60), (2, 1, 50)]);
        let first = bound.estimate(&plan);

        let mv = ContainerMove::crane(Position::new(2, 1), Position::new(1, 2), 50);
        let back = plan.apply(&mv).apply(&mv.inverse());
        let second = bound.estimate(&back);

        assert_eq!(first, second);
        assert_eq!(bound.runs(), 1);
        assert_eq!(bound.memo_hits(), 1);
    }
}
