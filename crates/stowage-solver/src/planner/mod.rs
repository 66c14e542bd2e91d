//! Best-first balance planner.
//!
//! The planner pops the frontier entry with the lowest `g + h`, where `g` is
//! the crane time spent so far and `h` comes from [`BalanceHeuristic`]. Ties
//! go to the entry generated first. A grid reached again at equal or higher
//! cost is discarded, and an entry overtaken by a cheaper path after it was
//! pushed is skipped when popped.

mod node;
mod visited;

use std::collections::BinaryHeap;
use std::fmt::Debug;
use std::sync::Arc;

use stowage_config::{ConfigError, PlannerConfig};
use stowage_core::StowagePlan;
use tracing::{debug, info, trace};

use crate::event::{PlannerEventListener, PlannerEventSupport};
use crate::generator::MoveGenerator;
use crate::goal::GoalTest;
use crate::heuristic::BalanceHeuristic;
use crate::result::{BalancePlan, PlanResult, PlannerOutcome, TerminationReason};
use crate::stats::PlannerStats;

use node::{FrontierEntry, NodeArena};
use visited::VisitedCosts;

/// Finds a low-cost move sequence that balances a stowage plan.
///
/// A planner holds configuration and listeners only; every call to
/// [`Planner::plan`] starts from scratch, so one planner can serve many
/// threads at once.
pub struct Planner {
    config: PlannerConfig,
    generator: MoveGenerator,
    events: PlannerEventSupport,
}

impl Debug for Planner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Planner")
            .field("config", &self.config)
            .field("events", &self.events)
            .finish()
    }
}

impl Default for Planner {
    fn default() -> Self {
        Self::with_valid_config(PlannerConfig::default())
    }
}

impl Planner {
    /// Creates a planner for `config`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] for a configuration that
    /// [`PlannerConfig::validate`] rejects. A zero reachability cap, for
    /// instance, would let every start plan pass as its own best.
    pub fn new(config: PlannerConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::with_valid_config(config))
    }

    fn with_valid_config(config: PlannerConfig) -> Self {
        Self {
            config,
            generator: MoveGenerator::new(),
            events: PlannerEventSupport::new(),
        }
    }

    pub fn config(&self) -> &PlannerConfig {
        &self.config
    }

    /// Registers a listener for every subsequent run.
    pub fn add_listener(&mut self, listener: Arc<dyn PlannerEventListener>) {
        self.events.add_listener(listener);
    }

    /// Searches for a balanced plan reachable from `root`.
    ///
    /// Never fails: an unbalanceable or too-large problem comes back as
    /// [`PlanResult::NoSolution`](crate::PlanResult::NoSolution).
    pub fn plan(&self, root: &StowagePlan) -> PlannerOutcome {
        let max_expansions = self.config.max_expansions;
        let progress_interval = self.config.progress_interval;
        let heuristic = BalanceHeuristic::new(self.config.balance.tolerance_percent);
        let mut goal = GoalTest::new(&self.config);

        let mut stats = PlannerStats::default();
        stats.start();

        info!(
            event = "plan_start",
            containers = root.container_count(),
            port_weight = root.port_weight(),
            starboard_weight = root.starboard_weight(),
            imbalance = root.imbalance(),
            max_expansions,
        );
        self.events.fire_planning_started(root);

        let mut arena = NodeArena::new();
        let mut visited = VisitedCosts::new();
        let mut frontier = BinaryHeap::new();
        let mut sequence: u64 = 0;
        let mut best_imbalance = root.imbalance();

        let root_index = arena.push_root();
        visited.offer(root.grid(), 0);
        frontier.push(FrontierEntry {
            priority: heuristic.estimate(root),
            sequence,
            node: root_index,
            plan: root.clone(),
        });

        let reason = loop {
            let Some(entry) = frontier.pop() else {
                break TerminationReason::FrontierExhausted;
            };
            let cost = arena.get(entry.node).cost();

            if visited.is_stale(entry.plan.grid(), cost) {
                stats.record_stale_skip();
                trace!(event = "stale_skip", node = entry.node, cost);
                continue;
            }

            stats.record_goal_check();
            let verdict = goal.check(&entry.plan);
            if verdict.is_goal() {
                let plan = BalancePlan {
                    moves: arena.path(entry.node),
                    total_cost: cost,
                    final_plan: entry.plan,
                    verdict,
                };
                self.events.fire_goal_reached(&plan);
                return self.finish(
                    PlannerOutcome::balanced(plan, stats),
                    &goal,
                    arena.len(),
                    visited.len(),
                );
            }

            if stats.expansions >= max_expansions {
                break TerminationReason::ExpansionLimit;
            }
            stats.record_expansion();
            self.events
                .fire_node_expanded(stats.expansions, &entry.plan, cost);

            trace!(
                event = "expansion",
                expansion = stats.expansions,
                depth = arena.get(entry.node).depth(),
                cost,
                priority = entry.priority,
                imbalance = entry.plan.imbalance(),
            );

            for (mv, next) in self.generator.successors(&entry.plan) {
                stats.record_generated();
                let next_cost = cost + u64::from(mv.cost);
                if !visited.offer(next.grid(), next_cost) {
                    stats.record_pruned();
                    continue;
                }

                best_imbalance = best_imbalance.min(next.imbalance());
                let priority = next_cost.saturating_add(heuristic.estimate(&next));
                let node = arena.push_child(entry.node, mv, next_cost);
                sequence += 1;
                frontier.push(FrontierEntry {
                    priority,
                    sequence,
                    node,
                    plan: next,
                });
            }
            stats.observe_frontier(frontier.len());

            if progress_interval > 0 && stats.expansions % progress_interval == 0 {
                debug!(
                    event = "progress",
                    expansions = stats.expansions,
                    frontier = frontier.len(),
                    visited = visited.len(),
                    best_imbalance,
                    speed = stats.expansions_per_second(),
                );
            }
        };

        self.finish(
            PlannerOutcome::no_solution(reason, stats),
            &goal,
            arena.len(),
            visited.len(),
        )
    }

    fn finish(
        &self,
        mut outcome: PlannerOutcome,
        goal: &GoalTest,
        nodes: usize,
        visited: usize,
    ) -> PlannerOutcome {
        if let Some(bound) = goal.reachability() {
            outcome.stats.reachability_runs = bound.runs();
            outcome.stats.reachability_memo_hits = bound.memo_hits();
        }
        outcome.stats.stop();

        let stats = &outcome.stats;
        let duration_ms = stats.elapsed().as_millis() as u64;
        match &outcome.result {
            PlanResult::Balanced(plan) => info!(
                event = "plan_end",
                result = "balanced",
                moves = plan.moves.len(),
                cost = plan.total_cost,
                imbalance = plan.final_plan.imbalance(),
                expansions = stats.expansions,
                generated = stats.generated,
                pruned = stats.pruned,
                nodes,
                visited,
                duration_ms,
            ),
            PlanResult::NoSolution { reason } => info!(
                event = "plan_end",
                result = "no_solution",
                reason = %reason,
                expansions = stats.expansions,
                generated = stats.generated,
                pruned = stats.pruned,
                nodes,
                visited,
                duration_ms,
            ),
        }

        self.events.fire_planning_ended(&outcome);
        outcome
    }
}
