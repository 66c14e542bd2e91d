//! Planner statistics.

use std::time::{Duration, Instant};

/// Counters for a single planner run.
///
/// # Example
///
/// ```
/// use stowage_solver::PlannerStats;
///
/// let mut stats = PlannerStats::default();
/// stats.start();
/// stats.record_expansion();
/// stats.record_generated();
/// stats.record_generated();
/// stats.record_pruned();
///
/// assert_eq!(stats.expansions, 1);
/// assert_eq!(stats.generated, 2);
/// assert_eq!(stats.pruned, 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct PlannerStats {
    start_time: Option<Instant>,
    elapsed: Option<Duration>,
    /// Nodes expanded (goal test failed, successors generated).
    pub expansions: u64,
    /// Successor plans generated.
    pub generated: u64,
    /// Successors discarded because a cheaper path was already known.
    pub pruned: u64,
    /// Frontier entries skipped because a cheaper path arrived later.
    pub stale_skips: u64,
    /// Goal tests run.
    pub goal_checks: u64,
    /// Reachability traversals run by the goal test.
    pub reachability_runs: u64,
    /// Reachability estimates answered from the memo.
    pub reachability_memo_hits: u64,
    /// Largest frontier size observed.
    pub peak_frontier: usize,
}

impl PlannerStats {
    /// Marks the start of planning.
    pub fn start(&mut self) {
        self.start_time = Some(Instant::now());
        self.elapsed = None;
    }

    /// Freezes the elapsed time.
    pub fn stop(&mut self) {
        self.elapsed = self.start_time.map(|t| t.elapsed());
    }

    /// Returns the elapsed time, frozen once [`PlannerStats::stop`] is called.
    pub fn elapsed(&self) -> Duration {
        self.elapsed
            .or_else(|| self.start_time.map(|t| t.elapsed()))
            .unwrap_or_default()
    }

    pub fn record_expansion(&mut self) {
        self.expansions += 1;
    }

    pub fn record_generated(&mut self) {
        self.generated += 1;
    }

    pub fn record_pruned(&mut self) {
        self.pruned += 1;
    }

    pub fn record_stale_skip(&mut self) {
        self.stale_skips += 1;
    }

    pub fn record_goal_check(&mut self) {
        self.goal_checks += 1;
    }

    /// Records the current frontier size.
    pub fn observe_frontier(&mut self, size: usize) {
        self.peak_frontier = self.peak_frontier.max(size);
    }

    /// Returns expansions per second.
    pub fn expansions_per_second(&self) -> u64 {
        let secs = self.elapsed().as_secs_f64();
        if secs > 0.0 {
            (self.expansions as f64 / secs) as u64
        } else {
            0
        }
    }

    /// Returns the share of generated successors that were pruned.
    pub fn prune_rate(&self) -> f64 {
        if self.generated == 0 {
            0.0
        } else {
            self.pruned as f64 / self.generated as f64
        }
    }
}
