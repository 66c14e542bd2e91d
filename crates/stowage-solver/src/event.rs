//! Lifecycle hooks for planner runs.
//!
//! Listeners are registered on a [`Planner`](crate::Planner) and called
//! synchronously, in registration order, from the thread running the search.
//!
//! # Usage
//!
//! ```
//! use std::sync::Arc;
//! use stowage_config::PlannerConfig;
//! use stowage_core::StowagePlan;
//! use stowage_solver::{CountingEventListener, Planner};
//!
//! let counter = Arc::new(CountingEventListener::new());
//! let mut planner = Planner::new(PlannerConfig::default()).unwrap();
//! planner.add_listener(counter.clone());
//!
//! planner.plan(&StowagePlan::empty());
//! assert_eq!(counter.started_count(), 1);
//! assert_eq!(counter.ended_count(), 1);
//! ```

use std::fmt::Debug;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use stowage_core::StowagePlan;
use tracing::{debug, info};

use crate::result::{BalancePlan, PlanResult, PlannerOutcome};

/// Listener for planner lifecycle events.
pub trait PlannerEventListener: Send + Sync + Debug {
    /// Called once before the root plan is pushed.
    fn on_planning_started(&self, _root: &StowagePlan) {}

    /// Called after a node failed the goal test and is about to be expanded.
    ///
    /// # Arguments
    ///
    /// * `expansion` - 1-based expansion counter
    /// * `plan` - The plan being expanded
    /// * `cost` - Crane time spent to reach `plan`
    fn on_node_expanded(&self, _expansion: u64, _plan: &StowagePlan, _cost: u64) {}

    /// Called when a plan passes the goal test.
    fn on_goal_reached(&self, _plan: &BalancePlan) {}

    /// Called once the run is over, successful or not.
    fn on_planning_ended(&self, _outcome: &PlannerOutcome) {}
}

/// Broadcasts planner events to registered listeners.
#[derive(Default)]
pub struct PlannerEventSupport {
    listeners: Vec<Arc<dyn PlannerEventListener>>,
}

impl PlannerEventSupport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_listener(&mut self, listener: Arc<dyn PlannerEventListener>) {
        self.listeners.push(listener);
    }

    pub fn clear_listeners(&mut self) {
        self.listeners.clear();
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    pub fn has_listeners(&self) -> bool {
        !self.listeners.is_empty()
    }

    pub fn fire_planning_started(&self, root: &StowagePlan) {
        for listener in &self.listeners {
            listener.on_planning_started(root);
        }
    }

    pub fn fire_node_expanded(&self, expansion: u64, plan: &StowagePlan, cost: u64) {
        for listener in &self.listeners {
            listener.on_node_expanded(expansion, plan, cost);
        }
    }

    pub fn fire_goal_reached(&self, plan: &BalancePlan) {
        for listener in &self.listeners {
            listener.on_goal_reached(plan);
        }
    }

    pub fn fire_planning_ended(&self, outcome: &PlannerOutcome) {
        for listener in &self.listeners {
            listener.on_planning_ended(outcome);
        }
    }
}

impl Debug for PlannerEventSupport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PlannerEventSupport")
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

/// Writes planner events to `tracing`.
#[derive(Debug, Clone, Default)]
pub struct LoggingEventListener {
    label: String,
}

impl LoggingEventListener {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a listener that tags every event with `label`, such as the
    /// manifest name.
    pub fn with_label(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
        }
    }
}

impl PlannerEventListener for LoggingEventListener {
    fn on_planning_started(&self, root: &StowagePlan) {
        info!(
            label = %self.label,
            containers = root.container_count(),
            imbalance = root.imbalance(),
            "planning started"
        );
    }

    fn on_node_expanded(&self, expansion: u64, plan: &StowagePlan, cost: u64) {
        debug!(
            label = %self.label,
            expansion,
            cost,
            imbalance = plan.imbalance(),
            "node expanded"
        );
    }

    fn on_goal_reached(&self, plan: &BalancePlan) {
        info!(
            label = %self.label,
            moves = plan.moves.len(),
            cost = plan.total_cost,
            imbalance = plan.final_plan.imbalance(),
            "goal reached"
        );
    }

    fn on_planning_ended(&self, outcome: &PlannerOutcome) {
        match &outcome.result {
            PlanResult::Balanced(_) => info!(label = %self.label, "planning ended"),
            PlanResult::NoSolution { reason } => {
                info!(label = %self.label, %reason, "planning ended without a plan")
            }
        }
    }
}

/// Counts planner events.
#[derive(Debug, Default)]
pub struct CountingEventListener {
    started: AtomicU64,
    expanded: AtomicU64,
    goals: AtomicU64,
    ended: AtomicU64,
}

impl CountingEventListener {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn started_count(&self) -> u64 {
        self.started.load(Ordering::SeqCst)
    }

    pub fn expanded_count(&self) -> u64 {
        self.expanded.load(Ordering::SeqCst)
    }

    pub fn goal_count(&self) -> u64 {
        self.goals.load(Ordering::SeqCst)
    }

    pub fn ended_count(&self) -> u64 {
        self.ended.load(Ordering::SeqCst)
    }

    /// Resets all counters to zero.
    pub fn reset(&self) {
        self.started.store(0, Ordering::SeqCst);
        self.expanded.store(0, Ordering::SeqCst);
        self.goals.store(0, Ordering::SeqCst);
        self.ended.store(0, Ordering::SeqCst);
    }
}

impl PlannerEventListener for CountingEventListener {
    fn on_planning_started(&self, _root: &StowagePlan) {
        self.started.fetch_add(1, Ordering::SeqCst);
    }

    fn on_node_expanded(&self, _expansion: u64, _plan: &StowagePlan, _cost: u64) {
        self.expanded.fetch_add(1, Ordering::SeqCst);
    }

    fn on_goal_reached(&self, _plan: &BalancePlan) {
        self.goals.fetch_add(1, Ordering::SeqCst);
    }

    fn on_planning_ended(&self, _outcome: &PlannerOutcome) {
        self.ended.fetch_add(1, Ordering::SeqCst);
    }
}

#[cfg(test)]
#[path = "event_tests.rs"]
mod tests;
