//! Balance planning for ship stowage.
//!
//! The planner runs a best-first search over [`StowagePlan`] states:
//!
//! - [`MoveGenerator`] enumerates crane lifts and horizontal slides
//! - [`BalanceHeuristic`] orders the frontier
//! - [`GoalTest`] accepts plans within tolerance, or plans already at the
//!   best imbalance a bounded [`ReachabilityBound`] traversal can find
//! - [`Planner`] ties them together and reports a [`PlannerOutcome`]
//!
//! # Example
//!
//! ```
//! use stowage_config::PlannerConfig;
//! use stowage_core::{Position, StowagePlan};
//! use stowage_solver::{PlanResult, Planner};
//!
//! let root = StowagePlan::from_cargo([
//!     (Position::new(1, 6), 100),
//!     (Position::new(2, 6), 100),
//! ])
//! .unwrap();
//!
//! let outcome = Planner::new(PlannerConfig::default()).unwrap().plan(&root);
//! match outcome.result {
//!     PlanResult::Balanced(plan) => assert_eq!(plan.moves.len(), 1),
//!     PlanResult::NoSolution { .. } => unreachable!(),
//! }
//! ```
//!
//! [`StowagePlan`]: stowage_core::StowagePlan

pub mod batch;
pub mod event;
pub mod generator;
pub mod goal;
pub mod heuristic;
pub mod planner;
pub mod reachability;
pub mod result;
pub mod stats;

pub use batch::plan_all;
pub use event::{
    CountingEventListener, LoggingEventListener, PlannerEventListener, PlannerEventSupport,
};
pub use generator::{MoveGenerator, SlideDestinations};
pub use goal::{GoalTest, GoalVerdict};
pub use heuristic::{BalanceHeuristic, DEAD_END_COST};
pub use planner::Planner;
pub use reachability::{ReachabilityBound, ReachabilityEstimate};
pub use result::{BalancePlan, PlanResult, PlannerOutcome, TerminationReason};
pub use stats::PlannerStats;
