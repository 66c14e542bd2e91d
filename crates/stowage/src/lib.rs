//! Stowage - ship balance planning in Rust
//!
//! Load a manifest, hand it to [`run_session`], and get back the crane plan,
//! the total crane time including the PARK legs, and the outbound manifest.
//!
//! # Example
//!
//! ```rust
//! use stowage::prelude::*;
//!
//! let plan = StowagePlan::from_cargo([
//!     (Position::new(1, 6), 100),
//!     (Position::new(2, 6), 100),
//! ])
//! .unwrap();
//!
//! let outcome = Planner::default().plan(&plan);
//! assert_eq!(outcome.plan().map(|p| p.total_cost), Some(2));
//! ```

// Core model
pub use stowage_core::{
    crane_cost, park_to_position_cost, position_to_park_cost, slide_cost, ContainerMove, Grid,
    IllegalMoveReason, Manifest, ManifestEntry, MoveKind, Position, Side, StowageError,
    StowagePlan, PARK,
};

// Configuration
pub use stowage_config::{ConfigError, PlannerConfig};

// Planner
pub use stowage_solver::{
    plan_all, BalancePlan, GoalVerdict, LoggingEventListener, PlanResult, Planner,
    PlannerEventListener, PlannerOutcome, PlannerStats, TerminationReason,
};

mod session;
pub use session::{outbound_file_name, run_session, SessionError, SessionReport};

/// Colored console output, installed with [`console::init`].
#[cfg(feature = "console")]
pub use stowage_console as console;

pub mod prelude {
    pub use super::{ContainerMove, Manifest, Position, StowagePlan, PARK};
    pub use super::{PlannerConfig, Planner, PlanResult};
    pub use super::{run_session, SessionReport};
}
