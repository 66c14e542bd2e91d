//! One balancing session: manifest in, crane plan and outbound manifest out.

use std::fmt;
use std::path::{Path, PathBuf};

use stowage_config::{ConfigError, PlannerConfig};
use stowage_core::{
    park_to_position_cost, position_to_park_cost, ContainerMove, Manifest, StowageError,
    StowagePlan,
};
use stowage_solver::{GoalVerdict, PlanResult, Planner, PlannerStats, TerminationReason};
use thiserror::Error;
use tracing::info;

/// Errors that end a session without a plan.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("stowage error: {0}")]
    Stowage(#[from] StowageError),

    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("no balanced plan found: {reason} after {expansions} expansions")]
    NoSolution {
        reason: TerminationReason,
        expansions: u64,
    },
}

/// Everything a crane operator needs after a successful session.
#[derive(Debug, Clone)]
pub struct SessionReport {
    /// Moves in execution order.
    pub moves: Vec<ContainerMove>,
    /// Crane time spent carrying containers.
    pub move_cost: u64,
    /// Empty crane travel from PARK to the first pickup.
    pub park_to_first: u64,
    /// Empty crane travel from the last drop back to PARK.
    pub last_to_park: u64,
    /// The plan before any move.
    pub initial_plan: StowagePlan,
    /// The plan after every move.
    pub final_plan: StowagePlan,
    /// Which goal clause accepted the final plan.
    pub verdict: GoalVerdict,
    /// The manifest to hand over after the moves are executed.
    pub outbound: Manifest,
    pub stats: PlannerStats,
}

impl SessionReport {
    /// Move cost plus both PARK legs.
    pub fn total_crane_time(&self) -> u64 {
        self.move_cost + self.park_to_first + self.last_to_park
    }

    /// Crane trips including the two PARK legs, or zero when nothing moves.
    pub fn crane_trips(&self) -> usize {
        if self.moves.is_empty() {
            0
        } else {
            self.moves.len() + 2
        }
    }
}

impl fmt::Display for SessionReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.moves.is_empty() {
            writeln!(f, "No moves needed ({:?}).", self.verdict)?;
        } else {
            writeln!(
                f,
                "{} crane trips ({} container moves + 2 PARK legs):",
                self.crane_trips(),
                self.moves.len()
            )?;
            for (index, mv) in self.moves.iter().enumerate() {
                writeln!(f, "  {:>3}. {}", index + 1, mv)?;
            }
        }
        writeln!(f, "Container moves:   {} min", self.move_cost)?;
        writeln!(f, "PARK to first:     {} min", self.park_to_first)?;
        writeln!(f, "Last to PARK:      {} min", self.last_to_park)?;
        write!(f, "Total crane time:  {} min", self.total_crane_time())
    }
}

/// Plans a balancing session for `manifest`.
///
/// # Errors
///
/// Fails on an invalid configuration, on a manifest whose cargo floats above
/// empty cells, and when the planner stops without a balanced plan.
pub fn run_session(
    manifest: &Manifest,
    config: &PlannerConfig,
) -> Result<SessionReport, SessionError> {
    let planner = Planner::new(config.clone())?;
    let initial_plan = manifest.to_plan()?;

    let outcome = planner.plan(&initial_plan);
    let stats = outcome.stats;
    let plan = match outcome.result {
        PlanResult::Balanced(plan) => plan,
        PlanResult::NoSolution { reason } => {
            return Err(SessionError::NoSolution {
                reason,
                expansions: stats.expansions,
            })
        }
    };

    let park_to_first = plan
        .moves
        .first()
        .map_or(0, |mv| u64::from(park_to_position_cost(mv.start)));
    let last_to_park = plan
        .moves
        .last()
        .map_or(0, |mv| u64::from(position_to_park_cost(mv.end)));
    let outbound = manifest.outbound(&plan.moves)?;

    let report = SessionReport {
        moves: plan.moves,
        move_cost: plan.total_cost,
        park_to_first,
        last_to_park,
        initial_plan,
        final_plan: plan.final_plan,
        verdict: plan.verdict,
        outbound,
        stats,
    };
    info!(
        event = "session_end",
        moves = report.moves.len(),
        move_cost = report.move_cost,
        total_crane_time = report.total_crane_time(),
    );
    Ok(report)
}

/// Returns the outbound manifest path for `manifest_path`.
///
/// `ships/Maersk.txt` becomes `ships/Maersk_OUTBOUND.txt`.
pub fn outbound_file_name(manifest_path: impl AsRef<Path>) -> PathBuf {
    let path = manifest_path.as_ref();
    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    path.with_file_name(format!("{stem}_OUTBOUND.txt"))
}
