//! Planner outcomes.

use std::fmt;

use stowage_core::{ContainerMove, StowagePlan};

use crate::goal::GoalVerdict;
use crate::stats::PlannerStats;

/// Why a search ended without a balanced plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TerminationReason {
    /// Every reachable plan was examined.
    FrontierExhausted,
    /// The expansion cap was hit.
    ExpansionLimit,
}

impl fmt::Display for TerminationReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TerminationReason::FrontierExhausted => write!(f, "frontier exhausted"),
            TerminationReason::ExpansionLimit => write!(f, "expansion limit reached"),
        }
    }
}

/// A successful plan: the moves to execute and what they cost.
#[derive(Debug, Clone)]
pub struct BalancePlan {
    /// Moves in execution order.
    pub moves: Vec<ContainerMove>,
    /// Sum of move costs, without the crane's PARK legs.
    pub total_cost: u64,
    /// The plan after every move has been applied.
    pub final_plan: StowagePlan,
    /// Which goal clause accepted the final plan.
    pub verdict: GoalVerdict,
}

/// What the search produced.
#[derive(Debug, Clone)]
pub enum PlanResult {
    Balanced(BalancePlan),
    NoSolution { reason: TerminationReason },
}

/// Result of a planner run together with its statistics.
#[derive(Debug, Clone)]
pub struct PlannerOutcome {
    pub result: PlanResult,
    pub stats: PlannerStats,
}

impl PlannerOutcome {
    #[inline]
    pub fn balanced(plan: BalancePlan, stats: PlannerStats) -> Self {
        Self {
            result: PlanResult::Balanced(plan),
            stats,
        }
    }

    #[inline]
    pub fn no_solution(reason: TerminationReason, stats: PlannerStats) -> Self {
        Self {
            result: PlanResult::NoSolution { reason },
            stats,
        }
    }

    /// Returns true if a balanced plan was found.
    pub fn is_balanced(&self) -> bool {
        matches!(self.result, PlanResult::Balanced(_))
    }

    /// Returns the balanced plan, if any.
    pub fn plan(&self) -> Option<&BalancePlan> {
        match &self.result {
            PlanResult::Balanced(plan) => Some(plan),
            PlanResult::NoSolution { .. } => None,
        }
    }

    /// Returns the termination reason of a failed run.
    pub fn termination_reason(&self) -> Option<TerminationReason> {
        match self.result {
            PlanResult::Balanced(_) => None,
            PlanResult::NoSolution { reason } => Some(reason),
        }
    }

    /// Consumes the outcome, returning the balanced plan if any.
    pub fn into_plan(self) -> Option<BalancePlan> {
        match self.result {
            PlanResult::Balanced(plan) => Some(plan),
            PlanResult::NoSolution { .. } => None,
        }
    }
}
