//! Tests for planner events.

use super::*;
use crate::goal::GoalVerdict;
use crate::result::TerminationReason;
use crate::stats::PlannerStats;

#[test]
fn test_event_support_new() {
    let support = PlannerEventSupport::new();
    assert_eq!(support.listener_count(), 0);
    assert!(!support.has_listeners());
}

#[test]
fn test_event_support_fire_events() {
    let mut support = PlannerEventSupport::new();
    let listener = Arc::new(CountingEventListener::new());
    support.add_listener(listener.clone());
    support.add_listener(Arc::new(LoggingEventListener::with_label("test")));
    assert_eq!(support.listener_count(), 2);

    let root = StowagePlan::empty();
    let plan = BalancePlan {
        moves: Vec::new(),
        total_cost: 0,
        final_plan: root.clone(),
        verdict: GoalVerdict::Level,
    };
    let outcome = PlannerOutcome::balanced(plan.clone(), PlannerStats::default());

    support.fire_planning_started(&root);
    support.fire_node_expanded(1, &root, 0);
    support.fire_node_expanded(2, &root, 3);
    support.fire_goal_reached(&plan);
    support.fire_planning_ended(&outcome);

    assert_eq!(listener.started_count(), 1);
    assert_eq!(listener.expanded_count(), 2);
    assert_eq!(listener.goal_count(), 1);
    assert_eq!(listener.ended_count(), 1);
}

#[test]
fn test_event_support_clear_listeners() {
    let mut support = PlannerEventSupport::new();
    support.add_listener(Arc::new(CountingEventListener::new()));
    assert!(support.has_listeners());

    support.clear_listeners();
    assert!(!support.has_listeners());
}

#[test]
fn test_counting_listener_reset() {
    let listener = CountingEventListener::new();
    let outcome =
        PlannerOutcome::no_solution(TerminationReason::FrontierExhausted, PlannerStats::default());
    listener.on_planning_started(&StowagePlan::empty());
    listener.on_planning_ended(&outcome);
    assert_eq!(listener.started_count(), 1);

    listener.reset();
    assert_eq!(listener.started_count(), 0);
    assert_eq!(listener.ended_count(), 0);
}

#[test]
fn test_debug_shows_listener_count() {
    let mut support = PlannerEventSupport::new();
    support.add_listener(Arc::new(CountingEventListener::new()));
    assert!(format!("{:?}", support).contains("listeners: 1"));
}
