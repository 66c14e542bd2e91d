//! Tests for move generation.

use super::*;
use stowage_core::{MoveKind, ROWS};
use stowage_test::scenarios::{plan_from, single_move_plan};
use stowage_test::random_plans;

#[test]
fn test_crane_moves_from_single_stack() {
    let plan = single_move_plan();
    let moves = MoveGenerator::new().crane_moves(&plan);

    assert_eq!(moves.len(), COLUMNS - 1);
    assert!(moves.iter().all(|m| m.start == Position::new(2, 6)));
    assert!(moves.iter().all(|m| m.end.row() == 1));
    assert_eq!(moves[0].end, Position::new(1, 1));
    assert_eq!(moves[5].end, Position::new(1, 7));
    assert_eq!(moves[5].cost, 2);
}

#[test]
fn test_no_slides_into_unsupported_cells() {
    let plan = single_move_plan();
    assert!(MoveGenerator::new().slide_moves(&plan).is_empty());
    assert_eq!(MoveGenerator::new().moves(&plan).len(), COLUMNS - 1);
}

#[test]
fn test_slide_scan_stops_at_first_block() {
    let plan = plan_from(&[(1, 1, 10), (1, 3, 20), (1, 6, 5)]);
    let destinations = MoveGenerator::slide_destinations(&plan, Position::new(1, 3));
    assert_eq!(
        destinations.as_slice(),
        &[Position::new(1, 2), Position::new(1, 4), Position::new(1, 5)]
    );
}

#[test]
fn test_slide_scan_passes_over_unsupported_gaps() {
    let plan = plan_from(&[(1, 1, 1), (1, 2, 1), (2, 2, 7), (1, 4, 1), (1, 5, 1)]);
    let destinations = MoveGenerator::slide_destinations(&plan, Position::new(2, 2));
    assert_eq!(
        destinations.as_slice(),
        &[Position::new(2, 1), Position::new(2, 4), Position::new(2, 5)]
    );

    let slides = MoveGenerator::new().slide_moves(&plan);
    let from_top: Vec<_> = slides
        .iter()
        .filter(|m| m.start == Position::new(2, 2))
        .collect();
    assert_eq!(from_top.len(), 3);
    assert!(from_top.iter().all(|m| m.kind == MoveKind::Slide));
    assert_eq!(from_top[1].cost, 2);
}

#[test]
fn test_only_top_containers_move() {
    let plan = plan_from(&[(1, 3, 10), (2, 3, 20), (3, 3, 30)]);
    let moves = MoveGenerator::new().moves(&plan);
    assert!(!moves.is_empty());
    assert!(moves.iter().all(|m| m.start == Position::new(3, 3)));
}

#[test]
fn test_empty_and_full_holds_have_no_moves() {
    let generator = MoveGenerator::new();
    assert!(generator.moves(&StowagePlan::empty()).is_empty());

    let mut cargo = Vec::new();
    for row in 1..=ROWS {
        for column in 1..=COLUMNS {
            cargo.push((row, column, 1));
        }
    }
    assert!(generator.moves(&plan_from(&cargo)).is_empty());
}

#[test]
fn test_enumeration_is_deterministic() {
    let generator = MoveGenerator::new();
    for plan in random_plans(3, 10) {
        assert_eq!(generator.moves(&plan), generator.moves(&plan));
    }
}

#[test]
fn test_successors_are_legal_and_reversible() {
    let generator = MoveGenerator::new();
    for plan in random_plans(11, 25) {
        for (mv, next) in generator.successors(&plan) {
            assert!(plan.is_exposed(mv.start));
            assert!(plan.is_empty_at(mv.end));
            assert!(plan.is_supported(mv.end));
            assert_eq!(plan.weight_at(mv.start), mv.weight);

            // The successor still satisfies the support invariant.
            assert!(StowagePlan::from_grid(*next.grid()).is_ok());
            assert_eq!(next.total_weight(), plan.total_weight());
            assert_eq!(next.original_total_weight(), plan.original_total_weight());

            assert_eq!(next.apply(&mv.inverse()), plan);
        }
    }
}
