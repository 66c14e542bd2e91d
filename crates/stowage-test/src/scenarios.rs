//! Hand-built plans with known answers.
//!
//! # Example
//!
//! ```
//! use stowage_test::scenarios::{balanced_plan, single_move_plan};
//!
//! assert!(balanced_plan().is_within_tolerance(10));
//! assert_eq!(single_move_plan().imbalance(), 200);
//! ```

use stowage_core::{Position, StowagePlan, COLUMNS, ROWS};

/// Builds a plan from `(row, column, weight)` triples, 1-indexed.
///
/// # Panics
///
/// Panics if a container floats; fixtures are expected to be valid.
pub fn plan_from(cargo: &[(usize, usize, u32)]) -> StowagePlan {
    StowagePlan::from_cargo(
        cargo
            .iter()
            .map(|&(row, column, weight)| (Position::new(row, column), weight)),
    )
    .expect("fixture cargo must be supported")
}

/// Two 100 kg containers stacked in bay 6 with bay 7 empty.
///
/// Moving the top one to `[01,07]` (one row down, one bay across, cost 2)
/// balances the ship exactly.
pub fn single_move_plan() -> StowagePlan {
    plan_from(&[(1, 6, 100), (2, 6, 100)])
}

/// Four equal port containers; two of them must cross to starboard.
pub fn two_move_plan() -> StowagePlan {
    plan_from(&[(1, 1, 100), (1, 2, 100), (1, 3, 100), (1, 4, 100)])
}

/// Nearly even sides, already within a 10 % tolerance.
pub fn balanced_plan() -> StowagePlan {
    plan_from(&[(1, 1, 100), (2, 1, 20), (1, 12, 115)])
}

/// A heavy port container with every starboard bay stacked to the roof.
///
/// No container can reach the light side, and nothing lighter can come back.
pub fn stranded_plan() -> StowagePlan {
    let mut cargo = vec![(1, 1, 1_000)];
    for row in 1..=ROWS {
        for column in (COLUMNS / 2 + 1)..=COLUMNS {
            cargo.push((row, column, 1));
        }
    }
    plan_from(&cargo)
}

/// One heavy container that can never be offset: the best reachable
/// imbalance is its own weight minus everything else.
pub fn lopsided_plan() -> StowagePlan {
    plan_from(&[(1, 2, 900), (1, 11, 10), (1, 10, 10)])
}

/// A mid-sized plan that needs several moves and exercises slides.
pub fn harbor_plan() -> StowagePlan {
    plan_from(&[
        (1, 1, 120),
        (2, 1, 35),
        (1, 2, 2_000),
        (1, 3, 500),
        (2, 3, 600),
        (3, 3, 50),
        (1, 4, 80),
        (1, 8, 40),
        (1, 9, 1_100),
        (2, 9, 30),
    ])
}
