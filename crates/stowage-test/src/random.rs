//! Seeded random plans.
//!
//! Plans are built by dropping containers into random bays, so every plan
//! respects the support invariant by construction. The same seed always
//! yields the same plan.
//!
//! # Example
//!
//! ```
//! use stowage_test::random::random_plan;
//!
//! let a = random_plan(7, 20);
//! let b = random_plan(7, 20);
//! assert_eq!(a, b);
//! assert_eq!(a.container_count(), 20);
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use stowage_core::{Position, StowagePlan, COLUMNS, ROWS};

/// Heaviest container the generator produces.
pub const MAX_WEIGHT: u32 = 9_999;

/// Generates a plan with `containers` containers (capped at the hold size).
pub fn random_plan(seed: u64, containers: usize) -> StowagePlan {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut heights = [0usize; COLUMNS];
    let mut cargo = Vec::with_capacity(containers);

    for _ in 0..containers.min(ROWS * COLUMNS) {
        let open: Vec<usize> = (0..COLUMNS).filter(|&c| heights[c] < ROWS).collect();
        let column = open[rng.random_range(0..open.len())];
        let weight = rng.random_range(1..=MAX_WEIGHT);
        cargo.push((Position::from_index(heights[column], column), weight));
        heights[column] += 1;
    }

    StowagePlan::from_cargo(cargo).expect("stacked cargo is always supported")
}

/// Generates `count` plans from consecutive seeds with varying fill levels.
pub fn random_plans(base_seed: u64, count: usize) -> Vec<StowagePlan> {
    (0..count as u64)
        .map(|i| {
            let seed = base_seed.wrapping_add(i);
            let fill = 1 + (seed as usize * 7) % (ROWS * COLUMNS / 2);
            random_plan(seed, fill)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_determinism() {
        assert_eq!(random_plan(42, 30), random_plan(42, 30));
        assert_ne!(random_plan(42, 30), random_plan(43, 30));
    }

    #[test]
    fn test_full_hold() {
        let plan = random_plan(1, 200);
        assert_eq!(plan.container_count(), ROWS * COLUMNS);
    }

    #[test]
    fn test_random_plans_vary_fill() {
        let plans = random_plans(10, 5);
        assert_eq!(plans.len(), 5);
        assert!(plans.iter().all(|p| p.container_count() >= 1));
    }
}
