//! Shared test fixtures for stowage crates.
//!
//! This crate provides plans and manifests for testing. It depends only on
//! `stowage-core` so every other crate can pull it in as a dev-dependency.
//!
//! - [`scenarios`] - small hand-built plans with known answers
//! - [`random`] - seeded random plans that respect the support invariant
//! - [`manifests`] - manifest text samples
//!
//! # Usage
//!
//! Add as a dev-dependency in your crate's `Cargo.toml`:
//!
//! ```toml
//! [dev-dependencies]
//! stowage-test = { workspace = true }
//! ```
//!
//! Then import the fixtures you need:
//!
//! ```ignore
//! use stowage_test::scenarios::single_move_plan;
//! use stowage_test::random::random_plan;
//! ```

pub mod manifests;
pub mod random;
pub mod scenarios;

pub use random::{random_plan, random_plans};
pub use scenarios::plan_from;
