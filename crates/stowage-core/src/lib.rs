//! Stowage Core - ship stowage state and crane cost model
//!
//! This crate provides the fundamental types for balance planning:
//! - Grid geometry and 1-indexed positions
//! - Immutable stowage plans with incrementally maintained side weights
//! - Container moves (crane lifts and horizontal slides)
//! - The crane-time cost model, including PARK positioning legs
//! - Manifest parsing and outbound export

pub mod cost;
pub mod error;
pub mod grid;
pub mod manifest;
pub mod moves;
pub mod plan;

pub use cost::{crane_cost, park_to_position_cost, position_to_park_cost, slide_cost, PARK};
pub use error::{IllegalMoveReason, StowageError};
pub use grid::{Grid, Position, Side, COLUMNS, PORT_COLUMNS, ROWS};
pub use manifest::{Manifest, ManifestEntry, ManifestLineError};
pub use moves::{ContainerMove, MoveKind};
pub use plan::StowagePlan;

/// Result type alias for stowage operations.
pub type Result<T> = std::result::Result<T, StowageError>;
