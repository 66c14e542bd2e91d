//! Manifest parsing and outbound export.
//!
//! A manifest lists every cell of the hold, one per line:
//!
//! ```text
//! [01,02], {00120}, Dog food
//! [01,03], {00000}, UNUSED
//! [08,12], {00000}, NAN
//! ```
//!
//! Positions are 1-indexed `[row,column]`, weights are non-negative integers
//! and the description runs to the end of the line. Lines that cannot be
//! parsed or that address a cell outside the hold are dropped with a warning;
//! they never abort loading.
//!
//! # Examples
//!
//! ```
//! use stowage_core::{Manifest, Position};
//!
//! let manifest = Manifest::parse("[01,01], {00500}, Rice\n[01,02], {00000}, UNUSED\nbogus");
//! assert_eq!(manifest.entries().len(), 2);
//! assert_eq!(manifest.dropped_lines(), 1);
//!
//! let plan = manifest.to_plan().unwrap();
//! assert_eq!(plan.weight_at(Position::new(1, 1)), 500);
//! ```

use std::fmt;
use std::path::Path;

use thiserror::Error;
use tracing::{debug, warn};

use crate::error::StowageError;
use crate::grid::{Position, COLUMNS, ROWS};
use crate::moves::ContainerMove;
use crate::plan::StowagePlan;

/// Description of a cell that holds nothing.
pub const UNUSED: &str = "UNUSED";

/// Description of a cell that does not physically exist on the ship.
pub const NAN: &str = "NAN";

/// Why a manifest line was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ManifestLineError {
    #[error("expected `[RR,CC], {{WWWWW}}, DESCRIPTION`")]
    Malformed,

    #[error("invalid position `{0}`")]
    BadPosition(String),

    #[error("invalid weight `{0}`")]
    BadWeight(String),

    #[error("position [{row:02},{column:02}] is outside the hold")]
    OutOfBounds { row: usize, column: usize },
}

/// One parsed manifest line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManifestEntry {
    pub position: Position,
    pub weight: u32,
    pub description: String,
}

impl ManifestEntry {
    /// Parses a single manifest line.
    pub fn parse(line: &str) -> Result<Self, ManifestLineError> {
        let (position_part, rest) = line.split_once("],").ok_or(ManifestLineError::Malformed)?;
        let position_part = position_part
            .trim()
            .strip_prefix('[')
            .ok_or(ManifestLineError::Malformed)?;
        let bad_position = || ManifestLineError::BadPosition(position_part.to_string());
        let (row, column) = position_part.split_once(',').ok_or_else(bad_position)?;
        let row: usize = row.trim().parse().map_err(|_| bad_position())?;
        let column: usize = column.trim().parse().map_err(|_| bad_position())?;

        let rest = rest
            .trim_start()
            .strip_prefix('{')
            .ok_or(ManifestLineError::Malformed)?;
        let (weight_part, description) =
            rest.split_once('}').ok_or(ManifestLineError::Malformed)?;
        let weight: u32 = weight_part
            .trim()
            .parse()
            .map_err(|_| ManifestLineError::BadWeight(weight_part.to_string()))?;
        let description = description
            .trim_start()
            .strip_prefix(',')
            .ok_or(ManifestLineError::Malformed)?
            .trim();

        let position =
            Position::checked(row, column).ok_or(ManifestLineError::OutOfBounds { row, column })?;

        Ok(Self {
            position,
            weight,
            description: description.to_string(),
        })
    }

    /// Returns true if the entry describes a container rather than a free
    /// or missing slot.
    pub fn is_container(&self) -> bool {
        self.weight > 0
    }
}

impl fmt::Display for ManifestEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{:02},{:02}], {{{:05}}}, {}",
            self.position.row(),
            self.position.column(),
            self.weight,
            self.description
        )
    }
}

/// A parsed manifest.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Manifest {
    entries: Vec<ManifestEntry>,
    dropped_lines: usize,
}

impl Manifest {
    /// Parses manifest text, dropping bad lines with a warning.
    pub fn parse(text: &str) -> Self {
        let mut entries = Vec::new();
        let mut dropped_lines = 0;

        for (index, line) in text.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            match ManifestEntry::parse(line) {
                Ok(entry) => entries.push(entry),
                Err(err) => {
                    warn!(line_number = index + 1, line, %err, "dropping manifest line");
                    dropped_lines += 1;
                }
            }
        }

        debug!(
            entries = entries.len(),
            dropped = dropped_lines,
            "manifest parsed"
        );
        Self {
            entries,
            dropped_lines,
        }
    }

    /// Reads and parses a manifest file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, StowageError> {
        let text = std::fs::read_to_string(path)?;
        Ok(Self::parse(&text))
    }

    /// Writes the manifest to a file.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), StowageError> {
        std::fs::write(path, self.to_string())?;
        Ok(())
    }

    /// Returns the parsed entries in file order.
    pub fn entries(&self) -> &[ManifestEntry] {
        &self.entries
    }

    /// Returns the number of lines dropped while parsing.
    pub fn dropped_lines(&self) -> usize {
        self.dropped_lines
    }

    /// Returns the number of container entries.
    pub fn container_count(&self) -> usize {
        self.entries.iter().filter(|e| e.is_container()).count()
    }

    /// Builds the root stowage plan from the container entries.
    pub fn to_plan(&self) -> Result<StowagePlan, StowageError> {
        StowagePlan::from_cargo(
            self.entries
                .iter()
                .filter(|e| e.is_container())
                .map(|e| (e.position, e.weight)),
        )
    }

    /// Produces the outbound manifest after executing `moves`.
    ///
    /// Every cell of the hold is listed in row-major order from the bottom
    /// tier. Descriptions travel with their containers; vacated cells become
    /// `UNUSED`, and cells never mentioned are `UNUSED` as well.
    ///
    /// # Errors
    ///
    /// Returns [`StowageError::IllegalMove`] if a move does not fit the
    /// manifest's cargo at the point it is replayed.
    pub fn outbound(&self, moves: &[ContainerMove]) -> Result<Manifest, StowageError> {
        let mut cells: Vec<Vec<(u32, String)>> = vec![vec![(0, UNUSED.to_string()); COLUMNS]; ROWS];
        for entry in &self.entries {
            cells[entry.position.row_index()][entry.position.column_index()] =
                (entry.weight, entry.description.clone());
        }

        for mv in moves {
            mv.check_fits(|p| cells[p.row_index()][p.column_index()].0)
                .map_err(|reason| StowageError::IllegalMove {
                    start: mv.start,
                    end: mv.end,
                    reason,
                })?;

            let cargo = std::mem::replace(
                &mut cells[mv.start.row_index()][mv.start.column_index()],
                (0, UNUSED.to_string()),
            );
            cells[mv.end.row_index()][mv.end.column_index()] = cargo;
        }

        let entries = cells
            .into_iter()
            .enumerate()
            .flat_map(|(row, cells)| {
                cells
                    .into_iter()
                    .enumerate()
                    .map(move |(column, (weight, description))| ManifestEntry {
                        position: Position::from_index(row, column),
                        weight,
                        description,
                    })
            })
            .collect();

        Ok(Manifest {
            entries,
            dropped_lines: 0,
        })
    }
}

impl fmt::Display for Manifest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, entry) in self.entries.iter().enumerate() {
            if index > 0 {
                writeln!(f)?;
            }
            write!(f, "{}", entry)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::IllegalMoveReason;

    #[test]
    fn test_parse_line() {
        let entry = ManifestEntry::parse("[01,02], {00120}, Dog food, dry").unwrap();
        assert_eq!(entry.position, Position::new(1, 2));
        assert_eq!(entry.weight, 120);
        assert_eq!(entry.description, "Dog food, dry");
        assert!(entry.is_container());
    }

    #[test]
    fn test_parse_line_errors() {
        assert_eq!(
            ManifestEntry::parse("no brackets here"),
            Err(ManifestLineError::Malformed)
        );
        assert_eq!(
            ManifestEntry::parse("[0x,02], {00120}, Rice"),
            Err(ManifestLineError::BadPosition("0x,02".to_string()))
        );
        assert_eq!(
            ManifestEntry::parse("[01,02], {12a}, Rice"),
            Err(ManifestLineError::BadWeight("12a".to_string()))
        );
        assert_eq!(
            ManifestEntry::parse("[09,02], {00120}, Rice"),
            Err(ManifestLineError::OutOfBounds { row: 9, column: 2 })
        );
        assert_eq!(
            ManifestEntry::parse("[01,02], {00120} Rice"),
            Err(ManifestLineError::Malformed)
        );
    }

    #[test]
    fn test_parse_skips_blank_and_bad_lines() {
        let text = "\n[01,01], {00500}, Rice\n\n[13,01], {00010}, Ghost\ngarbage\n[01,02], {00000}, UNUSED\n";
        let manifest = Manifest::parse(text);
        assert_eq!(manifest.entries().len(), 2);
        assert_eq!(manifest.dropped_lines(), 2);
        assert_eq!(manifest.container_count(), 1);
    }

    #[test]
    fn test_entry_display_round_trips() {
        let line = "[03,11], {04200}, Machine parts";
        assert_eq!(ManifestEntry::parse(line).unwrap().to_string(), line);
    }

    #[test]
    fn test_outbound_moves_descriptions() {
        let manifest = Manifest::parse(
            "[01,01], {00500}, Rice\n[02,01], {00300}, Tea\n[01,12], {00000}, NAN",
        );
        let moves = [ContainerMove::crane(
            Position::new(2, 1),
            Position::new(1, 7),
            300,
        )];
        let outbound = manifest.outbound(&moves).unwrap();

        assert_eq!(outbound.entries().len(), ROWS * COLUMNS);
        let text = outbound.to_string();
        assert!(text.starts_with("[01,01], {00500}, Rice\n"));
        assert!(text.contains("[01,07], {00300}, Tea"));
        assert!(text.contains("[02,01], {00000}, UNUSED"));
        assert!(text.contains("[01,12], {00000}, NAN"));
        assert!(text.ends_with("[08,12], {00000}, UNUSED"));
    }

    #[test]
    fn test_outbound_rejects_stale_move() {
        let manifest = Manifest::parse("[01,01], {00500}, Rice");
        let moves = [ContainerMove::crane(
            Position::new(1, 2),
            Position::new(1, 7),
            500,
        )];
        assert!(manifest.outbound(&moves).is_err());
    }

    #[test]
    fn test_outbound_rejects_moves_that_break_support() {
        let manifest = Manifest::parse(
            "[01,01], {00500}, Rice\n[02,01], {00300}, Tea\n[01,12], {00000}, NAN",
        );

        let buried = [ContainerMove::crane(Position::new(1, 1), Position::new(1, 7), 500)];
        assert!(matches!(
            manifest.outbound(&buried),
            Err(StowageError::IllegalMove {
                reason: IllegalMoveReason::Buried,
                ..
            })
        ));

        // A NAN slot holds nothing up.
        let onto_nan = [ContainerMove::crane(Position::new(2, 1), Position::new(2, 12), 300)];
        assert!(matches!(
            manifest.outbound(&onto_nan),
            Err(StowageError::IllegalMove {
                reason: IllegalMoveReason::Unsupported,
                ..
            })
        ));
    }
}
