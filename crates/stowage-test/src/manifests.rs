//! Manifest text samples.

/// A small manifest whose top port container can cross in one move.
///
/// Every cell is listed the way a real manifest lists them, including `NAN`
/// slots at the outer corners.
pub fn single_move_manifest() -> String {
    let mut lines = Vec::new();
    for row in 1..=8 {
        for column in 1..=12 {
            let (weight, description) = match (row, column) {
                (1, 1) | (1, 12) => (0, "NAN"),
                (1, 6) => (100, "Cat food"),
                (2, 6) => (100, "Dog food"),
                _ => (0, "UNUSED"),
            };
            lines.push(format!(
                "[{:02},{:02}], {{{:05}}}, {}",
                row, column, weight, description
            ));
        }
    }
    lines.join("\n")
}

/// A manifest with a few damaged lines mixed in.
pub const NOISY_MANIFEST: &str = "\
[01,01], {00500}, Rice
this line is garbage
[01,07], {00480}, Beans
[09,01], {00100}, Off the ship
[01,02], {0x10}, Bad weight
";
