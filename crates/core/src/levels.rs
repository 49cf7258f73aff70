//! Level catalog - compiled-in static layouts.
//!
//! Each level is a rectangular boolean matrix (true = leaf), the frog's
//! starting cell, and a decorative marker cell the renderer draws a flag on.
//! Every shipped layout is hand-authored and clearable: a jump order exists
//! that visits all but one leaf.

use tui_frogpond_types::{Position, BOARD_HEIGHT, BOARD_WIDTH};

const W: usize = BOARD_WIDTH as usize;
const H: usize = BOARD_HEIGHT as usize;

/// One hand-authored level definition.
#[derive(Debug, PartialEq, Eq)]
pub struct Level {
    pub name: &'static str,
    /// Leaf layout, row-major: `rows[y][x]` is true where a leaf floats.
    pub rows: [[bool; W]; H],
    /// Cell the frog starts on; must hold a leaf in well-formed data.
    pub frog: Position,
    /// Decorative flag cell, rendering only.
    pub marker: Position,
}

/// Number of levels in the catalog.
pub fn count() -> usize {
    LEVELS.len()
}

/// Look up a level by index, defaulting to the first on out-of-range input.
pub fn get(index: usize) -> &'static Level {
    LEVELS.get(index).unwrap_or(&LEVELS[0])
}

const X: bool = true;
const O: bool = false;

pub static LEVELS: [Level; 6] = [
    // A straight lane of hops.
    Level {
        name: "first hops",
        rows: [
            [O, O, O, O, O, O, O, O],
            [O, O, O, O, O, O, O, O],
            [O, O, O, X, O, O, O, O],
            [O, O, O, X, O, O, O, O],
            [O, O, O, X, O, O, O, O],
            [O, O, O, X, O, O, O, O],
            [O, O, O, O, O, O, O, O],
            [O, O, O, O, O, O, O, O],
        ],
        frog: Position::new(3, 5),
        marker: Position::new(6, 1),
    },
    // One turn; still all unit hops.
    Level {
        name: "around the bend",
        rows: [
            [O, O, O, O, O, O, O, O],
            [O, O, O, O, O, O, O, O],
            [O, O, X, X, X, O, O, O],
            [O, O, O, O, X, O, O, O],
            [O, O, O, O, X, O, O, O],
            [O, O, O, O, X, O, O, O],
            [O, O, O, O, O, O, O, O],
            [O, O, O, O, O, O, O, O],
        ],
        frog: Position::new(2, 2),
        marker: Position::new(1, 6),
    },
    // The gap at (4, 4) forces the first leap.
    Level {
        name: "mind the gap",
        rows: [
            [O, O, O, O, O, O, O, O],
            [O, O, O, O, O, O, O, O],
            [O, O, O, O, O, O, O, O],
            [O, O, O, O, O, O, O, O],
            [O, X, X, X, O, X, X, O],
            [O, O, O, O, O, O, O, O],
            [O, O, O, O, O, O, O, O],
            [O, O, O, O, O, O, O, O],
        ],
        frog: Position::new(1, 4),
        marker: Position::new(7, 1),
    },
    // A closed ring; one wrong turn strands the frog.
    Level {
        name: "lily ring",
        rows: [
            [O, O, O, O, O, O, O, O],
            [O, O, O, O, O, O, O, O],
            [O, O, X, X, X, O, O, O],
            [O, O, X, O, X, O, O, O],
            [O, O, X, X, X, O, O, O],
            [O, O, O, O, O, O, O, O],
            [O, O, O, O, O, O, O, O],
            [O, O, O, O, O, O, O, O],
        ],
        frog: Position::new(2, 2),
        marker: Position::new(6, 6),
    },
    // Every jump is a full leap.
    Level {
        name: "stepping stones",
        rows: [
            [O, O, O, O, O, O, O, O],
            [O, X, O, X, O, O, O, O],
            [O, O, O, O, O, O, O, O],
            [O, O, O, X, O, X, O, O],
            [O, O, O, O, O, O, O, O],
            [O, O, O, O, O, X, O, X],
            [O, O, O, O, O, O, O, O],
            [O, O, O, O, O, O, O, X],
        ],
        frog: Position::new(1, 1),
        marker: Position::new(0, 6),
    },
    // A serpentine tour of the pond.
    Level {
        name: "the long way round",
        rows: [
            [O, O, O, O, O, O, O, O],
            [O, O, X, X, X, X, O, O],
            [O, O, O, O, O, X, O, O],
            [O, O, X, X, X, X, O, O],
            [O, O, X, O, O, O, O, O],
            [O, O, X, X, X, X, O, O],
            [O, O, O, O, O, O, O, O],
            [O, O, O, O, O, O, O, O],
        ],
        frog: Position::new(2, 1),
        marker: Position::new(7, 0),
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_is_nonempty() {
        assert!(count() >= 1);
    }

    #[test]
    fn test_get_clamps_out_of_range_to_first() {
        assert_eq!(get(count() + 5), &LEVELS[0]);
    }

    #[test]
    fn test_every_level_starts_on_a_leaf() {
        for level in &LEVELS {
            let Position { x, y } = level.frog;
            assert!(
                level.rows[y as usize][x as usize],
                "level '{}' declares a frog start on open water",
                level.name
            );
        }
    }

    #[test]
    fn test_every_level_has_at_least_two_leaves() {
        for level in &LEVELS {
            let leaves: usize = level
                .rows
                .iter()
                .map(|row| row.iter().filter(|&&c| c).count())
                .sum();
            assert!(leaves >= 2, "level '{}' is trivially finished", level.name);
        }
    }
}
