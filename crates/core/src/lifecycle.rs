//! Level lifecycle - loading, finish/stuck detection, and the advance policy.
//!
//! Levels load by index with out-of-range indices substituted by 0, so the
//! catalog behaves as a cycle: finishing the last level starts the first one
//! over. There is no terminal state.

use tui_frogpond_types::{Direction, Leaf};

use crate::game::{Frog, Game, LeafSet};
use crate::levels::{self, Level};

/// Build a fresh game for the given level index.
///
/// Out-of-range indices (negative or past the catalog) load level 0. The
/// frog starts on the level's declared cell facing right; if the level data
/// is malformed and no leaf floats there, the first leaf in row-major order
/// is used instead. The starting leaf is removed from the walkable set.
pub fn load_level(requested: i32) -> Game {
    let level_number = if requested < 0 || requested >= levels::count() as i32 {
        0
    } else {
        requested as usize
    };
    let level = levels::get(level_number);

    let mut leaves = expand_leaves(level);
    let start = starting_leaf(level, &leaves);
    leaves.retain(|leaf| leaf.position != start.position);

    Game {
        frog: Frog {
            leaf: start,
            direction: Direction::Right,
        },
        leaves,
        level_number,
        level,
    }
}

/// Expand a level's boolean matrix into its leaf set, row-major.
fn expand_leaves(level: &Level) -> LeafSet {
    let mut leaves = LeafSet::new();
    for (y, row) in level.rows.iter().enumerate() {
        for (x, &cell) in row.iter().enumerate() {
            if cell {
                leaves.push(Leaf::at(x as i8, y as i8));
            }
        }
    }
    leaves
}

/// Pick the frog's starting leaf: the declared cell when a leaf floats
/// there, otherwise the first leaf in row-major order. Row-major is the
/// deterministic tie-break; nothing downstream depends on which leaf wins,
/// only that the same level always loads the same way.
fn starting_leaf(level: &Level, leaves: &LeafSet) -> Leaf {
    leaves
        .iter()
        .copied()
        .find(|leaf| leaf.position == level.frog)
        .or_else(|| leaves.first().copied())
        // An all-water matrix leaves nothing to stand on; park the frog on
        // its declared cell so loading stays total.
        .unwrap_or(Leaf {
            position: level.frog,
        })
}

impl Game {
    /// A level is finished when exactly one leaf remains unvisited.
    ///
    /// The last leaf is the finish, not a destination, so completion depends
    /// only on the remaining count, never on where the frog sits.
    pub fn completed(&self) -> bool {
        self.leaves.len() == 1
    }

    /// The frog is stuck when no remaining leaf is reachable.
    ///
    /// Check [`Game::completed`] first; a finished level often counts as
    /// stuck too, and [`Game::advance`] resolves that overlap by priority.
    pub fn stuck(&self) -> bool {
        !self
            .leaves
            .iter()
            .any(|&leaf| self.frog.direction_to(leaf).is_some())
    }

    /// Resolve a continue request: next level if finished, retry if stuck,
    /// otherwise nothing happens mid-level.
    pub fn advance(&self) -> Game {
        if self.completed() {
            load_level(self.level_number as i32 + 1)
        } else if self.stuck() {
            load_level(self.level_number as i32)
        } else {
            self.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tui_frogpond_types::{Command, Position};

    #[test]
    fn test_load_level_removes_start_leaf_from_walkable_set() {
        let game = load_level(0);

        assert_eq!(game.frog.position(), levels::get(0).frog);
        assert_eq!(game.frog.direction, Direction::Right);
        assert!(game.find_leaf(game.frog.position()).is_none());
    }

    #[test]
    fn test_load_level_expands_matrix_row_major() {
        let game = load_level(0);
        let level = levels::get(0);

        let total: usize = level
            .rows
            .iter()
            .map(|row| row.iter().filter(|&&c| c).count())
            .sum();
        assert_eq!(game.leaves.len(), total - 1);
    }

    #[test]
    fn test_load_level_clamps_out_of_range_to_zero() {
        assert_eq!(load_level(-1), load_level(0));
        assert_eq!(load_level(levels::count() as i32), load_level(0));
        assert_eq!(load_level(i32::MAX), load_level(0));
    }

    #[test]
    fn test_completed_is_exactly_one_leaf_left() {
        let mut game = load_level(0);
        assert!(!game.completed());

        // First level is a straight lane upward from the start.
        while game.leaves.len() > 1 {
            let before = game.leaves.len();
            game = game.apply(Command::MoveBy((0, -1)));
            assert_eq!(game.leaves.len(), before - 1);
        }
        assert!(game.completed());
    }

    #[test]
    fn test_advance_past_last_level_wraps_to_first() {
        let last = levels::count() - 1;
        let mut game = load_level(last as i32);

        // Drain the level to one leaf by hand so advance sees it finished.
        while game.leaves.len() > 1 {
            game.leaves.pop();
        }
        let next = game.advance();
        assert_eq!(next.level_number, 0);
        assert_eq!(next, load_level(0));
    }

    #[test]
    fn test_advance_when_stuck_reloads_same_level() {
        let mut game = load_level(1);
        // Strand the frog: keep two leaves, both unreachable from a corner.
        game.frog.leaf = Leaf::at(7, 7);
        game.leaves.clear();
        game.leaves.push(Leaf::at(0, 0));
        game.leaves.push(Leaf::at(1, 1));

        assert!(game.stuck());
        assert!(!game.completed());
        assert_eq!(game.advance(), load_level(1));
    }

    #[test]
    fn test_advance_mid_level_is_identity_and_idempotent() {
        let game = load_level(0);
        assert!(!game.completed());
        assert!(!game.stuck());

        let once = game.advance();
        assert_eq!(once, game);
        assert_eq!(once.advance(), once);
    }

    #[test]
    fn test_continue_command_delegates_to_advance() {
        let game = load_level(0);
        assert_eq!(game.apply(Command::Continue), game.advance());
    }

    #[test]
    fn test_stuck_when_no_leaf_classifiable() {
        let mut game = load_level(0);
        game.frog.leaf = Leaf::at(0, 0);
        game.leaves.clear();
        game.leaves.push(Leaf::at(3, 3));
        game.leaves.push(Leaf::at(0, 4));

        assert!(game.stuck());
    }

    #[test]
    fn test_not_stuck_with_one_reachable_leaf() {
        let mut game = load_level(0);
        game.frog.leaf = Leaf::at(0, 0);
        game.leaves.clear();
        game.leaves.push(Leaf::at(0, 2));

        assert!(!game.stuck());
    }

    #[test]
    fn test_malformed_start_falls_back_to_first_leaf_row_major() {
        // Frog declared on open water; leaves at (5, 1) and (2, 3).
        let mut rows = [[false; 8]; 8];
        rows[1][5] = true;
        rows[3][2] = true;
        let level = Level {
            name: "broken",
            rows,
            frog: Position::new(0, 0),
            marker: Position::new(0, 0),
        };

        let leaves = expand_leaves(&level);
        assert_eq!(starting_leaf(&level, &leaves), Leaf::at(5, 1));
    }

    #[test]
    fn test_well_formed_start_prefers_declared_cell() {
        let level = levels::get(0);
        let leaves = expand_leaves(level);
        assert_eq!(starting_leaf(level, &leaves).position, level.frog);
    }

    #[test]
    fn test_empty_matrix_still_loads() {
        let level = Level {
            name: "dry pond",
            rows: [[false; 8]; 8],
            frog: Position::new(4, 4),
            marker: Position::new(0, 0),
        };

        let leaves = expand_leaves(&level);
        assert!(leaves.is_empty());
        assert_eq!(starting_leaf(&level, &leaves).position, level.frog);
    }
}
