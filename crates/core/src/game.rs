//! Game state and the command engine that transforms it.
//!
//! The engine is a pure function of (state, command) -> state: applying a
//! command never mutates the input and never fails. Intents the current state
//! cannot honor come back as a value equal to the input, so callers can fold
//! an arbitrary command stream over a game without checking anything first.

use arrayvec::ArrayVec;

use crate::levels::Level;
use tui_frogpond_types::{near, Command, Direction, Leaf, Offset, Position, MAX_LEAVES};

/// Fixed-capacity set of walkable leaves (at most one per pond cell).
pub type LeafSet = ArrayVec<Leaf, MAX_LEAVES>;

/// The player token: the leaf it sits on plus its facing.
///
/// The frog owns its leaf; that leaf is never a member of the walkable set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Frog {
    pub leaf: Leaf,
    pub direction: Direction,
}

impl Frog {
    pub fn position(&self) -> Position {
        self.leaf.position
    }

    /// Infer the jump direction from the frog to a leaf.
    ///
    /// The four cases are mutually exclusive: a target must be axis-aligned,
    /// on the correct side, and within leap range. Diagonal targets,
    /// out-of-range targets, and the frog's own cell all yield `None`.
    pub fn direction_to(&self, leaf: Leaf) -> Option<Direction> {
        let from = self.leaf.position;
        let to = leaf.position;

        if from.x == to.x && from.y > to.y && near(from.y, to.y) {
            Some(Direction::Up)
        } else if from.y == to.y && from.x < to.x && near(from.x, to.x) {
            Some(Direction::Right)
        } else if from.x == to.x && from.y < to.y && near(from.y, to.y) {
            Some(Direction::Down)
        } else if from.y == to.y && from.x > to.x && near(from.x, to.x) {
            Some(Direction::Left)
        } else {
            None
        }
    }
}

/// Complete game state for one level in progress.
///
/// The frog's leaf and the walkable set partition the level's leaves by
/// occupancy: together they are every leaf not yet consumed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    pub frog: Frog,
    pub leaves: LeafSet,
    pub level_number: usize,
    pub level: &'static Level,
}

impl Game {
    /// Apply one command, producing the next game state.
    ///
    /// Total over any state: invalid or nonsensical commands return a value
    /// equal to the input.
    pub fn apply(&self, command: Command) -> Game {
        match command {
            Command::Nop => self.clone(),
            Command::MoveBy(delta) => self.move_by(delta),
            Command::MoveTo(leaf) => self.move_to(leaf),
            Command::Continue => self.advance(),
        }
    }

    /// Find the walkable leaf at an exact position, if any.
    ///
    /// Positions are unique among leaves, so at most one can match.
    pub fn find_leaf(&self, position: Position) -> Option<Leaf> {
        self.leaves
            .iter()
            .copied()
            .find(|leaf| leaf.position == position)
    }

    /// Leaves the frog could jump to from where it sits now.
    pub fn reachable_leaves(&self) -> impl Iterator<Item = Leaf> + '_ {
        self.leaves
            .iter()
            .copied()
            .filter(|&leaf| self.frog.direction_to(leaf).is_some())
    }

    fn move_by(&self, delta: Offset) -> Game {
        if delta == (0, 0) {
            return self.clone();
        }

        let target = self.frog.position().translate(delta);
        match self.find_leaf(target) {
            Some(leaf) => self.move_to(leaf),
            None => self.clone(),
        }
    }

    fn move_to(&self, leaf: Leaf) -> Game {
        // Guards against a command naming a leaf the direction rule cannot
        // classify; such a jump is absorbed rather than signaled.
        let Some(direction) = self.frog.direction_to(leaf) else {
            return self.clone();
        };

        // The origin leaf sinks: it is already absent from the walkable set,
        // and the destination leaf now belongs to the frog.
        let mut leaves = self.leaves.clone();
        leaves.retain(|l| l.position != leaf.position);

        Game {
            frog: Frog { leaf, direction },
            leaves,
            level_number: self.level_number,
            level: self.level,
        }
    }
}
