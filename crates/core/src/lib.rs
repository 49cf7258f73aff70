//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains all the game rules, state management, and level data.
//! It has **zero dependencies** on UI or I/O, making it:
//!
//! - **Deterministic**: The same command sequence always produces the same game
//! - **Testable**: Every rule is exercisable without a terminal
//! - **Portable**: Can run in any environment (terminal, GUI, headless)
//! - **Fast**: Zero-allocation leaf storage via fixed-capacity vectors
//!
//! # Module Structure
//!
//! - [`game`]: the game state and the command engine that transforms it
//! - [`levels`]: compiled-in catalog of hand-authored level layouts
//! - [`lifecycle`]: level loading, completion/stuck detection, advance policy
//!
//! # Game Rules
//!
//! - The frog sits on one leaf and faces one of four directions.
//! - A jump must be axis-aligned and within leap range (axis distance <= 2);
//!   a distance-2 leap clears one intervening cell without consuming it.
//! - The leaf the frog jumps off sinks: the walkable set shrinks by exactly
//!   one leaf per successful jump and never grows.
//! - A level is finished when a single leaf remains unvisited; the frog is
//!   stuck when no remaining leaf is reachable. Continuing advances to the
//!   next level or retries the current one, wrapping past the last level
//!   back to the first.
//!
//! # Example
//!
//! ```
//! use tui_frogpond_core::lifecycle::load_level;
//! use tui_frogpond_core::types::Command;
//!
//! // Load the first level and hop up the lane.
//! let game = load_level(0);
//! let before = game.leaves.len();
//! let after = game.apply(Command::MoveBy((0, -1)));
//! assert_eq!(after.leaves.len(), before - 1);
//!
//! // A jump onto open water is absorbed as a no-op.
//! assert_eq!(after.apply(Command::MoveBy((1, 0))), after);
//! ```

pub mod game;
pub mod levels;
pub mod lifecycle;

pub use tui_frogpond_types as types;

// Re-export commonly used types for convenience
pub use game::{Frog, Game, LeafSet};
pub use levels::Level;
pub use lifecycle::load_level;
