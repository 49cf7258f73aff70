//! Input adapter: terminal events in, game commands out.
//!
//! This crate is a pure translation boundary. It owns no state and applies
//! no rules of its own; it only turns crossterm events into the command set
//! the engine understands, and validates pointer selections against the
//! current game before forwarding them.

pub mod map;

pub use map::{handle_key_event, select_leaf, should_quit, should_restart};
