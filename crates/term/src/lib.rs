//! Terminal rendering module.
//!
//! A small, game-oriented rendering layer: the pond view draws the current
//! game state into a plain framebuffer of styled character cells, and the
//! terminal renderer flushes framebuffers to the real terminal. No ratatui
//! widgets or layout.
//!
//! The split keeps `core` free of I/O and makes the view unit-testable: the
//! framebuffer side is pure, and only [`renderer::TerminalRenderer`] touches
//! stdout.

pub mod fb;
pub mod pond_view;
pub mod renderer;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use pond_view::{PondView, Viewport};
pub use renderer::TerminalRenderer;
