//! Terminal frog-pond runner (default binary).
//!
//! This is the primary gameplay entrypoint. It uses crossterm for keyboard
//! and mouse input and a framebuffer-based renderer (no ratatui widgets).
//!
//! The loop is a plain left-fold of commands over the game value: one owner,
//! one `apply` per input event, in arrival order.

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind, MouseButton, MouseEventKind};

use tui_frogpond::core::load_level;
use tui_frogpond::input::{handle_key_event, select_leaf, should_quit, should_restart};
use tui_frogpond::term::{PondView, TerminalRenderer, Viewport};
use tui_frogpond::types::FRAME_MS;

fn main() -> Result<()> {
    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer) -> Result<()> {
    let mut game = load_level(0);
    let view = PondView::default();

    loop {
        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        let viewport = Viewport::new(w, h);
        let fb = view.render(&game, viewport);
        term.draw(&fb)?;

        // Input.
        if !event::poll(Duration::from_millis(FRAME_MS))? {
            continue;
        }

        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                if should_quit(key) {
                    return Ok(());
                }
                if should_restart(key) {
                    game = load_level(game.level_number as i32);
                } else if let Some(command) = handle_key_event(key) {
                    game = game.apply(command);
                }
            }
            Event::Mouse(mouse) if mouse.kind == MouseEventKind::Down(MouseButton::Left) => {
                if let Some(position) = view.hit_test(viewport, mouse.column, mouse.row) {
                    if let Some(command) = select_leaf(&game, position) {
                        game = game.apply(command);
                    }
                }
            }
            Event::Resize(_, _) => term.invalidate(),
            _ => {}
        }
    }
}
