//! Key and pointer mapping from terminal events to game commands.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use tui_frogpond_core::Game;
use tui_frogpond_types::{Command, Position, LEAP_RANGE};

/// Map keyboard input to a game command.
///
/// Arrows, `wasd`, and `hjkl` hop one cell; holding shift (or typing the
/// uppercase letter in terminals that fold shift into the character) doubles
/// the delta into a leap. Enter or space asks to continue past a finished or
/// dead-ended level. Anything else maps to no command.
pub fn handle_key_event(key: KeyEvent) -> Option<Command> {
    let step = if is_leap(key) { LEAP_RANGE } else { 1 };

    match key.code {
        // Movement
        KeyCode::Up
        | KeyCode::Char('w')
        | KeyCode::Char('W')
        | KeyCode::Char('k')
        | KeyCode::Char('K') => Some(Command::MoveBy((0, -step))),
        KeyCode::Down
        | KeyCode::Char('s')
        | KeyCode::Char('S')
        | KeyCode::Char('j')
        | KeyCode::Char('J') => Some(Command::MoveBy((0, step))),
        KeyCode::Left
        | KeyCode::Char('a')
        | KeyCode::Char('A')
        | KeyCode::Char('h')
        | KeyCode::Char('H') => Some(Command::MoveBy((-step, 0))),
        KeyCode::Right
        | KeyCode::Char('d')
        | KeyCode::Char('D')
        | KeyCode::Char('l')
        | KeyCode::Char('L') => Some(Command::MoveBy((step, 0))),

        // Continue
        KeyCode::Enter | KeyCode::Char(' ') => Some(Command::Continue),

        _ => None,
    }
}

/// Map a pointer tap on a board cell to a jump command.
///
/// Only a currently-reachable leaf produces a command; taps on water, on an
/// unreachable leaf, or on the frog itself map to nothing.
pub fn select_leaf(game: &Game, position: Position) -> Option<Command> {
    let leaf = game.find_leaf(position)?;
    game.frog.direction_to(leaf).map(|_| Command::MoveTo(leaf))
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc)
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

/// Check if key should restart the current level.
pub fn should_restart(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('r') | KeyCode::Char('R'))
}

fn is_leap(key: KeyEvent) -> bool {
    key.modifiers.contains(KeyModifiers::SHIFT)
        || matches!(key.code, KeyCode::Char(c) if c.is_ascii_uppercase())
}
