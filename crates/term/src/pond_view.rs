//! PondView: maps the current game state into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested, and its layout math
//! is shared with [`PondView::hit_test`] so pointer input and rendering can
//! never disagree about where a board cell sits on screen.

use tui_frogpond_core::{levels, Game};
use tui_frogpond_types::{Direction, Position, BOARD_HEIGHT, BOARD_WIDTH};

use crate::fb::{CellStyle, FrameBuffer, Rgb};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// A lightweight terminal renderer for the pond.
pub struct PondView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    /// Board cell height in terminal rows.
    cell_h: u16,
}

impl Default for PondView {
    fn default() -> Self {
        // 2x1 helps compensate for typical terminal glyph aspect ratio.
        Self {
            cell_w: 2,
            cell_h: 1,
        }
    }
}

const WATER: CellStyle = CellStyle::new(Rgb::new(70, 115, 160), Rgb::new(8, 40, 78));
const BORDER: CellStyle = CellStyle::new(Rgb::new(170, 190, 210), Rgb::new(0, 0, 0));
const LEAF: CellStyle = CellStyle::new(Rgb::new(110, 190, 90), Rgb::new(8, 40, 78));
const LEAF_REACHABLE: CellStyle =
    CellStyle::new(Rgb::new(205, 255, 120), Rgb::new(16, 64, 50)).bold();
const FROG: CellStyle = CellStyle::new(Rgb::new(250, 220, 80), Rgb::new(20, 90, 44)).bold();
const MARKER: CellStyle = CellStyle::new(Rgb::new(230, 95, 95), Rgb::new(8, 40, 78));
const TEXT: CellStyle = CellStyle::new(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));
const OVERLAY: CellStyle = CellStyle::new(Rgb::new(255, 240, 160), Rgb::new(40, 40, 20)).bold();

impl PondView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self { cell_w, cell_h }
    }

    /// Render the current game state into a framebuffer.
    pub fn render(&self, game: &Game, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        fb.clear(CellStyle::default().cell(' '));

        let (start_x, start_y) = self.origin(viewport);
        let (frame_w, frame_h) = self.frame_size();

        // Water inside the frame, with a sparse deterministic ripple.
        fb.fill_rect(
            start_x + 1,
            start_y + 1,
            frame_w - 2,
            frame_h - 2,
            ' ',
            WATER,
        );
        for y in 0..frame_h - 2 {
            for x in 0..frame_w - 2 {
                if (x + 3 * y) % 7 == 0 {
                    fb.put_char(start_x + 1 + x, start_y + 1 + y, '~', WATER);
                }
            }
        }

        self.draw_border(&mut fb, start_x, start_y, frame_w, frame_h);

        // Decorative level flag.
        let (mx, my) = self.cell_origin(start_x, start_y, game.level.marker);
        fb.put_char(mx, my, '⚑', MARKER);

        // Leaves, with the reachable ones brightened for pointer selection.
        for leaf in &game.leaves {
            let reachable = game.frog.direction_to(*leaf).is_some();
            let style = if reachable { LEAF_REACHABLE } else { LEAF };
            self.draw_leaf(&mut fb, start_x, start_y, leaf.position, style);
        }

        // The frog rides its own leaf.
        self.draw_leaf(&mut fb, start_x, start_y, game.frog.position(), FROG);
        let (fx, fy) = self.cell_origin(start_x, start_y, game.frog.position());
        fb.put_char(fx, fy, frog_glyph(game.frog.direction), FROG);

        // Title above, status and hints below.
        let title = format!(
            "pond {}/{} · {}",
            game.level_number + 1,
            levels::count(),
            game.level.name
        );
        fb.put_str(start_x, start_y.saturating_sub(1), &title, TEXT);
        let status = format!("{} leaves to go", game.leaves.len());
        fb.put_str(start_x, start_y + frame_h, &status, TEXT);
        fb.put_str(
            start_x,
            start_y + frame_h + 1,
            "arrows hop · shift leaps · enter continue · r retry · q quit",
            TEXT,
        );

        // End-of-level overlays; finished wins over stuck, like the engine.
        if game.completed() {
            self.draw_overlay(&mut fb, start_x, start_y, " pond cleared · enter for next ");
        } else if game.stuck() {
            self.draw_overlay(&mut fb, start_x, start_y, " stuck · enter to retry ");
        }

        fb
    }

    /// Map a terminal cell back to a board position, if it lies on the board.
    pub fn hit_test(&self, viewport: Viewport, column: u16, row: u16) -> Option<Position> {
        let (start_x, start_y) = self.origin(viewport);
        let inner_x = column.checked_sub(start_x + 1)?;
        let inner_y = row.checked_sub(start_y + 1)?;

        let x = inner_x / self.cell_w;
        let y = inner_y / self.cell_h;
        if x < BOARD_WIDTH as u16 && y < BOARD_HEIGHT as u16 {
            Some(Position::new(x as i8, y as i8))
        } else {
            None
        }
    }

    fn frame_size(&self) -> (u16, u16) {
        (
            BOARD_WIDTH as u16 * self.cell_w + 2,
            BOARD_HEIGHT as u16 * self.cell_h + 2,
        )
    }

    fn origin(&self, viewport: Viewport) -> (u16, u16) {
        let (frame_w, frame_h) = self.frame_size();
        (
            viewport.width.saturating_sub(frame_w) / 2,
            viewport.height.saturating_sub(frame_h) / 2,
        )
    }

    fn cell_origin(&self, start_x: u16, start_y: u16, position: Position) -> (u16, u16) {
        (
            start_x + 1 + position.x as u16 * self.cell_w,
            start_y + 1 + position.y as u16 * self.cell_h,
        )
    }

    fn draw_leaf(&self, fb: &mut FrameBuffer, start_x: u16, start_y: u16, position: Position, style: CellStyle) {
        let (x, y) = self.cell_origin(start_x, start_y, position);
        fb.fill_rect(x, y, self.cell_w, self.cell_h, ' ', style);
        if self.cell_w >= 2 {
            fb.put_char(x, y, '(', style);
            fb.put_char(x + self.cell_w - 1, y, ')', style);
        } else {
            fb.put_char(x, y, 'o', style);
        }
    }

    fn draw_border(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16) {
        if w < 2 || h < 2 {
            return;
        }
        for dx in 1..w - 1 {
            fb.put_char(x + dx, y, '─', BORDER);
            fb.put_char(x + dx, y + h - 1, '─', BORDER);
        }
        for dy in 1..h - 1 {
            fb.put_char(x, y + dy, '│', BORDER);
            fb.put_char(x + w - 1, y + dy, '│', BORDER);
        }
        fb.put_char(x, y, '┌', BORDER);
        fb.put_char(x + w - 1, y, '┐', BORDER);
        fb.put_char(x, y + h - 1, '└', BORDER);
        fb.put_char(x + w - 1, y + h - 1, '┘', BORDER);
    }

    fn draw_overlay(&self, fb: &mut FrameBuffer, start_x: u16, start_y: u16, text: &str) {
        let (frame_w, frame_h) = self.frame_size();
        let len = text.chars().count() as u16;
        let x = start_x + frame_w.saturating_sub(len) / 2;
        let y = start_y + frame_h / 2;
        fb.put_str(x, y, text, OVERLAY);
    }
}

fn frog_glyph(direction: Direction) -> char {
    match direction {
        Direction::Up => '▲',
        Direction::Right => '▶',
        Direction::Down => '▼',
        Direction::Left => '◀',
    }
}
