//! GameView: maps engine state into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::{Game, Piece};
use crate::term::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{PieceKind, BOARD_HEIGHT, BOARD_WIDTH};

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

/// Pastel palette, one color per shape family.
pub fn piece_color(kind: PieceKind) -> Rgb {
    match kind {
        PieceKind::I => Rgb::new(173, 216, 230),
        PieceKind::J => Rgb::new(176, 196, 222),
        PieceKind::L => Rgb::new(255, 218, 185),
        PieceKind::O => Rgb::new(255, 255, 224),
        PieceKind::S => Rgb::new(144, 238, 144),
        PieceKind::T => Rgb::new(216, 191, 216),
        PieceKind::Z => Rgb::new(255, 182, 193),
    }
}

/// Renders the game into a framebuffer.
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 compensates for typical terminal glyph aspect ratio.
        Self { cell_w: 2 }
    }
}

impl GameView {
    /// Render the current game state into a framebuffer.
    ///
    /// `paused` is loop state, not engine state, so it comes in from the
    /// caller.
    pub fn render(&self, game: &Game, paused: bool, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);

        let board_w = (BOARD_WIDTH as u16) * self.cell_w;
        let board_h = BOARD_HEIGHT as u16;
        // Board frame on the left, sidebar to its right.
        let origin_x = 1u16;
        let origin_y = 1u16;

        self.draw_frame(&mut fb, origin_x - 1, origin_y - 1, board_w + 2, board_h + 2);

        // Locked board cells.
        for y in 0..BOARD_HEIGHT as i8 {
            for x in 0..BOARD_WIDTH as i8 {
                match game.board().get(x, y).unwrap_or(None) {
                    Some(kind) => {
                        self.fill_board_cell(&mut fb, origin_x, origin_y, x, y, piece_color(kind))
                    }
                    None => self.draw_empty_cell(&mut fb, origin_x, origin_y, x, y),
                }
            }
        }

        // Active piece. Not drawn after game over: the current piece is
        // the failed spawn and overlaps the stack.
        if !game.game_over() {
            let color = piece_color(game.current().kind);
            for (x, y) in game.current().cells() {
                if x >= 0 && x < BOARD_WIDTH as i8 && y >= 0 && y < BOARD_HEIGHT as i8 {
                    self.fill_board_cell(&mut fb, origin_x, origin_y, x, y, color);
                }
            }
        }

        // Sidebar: score, lines, level, next preview.
        let sx = origin_x + board_w + 3;
        let label = CellStyle::default();
        fb.put_str(sx, origin_y, &format!("Score: {}", game.score()), label);
        fb.put_str(sx, origin_y + 1, &format!("Lines: {}", game.lines()), label);
        fb.put_str(sx, origin_y + 2, &format!("Level: {}", game.level()), label);
        fb.put_str(sx, origin_y + 4, "Next:", label);
        self.draw_preview(&mut fb, sx, origin_y + 5, game.next());

        if paused {
            self.draw_banner(&mut fb, origin_x, origin_y, board_w, board_h, "PAUSED");
        }
        if game.game_over() {
            self.draw_banner(&mut fb, origin_x, origin_y, board_w, board_h, "GAME OVER");
            fb.put_str(sx, origin_y + 11, "Press R to restart", label);
        }

        fb
    }

    fn fill_board_cell(&self, fb: &mut FrameBuffer, ox: u16, oy: u16, x: i8, y: i8, color: Rgb) {
        let style = CellStyle {
            fg: Rgb::new(0, 0, 0),
            bg: color,
            bold: false,
        };
        let cx = ox + (x as u16) * self.cell_w;
        let cy = oy + y as u16;
        fb.fill_rect(cx, cy, self.cell_w, 1, ' ', style);
    }

    fn draw_empty_cell(&self, fb: &mut FrameBuffer, ox: u16, oy: u16, x: i8, y: i8) {
        let style = CellStyle {
            fg: Rgb::new(220, 220, 220),
            bg: Rgb::new(255, 255, 255),
            bold: false,
        };
        let cx = ox + (x as u16) * self.cell_w;
        let cy = oy + y as u16;
        fb.put_char(cx, cy, '·', style);
        fb.put_char(cx + 1, cy, ' ', style);
    }

    fn draw_frame(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16) {
        let style = CellStyle::default();
        for dx in 0..w {
            fb.put_char(x + dx, y, '─', style);
            fb.put_char(x + dx, y + h - 1, '─', style);
        }
        for dy in 0..h {
            fb.put_char(x, y + dy, '│', style);
            fb.put_char(x + w - 1, y + dy, '│', style);
        }
        fb.put_char(x, y, '┌', style);
        fb.put_char(x + w - 1, y, '┐', style);
        fb.put_char(x, y + h - 1, '└', style);
        fb.put_char(x + w - 1, y + h - 1, '┘', style);
    }

    /// Draw the next piece in a small box using its spawn rotation.
    fn draw_preview(&self, fb: &mut FrameBuffer, x: u16, y: u16, piece: &Piece) {
        let color = piece_color(piece.kind);
        let style = CellStyle {
            fg: Rgb::new(0, 0, 0),
            bg: color,
            bold: false,
        };
        for (dx, dy) in piece.shape() {
            let cx = x + (dx as u16) * self.cell_w;
            let cy = y + dy as u16;
            fb.fill_rect(cx, cy, self.cell_w, 1, ' ', style);
        }
    }

    fn draw_banner(&self, fb: &mut FrameBuffer, ox: u16, oy: u16, w: u16, h: u16, text: &str) {
        let style = CellStyle {
            fg: Rgb::new(200, 70, 70),
            bg: Rgb::new(255, 255, 255),
            bold: true,
        };
        let tx = ox + w.saturating_sub(text.len() as u16) / 2;
        let ty = oy + h / 2;
        fb.put_str(tx, ty, text, style);
    }
}
