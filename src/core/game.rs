//! Game module - the board engine that drives a session.
//!
//! Owns the grid of locked cells, the active piece, the next-piece
//! lookahead and score/level state. The external loop serializes all
//! movement, rotation and drop calls plus the periodic gravity tick into
//! this single-threaded state machine; the only terminal condition is
//! game over, after which every mutating operation is a no-op.

use crate::core::pieces::Piece;
use crate::core::rng::{PieceSource, SimpleRng};
use crate::core::scoring::{
    fall_interval_ms, level_for_lines, line_clear_score, HARD_DROP_CELL_SCORE,
    SOFT_DROP_CELL_SCORE,
};
use crate::core::Board;

/// Horizontal wall-kick offsets tried, in order, when an in-place rotation
/// is illegal. Single-cell kicks before double-cell, left before right at
/// each magnitude. This ordering is load-bearing for compatibility.
const ROTATION_KICKS: [i8; 4] = [-1, 1, -2, 2];

/// Complete state of one game session.
pub struct Game {
    board: Board,
    current: Piece,
    next: Piece,
    source: Box<dyn PieceSource>,
    score: u32,
    lines: u32,
    level: u32,
    game_over: bool,
}

impl std::fmt::Debug for Game {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Game")
            .field("current", &self.current)
            .field("next", &self.next)
            .field("score", &self.score)
            .field("lines", &self.lines)
            .field("level", &self.level)
            .field("game_over", &self.game_over)
            .finish_non_exhaustive()
    }
}

impl Game {
    /// Create a session drawing pieces from the given source.
    ///
    /// Both the current and next piece are populated before this returns,
    /// so there is never a moment during play when the lookahead is empty.
    pub fn with_source(mut source: Box<dyn PieceSource>) -> Self {
        let current = Piece::new(source.next_kind());
        let next = Piece::new(source.next_kind());
        Self {
            board: Board::new(),
            current,
            next,
            source,
            score: 0,
            lines: 0,
            level: 1,
            game_over: false,
        }
    }

    /// Create a session with the seeded uniform generator.
    pub fn new(seed: u32) -> Self {
        Self::with_source(Box::new(SimpleRng::new(seed)))
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn current(&self) -> &Piece {
        &self.current
    }

    /// The queued lookahead piece, for the preview.
    pub fn next(&self) -> &Piece {
        &self.next
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn lines(&self) -> u32 {
        self.lines
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    /// The gravity interval the external timer should currently use.
    ///
    /// The engine owns no timer; callers re-read this after any lock since
    /// a line clear may have raised the level.
    pub fn fall_interval_ms(&self) -> u64 {
        fall_interval_ms(self.level)
    }

    #[cfg(test)]
    pub(crate) fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    /// True iff every cell the piece would occupy at `(nx, ny)` (with its
    /// current rotation) is in bounds and empty. Never mutates.
    pub fn is_valid_position(&self, piece: &Piece, nx: i8, ny: i8) -> bool {
        piece
            .shape()
            .iter()
            .all(|&(dx, dy)| self.board.is_valid(nx + dx, ny + dy))
    }

    /// Promote the lookahead to current and draw a fresh next piece.
    ///
    /// If the promoted piece's spawn cells are already occupied the board
    /// is full at the top: the game-over flag is set and the board grid is
    /// left untouched. Called after every successful lock.
    pub fn spawn_next(&mut self) {
        self.current = self.next;
        self.next = Piece::new(self.source.next_kind());
        if !self.is_valid_position(&self.current, self.current.x, self.current.y) {
            self.game_over = true;
        }
    }

    /// Try to shift the current piece by `(dx, dy)`.
    ///
    /// The single primitive under left/right shifts, soft drop and the
    /// gravity tick. Commits and returns true only when the candidate
    /// position is valid; false (and no state change) otherwise or when
    /// the game is over.
    pub fn try_move(&mut self, dx: i8, dy: i8) -> bool {
        if self.game_over {
            return false;
        }
        let nx = self.current.x + dx;
        let ny = self.current.y + dy;
        if self.is_valid_position(&self.current, nx, ny) {
            self.current.x = nx;
            self.current.y = ny;
            return true;
        }
        false
    }

    /// Rotate the current piece, with horizontal wall-kick fallback.
    ///
    /// `dir` is `+1` or `-1`. If the new rotation is illegal in place, the
    /// kick offsets are tried in fixed order and the first legal one is
    /// committed. If none fit, the rotation index is reverted and the
    /// anchor is untouched. Returns whether the rotation stuck.
    pub fn try_rotate(&mut self, dir: i8) -> bool {
        if self.game_over {
            return false;
        }
        let old_rot = self.current.rotate(dir);
        if self.is_valid_position(&self.current, self.current.x, self.current.y) {
            return true;
        }
        for kick in ROTATION_KICKS {
            if self.is_valid_position(&self.current, self.current.x + kick, self.current.y) {
                self.current.x += kick;
                return true;
            }
        }
        self.current.rot = old_rot;
        false
    }

    /// Write the current piece into the board, clear lines, spawn next.
    ///
    /// The terminal transition of a piece's active life. Cells above the
    /// top of the board are dropped rather than written.
    pub fn lock_piece(&mut self) {
        if self.game_over {
            return;
        }
        let shape = self.current.shape();
        self.board
            .fill_piece(&shape, self.current.x, self.current.y, self.current.kind);
        self.clear_lines();
        self.spawn_next();
    }

    /// Remove completed rows and update score/lines/level.
    ///
    /// The score award uses the level in effect when the rows completed;
    /// the level is recomputed from the new cumulative line count after.
    fn clear_lines(&mut self) {
        let cleared = self.board.clear_full_rows().len();
        if cleared == 0 {
            return;
        }
        self.score += line_clear_score(cleared, self.level);
        self.lines += cleared as u32;
        self.level = level_for_lines(self.lines);
    }

    /// Drop the current piece to the lowest legal row and lock it.
    ///
    /// Awards +2 per cell of descent. Never leaves the piece floating:
    /// the lock happens within this call.
    pub fn hard_drop(&mut self) {
        if self.game_over {
            return;
        }
        while self.try_move(0, 1) {
            self.score += HARD_DROP_CELL_SCORE;
        }
        self.lock_piece();
    }

    /// Move the current piece down one cell, locking on contact.
    ///
    /// Awards +1 on a successful descent. On failure the piece locks
    /// immediately instead of waiting for the next gravity tick, which is
    /// how holding the down key forces an early lock.
    pub fn soft_drop(&mut self) {
        if self.game_over {
            return;
        }
        if self.try_move(0, 1) {
            self.score += SOFT_DROP_CELL_SCORE;
        } else {
            self.lock_piece();
        }
    }
}
