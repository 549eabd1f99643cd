//! Scoring module - line-clear rewards, level curve and gravity interval.
//!
//! Scoring is deliberately simple: a multi-line clear scales with the count
//! (not count squared) and with the level at the time of the clear, so
//! later levels pay more per line. Drops award flat per-cell bonuses.

use crate::types::{FALL_BASE_MS, FALL_FLOOR_MS, FALL_STEP_MS};

/// Points for hard-dropping one cell.
pub const HARD_DROP_CELL_SCORE: u32 = 2;

/// Points for soft-dropping one cell.
pub const SOFT_DROP_CELL_SCORE: u32 = 1;

/// Score awarded for clearing `cleared` rows at once at the given level.
///
/// `level` is the level in effect when the rows were completed.
pub fn line_clear_score(cleared: usize, level: u32) -> u32 {
    100 * cleared as u32 * level
}

/// Level for a cumulative line count. Starts at 1, +1 every 10 lines.
pub fn level_for_lines(lines: u32) -> u32 {
    lines / 10 + 1
}

/// Gravity interval for a level, in milliseconds.
///
/// Shrinks by a fixed step per level above 1, floored at the minimum.
pub fn fall_interval_ms(level: u32) -> u64 {
    let steps = u64::from(level.saturating_sub(1)) * FALL_STEP_MS;
    FALL_BASE_MS.saturating_sub(steps).max(FALL_FLOOR_MS)
}
