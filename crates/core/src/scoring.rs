//! Scoring module - line clear points and the level/speed curve
//!
//! - Clearing 1/2/3/4 lines at once awards 100/300/500/800 points, multiplied
//!   by the level the clear happened on.
//! - The level goes up every 10 cleared lines, starting at level 1.
//! - Gravity starts at 1000ms per row and gets 100ms faster per level, down to
//!   a 100ms floor at level 10.

use crate::types::{
    BASE_DROP_MS, DROP_INTERVAL_MIN_MS, DROP_STEP_MS, LINES_PER_LEVEL, LINE_SCORES,
};

/// Score calculation result for one lock
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScoreResult {
    /// Points awarded for the clear
    pub points: u32,
    /// Total lines after the clear
    pub lines: u32,
    /// Level after the clear
    pub level: u32,
    /// Drop interval after the clear
    pub drop_interval_ms: u32,
}

/// Calculate line clear score
/// lines: number of lines cleared at once (0-4)
/// level: current level (1-based)
pub fn calculate_line_score(lines: usize, level: u32) -> u32 {
    match LINE_SCORES.get(lines) {
        Some(&base) => base.saturating_mul(level),
        None => 0,
    }
}

/// Level management
/// Level increases every 10 lines cleared, starting from 1
pub fn calculate_level(total_lines: u32) -> u32 {
    total_lines / LINES_PER_LEVEL + 1
}

/// Get drop interval for a level (in milliseconds)
pub fn get_drop_interval_ms(level: u32) -> u32 {
    let speedup = level.saturating_sub(1).saturating_mul(DROP_STEP_MS);
    BASE_DROP_MS
        .saturating_sub(speedup)
        .max(DROP_INTERVAL_MIN_MS)
}

/// Apply a clear of `lines_cleared` rows to the running totals.
///
/// Points use the level in effect before the clear. Returns `None` when no
/// line was cleared, in which case nothing changes.
pub fn calculate_score(lines_cleared: usize, total_lines: u32, level: u32) -> Option<ScoreResult> {
    if lines_cleared == 0 {
        return None;
    }
    let points = calculate_line_score(lines_cleared, level);
    let lines = total_lines.saturating_add(lines_cleared as u32);
    let level = calculate_level(lines);
    Some(ScoreResult {
        points,
        lines,
        level,
        drop_interval_ms: get_drop_interval_ms(level),
    })
}
