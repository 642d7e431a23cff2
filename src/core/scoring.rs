//! Scoring module - line-clear points, level and gravity progression

use crate::types::{
    GRAVITY_FLOOR_MS, GRAVITY_STEP_MS, INITIAL_GRAVITY_MS, LINES_PER_LEVEL, LINE_SCORES,
    MAX_LEVEL,
};

/// Points for the rows cleared by a single lock-in. A tetromino can complete
/// at most 4 rows, so larger counts score as 4.
pub fn score_for_clear(rows: usize) -> u32 {
    LINE_SCORES[rows.min(4)]
}

/// Level for a total line count: one level per 10 lines, starting at 1,
/// capped at `MAX_LEVEL`.
pub fn level_for_lines(lines: u32) -> u32 {
    (1 + lines / LINES_PER_LEVEL).min(MAX_LEVEL)
}

/// Gravity interval for a level: 50 ms faster per level above 1, floored at
/// 100 ms.
pub fn gravity_interval_ms(level: u32) -> u32 {
    INITIAL_GRAVITY_MS
        .saturating_sub(level.saturating_sub(1) * GRAVITY_STEP_MS)
        .max(GRAVITY_FLOOR_MS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clear_scores() {
        assert_eq!(score_for_clear(0), 0);
        assert_eq!(score_for_clear(1), 100);
        assert_eq!(score_for_clear(2), 300);
        assert_eq!(score_for_clear(3), 600);
        assert_eq!(score_for_clear(4), 1000);
    }

    #[test]
    fn clearing_one_through_four_accumulates_2000() {
        let total: u32 = (1..=4).map(score_for_clear).sum();
        assert_eq!(total, 2000);
    }

    #[test]
    fn level_thresholds() {
        assert_eq!(level_for_lines(0), 1);
        assert_eq!(level_for_lines(9), 1);
        assert_eq!(level_for_lines(10), 2);
        assert_eq!(level_for_lines(20), 3);
        assert_eq!(level_for_lines(30), 4);
        assert_eq!(level_for_lines(95), 10);
    }

    #[test]
    fn level_caps_at_ten() {
        assert_eq!(level_for_lines(100), 10);
        assert_eq!(level_for_lines(200), 10);
    }

    #[test]
    fn gravity_shrinks_per_level_with_floor() {
        assert_eq!(gravity_interval_ms(1), 500);
        assert_eq!(gravity_interval_ms(2), 450);
        assert_eq!(gravity_interval_ms(5), 300);
        assert_eq!(gravity_interval_ms(9), 100);
        assert_eq!(gravity_interval_ms(10), 100);
    }
}
