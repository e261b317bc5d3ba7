//! The 1–75 ball domain and its B/I/N/G/O column split.

use std::ops::RangeInclusive;

pub const MIN_BALL: u8 = 1;
pub const MAX_BALL: u8 = 75;
pub const TOTAL_BALLS: usize = MAX_BALL as usize;

/// Column letters in grid order.
pub const BALL_COLUMNS: [char; 5] = ['B', 'I', 'N', 'G', 'O'];

/// Width of the number range owned by each column.
const COLUMN_SPAN: u8 = 15;

/// The inclusive number range for a column (0 = B … 4 = O).
///
/// # Panics
///
/// Panics if `column` is not in `0..5`.
pub fn column_range(column: usize) -> RangeInclusive<u8> {
    assert!(column < BALL_COLUMNS.len(), "column {} out of range", column);
    let start = column as u8 * COLUMN_SPAN + 1;
    start..=start + COLUMN_SPAN - 1
}

/// Returns the column letter a ball is announced under, or `None` outside 1–75.
pub fn column_letter(ball: u8) -> Option<char> {
    if !(MIN_BALL..=MAX_BALL).contains(&ball) {
        return None;
    }
    Some(BALL_COLUMNS[((ball - 1) / COLUMN_SPAN) as usize])
}
