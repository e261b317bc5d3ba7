//! Fixed geometry of the printed card, in logical units.

use bingo_types::{Rect, GRID_SIZE};

pub const CANVAS_WIDTH: f32 = 800.0;
pub const CANVAS_HEIGHT: f32 = 1100.0;
pub const PAGE_MARGIN: f32 = 30.0;

pub const HEADER_RULE_Y: f32 = 100.0;
pub const PARTICIPANT_BLOCK_Y: f32 = 130.0;

pub const GRID_MARGIN_X: f32 = 80.0;
pub const GRID_TOP: f32 = 205.0;
pub const GRID_WIDTH: f32 = CANVAS_WIDTH - 2.0 * GRID_MARGIN_X;
pub const GRID_GAP: f32 = 10.0;
pub const CELL_SIZE: f32 = (GRID_WIDTH - (GRID_SIZE as f32 - 1.0) * GRID_GAP) / GRID_SIZE as f32;
pub const CELL_RADIUS: f32 = 16.0;

pub const FOOTER_Y: f32 = CANVAS_HEIGHT - 80.0;
pub const CONTENT_WIDTH: f32 = CANVAS_WIDTH - 2.0 * PAGE_MARGIN;

/// Top-left corner of a grid cell relative to the grid origin. Row 0 is
/// the first number row; the letter header occupies the slot above it.
pub fn cell_origin(row: usize, col: usize) -> (f32, f32) {
    let pitch = CELL_SIZE + GRID_GAP;
    (col as f32 * pitch, (row + 1) as f32 * pitch)
}

/// Center of a column header circle relative to the grid origin.
pub fn header_center(col: usize) -> (f32, f32) {
    let pitch = CELL_SIZE + GRID_GAP;
    (col as f32 * pitch + CELL_SIZE / 2.0, CELL_SIZE / 2.0)
}

/// Box of the cell at `index` (row-major) in canvas coordinates.
pub fn cell_rect(index: usize) -> Rect {
    let (x, y) = cell_origin(index / GRID_SIZE, index % GRID_SIZE);
    Rect::new(GRID_MARGIN_X + x, GRID_TOP + y, CELL_SIZE, CELL_SIZE)
}
