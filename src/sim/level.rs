//! Brick grid generation and level progression
//!
//! Levels get denser as the session progresses: one extra brick row per
//! clear, capped at [`MAX_BRICK_ROWS`].

use super::rect::Rect;
use super::state::{Brick, Color};
use crate::consts::*;

/// Neon row palette, cycled by row index
pub const PALETTE: [Color; 6] = [
    [255, 80, 150],
    [255, 120, 90],
    [255, 190, 60],
    [120, 220, 90],
    [90, 200, 255],
    [140, 120, 255],
];

/// Row count for a level: grows by one per level from the base, never
/// shrinking below it and never exceeding the cap
pub fn rows_for_level(level: u32) -> u32 {
    (BASE_BRICK_ROWS + level - 1).clamp(BASE_BRICK_ROWS, MAX_BRICK_ROWS)
}

/// Build a centered grid of bricks
///
/// Brick width is computed in float so the columns plus margins fill the
/// usable width exactly - no rounding gap accumulates at the right edge.
pub fn build_level(rows: u32) -> Vec<Brick> {
    let cols = BRICK_COLS;
    let total_w = PLAY_WIDTH - FIELD_MARGIN_X * 2.0;
    let brick_w = (total_w - (cols - 1) as f32 * BRICK_MARGIN) / cols as f32;

    let mut bricks = Vec::with_capacity((rows * cols) as usize);
    let mut y = BRICK_TOP;
    for row in 0..rows {
        let color = PALETTE[row as usize % PALETTE.len()];
        let mut x = FIELD_MARGIN_X;
        for _ in 0..cols {
            bricks.push(Brick::new(Rect::new(x, y, brick_w, BRICK_HEIGHT), color));
            x += brick_w + BRICK_MARGIN;
        }
        y += BRICK_HEIGHT + BRICK_MARGIN;
    }

    log::info!("built level grid: {} rows x {} cols", rows, cols);
    bricks
}
