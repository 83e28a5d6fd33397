//! Render-target boundary
//!
//! The core never draws. Each frame it hands `(sprite, x, y)` triples to a
//! [`RenderTarget`], which resolves the sprite id and paints it. [`TextGrid`]
//! is a target that snaps actors to board cells for terminal output.

use std::fmt;

use glam::Vec2;
use serde::Serialize;

use crate::consts::*;
use crate::sim::Actor;

/// Anything that can paint a sprite at a pixel position
pub trait RenderTarget {
    fn draw_sprite(&mut self, sprite: &str, x: f32, y: f32);
}

/// One entry of a frame's draw list
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SpriteInstance {
    pub sprite: &'static str,
    pub pos: Vec2,
}

impl SpriteInstance {
    pub fn of(actor: &dyn Actor) -> Self {
        Self {
            sprite: actor.sprite(),
            pos: actor.position(),
        }
    }
}

const GOAL_CELL: char = '~';
const LANE_CELL: char = '.';

/// Character board, one cell per column and lane
#[derive(Debug, Clone)]
pub struct TextGrid {
    cells: Vec<Vec<char>>,
}

impl Default for TextGrid {
    fn default() -> Self {
        Self::new()
    }
}

impl TextGrid {
    pub fn new() -> Self {
        let mut grid = Self { cells: Vec::new() };
        grid.clear();
        grid
    }

    /// Repaint the background: water on the goal row, open lanes below
    pub fn clear(&mut self) {
        let rows = PLAYER_START_ROW as usize + 1;
        let columns = COLUMN_COUNT as usize;
        self.cells = (0..rows)
            .map(|row| {
                let cell = if row == 0 { GOAL_CELL } else { LANE_CELL };
                vec![cell; columns]
            })
            .collect();
    }

    pub fn cell(&self, column: usize, row: usize) -> Option<char> {
        self.cells.get(row).and_then(|r| r.get(column)).copied()
    }

    fn glyph(sprite: &str) -> char {
        match sprite {
            OBSTACLE_SPRITE => 'B',
            PLAYER_SPRITE => 'P',
            _ => '?',
        }
    }
}

impl RenderTarget for TextGrid {
    /// Off-board positions (a wrapping obstacle past the right edge) are skipped
    fn draw_sprite(&mut self, sprite: &str, x: f32, y: f32) {
        let column = (x / COLUMN_WIDTH).round();
        let row = (y / LANE_HEIGHT).round();
        if column < 0.0 || row < 0.0 {
            return;
        }
        if let Some(cell) = self
            .cells
            .get_mut(row as usize)
            .and_then(|r| r.get_mut(column as usize))
        {
            *cell = Self::glyph(sprite);
        }
    }
}

impl fmt::Display for TextGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.cells {
            let line: String = row.iter().collect();
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_background() {
        let grid = TextGrid::new();
        assert_eq!(grid.cell(0, 0), Some(GOAL_CELL));
        assert_eq!(grid.cell(4, 5), Some(LANE_CELL));
        assert_eq!(grid.cell(5, 0), None);
        assert_eq!(grid.cell(0, 6), None);
    }

    #[test]
    fn test_draws_snap_to_cells() {
        let mut grid = TextGrid::new();
        grid.draw_sprite(OBSTACLE_SPRITE, 140.0, 166.0);
        grid.draw_sprite(PLAYER_SPRITE, 303.0, 415.0);
        assert_eq!(grid.cell(1, 2), Some('B'));
        assert_eq!(grid.cell(3, 5), Some('P'));
    }

    #[test]
    fn test_off_board_is_skipped() {
        let mut grid = TextGrid::new();
        grid.draw_sprite(OBSTACLE_SPRITE, 560.0, 83.0);
        grid.draw_sprite(OBSTACLE_SPRITE, -120.0, 83.0);
        assert_eq!(grid.to_string(), TextGrid::new().to_string());
    }

    #[test]
    fn test_display() {
        let mut grid = TextGrid::new();
        grid.draw_sprite(PLAYER_SPRITE, 0.0, 0.0);
        let text = grid.to_string();
        assert_eq!(text.lines().next(), Some("P~~~~"));
        assert_eq!(text.lines().count(), 6);
    }
}
