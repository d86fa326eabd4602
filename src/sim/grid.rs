//! Grid coordinate space
//!
//! Cells are integer (x, y) pairs with (0, 0) at the top-left; y grows
//! downward to match screen space.

use serde::{Deserialize, Serialize};

use super::snake::Heading;
use crate::consts::MIN_GRID_EXTENT;
use crate::error::SimError;

/// One discrete grid position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

impl Cell {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The neighbouring cell one step in `heading`
    #[inline]
    pub fn step(self, heading: Heading) -> Self {
        let (dx, dy) = heading.delta();
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

/// Playable extent in cells
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    width: i32,
    height: i32,
}

impl Grid {
    pub fn new(width: i32, height: i32) -> Result<Self, SimError> {
        if width < MIN_GRID_EXTENT || height < MIN_GRID_EXTENT {
            return Err(SimError::GridTooSmall { width, height });
        }
        Ok(Self { width, height })
    }

    /// Fit a grid `blocks_wide` cells across onto a screen of the given
    /// pixel size. Returns the grid and the block size in pixels.
    pub fn from_screen(
        screen_width: u32,
        screen_height: u32,
        blocks_wide: u32,
    ) -> Result<(Self, u32), SimError> {
        let block_size = screen_width.checked_div(blocks_wide).unwrap_or(0);
        if block_size == 0 {
            return Err(SimError::GridTooSmall {
                width: blocks_wide as i32,
                height: 0,
            });
        }
        let blocks_high = screen_height / block_size;
        let grid = Self::new(blocks_wide as i32, blocks_high as i32)?;
        Ok((grid, block_size))
    }

    #[inline]
    pub fn width(&self) -> i32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> i32 {
        self.height
    }

    /// (width, height) in cells
    #[inline]
    pub fn extent(&self) -> (i32, i32) {
        (self.width, self.height)
    }

    /// True iff `cell` lies on the grid
    #[inline]
    pub fn contains(&self, cell: Cell) -> bool {
        (0..self.width).contains(&cell.x) && (0..self.height).contains(&cell.y)
    }

    /// Deterministic start cell for a new snake
    pub fn center(&self) -> Cell {
        Cell::new(self.width / 2, self.height / 2)
    }
}
