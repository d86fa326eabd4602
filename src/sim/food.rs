//! Food placement

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::grid::{Cell, Grid};
use crate::consts::{FOOD_HIDE_X, FOOD_SPAWN_OFFSET, MAX_SPAWN_ATTEMPTS};
use crate::error::SimError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Food {
    /// Position on the grid (in cells, not pixels)
    location: Cell,
}

impl Default for Food {
    fn default() -> Self {
        Self::hidden()
    }
}

impl Food {
    /// Food parked off-grid until the first game starts
    pub fn hidden() -> Self {
        Self {
            location: Cell::new(FOOD_HIDE_X, 0),
        }
    }

    pub fn at(location: Cell) -> Self {
        Self { location }
    }

    #[inline]
    pub fn location(&self) -> Cell {
        self.location
    }

    pub fn is_hidden(&self) -> bool {
        self.location.x == FOOD_HIDE_X
    }

    /// Move to a random free cell and return it.
    ///
    /// Samples x in [1, W-1] and y in [1, H-1]. After `MAX_SPAWN_ATTEMPTS`
    /// misses the region is scanned linearly from a random starting offset.
    /// Fails only when every sampleable cell is occupied; the location is
    /// left untouched in that case.
    pub fn spawn<R: Rng>(
        &mut self,
        grid: &Grid,
        occupied: impl Fn(Cell) -> bool,
        rng: &mut R,
    ) -> Result<Cell, SimError> {
        self.spawn_with_attempts(grid, occupied, rng, MAX_SPAWN_ATTEMPTS)
    }

    /// [`Food::spawn`] with an explicit random-sample budget before the scan
    pub fn spawn_with_attempts<R: Rng>(
        &mut self,
        grid: &Grid,
        occupied: impl Fn(Cell) -> bool,
        rng: &mut R,
        max_attempts: u32,
    ) -> Result<Cell, SimError> {
        let xs = FOOD_SPAWN_OFFSET..grid.width();
        let ys = FOOD_SPAWN_OFFSET..grid.height();

        for _ in 0..max_attempts {
            let candidate = Cell::new(rng.random_range(xs.clone()), rng.random_range(ys.clone()));
            if !occupied(candidate) {
                self.location = candidate;
                return Ok(candidate);
            }
        }

        let region: Vec<Cell> = ys
            .flat_map(|y| xs.clone().map(move |x| Cell::new(x, y)))
            .collect();
        let start = rng.random_range(0..region.len());
        let free = region[start..]
            .iter()
            .chain(&region[..start])
            .copied()
            .find(|&c| !occupied(c));

        match free {
            Some(cell) => {
                log::debug!(
                    "Food placed by linear scan after {} random misses",
                    max_attempts
                );
                self.location = cell;
                Ok(cell)
            }
            None => Err(SimError::NoFreeCell {
                width: grid.width(),
                height: grid.height(),
            }),
        }
    }
}
