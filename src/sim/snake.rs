//! The snake: a head-first chain of cells plus a heading
//!
//! The snake only knows how to move, grow and answer collision queries.
//! It has no notion of being dead; the session owns that transition.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use super::grid::{Cell, Grid};
use crate::error::SimError;

/// Direction of travel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Heading {
    Up,
    Down,
    Left,
    #[default]
    Right,
}

impl Heading {
    pub const ALL: [Heading; 4] = [Heading::Up, Heading::Right, Heading::Down, Heading::Left];

    /// Cell delta for one step (y grows downward)
    pub fn delta(self) -> (i32, i32) {
        match self {
            Heading::Up => (0, -1),
            Heading::Down => (0, 1),
            Heading::Left => (-1, 0),
            Heading::Right => (1, 0),
        }
    }

    pub fn opposite(self) -> Self {
        match self {
            Heading::Up => Heading::Down,
            Heading::Down => Heading::Up,
            Heading::Left => Heading::Right,
            Heading::Right => Heading::Left,
        }
    }

    #[inline]
    pub fn is_opposite(self, other: Heading) -> bool {
        self.opposite() == other
    }

    pub fn rotate_clockwise(self) -> Self {
        match self {
            Heading::Up => Heading::Right,
            Heading::Right => Heading::Down,
            Heading::Down => Heading::Left,
            Heading::Left => Heading::Up,
        }
    }

    pub fn rotate_counter_clockwise(self) -> Self {
        self.rotate_clockwise().opposite()
    }
}

/// Why the snake died
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DeathCause {
    /// Head left the grid
    Wall,
    /// Head ran into the body
    SelfCollision,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snake {
    /// Occupied cells, head at the front
    chain: VecDeque<Cell>,
    heading: Heading,
    /// Heading of the last move; reversal is judged against this
    moved_heading: Heading,
    /// Moves left during which the tail is kept
    pending_growth: u32,
}

impl Snake {
    /// A length-1 snake at the grid centre heading right
    pub fn new(grid: &Grid) -> Self {
        let mut snake = Self {
            chain: VecDeque::new(),
            heading: Heading::default(),
            moved_heading: Heading::default(),
            pending_growth: 0,
        };
        snake.reset(grid);
        snake
    }

    /// Build a snake from explicit cells (head first)
    pub fn from_cells(
        cells: impl IntoIterator<Item = Cell>,
        heading: Heading,
    ) -> Result<Self, SimError> {
        let chain: VecDeque<Cell> = cells.into_iter().collect();
        if chain.is_empty() {
            return Err(SimError::EmptyChain);
        }
        Ok(Self {
            chain,
            heading,
            moved_heading: heading,
            pending_growth: 0,
        })
    }

    /// Reinitialise in place for a new session
    pub fn reset(&mut self, grid: &Grid) {
        self.chain.clear();
        self.chain.push_back(grid.center());
        self.heading = Heading::default();
        self.moved_heading = self.heading;
        self.pending_growth = 0;
    }

    /// Request a new heading for the next move.
    ///
    /// Reversing onto the body is ignored while the snake is longer than one
    /// cell. Several requests may land between two moves, so the check is
    /// against the heading of the last move, not the last request.
    /// Returns whether the request was accepted.
    pub fn set_heading(&mut self, requested: Heading) -> bool {
        if self.reverses(requested) {
            return false;
        }
        self.heading = requested;
        true
    }

    /// True iff `requested` would send the head back onto the neck
    #[inline]
    pub fn reverses(&self, requested: Heading) -> bool {
        self.chain.len() > 1 && self.moved_heading.is_opposite(requested)
    }

    /// Advance one cell in the current heading
    pub fn advance(&mut self) {
        let new_head = self.head().step(self.heading);
        self.chain.push_front(new_head);
        self.moved_heading = self.heading;

        if self.pending_growth > 0 {
            self.pending_growth -= 1;
        } else {
            self.chain.pop_back();
        }
    }

    /// Keep the tail on the next move
    pub fn grow(&mut self) {
        self.pending_growth += 1;
    }

    /// True iff the head sits on `food`
    #[inline]
    pub fn check_dinner(&self, food: Cell) -> bool {
        self.head() == food
    }

    pub fn death_cause(&self, grid: &Grid) -> Option<DeathCause> {
        let head = self.head();
        if !grid.contains(head) {
            return Some(DeathCause::Wall);
        }
        if self.chain.iter().skip(1).any(|&c| c == head) {
            return Some(DeathCause::SelfCollision);
        }
        None
    }

    /// True iff the head is off the grid or on the body
    #[inline]
    pub fn detect_death(&self, grid: &Grid) -> bool {
        self.death_cause(grid).is_some()
    }

    #[inline]
    pub fn head(&self) -> Cell {
        // Chain is never empty: every constructor and reset seeds a head and
        // advance() pushes before it pops.
        self.chain[0]
    }

    pub fn chain(&self) -> &VecDeque<Cell> {
        &self.chain
    }

    #[inline]
    pub fn heading(&self) -> Heading {
        self.heading
    }

    pub fn moved_heading(&self) -> Heading {
        self.moved_heading
    }

    pub fn len(&self) -> usize {
        self.chain.len()
    }

    /// Never true for a constructed snake
    pub fn is_empty(&self) -> bool {
        self.chain.is_empty()
    }

    pub fn pending_growth(&self) -> u32 {
        self.pending_growth
    }

    /// True iff any segment occupies `cell`
    pub fn occupies(&self, cell: Cell) -> bool {
        self.chain.contains(&cell)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid10() -> Grid {
        Grid::new(10, 10).unwrap()
    }

    #[test]
    fn test_reset_state() {
        let grid = grid10();
        let snake = Snake::new(&grid);
        assert_eq!(snake.len(), 1);
        assert_eq!(snake.head(), Cell::new(5, 5));
        assert_eq!(snake.heading(), Heading::Right);
        assert_eq!(snake.pending_growth(), 0);
    }

    #[test]
    fn test_move_length_one() {
        // Scenario: length 1 at (5,5) heading right
        let grid = grid10();
        let mut snake = Snake::new(&grid);
        snake.advance();
        assert_eq!(snake.head(), Cell::new(6, 5));
        assert_eq!(snake.len(), 1);
        assert!(!snake.detect_death(&grid));
    }

    #[test]
    fn test_dinner_then_grow() {
        let mut snake =
            Snake::from_cells([Cell::new(6, 5), Cell::new(5, 5)], Heading::Right).unwrap();
        assert!(snake.check_dinner(Cell::new(6, 5)));
        assert!(!snake.check_dinner(Cell::new(5, 5)));

        snake.grow();
        snake.advance();
        let chain: Vec<_> = snake.chain().iter().copied().collect();
        assert_eq!(chain, vec![Cell::new(7, 5), Cell::new(6, 5), Cell::new(5, 5)]);
        assert_eq!(snake.pending_growth(), 0);

        // Growth is one-shot
        snake.advance();
        assert_eq!(snake.len(), 3);
    }

    #[test]
    fn test_wall_death() {
        let grid = grid10();
        let mut snake =
            Snake::from_cells([Cell::new(0, 5), Cell::new(1, 5)], Heading::Left).unwrap();
        snake.advance();
        assert_eq!(snake.head(), Cell::new(-1, 5));
        assert_eq!(snake.death_cause(&grid), Some(DeathCause::Wall));
    }

    #[test]
    fn test_self_collision() {
        let grid = grid10();
        let mut snake = Snake::from_cells(
            [Cell::new(5, 5), Cell::new(5, 6), Cell::new(6, 6), Cell::new(6, 5)],
            Heading::Down,
        )
        .unwrap();
        assert!(!snake.detect_death(&grid));
        snake.advance();
        assert_eq!(snake.head(), Cell::new(5, 6));
        assert_eq!(snake.death_cause(&grid), Some(DeathCause::SelfCollision));
    }

    #[test]
    fn test_chasing_tail_is_safe() {
        // A 2x2 loop: the head moves into the cell the tail vacates
        let grid = grid10();
        let mut snake = Snake::from_cells(
            [Cell::new(5, 5), Cell::new(6, 5), Cell::new(6, 6), Cell::new(5, 6)],
            Heading::Down,
        )
        .unwrap();
        snake.advance();
        assert_eq!(snake.head(), Cell::new(5, 6));
        assert!(!snake.detect_death(&grid));
    }

    #[test]
    fn test_reverse_rejected_when_long() {
        let mut snake =
            Snake::from_cells([Cell::new(5, 5), Cell::new(5, 6)], Heading::Up).unwrap();
        assert!(snake.set_heading(Heading::Up));
        assert!(!snake.set_heading(Heading::Down));
        assert_eq!(snake.heading(), Heading::Up);
        assert!(snake.set_heading(Heading::Left));
        assert_eq!(snake.heading(), Heading::Left);
    }

    #[test]
    fn test_two_turns_between_moves_cannot_reverse() {
        let grid = grid10();
        let mut snake = Snake::from_cells(
            [Cell::new(5, 5), Cell::new(4, 5), Cell::new(3, 5)],
            Heading::Right,
        )
        .unwrap();
        assert!(snake.set_heading(Heading::Up));
        // Left is not opposite Up, but it is opposite the last move
        assert!(!snake.set_heading(Heading::Left));
        assert_eq!(snake.heading(), Heading::Up);

        snake.advance();
        assert_eq!(snake.head(), Cell::new(5, 4));
        assert_eq!(snake.moved_heading(), Heading::Up);
        assert!(!snake.detect_death(&grid));

        // After the move Left is a legal turn
        assert!(snake.set_heading(Heading::Left));
    }

    #[test]
    fn test_reverse_allowed_when_length_one() {
        let mut snake = Snake::new(&grid10());
        assert!(snake.set_heading(Heading::Left));
        assert_eq!(snake.heading(), Heading::Left);
    }

    #[test]
    fn test_empty_chain_rejected() {
        assert_eq!(
            Snake::from_cells(Vec::new(), Heading::Up),
            Err(SimError::EmptyChain)
        );
    }

    #[test]
    fn test_reset_after_growth() {
        let grid = grid10();
        let mut snake =
            Snake::from_cells([Cell::new(1, 1), Cell::new(1, 2)], Heading::Up).unwrap();
        snake.grow();
        snake.reset(&grid);
        assert_eq!(snake.len(), 1);
        assert_eq!(snake.pending_growth(), 0);
        assert_eq!(snake.heading(), Heading::Right);
    }

    #[test]
    fn test_heading_rotation() {
        for h in Heading::ALL {
            assert_eq!(h.rotate_clockwise().rotate_counter_clockwise(), h);
            assert!(h.is_opposite(h.opposite()));
            assert!(!h.is_opposite(h.rotate_clockwise()));
        }
        assert_eq!(Heading::Up.rotate_counter_clockwise(), Heading::Left);
    }
}
