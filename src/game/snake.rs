use std::collections::VecDeque;

use super::{
    action::Direction,
    grid::{Cell, Grid},
};

/// The snake in the game
///
/// The body is stored head first. It only changes length inside
/// [`Snake::update`], and only by one cell after [`Snake::set_grow`].
#[derive(Debug, Clone, PartialEq)]
pub struct Snake {
    body: VecDeque<Cell>,
    heading: Direction,
    grow: bool,
    grid: Grid,
}

impl Snake {
    /// Create a one-cell snake at `start` moving towards `heading`
    pub fn new(grid: Grid, start: Cell, heading: Direction) -> Self {
        Self {
            body: VecDeque::from([start]),
            heading,
            grow: false,
            grid,
        }
    }

    /// Build a snake from explicit cells, head first
    pub fn from_cells(
        grid: Grid,
        cells: impl IntoIterator<Item = Cell>,
        heading: Direction,
    ) -> Self {
        let body: VecDeque<Cell> = cells.into_iter().collect();
        assert!(!body.is_empty(), "snake needs at least one cell");

        Self {
            body,
            heading,
            grow: false,
            grid,
        }
    }

    /// Change heading, ignoring a direct reversal
    pub fn set_direction(&mut self, direction: Direction) {
        if !self.heading.is_opposite(direction) {
            self.heading = direction;
        }
    }

    /// Keep the tail on the next update
    pub fn set_grow(&mut self) {
        self.grow = true;
    }

    /// Advance one cell, wrapping at the board edges
    pub fn update(&mut self) {
        let new_head = self.grid.wrap(self.head_position().stepped(self.heading));
        self.body.push_front(new_head);

        if self.grow {
            self.grow = false;
        } else {
            self.body.pop_back();
        }
    }

    pub fn head_position(&self) -> Cell {
        self.body[0]
    }

    pub fn heading(&self) -> Direction {
        self.heading
    }

    pub fn is_growing(&self) -> bool {
        self.grow
    }

    pub fn size(&self) -> usize {
        self.body.len()
    }

    /// Snapshot of the body, head first
    pub fn occupied_cells(&self) -> Vec<Cell> {
        self.body.iter().copied().collect()
    }

    /// Linear scan of the body from `start_offset` to the tail
    pub fn body_contains(&self, cell: Cell, start_offset: usize) -> bool {
        self.body.iter().skip(start_offset).any(|c| *c == cell)
    }

    /// Whether the head overlaps any other segment
    pub fn self_collides(&self) -> bool {
        self.body_contains(self.head_position(), 1)
    }
}
