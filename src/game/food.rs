use rand::{seq::SliceRandom, Rng};

use super::grid::{Cell, Grid};

/// The single piece of food on the board
#[derive(Debug, Clone, PartialEq)]
pub struct Food {
    position: Option<Cell>,
    grid: Grid,
}

impl Food {
    /// Empty food slot; call one of the generators to place it
    pub fn new(grid: Grid) -> Self {
        Self {
            position: None,
            grid,
        }
    }

    pub fn at(grid: Grid, cell: Cell) -> Self {
        Self {
            position: Some(cell),
            grid,
        }
    }

    pub fn position(&self) -> Option<Cell> {
        self.position
    }

    /// Pick any cell of the board, occupied or not
    pub fn generate<R: Rng>(&mut self, rng: &mut R) -> Cell {
        let cell = Cell::new(
            rng.gen_range(0..self.grid.width()),
            rng.gen_range(0..self.grid.height()),
        );
        self.position = Some(cell);
        cell
    }

    /// Pick uniformly among the cells for which `occupied` is false.
    /// Leaves the food empty when every cell is taken.
    pub fn generate_excluding<R, F>(&mut self, rng: &mut R, occupied: F) -> Option<Cell>
    where
        R: Rng,
        F: Fn(Cell) -> bool,
    {
        let free: Vec<Cell> = self.grid.cells().filter(|c| !occupied(*c)).collect();
        self.position = free.choose(rng).copied();
        self.position
    }

    /// Nothing left to place food on
    pub fn clear(&mut self) {
        self.position = None;
    }
}
