pub mod algorithms;

use rand::{Rng, seq::SliceRandom};
use strum::IntoEnumIterator;

use crate::{
    error::MazeError,
    grid::{CellState, Grid},
    player::Direction,
};

/// A room on the odd-coordinate lattice.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Cell {
    pub x: usize,
    pub y: usize,
}

impl Cell {
    pub fn new(x: usize, y: usize) -> Cell {
        Cell { x, y }
    }
}

pub struct MazeMaker<'a, R: Rng + ?Sized> {
    pub grid: Grid,
    rng: &'a mut R,
    width: usize,
    height: usize,
}

impl<'a, R: Rng + ?Sized> MazeMaker<'a, R> {
    pub fn new(rows: usize, cols: usize, rng: &'a mut R) -> Result<Self, MazeError> {
        let grid = Grid::create(rows, cols)?;

        Ok(MazeMaker {
            grid,
            rng,
            width: cols,
            height: rows,
        })
    }

    /// The lattice neighbour two steps away, if it lies strictly inside the border.
    fn neighbor(&self, cell: Cell, direction: Direction) -> Option<Cell> {
        let (dx, dy) = direction.delta();
        let nx = cell.x as i64 + 2 * dx;
        let ny = cell.y as i64 + 2 * dy;

        let in_bounds =
            nx > 0 && nx < self.width as i64 - 1 && ny > 0 && ny < self.height as i64 - 1;

        in_bounds.then(|| Cell::new(nx as usize, ny as usize))
    }

    fn pick_unvisited_neighbor(&mut self, cell: Cell) -> Option<Cell> {
        let mut directions: Vec<Direction> = Direction::iter().collect();
        directions.shuffle(&mut *self.rng);

        directions
            .into_iter()
            .filter_map(|direction| self.neighbor(cell, direction))
            .find(|&neighbor| !self.is_visited(neighbor))
    }

    fn visit_cell(&mut self, cell: Cell) -> Result<(), MazeError> {
        self.grid.set(cell.x, cell.y, CellState::Open)
    }

    fn is_visited(&self, cell: Cell) -> bool {
        self.grid.get(cell.x, cell.y) == Ok(CellState::Open)
    }

    fn remove_wall_between(&mut self, cell_1: Cell, cell_2: Cell) -> Result<(), MazeError> {
        let x = (cell_1.x + cell_2.x) / 2;
        let y = (cell_1.y + cell_2.y) / 2;
        self.grid.set(x, y, CellState::Open)
    }
}
