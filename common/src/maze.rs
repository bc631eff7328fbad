pub mod maker;

use std::fmt;

use log::{debug, trace};
use rand::Rng;

use crate::{
    error::MazeError,
    grid::{self, CellState, Grid},
};
use maker::{MazeMaker, algorithms::backtrack::Backtrack};

/// Smallest side that still has room for one interior cell inside the border.
pub const MIN_SIDE: usize = 3;

/// A perfect maze: the open cells form a spanning tree over the interior lattice,
/// so there is exactly one path between any two of them.
///
/// Mazes only come out of the generator, so an arbitrary grid cannot be passed off as one:
///
/// ```compile_fail
/// use common::{grid::Grid, maze::Maze};
///
/// let _ = Maze::from_grid(Grid::create(5, 5).unwrap());
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct Maze {
    grid: Grid,
    start: (usize, usize),
    goal: (usize, usize),
}

impl Maze {
    pub fn new(rows: usize, cols: usize) -> Result<Self, MazeError> {
        Self::generate(rows, cols, &mut rand::rng())
    }

    /// Carves a maze using `rng` for every random choice. The same seed gives the same maze.
    pub fn generate<R: Rng + ?Sized>(
        rows: usize,
        cols: usize,
        rng: &mut R,
    ) -> Result<Self, MazeError> {
        grid::check_dimensions(rows, cols, MIN_SIDE)?;

        let mut maker = MazeMaker::new(rows, cols, rng)?;
        maker.backtrack()?;

        let maze = Self::from_grid(maker.grid)?;
        debug!(
            "generated {}x{} maze with {} open cells",
            rows,
            cols,
            maze.grid.open_count()
        );
        trace!("\n{}", maze.log());

        Ok(maze)
    }

    /// Wraps an already carved grid, opening the start and goal cells. Callers must pass
    /// a grid whose open cells already form a tree.
    pub(crate) fn from_grid(mut grid: Grid) -> Result<Self, MazeError> {
        let (rows, cols) = grid.dimensions();
        grid::check_dimensions(rows, cols, MIN_SIDE)?;

        let start = (1, 1);
        let goal = (cols - 2, rows - 2);

        // No-ops for carved grids, since both lie on the lattice.
        grid.set(start.0, start.1, CellState::Open)?;
        grid.set(goal.0, goal.1, CellState::Open)?;

        Ok(Self { grid, start, goal })
    }

    pub fn is_open(&self, x: i64, y: i64) -> bool {
        self.grid.is_open(x, y)
    }

    /// `(rows, cols)`.
    pub fn dimensions(&self) -> (usize, usize) {
        self.grid.dimensions()
    }

    pub fn start(&self) -> (usize, usize) {
        self.start
    }

    pub fn goal(&self) -> (usize, usize) {
        self.goal
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn cells(&self) -> impl Iterator<Item = ((usize, usize), CellState)> + '_ {
        self.grid.cells()
    }

    pub fn log(&self) -> String {
        self.grid.log()
    }
}

impl fmt::Debug for Maze {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

impl fmt::Display for Maze {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.log())
    }
}
