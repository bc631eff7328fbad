use std::fmt;

use crate::error::MazeError;

const WALL_SYMBOL: &str = "██";
const SPACE_SYMBOL: &str = "  ";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum CellState {
    #[default]
    Wall,
    Open,
}

/// A fixed-size, row-major grid of cells. `x` is the column and `y` the row.
#[derive(Clone, PartialEq, Eq)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<CellState>,
}

impl Grid {
    /// Allocates a `rows` by `cols` grid with every cell a wall.
    pub fn create(rows: usize, cols: usize) -> Result<Self, MazeError> {
        check_dimensions(rows, cols, 1)?;

        Ok(Self {
            rows,
            cols,
            cells: vec![CellState::Wall; rows * cols],
        })
    }

    fn index(&self, x: usize, y: usize) -> Result<usize, MazeError> {
        if x < self.cols && y < self.rows {
            Ok(y * self.cols + x)
        } else {
            Err(MazeError::OutOfBounds { x, y })
        }
    }

    pub fn get(&self, x: usize, y: usize) -> Result<CellState, MazeError> {
        self.index(x, y).map(|i| self.cells[i])
    }

    pub fn set(&mut self, x: usize, y: usize, state: CellState) -> Result<(), MazeError> {
        let i = self.index(x, y)?;
        self.cells[i] = state;
        Ok(())
    }

    /// Passability query for movement checks. Anything off the grid counts as a wall.
    pub fn is_open(&self, x: i64, y: i64) -> bool {
        let (Ok(x), Ok(y)) = (usize::try_from(x), usize::try_from(y)) else {
            return false;
        };

        matches!(self.get(x, y), Ok(CellState::Open))
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    pub fn iter_rows(&self) -> impl Iterator<Item = &[CellState]> {
        self.cells.chunks(self.cols)
    }

    /// Every cell with its `(x, y)` coordinates, in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = ((usize, usize), CellState)> + '_ {
        let cols = self.cols;
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, &cell)| ((i % cols, i / cols), cell))
    }

    pub fn open_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.cells()
            .filter(|&(_, cell)| cell == CellState::Open)
            .map(|(position, _)| position)
    }

    pub fn open_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c == CellState::Open).count()
    }

    pub fn log(&self) -> String {
        self.iter_rows()
            .map(|row| {
                row.iter()
                    .map(|&cell| match cell {
                        CellState::Open => SPACE_SYMBOL,
                        CellState::Wall => WALL_SYMBOL,
                    })
                    .collect::<String>()
            })
            .collect::<Vec<String>>()
            .join("\n")
    }
}

pub(crate) fn check_dimensions(rows: usize, cols: usize, min: usize) -> Result<(), MazeError> {
    let is_valid = |n: usize| n >= min && n % 2 == 1;

    if is_valid(rows) && is_valid(cols) {
        Ok(())
    } else {
        Err(MazeError::InvalidDimensions { rows, cols, min })
    }
}

impl fmt::Debug for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Grid {}x{}", self.rows, self.cols)?;
        fmt::Display::fmt(self, f)
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.log())
    }
}
