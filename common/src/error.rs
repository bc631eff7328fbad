use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MazeError {
    /// Grids need odd, non-zero sides so that rooms sit on odd coordinates with walls between.
    #[error("invalid maze dimensions {rows}x{cols}: rows and columns must be odd and at least {min}")]
    InvalidDimensions { rows: usize, cols: usize, min: usize },
    #[error("cell ({x}, {y}) is outside the grid")]
    OutOfBounds { x: usize, y: usize },
    #[error("a level set needs at least one level")]
    InvalidLevelCount,
}
