pub mod config;
pub mod error;
pub mod game;
pub mod grid;
pub mod level;
pub mod maze;
pub mod player;
pub mod time;

pub use error::MazeError;

#[cfg(test)]
mod test_helpers;
