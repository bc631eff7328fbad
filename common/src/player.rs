use strum::{Display, EnumIter};

use crate::maze::Maze;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display, EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Unit step as `(dx, dy)`, with `y` growing downwards.
    pub fn delta(self) -> (i64, i64) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    #[cfg(test)]
    pub(crate) fn opposite(self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }
}

/// The player's cell. Only ever moves onto open cells.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Player {
    pub x: usize,
    pub y: usize,
}

impl Player {
    pub fn at_start(maze: &Maze) -> Self {
        let (x, y) = maze.start();
        Self { x, y }
    }

    pub fn position(&self) -> (usize, usize) {
        (self.x, self.y)
    }

    /// Steps one cell in `direction` unless a wall or the edge of the maze is in the way.
    pub fn try_move(&mut self, direction: Direction, maze: &Maze) -> bool {
        let (dx, dy) = direction.delta();
        let nx = self.x as i64 + dx;
        let ny = self.y as i64 + dy;

        if maze.is_open(nx, ny) {
            self.x = nx as usize;
            self.y = ny as usize;
            true
        } else {
            false
        }
    }
}
