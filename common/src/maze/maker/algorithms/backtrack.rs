use rand::Rng;

use super::super::{Cell, MazeMaker};
use crate::error::MazeError;

pub trait Backtrack {
    fn backtrack(&mut self) -> Result<(), MazeError>;
}

impl<R: Rng + ?Sized> Backtrack for MazeMaker<'_, R> {
    /// Iterative depth-first carving from (1, 1). Every room is opened before it is
    /// pushed, so each iteration either opens a new room or pops one off the stack.
    fn backtrack(&mut self) -> Result<(), MazeError> {
        let initial_cell = Cell::new(1, 1);
        self.visit_cell(initial_cell)?;

        let mut stack = vec![initial_cell];

        while let Some(&curr) = stack.last() {
            match self.pick_unvisited_neighbor(curr) {
                Some(next) => {
                    self.remove_wall_between(curr, next)?;
                    self.visit_cell(next)?;
                    stack.push(next);
                }
                None => {
                    stack.pop();
                }
            }
        }

        Ok(())
    }
}
