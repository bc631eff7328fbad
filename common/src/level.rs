use log::info;
use rand::Rng;

use crate::{error::MazeError, maze::Maze};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LevelResult {
    Advanced { index: usize },
    Complete,
}

/// A fixed, ordered run of independently generated mazes and the one being played.
#[derive(Debug, Clone)]
pub struct LevelSet {
    mazes: Vec<Maze>,
    active_index: usize,
    complete: bool,
}

impl LevelSet {
    pub fn new(count: usize, rows: usize, cols: usize) -> Result<Self, MazeError> {
        Self::generate(count, rows, cols, &mut rand::rng())
    }

    pub fn generate<R: Rng + ?Sized>(
        count: usize,
        rows: usize,
        cols: usize,
        rng: &mut R,
    ) -> Result<Self, MazeError> {
        let mazes = generate_mazes(count, rows, cols, rng)?;
        info!("generated {} levels of {}x{}", count, rows, cols);

        Ok(Self {
            mazes,
            active_index: 0,
            complete: false,
        })
    }

    pub fn current(&self) -> &Maze {
        &self.mazes[self.active_index]
    }

    /// Moves on to the next maze. Past the last one the set is flagged complete and
    /// the index stays on the final level.
    pub fn advance(&mut self) -> LevelResult {
        if self.complete || self.is_last_level() {
            self.complete = true;
            return LevelResult::Complete;
        }

        self.active_index += 1;
        LevelResult::Advanced {
            index: self.active_index,
        }
    }

    /// Replaces every maze with a freshly generated one and starts again from level 0.
    /// On error the current set is kept as it was.
    pub fn restart_all(&mut self, count: usize, rows: usize, cols: usize) -> Result<(), MazeError> {
        self.restart_all_with(count, rows, cols, &mut rand::rng())
    }

    pub fn restart_all_with<R: Rng + ?Sized>(
        &mut self,
        count: usize,
        rows: usize,
        cols: usize,
        rng: &mut R,
    ) -> Result<(), MazeError> {
        self.mazes = generate_mazes(count, rows, cols, rng)?;
        self.active_index = 0;
        self.complete = false;
        info!("regenerated {} levels of {}x{}", count, rows, cols);

        Ok(())
    }

    pub fn is_complete(&self) -> bool {
        self.complete
    }

    pub fn level_index(&self) -> usize {
        self.active_index
    }

    pub fn level_count(&self) -> usize {
        self.mazes.len()
    }

    pub fn is_last_level(&self) -> bool {
        self.active_index + 1 == self.mazes.len()
    }

    pub fn mazes(&self) -> &[Maze] {
        &self.mazes
    }
}

fn generate_mazes<R: Rng + ?Sized>(
    count: usize,
    rows: usize,
    cols: usize,
    rng: &mut R,
) -> Result<Vec<Maze>, MazeError> {
    if count == 0 {
        return Err(MazeError::InvalidLevelCount);
    }

    (0..count)
        .map(|_| Maze::generate(rows, cols, &mut *rng))
        .collect()
}

#[cfg(test)]
mod tests {
    use rand::{SeedableRng, rngs::StdRng};

    use super::*;
    use crate::test_helpers::assert_is_spanning_tree;

    #[test]
    fn test_advancing_past_last_level_completes_the_set() {
        let mut levels = LevelSet::new(3, 11, 11).unwrap();
        assert_eq!(levels.level_count(), 3);
        assert_eq!(levels.level_index(), 0);

        assert_eq!(levels.advance(), LevelResult::Advanced { index: 1 });
        assert_eq!(levels.advance(), LevelResult::Advanced { index: 2 });
        assert!(!levels.is_complete());

        let index_before = levels.level_index();
        assert_eq!(levels.advance(), LevelResult::Complete);
        assert!(levels.is_complete());
        assert_eq!(levels.level_index(), index_before);

        // Further calls keep reporting completion.
        assert_eq!(levels.advance(), LevelResult::Complete);
        assert_eq!(levels.level_index(), index_before);
    }

    #[test]
    fn test_restart_all_regenerates_every_maze() {
        let mut levels = LevelSet::new(3, 15, 15).unwrap();
        let original = levels.mazes().to_vec();
        while levels.advance() != LevelResult::Complete {}

        levels.restart_all(3, 15, 15).unwrap();

        assert!(!levels.is_complete());
        assert_eq!(levels.level_index(), 0);
        assert_eq!(levels.level_count(), 3);
        assert_ne!(levels.mazes(), original.as_slice());
    }

    #[test]
    fn test_current_follows_active_index() {
        let mut levels = LevelSet::generate(2, 9, 9, &mut StdRng::seed_from_u64(11)).unwrap();

        assert_eq!(levels.current(), &levels.mazes()[0]);
        levels.advance();
        assert_eq!(levels.current(), &levels.mazes()[1]);
        assert!(levels.is_last_level());
    }

    #[test]
    fn test_mazes_in_a_set_are_independent() {
        let levels = LevelSet::generate(5, 21, 21, &mut StdRng::seed_from_u64(9)).unwrap();

        for maze in levels.mazes() {
            assert_is_spanning_tree(maze.grid(), maze.start());
        }

        let first = &levels.mazes()[0];
        assert!(levels.mazes()[1..].iter().any(|maze| maze != first));
    }

    #[test]
    fn test_seeded_sets_are_reproducible() {
        let a = LevelSet::generate(3, 13, 13, &mut StdRng::seed_from_u64(1)).unwrap();
        let b = LevelSet::generate(3, 13, 13, &mut StdRng::seed_from_u64(1)).unwrap();

        assert_eq!(a.mazes(), b.mazes());
    }

    #[test]
    fn test_zero_levels_is_rejected() {
        assert_eq!(
            LevelSet::new(0, 11, 11).unwrap_err(),
            MazeError::InvalidLevelCount
        );
    }

    #[test]
    fn test_failed_restart_keeps_current_set() {
        let mut levels = LevelSet::new(2, 7, 7).unwrap();
        levels.advance();
        let before = levels.mazes().to_vec();

        assert!(levels.restart_all(2, 8, 7).is_err());
        assert_eq!(levels.mazes(), before.as_slice());
        assert_eq!(levels.level_index(), 1);
    }
}
