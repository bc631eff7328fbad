use std::time::Duration;

use log::{debug, info};
use rand::{Rng, rngs::ThreadRng};

use crate::{
    config::GameConfig,
    error::MazeError,
    level::{LevelResult, LevelSet},
    maze::Maze,
    player::{Direction, Player},
    time::MoveGate,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Playing,
    LevelComplete,
    AllComplete,
}

/// One frame's worth of player input.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameInput {
    pub direction: Option<Direction>,
    pub confirm: bool,
}

/// Everything the game loop mutates between frames: the levels, where the player is,
/// when they last moved, and whether the current level has been won.
pub struct GameState<R: Rng = ThreadRng> {
    config: GameConfig,
    levels: LevelSet,
    player: Player,
    gate: MoveGate,
    phase: Phase,
    rng: R,
}

impl GameState<ThreadRng> {
    pub fn new(config: GameConfig, now: Duration) -> Result<Self, MazeError> {
        Self::with_rng(config, now, rand::rng())
    }
}

impl<R: Rng> GameState<R> {
    pub fn with_rng(config: GameConfig, now: Duration, mut rng: R) -> Result<Self, MazeError> {
        let levels = LevelSet::generate(config.levels, config.rows, config.cols, &mut rng)?;
        let player = Player::at_start(levels.current());
        let gate = MoveGate::new(config.move_delay, now);

        Ok(Self {
            config,
            levels,
            player,
            gate,
            phase: Phase::Playing,
            rng,
        })
    }

    pub fn update(&mut self, input: &FrameInput, now: Duration) -> Result<(), MazeError> {
        match self.phase {
            Phase::Playing => {
                self.step(input.direction, now);
                Ok(())
            }
            Phase::LevelComplete | Phase::AllComplete if input.confirm => self.confirm(now),
            Phase::LevelComplete | Phase::AllComplete => Ok(()),
        }
    }

    fn step(&mut self, direction: Option<Direction>, now: Duration) {
        if let Some(direction) = direction {
            if self.gate.is_open(now) && self.player.try_move(direction, self.levels.current()) {
                self.gate.rearm(now);
                debug!("moved {} to {:?}", direction, self.player.position());
            }
        }

        if self.player.position() != self.levels.current().goal() {
            return;
        }

        if self.levels.is_last_level() {
            self.levels.advance();
            self.phase = Phase::AllComplete;
            info!("all {} levels complete", self.levels.level_count());
        } else {
            self.phase = Phase::LevelComplete;
            info!("level {} complete", self.level_number());
        }
    }

    /// Leaves a completion screen: on to the next level, or a fresh set of mazes once
    /// every level is done.
    pub fn confirm(&mut self, now: Duration) -> Result<(), MazeError> {
        match self.phase {
            Phase::Playing => return Ok(()),
            Phase::LevelComplete => {
                if self.levels.advance() == LevelResult::Complete {
                    self.phase = Phase::AllComplete;
                    return Ok(());
                }
            }
            Phase::AllComplete => {
                let GameConfig {
                    levels, rows, cols, ..
                } = self.config;
                self.levels.restart_all_with(levels, rows, cols, &mut self.rng)?;
            }
        }

        self.load_level(now);
        Ok(())
    }

    fn load_level(&mut self, now: Duration) {
        self.player = Player::at_start(self.levels.current());
        self.gate.rearm(now);
        self.phase = Phase::Playing;
        info!("starting level {}/{}", self.level_number(), self.level_count());
    }

    pub fn maze(&self) -> &Maze {
        self.levels.current()
    }

    pub fn levels(&self) -> &LevelSet {
        &self.levels
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// 1-based, for display.
    pub fn level_number(&self) -> usize {
        self.levels.level_index() + 1
    }

    pub fn level_count(&self) -> usize {
        self.levels.level_count()
    }
}
