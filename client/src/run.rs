use std::time::Duration;

use log::{error, info};
use macroquad::prelude::*;

use crate::{
    info,
    input,
    world::maze::{GOAL_COLOR, MazeExtension, PLAYER_COLOR, cell_size_for, draw_marker},
};
use common::{MazeError, config::GameConfig, game::GameState};

pub struct ClientRunner {
    pub game: GameState,
}

impl ClientRunner {
    pub fn new(config: GameConfig) -> Result<Self, MazeError> {
        let game = GameState::new(config, frame_clock())?;
        Ok(Self { game })
    }

    pub fn frame(&mut self) -> Result<(), MazeError> {
        let input = input::frame_input_from_keys();
        self.game.update(&input, frame_clock())?;
        self.draw();
        Ok(())
    }

    fn draw(&self) {
        let maze = self.game.maze();
        let cell_size = cell_size_for(maze);

        clear_background(WHITE);
        maze.draw(cell_size);
        draw_marker(maze.goal(), cell_size, GOAL_COLOR);
        draw_marker(self.game.player().position(), cell_size, PLAYER_COLOR);

        info::draw_banner(self.game.level_number(), self.game.level_count());
        info::draw_completion_overlay(self.game.phase());
    }
}

/// Seconds since the window opened, as a monotonic offset for the move gate.
fn frame_clock() -> Duration {
    Duration::from_secs_f64(get_time())
}

pub async fn run(config: GameConfig) {
    info!(
        "starting {} levels of {}x{} with {}ms between moves",
        config.levels,
        config.rows,
        config.cols,
        config.move_delay.as_millis()
    );

    let mut runner = match ClientRunner::new(config) {
        Ok(runner) => runner,
        Err(e) => {
            error!("failed to start game: {}", e);
            return;
        }
    };

    loop {
        if let Err(e) = runner.frame() {
            error!("game stopped: {}", e);
            break;
        }

        next_frame().await;
    }
}
