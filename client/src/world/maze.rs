use macroquad::prelude::*;

pub use common::maze::Maze;
use common::grid::CellState;

pub const WALL_COLOR: Color = Color::new(0.39, 0.39, 0.39, 1.0);
pub const SPACE_COLOR: Color = WHITE;
pub const OUTLINE_COLOR: Color = BLACK;
pub const PLAYER_COLOR: Color = Color::new(0.0, 0.39, 1.0, 1.0);
pub const GOAL_COLOR: Color = Color::new(0.0, 1.0, 0.0, 1.0);

pub trait MazeExtension {
    fn draw(&self, cell_size: f32);
}

impl MazeExtension for Maze {
    fn draw(&self, cell_size: f32) {
        for ((x, y), cell) in self.cells() {
            let corner_x = x as f32 * cell_size;
            let corner_y = y as f32 * cell_size;

            match cell {
                CellState::Wall => {
                    draw_rectangle(corner_x, corner_y, cell_size, cell_size, WALL_COLOR);
                    draw_rectangle_lines(
                        corner_x,
                        corner_y,
                        cell_size,
                        cell_size,
                        1.0,
                        OUTLINE_COLOR,
                    );
                }
                CellState::Open => {
                    draw_rectangle(corner_x, corner_y, cell_size, cell_size, SPACE_COLOR);
                }
            }
        }
    }
}

/// Largest square cell that fits the whole maze on screen.
pub fn cell_size_for(maze: &Maze) -> f32 {
    let (rows, cols) = maze.dimensions();
    (screen_width() / cols as f32).min(screen_height() / rows as f32)
}

/// A filled circle centred in the cell at `(x, y)`.
pub fn draw_marker((x, y): (usize, usize), cell_size: f32, color: Color) {
    let center_x = x as f32 * cell_size + cell_size / 2.0;
    let center_y = y as f32 * cell_size + cell_size / 2.0;
    draw_circle(center_x, center_y, cell_size / 3.0, color);
}
