use macroquad::prelude::*;

use common::game::Phase;

pub const BANNER_FONT_SIZE: f32 = 20.0;
pub const TITLE_FONT_SIZE: f32 = 36.0;
pub const HINT_FONT_SIZE: f32 = 20.0;
pub const TITLE_COLOR: Color = Color::new(0.0, 1.0, 0.0, 1.0);
const BANNER_TOP_OFFSET: f32 = 20.0;
const OVERLAY_WIDTH: f32 = 300.0;
const OVERLAY_HEIGHT: f32 = 100.0;
const OVERLAY_BORDER: f32 = 3.0;

pub fn draw_banner(level_number: usize, level_count: usize) {
    draw_centered_text(
        &format!("Level {level_number}/{level_count} - Use Arrow Keys or WASD to move"),
        BANNER_FONT_SIZE,
        BLACK,
        screen_width() / 2.0,
        BANNER_TOP_OFFSET,
    );
}

/// The box shown once the goal is reached. Nothing is drawn while still playing.
pub fn draw_completion_overlay(phase: Phase) {
    let (title, hint) = match phase {
        Phase::Playing => return,
        Phase::LevelComplete => ("Level Complete!", "Press SPACE for next level"),
        Phase::AllComplete => ("All Levels Complete!", "Press SPACE to restart game"),
    };

    let center_x = screen_width() / 2.0;
    let center_y = screen_height() / 2.0;
    let left = center_x - OVERLAY_WIDTH / 2.0;
    let top = center_y - OVERLAY_HEIGHT / 2.0;

    draw_rectangle(left, top, OVERLAY_WIDTH, OVERLAY_HEIGHT, WHITE);
    draw_rectangle_lines(left, top, OVERLAY_WIDTH, OVERLAY_HEIGHT, OVERLAY_BORDER, BLACK);

    draw_centered_text(title, TITLE_FONT_SIZE, TITLE_COLOR, center_x, center_y - 20.0);
    draw_centered_text(hint, HINT_FONT_SIZE, BLACK, center_x, center_y + 20.0);
}

fn draw_centered_text(text: &str, font_size: f32, color: Color, x: f32, y: f32) {
    let dimensions = measure_text(text, None, font_size as u16, 1.0);
    draw_text(
        text,
        x - dimensions.width / 2.0,
        y + dimensions.offset_y / 2.0,
        font_size,
        color,
    );
}
