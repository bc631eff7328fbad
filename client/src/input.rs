use macroquad::prelude::*;

use common::{game::FrameInput, player::Direction};

// Checked in order, so holding two directions moves along the first one listed.
const KEY_BINDINGS: [([KeyCode; 2], Direction); 4] = [
    ([KeyCode::Up, KeyCode::W], Direction::Up),
    ([KeyCode::Down, KeyCode::S], Direction::Down),
    ([KeyCode::Left, KeyCode::A], Direction::Left),
    ([KeyCode::Right, KeyCode::D], Direction::Right),
];

pub fn frame_input_from_keys() -> FrameInput {
    FrameInput {
        direction: held_direction(),
        confirm: is_key_pressed(KeyCode::Space),
    }
}

fn held_direction() -> Option<Direction> {
    let held = KEY_BINDINGS.map(|(keys, _)| keys.iter().any(|&key| is_key_down(key)));
    direction_from_held(held)
}

/// `held` is indexed like `KEY_BINDINGS`: Up, Down, Left, Right.
fn direction_from_held(held: [bool; 4]) -> Option<Direction> {
    KEY_BINDINGS
        .iter()
        .zip(held)
        .find(|&(_, down)| down)
        .map(|(&(_, direction), _)| direction)
}
