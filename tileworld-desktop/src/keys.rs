use macroquad::prelude::*;
use tileworld_core::input::NUM_BUTTONS;

/// Keys for each button, in `Button::ALL` order: arrows for the D-pad,
/// Z/C/N for A and X/V/M for B.
const BINDINGS: [&[KeyCode]; NUM_BUTTONS] = [
    &[KeyCode::Left],
    &[KeyCode::Right],
    &[KeyCode::Up],
    &[KeyCode::Down],
    &[KeyCode::Z, KeyCode::C, KeyCode::N],
    &[KeyCode::X, KeyCode::V, KeyCode::M],
];

/// Which handheld buttons are held this frame.
pub fn held_buttons() -> [bool; NUM_BUTTONS] {
    BINDINGS.map(|keys| keys.iter().any(|&k| is_key_down(k)))
}
