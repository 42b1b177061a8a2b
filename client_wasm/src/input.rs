//! Keyboard input handling

use game_core::{InputEvent, Key};

/// Map a `KeyboardEvent.code` to a logical key
pub fn map_code(code: &str) -> Option<Key> {
    match code {
        "Space" | "ArrowUp" => Some(Key::Jump),
        "ArrowDown" => Some(Key::Duck),
        _ => None,
    }
}

/// Handle key down event
pub fn handle_key_down(code: &str) -> Option<InputEvent> {
    map_code(code).map(InputEvent::Pressed)
}

/// Handle key up event
pub fn handle_key_up(code: &str) -> Option<InputEvent> {
    map_code(code).map(InputEvent::Released)
}
