//! Keyboard mapping
//!
//! Translates `KeyboardEvent.key` names into game bindings.

use crate::sim::Direction;

/// What a key does
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyBinding {
    /// Hold a direction while the key is down
    Move(Direction),
    /// Dismiss the game-over overlay
    Acknowledge,
    /// Toggle the demo autopilot
    ToggleAutopilot,
}

/// Binding for a `KeyboardEvent.key` value
pub fn map_key(key: &str) -> Option<KeyBinding> {
    match key {
        "ArrowUp" => Some(KeyBinding::Move(Direction::Up)),
        "ArrowDown" => Some(KeyBinding::Move(Direction::Down)),
        "ArrowLeft" => Some(KeyBinding::Move(Direction::Left)),
        "ArrowRight" => Some(KeyBinding::Move(Direction::Right)),
        "Enter" | " " | "Escape" => Some(KeyBinding::Acknowledge),
        "i" | "I" => Some(KeyBinding::ToggleAutopilot),
        _ => None,
    }
}

/// On-screen tap buttons, by element id
pub const TAP_BUTTONS: [(&str, Direction); 4] = [
    ("btn-up", Direction::Up),
    ("btn-down", Direction::Down),
    ("btn-left", Direction::Left),
    ("btn-right", Direction::Right),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arrow_keys() {
        assert_eq!(map_key("ArrowUp"), Some(KeyBinding::Move(Direction::Up)));
        assert_eq!(map_key("ArrowDown"), Some(KeyBinding::Move(Direction::Down)));
        assert_eq!(map_key("ArrowLeft"), Some(KeyBinding::Move(Direction::Left)));
        assert_eq!(map_key("ArrowRight"), Some(KeyBinding::Move(Direction::Right)));
    }

    #[test]
    fn test_other_bindings() {
        assert_eq!(map_key(" "), Some(KeyBinding::Acknowledge));
        assert_eq!(map_key("Enter"), Some(KeyBinding::Acknowledge));
        assert_eq!(map_key("I"), Some(KeyBinding::ToggleAutopilot));
    }

    #[test]
    fn test_unbound_keys() {
        assert_eq!(map_key("w"), None);
        assert_eq!(map_key("arrowup"), None);
        assert_eq!(map_key(""), None);
    }
}
