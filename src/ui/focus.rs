// Keyboard navigation: pure key mapping and cursor movement

use eframe::egui::Key;

/// Direction of list navigation
#[derive(Eq, PartialEq, Debug, Clone, Copy)]
pub enum NavDirection {
    Up,
    Down,
}

/// A navigation-relevant input decoded from a key press
#[derive(Eq, PartialEq, Debug, Clone, Copy)]
pub enum NavInput {
    Direction(NavDirection),
    Accept,
    Back,
}

/// Map a pressed key to a navigation input
pub fn map_key(key: Key) -> Option<NavInput> {
    match key {
        Key::ArrowUp => Some(NavInput::Direction(NavDirection::Up)),
        Key::ArrowDown => Some(NavInput::Direction(NavDirection::Down)),
        Key::Enter => Some(NavInput::Accept),
        Key::Escape => Some(NavInput::Back),
        _ => None,
    }
}

/// Move the list cursor one step, clamped at both ends (no wrap)
pub fn move_cursor(cursor: usize, dir: NavDirection, len: usize) -> usize {
    match dir {
        NavDirection::Up => cursor.saturating_sub(1),
        NavDirection::Down => {
            if len == 0 {
                0
            } else {
                (cursor + 1).min(len - 1)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arrows_map_to_directions() {
        assert_eq!(
            map_key(Key::ArrowUp),
            Some(NavInput::Direction(NavDirection::Up))
        );
        assert_eq!(
            map_key(Key::ArrowDown),
            Some(NavInput::Direction(NavDirection::Down))
        );
    }

    #[test]
    fn enter_accepts_escape_backs() {
        assert_eq!(map_key(Key::Enter), Some(NavInput::Accept));
        assert_eq!(map_key(Key::Escape), Some(NavInput::Back));
    }

    #[test]
    fn other_keys_do_not_map() {
        assert_eq!(map_key(Key::A), None);
        assert_eq!(map_key(Key::Tab), None);
        assert_eq!(map_key(Key::Space), None);
        assert_eq!(map_key(Key::ArrowLeft), None);
    }

    #[test]
    fn cursor_clamps_at_top() {
        assert_eq!(move_cursor(0, NavDirection::Up, 6), 0);
    }

    #[test]
    fn cursor_clamps_at_bottom() {
        assert_eq!(move_cursor(5, NavDirection::Down, 6), 5);
    }

    #[test]
    fn cursor_moves_both_ways() {
        assert_eq!(move_cursor(2, NavDirection::Down, 6), 3);
        assert_eq!(move_cursor(3, NavDirection::Up, 6), 2);
    }

    #[test]
    fn empty_list_pins_cursor_at_zero() {
        assert_eq!(move_cursor(0, NavDirection::Down, 0), 0);
        assert_eq!(move_cursor(0, NavDirection::Up, 0), 0);
    }
}
