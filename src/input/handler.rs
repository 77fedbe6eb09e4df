//! Keyboard mapping.
//!
//! Arrow keys steer. There is no input queue and no guard against turning
//! back into the neck: the latest key wins and the next tick uses it.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::game::Direction;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    /// Overwrite the pending direction
    Steer(Direction),
    Restart,
    Quit,
}

impl KeyAction {
    /// Map a key press. Releases, repeats and unknown keys map to `None`.
    pub fn from_key_event(key: KeyEvent) -> Option<Self> {
        if key.kind != KeyEventKind::Press {
            return None;
        }

        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return matches!(key.code, KeyCode::Char('c' | 'C')).then_some(KeyAction::Quit);
        }

        let action = match key.code {
            KeyCode::Up | KeyCode::Char('w' | 'W') => KeyAction::Steer(Direction::Top),
            KeyCode::Down | KeyCode::Char('s' | 'S') => KeyAction::Steer(Direction::Bottom),
            KeyCode::Left | KeyCode::Char('a' | 'A') => KeyAction::Steer(Direction::Left),
            KeyCode::Right | KeyCode::Char('d' | 'D') => KeyAction::Steer(Direction::Right),

            KeyCode::Char('q' | 'Q') | KeyCode::Esc => KeyAction::Quit,
            KeyCode::Char('r' | 'R') => KeyAction::Restart,

            _ => return None,
        };
        Some(action)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventState;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_arrow_keys() {
        let cases = [
            (KeyCode::Up, Direction::Top),
            (KeyCode::Down, Direction::Bottom),
            (KeyCode::Left, Direction::Left),
            (KeyCode::Right, Direction::Right),
        ];
        for (code, direction) in cases {
            assert_eq!(
                KeyAction::from_key_event(press(code)),
                Some(KeyAction::Steer(direction)),
                "{code:?}"
            );
        }
    }

    #[test]
    fn test_wasd_keys() {
        assert_eq!(
            KeyAction::from_key_event(press(KeyCode::Char('w'))),
            Some(KeyAction::Steer(Direction::Top))
        );
        assert_eq!(
            KeyAction::from_key_event(KeyEvent::new(KeyCode::Char('D'), KeyModifiers::SHIFT)),
            Some(KeyAction::Steer(Direction::Right))
        );
    }

    #[test]
    fn test_control_keys() {
        assert_eq!(KeyAction::from_key_event(press(KeyCode::Esc)), Some(KeyAction::Quit));
        assert_eq!(
            KeyAction::from_key_event(press(KeyCode::Char('q'))),
            Some(KeyAction::Quit)
        );
        assert_eq!(
            KeyAction::from_key_event(press(KeyCode::Char('r'))),
            Some(KeyAction::Restart)
        );
        assert_eq!(
            KeyAction::from_key_event(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Some(KeyAction::Quit)
        );
    }

    #[test]
    fn test_ctrl_does_not_steer() {
        assert_eq!(
            KeyAction::from_key_event(KeyEvent::new(KeyCode::Char('w'), KeyModifiers::CONTROL)),
            None
        );
    }

    #[test]
    fn test_unknown_key_is_ignored() {
        assert_eq!(KeyAction::from_key_event(press(KeyCode::Char('x'))), None);
        assert_eq!(KeyAction::from_key_event(press(KeyCode::Enter)), None);
    }

    #[test]
    fn test_release_is_ignored() {
        let release = KeyEvent::new_with_kind_and_state(
            KeyCode::Up,
            KeyModifiers::NONE,
            KeyEventKind::Release,
            KeyEventState::NONE,
        );
        assert_eq!(KeyAction::from_key_event(release), None);
    }
}
