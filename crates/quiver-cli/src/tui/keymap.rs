//! Translation from crossterm key events into the core input vocabulary.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use quiver_core::event::InputEvent;

/// Map one key press onto an [`InputEvent`].
///
/// `space_toggles` reflects whether the active view treats the space bar
/// as a toggle (endpoint picker) or as filter text. Unmapped keys return
/// `None` and are dropped.
#[must_use]
pub fn map_key(key: KeyEvent, space_toggles: bool) -> Option<InputEvent> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') => Some(InputEvent::Quit),
            KeyCode::Char('w') => Some(InputEvent::DeleteWord),
            KeyCode::Char('u') => Some(InputEvent::ClearLine),
            _ => None,
        };
    }
    match key.code {
        KeyCode::Char(' ') if space_toggles => Some(InputEvent::Space),
        KeyCode::Char(c) => Some(InputEvent::Char(c)),
        KeyCode::Backspace => Some(InputEvent::Backspace),
        KeyCode::Up => Some(InputEvent::Up),
        KeyCode::Down => Some(InputEvent::Down),
        KeyCode::Tab => Some(InputEvent::Tab),
        KeyCode::Enter => Some(InputEvent::Enter),
        KeyCode::Esc => Some(InputEvent::Cancel),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_characters_become_filter_input() {
        let ev = map_key(KeyEvent::from(KeyCode::Char('q')), false);
        assert_eq!(ev, Some(InputEvent::Char('q')));
    }

    #[test]
    fn space_depends_on_view_mode() {
        let key = KeyEvent::from(KeyCode::Char(' '));
        assert_eq!(map_key(key, false), Some(InputEvent::Char(' ')));
        assert_eq!(map_key(key, true), Some(InputEvent::Space));
    }

    #[test]
    fn control_chords_map_to_editing_events() {
        let ctrl = |c| KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL);
        assert_eq!(map_key(ctrl('c'), false), Some(InputEvent::Quit));
        assert_eq!(map_key(ctrl('w'), false), Some(InputEvent::DeleteWord));
        assert_eq!(map_key(ctrl('u'), false), Some(InputEvent::ClearLine));
        assert_eq!(map_key(ctrl('x'), false), None);
    }

    #[test]
    fn escape_is_cancel_not_quit() {
        assert_eq!(
            map_key(KeyEvent::from(KeyCode::Esc), false),
            Some(InputEvent::Cancel)
        );
    }

    #[test]
    fn unmapped_keys_are_dropped() {
        assert_eq!(map_key(KeyEvent::from(KeyCode::F(5)), false), None);
        assert_eq!(map_key(KeyEvent::from(KeyCode::Home), false), None);
    }
}
