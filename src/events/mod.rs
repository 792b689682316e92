//! Input routing: maps one input token to a menu action.
//!
//! Routing is pure. It never touches the terminal or the application state;
//! applying the resulting [`Action`] is the caller's job.

use crossterm::event::{Event, KeyEvent, KeyEventKind};

use crate::config::{KeyChord, KeyMap};

/// Menu action produced by routing one input token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    /// Move the selection up.
    NavigateUp,
    /// Move the selection down.
    NavigateDown,
    /// Run the highlighted entry.
    Select,
    /// Leave the application.
    Quit,
    /// No effect.
    Ignore,
}

/// What: Route a single input token to an [`Action`].
///
/// Inputs:
/// - `token`: One event read from the terminal.
/// - `keymap`: Active key bindings.
///
/// Output:
/// - Exactly one `Action`; anything unbound maps to `Action::Ignore`.
///
/// Details:
/// - Only key presses are routed. Releases, repeats, mouse, resize, focus and paste
///   events map to `Ignore`.
/// - Bindings are checked in the order quit, select, up, down.
#[must_use]
pub fn route(token: &Event, keymap: &KeyMap) -> Action {
    let Event::Key(key) = token else {
        return Action::Ignore;
    };
    if key.kind != KeyEventKind::Press {
        return Action::Ignore;
    }
    let hit = |chords: &[KeyChord]| chords.iter().any(|c| c.matches(key));
    if hit(&keymap.quit) {
        Action::Quit
    } else if hit(&keymap.select) {
        Action::Select
    } else if hit(&keymap.up) {
        Action::NavigateUp
    } else if hit(&keymap.down) {
        Action::NavigateDown
    } else {
        Action::Ignore
    }
}

/// Whether `token` is a quit key press under `keymap`.
#[must_use]
pub fn is_quit(token: &Event, keymap: &KeyMap) -> bool {
    route(token, keymap) == Action::Quit
}

/// What: Extract a key press from a token.
///
/// Inputs:
/// - `token`: One event read from the terminal.
///
/// Output:
/// - `Some(&KeyEvent)` for key presses; `None` for everything else.
#[must_use]
pub fn key_press(token: &Event) -> Option<&KeyEvent> {
    match token {
        Event::Key(key) if key.kind == KeyEventKind::Press => Some(key),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{
        KeyCode, KeyEventState, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
    };

    fn key(code: KeyCode, mods: KeyModifiers) -> Event {
        Event::Key(KeyEvent::new(code, mods))
    }

    #[test]
    /// What: Default bindings route arrows, vi letters, Enter and q/Q
    ///
    /// - Input: Each default key as a press event
    /// - Output: The documented action for each
    fn route_default_bindings() {
        let km = KeyMap::default();
        let none = KeyModifiers::NONE;
        assert_eq!(route(&key(KeyCode::Up, none), &km), Action::NavigateUp);
        assert_eq!(route(&key(KeyCode::Char('k'), none), &km), Action::NavigateUp);
        assert_eq!(route(&key(KeyCode::Down, none), &km), Action::NavigateDown);
        assert_eq!(
            route(&key(KeyCode::Char('j'), none), &km),
            Action::NavigateDown
        );
        assert_eq!(route(&key(KeyCode::Enter, none), &km), Action::Select);
        assert_eq!(route(&key(KeyCode::Char('\r'), none), &km), Action::Select);
        assert_eq!(route(&key(KeyCode::Char('\n'), none), &km), Action::Select);
        assert_eq!(route(&key(KeyCode::Char('q'), none), &km), Action::Quit);
        assert_eq!(
            route(&key(KeyCode::Char('Q'), KeyModifiers::SHIFT), &km),
            Action::Quit
        );
    }

    #[test]
    /// What: Unbound keys and non-key tokens are ignored
    ///
    /// - Input: Other letters, uppercase K, Ctrl+q, a release, mouse, resize, paste
    /// - Output: `Ignore` for all
    fn route_everything_else_is_ignored() {
        let km = KeyMap::default();
        assert_eq!(
            route(&key(KeyCode::Char('x'), KeyModifiers::NONE), &km),
            Action::Ignore
        );
        assert_eq!(
            route(&key(KeyCode::Char('K'), KeyModifiers::SHIFT), &km),
            Action::Ignore
        );
        assert_eq!(
            route(&key(KeyCode::Char('q'), KeyModifiers::CONTROL), &km),
            Action::Ignore
        );
        let release = Event::Key(KeyEvent {
            code: KeyCode::Char('q'),
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        });
        assert_eq!(route(&release, &km), Action::Ignore);
        let mouse = Event::Mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: 1,
            row: 1,
            modifiers: KeyModifiers::NONE,
        });
        assert_eq!(route(&mouse, &km), Action::Ignore);
        assert_eq!(route(&Event::Resize(80, 24), &km), Action::Ignore);
        assert_eq!(route(&Event::Paste("q".into()), &km), Action::Ignore);
        assert_eq!(route(&Event::FocusGained, &km), Action::Ignore);
    }

    #[test]
    /// What: Routing is deterministic and honours extra bindings
    ///
    /// - Input: Same tokens routed twice; a keymap extended with `w` for up
    /// - Output: Identical results; `w` routes up only with the extended map
    fn route_is_deterministic_and_configurable() {
        let km = KeyMap::default();
        let tokens = [
            key(KeyCode::Up, KeyModifiers::NONE),
            key(KeyCode::Char('w'), KeyModifiers::NONE),
            key(KeyCode::Enter, KeyModifiers::NONE),
        ];
        for t in &tokens {
            assert_eq!(route(t, &km), route(t, &km));
        }
        let mut extended = KeyMap::default();
        extended.up.push(KeyChord::plain(KeyCode::Char('w')));
        assert_eq!(route(&tokens[1], &km), Action::Ignore);
        assert_eq!(route(&tokens[1], &extended), Action::NavigateUp);
        assert!(is_quit(&key(KeyCode::Char('q'), KeyModifiers::NONE), &km));
        assert!(key_press(&Event::Resize(1, 1)).is_none());
    }
}
