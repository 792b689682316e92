use std::fmt;

use crossterm::event::{Event, MouseButton, MouseEventKind};

/// Kind of mouse activity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseAction {
    /// Button pressed.
    Press,
    /// Button released.
    Release,
    /// Pointer moved with a button held.
    Drag,
    /// Pointer moved with no button held.
    Move,
    /// Wheel up.
    ScrollUp,
    /// Wheel down.
    ScrollDown,
    /// Horizontal wheel left.
    ScrollLeft,
    /// Horizontal wheel right.
    ScrollRight,
}

impl MouseAction {
    /// Lowercase name for reports and logs.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Press => "press",
            Self::Release => "release",
            Self::Drag => "drag",
            Self::Move => "move",
            Self::ScrollUp => "scroll up",
            Self::ScrollDown => "scroll down",
            Self::ScrollLeft => "scroll left",
            Self::ScrollRight => "scroll right",
        }
    }
}

/// Structured mouse event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MouseReport {
    /// 0 left, 1 middle, 2 right; `None` for motion and wheel events.
    pub button: Option<u8>,
    /// What happened.
    pub action: MouseAction,
    /// 0-based column.
    pub x: u16,
    /// 0-based row.
    pub y: u16,
}

impl fmt::Display for MouseReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self.button {
            Some(0) => "left",
            Some(1) => "middle",
            Some(2) => "right",
            _ => "",
        };
        if name.is_empty() {
            write!(f, "{} at ({}, {})", self.action.as_str(), self.x, self.y)
        } else {
            write!(
                f,
                "{} {} (button {}) at ({}, {})",
                name,
                self.action.as_str(),
                self.button.unwrap_or_default(),
                self.x,
                self.y
            )
        }
    }
}

/// Map a crossterm button to its protocol index.
const fn button_index(button: MouseButton) -> u8 {
    match button {
        MouseButton::Left => 0,
        MouseButton::Middle => 1,
        MouseButton::Right => 2,
    }
}

/// What: Try to interpret an input token as a mouse event.
///
/// Inputs:
/// - `token`: One event read from the terminal.
///
/// Output:
/// - `Some(MouseReport)` for mouse events; `None` for anything else.
#[must_use]
pub fn parse_mouse(token: &Event) -> Option<MouseReport> {
    let Event::Mouse(m) = token else {
        return None;
    };
    let (button, action) = match m.kind {
        MouseEventKind::Down(b) => (Some(button_index(b)), MouseAction::Press),
        MouseEventKind::Up(b) => (Some(button_index(b)), MouseAction::Release),
        MouseEventKind::Drag(b) => (Some(button_index(b)), MouseAction::Drag),
        MouseEventKind::Moved => (None, MouseAction::Move),
        MouseEventKind::ScrollUp => (None, MouseAction::ScrollUp),
        MouseEventKind::ScrollDown => (None, MouseAction::ScrollDown),
        MouseEventKind::ScrollLeft => (None, MouseAction::ScrollLeft),
        MouseEventKind::ScrollRight => (None, MouseAction::ScrollRight),
    };
    Some(MouseReport {
        button,
        action,
        x: m.column,
        y: m.row,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseEvent};

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> Event {
        Event::Mouse(MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        })
    }

    #[test]
    /// What: Button events carry the protocol index and coordinates
    ///
    /// - Input: Left press at (12, 7), right release, middle drag
    /// - Output: Buttons 0/2/1 with matching actions and positions
    fn parse_mouse_buttons() {
        let r = parse_mouse(&mouse(MouseEventKind::Down(MouseButton::Left), 12, 7))
            .expect("mouse event");
        assert_eq!(
            r,
            MouseReport {
                button: Some(0),
                action: MouseAction::Press,
                x: 12,
                y: 7
            }
        );
        assert_eq!(r.to_string(), "left press (button 0) at (12, 7)");
        let r = parse_mouse(&mouse(MouseEventKind::Up(MouseButton::Right), 0, 0))
            .expect("mouse event");
        assert_eq!((r.button, r.action), (Some(2), MouseAction::Release));
        let r = parse_mouse(&mouse(MouseEventKind::Drag(MouseButton::Middle), 3, 4))
            .expect("mouse event");
        assert_eq!((r.button, r.action), (Some(1), MouseAction::Drag));
    }

    #[test]
    /// What: Wheel and motion events have no button; keys are not mouse events
    ///
    /// - Input: Scroll down, move, a key press
    /// - Output: `button == None` for the first two, `None` report for the key
    fn parse_mouse_wheel_motion_and_non_mouse() {
        let r = parse_mouse(&mouse(MouseEventKind::ScrollDown, 5, 6)).expect("mouse event");
        assert_eq!((r.button, r.action), (None, MouseAction::ScrollDown));
        assert_eq!(r.to_string(), "scroll down at (5, 6)");
        let r = parse_mouse(&mouse(MouseEventKind::Moved, 1, 2)).expect("mouse event");
        assert_eq!(r.action, MouseAction::Move);
        let k = Event::Key(KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE));
        assert_eq!(parse_mouse(&k), None);
    }
}
