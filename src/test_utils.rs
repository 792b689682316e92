//! Test utilities for common test setup.
//!
//! This module provides a scripted console shared across unit test modules.

#![cfg(test)]

use std::collections::VecDeque;
use std::io;

use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

use crate::console::{Display, Input, Mouse};
use crate::state::MenuState;

/// One recorded console call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Op {
    Clear,
    MoveTo(u16, u16),
    CursorVisible(bool),
    Title(String),
    Alternate(bool),
    Reset,
    Print(String),
    Menu(usize),
}

/// Console that replays scripted tokens and records every call.
pub struct FakeConsole {
    script: VecDeque<io::Result<Event>>,
    pub ops: Vec<Op>,
    pub output: String,
    pub raw_mode: bool,
    pub mouse_tracking: bool,
    pub raw_toggles: Vec<bool>,
    pub mouse_toggles: Vec<bool>,
    pub reads: usize,
    pub size: (u16, u16),
}

impl FakeConsole {
    /// What: Build a console that yields `tokens` in order, then read errors.
    ///
    /// Inputs:
    /// - `tokens`: Events returned by successive `read_token` calls.
    ///
    /// Output: `FakeConsole` with an 80x24 size.
    pub fn new(tokens: Vec<Event>) -> Self {
        Self::with_script(tokens.into_iter().map(Ok).collect())
    }

    /// What: Build a console from a script that may contain read errors.
    pub fn with_script(script: Vec<io::Result<Event>>) -> Self {
        Self {
            script: script.into(),
            ops: Vec::new(),
            output: String::new(),
            raw_mode: false,
            mouse_tracking: false,
            raw_toggles: Vec::new(),
            mouse_toggles: Vec::new(),
            reads: 0,
            size: (80, 24),
        }
    }

    /// Tokens not consumed yet.
    pub fn remaining(&self) -> usize {
        self.script.len()
    }

    /// Number of menu renders.
    pub fn menu_draws(&self) -> usize {
        self.ops.iter().filter(|op| matches!(op, Op::Menu(_))).count()
    }
}

impl Display for FakeConsole {
    fn clear(&mut self) -> io::Result<()> {
        self.ops.push(Op::Clear);
        Ok(())
    }

    fn move_to(&mut self, col: u16, row: u16) -> io::Result<()> {
        self.ops.push(Op::MoveTo(col, row));
        Ok(())
    }

    fn set_cursor_visible(&mut self, visible: bool) -> io::Result<()> {
        self.ops.push(Op::CursorVisible(visible));
        Ok(())
    }

    fn size(&self) -> io::Result<(u16, u16)> {
        Ok(self.size)
    }

    fn set_title(&mut self, title: &str) -> io::Result<()> {
        self.ops.push(Op::Title(title.to_string()));
        Ok(())
    }

    fn set_alternate_screen(&mut self, enabled: bool) -> io::Result<()> {
        self.ops.push(Op::Alternate(enabled));
        Ok(())
    }

    fn reset(&mut self) -> io::Result<()> {
        self.ops.push(Op::Reset);
        Ok(())
    }

    fn print(&mut self, text: &str) -> io::Result<()> {
        self.output.push_str(text);
        self.ops.push(Op::Print(text.to_string()));
        Ok(())
    }

    fn draw_menu(&mut self, menu: &MenuState, _hint: &str) -> io::Result<()> {
        self.ops.push(Op::Menu(menu.selected()));
        Ok(())
    }
}

impl Input for FakeConsole {
    fn set_raw_mode(&mut self, enabled: bool) -> io::Result<()> {
        self.raw_mode = enabled;
        self.raw_toggles.push(enabled);
        Ok(())
    }

    fn read_token(&mut self) -> io::Result<Event> {
        self.reads += 1;
        self.script.pop_front().unwrap_or_else(|| {
            Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "token script exhausted",
            ))
        })
    }
}

impl Mouse for FakeConsole {
    fn set_mouse_tracking(&mut self, enabled: bool) -> io::Result<()> {
        self.mouse_tracking = enabled;
        self.mouse_toggles.push(enabled);
        Ok(())
    }
}

/// Key press for a character.
pub fn ch(c: char) -> Event {
    let mods = if c.is_ascii_uppercase() {
        KeyModifiers::SHIFT
    } else {
        KeyModifiers::NONE
    };
    Event::Key(KeyEvent::new(KeyCode::Char(c), mods))
}

/// Key press for a named key.
pub fn code(code: KeyCode) -> Event {
    Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
}

/// Mouse button press at `(x, y)`.
pub fn mouse_down(button: MouseButton, x: u16, y: u16) -> Event {
    mouse(MouseEventKind::Down(button), x, y)
}

/// Arbitrary mouse event at `(x, y)`.
pub fn mouse(kind: MouseEventKind, x: u16, y: u16) -> Event {
    Event::Mouse(MouseEvent {
        kind,
        column: x,
        row: y,
        modifiers: KeyModifiers::NONE,
    })
}
