//! Collaborator interface over the terminal-control library.
//!
//! Demo routines and the menu loop only talk to the terminal through these
//! traits. [`crate::app::terminal::CrosstermConsole`] is the real implementation;
//! tests use a scripted fake.

use std::io;

use crossterm::event::Event;

use crate::state::MenuState;

mod guard;
mod mouse;
mod style;

pub use guard::InputModeGuard;
pub use mouse::{MouseAction, MouseReport, parse_mouse};
pub use style::Styler;

/// Screen, cursor and window operations.
pub trait Display {
    /// Clear the whole screen and home the cursor.
    ///
    /// # Errors
    /// Returns the underlying terminal write error.
    fn clear(&mut self) -> io::Result<()>;

    /// Move the cursor to an absolute 0-based `(col, row)`.
    ///
    /// # Errors
    /// Returns the underlying terminal write error.
    fn move_to(&mut self, col: u16, row: u16) -> io::Result<()>;

    /// Show or hide the cursor.
    ///
    /// # Errors
    /// Returns the underlying terminal write error.
    fn set_cursor_visible(&mut self, visible: bool) -> io::Result<()>;

    /// Terminal size as `(columns, rows)`.
    ///
    /// # Errors
    /// Returns an error when the size cannot be queried.
    fn size(&self) -> io::Result<(u16, u16)>;

    /// Set the window title.
    ///
    /// # Errors
    /// Returns the underlying terminal write error.
    fn set_title(&mut self, title: &str) -> io::Result<()>;

    /// Enter (`true`) or leave (`false`) the alternate screen buffer.
    ///
    /// # Errors
    /// Returns the underlying terminal write error.
    fn set_alternate_screen(&mut self, enabled: bool) -> io::Result<()>;

    /// Reset colors and text attributes to the terminal defaults.
    ///
    /// # Errors
    /// Returns the underlying terminal write error.
    fn reset(&mut self) -> io::Result<()>;

    /// Write `text` at the cursor position and flush.
    ///
    /// # Errors
    /// Returns the underlying terminal write error.
    fn print(&mut self, text: &str) -> io::Result<()>;

    /// Write `text` followed by a line break that also works in raw mode.
    ///
    /// # Errors
    /// Returns the underlying terminal write error.
    fn print_line(&mut self, text: &str) -> io::Result<()> {
        self.print(text)?;
        self.print("\r\n")
    }

    /// Render the menu with the current selection highlighted.
    ///
    /// # Errors
    /// Returns the underlying terminal write error.
    fn draw_menu(&mut self, menu: &MenuState, hint: &str) -> io::Result<()>;
}

/// Keyboard input operations.
pub trait Input {
    /// Enable or disable raw (unbuffered, unechoed) input.
    ///
    /// # Errors
    /// Returns an error when the terminal mode cannot be changed.
    fn set_raw_mode(&mut self, enabled: bool) -> io::Result<()>;

    /// Block until one input token is available and return it.
    ///
    /// # Errors
    /// Returns the read error; callers treat it as the end of their loop.
    fn read_token(&mut self) -> io::Result<Event>;

    /// Block until one key press arrives and discard it.
    ///
    /// # Errors
    /// Returns the read error.
    fn wait_for_key(&mut self) -> io::Result<()> {
        loop {
            if crate::events::key_press(&self.read_token()?).is_some() {
                return Ok(());
            }
        }
    }
}

/// Mouse tracking operations.
pub trait Mouse {
    /// Enable or disable mouse event reporting.
    ///
    /// # Errors
    /// Returns the underlying terminal write error.
    fn set_mouse_tracking(&mut self, enabled: bool) -> io::Result<()>;
}

/// Everything a demo routine or the menu loop needs from the terminal.
pub trait Console: Display + Input + Mouse {}

impl<T: Display + Input + Mouse> Console for T {}
