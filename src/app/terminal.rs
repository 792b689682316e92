//! Crossterm-backed console over stdout.

use std::io::{self, Stdout, Write};

use crossterm::{
    cursor::{Hide, MoveTo, Show},
    event::{self, DisableMouseCapture, EnableMouseCapture, Event},
    execute,
    style::{Attribute, Print, ResetColor, SetAttribute},
    terminal::{
        self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen, SetTitle,
        disable_raw_mode, enable_raw_mode,
    },
};
use ratatui::{Terminal, backend::CrosstermBackend};

use crate::console::{Display, Input, Mouse};
use crate::state::MenuState;
use crate::ui::render_menu;

/// Real console: direct crossterm commands for the demos, a ratatui terminal for the menu.
pub struct CrosstermConsole {
    /// Ratatui terminal used only by `draw_menu`.
    terminal: Terminal<CrosstermBackend<Stdout>>,
    /// Handle for direct command output.
    stdout: Stdout,
    /// Set after any direct write; the next menu draw repaints the whole screen.
    menu_stale: bool,
}

impl CrosstermConsole {
    /// What: Attach to the process stdout.
    ///
    /// Output:
    /// - A console that has not changed any terminal mode yet.
    ///
    /// # Errors
    /// - Returns an error if the terminal size cannot be queried.
    pub fn new() -> io::Result<Self> {
        let terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;
        Ok(Self {
            terminal,
            stdout: io::stdout(),
            menu_stale: true,
        })
    }

    /// Mark ratatui's buffer as out of date with the screen.
    const fn touch(&mut self) {
        self.menu_stale = true;
    }
}

impl Display for CrosstermConsole {
    fn clear(&mut self) -> io::Result<()> {
        self.touch();
        execute!(self.stdout, Clear(ClearType::All), MoveTo(0, 0))
    }

    fn move_to(&mut self, col: u16, row: u16) -> io::Result<()> {
        self.touch();
        execute!(self.stdout, MoveTo(col, row))
    }

    fn set_cursor_visible(&mut self, visible: bool) -> io::Result<()> {
        if visible {
            execute!(self.stdout, Show)
        } else {
            execute!(self.stdout, Hide)
        }
    }

    fn size(&self) -> io::Result<(u16, u16)> {
        terminal::size()
    }

    fn set_title(&mut self, title: &str) -> io::Result<()> {
        execute!(self.stdout, SetTitle(title))
    }

    fn set_alternate_screen(&mut self, enabled: bool) -> io::Result<()> {
        self.touch();
        if enabled {
            execute!(self.stdout, EnterAlternateScreen)
        } else {
            execute!(self.stdout, LeaveAlternateScreen)
        }
    }

    fn reset(&mut self) -> io::Result<()> {
        execute!(self.stdout, ResetColor, SetAttribute(Attribute::Reset))
    }

    fn print(&mut self, text: &str) -> io::Result<()> {
        self.touch();
        execute!(self.stdout, Print(text))?;
        self.stdout.flush()
    }

    fn draw_menu(&mut self, menu: &MenuState, hint: &str) -> io::Result<()> {
        if self.menu_stale {
            self.terminal.clear()?;
            self.menu_stale = false;
        }
        self.terminal.draw(|f| render_menu(f, menu, hint))?;
        Ok(())
    }
}

impl Input for CrosstermConsole {
    fn set_raw_mode(&mut self, enabled: bool) -> io::Result<()> {
        if enabled {
            enable_raw_mode()
        } else {
            disable_raw_mode()
        }
    }

    fn read_token(&mut self) -> io::Result<Event> {
        event::read()
    }
}

impl Mouse for CrosstermConsole {
    fn set_mouse_tracking(&mut self, enabled: bool) -> io::Result<()> {
        if enabled {
            execute!(self.stdout, EnableMouseCapture)
        } else {
            execute!(self.stdout, DisableMouseCapture)
        }
    }
}
