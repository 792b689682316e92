//! Integration tests for the menu session against a scripted console.
//!
//! The console below implements the public collaborator traits and renders the
//! menu through ratatui's `TestBackend`, so a whole session runs without a TTY.

use std::collections::VecDeque;
use std::io;

use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use ratatui::{Terminal, backend::TestBackend};

use termtour::app::{run_session, run_single};
use termtour::config::Settings;
use termtour::console::{Display, Input, Mouse, Styler};
use termtour::demos::DemoEnv;
use termtour::state::{DemoId, MenuState};
use termtour::ui::render_menu;
use termtour::util::InstantPacer;

/// Scripted console that keeps the last rendered menu frame as text.
struct ScriptedConsole {
    tokens: VecDeque<Event>,
    terminal: Terminal<TestBackend>,
    last_frame: Vec<String>,
    printed: String,
    titles: Vec<String>,
    raw: bool,
    mouse: bool,
}

impl ScriptedConsole {
    fn new(tokens: Vec<Event>) -> Self {
        Self {
            tokens: tokens.into(),
            terminal: Terminal::new(TestBackend::new(60, 14)).expect("test terminal"),
            last_frame: Vec::new(),
            printed: String::new(),
            titles: Vec::new(),
            raw: false,
            mouse: false,
        }
    }

    fn frame_row_with(&self, needle: &str) -> Option<&String> {
        self.last_frame.iter().find(|row| row.contains(needle))
    }
}

impl Display for ScriptedConsole {
    fn clear(&mut self) -> io::Result<()> {
        Ok(())
    }

    fn move_to(&mut self, _col: u16, _row: u16) -> io::Result<()> {
        Ok(())
    }

    fn set_cursor_visible(&mut self, _visible: bool) -> io::Result<()> {
        Ok(())
    }

    fn size(&self) -> io::Result<(u16, u16)> {
        Ok((60, 14))
    }

    fn set_title(&mut self, title: &str) -> io::Result<()> {
        self.titles.push(title.to_string());
        Ok(())
    }

    fn set_alternate_screen(&mut self, _enabled: bool) -> io::Result<()> {
        Ok(())
    }

    fn reset(&mut self) -> io::Result<()> {
        Ok(())
    }

    fn print(&mut self, text: &str) -> io::Result<()> {
        self.printed.push_str(text);
        Ok(())
    }

    fn draw_menu(&mut self, menu: &MenuState, hint: &str) -> io::Result<()> {
        self.terminal
            .draw(|f| render_menu(f, menu, hint))
            .map_err(|e| io::Error::other(e.to_string()))?;
        let buffer = self.terminal.backend().buffer();
        let width = usize::from(buffer.area.width);
        self.last_frame = buffer
            .content()
            .chunks(width)
            .map(|row| row.iter().map(ratatui::buffer::Cell::symbol).collect())
            .collect();
        Ok(())
    }
}

impl Input for ScriptedConsole {
    fn set_raw_mode(&mut self, enabled: bool) -> io::Result<()> {
        self.raw = enabled;
        Ok(())
    }

    fn read_token(&mut self) -> io::Result<Event> {
        self.tokens
            .pop_front()
            .ok_or_else(|| io::Error::new(io::ErrorKind::UnexpectedEof, "script exhausted"))
    }
}

impl Mouse for ScriptedConsole {
    fn set_mouse_tracking(&mut self, enabled: bool) -> io::Result<()> {
        self.mouse = enabled;
        Ok(())
    }
}

fn key(code: KeyCode) -> Event {
    Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
}

fn ch(c: char) -> Event {
    key(KeyCode::Char(c))
}

fn env(settings: &Settings) -> DemoEnv<'_> {
    DemoEnv {
        pacer: &InstantPacer,
        styler: Styler::new(false),
        settings,
    }
}

#[test]
/// What: The selection marker follows navigation and clamps at the last entry
///
/// - Input: j x7 (two past the end), then q
/// - Output: Final frame marks "Exit"; session ends cleanly with titles set and restored
fn session_marker_clamps_on_exit_entry() {
    let settings = Settings::default();
    let mut tokens = vec![ch('j'); 7];
    tokens.push(ch('q'));
    let mut console = ScriptedConsole::new(tokens);
    run_session(&mut console, &env(&settings)).expect("session");
    let row = console.frame_row_with("▶").expect("marked row");
    assert!(row.contains("Exit"), "marker on wrong row: {row}");
    assert_eq!(console.titles, vec!["termtour".to_string(), String::new()]);
    assert!(!console.raw);
}

#[test]
/// What: Key releases and non-key tokens are ignored by the menu
///
/// - Input: Down release, resize, focus, Down press, q
/// - Output: Marker on the second entry
fn session_ignores_releases_and_non_keys() {
    let settings = Settings::default();
    let release = Event::Key(KeyEvent {
        code: KeyCode::Down,
        modifiers: KeyModifiers::NONE,
        kind: KeyEventKind::Release,
        state: KeyEventState::NONE,
    });
    let mut console = ScriptedConsole::new(vec![
        release,
        Event::Resize(100, 40),
        Event::FocusLost,
        key(KeyCode::Down),
        ch('q'),
    ]);
    run_session(&mut console, &env(&settings)).expect("session");
    let row = console.frame_row_with("▶").expect("marked row");
    assert!(row.contains("Cursor movement"), "marker on wrong row: {row}");
}

#[test]
/// What: A full tour through the mouse demo reports a click and returns to the menu
///
/// - Input: Down x4, Enter, left press at (12, 7), q, dismissal, q
/// - Output: Report printed; mouse tracking and raw mode released; script consumed
fn session_mouse_demo_round_trip() {
    let settings = Settings::default();
    let mut tokens = vec![key(KeyCode::Down); 4];
    tokens.extend([
        key(KeyCode::Enter),
        Event::Mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: 12,
            row: 7,
            modifiers: KeyModifiers::NONE,
        }),
        ch('q'),
        ch(' '),
        ch('q'),
    ]);
    let mut console = ScriptedConsole::new(tokens);
    run_session(&mut console, &env(&settings)).expect("session");
    assert!(console.printed.contains("left press (button 0) at (12, 7)"));
    assert!(!console.mouse);
    assert!(!console.raw);
    assert!(console.tokens.is_empty());
}

#[test]
/// What: A configured extra binding drives the menu alongside the defaults
///
/// - Input: `keybind_down = n`, then n, n, q
/// - Output: Marker on the third entry
fn session_uses_configured_keybind() {
    let mut settings = Settings::default();
    termtour::config::parse_settings("keybind_down = n\n", &mut settings);
    let mut console = ScriptedConsole::new(vec![ch('n'), ch('n'), ch('q')]);
    run_session(&mut console, &env(&settings)).expect("session");
    let row = console.frame_row_with("▶").expect("marked row");
    assert!(row.contains("Terminal control"), "marker on wrong row: {row}");
}

#[test]
/// What: Single-demo mode runs the input demo to its limit without the menu
///
/// - Input: `input_demo_max_keys = 3`, keys a b c, dismissal
/// - Output: Three echoed keys, empty frame history, script consumed
fn single_input_demo_respects_limit() {
    let mut settings = Settings::default();
    termtour::config::parse_settings("input_demo_max_keys = 3\n", &mut settings);
    let mut console = ScriptedConsole::new(vec![ch('a'), ch('b'), ch('c'), ch('d')]);
    run_single(DemoId::Input, &mut console, &env(&settings)).expect("single");
    assert!(console.printed.contains(" 3. c"));
    assert!(!console.printed.contains(" 4."));
    assert!(console.last_frame.is_empty());
    assert!(console.tokens.is_empty());
}
