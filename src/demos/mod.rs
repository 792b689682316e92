//! Demo routines and the dispatcher that runs them.
//!
//! Every routine is a fixed sequence of console calls separated by pacing
//! pauses and ends by waiting for one dismissal key. Read failures are caught
//! inside the routine that hit them, reported on screen, and end that
//! routine's loop; they never abort the application.

use std::io;
use std::time::Duration;

use crossterm::style::Color;

use crate::config::{KeyChord, Settings};
use crate::console::{Console, InputModeGuard, Styler};
use crate::state::{AppState, DemoId};
use crate::util::Pacer;

pub mod colors;
pub mod cursor;
pub mod input;
pub mod mouse;
pub mod terminal;

/// Shared, read-only environment handed to every routine.
pub struct DemoEnv<'a> {
    /// Pause implementation.
    pub pacer: &'a dyn Pacer,
    /// Text styling.
    pub styler: Styler,
    /// Pause lengths and loop limits.
    pub settings: &'a Settings,
}

impl DemoEnv<'_> {
    /// Pause between small steps.
    pub fn short_pause(&self) {
        self.pacer
            .pause(Duration::from_millis(self.settings.short_pause_ms));
    }

    /// Pause between sections.
    pub fn long_pause(&self) {
        self.pacer
            .pause(Duration::from_millis(self.settings.long_pause_ms));
    }

    /// Pause between frames of a small animation.
    pub fn tick(&self) {
        self.pacer
            .pause(Duration::from_millis(self.settings.short_pause_ms / 5));
    }

    /// Label of the first configured quit key, for on-screen instructions.
    #[must_use]
    pub fn quit_label(&self) -> String {
        self.settings
            .keymap
            .quit
            .first()
            .map_or_else(|| "q".to_string(), KeyChord::label)
    }
}

/// Why an event-counting loop ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopEnd {
    /// The event ceiling was reached.
    Limit,
    /// A quit key was pressed.
    Quit,
    /// Reading input failed.
    ReadError,
}

/// Result of the input and mouse demo loops.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoopOutcome {
    /// Events counted and reported.
    pub events: usize,
    /// Exit condition.
    pub end: LoopEnd,
}

/// What: Run the routine bound to `id`, or stop the application for `Exit`.
///
/// Inputs:
/// - `id`: Selected menu identifier.
/// - `app`: Application state; only touched for `Exit`.
/// - `console`: Terminal collaborator.
/// - `env`: Pacing, styling and limits.
///
/// Output:
/// - `Ok(())` once the routine has returned control.
///
/// # Errors
/// - Propagates console write failures; input read failures are handled inside the routines.
pub fn dispatch<C: Console + ?Sized>(
    id: DemoId,
    app: &mut AppState,
    console: &mut C,
    env: &DemoEnv<'_>,
) -> io::Result<()> {
    tracing::info!(demo = id.as_name(), "[Demo] dispatch");
    match id {
        DemoId::Colors => colors::run(console, env),
        DemoId::Cursor => cursor::run(console, env),
        DemoId::Terminal => terminal::run(console, env),
        DemoId::Input => input::run(console, env).map(|outcome| {
            tracing::debug!(?outcome, "[Demo] input demo finished");
        }),
        DemoId::Mouse => mouse::run(console, env).map(|outcome| {
            tracing::debug!(?outcome, "[Demo] mouse demo finished");
        }),
        DemoId::Exit => {
            app.stop();
            Ok(())
        }
    }
}

/// What: Print a routine heading on a cleared screen.
///
/// Inputs:
/// - `console`: Terminal collaborator.
/// - `styler`: Text styling.
/// - `title`: Heading text.
///
/// # Errors
/// - Propagates console write failures.
pub(crate) fn heading<C: Console + ?Sized>(
    console: &mut C,
    styler: Styler,
    title: &str,
) -> io::Result<()> {
    console.clear()?;
    console.print_line(&styler.bold(&styler.underline(title)))?;
    console.print_line("")
}

/// What: Report a failed read on screen and in the log.
///
/// Inputs:
/// - `console`: Terminal collaborator.
/// - `styler`: Text styling.
/// - `err`: The read error.
///
/// # Errors
/// - Propagates console write failures.
pub(crate) fn report_read_error<C: Console + ?Sized>(
    console: &mut C,
    styler: Styler,
    err: &io::Error,
) -> io::Result<()> {
    tracing::warn!(error = %err, "[Demo] input read failed");
    console.print_line(&styler.fg(&format!("Input error: {err}"), Color::Red))
}

/// What: Wait for the single dismissal key that ends every routine.
///
/// Inputs:
/// - `console`: Terminal collaborator.
/// - `styler`: Text styling.
///
/// Output:
/// - `Ok(())` after one key press, or after reporting a read failure.
///
/// Details:
/// - Raw mode is held only while waiting and is released on every path.
///
/// # Errors
/// - Propagates console write failures and a failure to enter raw mode.
pub(crate) fn finish<C: Console + ?Sized>(console: &mut C, styler: Styler) -> io::Result<()> {
    console.print_line("")?;
    console.print_line(&styler.dim("Press any key to return to the menu..."))?;
    let mut guard = InputModeGuard::raw(console)?;
    if let Err(e) = guard.wait_for_key() {
        report_read_error(&mut *guard, styler, &e)?;
    }
    Ok(())
}
