//! termtour application runtime.
//!
//! This module owns the menu loop, the startup and teardown sequence, and the
//! crossterm-backed console the loop and the routines draw through.

/// Menu loop, startup and teardown.
mod runtime;
/// Crossterm console over stdout.
pub mod terminal;

// Re-export the public entrypoint so callers keep using `app::run(...)`.
pub use runtime::{RunOptions, run, run_session, run_single};
pub use terminal::CrosstermConsole;
