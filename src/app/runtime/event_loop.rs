use std::io;

use crate::console::{Console, InputModeGuard};
use crate::demos::{DemoEnv, dispatch, report_read_error};
use crate::events::route;
use crate::state::AppState;
use crate::ui::hint_line;

/// What: Read one token with raw mode held for that read only.
///
/// # Errors
/// - Returns the read error after raw mode has been released.
fn read_menu_token<C: Console + ?Sized>(console: &mut C) -> io::Result<crossterm::event::Event> {
    let mut guard = InputModeGuard::raw(console)?;
    guard.read_token()
}

/// What: Drive the menu until the application stops.
///
/// Inputs:
/// - `app`: Application state; mutated by navigation, quit and `Exit`.
/// - `console`: Terminal collaborator.
/// - `env`: Pacing, styling and settings handed to the routines.
///
/// Output:
/// - `Ok(())` once the running flag is cleared.
///
/// Details:
/// - Each iteration renders the menu, reads one token, routes it and applies the result.
/// - A selected entry runs to completion before the next frame.
/// - A menu read failure is printed in red before it is returned.
///
/// # Errors
/// - Propagates menu read failures and console write failures.
pub fn event_loop<C: Console + ?Sized>(
    app: &mut AppState,
    console: &mut C,
    env: &DemoEnv<'_>,
) -> io::Result<()> {
    let hint = hint_line(&env.settings.keymap);
    while app.is_running() {
        console.draw_menu(&app.menu, &hint)?;
        let token = match read_menu_token(console) {
            Ok(token) => token,
            Err(e) => {
                report_read_error(console, env.styler, &e)?;
                return Err(e);
            }
        };
        let action = route(&token, &env.settings.keymap);
        tracing::trace!(?action, "[Runtime] routed token");
        if let Some(id) = app.apply(action) {
            dispatch(id, app, console, env)?;
        }
    }
    tracing::debug!("[Runtime] main loop exited");
    Ok(())
}
