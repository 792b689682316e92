use std::io;

use crate::config::Settings;
use crate::console::Console;

/// What: Prepare the terminal before the first menu frame.
///
/// Inputs:
/// - `console`: Terminal collaborator.
/// - `settings`: Provides the window title.
///
/// # Errors
/// - Propagates console write failures.
pub fn startup<C: Console + ?Sized>(console: &mut C, settings: &Settings) -> io::Result<()> {
    tracing::debug!(title = %settings.window_title, "[Runtime] startup");
    console.clear()?;
    console.set_title(&settings.window_title)
}

/// What: Return the terminal to a usable state on exit.
///
/// Inputs:
/// - `console`: Terminal collaborator.
/// - `settings`: Provides the title to restore.
///
/// Output:
/// - The first failure, after every step has been attempted.
///
/// Details:
/// - Restores the title, shows the cursor, resets styles and clears the screen.
/// - A failing step does not skip the remaining ones.
///
/// # Errors
/// - Returns the first console write failure.
pub fn teardown<C: Console + ?Sized>(console: &mut C, settings: &Settings) -> io::Result<()> {
    tracing::debug!("[Runtime] teardown");
    let steps = [
        console.set_title(&settings.restore_title),
        console.set_cursor_visible(true),
        console.reset(),
        console.clear(),
    ];
    steps.into_iter().collect::<io::Result<Vec<()>>>().map(drop)
}
