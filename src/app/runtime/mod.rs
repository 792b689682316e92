use crate::config::Settings;
use crate::console::{Console, Styler};
use crate::demos::{DemoEnv, dispatch};
use crate::state::{AppState, DemoId};
use crate::util::pacer_for;

use super::terminal::CrosstermConsole;

mod cleanup;
mod event_loop;

use cleanup::{startup, teardown};
use event_loop::event_loop;

type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Resolved options for one process run.
#[derive(Debug, Clone)]
pub struct RunOptions {
    /// Run this routine once instead of the menu.
    pub demo: Option<DemoId>,
    /// Loaded settings.
    pub settings: Settings,
    /// Emit color and attribute sequences.
    pub color: bool,
    /// Sleep between demo steps.
    pub pacing: bool,
}

/// What: Run termtour end-to-end on the real terminal.
///
/// Inputs:
/// - `opts`: Resolved command-line and settings options.
///
/// Output:
/// - `Ok(())` when the session ends normally; `Err` on terminal I/O failures.
///
/// Details:
/// - Builds the crossterm console, the pacer and the styler, then runs either
///   the menu session or the single routine named by `opts.demo`.
/// - Teardown always runs before an error is returned.
pub fn run(opts: &RunOptions) -> Result<()> {
    let mut console = CrosstermConsole::new()?;
    let pacer = pacer_for(opts.pacing);
    let env = DemoEnv {
        pacer: pacer.as_ref(),
        styler: Styler::new(opts.color),
        settings: &opts.settings,
    };
    tracing::debug!(
        color = env.styler.enabled(),
        pacing = opts.pacing,
        "[Runtime] console ready"
    );
    match opts.demo {
        Some(id) => run_single(id, &mut console, &env),
        None => run_session(&mut console, &env),
    }
}

/// What: Run the interactive menu session.
///
/// Inputs:
/// - `console`: Terminal collaborator.
/// - `env`: Pacing, styling and settings.
///
/// Output:
/// - `Ok(())` after quit or `Exit`; the loop or teardown error otherwise.
///
/// Details:
/// - Startup clears the screen and sets the window title.
/// - Teardown runs on every path; a loop error takes precedence over a teardown error.
pub fn run_session<C: Console + ?Sized>(console: &mut C, env: &DemoEnv<'_>) -> Result<()> {
    let mut app = AppState::default();
    tracing::info!("[Runtime] session started");
    let result = startup(console, env.settings).and_then(|()| event_loop(&mut app, console, env));
    let restored = teardown(console, env.settings);
    if let Err(e) = &result {
        tracing::error!(error = %e, "[Runtime] session aborted");
    }
    result?;
    restored?;
    tracing::info!("[Runtime] session finished");
    Ok(())
}

/// What: Run one routine without the menu.
///
/// Inputs:
/// - `id`: Routine to run; `Exit` runs nothing.
/// - `console`: Terminal collaborator.
/// - `env`: Pacing, styling and settings.
///
/// Output:
/// - `Ok(())` after the routine's dismissal key.
///
/// Details:
/// - Uses the same startup and teardown as the menu session.
pub fn run_single<C: Console + ?Sized>(
    id: DemoId,
    console: &mut C,
    env: &DemoEnv<'_>,
) -> Result<()> {
    let mut app = AppState::default();
    let result = startup(console, env.settings).and_then(|()| dispatch(id, &mut app, console, env));
    let restored = teardown(console, env.settings);
    result?;
    restored?;
    Ok(())
}
