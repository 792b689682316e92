//! Mouse tracking: click, release, drag and wheel reports.

use std::io;

use super::{DemoEnv, LoopEnd, LoopOutcome, finish, heading, report_read_error};
use crate::console::{Console, InputModeGuard, MouseAction, parse_mouse};
use crate::events::is_quit;

/// What: Run the mouse tracking demo.
///
/// Inputs:
/// - `console`: Terminal collaborator.
/// - `env`: Pacing, styling and limits.
///
/// Output:
/// - How many mouse events were reported and why the loop ended.
///
/// Details:
/// - Raw mode and mouse tracking are held for the loop only and released on every path.
/// - Each token is tried as a mouse event first; only non-mouse tokens are checked for quit.
/// - Plain pointer motion is decoded but neither printed nor counted, so the ceiling
///   is not exhausted by moving the pointer across the window.
///
/// # Errors
/// - Propagates console write failures and a failure to enable raw mode or tracking.
pub fn run<C: Console + ?Sized>(console: &mut C, env: &DemoEnv<'_>) -> io::Result<LoopOutcome> {
    let s = env.styler;
    let max = env.settings.mouse_demo_max_events;
    heading(console, s, "Mouse tracking")?;
    console.print_line(&format!(
        "Click, drag or scroll inside the window ({max} events max). Press {} to stop early.",
        s.bold(&env.quit_label())
    ))?;
    console.print_line("")?;

    let outcome = track(console, env, max)?;

    console.print_line("")?;
    console.print_line(&s.dim(&format!(
        "{} mouse event(s) reported. Mouse tracking disabled.",
        outcome.events
    )))?;
    finish(console, s)?;
    Ok(outcome)
}

/// Report mouse events under raw mode plus tracking until a limit, quit key or read failure.
fn track<C: Console + ?Sized>(
    console: &mut C,
    env: &DemoEnv<'_>,
    max: usize,
) -> io::Result<LoopOutcome> {
    let s = env.styler;
    let mut guard = InputModeGuard::raw_with_mouse(console)?;
    let mut events = 0;
    while events < max {
        let token = match guard.read_token() {
            Ok(t) => t,
            Err(e) => {
                report_read_error(&mut *guard, s, &e)?;
                return Ok(LoopOutcome {
                    events,
                    end: LoopEnd::ReadError,
                });
            }
        };
        if let Some(report) = parse_mouse(&token) {
            if report.action == MouseAction::Move {
                continue;
            }
            events += 1;
            tracing::trace!(%report, "[Demo] mouse event");
            guard.print_line(&format!("{events:>2}. {report}"))?;
        } else if is_quit(&token, &env.settings.keymap) {
            return Ok(LoopOutcome {
                events,
                end: LoopEnd::Quit,
            });
        }
    }
    Ok(LoopOutcome {
        events,
        end: LoopEnd::Limit,
    })
}
