//! Size query, window title, alternate screen buffer and style reset.

use std::io;

use crossterm::style::Color;

use super::{DemoEnv, finish, heading};
use crate::console::Console;
use crate::util::centered_col;

/// Title shown while the demo runs.
pub const DEMO_TITLE: &str = "termtour: title set by the terminal demo";

/// What: Run the terminal control demo.
///
/// Inputs:
/// - `console`: Terminal collaborator.
/// - `env`: Pacing, styling and limits.
///
/// Output:
/// - `Ok(())` after the dismissal key.
///
/// Details:
/// - The alternate screen is left again even when drawing on it fails.
/// - The configured window title is restored before the prompt.
///
/// # Errors
/// - Propagates console write failures.
pub fn run<C: Console + ?Sized>(console: &mut C, env: &DemoEnv<'_>) -> io::Result<()> {
    let s = env.styler;
    heading(console, s, "Terminal control")?;

    let (cols, rows) = console.size()?;
    console.print_line(&format!(
        "Terminal size: {} columns x {} rows",
        s.bold(&cols.to_string()),
        s.bold(&rows.to_string())
    ))?;
    env.short_pause();

    console.set_title(DEMO_TITLE)?;
    console.print_line(&format!("Window title set to \"{DEMO_TITLE}\""))?;
    env.long_pause();

    console.print_line("Switching to the alternate screen buffer...")?;
    env.short_pause();
    console.set_alternate_screen(true)?;
    let shown = show_alternate(console, env, cols, rows);
    console.set_alternate_screen(false)?;
    shown?;
    console.print_line(&s.fg(
        "Back on the main screen; its content was preserved.",
        Color::Green,
    ))?;
    env.short_pause();

    console.print_line(&format!(
        "{} {}",
        s.inverse(&s.fg("styled text", Color::Magenta)),
        "followed by a full style reset:"
    ))?;
    console.reset()?;
    console.print_line("plain text after reset")?;
    env.short_pause();

    console.set_title(&env.settings.window_title)?;
    console.print_line("Window title restored.")?;
    finish(console, s)
}

/// Draw the alternate screen page and hold it for a moment.
fn show_alternate<C: Console + ?Sized>(
    console: &mut C,
    env: &DemoEnv<'_>,
    cols: u16,
    rows: u16,
) -> io::Result<()> {
    let s = env.styler;
    console.clear()?;
    let lines = [
        "This is the alternate screen buffer.",
        "Full-screen programs draw here so the shell scrollback stays intact.",
    ];
    let mid = rows / 2;
    for (offset, line) in (0u16..).zip(lines) {
        console.move_to(centered_col(line, cols), mid.saturating_sub(1) + offset)?;
        console.print(&s.bold(line))?;
    }
    env.long_pause();
    env.long_pause();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::demos::test_env::env;
    use crate::test_utils::{FakeConsole, Op, ch};

    #[test]
    /// What: Title, alternate screen and reset happen in order and are undone
    ///
    /// - Input: One dismissal key
    /// - Output: Demo title then configured title; alternate on then off; size reported
    fn terminal_run_toggles_and_restores() {
        let mut console = FakeConsole::new(vec![ch('x')]);
        run(&mut console, &env()).expect("terminal demo");
        let titles: Vec<&Op> = console
            .ops
            .iter()
            .filter(|op| matches!(op, Op::Title(_)))
            .collect();
        assert_eq!(
            titles,
            vec![
                &Op::Title(DEMO_TITLE.to_string()),
                &Op::Title("termtour".to_string())
            ]
        );
        let alt: Vec<&Op> = console
            .ops
            .iter()
            .filter(|op| matches!(op, Op::Alternate(_)))
            .collect();
        assert_eq!(alt, vec![&Op::Alternate(true), &Op::Alternate(false)]);
        assert!(console.ops.contains(&Op::Reset));
        assert!(console.output.contains("80 columns x 24 rows"));
        assert!(console.output.contains("alternate screen buffer."));
    }
}
