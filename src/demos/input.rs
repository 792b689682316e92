//! Raw keyboard input echo.

use std::io;

use super::{DemoEnv, LoopEnd, LoopOutcome, finish, heading, report_read_error};
use crate::config::KeyChord;
use crate::console::{Console, InputModeGuard};
use crate::events::{is_quit, key_press};

/// What: Run the keyboard input demo.
///
/// Inputs:
/// - `console`: Terminal collaborator.
/// - `env`: Pacing, styling and limits.
///
/// Output:
/// - How many key presses were echoed and why the loop ended.
///
/// Details:
/// - Raw mode is held for the echo loop only.
/// - The loop ends after `input_demo_max_keys` presses, on a quit key, or on a read failure.
/// - Non-key tokens (mouse, resize, key releases) are skipped and not counted.
///
/// # Errors
/// - Propagates console write failures and a failure to enter raw mode.
pub fn run<C: Console + ?Sized>(console: &mut C, env: &DemoEnv<'_>) -> io::Result<LoopOutcome> {
    let s = env.styler;
    let max = env.settings.input_demo_max_keys;
    heading(console, s, "Keyboard input")?;
    console.print_line(&format!(
        "Press up to {max} keys to see how they are decoded. Press {} to stop early.",
        s.bold(&env.quit_label())
    ))?;
    console.print_line("")?;

    let outcome = echo_keys(console, env, max)?;

    console.print_line("")?;
    let reason = match outcome.end {
        LoopEnd::Limit => "limit reached",
        LoopEnd::Quit => "stopped by quit key",
        LoopEnd::ReadError => "stopped by input error",
    };
    console.print_line(&s.dim(&format!("{} key(s) received, {reason}.", outcome.events)))?;
    finish(console, s)?;
    Ok(outcome)
}

/// Echo key presses under raw mode until a limit, quit key or read failure.
fn echo_keys<C: Console + ?Sized>(
    console: &mut C,
    env: &DemoEnv<'_>,
    max: usize,
) -> io::Result<LoopOutcome> {
    let s = env.styler;
    let mut guard = InputModeGuard::raw(console)?;
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
        if is_quit(&token, &env.settings.keymap) {
            return Ok(LoopOutcome {
                events,
                end: LoopEnd::Quit,
            });
        }
        let Some(key) = key_press(&token) else {
            continue;
        };
        events += 1;
        let label = KeyChord::from(key).label();
        let detail = format!("{:?} {:?}", key.code, key.modifiers);
        guard.print_line(&format!(
            "{events:>2}. {}  {}",
            s.bold(&label),
            s.dim(&detail)
        ))?;
    }
    Ok(LoopOutcome {
        events,
        end: LoopEnd::Limit,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;
    use crate::console::Styler;
    use crate::demos::test_env::env;
    use crate::test_utils::{FakeConsole, ch, code, mouse};
    use crate::util::InstantPacer;
    use crossterm::event::{KeyCode, MouseEventKind};

    #[test]
    /// What: Ten non-quit keys end the loop without a quit key
    ///
    /// - Input: Ten letter/arrow keys, then one dismissal key
    /// - Output: Ten events, `Limit`, every token consumed, raw mode off
    fn input_stops_after_ten_keys() {
        let mut tokens: Vec<_> = "abcdefgh".chars().map(ch).collect();
        tokens.push(code(KeyCode::Up));
        tokens.push(code(KeyCode::F(2)));
        tokens.push(ch('z'));
        let mut console = FakeConsole::new(tokens);
        let outcome = run(&mut console, &env()).expect("input demo");
        assert_eq!(
            outcome,
            LoopOutcome {
                events: 10,
                end: LoopEnd::Limit
            }
        );
        assert_eq!(console.remaining(), 0);
        assert_eq!(console.reads, 11);
        assert!(console.output.contains("10. F2"));
        assert!(console.output.contains(" 9. ↑"));
        assert!(!console.raw_mode);
    }

    #[test]
    /// What: A quit key ends the loop early and mouse tokens are not counted
    ///
    /// - Input: 'a', a mouse move, 'Q', dismissal
    /// - Output: One event, `Quit`
    fn input_quit_ends_early_and_skips_non_keys() {
        let mut console = FakeConsole::new(vec![
            ch('a'),
            mouse(MouseEventKind::Moved, 1, 1),
            ch('Q'),
            ch('x'),
        ]);
        let outcome = run(&mut console, &env()).expect("input demo");
        assert_eq!(
            outcome,
            LoopOutcome {
                events: 1,
                end: LoopEnd::Quit
            }
        );
        assert_eq!(console.remaining(), 0);
        assert!(console.output.contains("stopped by quit key"));
    }

    #[test]
    /// What: A read failure is reported and the routine still finishes
    ///
    /// - Input: 'a', then an I/O error, then a dismissal key
    /// - Output: `ReadError` after one event; error text printed; raw mode released
    fn input_read_error_is_reported() {
        let mut console = FakeConsole::with_script(vec![
            Ok(ch('a')),
            Err(io::Error::other("tty gone")),
            Ok(ch('x')),
        ]);
        let outcome = run(&mut console, &env()).expect("input demo");
        assert_eq!(outcome.end, LoopEnd::ReadError);
        assert_eq!(outcome.events, 1);
        assert!(console.output.contains("Input error: tty gone"));
        assert_eq!(console.remaining(), 0);
        assert!(!console.raw_mode);
    }

    #[test]
    /// What: The key ceiling comes from settings
    ///
    /// - Input: `input_demo_max_keys = 2`, three keys
    /// - Output: Two events; the third key serves as the dismissal
    fn input_limit_is_configurable() {
        let settings = Settings {
            input_demo_max_keys: 2,
            ..Settings::default()
        };
        let env = DemoEnv {
            pacer: &InstantPacer,
            styler: Styler::new(false),
            settings: &settings,
        };
        let mut console = FakeConsole::new(vec![ch('a'), ch('b'), ch('c')]);
        let outcome = run(&mut console, &env).expect("input demo");
        assert_eq!(outcome.events, 2);
        assert_eq!(console.remaining(), 0);
    }
}
