//! Named, RGB and indexed colors plus text attributes.

use std::io;

use crossterm::style::Color;

use super::{DemoEnv, finish, heading};
use crate::console::{Console, Styler};

/// The sixteen named colors in palette order.
pub const NAMED_COLORS: [(&str, Color); 16] = [
    ("black", Color::Black),
    ("dark red", Color::DarkRed),
    ("dark green", Color::DarkGreen),
    ("dark yellow", Color::DarkYellow),
    ("dark blue", Color::DarkBlue),
    ("dark magenta", Color::DarkMagenta),
    ("dark cyan", Color::DarkCyan),
    ("grey", Color::Grey),
    ("dark grey", Color::DarkGrey),
    ("red", Color::Red),
    ("green", Color::Green),
    ("yellow", Color::Yellow),
    ("blue", Color::Blue),
    ("magenta", Color::Magenta),
    ("cyan", Color::Cyan),
    ("white", Color::White),
];

/// Palette cells per row in the indexed color grid.
const PALETTE_ROW: usize = 16;

/// What: Linear interpolation between two channel values.
///
/// Inputs:
/// - `from`, `to`: Channel endpoints.
/// - `step`, `steps`: Position `step` of `steps` (inclusive range `0..steps`).
///
/// Output:
/// - Interpolated channel value.
fn lerp(from: u8, to: u8, step: usize, steps: usize) -> u8 {
    if steps <= 1 {
        return from;
    }
    let (from, to) = (i64::from(from), i64::from(to));
    let step = i64::try_from(step).unwrap_or(0);
    let last = i64::try_from(steps - 1).unwrap_or(1);
    u8::try_from(from + (to - from) * step / last).unwrap_or(u8::MAX)
}

/// What: Build an RGB gradient strip from red through green to blue.
///
/// Inputs:
/// - `styler`: Text styling.
/// - `width`: Number of cells.
///
/// Output:
/// - Concatenated background-colored cells.
#[must_use]
pub fn gradient(styler: Styler, width: usize) -> String {
    let half = width / 2;
    (0..width)
        .map(|i| {
            let (r, g, b) = if i < half {
                (lerp(255, 0, i, half), lerp(0, 255, i, half), 0)
            } else {
                let j = i - half;
                let n = width - half;
                (0, lerp(255, 0, j, n), lerp(0, 255, j, n))
            };
            styler.bg_rgb(" ", r, g, b)
        })
        .collect()
}

/// What: Build the 256-color palette as rows of numbered cells.
///
/// Inputs:
/// - `styler`: Text styling.
///
/// Output:
/// - Sixteen rows of sixteen cells each.
#[must_use]
pub fn palette_rows(styler: Styler) -> Vec<String> {
    (0..=u8::MAX)
        .collect::<Vec<u8>>()
        .chunks(PALETTE_ROW)
        .map(|row| {
            row.iter()
                .map(|&i| styler.bg_indexed(&format!("{i:>4}"), i))
                .collect()
        })
        .collect()
}

/// What: Build the line of text attribute samples.
///
/// Inputs:
/// - `styler`: Text styling.
///
/// Output:
/// - One line with bold, dim, italic, underline, strikethrough, blink and inverse samples.
#[must_use]
pub fn attribute_samples(styler: Styler) -> String {
    [
        styler.bold("bold"),
        styler.dim("dim"),
        styler.italic("italic"),
        styler.underline("underline"),
        styler.strikethrough("strikethrough"),
        styler.blink("blink"),
        styler.inverse("inverse"),
    ]
    .join("  ")
}

/// What: Run the colors demo.
///
/// Inputs:
/// - `console`: Terminal collaborator.
/// - `env`: Pacing, styling and limits.
///
/// Output:
/// - `Ok(())` after the dismissal key.
///
/// # Errors
/// - Propagates console write failures.
pub fn run<C: Console + ?Sized>(console: &mut C, env: &DemoEnv<'_>) -> io::Result<()> {
    let s = env.styler;
    heading(console, s, "Colors & styles")?;

    console.print_line("Named foreground colors:")?;
    let fg_line: Vec<String> = NAMED_COLORS
        .iter()
        .map(|(name, color)| s.fg(name, *color))
        .collect();
    console.print_line(&fg_line.join(" "))?;
    env.short_pause();

    console.print_line("")?;
    console.print_line("Named background colors:")?;
    for half in NAMED_COLORS.chunks(NAMED_COLORS.len() / 2) {
        let bg_line: Vec<String> = half
            .iter()
            .map(|(name, color)| s.bg(&format!(" {name} "), *color))
            .collect();
        console.print_line(&bg_line.join(""))?;
    }
    env.short_pause();

    let (cols, _) = console.size()?;
    console.print_line("")?;
    console.print_line("RGB gradient (24-bit):")?;
    let width = usize::from(cols.saturating_sub(2)).clamp(8, 72);
    console.print_line(&gradient(s, width))?;
    env.short_pause();

    console.print_line("")?;
    console.print_line("256-color palette:")?;
    for row in palette_rows(s) {
        console.print_line(&row)?;
    }
    env.long_pause();

    console.print_line("")?;
    console.print_line("Text attributes:")?;
    console.print_line(&attribute_samples(s))?;
    env.short_pause();

    console.print_line("")?;
    console.print_line("Nested styles:")?;
    let nested = s.bold(&s.fg("bold red", Color::Red))
        + " then "
        + &s.underline(&s.rgb("underlined orange", 255, 165, 0))
        + " then "
        + &s.inverse(&s.bg("inverse on blue", Color::Blue));
    console.print_line(&nested)?;
    console.reset()?;

    finish(console, s)
}
