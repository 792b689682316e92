//! Absolute cursor placement and visibility.

use std::io;

use crossterm::style::Color;

use super::{DemoEnv, finish, heading};
use crate::console::Console;
use crate::util::centered_col;

/// Box half-width around the center marker.
const BOX_HALF_WIDTH: u16 = 14;
/// Box half-height around the center marker.
const BOX_HALF_HEIGHT: u16 = 2;
/// Steps of the diagonal walk.
const DIAGONAL_STEPS: u16 = 8;

/// What: Compute the four corner positions used for markers.
///
/// Inputs:
/// - `cols`, `rows`: Terminal size.
///
/// Output:
/// - Top-left, top-right, bottom-left, bottom-right `(col, row)` pairs inside the screen.
///
/// Details:
/// - Rows 0 and 1 hold the heading, so the top markers start at row 2.
/// - The bottom row is kept free for the dismissal prompt.
#[must_use]
pub fn corner_positions(cols: u16, rows: u16) -> [(u16, u16); 4] {
    let right = cols.saturating_sub(2).max(1);
    let top = 2.min(rows.saturating_sub(1));
    let bottom = rows.saturating_sub(4).max(top);
    [(1, top), (right, top), (1, bottom), (right, bottom)]
}

/// What: Draw a rounded box with its corners at `(left, top)` and `(right, bottom)`.
///
/// # Errors
/// - Propagates console write failures.
fn draw_box<C: Console + ?Sized>(
    console: &mut C,
    (left, top): (u16, u16),
    (right, bottom): (u16, u16),
) -> io::Result<()> {
    let inner = usize::from(right.saturating_sub(left).saturating_sub(1));
    let horizontal = "─".repeat(inner);
    console.move_to(left, top)?;
    console.print(&format!("╭{horizontal}╮"))?;
    for row in top + 1..bottom {
        console.move_to(left, row)?;
        console.print("│")?;
        console.move_to(right, row)?;
        console.print("│")?;
    }
    console.move_to(left, bottom)?;
    console.print(&format!("╰{horizontal}╯"))
}

/// What: Run the cursor demo.
///
/// Inputs:
/// - `console`: Terminal collaborator.
/// - `env`: Pacing, styling and limits.
///
/// Output:
/// - `Ok(())` after the dismissal key.
///
/// Details:
/// - The cursor is hidden while markers are placed and shown again before the prompt,
///   also when drawing fails midway.
///
/// # Errors
/// - Propagates console write failures.
pub fn run<C: Console + ?Sized>(console: &mut C, env: &DemoEnv<'_>) -> io::Result<()> {
    let s = env.styler;
    heading(console, s, "Cursor movement")?;
    console.set_cursor_visible(false)?;
    let drawn = draw_markers(console, env);
    console.set_cursor_visible(true)?;
    drawn?;

    let (_, rows) = console.size()?;
    console.move_to(0, rows.saturating_sub(3))?;
    finish(console, s)
}

/// Place corner markers, the centered box and the diagonal walk.
fn draw_markers<C: Console + ?Sized>(console: &mut C, env: &DemoEnv<'_>) -> io::Result<()> {
    let s = env.styler;
    let (cols, rows) = console.size()?;
    for (col, row) in corner_positions(cols, rows) {
        console.move_to(col, row)?;
        console.print(&s.fg("●", Color::Green))?;
        env.short_pause();
    }

    let (cx, cy) = (cols / 2, rows / 2);
    let label = format!("center ({cx}, {cy})");
    console.move_to(centered_col(&label, cols), cy)?;
    console.print(&s.bold(&s.fg(&label, Color::Yellow)))?;
    env.short_pause();

    let left = cx.saturating_sub(BOX_HALF_WIDTH);
    let right = (cx + BOX_HALF_WIDTH).min(cols.saturating_sub(1));
    let top = cy.saturating_sub(BOX_HALF_HEIGHT);
    let bottom = (cy + BOX_HALF_HEIGHT).min(rows.saturating_sub(1));
    draw_box(console, (left, top), (right, bottom))?;
    env.short_pause();

    for step in 0..DIAGONAL_STEPS {
        let col = 4 + step * 2;
        let row = 3 + step;
        if col >= cols || row >= top {
            break;
        }
        console.move_to(col, row)?;
        console.print(&s.fg("*", Color::Cyan))?;
        env.tick();
    }
    Ok(())
}
