//! Small helpers shared across modules.

pub mod pacer;

pub use pacer::{InstantPacer, Pacer, ThreadPacer, pacer_for};

/// What: Return the column that centers `text` in a line of `width` cells.
///
/// Inputs:
/// - `text`: Text to place; measured in terminal cells, not bytes.
/// - `width`: Available line width.
///
/// Output:
/// - 0-based start column; 0 when the text is wider than the line.
#[must_use]
pub fn centered_col(text: &str, width: u16) -> u16 {
    let cells = u16::try_from(unicode_width::UnicodeWidthStr::width(text)).unwrap_or(u16::MAX);
    width.saturating_sub(cells) / 2
}
