use crossterm::style::{Color, Stylize};

/// Wraps plain text in color and attribute control sequences.
///
/// Every method returns a new `String`; styles compose by concatenation and by
/// feeding one method's output into another. A disabled styler returns the
/// text unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Styler {
    /// Whether control sequences are emitted.
    enabled: bool,
}

impl Styler {
    /// What: Create a styler.
    ///
    /// Inputs:
    /// - `enabled`: `false` turns every method into the identity.
    ///
    /// Output: `Styler`.
    #[must_use]
    pub const fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    /// Whether control sequences are emitted.
    #[must_use]
    pub const fn enabled(&self) -> bool {
        self.enabled
    }

    /// Apply `f` when enabled, else return `text` as is.
    fn wrap(self, text: &str, f: impl FnOnce(&str) -> String) -> String {
        if self.enabled {
            f(text)
        } else {
            text.to_string()
        }
    }

    /// Foreground color (named, RGB or indexed).
    #[must_use]
    pub fn fg(self, text: &str, color: Color) -> String {
        self.wrap(text, |t| t.with(color).to_string())
    }

    /// Background color (named, RGB or indexed).
    #[must_use]
    pub fn bg(self, text: &str, color: Color) -> String {
        self.wrap(text, |t| t.on(color).to_string())
    }

    /// 24-bit foreground color.
    #[must_use]
    pub fn rgb(self, text: &str, r: u8, g: u8, b: u8) -> String {
        self.fg(text, Color::Rgb { r, g, b })
    }

    /// 24-bit background color.
    #[must_use]
    pub fn bg_rgb(self, text: &str, r: u8, g: u8, b: u8) -> String {
        self.bg(text, Color::Rgb { r, g, b })
    }

    /// 256-color palette foreground.
    #[must_use]
    pub fn indexed(self, text: &str, index: u8) -> String {
        self.fg(text, Color::AnsiValue(index))
    }

    /// 256-color palette background.
    #[must_use]
    pub fn bg_indexed(self, text: &str, index: u8) -> String {
        self.bg(text, Color::AnsiValue(index))
    }

    /// Bold.
    #[must_use]
    pub fn bold(self, text: &str) -> String {
        self.wrap(text, |t| t.bold().to_string())
    }

    /// Dim.
    #[must_use]
    pub fn dim(self, text: &str) -> String {
        self.wrap(text, |t| t.dim().to_string())
    }

    /// Italic.
    #[must_use]
    pub fn italic(self, text: &str) -> String {
        self.wrap(text, |t| t.italic().to_string())
    }

    /// Underline.
    #[must_use]
    pub fn underline(self, text: &str) -> String {
        self.wrap(text, |t| t.underlined().to_string())
    }

    /// Strikethrough.
    #[must_use]
    pub fn strikethrough(self, text: &str) -> String {
        self.wrap(text, |t| t.crossed_out().to_string())
    }

    /// Slow blink.
    #[must_use]
    pub fn blink(self, text: &str) -> String {
        self.wrap(text, |t| t.slow_blink().to_string())
    }

    /// Swap foreground and background.
    #[must_use]
    pub fn inverse(self, text: &str) -> String {
        self.wrap(text, |t| t.reverse().to_string())
    }
}
