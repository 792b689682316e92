use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// A single keyboard chord (modifiers + key).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct KeyChord {
    /// Key code; character keys keep their case.
    pub code: KeyCode,
    /// Required modifiers, Shift excluded for character keys.
    pub mods: KeyModifiers,
}

impl KeyChord {
    /// What: Build a chord without modifiers.
    ///
    /// Inputs:
    /// - `code`: Key code to bind.
    ///
    /// Output: `KeyChord` with empty modifiers.
    #[must_use]
    pub const fn plain(code: KeyCode) -> Self {
        Self {
            code,
            mods: KeyModifiers::empty(),
        }
    }

    /// What: Decide whether a key event triggers this chord.
    ///
    /// Inputs:
    /// - `key`: Key event as reported by crossterm.
    ///
    /// Output:
    /// - `true` when the key code matches and the modifiers agree.
    ///
    /// Details:
    /// - For character keys the Shift bit is ignored because the case of the
    ///   character already carries it (`Q` arrives as `Char('Q')` + Shift).
    #[must_use]
    pub fn matches(&self, key: &KeyEvent) -> bool {
        if self.code != key.code {
            return false;
        }
        if matches!(key.code, KeyCode::Char(_)) {
            let strip = |m: KeyModifiers| m.difference(KeyModifiers::SHIFT);
            strip(self.mods) == strip(key.modifiers)
        } else {
            self.mods == key.modifiers
        }
    }

    /// Return a short display label such as "Ctrl+R", "F1", "Shift+Del", "↑".
    #[must_use]
    pub fn label(&self) -> String {
        let mut parts: Vec<&'static str> = Vec::new();
        if self.mods.contains(KeyModifiers::CONTROL) {
            parts.push("Ctrl");
        }
        if self.mods.contains(KeyModifiers::ALT) {
            parts.push("Alt");
        }
        if self.mods.contains(KeyModifiers::SHIFT) && !matches!(self.code, KeyCode::Char(_)) {
            parts.push("Shift");
        }
        if self.mods.contains(KeyModifiers::SUPER) {
            parts.push("Super");
        }
        let key = match self.code {
            KeyCode::Char(' ') => "Space".to_string(),
            KeyCode::Char('\r' | '\n') | KeyCode::Enter => "Enter".to_string(),
            KeyCode::Char(ch) => ch.to_string(),
            KeyCode::Esc => "Esc".to_string(),
            KeyCode::Backspace => "Backspace".to_string(),
            KeyCode::Tab => "Tab".to_string(),
            KeyCode::BackTab => "Shift+Tab".to_string(),
            KeyCode::Delete => "Del".to_string(),
            KeyCode::Insert => "Ins".to_string(),
            KeyCode::Home => "Home".to_string(),
            KeyCode::End => "End".to_string(),
            KeyCode::PageUp => "PgUp".to_string(),
            KeyCode::PageDown => "PgDn".to_string(),
            KeyCode::Up => "↑".to_string(),
            KeyCode::Down => "↓".to_string(),
            KeyCode::Left => "←".to_string(),
            KeyCode::Right => "→".to_string(),
            KeyCode::F(n) => format!("F{n}"),
            _ => "?".to_string(),
        };
        if parts.is_empty() || matches!(self.code, KeyCode::BackTab) {
            key
        } else {
            format!("{}+{}", parts.join("+"), key)
        }
    }
}

impl From<&KeyEvent> for KeyChord {
    fn from(key: &KeyEvent) -> Self {
        Self {
            code: key.code,
            mods: key.modifiers,
        }
    }
}

/// Menu key bindings. Each action can have multiple chords.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KeyMap {
    /// Move the selection up.
    pub up: Vec<KeyChord>,
    /// Move the selection down.
    pub down: Vec<KeyChord>,
    /// Run the highlighted entry.
    pub select: Vec<KeyChord>,
    /// Leave the application, or end an input/mouse demo early.
    pub quit: Vec<KeyChord>,
}

impl Default for KeyMap {
    fn default() -> Self {
        use KeyCode::{Char, Down, Enter, Up};
        Self {
            up: vec![KeyChord::plain(Up), KeyChord::plain(Char('k'))],
            down: vec![KeyChord::plain(Down), KeyChord::plain(Char('j'))],
            select: vec![
                KeyChord::plain(Enter),
                KeyChord::plain(Char('\r')),
                KeyChord::plain(Char('\n')),
            ],
            quit: vec![KeyChord::plain(Char('q')), KeyChord::plain(Char('Q'))],
        }
    }
}

/// User-configurable application settings parsed from `settings.conf`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Settings {
    /// Window title set on startup.
    pub window_title: String,
    /// Title written back on teardown.
    pub restore_title: String,
    /// Whether demo routines pause between steps.
    pub pacing: bool,
    /// Short pause between demo steps, in milliseconds.
    pub short_pause_ms: u64,
    /// Long pause between demo sections, in milliseconds.
    pub long_pause_ms: u64,
    /// Key presses echoed by the input demo before it stops on its own.
    pub input_demo_max_keys: usize,
    /// Mouse events reported by the mouse demo before it stops on its own.
    pub mouse_demo_max_events: usize,
    /// Emit color and attribute sequences.
    pub color: bool,
    /// Menu key bindings.
    pub keymap: KeyMap,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            window_title: "termtour".to_string(),
            restore_title: String::new(),
            pacing: true,
            short_pause_ms: 1000,
            long_pause_ms: 2000,
            input_demo_max_keys: 10,
            mouse_demo_max_events: 20,
            color: true,
            keymap: KeyMap::default(),
        }
    }
}
