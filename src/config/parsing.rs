use crossterm::event::{KeyCode, KeyModifiers};

use super::types::KeyChord;

/// What: Parse a single key identifier (e.g., "F5", "Esc", "?", "k") into a [`KeyCode`].
///
/// Inputs:
/// - `s`: Raw key token from a configuration string.
///
/// Output:
/// - `Some(KeyCode)` on success; `None` when the input token is unsupported.
///
/// Details:
/// - Supports function keys, navigation keys, and single printable characters.
/// - Character keys keep their case so that `q` and `Q` stay distinct bindings.
pub(crate) fn parse_key_identifier(s: &str) -> Option<KeyCode> {
    let t = s.trim();
    if let Some(num) = t
        .strip_prefix(['F', 'f'])
        .and_then(|x| x.parse::<u8>().ok())
    {
        return Some(KeyCode::F(num));
    }
    match t.to_ascii_uppercase().as_str() {
        "ESC" | "ESCAPE" => Some(KeyCode::Esc),
        "ENTER" | "RETURN" => Some(KeyCode::Enter),
        "TAB" => Some(KeyCode::Tab),
        "BACKTAB" => Some(KeyCode::BackTab),
        "BACKSPACE" => Some(KeyCode::Backspace),
        "DELETE" | "DEL" => Some(KeyCode::Delete),
        "INSERT" | "INS" => Some(KeyCode::Insert),
        "HOME" => Some(KeyCode::Home),
        "END" => Some(KeyCode::End),
        "PAGEUP" | "PGUP" => Some(KeyCode::PageUp),
        "PAGEDOWN" | "PGDN" => Some(KeyCode::PageDown),
        "UP" | "ARROWUP" => Some(KeyCode::Up),
        "DOWN" | "ARROWDOWN" => Some(KeyCode::Down),
        "LEFT" | "ARROWLEFT" => Some(KeyCode::Left),
        "RIGHT" | "ARROWRIGHT" => Some(KeyCode::Right),
        "SPACE" => Some(KeyCode::Char(' ')),
        _ => {
            let mut chars = t.chars();
            if let (Some(ch), None) = (chars.next(), chars.next()) {
                Some(KeyCode::Char(ch))
            } else {
                None
            }
        }
    }
}

/// What: Parse a full key chord such as "Ctrl+N" or "Shift+Tab" into a [`KeyChord`].
///
/// Inputs:
/// - `text`: Chord text combining optional modifiers with a key token.
///
/// Output:
/// - `Some(KeyChord)` when parsing succeeds; `None` on invalid modifier/key combinations.
///
/// Details:
/// - Recognizes Ctrl/Alt/Shift/Super modifiers in any case.
/// - Normalizes `Shift+Tab` to the dedicated `BackTab` key code and clears modifiers.
/// - With Ctrl or Alt and no Shift, a letter is lowercased, since terminals report
///   `Ctrl+N` as `n` with the Control bit.
/// - A lone `+` is accepted as the plus key.
pub(crate) fn parse_key_chord(text: &str) -> Option<KeyChord> {
    let text = text.trim();
    if text == "+" {
        return Some(KeyChord::plain(KeyCode::Char('+')));
    }
    let mut mods = KeyModifiers::empty();
    let mut key_part: Option<&str> = None;
    for part in text.split('+') {
        let p = part.trim();
        if p.is_empty() {
            continue;
        }
        match p.to_ascii_uppercase().as_str() {
            "CTRL" | "CONTROL" => mods |= KeyModifiers::CONTROL,
            "ALT" => mods |= KeyModifiers::ALT,
            "SHIFT" => mods |= KeyModifiers::SHIFT,
            "SUPER" | "META" | "WIN" => mods |= KeyModifiers::SUPER,
            _ => {
                if key_part.is_some() {
                    return None;
                }
                key_part = Some(p);
            }
        }
    }
    if key_part.is_some_and(|k| k.eq_ignore_ascii_case("tab")) && mods.contains(KeyModifiers::SHIFT)
    {
        return Some(KeyChord::plain(KeyCode::BackTab));
    }
    let mut code = parse_key_identifier(key_part?)?;
    if let KeyCode::Char(ch) = code
        && mods.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
        && !mods.contains(KeyModifiers::SHIFT)
    {
        code = KeyCode::Char(ch.to_ascii_lowercase());
    }
    Some(KeyChord { code, mods })
}

/// What: Parse a boolean setting value.
///
/// Inputs:
/// - `val`: Raw value with comments already stripped.
///
/// Output:
/// - `Some(bool)` for true/false/1/0/yes/no/on/off (any case); `None` otherwise.
pub(crate) fn parse_bool(val: &str) -> Option<bool> {
    match val.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// What: Strip trailing `//` or `#` comments from a value.
///
/// Inputs:
/// - `s`: Raw value text after the `=`.
///
/// Output:
/// - Trimmed value without the comment.
///
/// Details:
/// - A value that starts with `#` keeps it (so `keybind_up = #` binds the hash key);
///   only a later `#` starts a comment.
pub(crate) fn strip_inline_comment(mut s: &str) -> &str {
    if let Some(i) = s.find("//") {
        s = &s[..i];
    }
    let s_trim = s.trim_start();
    if let Some(i_rel) = if let Some(stripped) = s_trim.strip_prefix('#') {
        stripped.find('#').map(|j| j + 1)
    } else {
        s_trim.find('#')
    } {
        return s_trim[..i_rel].trim();
    }
    s_trim.trim()
}
