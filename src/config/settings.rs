use std::fs;
use std::path::Path;

use tracing::{debug, info, warn};

use super::parsing::{parse_bool, parse_key_chord, strip_inline_comment};
use super::paths::{default_settings_path, resolve_settings_config_path};
use super::skeleton::write_settings_skeleton;
use super::types::{KeyChord, Settings};

/// What: Load settings from an explicit path or the HOME/XDG config location.
///
/// Inputs:
/// - `override_path`: Path given on the command line, if any.
///
/// Output:
/// - A `Settings` value; falls back to `Settings::default()` when the file is missing or unreadable.
///
/// Details:
/// - Without an override and without an existing file, a commented skeleton is written to
///   the default location so users can discover the available keys.
/// - A missing override path is reported and never created.
#[must_use]
pub fn load_settings(override_path: Option<&Path>) -> Settings {
    let mut settings = Settings::default();
    let path = if let Some(p) = override_path {
        if !p.is_file() {
            warn!(path = %p.display(), "[Config] settings file not found; using defaults");
            return settings;
        }
        p.to_path_buf()
    } else if let Some(p) = resolve_settings_config_path() {
        p
    } else {
        let target = default_settings_path();
        match write_settings_skeleton(&target) {
            Ok(true) => info!(path = %target.display(), "[Config] wrote settings skeleton"),
            Ok(false) => {}
            Err(e) => debug!(error = %e, "[Config] could not write settings skeleton"),
        }
        return settings;
    };

    match fs::read_to_string(&path) {
        Ok(content) => {
            parse_settings(&content, &mut settings);
            debug!(path = %path.display(), "[Config] settings loaded");
        }
        Err(e) => warn!(path = %path.display(), error = %e, "[Config] failed to read settings"),
    }
    settings
}

/// What: Add a parsed key chord to a keymap field, avoiding duplicates.
///
/// Inputs:
/// - `chord`: Optional parsed key chord.
/// - `target`: Mutable reference to the target vector in the keymap.
///
/// Output:
/// - None (modifies `target` in-place).
fn assign_keybind_with_duplicate_check(chord: Option<KeyChord>, target: &mut Vec<KeyChord>) {
    if let Some(ch) = chord
        && target
            .iter()
            .all(|c| c.code != ch.code || c.mods != ch.mods)
    {
        target.push(ch);
    }
}

/// What: Parse a positive count, rejecting zero.
fn parse_count(val: &str) -> Option<usize> {
    val.parse::<usize>().ok().filter(|n| *n > 0)
}

/// What: Parse `settings.conf` content into `settings`.
///
/// Inputs:
/// - `content`: File content.
/// - `settings`: Mutable settings to populate; unspecified keys keep their current values.
///
/// Output:
/// - None (modifies `settings` in-place).
///
/// Details:
/// - Keys are normalized to lowercase with `.`, `-` and spaces mapped to `_`.
/// - Unknown keys and unparsable values are skipped with a debug log.
/// - `keybind_*` entries add chords to the default bindings.
pub fn parse_settings(content: &str, settings: &mut Settings) {
    for line in content.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') || trimmed.starts_with("//") {
            continue;
        }
        let Some((raw_key, val_raw)) = trimmed.split_once('=') else {
            continue;
        };
        let key = raw_key.trim().to_lowercase().replace(['.', '-', ' '], "_");
        let val = strip_inline_comment(val_raw);
        let handled = match key.as_str() {
            "window_title" | "title" => {
                settings.window_title = val.to_string();
                true
            }
            "restore_title" => {
                settings.restore_title = val.to_string();
                true
            }
            "pacing" | "pause" => parse_bool(val).map(|v| settings.pacing = v).is_some(),
            "short_pause_ms" => val
                .parse::<u64>()
                .map(|v| settings.short_pause_ms = v)
                .is_ok(),
            "long_pause_ms" => val
                .parse::<u64>()
                .map(|v| settings.long_pause_ms = v)
                .is_ok(),
            "input_demo_max_keys" => parse_count(val)
                .map(|v| settings.input_demo_max_keys = v)
                .is_some(),
            "mouse_demo_max_events" => parse_count(val)
                .map(|v| settings.mouse_demo_max_events = v)
                .is_some(),
            "color" | "colour" => parse_bool(val).map(|v| settings.color = v).is_some(),
            "keybind_up" | "keybind_move_up" => {
                assign_keybind_with_duplicate_check(parse_key_chord(val), &mut settings.keymap.up);
                true
            }
            "keybind_down" | "keybind_move_down" => {
                assign_keybind_with_duplicate_check(
                    parse_key_chord(val),
                    &mut settings.keymap.down,
                );
                true
            }
            "keybind_select" | "keybind_confirm" => {
                assign_keybind_with_duplicate_check(
                    parse_key_chord(val),
                    &mut settings.keymap.select,
                );
                true
            }
            "keybind_quit" | "keybind_exit" => {
                assign_keybind_with_duplicate_check(
                    parse_key_chord(val),
                    &mut settings.keymap.quit,
                );
                true
            }
            _ => false,
        };
        if !handled {
            debug!(key = %key, value = %val, "[Config] ignoring setting");
        }
    }
}
