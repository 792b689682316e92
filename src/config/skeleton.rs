use std::fs;
use std::io;
use std::path::Path;

/// Skeleton settings file content with default values.
pub const SETTINGS_SKELETON_CONTENT: &str = "# termtour settings\n\
#\n\
# Format: key = value\n\
# Lines starting with # or // are comments.\n\
#\n\
#-----------------------------------------------------------------------------------------------------------------------\n\
#\n\
# Window title set while the tour runs, and the title written back on exit.\n\
window_title = termtour\n\
restore_title =\n\
#\n\
# Pause between demo steps. Set pacing = false to run the demos back to back.\n\
pacing = true\n\
short_pause_ms = 1000\n\
long_pause_ms = 2000\n\
#\n\
# How many events the input and mouse demos show before returning on their own.\n\
input_demo_max_keys = 10\n\
mouse_demo_max_events = 20\n\
#\n\
# Emit colors and text attributes. NO_COLOR in the environment also disables them.\n\
color = true\n\
#\n\
# Extra menu key bindings. The defaults (arrows, k/j, Enter, q/Q) always stay active.\n\
# Repeat a line to add several chords, e.g. keybind_up = Ctrl+P\n\
# keybind_up = w\n\
# keybind_down = s\n\
# keybind_select = Space\n\
# keybind_quit = Esc\n";

/// What: Write the skeleton settings file when no file exists at `path`.
///
/// Inputs:
/// - `path`: Target settings file path.
///
/// Output:
/// - `Ok(true)` when the skeleton was written, `Ok(false)` when a non-empty file already exists.
///
/// # Errors
/// - Propagates directory creation and write failures.
pub fn write_settings_skeleton(path: &Path) -> io::Result<bool> {
    let exists_non_empty = fs::metadata(path).map(|m| m.len() > 0).unwrap_or(false);
    if exists_non_empty {
        return Ok(false);
    }
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)?;
    }
    fs::write(path, SETTINGS_SKELETON_CONTENT)?;
    Ok(true)
}
