//! Settings, key bindings and config/log paths for termtour.

/// Configuration parsing utilities.
mod parsing;
/// Path resolution for config directories.
mod paths;
/// Settings loading.
mod settings;
/// Default settings file content.
mod skeleton;
/// Settings and key binding types.
mod types;

pub use paths::{config_dir, default_settings_path, logs_dir};
pub use settings::{load_settings, parse_settings};
pub use skeleton::{SETTINGS_SKELETON_CONTENT, write_settings_skeleton};
pub use types::{KeyChord, KeyMap, Settings};

#[cfg(test)]
static TEST_MUTEX: std::sync::OnceLock<std::sync::Mutex<()>> = std::sync::OnceLock::new();

#[cfg(test)]
/// What: Provide a process-wide mutex to serialize environment-mutating tests in this module.
///
/// Inputs:
/// - None
///
/// Output:
/// - Shared reference to a lazily-initialized `Mutex<()>`.
pub(crate) fn test_mutex() -> &'static std::sync::Mutex<()> {
    TEST_MUTEX.get_or_init(|| std::sync::Mutex::new(()))
}
