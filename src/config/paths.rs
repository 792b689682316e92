use std::env;
use std::path::{Path, PathBuf};

/// Name of the settings file inside the config directory.
pub(crate) const SETTINGS_FILE_NAME: &str = "settings.conf";

/// Determine the existing settings file, searching HOME first, then `XDG_CONFIG_HOME`.
pub(crate) fn resolve_settings_config_path() -> Option<PathBuf> {
    let home = env::var("HOME").ok();
    let xdg_config = env::var("XDG_CONFIG_HOME").ok();
    let mut candidates: Vec<PathBuf> = Vec::new();
    if let Some(h) = home.as_deref() {
        candidates.push(
            Path::new(h)
                .join(".config")
                .join("termtour")
                .join(SETTINGS_FILE_NAME),
        );
    }
    if let Some(xdg) = xdg_config.as_deref().filter(|x| !x.trim().is_empty()) {
        candidates.push(Path::new(xdg).join("termtour").join(SETTINGS_FILE_NAME));
    }
    candidates.into_iter().find(|p| p.is_file())
}

/// Resolve an XDG base directory from environment or default to `$HOME` + segments.
///
/// Inputs:
/// - `var`: Environment variable to check (e.g., `XDG_CONFIG_HOME`).
/// - `home_default`: Fallback path segments relative to `$HOME` if `var` is unset/empty.
///
/// Output: Resolved base directory path.
fn xdg_base_dir(var: &str, home_default: &[&str]) -> PathBuf {
    if let Ok(p) = env::var(var)
        && !p.trim().is_empty()
    {
        return PathBuf::from(p);
    }
    let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
    let mut base = PathBuf::from(home);
    for seg in home_default {
        base = base.join(seg);
    }
    base
}

/// Return `$HOME/.config/termtour`, ensuring it exists.
///
/// Output: `Some(PathBuf)` when HOME is set and the directory can be created; `None` otherwise.
fn home_config_dir() -> Option<PathBuf> {
    if let Ok(home) = env::var("HOME") {
        let dir = Path::new(&home).join(".config").join("termtour");
        if std::fs::create_dir_all(&dir).is_ok() {
            return Some(dir);
        }
    }
    None
}

/// Config directory for termtour (ensured to exist).
#[must_use]
pub fn config_dir() -> PathBuf {
    if let Some(dir) = home_config_dir() {
        return dir;
    }
    let dir = xdg_base_dir("XDG_CONFIG_HOME", &[".config"]).join("termtour");
    let _ = std::fs::create_dir_all(&dir);
    dir
}

/// Logs directory under config: "$HOME/.config/termtour/logs" (ensured to exist).
#[must_use]
pub fn logs_dir() -> PathBuf {
    let dir = config_dir().join("logs");
    let _ = std::fs::create_dir_all(&dir);
    dir
}

/// Default location for a settings file when none exists yet.
#[must_use]
pub fn default_settings_path() -> PathBuf {
    config_dir().join(SETTINGS_FILE_NAME)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// What: Settings resolution and directory helpers follow HOME
    ///
    /// - Input: HOME pointed at a temp dir with and without a settings file
    /// - Output: None before the file exists; the HOME path afterwards; dirs are created
    fn paths_follow_home_and_create_dirs() {
        let _guard = crate::config::test_mutex()
            .lock()
            .expect("config test mutex poisoned");
        let tmp = tempfile::tempdir().expect("tempdir");
        let orig_home = env::var_os("HOME");
        let orig_xdg = env::var_os("XDG_CONFIG_HOME");
        unsafe {
            env::set_var("HOME", tmp.path());
            env::remove_var("XDG_CONFIG_HOME");
        }

        assert_eq!(resolve_settings_config_path(), None);
        let logs = logs_dir();
        assert!(logs.is_dir());
        assert!(logs.ends_with(".config/termtour/logs"));
        let settings_path = default_settings_path();
        std::fs::write(&settings_path, "pacing = false\n").expect("write settings");
        assert_eq!(resolve_settings_config_path(), Some(settings_path));

        unsafe {
            match orig_home {
                Some(v) => env::set_var("HOME", v),
                None => env::remove_var("HOME"),
            }
            if let Some(v) = orig_xdg {
                env::set_var("XDG_CONFIG_HOME", v);
            }
        }
    }
}
