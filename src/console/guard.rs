use std::io;
use std::ops::{Deref, DerefMut};

use super::Console;

/// Scoped raw-mode (and optionally mouse-tracking) acquisition.
///
/// Enables the modes on construction and disables them in `Drop`, so every
/// exit path out of an input-reading block releases the terminal, including
/// early returns and `?` propagation. The console is reachable through
/// `Deref`/`DerefMut` while the guard lives.
pub struct InputModeGuard<'a, C: Console + ?Sized> {
    /// Console the modes were enabled on.
    console: &'a mut C,
    /// Whether mouse tracking was enabled and must be disabled.
    mouse: bool,
}

impl<'a, C: Console + ?Sized> InputModeGuard<'a, C> {
    /// What: Enable raw mode for the lifetime of the guard.
    ///
    /// Inputs:
    /// - `console`: Console to switch.
    ///
    /// Output:
    /// - Guard that disables raw mode when dropped.
    ///
    /// # Errors
    /// - Returns the error from enabling raw mode; nothing is left enabled in that case.
    pub fn raw(console: &'a mut C) -> io::Result<Self> {
        console.set_raw_mode(true)?;
        Ok(Self {
            console,
            mouse: false,
        })
    }

    /// What: Enable raw mode and mouse tracking for the lifetime of the guard.
    ///
    /// Inputs:
    /// - `console`: Console to switch.
    ///
    /// Output:
    /// - Guard that disables mouse tracking, then raw mode, when dropped.
    ///
    /// # Errors
    /// - Returns the error from either switch; raw mode is released again if mouse
    ///   tracking fails to start.
    pub fn raw_with_mouse(console: &'a mut C) -> io::Result<Self> {
        let mut guard = Self::raw(console)?;
        guard.console.set_mouse_tracking(true)?;
        guard.mouse = true;
        Ok(guard)
    }
}

impl<C: Console + ?Sized> Deref for InputModeGuard<'_, C> {
    type Target = C;

    fn deref(&self) -> &C {
        self.console
    }
}

impl<C: Console + ?Sized> DerefMut for InputModeGuard<'_, C> {
    fn deref_mut(&mut self) -> &mut C {
        self.console
    }
}

impl<C: Console + ?Sized> Drop for InputModeGuard<'_, C> {
    fn drop(&mut self) {
        if self.mouse
            && let Err(e) = self.console.set_mouse_tracking(false)
        {
            tracing::warn!(error = %e, "[Console] failed to disable mouse tracking");
        }
        if let Err(e) = self.console.set_raw_mode(false) {
            tracing::warn!(error = %e, "[Console] failed to disable raw mode");
        }
    }
}
