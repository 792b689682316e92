//! Pacing delays for demo routines.

use std::time::Duration;

/// Waits between demo steps so a human can follow along.
///
/// Pauses are presentation only; no routine depends on them for correctness.
pub trait Pacer {
    /// Block the current thread for roughly `duration`.
    fn pause(&self, duration: Duration);
}

/// Sleeps the calling thread.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadPacer;

impl Pacer for ThreadPacer {
    fn pause(&self, duration: Duration) {
        std::thread::sleep(duration);
    }
}

/// Returns immediately. Used by `--fast`, `pacing = false` and tests.
#[derive(Debug, Clone, Copy, Default)]
pub struct InstantPacer;

impl Pacer for InstantPacer {
    fn pause(&self, _duration: Duration) {}
}

/// What: Pick the pacer for a session.
///
/// Inputs:
/// - `pacing`: Whether pauses are wanted.
///
/// Output:
/// - Boxed `ThreadPacer` when pacing, `InstantPacer` otherwise.
#[must_use]
pub fn pacer_for(pacing: bool) -> Box<dyn Pacer> {
    if pacing {
        Box::new(ThreadPacer)
    } else {
        Box::new(InstantPacer)
    }
}
