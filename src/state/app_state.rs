//! Central application state for the menu loop.

use crate::events::Action;
use crate::state::types::{DemoId, Direction, MENU_ITEMS, MenuItem};

/// Selection over the fixed menu.
///
/// The index is always within `0..MENU_ITEMS.len()`; navigation clamps at
/// both ends instead of wrapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MenuState {
    /// Index of the highlighted entry.
    selected: usize,
}

impl MenuState {
    /// What: Create a menu state with the first entry selected.
    ///
    /// Inputs: none
    ///
    /// Output: `MenuState` at index 0.
    #[must_use]
    pub const fn new() -> Self {
        Self { selected: 0 }
    }

    /// What: Move the selection one step, clamping at the ends.
    ///
    /// Inputs:
    /// - `direction`: `Up` moves towards index 0, `Down` towards the last entry.
    ///
    /// Output:
    /// - None (mutates the selection in place).
    pub const fn advance(&mut self, direction: Direction) {
        match direction {
            Direction::Up => self.selected = self.selected.saturating_sub(1),
            Direction::Down => {
                if self.selected + 1 < MENU_ITEMS.len() {
                    self.selected += 1;
                }
            }
        }
    }

    /// Index of the highlighted entry.
    #[must_use]
    pub const fn selected(&self) -> usize {
        self.selected
    }

    /// The highlighted entry.
    #[must_use]
    pub const fn current(&self) -> MenuItem {
        MENU_ITEMS[self.selected]
    }

    /// All entries in display order.
    #[must_use]
    pub fn items(&self) -> &'static [MenuItem] {
        &MENU_ITEMS
    }
}

/// Application state owned by the menu loop.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Menu selection.
    pub menu: MenuState,
    /// Cleared once on quit or on selecting Exit; never set again.
    running: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            menu: MenuState::new(),
            running: true,
        }
    }
}

impl AppState {
    /// Whether the loop should keep going.
    #[must_use]
    pub const fn is_running(&self) -> bool {
        self.running
    }

    /// Enter the terminal Stopped state. Calling it again has no effect.
    pub fn stop(&mut self) {
        if self.running {
            tracing::debug!("[State] running flag cleared");
        }
        self.running = false;
    }

    /// What: Apply one routed action to the state.
    ///
    /// Inputs:
    /// - `action`: Result of routing one input token.
    ///
    /// Output:
    /// - `Some(DemoId)` when the action selected an entry that must be dispatched;
    ///   `None` otherwise.
    ///
    /// Details:
    /// - Navigation mutates the menu; `Quit` stops the application.
    /// - `Select` returns the highlighted id, including `Exit`, so that the
    ///   dispatcher owns the stop transition for that entry.
    /// - Actions are ignored once stopped.
    pub fn apply(&mut self, action: Action) -> Option<DemoId> {
        if !self.running {
            return None;
        }
        match action {
            Action::NavigateUp => self.menu.advance(Direction::Up),
            Action::NavigateDown => self.menu.advance(Direction::Down),
            Action::Select => return Some(self.menu.current().id),
            Action::Quit => self.stop(),
            Action::Ignore => {}
        }
        None
    }
}
