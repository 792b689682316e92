//! Menu and application state.

pub mod app_state;
pub mod types;

pub use app_state::{AppState, MenuState};
pub use types::{DemoId, Direction, MENU_ITEMS, MenuItem};
