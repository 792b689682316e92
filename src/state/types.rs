//! Core value types used by termtour state.

/// Identifier of a menu entry and the routine it is bound to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DemoId {
    /// Named, RGB and indexed colors plus text attributes.
    Colors,
    /// Absolute cursor placement and visibility.
    Cursor,
    /// Size query, window title and alternate screen buffer.
    Terminal,
    /// Raw keyboard input echo.
    Input,
    /// Mouse event tracking.
    Mouse,
    /// Leave the application.
    Exit,
}

impl DemoId {
    /// Return the short name used on the command line and in logs.
    ///
    /// Inputs: none
    ///
    /// Output: Static name string.
    #[must_use]
    pub const fn as_name(&self) -> &'static str {
        match self {
            Self::Colors => "colors",
            Self::Cursor => "cursor",
            Self::Terminal => "terminal",
            Self::Input => "input",
            Self::Mouse => "mouse",
            Self::Exit => "exit",
        }
    }

    /// Parse a demo identifier from its short name or an alias.
    ///
    /// Inputs: `s` name string (case-insensitive).
    ///
    /// Output: `Some(DemoId)` on recognized value; `None` otherwise.
    #[must_use]
    pub fn from_name(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "colors" | "colours" | "color" | "style" => Some(Self::Colors),
            "cursor" => Some(Self::Cursor),
            "terminal" | "screen" => Some(Self::Terminal),
            "input" | "keyboard" | "keys" => Some(Self::Input),
            "mouse" => Some(Self::Mouse),
            "exit" | "quit" => Some(Self::Exit),
            _ => None,
        }
    }
}

/// A single static menu entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuItem {
    /// Label rendered in the menu.
    pub label: &'static str,
    /// Routine bound to the entry.
    pub id: DemoId,
}

/// The fixed, ordered menu.
pub const MENU_ITEMS: [MenuItem; 6] = [
    MenuItem {
        label: "Colors & styles",
        id: DemoId::Colors,
    },
    MenuItem {
        label: "Cursor movement",
        id: DemoId::Cursor,
    },
    MenuItem {
        label: "Terminal control",
        id: DemoId::Terminal,
    },
    MenuItem {
        label: "Keyboard input",
        id: DemoId::Input,
    },
    MenuItem {
        label: "Mouse tracking",
        id: DemoId::Mouse,
    },
    MenuItem {
        label: "Exit",
        id: DemoId::Exit,
    },
];

/// Navigation direction within the menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Towards index 0.
    Up,
    /// Towards the last index.
    Down,
}
