//! Menu rendering.

use ratatui::{
    Frame,
    layout::{Constraint, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, ListState, Paragraph},
};

use crate::config::{KeyChord, KeyMap};
use crate::state::MenuState;

/// Marker drawn in front of the highlighted entry.
pub const SELECTION_MARKER: &str = "▶ ";

/// What: Build the key hint shown under the menu from the active bindings.
///
/// Inputs:
/// - `keymap`: Active key bindings.
///
/// Output:
/// - One line such as `↑/k up  ↓/j down  Enter select  q/Q quit`.
///
/// Details:
/// - Raw carriage-return and line-feed chords share the `Enter` label and are shown once.
#[must_use]
pub fn hint_line(keymap: &KeyMap) -> String {
    let labels = |chords: &[KeyChord]| {
        let mut out: Vec<String> = Vec::new();
        for label in chords.iter().map(KeyChord::label) {
            if !out.contains(&label) {
                out.push(label);
            }
        }
        out.join("/")
    };
    format!(
        "{} up  {} down  {} select  {} quit",
        labels(&keymap.up),
        labels(&keymap.down),
        labels(&keymap.select),
        labels(&keymap.quit)
    )
}

/// What: Render the demo menu into a frame.
///
/// Inputs:
/// - `f`: Frame to draw into.
/// - `menu`: Menu state whose selection is highlighted.
/// - `hint`: Key hint line shown at the bottom.
///
/// Output:
/// - None (draws the header, the bordered list with a marker on the selection, and the hint).
pub fn render_menu(f: &mut Frame, menu: &MenuState, hint: &str) {
    let list_height = u16::try_from(menu.items().len()).unwrap_or(u16::MAX) + 2;
    let chunks = Layout::vertical([
        Constraint::Length(2),
        Constraint::Length(list_height),
        Constraint::Min(0),
        Constraint::Length(1),
    ])
    .split(f.area());

    let header = Paragraph::new(Line::from(vec![
        Span::styled(
            "termtour",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("  a tour of what your terminal can do"),
    ]));
    f.render_widget(header, chunks[0]);

    let items: Vec<ListItem> = menu
        .items()
        .iter()
        .map(|item| ListItem::new(item.label))
        .collect();
    let list = List::new(items)
        .block(
            Block::default()
                .title(" Demos ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(Color::DarkGray)),
        )
        .highlight_style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol(SELECTION_MARKER);
    let mut state = ListState::default();
    state.select(Some(menu.selected()));
    f.render_stateful_widget(list, chunks[1], &mut state);

    let footer = Paragraph::new(hint).style(Style::default().fg(Color::DarkGray));
    f.render_widget(footer, chunks[3]);
}
