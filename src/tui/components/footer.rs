//! Keyboard shortcuts bar component
//!
//! Displays available keyboard shortcuts at the bottom of the screen.

use iocraft::prelude::*;

use super::shortcuts::ShortcutsBuilder;
use crate::tui::theme::theme;

/// A single keyboard shortcut entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shortcut {
    /// The key or key combination (e.g., "q", "Tab")
    pub key: String,
    /// Description of the action (e.g., "Quit", "Switch Tab")
    pub action: String,
}

impl Shortcut {
    pub fn new(key: impl Into<String>, action: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            action: action.into(),
        }
    }
}

/// Props for the Footer component
#[derive(Default, Props)]
pub struct FooterProps {
    pub shortcuts: Vec<Shortcut>,
}

/// Keyboard shortcuts bar at the bottom of the screen
#[component]
pub fn Footer(props: &FooterProps) -> impl Into<AnyElement<'static>> {
    let theme = theme();

    element! {
        View(
            width: 100pct,
            height: 1,
            flex_direction: FlexDirection::Row,
            flex_shrink: 0.0,
            overflow: Overflow::Hidden,
            padding_left: 1,
            padding_right: 1,
            column_gap: 2,
            background_color: theme.navy,
        ) {
            #(props.shortcuts.iter().map(|shortcut| {
                let key = shortcut.key.clone();
                let action = shortcut.action.clone();
                element! {
                    View(flex_direction: FlexDirection::Row) {
                        Text(
                            content: format!("[{}]", key),
                            color: theme.accent,
                            weight: Weight::Bold,
                        )
                        Text(
                            content: format!(" {}", action),
                            color: theme.text,
                        )
                    }
                }
            }))
        }
    }
}

/// Shortcuts for the card grid
pub fn grid_shortcuts() -> Vec<Shortcut> {
    ShortcutsBuilder::new()
        .add("Tab", "Switch Tab")
        .with_grid_navigation()
        .add("Enter", "Details")
        .with_search()
        .add("?", "Help")
        .with_quit()
        .build()
}

/// Shortcuts while a tab has nothing to show
pub fn empty_shortcuts() -> Vec<Shortcut> {
    ShortcutsBuilder::new()
        .add("Tab", "Switch Tab")
        .with_search()
        .add("?", "Help")
        .with_quit()
        .build()
}

/// Shortcuts while records are loading
pub fn loading_shortcuts() -> Vec<Shortcut> {
    ShortcutsBuilder::new().add("C-q", "Quit").build()
}

/// Shortcuts for search mode
pub fn search_shortcuts() -> Vec<Shortcut> {
    ShortcutsBuilder::new()
        .add("Enter", "Apply Search")
        .add("Esc", "Clear & Exit")
        .add("C-q", "Quit")
        .build()
}

/// Shortcuts for the detail modal
pub fn detail_modal_shortcuts() -> Vec<Shortcut> {
    ShortcutsBuilder::new()
        .add("j/k", "Scroll")
        .add("Esc", "Close")
        .build()
}

/// Shortcuts for the help modal
pub fn help_modal_shortcuts() -> Vec<Shortcut> {
    ShortcutsBuilder::new().add("Esc", "Close").build()
}
