//! Help modal for displaying keyboard shortcuts

use iocraft::prelude::*;

use crate::tui::components::{ModalContainer, ModalHeight, ModalOverlay, ModalWidth};
use crate::tui::theme::theme;

use super::layout::Rect;

/// Props for the HelpModal component
#[derive(Default, Props)]
pub struct HelpModalProps {
    pub rect: Option<Rect>,
    pub on_close: Option<Handler<()>>,
}

/// Shortcuts grouped by category
const HELP_SECTIONS: &[(&str, &[(&str, &str)])] = &[
    (
        "Tabs",
        &[
            ("Tab", "Switch Companies / Projects"),
            ("1 / 2", "Companies / Projects"),
        ],
    ),
    (
        "Grid",
        &[
            ("h j k l / arrows", "Move between cards"),
            ("g / G", "First / last card"),
            ("PgUp / PgDn", "Page up / down"),
            ("Enter / click", "Open details"),
        ],
    ),
    (
        "Search",
        &[
            ("/", "Focus search box"),
            ("Enter", "Keep query"),
            ("Esc", "Clear query"),
        ],
    ),
    (
        "Details",
        &[("j / k / wheel", "Scroll"), ("Esc q x / click outside", "Close")],
    ),
    ("General", &[("?", "Show this help"), ("q / Ctrl+q", "Quit")]),
];

/// Help text, one entry per line
pub fn build_help_lines() -> Vec<String> {
    let mut lines = Vec::new();

    for (category, items) in HELP_SECTIONS {
        if !lines.is_empty() {
            lines.push(String::new());
        }
        lines.push(format!("{category}:"));
        for (key, description) in *items {
            lines.push(format!("  {key:<24} {description}"));
        }
    }

    lines
}

#[component]
pub fn HelpModal(props: &HelpModalProps) -> impl Into<AnyElement<'static>> {
    let theme = theme();
    let rect = props.rect.unwrap_or(Rect {
        x: 0,
        y: 0,
        width: 60,
        height: 22,
    });

    element! {
        ModalOverlay {
            ModalContainer(
                width: Some(ModalWidth::Fixed(rect.width as u32)),
                height: Some(ModalHeight::Fixed(rect.height as u32)),
                title: Some("Keyboard Shortcuts".to_string()),
                on_close: props.on_close.clone(),
                footer_text: Some("[Esc] Close".to_string()),
            ) {
                #(build_help_lines().into_iter().map(|line| element! {
                    Text(content: line, color: theme.text, wrap: TextWrap::NoWrap)
                }))
            }
        }
    }
}
