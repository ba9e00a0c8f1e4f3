//! Record detail modal
//!
//! Renders the pre-wrapped [`DetailLine`]s of the selected record inside a
//! scrollable modal box.

use iocraft::prelude::*;

use crate::tui::components::{Clickable, ModalContainer, ModalHeight, ModalOverlay, ModalWidth};
use crate::tui::dashboard::layout::Rect;
use crate::tui::dashboard::model::{DetailLine, DetailViewModel};
use crate::tui::theme::theme;

/// Props for the DetailModal component
#[derive(Default, Props)]
pub struct DetailModalProps {
    pub detail: Option<DetailViewModel>,
    /// Box position, also used for backdrop hit-testing
    pub rect: Option<Rect>,
    pub on_close: Option<Handler<()>>,
    pub on_scroll_up: Option<Handler<()>>,
    pub on_scroll_down: Option<Handler<()>>,
}

fn line_element(line: DetailLine) -> AnyElement<'static> {
    let theme = theme();
    match line {
        DetailLine::Title(text) => element! {
            Text(content: text, color: theme.accent, weight: Weight::Bold)
        }
        .into_any(),
        DetailLine::Subtitle(text) => element! {
            Text(content: text, color: theme.text_dimmed)
        }
        .into_any(),
        DetailLine::Badge { text, positive } => element! {
            Text(
                content: format!("[{text}]"),
                color: if positive { theme.status_active } else { theme.status_inactive },
                weight: Weight::Bold,
            )
        }
        .into_any(),
        DetailLine::Heading(text) => element! {
            Text(content: text, color: theme.accent, weight: Weight::Bold)
        }
        .into_any(),
        DetailLine::Field { label, value } => element! {
            View(flex_direction: FlexDirection::Row) {
                Text(content: format!("{label}: "), color: theme.text_dimmed)
                Text(content: value, color: theme.text, wrap: TextWrap::NoWrap)
            }
        }
        .into_any(),
        DetailLine::Stats(stats) => element! {
            View(flex_direction: FlexDirection::Row, column_gap: 3) {
                #(stats.into_iter().map(|(label, value)| element! {
                    View(flex_direction: FlexDirection::Row) {
                        Text(content: format!("{label} "), color: theme.text_dimmed)
                        Text(content: value, color: theme.accent, weight: Weight::Bold)
                    }
                }))
            }
        }
        .into_any(),
        DetailLine::Text(text) => element! {
            Text(content: text, color: theme.text, wrap: TextWrap::NoWrap)
        }
        .into_any(),
        DetailLine::Blank => element! {
            Text(content: "")
        }
        .into_any(),
        DetailLine::Footer(text) => element! {
            Text(content: text, color: theme.text_dimmed)
        }
        .into_any(),
    }
}

#[component]
pub fn DetailModal(props: &DetailModalProps) -> impl Into<AnyElement<'static>> {
    let Some(detail) = props.detail.clone() else {
        return element!(View).into_any();
    };
    let rect = props.rect.unwrap_or(Rect {
        x: 0,
        y: 0,
        width: 60,
        height: 20,
    });

    let total = detail.lines.len();
    let start = detail.scroll.min(total);
    let end = (start + detail.visible_lines).min(total);
    let footer = if total > detail.visible_lines {
        format!("Lines {}-{} of {}  [j/k] Scroll  [Esc] Close", start + 1, end, total)
    } else {
        "[Esc] Close".to_string()
    };

    let lines: Vec<AnyElement<'static>> = detail.lines[start..end]
        .iter()
        .cloned()
        .map(line_element)
        .collect();

    element! {
        ModalOverlay {
            ModalContainer(
                width: Some(ModalWidth::Fixed(rect.width as u32)),
                height: Some(ModalHeight::Fixed(rect.height as u32)),
                title: Some(detail.title.to_string()),
                on_close: props.on_close.clone(),
                footer_text: Some(footer),
            ) {
                Clickable(
                    on_scroll_up: props.on_scroll_up.clone(),
                    on_scroll_down: props.on_scroll_down.clone(),
                ) {
                    View(width: 100pct, height: 100pct, flex_direction: FlexDirection::Column) {
                        #(lines)
                    }
                }
            }
        }
    }
    .into_any()
}
