//! Modal container component
//!
//! Standard modal box: title row with a close control, a content area and an
//! optional footer line.

use iocraft::prelude::*;

use super::Clickable;
use crate::tui::theme::theme;

/// Modal width configuration
#[derive(Clone)]
pub enum ModalWidth {
    Fixed(u32),
    Percent(u32),
}

impl Default for ModalWidth {
    fn default() -> Self {
        Self::Fixed(60)
    }
}

/// Modal height configuration
#[derive(Clone, Default)]
pub enum ModalHeight {
    #[default]
    Auto,
    Fixed(u32),
    Percent(u32),
}

/// Props for the ModalContainer component
#[derive(Default, Props)]
pub struct ModalContainerProps<'a> {
    pub width: Option<ModalWidth>,
    pub height: Option<ModalHeight>,

    /// Border color, the accent color when unset
    pub border_color: Option<Color>,

    pub title: Option<String>,
    /// Renders a clickable `[x]` in the title row
    pub on_close: Option<Handler<()>>,

    pub footer_text: Option<String>,

    pub children: Vec<AnyElement<'a>>,
}

#[component]
pub fn ModalContainer<'a>(props: &mut ModalContainerProps<'a>) -> impl Into<AnyElement<'a>> {
    let theme = theme();

    let border_color = props.border_color.unwrap_or(theme.accent);
    let width = props.width.clone().unwrap_or_default();
    let height = props.height.clone().unwrap_or_default();
    let title = props.title.clone();
    let on_close = props.on_close.clone();
    let footer = props.footer_text.clone();

    element! {
        View(
            width: match width {
                ModalWidth::Fixed(n) => Size::Length(n),
                ModalWidth::Percent(n) => Size::Percent(n as f32),
            },
            height: match height {
                ModalHeight::Auto => Size::Auto,
                ModalHeight::Fixed(n) => Size::Length(n),
                ModalHeight::Percent(n) => Size::Percent(n as f32),
            },
            background_color: theme.navy,
            border_style: BorderStyle::Round,
            border_color: border_color,
            padding_left: 1,
            padding_right: 1,
            flex_direction: FlexDirection::Column,
        ) {
            #(title.map(|title| element! {
                View(
                    width: 100pct,
                    height: 2,
                    flex_shrink: 0.0,
                    border_edges: Edges::Bottom,
                    border_style: BorderStyle::Single,
                    border_color: theme.border,
                    flex_direction: FlexDirection::Row,
                ) {
                    Text(content: title, color: theme.accent, weight: Weight::Bold)
                    View(flex_grow: 1.0)
                    #(on_close.clone().map(|on_close| element! {
                        Clickable(on_click: Some(on_close)) {
                            Text(content: "[x]", color: theme.text_dimmed, weight: Weight::Bold)
                        }
                    }))
                }
            }))

            View(
                flex_grow: 1.0,
                width: 100pct,
                flex_direction: FlexDirection::Column,
                overflow: Overflow::Hidden,
            ) {
                #(std::mem::take(&mut props.children))
            }

            #(footer.map(|footer| element! {
                View(
                    width: 100pct,
                    height: 2,
                    flex_shrink: 0.0,
                    border_edges: Edges::Top,
                    border_style: BorderStyle::Single,
                    border_color: theme.border,
                ) {
                    Text(content: footer, color: theme.text_dimmed)
                }
            }))
        }
    }
}
