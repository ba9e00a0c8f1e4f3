//! Project card component for the card grid

use iocraft::prelude::*;

use crate::tui::dashboard::layout::{PROJECT_CARD_HEIGHT, PROJECT_DETAIL_LINES};
use crate::tui::dashboard::model::ProjectCard;
use crate::tui::theme::theme;

/// Props for the ProjectCardView component
#[derive(Default, Props)]
pub struct ProjectCardViewProps {
    pub card: Option<ProjectCard>,
    pub is_selected: bool,
    /// Just scrolled into view
    pub is_fresh: bool,
    pub width: u16,
}

/// Fixed-height project card; details are pre-clamped by the view model
#[component]
pub fn ProjectCardView(props: &ProjectCardViewProps) -> impl Into<AnyElement<'static>> {
    let theme = theme();
    let Some(card) = props.card.clone() else {
        return element!(View).into_any();
    };

    let border_color = if props.is_selected {
        theme.border_focused
    } else if props.is_fresh {
        theme.border_fresh
    } else {
        theme.border
    };
    let indicator = if props.is_selected { "> " } else { "" };

    element! {
        View(
            width: props.width as u32,
            height: PROJECT_CARD_HEIGHT as u32,
            flex_direction: FlexDirection::Column,
            border_style: BorderStyle::Round,
            border_color: border_color,
            padding_left: 1,
            padding_right: 1,
            overflow: Overflow::Hidden,
        ) {
            View(flex_direction: FlexDirection::Row, height: 1, column_gap: 1) {
                View(flex_grow: 1.0, overflow: Overflow::Hidden) {
                    Text(
                        content: format!("{indicator}{}", card.name),
                        color: theme.accent,
                        weight: Weight::Bold,
                        wrap: TextWrap::NoWrap,
                    )
                }
                Text(content: format!("[{}]", card.project_type), color: theme.tag)
            }
            Text(content: card.email, color: theme.text, wrap: TextWrap::NoWrap)
            Text(content: card.phone, color: theme.text, wrap: TextWrap::NoWrap)
            View(height: PROJECT_DETAIL_LINES as u32) {
                Text(content: card.details, color: theme.text_dimmed)
            }
            View(flex_direction: FlexDirection::Row, height: 1) {
                Text(content: card.created, color: theme.text_dimmed)
                View(flex_grow: 1.0)
                Text(content: "Details", color: theme.accent)
            }
        }
    }
    .into_any()
}
