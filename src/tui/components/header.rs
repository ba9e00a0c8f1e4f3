//! Hero header component
//!
//! Two-line title block at the top of the dashboard.

use iocraft::prelude::*;

use crate::tui::theme::theme;

/// Props for the Header component
#[derive(Default, Props)]
pub struct HeaderProps {
    pub title: String,
    pub subtitle: Option<String>,
    /// Right-aligned text on the title line
    pub status: Option<String>,
}

#[component]
pub fn Header(props: &HeaderProps) -> impl Into<AnyElement<'static>> {
    let theme = theme();

    element! {
        View(
            width: 100pct,
            height: 3,
            flex_direction: FlexDirection::Column,
            flex_shrink: 0.0,
            padding_left: 1,
            padding_right: 1,
            background_color: theme.navy,
        ) {
            View(flex_direction: FlexDirection::Row, height: 1) {
                Text(content: props.title.clone(), color: theme.accent, weight: Weight::Bold)
                View(flex_grow: 1.0)
                #(props.status.clone().map(|status| element! {
                    Text(content: status, color: theme.text_dimmed)
                }))
            }
            #(props.subtitle.clone().map(|subtitle| element! {
                View(height: 1) {
                    Text(content: subtitle, color: theme.text)
                }
            }))
        }
    }
}
