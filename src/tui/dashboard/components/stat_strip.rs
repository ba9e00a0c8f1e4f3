//! Stat strip component
//!
//! Two boxed totals under the hero header.

use iocraft::prelude::*;

use crate::tui::dashboard::layout::STATS_HEIGHT;
use crate::tui::theme::theme;

/// Props for the StatStrip component
#[derive(Default, Props)]
pub struct StatStripProps {
    /// (label, value) pairs, one box each
    pub stats: Vec<(String, String)>,
}

#[component]
pub fn StatStrip(props: &StatStripProps) -> impl Into<AnyElement<'static>> {
    let theme = theme();

    element! {
        View(
            width: 100pct,
            height: STATS_HEIGHT as u32,
            flex_direction: FlexDirection::Row,
            flex_shrink: 0.0,
        ) {
            #(props.stats.iter().map(|(label, value)| element! {
                View(
                    width: 50pct,
                    height: 100pct,
                    flex_direction: FlexDirection::Row,
                    border_style: BorderStyle::Round,
                    border_color: theme.border,
                    padding_left: 1,
                    padding_right: 1,
                ) {
                    Text(content: label.clone(), color: theme.text_dimmed)
                    View(flex_grow: 1.0)
                    Text(content: value.clone(), color: theme.accent, weight: Weight::Bold)
                }
            }))
        }
    }
}
