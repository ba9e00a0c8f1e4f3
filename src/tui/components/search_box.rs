//! Search input component

use iocraft::prelude::*;

use crate::tui::theme::theme;

/// Props for the SearchBox component
#[derive(Default, Props)]
pub struct SearchBoxProps {
    /// State for the search query value
    pub value: Option<State<String>>,
    /// Whether the search box has focus
    pub has_focus: bool,
    /// Shown in place of an empty, unfocused query
    pub placeholder: Option<String>,
}

/// Bordered search input with a `/` prefix
#[component]
pub fn SearchBox(props: &SearchBoxProps) -> impl Into<AnyElement<'static>> {
    let theme = theme();
    let border_color = if props.has_focus {
        theme.border_focused
    } else {
        theme.border
    };

    let Some(mut value) = props.value else {
        return element! {
            View(
                border_style: BorderStyle::Round,
                border_color: border_color,
                padding_left: 1,
                height: 3,
            ) {
                Text(content: "No value state provided", color: theme.text_dimmed)
            }
        };
    };

    let show_placeholder = !props.has_focus && value.read().is_empty();
    let placeholder = props.placeholder.clone().unwrap_or_default();

    element! {
        View(
            width: 100pct,
            flex_direction: FlexDirection::Row,
            flex_shrink: 0.0,
            border_style: BorderStyle::Round,
            border_color: border_color,
            padding_left: 1,
            padding_right: 1,
            height: 3,
        ) {
            View(margin_right: 1) {
                Text(
                    content: "/",
                    color: if props.has_focus { theme.accent } else { theme.text_dimmed },
                )
            }
            View(flex_grow: 1.0) {
                #(Some(if show_placeholder {
                    element! {
                        Text(content: placeholder, color: theme.text_dimmed)
                    }.into_any()
                } else {
                    element! {
                        TextInput(
                            value: value.to_string(),
                            has_focus: props.has_focus,
                            on_change: move |new_value| value.set(new_value),
                            color: theme.text,
                        )
                    }.into_any()
                }))
            }
        }
    }
}
