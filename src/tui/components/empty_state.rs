//! Empty state component
//!
//! Centered message shown while records load or when the active tab has
//! nothing to show.

use iocraft::prelude::*;

use crate::tui::theme::theme;

/// Type of empty state to display
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EmptyStateKind {
    /// Records are being fetched
    #[default]
    Loading,
    /// The companies tab has no matching records
    NoCompanies,
    /// The projects tab has no matching records
    NoProjects,
}

impl EmptyStateKind {
    /// (icon, title, hint)
    pub fn content(self) -> (&'static str, &'static str, &'static str) {
        match self {
            EmptyStateKind::Loading => ("~", "Loading data...", ""),
            EmptyStateKind::NoCompanies => (
                "?",
                "No Companies Found",
                "Try adjusting your search criteria",
            ),
            EmptyStateKind::NoProjects => {
                ("?", "No Projects Found", "Try adjusting your search criteria")
            }
        }
    }
}

/// Props for the EmptyState component
#[derive(Default, Props)]
pub struct EmptyStateProps {
    pub kind: EmptyStateKind,
    /// Current search query, echoed under the title
    pub search_query: Option<String>,
}

#[component]
pub fn EmptyState(props: &EmptyStateProps) -> impl Into<AnyElement<'static>> {
    let theme = theme();
    let (icon, title, hint) = props.kind.content();
    let is_loading = props.kind == EmptyStateKind::Loading;

    element! {
        View(
            width: 100pct,
            height: 100pct,
            flex_direction: FlexDirection::Column,
            justify_content: JustifyContent::Center,
            align_items: AlignItems::Center,
            padding: 2,
        ) {
            View(
                width: 5,
                height: 3,
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                border_style: BorderStyle::Round,
                border_color: if is_loading { theme.accent } else { theme.border },
                margin_bottom: 1,
            ) {
                Text(
                    content: icon,
                    color: if is_loading { theme.accent } else { theme.text_dimmed },
                    weight: Weight::Bold,
                )
            }

            Text(content: title, color: theme.text, weight: Weight::Bold)

            #(props.search_query.as_ref().filter(|q| !q.is_empty()).map(|query| element! {
                View(margin_top: 1) {
                    Text(
                        content: format!("Search: \"{}\"", query),
                        color: theme.search_match,
                    )
                }
            }))

            #((!hint.is_empty()).then(|| element! {
                View(margin_top: 1) {
                    Text(content: hint, color: theme.text_dimmed)
                }
            }))
        }
    }
}
