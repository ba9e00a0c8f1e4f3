//! Tab switcher component
//!
//! "View Records" heading above the two record tabs. Labels carry the
//! unfiltered count of each list.

use iocraft::prelude::*;

use crate::tui::components::Clickable;
use crate::tui::dashboard::layout::TABS_HEIGHT;
use crate::tui::theme::theme;
use crate::types::RecordKind;

/// Props for the TabBar component
#[derive(Default, Props)]
pub struct TabBarProps {
    pub active: RecordKind,
    pub total_companies: usize,
    pub total_projects: usize,
    pub on_companies: Option<Handler<()>>,
    pub on_projects: Option<Handler<()>>,
}

/// Tab label text, e.g. "Companies (3)"
pub fn tab_label(kind: RecordKind, count: usize) -> String {
    format!("{} ({})", kind.plural_title(), count)
}

#[component]
pub fn TabBar(props: &TabBarProps) -> impl Into<AnyElement<'static>> {
    let theme = theme();

    let tabs = RecordKind::ALL.map(|kind| {
        let (count, handler) = match kind {
            RecordKind::Company => (props.total_companies, props.on_companies.clone()),
            RecordKind::Project => (props.total_projects, props.on_projects.clone()),
        };
        let is_active = kind == props.active;
        element! {
            Clickable(on_click: handler) {
                View(
                    padding_left: 1,
                    padding_right: 1,
                    background_color: if is_active { Some(theme.accent) } else { None },
                ) {
                    Text(
                        content: tab_label(kind, count),
                        color: if is_active { theme.navy } else { theme.text_dimmed },
                        weight: if is_active { Weight::Bold } else { Weight::Normal },
                    )
                }
            }
        }
    });

    element! {
        View(
            width: 100pct,
            height: TABS_HEIGHT as u32,
            flex_direction: FlexDirection::Column,
            flex_shrink: 0.0,
            padding_left: 1,
        ) {
            Text(content: "View Records", color: theme.text, weight: Weight::Bold)
            View(flex_direction: FlexDirection::Row, column_gap: 1, height: 1) {
                #(tabs)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tab_label() {
        assert_eq!(tab_label(RecordKind::Company, 3), "Companies (3)");
        assert_eq!(tab_label(RecordKind::Project, 0), "Projects (0)");
    }
}
