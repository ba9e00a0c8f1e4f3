//! Company card component for the card grid

use iocraft::prelude::*;

use crate::tui::dashboard::layout::COMPANY_CARD_HEIGHT;
use crate::tui::dashboard::model::CompanyCard;
use crate::tui::theme::theme;

/// Props for the CompanyCardView component
#[derive(Default, Props)]
pub struct CompanyCardViewProps {
    pub card: Option<CompanyCard>,
    pub is_selected: bool,
    /// Just scrolled into view
    pub is_fresh: bool,
    pub width: u16,
}

/// Fixed-height company card
///
/// Layout:
/// ```text
/// ╭──────────────────────────────────────╮
/// │ Acme Corp                   [Active] │
/// │ Logistics                            │
/// │ Jane - CEO                           │
/// │ jane@acme.com                        │
/// │ +1 555 0100                          │
/// │ https://acme.com                     │
/// │ Years 12  Employees 40  Turnover 2M  │
/// │ Civil · MEP                          │
/// │ Jan 5, 2024            View Details  │
/// ╰──────────────────────────────────────╯
/// ```
#[component]
pub fn CompanyCardView(props: &CompanyCardViewProps) -> impl Into<AnyElement<'static>> {
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
            height: COMPANY_CARD_HEIGHT as u32,
            flex_direction: FlexDirection::Column,
            border_style: BorderStyle::Round,
            border_color: border_color,
            padding_left: 1,
            padding_right: 1,
            overflow: Overflow::Hidden,
        ) {
            View(flex_direction: FlexDirection::Row, height: 1) {
                View(flex_grow: 1.0, overflow: Overflow::Hidden) {
                    Text(
                        content: format!("{indicator}{}", card.name),
                        color: theme.accent,
                        weight: Weight::Bold,
                        wrap: TextWrap::NoWrap,
                    )
                }
                Text(
                    content: format!("[{}]", card.status),
                    color: theme.status_color(card.is_active),
                    weight: Weight::Bold,
                )
            }
            Text(content: card.business_type, color: theme.text_dimmed, wrap: TextWrap::NoWrap)
            Text(content: card.contact, color: theme.text, wrap: TextWrap::NoWrap)
            Text(content: card.email, color: theme.text, wrap: TextWrap::NoWrap)
            Text(content: card.phone, color: theme.text, wrap: TextWrap::NoWrap)
            View(height: 1) {
                #(card.website.map(|website| element! {
                    Text(content: website, color: theme.highlight, wrap: TextWrap::NoWrap)
                }))
            }
            View(flex_direction: FlexDirection::Row, column_gap: 2, height: 1) {
                Text(content: format!("Years {}", card.years), color: theme.text)
                Text(content: format!("Employees {}", card.employees), color: theme.text)
                Text(content: format!("Turnover {}", card.turnover), color: theme.text)
            }
            View(height: 1) {
                Text(content: card.tags.join(" · "), color: theme.tag, wrap: TextWrap::NoWrap)
            }
            View(flex_direction: FlexDirection::Row, height: 1) {
                Text(content: card.created, color: theme.text_dimmed)
                View(flex_grow: 1.0)
                Text(content: "View Details", color: theme.accent)
            }
        }
    }
    .into_any()
}
