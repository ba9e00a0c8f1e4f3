//! Text helpers shared by the dashboard and the one-shot commands.

use owo_colors::OwoColorize;

use crate::types::Company;

pub mod cli_formatting;
pub mod data_formatting;

pub use cli_formatting::*;
pub use data_formatting::*;

/// Company status badge text used on cards and in tables
pub fn status_label(company: &Company) -> &'static str {
    if company.is_active() {
        "Active"
    } else {
        "Inactive"
    }
}

/// Status badge with terminal colors
pub fn format_status_colored(company: &Company) -> String {
    let badge = format!("[{}]", status_label(company));
    if company.is_active() {
        badge.green().to_string()
    } else {
        badge.red().to_string()
    }
}
