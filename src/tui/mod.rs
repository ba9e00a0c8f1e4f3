//! TUI module for the interactive records dashboard
//!
//! - `components` - widgets shared across screens
//! - `dashboard` - the companies/projects card grid
//! - `theme` - colors

pub mod components;
pub mod dashboard;
pub mod theme;

pub use dashboard::{Dashboard, DashboardProps, RevealObserver};
pub use theme::Theme;
