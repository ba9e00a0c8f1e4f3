//! Records dashboard (`portal dashboard`)
//!
//! Fullscreen card grid over the companies and projects lists, with search,
//! tabs and a detail modal.

pub mod components;
pub mod help_modal;
pub mod layout;
pub mod model;
pub mod reveal;
pub mod view;

pub use model::{
    DashboardAction, DashboardState, DashboardViewModel, Presentation,
    compute_dashboard_view_model, reduce_dashboard_state,
};
pub use reveal::{RevealHandle, RevealObserver};
pub use view::{Dashboard, DashboardProps};
