//! Components specific to the dashboard

pub mod company_card;
pub mod detail_modal;
pub mod project_card;
pub mod stat_strip;
pub mod tab_bar;

pub use company_card::{CompanyCardView, CompanyCardViewProps};
pub use detail_modal::{DetailModal, DetailModalProps};
pub use project_card::{ProjectCardView, ProjectCardViewProps};
pub use stat_strip::{StatStrip, StatStripProps};
pub use tab_bar::{TabBar, TabBarProps};
