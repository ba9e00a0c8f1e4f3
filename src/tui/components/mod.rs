//! Shared TUI components

pub mod clickable;
pub mod empty_state;
pub mod footer;
pub mod header;
pub mod modal_container;
pub mod modal_overlay;
pub mod search_box;
pub mod shortcuts;

pub use clickable::{Clickable, ClickableProps};
pub use empty_state::{EmptyState, EmptyStateKind, EmptyStateProps};
pub use footer::{
    Footer, FooterProps, Shortcut, detail_modal_shortcuts, empty_shortcuts, grid_shortcuts,
    help_modal_shortcuts, loading_shortcuts, search_shortcuts,
};
pub use header::{Header, HeaderProps};
pub use modal_container::{ModalContainer, ModalContainerProps, ModalHeight, ModalWidth};
pub use modal_overlay::{MODAL_BACKDROP, ModalOverlay, ModalOverlayProps};
pub use search_box::{SearchBox, SearchBoxProps};
pub use shortcuts::ShortcutsBuilder;
