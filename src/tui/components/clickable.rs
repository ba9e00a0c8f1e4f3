//! Clickable wrapper component for mouse interaction
//!
//! Events are delivered only when they land inside the wrapped child, with
//! coordinates relative to its top-left corner.

use iocraft::prelude::*;

/// Props for the Clickable component
#[derive(Default, Props)]
pub struct ClickableProps<'a> {
    /// Child element to wrap
    pub children: Vec<AnyElement<'a>>,
    /// Handler invoked when component is clicked
    pub on_click: Option<Handler<()>>,
    /// Handler invoked when mouse wheel scrolls up
    pub on_scroll_up: Option<Handler<()>>,
    /// Handler invoked when mouse wheel scrolls down
    pub on_scroll_down: Option<Handler<()>>,
}

/// Mouse-aware wrapper around a single child
///
/// Used for the tab labels, the modal close control and wheel scrolling of
/// the grid and the detail modal. Card clicks are hit-tested by the
/// dashboard itself since the set of cards changes every render.
#[component]
pub fn Clickable<'a>(
    props: &mut ClickableProps<'a>,
    mut hooks: Hooks,
) -> impl Into<AnyElement<'a>> {
    let on_click = props.on_click.clone();
    let on_scroll_up = props.on_scroll_up.clone();
    let on_scroll_down = props.on_scroll_down.clone();

    hooks.use_local_terminal_events({
        move |event| {
            let TerminalEvent::FullscreenMouse(mouse_event) = event else {
                return;
            };
            let handler = match mouse_event.kind {
                MouseEventKind::Down(_) => on_click.as_ref(),
                MouseEventKind::ScrollUp => on_scroll_up.as_ref(),
                MouseEventKind::ScrollDown => on_scroll_down.as_ref(),
                _ => None,
            };
            if let Some(handler) = handler {
                handler(());
            }
        }
    });

    match props.children.iter_mut().next() {
        Some(child) => child.into(),
        None => element!(View).into_any(),
    }
}
