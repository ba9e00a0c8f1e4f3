//! Dashboard component (`portal dashboard`)
//!
//! Owns the single [`DashboardState`] and routes every event through
//! [`reduce_dashboard_state`]. Rendering reads the computed view model only.

use std::time::Duration;

use iocraft::prelude::*;

use crate::config::Config;
use crate::remote::{HttpSource, LoadedRecords, load_records};
use crate::tui::components::{EmptyState, Footer, Header, SearchBox};
use crate::tui::theme::theme;
use crate::types::RecordKind;

use super::components::{CompanyCardView, DetailModal, ProjectCardView, StatStrip, TabBar};
use super::help_modal::HelpModal;
use super::layout::{Viewport, detail_modal_rect, help_modal_rect};
use super::model::{
    CardContent, DashboardAction, DashboardState, click_to_action, compute_dashboard_view_model,
    key_to_action, reduce_dashboard_state,
};
use super::reveal::RevealHandle;

/// How often fresh card highlights are re-checked
const REVEAL_TICK: Duration = Duration::from_millis(150);

/// Props for the Dashboard component
#[derive(Default, Props)]
pub struct DashboardProps {
    /// Record source, built from the config file when unset
    pub source: Option<HttpSource>,
    /// Observer that tracks which cards have been revealed
    pub reveal: Option<RevealHandle>,
}

/// Apply an action through the reducer
fn dispatch(state: &mut State<DashboardState>, action: DashboardAction) {
    let current = state.read().clone();
    state.set(reduce_dashboard_state(current, action));
}

async fn fetch_all(source: Option<HttpSource>) -> LoadedRecords {
    let source = match source {
        Some(source) => source,
        None => match Config::load().and_then(|config| HttpSource::from_config(&config)) {
            Ok(source) => source,
            Err(e) => {
                tracing::error!(error = %e, "cannot build record source");
                return LoadedRecords::default();
            }
        },
    };

    tracing::info!(api = %source.base(), "loading records");
    load_records(&source).await
}

/// Main dashboard component
///
/// Layout:
/// ```text
/// +------------------------------------------+
/// | Management Portal                        |
/// +--------------------+---------------------+
/// | Total Companies  3 | Total Projects    5 |
/// +--------------------+---------------------+
/// | View Records                             |
/// | [Companies (3)] Projects (5)             |
/// | / search...                              |
/// +--------------------+---------------------+
/// | Card               | Card                |
/// | Card               | Card                |
/// +--------------------+---------------------+
/// | Footer with shortcuts                    |
/// +------------------------------------------+
/// ```
#[component]
pub fn Dashboard<'a>(props: &DashboardProps, mut hooks: Hooks) -> impl Into<AnyElement<'a>> {
    let (width, height) = hooks.use_terminal_size();
    let mut system = hooks.use_context_mut::<SystemContext>();

    let mut state: State<DashboardState> = hooks.use_state(DashboardState::default);
    // Text box contents, mirrored into the reducer when it changes
    let mut search_input = hooks.use_state(String::new);
    let mut observed: State<Option<(u64, RecordKind, String)>> = hooks.use_state(|| None);
    let tick = hooks.use_state(|| 0u64);

    // Async load handler, both fetches settle before Loaded is dispatched
    let load_handler: Handler<()> = hooks.use_async_handler({
        let source = props.source.clone();
        move |()| {
            let source = source.clone();
            let mut state = state;
            async move {
                let records = fetch_all(source).await;
                dispatch(&mut state, DashboardAction::Loaded(records));
            }
        }
    });

    // Trigger initial load on mount
    let mut load_started = hooks.use_state(|| false);
    if !load_started.get() {
        load_started.set(true);
        load_handler.clone()(());
    }

    // Re-render while highlights are fading
    hooks.use_future({
        let reveal = props.reveal.clone();
        async move {
            let mut tick = tick;
            loop {
                tokio::time::sleep(REVEAL_TICK).await;
                if reveal.as_ref().is_some_and(RevealHandle::has_fresh) {
                    tick.set(tick.get().wrapping_add(1));
                }
            }
        }
    });

    let tab_handler = move |kind: RecordKind| {
        move |()| {
            let mut state = state;
            async move {
                dispatch(&mut state, DashboardAction::SwitchTab(kind));
            }
        }
    };
    let on_companies: Handler<()> = hooks.use_async_handler(tab_handler(RecordKind::Company));
    let on_projects: Handler<()> = hooks.use_async_handler(tab_handler(RecordKind::Project));

    let on_close_detail: Handler<()> = hooks.use_async_handler(move |()| {
        let mut state = state;
        async move {
            dispatch(&mut state, DashboardAction::CloseDetail);
        }
    });
    let on_close_help: Handler<()> = hooks.use_async_handler(move |()| {
        let mut state = state;
        async move {
            dispatch(&mut state, DashboardAction::HideHelp);
        }
    });
    let on_detail_up: Handler<()> = hooks.use_async_handler(move |()| {
        let mut state = state;
        async move {
            dispatch(&mut state, DashboardAction::ScrollDetailUp);
        }
    });
    let on_detail_down: Handler<()> = hooks.use_async_handler(move |()| {
        let mut state = state;
        async move {
            dispatch(&mut state, DashboardAction::ScrollDetailDown);
        }
    });

    let viewport = Viewport::new(width, height);
    if state.read().viewport != viewport {
        dispatch(&mut state, DashboardAction::Resize(viewport));
    }

    let query = search_input.to_string();
    if state.read().search_query != query {
        dispatch(&mut state, DashboardAction::UpdateSearch(query));
    }

    // Keyboard and mouse event handling
    hooks.use_terminal_events(move |event| match event {
        TerminalEvent::Key(KeyEvent {
            code,
            kind,
            modifiers,
            ..
        }) if kind != KeyEventKind::Release => {
            let action = key_to_action(code, modifiers, &state.read());
            if let Some(action) = action {
                if action == DashboardAction::ClearSearchAndExit {
                    search_input.set(String::new());
                }
                dispatch(&mut state, action);
            }
        }
        TerminalEvent::FullscreenMouse(mouse) => {
            let action = {
                let current = state.read();
                match mouse.kind {
                    MouseEventKind::Down(_) => click_to_action(&current, mouse.column, mouse.row),
                    // The detail modal scrolls through its own wheel handlers
                    MouseEventKind::ScrollUp if current.selected.is_none() => {
                        Some(DashboardAction::MoveUp)
                    }
                    MouseEventKind::ScrollDown if current.selected.is_none() => {
                        Some(DashboardAction::MoveDown)
                    }
                    _ => None,
                }
            };
            if let Some(action) = action {
                dispatch(&mut state, action);
            }
        }
        _ => {}
    });

    if state.read().should_exit {
        system.exit();
    }

    let vm = {
        let current = state.read();
        compute_dashboard_view_model(&current)
    };

    // Re-register rendered cards after every data, tab or query change
    if let Some(reveal) = &props.reveal {
        let signature = {
            let current = state.read();
            (current.data_version, current.active_tab, current.search_query.clone())
        };
        if observed.read().as_ref() != Some(&signature) {
            reveal.observe(vm.card_keys.iter().cloned());
            observed.set(Some(signature));
        }
        let visible: Vec<String> = vm.grid.cards.iter().map(|card| card.key.clone()).collect();
        let newly = reveal.reveal_visible(&visible);
        if newly > 0 {
            tracing::trace!(newly, "cards revealed");
        }
    }

    let theme = theme();
    let is_loading = state.read().is_loading;
    let layout = vm.grid.layout;

    let status = if is_loading {
        "Loading...".to_string()
    } else if vm.search.query.is_empty() {
        format!("{} {}", vm.search.result_count, vm.active_tab.plural_title().to_lowercase())
    } else {
        format!(
            "{} matching \"{}\"",
            vm.search.result_count, vm.search.query
        )
    };

    let rows: Vec<AnyElement<'static>> = vm
        .grid
        .cards
        .chunks(layout.columns.max(1))
        .map(|row| {
            let cards = row.iter().map(|card| {
                let is_fresh = props
                    .reveal
                    .as_ref()
                    .is_some_and(|reveal| reveal.is_fresh(&card.key));
                match &card.content {
                    CardContent::Company(content) => element! {
                        CompanyCardView(
                            card: Some(content.clone()),
                            is_selected: card.is_selected,
                            is_fresh,
                            width: layout.card_width,
                        )
                    }
                    .into_any(),
                    CardContent::Project(content) => element! {
                        ProjectCardView(
                            card: Some(content.clone()),
                            is_selected: card.is_selected,
                            is_fresh,
                            width: layout.card_width,
                        )
                    }
                    .into_any(),
                }
            });
            element! {
                View(
                    width: 100pct,
                    height: layout.card_height as u32,
                    flex_direction: FlexDirection::Row,
                    flex_shrink: 0.0,
                ) {
                    #(cards)
                }
            }
            .into_any()
        })
        .collect();

    let main: AnyElement<'static> = match vm.presentation.empty_state() {
        Some(kind) => element! {
            EmptyState(kind, search_query: Some(vm.search.query.clone()))
        }
        .into_any(),
        None => element! {
            View(
                width: 100pct,
                flex_grow: 1.0,
                flex_direction: FlexDirection::Column,
                overflow: Overflow::Hidden,
            ) {
                #(rows)
            }
        }
        .into_any(),
    };

    element! {
        View(
            width,
            height,
            flex_direction: FlexDirection::Column,
            background_color: theme.background,
            position: Position::Relative,
        ) {
            Header(
                title: "Management Portal".to_string(),
                subtitle: Some("Registered companies and project inquiries".to_string()),
                status: Some(status),
            )

            StatStrip(stats: vm.stats.clone())

            TabBar(
                active: vm.active_tab,
                total_companies: vm.total_companies,
                total_projects: vm.total_projects,
                on_companies: Some(on_companies),
                on_projects: Some(on_projects),
            )

            SearchBox(
                value: Some(search_input),
                has_focus: vm.search.is_focused,
                placeholder: Some("Search by name, contact or email".to_string()),
            )

            View(flex_grow: 1.0, width: 100pct, overflow: Overflow::Hidden) {
                #(Some(main))
            }

            Footer(shortcuts: vm.shortcuts.clone())

            #(vm.detail.clone().map(|detail| element! {
                DetailModal(
                    detail: Some(detail),
                    rect: Some(detail_modal_rect(viewport)),
                    on_close: Some(on_close_detail.clone()),
                    on_scroll_up: Some(on_detail_up.clone()),
                    on_scroll_down: Some(on_detail_down.clone()),
                )
            }))

            #(vm.show_help.then(|| element! {
                HelpModal(
                    rect: Some(help_modal_rect(viewport)),
                    on_close: Some(on_close_help.clone()),
                )
            }))
        }
    }
}
