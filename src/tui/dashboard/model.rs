//! Dashboard model types for testable state management
//!
//! This module separates state (DashboardState) from view (DashboardViewModel)
//! so the whole interaction can be tested without the iocraft framework.
//! Every change to the dashboard goes through [`reduce_dashboard_state`].

use std::sync::Arc;

use iocraft::prelude::{KeyCode, KeyModifiers};
use jiff::tz::TimeZone;

use crate::display::{
    clamp_lines, company_detail_rows, company_detail_sections, display_or,
    format_date_in, or_na, present, status_label, wrap_text,
};
use crate::query::SearchQuery;
use crate::remote::LoadedRecords;
use crate::tui::components::{
    EmptyStateKind, Shortcut, detail_modal_shortcuts, empty_shortcuts, grid_shortcuts,
    help_modal_shortcuts, loading_shortcuts, search_shortcuts,
};
use crate::types::{Company, Project, Record, RecordKind, record_key};

use super::layout::{
    GridLayout, PROJECT_DETAIL_LINES, Viewport, card_index_at, detail_modal_rect,
    detail_text_width, detail_visible_lines, help_modal_rect,
};

// ============================================================================
// State Types
// ============================================================================

/// Raw state that changes during user interaction
#[derive(Debug, Clone)]
pub struct DashboardState {
    // Data, shared so that cloning the state for a dispatch stays cheap
    pub companies: Arc<Vec<Company>>,
    pub projects: Arc<Vec<Project>>,
    /// True from mount until both fetches settle
    pub is_loading: bool,
    /// Bumped every time the record lists are replaced
    pub data_version: u64,

    // View
    pub active_tab: RecordKind,
    pub search_query: String,
    pub search_focused: bool,

    // Grid navigation, in terms of the active tab's filtered list
    pub cursor: usize,
    /// First visible grid row
    pub scroll_row: usize,

    // Modals
    /// Record shown in the detail modal
    pub selected: Option<Record>,
    pub detail_scroll: usize,
    pub show_help: bool,

    // Environment
    pub viewport: Viewport,
    /// Zone used to render record dates
    pub time_zone: TimeZone,

    pub should_exit: bool,
}

impl Default for DashboardState {
    fn default() -> Self {
        Self {
            companies: Arc::default(),
            projects: Arc::default(),
            is_loading: true,
            data_version: 0,
            active_tab: RecordKind::default(),
            search_query: String::new(),
            search_focused: false,
            cursor: 0,
            scroll_row: 0,
            selected: None,
            detail_scroll: 0,
            show_help: false,
            viewport: Viewport::default(),
            time_zone: TimeZone::system(),
            should_exit: false,
        }
    }
}

impl DashboardState {
    pub fn layout(&self) -> GridLayout {
        GridLayout::new(self.active_tab, self.viewport)
    }

    /// Indices into the active tab's records that match the query
    pub fn filtered_indices(&self) -> Vec<usize> {
        let query = SearchQuery::new(&self.search_query);
        match self.active_tab {
            RecordKind::Company => query.matching_indices(self.companies.as_slice()),
            RecordKind::Project => query.matching_indices(self.projects.as_slice()),
        }
    }

    pub fn filtered_len(&self) -> usize {
        self.filtered_indices().len()
    }

    /// The record at position `index` of the active tab's filtered list
    pub fn record_at(&self, index: usize) -> Option<Record> {
        let source = *self.filtered_indices().get(index)?;
        match self.active_tab {
            RecordKind::Company => self.companies.get(source).cloned().map(Record::Company),
            RecordKind::Project => self.projects.get(source).cloned().map(Record::Project),
        }
    }

    fn modal_open(&self) -> bool {
        self.selected.is_some() || self.show_help
    }
}

// ============================================================================
// Action Types
// ============================================================================

/// All possible actions on the dashboard
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DashboardAction {
    /// Both fetches settled
    Loaded(LoadedRecords),
    /// Terminal was resized
    Resize(Viewport),

    // Tabs
    SwitchTab(RecordKind),
    ToggleTab,

    // Grid navigation
    MoveLeft,
    MoveRight,
    MoveUp,
    MoveDown,
    GoToFirst,
    GoToLast,
    PageUp,
    PageDown,

    // Detail modal
    /// Open the card under the cursor
    OpenSelected,
    /// Open the card at a filtered-list index (mouse click)
    OpenAt(usize),
    CloseDetail,
    ScrollDetailUp,
    ScrollDetailDown,

    // Search
    FocusSearch,
    UpdateSearch(String),
    /// Leave search mode, keeping the query
    ExitSearch,
    ClearSearchAndExit,

    // Help
    ShowHelp,
    HideHelp,

    Quit,
}

// ============================================================================
// View Model Types
// ============================================================================

/// What the main area shows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Presentation {
    Loading,
    EmptyCompanies,
    EmptyProjects,
    CompaniesGrid,
    ProjectsGrid,
}

impl Presentation {
    pub fn empty_state(self) -> Option<EmptyStateKind> {
        match self {
            Presentation::Loading => Some(EmptyStateKind::Loading),
            Presentation::EmptyCompanies => Some(EmptyStateKind::NoCompanies),
            Presentation::EmptyProjects => Some(EmptyStateKind::NoProjects),
            Presentation::CompaniesGrid | Presentation::ProjectsGrid => None,
        }
    }
}

/// Computed view model for rendering the entire dashboard
#[derive(Debug, Clone)]
pub struct DashboardViewModel {
    pub presentation: Presentation,
    /// Unfiltered counts for the stat strip and tab labels
    pub total_companies: usize,
    pub total_projects: usize,
    /// Label and value of each stat strip box
    pub stats: Vec<(String, String)>,
    pub active_tab: RecordKind,
    pub search: SearchViewModel,
    pub grid: GridViewModel,
    pub detail: Option<DetailViewModel>,
    pub show_help: bool,
    pub shortcuts: Vec<Shortcut>,
    /// Keys of every card in the active tab's filtered list
    pub card_keys: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct SearchViewModel {
    pub query: String,
    pub is_focused: bool,
    pub result_count: usize,
}

/// The visible slice of the card grid
#[derive(Debug, Clone)]
pub struct GridViewModel {
    pub layout: GridLayout,
    pub scroll_row: usize,
    pub total_rows: usize,
    /// Cards in the visible rows, in reading order
    pub cards: Vec<CardViewModel>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardViewModel {
    /// Position in the filtered list
    pub index: usize,
    pub key: String,
    pub is_selected: bool,
    pub content: CardContent,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CardContent {
    Company(CompanyCard),
    Project(ProjectCard),
}

/// Display strings for a company card
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompanyCard {
    pub name: String,
    pub business_type: String,
    pub status: &'static str,
    pub is_active: bool,
    pub contact: String,
    pub email: String,
    pub phone: String,
    pub website: Option<String>,
    pub years: String,
    pub employees: String,
    pub turnover: String,
    pub tags: Vec<String>,
    pub created: String,
}

/// Display strings for a project card
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectCard {
    pub name: String,
    pub project_type: String,
    pub email: String,
    pub phone: String,
    /// Already clamped to the card's detail lines
    pub details: String,
    pub created: String,
}

/// One row of the detail modal
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DetailLine {
    Title(String),
    Subtitle(String),
    Badge { text: String, positive: bool },
    Heading(String),
    Field { label: &'static str, value: String },
    Stats(Vec<(&'static str, String)>),
    Text(String),
    Blank,
    Footer(String),
}

impl DetailLine {
    /// Unstyled rendering, used by tests and plain output
    pub fn plain(&self) -> String {
        match self {
            DetailLine::Title(s) | DetailLine::Subtitle(s) | DetailLine::Text(s) => s.clone(),
            DetailLine::Badge { text, .. } => format!("[{text}]"),
            DetailLine::Heading(s) => format!("## {s}"),
            DetailLine::Field { label, value } => format!("{label}: {value}"),
            DetailLine::Stats(stats) => stats
                .iter()
                .map(|(label, value)| format!("{label}: {value}"))
                .collect::<Vec<_>>()
                .join(" | "),
            DetailLine::Blank => String::new(),
            DetailLine::Footer(s) => format!("-- {s}"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct DetailViewModel {
    pub title: &'static str,
    pub lines: Vec<DetailLine>,
    pub scroll: usize,
    pub visible_lines: usize,
}

// ============================================================================
// Pure Functions
// ============================================================================

/// Which screen the current state maps to
pub fn compute_presentation(state: &DashboardState) -> Presentation {
    if state.is_loading {
        return Presentation::Loading;
    }

    let empty = state.filtered_len() == 0;
    match (state.active_tab, empty) {
        (RecordKind::Company, true) => Presentation::EmptyCompanies,
        (RecordKind::Company, false) => Presentation::CompaniesGrid,
        (RecordKind::Project, true) => Presentation::EmptyProjects,
        (RecordKind::Project, false) => Presentation::ProjectsGrid,
    }
}

/// Pure function: compute view model from state
pub fn compute_dashboard_view_model(state: &DashboardState) -> DashboardViewModel {
    let presentation = compute_presentation(state);
    let layout = state.layout();
    let indices = state.filtered_indices();

    let card_keys: Vec<String> = indices
        .iter()
        .map(|&i| match state.active_tab {
            RecordKind::Company => {
                record_key(RecordKind::Company, state.companies[i].id.as_deref(), i)
            }
            RecordKind::Project => {
                record_key(RecordKind::Project, state.projects[i].id.as_deref(), i)
            }
        })
        .collect();

    let first = state.scroll_row * layout.columns;
    let last = (first + layout.visible_rows * layout.columns).min(indices.len());
    let cards = if state.is_loading {
        Vec::new()
    } else {
        (first..last)
            .map(|pos| {
                let source = indices[pos];
                let content = match state.active_tab {
                    RecordKind::Company => CardContent::Company(company_card(
                        &state.companies[source],
                        &state.time_zone,
                    )),
                    RecordKind::Project => CardContent::Project(project_card(
                        &state.projects[source],
                        layout.card_text_width(),
                        &state.time_zone,
                    )),
                };
                CardViewModel {
                    index: pos,
                    key: card_keys[pos].clone(),
                    is_selected: pos == state.cursor && !state.search_focused,
                    content,
                }
            })
            .collect()
    };

    let detail = state.selected.as_ref().map(|record| DetailViewModel {
        title: detail_title(record.kind()),
        lines: detail_lines(record, detail_text_width(state.viewport), &state.time_zone),
        scroll: state.detail_scroll,
        visible_lines: detail_visible_lines(state.viewport),
    });

    let shortcuts = if state.show_help {
        help_modal_shortcuts()
    } else if state.selected.is_some() {
        detail_modal_shortcuts()
    } else if state.search_focused {
        search_shortcuts()
    } else if state.is_loading {
        loading_shortcuts()
    } else if indices.is_empty() {
        empty_shortcuts()
    } else {
        grid_shortcuts()
    };

    DashboardViewModel {
        presentation,
        total_companies: state.companies.len(),
        total_projects: state.projects.len(),
        stats: vec![
            (
                "Total Companies".to_string(),
                state.companies.len().to_string(),
            ),
            (
                "Total Projects".to_string(),
                state.projects.len().to_string(),
            ),
        ],
        active_tab: state.active_tab,
        search: SearchViewModel {
            query: state.search_query.clone(),
            is_focused: state.search_focused,
            result_count: indices.len(),
        },
        grid: GridViewModel {
            layout,
            scroll_row: state.scroll_row,
            total_rows: layout.total_rows(indices.len()),
            cards,
        },
        detail,
        show_help: state.show_help,
        shortcuts,
        card_keys,
    }
}

pub fn company_card(company: &Company, tz: &TimeZone) -> CompanyCard {
    CompanyCard {
        name: or_na(company.company_name.as_deref()).to_string(),
        business_type: or_na(company.business_type.as_deref()).to_string(),
        status: status_label(company),
        is_active: company.is_active(),
        contact: format!(
            "{} - {}",
            or_na(company.contact_person_name.as_deref()),
            or_na(company.contact_person_designation.as_deref())
        ),
        email: or_na(company.email.as_deref()).to_string(),
        phone: or_na(company.phone_number.as_deref()).to_string(),
        website: present(company.company_website.as_deref()).map(str::to_string),
        years: display_or(company.years_in_operation.as_deref(), "0").to_string(),
        employees: display_or(company.number_of_employees.as_deref(), "0").to_string(),
        turnover: or_na(company.annual_turnover.as_deref()).to_string(),
        tags: company
            .expertise_tags()
            .into_iter()
            .map(str::to_string)
            .collect(),
        created: format_date_in(company.created_at.as_deref(), tz),
    }
}

pub fn project_card(project: &Project, text_width: usize, tz: &TimeZone) -> ProjectCard {
    let details = display_or(project.project_details.as_deref(), "No details provided");
    ProjectCard {
        name: or_na(project.name.as_deref()).to_string(),
        project_type: or_na(project.project_type.as_deref()).to_string(),
        email: or_na(project.email.as_deref()).to_string(),
        phone: or_na(project.phone_number.as_deref()).to_string(),
        details: clamp_lines(details, text_width, PROJECT_DETAIL_LINES),
        created: format_date_in(project.created_at.as_deref(), tz),
    }
}

pub fn detail_title(kind: RecordKind) -> &'static str {
    match kind {
        RecordKind::Company => "Company Details",
        RecordKind::Project => "Project Details",
    }
}

/// All rows of the detail modal for a record, wrapped to `width`
pub fn detail_lines(record: &Record, width: usize, tz: &TimeZone) -> Vec<DetailLine> {
    match record {
        Record::Company(company) => company_detail_lines(company, width, tz),
        Record::Project(project) => project_detail_lines(project, width, tz),
    }
}

fn push_wrapped(lines: &mut Vec<DetailLine>, text: &str, width: usize) {
    push_styled(lines, text, width, DetailLine::Text);
}

/// Wrap `text` and give every resulting row the same style
fn push_styled(
    lines: &mut Vec<DetailLine>,
    text: &str,
    width: usize,
    style: fn(String) -> DetailLine,
) {
    lines.extend(wrap_text(text, width).into_iter().map(style));
}

/// A `label: value` row; overflow continues on indented text rows
fn push_field(lines: &mut Vec<DetailLine>, label: &'static str, value: &str, width: usize) {
    let indent = label.chars().count() + 2;
    let mut wrapped = wrap_text(value, width.saturating_sub(indent)).into_iter();
    lines.push(DetailLine::Field {
        label,
        value: wrapped.next().unwrap_or_default(),
    });
    lines.extend(wrapped.map(|rest| DetailLine::Text(format!("{:indent$}{rest}", ""))));
}

/// Stats share one row when they fit, otherwise one field each
fn push_stats(lines: &mut Vec<DetailLine>, stats: Vec<(&'static str, String)>, width: usize) {
    let row = DetailLine::Stats(stats);
    if row.plain().chars().count() <= width {
        lines.push(row);
    } else if let DetailLine::Stats(stats) = row {
        for (label, value) in stats {
            push_field(lines, label, &value, width);
        }
    }
}

fn company_detail_lines(company: &Company, width: usize, tz: &TimeZone) -> Vec<DetailLine> {
    let mut lines = Vec::new();
    push_styled(
        &mut lines,
        or_na(company.company_name.as_deref()),
        width,
        DetailLine::Title,
    );
    push_styled(
        &mut lines,
        or_na(company.business_type.as_deref()),
        width,
        DetailLine::Subtitle,
    );
    lines.push(DetailLine::Badge {
        text: if company.is_active() {
            "Not Blacklisted".to_string()
        } else {
            "Blacklisted".to_string()
        },
        positive: company.is_active(),
    });
    lines.push(DetailLine::Blank);
    lines.push(DetailLine::Heading("Contact Person".to_string()));

    let contact = [
        ("Name", company.contact_person_name.as_deref()),
        ("Designation", company.contact_person_designation.as_deref()),
        ("Email", company.email.as_deref()),
        ("Phone", company.phone_number.as_deref()),
    ];
    for (label, value) in contact {
        push_field(&mut lines, label, or_na(value), width);
    }

    lines.push(DetailLine::Blank);
    push_stats(
        &mut lines,
        vec![
            (
                "Years in Operation",
                display_or(company.years_in_operation.as_deref(), "0").to_string(),
            ),
            (
                "Employees",
                display_or(company.number_of_employees.as_deref(), "0").to_string(),
            ),
            (
                "Annual Turnover",
                or_na(company.annual_turnover.as_deref()).to_string(),
            ),
        ],
        width,
    );

    let rows = company_detail_rows(company);
    if !rows.is_empty() {
        lines.push(DetailLine::Blank);
        for (label, value) in rows {
            push_field(&mut lines, label, value, width);
        }
    }

    for (title, body) in company_detail_sections(company) {
        lines.push(DetailLine::Blank);
        lines.push(DetailLine::Heading(title.to_string()));
        push_wrapped(&mut lines, body, width);
    }

    lines.push(DetailLine::Blank);
    push_styled(
        &mut lines,
        &format!(
            "Registered on {}",
            format_date_in(company.created_at.as_deref(), tz)
        ),
        width,
        DetailLine::Footer,
    );
    lines
}

fn project_detail_lines(project: &Project, width: usize, tz: &TimeZone) -> Vec<DetailLine> {
    let mut lines = Vec::new();
    push_styled(
        &mut lines,
        or_na(project.name.as_deref()),
        width,
        DetailLine::Title,
    );
    lines.push(DetailLine::Badge {
        text: or_na(project.project_type.as_deref()).to_string(),
        positive: true,
    });
    lines.push(DetailLine::Blank);
    lines.push(DetailLine::Heading("Contact Information".to_string()));
    push_field(
        &mut lines,
        "Email Address",
        or_na(project.email.as_deref()),
        width,
    );
    push_field(
        &mut lines,
        "Phone Number",
        or_na(project.phone_number.as_deref()),
        width,
    );
    lines.push(DetailLine::Blank);
    lines.push(DetailLine::Heading("Project Requirements".to_string()));

    push_wrapped(
        &mut lines,
        display_or(project.project_details.as_deref(), "No details provided"),
        width,
    );

    lines.push(DetailLine::Blank);
    push_styled(
        &mut lines,
        &format!(
            "Submitted on {}",
            format_date_in(project.created_at.as_deref(), tz)
        ),
        width,
        DetailLine::Footer,
    );
    lines
}

/// Pure function: apply an action to the state
///
/// Network I/O happens outside; its result arrives as [`DashboardAction::Loaded`].
pub fn reduce_dashboard_state(mut state: DashboardState, action: DashboardAction) -> DashboardState {
    // Modals capture grid input
    let grid_locked = state.modal_open() || state.is_loading;
    let count = state.filtered_len();
    let layout = state.layout();

    match action {
        DashboardAction::Loaded(records) => {
            state.companies = Arc::new(records.companies);
            state.projects = Arc::new(records.projects);
            state.is_loading = false;
            state.data_version += 1;
            state.cursor = 0;
            state.scroll_row = 0;
        }
        DashboardAction::Resize(viewport) => {
            state.viewport = viewport;
            let layout = state.layout();
            state.scroll_row = adjust_scroll(
                state.scroll_row,
                layout.row_of(state.cursor),
                layout.visible_rows,
            );
        }

        DashboardAction::SwitchTab(kind) => {
            if !state.modal_open() && state.active_tab != kind {
                state.active_tab = kind;
                state.cursor = 0;
                state.scroll_row = 0;
            }
        }
        DashboardAction::ToggleTab => {
            if !state.modal_open() {
                state.active_tab = state.active_tab.toggle();
                state.cursor = 0;
                state.scroll_row = 0;
            }
        }

        DashboardAction::MoveLeft if !grid_locked => {
            if layout.column_of(state.cursor) > 0 {
                state.cursor -= 1;
            }
        }
        DashboardAction::MoveRight if !grid_locked => {
            let next = state.cursor + 1;
            if next < count && layout.column_of(next) != 0 {
                state.cursor = next;
            }
        }
        DashboardAction::MoveUp if !grid_locked => {
            state.cursor = state.cursor.saturating_sub(layout.columns);
        }
        DashboardAction::MoveDown if !grid_locked => {
            if count > 0 && layout.row_of(state.cursor) + 1 < layout.total_rows(count) {
                state.cursor = (state.cursor + layout.columns).min(count - 1);
            }
        }
        DashboardAction::GoToFirst if !grid_locked => {
            state.cursor = 0;
        }
        DashboardAction::GoToLast if !grid_locked => {
            state.cursor = count.saturating_sub(1);
        }
        DashboardAction::PageUp if !grid_locked => {
            let step = layout.visible_rows * layout.columns;
            if state.cursor >= step {
                state.cursor -= step;
            } else {
                state.cursor = layout.column_of(state.cursor);
            }
        }
        DashboardAction::PageDown if !grid_locked => {
            if count > 0 {
                let step = layout.visible_rows * layout.columns;
                state.cursor = (state.cursor + step).min(count - 1);
            }
        }

        DashboardAction::OpenSelected if !grid_locked && !state.search_focused => {
            if let Some(record) = state.record_at(state.cursor) {
                state.selected = Some(record);
                state.detail_scroll = 0;
            }
        }
        DashboardAction::OpenAt(index) if !grid_locked => {
            if let Some(record) = state.record_at(index) {
                state.cursor = index;
                state.search_focused = false;
                state.selected = Some(record);
                state.detail_scroll = 0;
            }
        }
        DashboardAction::CloseDetail => {
            state.selected = None;
            state.detail_scroll = 0;
        }
        DashboardAction::ScrollDetailUp => {
            state.detail_scroll = state.detail_scroll.saturating_sub(1);
        }
        DashboardAction::ScrollDetailDown => {
            if let Some(record) = &state.selected {
                let total = detail_lines(
                    record,
                    detail_text_width(state.viewport),
                    &state.time_zone,
                )
                .len();
                let max_scroll = total.saturating_sub(detail_visible_lines(state.viewport));
                state.detail_scroll = (state.detail_scroll + 1).min(max_scroll);
            }
        }

        DashboardAction::FocusSearch if !grid_locked => {
            state.search_focused = true;
        }
        DashboardAction::UpdateSearch(query) => {
            if query != state.search_query {
                state.search_query = query;
                state.cursor = 0;
                state.scroll_row = 0;
            }
        }
        DashboardAction::ExitSearch => {
            state.search_focused = false;
        }
        DashboardAction::ClearSearchAndExit => {
            state.search_focused = false;
            if !state.search_query.is_empty() {
                state.search_query.clear();
                state.cursor = 0;
                state.scroll_row = 0;
            }
        }

        DashboardAction::ShowHelp => {
            if state.selected.is_none() {
                state.show_help = true;
            }
        }
        DashboardAction::HideHelp => {
            state.show_help = false;
        }

        DashboardAction::Quit => {
            state.should_exit = true;
        }

        // Grid actions while a modal or the loading screen is up
        _ => {}
    }

    let count = state.filtered_len();
    state.cursor = state.cursor.min(count.saturating_sub(1));
    let layout = state.layout();
    state.scroll_row = adjust_scroll(
        state.scroll_row,
        layout.row_of(state.cursor),
        layout.visible_rows,
    );

    state
}

/// Adjust scroll offset to keep selected item visible
///
/// Returns the new scroll offset that ensures the selected index is visible
/// within the list height.
pub fn adjust_scroll(scroll_offset: usize, selected_index: usize, list_height: usize) -> usize {
    if list_height == 0 {
        return 0;
    }

    if selected_index < scroll_offset {
        return selected_index;
    }

    if selected_index >= scroll_offset + list_height {
        return selected_index.saturating_sub(list_height - 1);
    }

    scroll_offset
}

/// Convert a key event to a DashboardAction (pure function)
///
/// Modals capture all input first, then search mode, then the grid.
/// Returns `None` if the key doesn't map to any action.
pub fn key_to_action(
    code: KeyCode,
    modifiers: KeyModifiers,
    state: &DashboardState,
) -> Option<DashboardAction> {
    if code == KeyCode::Char('q') && modifiers.contains(KeyModifiers::CONTROL) {
        return Some(DashboardAction::Quit);
    }

    if state.show_help {
        return match code {
            KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q') => {
                Some(DashboardAction::HideHelp)
            }
            _ => None,
        };
    }

    if state.selected.is_some() {
        return match code {
            KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('x') => {
                Some(DashboardAction::CloseDetail)
            }
            KeyCode::Char('j') | KeyCode::Down => Some(DashboardAction::ScrollDetailDown),
            KeyCode::Char('k') | KeyCode::Up => Some(DashboardAction::ScrollDetailUp),
            _ => None,
        };
    }

    if state.search_focused {
        return match code {
            KeyCode::Esc => Some(DashboardAction::ClearSearchAndExit),
            KeyCode::Enter | KeyCode::Tab => Some(DashboardAction::ExitSearch),
            // Other characters are handled by the search box
            _ => None,
        };
    }

    match code {
        KeyCode::Tab | KeyCode::BackTab => Some(DashboardAction::ToggleTab),
        KeyCode::Char('1') => Some(DashboardAction::SwitchTab(RecordKind::Company)),
        KeyCode::Char('2') => Some(DashboardAction::SwitchTab(RecordKind::Project)),

        KeyCode::Char('h') | KeyCode::Left => Some(DashboardAction::MoveLeft),
        KeyCode::Char('l') | KeyCode::Right => Some(DashboardAction::MoveRight),
        KeyCode::Char('k') | KeyCode::Up => Some(DashboardAction::MoveUp),
        KeyCode::Char('j') | KeyCode::Down => Some(DashboardAction::MoveDown),
        KeyCode::Char('g') | KeyCode::Home => Some(DashboardAction::GoToFirst),
        KeyCode::Char('G') | KeyCode::End => Some(DashboardAction::GoToLast),
        KeyCode::PageUp => Some(DashboardAction::PageUp),
        KeyCode::PageDown => Some(DashboardAction::PageDown),

        KeyCode::Enter => Some(DashboardAction::OpenSelected),
        KeyCode::Char('/') => Some(DashboardAction::FocusSearch),
        KeyCode::Esc if !state.search_query.is_empty() => {
            Some(DashboardAction::ClearSearchAndExit)
        }
        KeyCode::Char('?') => Some(DashboardAction::ShowHelp),
        KeyCode::Char('q') => Some(DashboardAction::Quit),
        _ => None,
    }
}

/// Convert a mouse click at an absolute cell to a DashboardAction
///
/// Clicking outside an open modal dismisses it; clicking a card opens it.
pub fn click_to_action(state: &DashboardState, column: u16, row: u16) -> Option<DashboardAction> {
    if state.show_help {
        let rect = help_modal_rect(state.viewport);
        return (!rect.contains(column, row)).then_some(DashboardAction::HideHelp);
    }

    if state.selected.is_some() {
        let rect = detail_modal_rect(state.viewport);
        return (!rect.contains(column, row)).then_some(DashboardAction::CloseDetail);
    }

    if state.is_loading {
        return None;
    }

    card_index_at(
        &state.layout(),
        state.viewport,
        state.scroll_row,
        state.filtered_len(),
        column,
        row,
    )
    .map(DashboardAction::OpenAt)
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::dashboard::layout::GRID_TOP;

    fn company(id: &str, name: &str) -> Company {
        Company {
            id: Some(id.to_string()),
            company_name: Some(name.to_string()),
            ..Default::default()
        }
    }

    fn project(id: &str, name: &str) -> Project {
        Project {
            id: Some(id.to_string()),
            name: Some(name.to_string()),
            ..Default::default()
        }
    }

    fn loaded_state(companies: usize, projects: usize) -> DashboardState {
        let state = DashboardState {
            viewport: Viewport::new(100, 50),
            time_zone: TimeZone::UTC,
            ..Default::default()
        };
        reduce_dashboard_state(
            state,
            DashboardAction::Loaded(LoadedRecords {
                companies: (0..companies)
                    .map(|i| company(&format!("c{i}"), &format!("Company {i}")))
                    .collect(),
                projects: (0..projects)
                    .map(|i| project(&format!("p{i}"), &format!("Project {i}")))
                    .collect(),
            }),
        )
    }

    fn apply(state: DashboardState, actions: &[DashboardAction]) -> DashboardState {
        actions
            .iter()
            .cloned()
            .fold(state, reduce_dashboard_state)
    }

    fn key(code: KeyCode) -> (KeyCode, KeyModifiers) {
        (code, KeyModifiers::NONE)
    }

    // ------------------------------------------------------------------------
    // Presentation
    // ------------------------------------------------------------------------

    #[test]
    fn test_mount_is_loading() {
        let state = DashboardState::default();
        assert!(state.is_loading);
        assert_eq!(compute_presentation(&state), Presentation::Loading);
    }

    #[test]
    fn test_stat_strip_counts_zero_while_loading() {
        let vm = compute_dashboard_view_model(&DashboardState::default());
        assert_eq!(
            vm.stats,
            vec![
                ("Total Companies".to_string(), "0".to_string()),
                ("Total Projects".to_string(), "0".to_string()),
            ]
        );

        let vm = compute_dashboard_view_model(&loaded_state(4, 3));
        assert_eq!(vm.stats[0].1, "4");
        assert_eq!(vm.stats[1].1, "3");
    }

    #[test]
    fn test_load_completion_shows_companies_grid() {
        let state = loaded_state(2, 1);
        assert_eq!(compute_presentation(&state), Presentation::CompaniesGrid);
        assert_eq!(state.data_version, 1);
    }

    #[test]
    fn test_empty_lists_show_empty_states() {
        let state = loaded_state(0, 0);
        assert_eq!(compute_presentation(&state), Presentation::EmptyCompanies);
        let state = reduce_dashboard_state(state, DashboardAction::ToggleTab);
        assert_eq!(compute_presentation(&state), Presentation::EmptyProjects);
    }

    #[test]
    fn test_filtered_out_tab_is_empty() {
        let state = apply(
            loaded_state(2, 0),
            &[DashboardAction::UpdateSearch("zzz".to_string())],
        );
        assert_eq!(compute_presentation(&state), Presentation::EmptyCompanies);
        let vm = compute_dashboard_view_model(&state);
        assert_eq!(vm.total_companies, 2);
        assert_eq!(vm.search.result_count, 0);
    }

    // ------------------------------------------------------------------------
    // Navigation
    // ------------------------------------------------------------------------

    #[test]
    fn test_grid_navigation_two_columns() {
        // 100 columns wide: two company columns
        let state = loaded_state(5, 0);
        let state = reduce_dashboard_state(state, DashboardAction::MoveRight);
        assert_eq!(state.cursor, 1);
        // Right edge of the row
        let state = reduce_dashboard_state(state, DashboardAction::MoveRight);
        assert_eq!(state.cursor, 1);
        let state = reduce_dashboard_state(state, DashboardAction::MoveDown);
        assert_eq!(state.cursor, 3);
        // Last row only has index 4
        let state = reduce_dashboard_state(state, DashboardAction::MoveDown);
        assert_eq!(state.cursor, 4);
        let state = reduce_dashboard_state(state, DashboardAction::MoveDown);
        assert_eq!(state.cursor, 4);
        let state = reduce_dashboard_state(state, DashboardAction::MoveUp);
        assert_eq!(state.cursor, 2);
        let state = reduce_dashboard_state(state, DashboardAction::MoveLeft);
        assert_eq!(state.cursor, 2);
    }

    #[test]
    fn test_go_to_last_scrolls_into_view() {
        // 3 visible company rows
        let state = apply(loaded_state(20, 0), &[DashboardAction::GoToLast]);
        assert_eq!(state.cursor, 19);
        assert_eq!(state.scroll_row, 7);

        let state = reduce_dashboard_state(state, DashboardAction::GoToFirst);
        assert_eq!((state.cursor, state.scroll_row), (0, 0));
    }

    #[test]
    fn test_page_down_and_up() {
        let state = apply(loaded_state(20, 0), &[DashboardAction::PageDown]);
        assert_eq!(state.cursor, 6);
        let state = apply(state, &[DashboardAction::MoveRight, DashboardAction::PageUp]);
        assert_eq!(state.cursor, 1);
        let state = reduce_dashboard_state(state, DashboardAction::PageUp);
        assert_eq!(state.cursor, 1);
    }

    #[test]
    fn test_navigation_ignored_while_loading() {
        let state = reduce_dashboard_state(DashboardState::default(), DashboardAction::MoveDown);
        assert_eq!(state.cursor, 0);
        assert!(state.is_loading);
    }

    #[test]
    fn test_tab_switch_keeps_records_and_resets_cursor() {
        let state = apply(loaded_state(4, 3), &[DashboardAction::GoToLast]);
        let companies = state.companies.clone();
        let projects = state.projects.clone();
        let version = state.data_version;

        let state = reduce_dashboard_state(state, DashboardAction::ToggleTab);
        assert_eq!(state.active_tab, RecordKind::Project);
        assert_eq!(state.cursor, 0);
        assert!(Arc::ptr_eq(&state.companies, &companies));
        assert!(Arc::ptr_eq(&state.projects, &projects));
        assert_eq!(state.data_version, version);

        let state = reduce_dashboard_state(state, DashboardAction::SwitchTab(RecordKind::Company));
        assert_eq!(state.active_tab, RecordKind::Company);
    }

    // ------------------------------------------------------------------------
    // Search
    // ------------------------------------------------------------------------

    #[test]
    fn test_query_change_resets_cursor_and_scroll() {
        let state = apply(loaded_state(20, 0), &[DashboardAction::GoToLast]);
        assert!(state.scroll_row > 0);
        let state = reduce_dashboard_state(state, DashboardAction::UpdateSearch("1".to_string()));
        assert_eq!((state.cursor, state.scroll_row), (0, 0));
    }

    #[test]
    fn test_search_enter_keeps_query_and_esc_clears_it() {
        let state = apply(
            loaded_state(3, 0),
            &[
                DashboardAction::FocusSearch,
                DashboardAction::UpdateSearch("Company 2".to_string()),
                DashboardAction::ExitSearch,
            ],
        );
        assert!(!state.search_focused);
        assert_eq!(state.filtered_len(), 1);

        let state = apply(
            state,
            &[DashboardAction::FocusSearch, DashboardAction::ClearSearchAndExit],
        );
        assert!(state.search_query.is_empty());
        assert_eq!(state.filtered_len(), 3);
    }

    // ------------------------------------------------------------------------
    // Detail modal
    // ------------------------------------------------------------------------

    #[test]
    fn test_open_and_close_detail_leaves_grid_untouched() {
        let state = apply(
            loaded_state(4, 0),
            &[DashboardAction::MoveRight, DashboardAction::MoveDown],
        );
        let cursor = state.cursor;

        let opened = reduce_dashboard_state(state, DashboardAction::OpenSelected);
        match &opened.selected {
            Some(Record::Company(c)) => assert_eq!(c.company_name.as_deref(), Some("Company 3")),
            other => panic!("expected company, got {other:?}"),
        }

        // Grid input is captured while the modal is up
        let moved = reduce_dashboard_state(opened, DashboardAction::MoveUp);
        assert_eq!(moved.cursor, cursor);

        let closed = reduce_dashboard_state(moved, DashboardAction::CloseDetail);
        assert!(closed.selected.is_none());
        assert_eq!(closed.cursor, cursor);
        assert_eq!(closed.active_tab, RecordKind::Company);
    }

    #[test]
    fn test_open_uses_filtered_position() {
        let state = apply(
            loaded_state(0, 3),
            &[
                DashboardAction::ToggleTab,
                DashboardAction::UpdateSearch("project 2".to_string()),
                DashboardAction::OpenSelected,
            ],
        );
        assert_eq!(state.selected.as_ref().and_then(|r| r.id()), Some("p2"));
    }

    #[test]
    fn test_detail_scroll_is_bounded() {
        let mut state = loaded_state(1, 0);
        Arc::make_mut(&mut state.companies)[0].company_profile = Some("word ".repeat(2000));
        let mut state = reduce_dashboard_state(state, DashboardAction::OpenSelected);

        for _ in 0..300 {
            state = reduce_dashboard_state(state, DashboardAction::ScrollDetailDown);
        }
        let vm = compute_dashboard_view_model(&state);
        let detail = vm.detail.unwrap();
        assert_eq!(detail.scroll, detail.lines.len() - detail.visible_lines);

        let state = reduce_dashboard_state(state, DashboardAction::ScrollDetailUp);
        assert_eq!(state.detail_scroll, detail.scroll - 1);
    }

    // ------------------------------------------------------------------------
    // Keys and mouse
    // ------------------------------------------------------------------------

    #[test]
    fn test_key_mapping_normal_mode() {
        let state = loaded_state(2, 2);
        let (code, mods) = key(KeyCode::Tab);
        assert_eq!(key_to_action(code, mods, &state), Some(DashboardAction::ToggleTab));
        let (code, mods) = key(KeyCode::Char('2'));
        assert_eq!(
            key_to_action(code, mods, &state),
            Some(DashboardAction::SwitchTab(RecordKind::Project))
        );
        let (code, mods) = key(KeyCode::Enter);
        assert_eq!(key_to_action(code, mods, &state), Some(DashboardAction::OpenSelected));
        let (code, mods) = key(KeyCode::Char('q'));
        assert_eq!(key_to_action(code, mods, &state), Some(DashboardAction::Quit));
        assert_eq!(
            key_to_action(KeyCode::Char('q'), KeyModifiers::CONTROL, &state),
            Some(DashboardAction::Quit)
        );
    }

    #[test]
    fn test_key_mapping_modal_captures_input() {
        let state = reduce_dashboard_state(loaded_state(1, 0), DashboardAction::OpenSelected);
        let (code, mods) = key(KeyCode::Char('q'));
        assert_eq!(key_to_action(code, mods, &state), Some(DashboardAction::CloseDetail));
        let (code, mods) = key(KeyCode::Tab);
        assert_eq!(key_to_action(code, mods, &state), None);
        let (code, mods) = key(KeyCode::Char('j'));
        assert_eq!(
            key_to_action(code, mods, &state),
            Some(DashboardAction::ScrollDetailDown)
        );
    }

    #[test]
    fn test_key_mapping_search_mode() {
        let state = reduce_dashboard_state(loaded_state(1, 0), DashboardAction::FocusSearch);
        let (code, mods) = key(KeyCode::Char('q'));
        assert_eq!(key_to_action(code, mods, &state), None);
        let (code, mods) = key(KeyCode::Esc);
        assert_eq!(
            key_to_action(code, mods, &state),
            Some(DashboardAction::ClearSearchAndExit)
        );
        let (code, mods) = key(KeyCode::Enter);
        assert_eq!(key_to_action(code, mods, &state), Some(DashboardAction::ExitSearch));
    }

    #[test]
    fn test_click_opens_card_and_backdrop_closes() {
        let state = loaded_state(3, 0);
        assert_eq!(
            click_to_action(&state, 60, GRID_TOP + 1),
            Some(DashboardAction::OpenAt(1))
        );

        let state = reduce_dashboard_state(state, DashboardAction::OpenAt(1));
        assert_eq!(state.cursor, 1);
        assert!(state.selected.is_some());

        // Inside the modal does nothing, outside dismisses
        assert_eq!(click_to_action(&state, 50, 20), None);
        assert_eq!(
            click_to_action(&state, 0, 0),
            Some(DashboardAction::CloseDetail)
        );
    }

    #[test]
    fn test_click_ignored_while_loading() {
        let state = DashboardState {
            viewport: Viewport::new(100, 50),
            ..Default::default()
        };
        assert_eq!(click_to_action(&state, 10, GRID_TOP + 1), None);
    }

    // ------------------------------------------------------------------------
    // View model
    // ------------------------------------------------------------------------

    #[test]
    fn test_view_model_only_holds_visible_cards() {
        let state = loaded_state(20, 0);
        let vm = compute_dashboard_view_model(&state);
        assert_eq!(vm.grid.cards.len(), 6);
        assert_eq!(vm.card_keys.len(), 20);
        assert_eq!(vm.grid.total_rows, 10);
        assert!(vm.grid.cards[0].is_selected);
        assert_eq!(vm.grid.cards[0].key, "company:c0");
    }

    #[test]
    fn test_company_card_placeholders() {
        let card = company_card(&Company::default(), &TimeZone::UTC);
        assert_eq!(card.name, "N/A");
        assert_eq!(card.status, "Inactive");
        assert_eq!(card.contact, "N/A - N/A");
        assert_eq!(card.years, "0");
        assert_eq!(card.employees, "0");
        assert_eq!(card.turnover, "N/A");
        assert!(card.website.is_none());
        assert!(card.tags.is_empty());
        assert_eq!(card.created, "N/A");
    }

    #[test]
    fn test_project_card_clamps_details() {
        let project = Project {
            project_details: Some("lorem ipsum dolor sit amet ".repeat(20)),
            ..Default::default()
        };
        let card = project_card(&project, 20, &TimeZone::UTC);
        assert_eq!(card.details.lines().count(), PROJECT_DETAIL_LINES);
        assert!(card.details.ends_with("..."));

        let empty = project_card(&Project::default(), 20, &TimeZone::UTC);
        assert_eq!(empty.details, "No details provided");
    }

    #[test]
    fn test_company_detail_lines_snapshot() {
        let company = Company {
            company_name: Some("Acme Corp".to_string()),
            business_type: Some("Logistics".to_string()),
            contact_person_name: Some("Jane".to_string()),
            email: Some("jane@acme.com".to_string()),
            years_in_operation: Some("12".to_string()),
            office_address: Some("12 Dock Rd".to_string()),
            safety_record: Some("No incidents since 2019".to_string()),
            not_blacklisted: Some(true),
            created_at: Some("2024-01-05T10:00:00.000Z".to_string()),
            ..Default::default()
        };
        let lines = detail_lines(&Record::Company(company), 60, &TimeZone::UTC);
        let text: Vec<String> = lines.iter().map(DetailLine::plain).collect();

        insta::assert_snapshot!(text.join("\n"), @r"
        Acme Corp
        Logistics
        [Not Blacklisted]

        ## Contact Person
        Name: Jane
        Designation: N/A
        Email: jane@acme.com
        Phone: N/A

        Years in Operation: 12 | Employees: 0 | Annual Turnover: N/A

        Office Address: 12 Dock Rd

        ## Safety Record
        No incidents since 2019

        -- Registered on Jan 5, 2024
        ");
    }

    #[test]
    fn test_company_detail_lines_fit_modal_width() {
        let width = 76;
        let address = "Unit 14, Harbourside Industrial Estate, 220 Container Terminal Road, \
                       Eastern Docklands, Port Authority Zone B, PO Box 5521";
        assert!(address.len() > 120);
        let company = Company {
            company_name: Some("Acme Corp".to_string()),
            office_address: Some(address.to_string()),
            annual_turnover: Some("USD 12,500,000 (audited, fiscal year 2023)".to_string()),
            ..Default::default()
        };

        let lines = detail_lines(&Record::Company(company), width, &TimeZone::UTC);
        for line in &lines {
            let plain = line.plain();
            assert!(plain.chars().count() <= width, "too wide: {plain:?}");
        }

        // Nothing of the address is lost, continuation rows line up under the value
        let start = lines
            .iter()
            .position(|line| matches!(line, DetailLine::Field { label: "Office Address", .. }))
            .unwrap();
        let mut words = Vec::new();
        if let DetailLine::Field { value, .. } = &lines[start] {
            words.extend(value.split_whitespace().map(str::to_string));
        }
        for line in &lines[start + 1..] {
            let DetailLine::Text(text) = line else { break };
            assert!(text.starts_with(&" ".repeat("Office Address: ".len())));
            words.extend(text.split_whitespace().map(str::to_string));
        }
        assert_eq!(words.join(" "), address.split_whitespace().collect::<Vec<_>>().join(" "));

        // Stats that do not fit on one row become one field each
        assert!(lines.iter().all(|line| !matches!(line, DetailLine::Stats(_))));
        assert!(lines.contains(&DetailLine::Field {
            label: "Employees",
            value: "0".to_string(),
        }));
    }

    #[test]
    fn test_project_detail_lines_preserve_line_breaks() {
        let project = Project {
            name: Some("Warehouse".to_string()),
            project_details: Some("Phase 1: slab\nPhase 2: frame".to_string()),
            ..Default::default()
        };
        let lines = detail_lines(&Record::Project(project), 60, &TimeZone::UTC);
        assert!(lines.contains(&DetailLine::Text("Phase 1: slab".to_string())));
        assert!(lines.contains(&DetailLine::Text("Phase 2: frame".to_string())));
        assert_eq!(
            lines.last(),
            Some(&DetailLine::Footer("Submitted on N/A".to_string()))
        );
    }

    #[test]
    fn test_adjust_scroll() {
        assert_eq!(adjust_scroll(0, 0, 3), 0);
        assert_eq!(adjust_scroll(0, 5, 3), 3);
        assert_eq!(adjust_scroll(4, 2, 3), 2);
        assert_eq!(adjust_scroll(2, 3, 3), 2);
        assert_eq!(adjust_scroll(7, 3, 0), 0);
    }
}
