//! Screen geometry for the dashboard.
//!
//! The dashboard renders every band at a fixed height so that mouse clicks
//! can be mapped back to cards and modal edges without layout feedback.

use crate::types::RecordKind;

pub const HERO_HEIGHT: u16 = 3;
pub const STATS_HEIGHT: u16 = 3;
/// "View Records" heading plus the tab row
pub const TABS_HEIGHT: u16 = 2;
pub const SEARCH_HEIGHT: u16 = 3;
pub const FOOTER_HEIGHT: u16 = 1;

/// First terminal row of the card grid
pub const GRID_TOP: u16 = HERO_HEIGHT + STATS_HEIGHT + TABS_HEIGHT + SEARCH_HEIGHT;

pub const COMPANY_CARD_MIN_WIDTH: u16 = 44;
pub const COMPANY_MAX_COLUMNS: usize = 2;
pub const COMPANY_CARD_HEIGHT: u16 = 11;

pub const PROJECT_CARD_MIN_WIDTH: u16 = 34;
pub const PROJECT_MAX_COLUMNS: usize = 3;
pub const PROJECT_CARD_HEIGHT: u16 = 9;

/// Lines of project details shown on a card
pub const PROJECT_DETAIL_LINES: usize = 3;

/// Terminal size in cells
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: 80,
            height: 24,
        }
    }
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }

    /// Rows left for the card grid
    pub fn grid_height(&self) -> u16 {
        self.height.saturating_sub(GRID_TOP + FOOTER_HEIGHT)
    }
}

/// Number of card columns for a tab at a given terminal width
pub fn grid_columns(kind: RecordKind, width: u16) -> usize {
    let (min_width, max_columns) = match kind {
        RecordKind::Company => (COMPANY_CARD_MIN_WIDTH, COMPANY_MAX_COLUMNS),
        RecordKind::Project => (PROJECT_CARD_MIN_WIDTH, PROJECT_MAX_COLUMNS),
    };
    usize::from(width / min_width).clamp(1, max_columns)
}

pub fn card_height(kind: RecordKind) -> u16 {
    match kind {
        RecordKind::Company => COMPANY_CARD_HEIGHT,
        RecordKind::Project => PROJECT_CARD_HEIGHT,
    }
}

/// How the active tab's cards are laid out
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridLayout {
    pub columns: usize,
    /// Whole card rows that fit, at least one
    pub visible_rows: usize,
    pub card_width: u16,
    pub card_height: u16,
}

impl GridLayout {
    pub fn new(kind: RecordKind, viewport: Viewport) -> Self {
        let columns = grid_columns(kind, viewport.width);
        let card_height = card_height(kind);
        let visible_rows = usize::from(viewport.grid_height() / card_height).max(1);
        let card_width = viewport.width / columns as u16;

        Self {
            columns,
            visible_rows,
            card_width,
            card_height,
        }
    }

    /// Grid row holding the card at `index`
    pub fn row_of(&self, index: usize) -> usize {
        index / self.columns
    }

    /// Column holding the card at `index`
    pub fn column_of(&self, index: usize) -> usize {
        index % self.columns
    }

    pub fn total_rows(&self, count: usize) -> usize {
        count.div_ceil(self.columns)
    }

    /// Cells available for text inside a card (border and padding removed)
    pub fn card_text_width(&self) -> usize {
        usize::from(self.card_width.saturating_sub(4))
    }
}

/// Card under a terminal cell, as an index into the filtered list
pub fn card_index_at(
    layout: &GridLayout,
    viewport: Viewport,
    scroll_row: usize,
    count: usize,
    column: u16,
    row: u16,
) -> Option<usize> {
    if row < GRID_TOP || row >= GRID_TOP + viewport.grid_height() {
        return None;
    }

    let grid_row = usize::from((row - GRID_TOP) / layout.card_height);
    if grid_row >= layout.visible_rows {
        return None;
    }
    let grid_col = usize::from(column / layout.card_width.max(1));
    if grid_col >= layout.columns {
        return None;
    }

    let index = (scroll_row + grid_row) * layout.columns + grid_col;
    (index < count).then_some(index)
}

/// A screen rectangle in cells
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub height: u16,
}

impl Rect {
    /// A `width` x `height` rectangle centered in the viewport
    pub fn centered(viewport: Viewport, width: u16, height: u16) -> Self {
        let width = width.min(viewport.width);
        let height = height.min(viewport.height);
        Self {
            x: (viewport.width - width) / 2,
            y: (viewport.height - height) / 2,
            width,
            height,
        }
    }

    pub fn contains(&self, column: u16, row: u16) -> bool {
        column >= self.x
            && column < self.x.saturating_add(self.width)
            && row >= self.y
            && row < self.y.saturating_add(self.height)
    }
}

/// Where the record detail modal is drawn
pub fn detail_modal_rect(viewport: Viewport) -> Rect {
    let width = viewport.width.saturating_sub(4).clamp(30, 96);
    let height = viewport.height.saturating_sub(4).max(12);
    Rect::centered(viewport, width, height)
}

/// Where the help modal is drawn
pub fn help_modal_rect(viewport: Viewport) -> Rect {
    let width = viewport.width.saturating_sub(4).clamp(30, 60);
    let height = viewport.height.saturating_sub(4).clamp(10, 22);
    Rect::centered(viewport, width, height)
}

/// Text columns inside the detail modal (border and padding removed)
pub fn detail_text_width(viewport: Viewport) -> usize {
    usize::from(detail_modal_rect(viewport).width.saturating_sub(4))
}

/// Detail lines that fit between the modal's title and footer rows
pub fn detail_visible_lines(viewport: Viewport) -> usize {
    // border (2) + title row (2) + footer row (2)
    usize::from(detail_modal_rect(viewport).height.saturating_sub(6)).max(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_columns_respect_min_width_and_cap() {
        assert_eq!(grid_columns(RecordKind::Company, 40), 1);
        assert_eq!(grid_columns(RecordKind::Company, 88), 2);
        assert_eq!(grid_columns(RecordKind::Company, 300), 2);
        assert_eq!(grid_columns(RecordKind::Project, 67), 1);
        assert_eq!(grid_columns(RecordKind::Project, 68), 2);
        assert_eq!(grid_columns(RecordKind::Project, 200), 3);
    }

    #[test]
    fn test_layout_rows_fit_grid_height() {
        // 50 rows - 11 above the grid - 1 footer = 38 rows, 3 company cards
        let layout = GridLayout::new(RecordKind::Company, Viewport::new(100, 50));
        assert_eq!(layout.columns, 2);
        assert_eq!(layout.visible_rows, 3);
        assert_eq!(layout.card_width, 50);

        let tiny = GridLayout::new(RecordKind::Project, Viewport::new(20, 5));
        assert_eq!(tiny.visible_rows, 1);
        assert_eq!(tiny.columns, 1);
    }

    #[test]
    fn test_card_index_at() {
        let viewport = Viewport::new(100, 50);
        let layout = GridLayout::new(RecordKind::Company, viewport);

        assert_eq!(card_index_at(&layout, viewport, 0, 5, 10, GRID_TOP), Some(0));
        assert_eq!(card_index_at(&layout, viewport, 0, 5, 60, GRID_TOP), Some(1));
        assert_eq!(
            card_index_at(&layout, viewport, 0, 5, 10, GRID_TOP + COMPANY_CARD_HEIGHT),
            Some(2)
        );
        // Scrolled down one row
        assert_eq!(card_index_at(&layout, viewport, 1, 5, 10, GRID_TOP), Some(2));
        // Past the end of the list
        assert_eq!(card_index_at(&layout, viewport, 1, 3, 60, GRID_TOP), None);
        // Above the grid
        assert_eq!(card_index_at(&layout, viewport, 0, 5, 10, 2), None);
    }

    #[test]
    fn test_modal_rect_is_centered_and_contains() {
        let viewport = Viewport::new(100, 40);
        let rect = detail_modal_rect(viewport);
        assert_eq!(rect, Rect { x: 2, y: 2, width: 96, height: 36 });
        assert!(rect.contains(2, 2));
        assert!(!rect.contains(1, 10));
        assert!(!rect.contains(50, 38));
    }

    #[test]
    fn test_modal_rect_never_exceeds_viewport() {
        let viewport = Viewport::new(20, 8);
        let rect = detail_modal_rect(viewport);
        assert!(rect.width <= 20 && rect.height <= 8);
        assert_eq!((rect.x, rect.y), (0, 0));
    }
}
