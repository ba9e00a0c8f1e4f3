//! Theme system for TUI colors and styles
//!
//! Navy and gold, matching the portal's brand colors.

use iocraft::prelude::Color;

/// Theme configuration for TUI components
#[derive(Debug, Clone)]
pub struct Theme {
    // Brand
    pub navy: Color,
    pub accent: Color,

    // Status badges
    pub status_active: Color,
    pub status_inactive: Color,

    // UI colors
    pub border: Color,
    pub border_focused: Color,
    pub border_fresh: Color,
    pub background: Color,
    pub text: Color,
    pub text_dimmed: Color,
    pub highlight: Color,
    pub tag: Color,
    pub search_match: Color,
}

const GRAY: Color = Color::Rgb {
    r: 120,
    g: 120,
    b: 120,
};

impl Default for Theme {
    fn default() -> Self {
        Self {
            navy: Color::Rgb {
                r: 24,
                g: 34,
                b: 50,
            },
            accent: Color::Rgb {
                r: 253,
                g: 199,
                b: 0,
            },

            status_active: Color::Green,
            status_inactive: Color::Red,

            border: GRAY,
            border_focused: Color::Rgb {
                r: 253,
                g: 199,
                b: 0,
            },
            border_fresh: Color::Cyan,
            background: Color::Reset,
            text: Color::White,
            text_dimmed: GRAY,
            highlight: Color::Blue,
            tag: Color::Cyan,
            search_match: Color::Yellow,
        }
    }
}

impl Theme {
    /// Badge color for a company's status flag
    pub fn status_color(&self, active: bool) -> Color {
        if active {
            self.status_active
        } else {
            self.status_inactive
        }
    }
}

/// Global theme instance
pub static THEME: std::sync::LazyLock<Theme> = std::sync::LazyLock::new(Theme::default);

/// Get a reference to the global theme
pub fn theme() -> &'static Theme {
    &THEME
}
