//! Theme and styling configuration.

use std::sync::OnceLock;

use ratatui::style::{Color, Modifier, Style};

static THEME: OnceLock<Theme> = OnceLock::new();

/// Color theme for the widgets.
#[derive(Debug, Clone)]
pub struct Theme {
    /// Primary foreground color.
    pub fg: Color,
    /// Dimmed text (hints, counters, inactive chrome).
    pub dim: Color,
    /// Accent color (active page, focused input, matches).
    pub accent: Color,
    /// Border color.
    pub border: Color,
    /// Style for the header row.
    pub header: Style,
    /// Style for the cursor row.
    pub cursor_row: Style,
    /// Style for rows flagged active.
    pub active_row: Style,
}

impl Theme {
    /// The default dark theme.
    pub fn dark() -> Self {
        Self {
            fg: Color::White,
            dim: Color::DarkGray,
            accent: Color::Cyan,
            border: Color::DarkGray,
            header: Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
            cursor_row: Style::default().bg(Color::DarkGray),
            active_row: Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        }
    }

    /// A light theme for bright terminals.
    pub fn light() -> Self {
        Self {
            fg: Color::Black,
            dim: Color::Gray,
            accent: Color::Blue,
            border: Color::Gray,
            header: Style::default()
                .fg(Color::Blue)
                .add_modifier(Modifier::BOLD),
            cursor_row: Style::default().bg(Color::Gray),
            active_row: Style::default()
                .fg(Color::Magenta)
                .add_modifier(Modifier::BOLD),
        }
    }

    /// Look up a theme by name, falling back to dark.
    pub fn by_name(name: &str) -> Self {
        match name {
            "light" => Self::light(),
            _ => Self::dark(),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

/// Install the global theme. Later calls are ignored.
pub fn init_theme(theme: Theme) {
    let _ = THEME.set(theme);
}

/// The installed theme, or the default if none was installed.
pub fn theme() -> &'static Theme {
    THEME.get_or_init(Theme::default)
}
