//! Theme palettes and color configuration.

use crate::state::ResolvedTheme;
use ratatui::style::{Color, Modifier, Style};

// ===== ColorConfig =====

/// Configuration for color output.
///
/// Colors are disabled by the `--no-color` CLI flag or the `NO_COLOR`
/// environment variable (any value).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorConfig {
    enabled: bool,
}

impl ColorConfig {
    /// Create a ColorConfig from CLI args and environment.
    ///
    /// Priority (first match wins):
    /// 1. `--no-color` flag (disables colors)
    /// 2. `NO_COLOR` env var (any value disables colors)
    /// 3. Default: colors enabled
    pub fn from_env_and_args(no_color_flag: bool) -> Self {
        let enabled = !no_color_flag && std::env::var("NO_COLOR").is_err();
        Self { enabled }
    }

    /// Check if colors are enabled.
    pub fn colors_enabled(self) -> bool {
        self.enabled
    }
}

// ===== Palette =====

/// Styles for every themed element, resolved once per frame.
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    /// Whole-screen background fill.
    pub background: Style,
    /// Regular body text.
    pub text: Style,
    /// De-emphasized text (dates, hints, dimmed indicator).
    pub muted: Style,
    /// Header name and focused-card borders.
    pub accent: Style,
    /// Unfocused card borders and the timeline spine.
    pub frame: Style,
    /// Tag chips.
    pub tag: Style,
    /// Links and the entry call-to-action.
    pub link: Style,
}

impl Palette {
    /// Build the palette for a resolved theme, honoring color config.
    pub fn new(theme: ResolvedTheme, colors: ColorConfig) -> Self {
        if !colors.colors_enabled() {
            return Self::plain();
        }
        match theme {
            ResolvedTheme::Dark => Self::dark(),
            ResolvedTheme::Light => Self::light(),
        }
    }

    fn dark() -> Self {
        Self {
            background: Style::default(),
            text: Style::default().fg(Color::Gray),
            muted: Style::default().fg(Color::DarkGray),
            accent: Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            frame: Style::default().fg(Color::DarkGray),
            tag: Style::default().fg(Color::Yellow),
            link: Style::default()
                .fg(Color::Blue)
                .add_modifier(Modifier::UNDERLINED),
        }
    }

    fn light() -> Self {
        Self {
            background: Style::default().bg(Color::White),
            text: Style::default().fg(Color::Black).bg(Color::White),
            muted: Style::default().fg(Color::Gray).bg(Color::White),
            accent: Style::default()
                .fg(Color::Blue)
                .bg(Color::White)
                .add_modifier(Modifier::BOLD),
            frame: Style::default().fg(Color::Gray).bg(Color::White),
            tag: Style::default().fg(Color::Magenta).bg(Color::White),
            link: Style::default()
                .fg(Color::Blue)
                .bg(Color::White)
                .add_modifier(Modifier::UNDERLINED),
        }
    }

    fn plain() -> Self {
        Self {
            background: Style::default(),
            text: Style::default(),
            muted: Style::default(),
            accent: Style::default(),
            frame: Style::default(),
            tag: Style::default(),
            link: Style::default(),
        }
    }

    /// Dim a style for reduced-opacity carousel cards.
    pub fn dimmed(style: Style) -> Style {
        style.add_modifier(Modifier::DIM)
    }
}

// ===== Tests =====
