//! Frame composition: header, timeline, status bar.

use crate::state::AppState;
use crate::view::styles::Palette;
use crate::view::timeline::{self, TimelineWidget};
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};
use ratatui::Frame;

/// Rows taken by the header and the status bar.
pub const CHROME_ROWS: u16 = 3;

/// Sizes the key handlers need, measured during the last draw.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LayoutMetrics {
    /// Maximum scroll offset for the current viewport.
    pub scroll_max: usize,
    /// Rows a page-scroll action moves.
    pub page_rows: usize,
    /// Width the timeline was laid out at.
    pub content_width: u16,
}

/// Maximum scroll offset for a terminal of `width` x `height`.
pub fn scroll_max(state: &AppState, width: u16, height: u16) -> usize {
    let viewport = height.saturating_sub(CHROME_ROWS);
    timeline::content_height(state, width).saturating_sub(usize::from(viewport))
}

/// Render one frame and report the layout metrics.
///
/// Clamps the scroll offset first so a resize or reload never leaves the
/// viewport past the end of the content.
pub fn render_app(
    frame: &mut Frame,
    state: &mut AppState,
    palette: &Palette,
    source_name: &str,
) -> LayoutMetrics {
    let area = frame.area();
    frame.render_widget(Block::default().style(palette.background), area);

    let [header, content, status] = Layout::vertical([
        Constraint::Length(2),
        Constraint::Min(0),
        Constraint::Length(1),
    ])
    .areas(area);

    let metrics = LayoutMetrics {
        scroll_max: timeline::content_height(state, content.width)
            .saturating_sub(usize::from(content.height)),
        page_rows: usize::from(content.height / 2).max(1),
        content_width: content.width,
    };
    state.scroll.clamp(metrics.scroll_max);

    render_header(frame, state, palette, header);
    frame.render_widget(TimelineWidget::new(state, palette), content);
    render_status(frame, state, palette, source_name, metrics.scroll_max, status);

    metrics
}

fn render_header(frame: &mut Frame, state: &AppState, palette: &Palette, area: Rect) {
    let portfolio = state.portfolio();

    let mut title = vec![Span::styled(
        portfolio.display_name().to_string(),
        palette.accent,
    )];
    if let Some(tagline) = &portfolio.tagline {
        title.push(Span::styled(format!("  {tagline}"), palette.muted));
    }

    let links = portfolio
        .links
        .iter()
        .map(|link| Span::styled(link.display_label().to_string(), palette.link))
        .collect::<Vec<_>>();
    let mut link_line = Vec::new();
    for (i, span) in links.into_iter().enumerate() {
        if i > 0 {
            link_line.push(Span::styled(" \u{00b7} ", palette.muted));
        }
        link_line.push(span);
    }

    frame.render_widget(
        Paragraph::new(vec![Line::from(title), Line::from(link_line)]),
        area,
    );
}

fn render_status(
    frame: &mut Frame,
    state: &AppState,
    palette: &Palette,
    source_name: &str,
    max: usize,
    area: Rect,
) {
    let count = state.portfolio().entries.len();
    let left = format!("{source_name}  \u{2502}  {count} entries");

    // The to-latest hint dims near the bottom, where it has nothing to do.
    let latest_style = if state.scroll.near_bottom(max) {
        Palette::dimmed(palette.muted)
    } else {
        palette.accent
    };

    let line = Line::from(vec![
        Span::styled(left, palette.muted),
        Span::styled("  G latest \u{2193}", latest_style),
        Span::styled(
            format!("  \u{2502}  theme {}  \u{2502}  ? help  q quit", state.theme.name()),
            palette.muted,
        ),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}
