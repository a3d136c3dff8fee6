//! Key-binding help overlay.

use crate::view::image_overlay::centered_rect;
use crate::view::styles::Palette;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

const BINDINGS: &[(&str, &str)] = &[
    ("j / \u{2193}, k / \u{2191}", "scroll"),
    ("Ctrl+d / Ctrl+u", "half page"),
    ("g / Home", "top"),
    ("G / End", "latest entry"),
    ("Tab / n, Shift+Tab / p", "next / previous entry"),
    ("\u{2190} / h, \u{2192} / l", "carousel previous / next"),
    ("1-9", "bring image to front / open it"),
    ("Enter", "open front image"),
    ("Esc", "close overlay"),
    ("t", "toggle theme"),
    ("r", "reload document"),
    ("?", "toggle this help"),
    ("q", "quit"),
];

/// Render the help overlay over the current frame.
pub fn render_help(frame: &mut Frame, palette: &Palette) {
    let height = BINDINGS.len() as u16 + 2;
    let area = centered_rect(frame.area(), 52, height);
    frame.render_widget(Clear, area);

    let lines: Vec<Line> = BINDINGS
        .iter()
        .map(|(keys, action)| {
            Line::from(vec![
                Span::styled(format!("{keys:<24}"), palette.accent),
                Span::styled((*action).to_string(), palette.text),
            ])
        })
        .collect();

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(palette.accent)
        .title(Line::styled(" Keys ", palette.accent))
        .style(palette.background);
    frame.render_widget(Paragraph::new(lines).block(block), area);
}
