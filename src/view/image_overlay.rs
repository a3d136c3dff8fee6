//! Enlarged-image overlay.
//!
//! Terminal cells cannot show the bitmap, so "enlarging" presents the full
//! resolved reference with its metadata in a centered modal.

use crate::state::OpenImage;
use crate::view::styles::Palette;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

/// Render the overlay for `image` over the current frame.
pub fn render_image_overlay(frame: &mut Frame, image: &OpenImage, palette: &Palette) {
    let area = centered_rect(frame.area(), 70, 10);
    frame.render_widget(Clear, area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(palette.accent)
        .title(Line::styled(" Image ", palette.accent))
        .style(palette.background);

    let mut lines = vec![Line::from(vec![Span::styled(
        image.source.clone(),
        palette.link,
    )])];
    if let Some(alt) = &image.alt_text {
        lines.push(Line::from(vec![
            Span::styled("Alt: ", palette.muted),
            Span::styled(alt.clone(), palette.text),
        ]));
    }
    if let Some(caption) = &image.caption {
        lines.push(Line::styled(caption.clone(), palette.text));
    }
    lines.push(Line::default());
    lines.push(Line::styled("Esc to close", palette.muted));

    frame.render_widget(
        Paragraph::new(lines).block(block).wrap(Wrap { trim: true }),
        area,
    );
}

/// Center a modal of up to `width` x `height` cells within `area`.
pub fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::ResolvedTheme;
    use crate::view::styles::ColorConfig;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    #[test]
    fn centered_rect_stays_within_bounds() {
        let area = Rect::new(0, 0, 80, 24);
        let rect = centered_rect(area, 70, 10);
        assert_eq!(rect.x, 5);
        assert_eq!(rect.y, 7);

        let small = centered_rect(Rect::new(0, 0, 10, 4), 70, 10);
        assert_eq!(small.width, 10);
        assert_eq!(small.height, 4);
    }

    #[test]
    fn overlay_shows_source_and_metadata() {
        let backend = TestBackend::new(80, 24);
        let mut terminal = Terminal::new(backend).expect("terminal");
        let palette = Palette::new(ResolvedTheme::Dark, ColorConfig::from_env_and_args(true));
        let image = OpenImage {
            source: "images/plan.png".to_string(),
            alt_text: Some("The plan".to_string()),
            caption: Some("First sketch".to_string()),
        };
        terminal
            .draw(|frame| render_image_overlay(frame, &image, &palette))
            .expect("draw");

        let buffer = terminal.backend().buffer().clone();
        let text = (0..24)
            .map(|y| {
                (0..80)
                    .map(|x| buffer[(x, y)].symbol().to_string())
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("\n");
        assert!(text.contains("images/plan.png"));
        assert!(text.contains("The plan"));
        assert!(text.contains("First sketch"));
        assert!(text.contains("Esc to close"));
    }
}
