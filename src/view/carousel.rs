//! Terminal rendering of the stacked-card carousel.
//!
//! Consumes the layout descriptors from [`crate::carousel::layout`] and maps
//! them onto the cell grid: percent offsets become column shifts, scale
//! shrinks the card rectangle, opacity becomes the DIM modifier, and the
//! perspective rotation shows up as a lean glyph in the card title. Cards
//! draw back layer first so the front card overpaints its neighbors.

use crate::carousel::{CarouselState, ItemLayout, StackLayer, VisualParams};
use crate::view::styles::Palette;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Paragraph, Widget, Wrap};

/// Rows a gallery pane occupies inside a timeline entry.
pub const GALLERY_HEIGHT: u16 = 9;

/// Width of the front card as a fraction of the pane, in percent.
const BASE_CARD_WIDTH_PCT: u16 = 60;

/// Renders one carousel into its gallery pane.
pub struct CarouselWidget<'a> {
    carousel: &'a CarouselState,
    palette: &'a Palette,
    focused: bool,
}

impl<'a> CarouselWidget<'a> {
    /// Create a widget for `carousel`; `focused` highlights the front card.
    pub fn new(carousel: &'a CarouselState, palette: &'a Palette, focused: bool) -> Self {
        Self {
            carousel,
            palette,
            focused,
        }
    }
}

impl Widget for CarouselWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width < 8 || area.height < 4 {
            return;
        }
        if self.carousel.is_empty() {
            let msg = Paragraph::new(Line::styled("(no images)", self.palette.muted));
            msg.render(vertical_center(area, 1), buf);
            return;
        }

        let cards_area = Rect {
            height: area.height - 1,
            ..area
        };

        let mut layouts = self.carousel.layout();
        layouts.sort_by_key(|l| (l.params.stack, l.index));

        for layout in &layouts {
            self.render_card(layout, cards_area, buf);
        }

        self.render_footer(area, buf);
    }
}

impl CarouselWidget<'_> {
    fn render_card(&self, layout: &ItemLayout, cards_area: Rect, buf: &mut Buffer) {
        let rect = card_rect(cards_area, &layout.params);
        let Some(rect) = clip(rect, cards_area) else {
            return;
        };
        if rect.width < 4 || rect.height < 3 {
            return;
        }

        let is_front = layout.params.stack == StackLayer::Front;
        let mut border_style = if is_front && self.focused {
            self.palette.accent
        } else {
            self.palette.frame
        };
        let mut text_style = self.palette.text;
        if layout.params.opacity < 1.0 {
            border_style = Palette::dimmed(border_style);
            text_style = Palette::dimmed(text_style);
        }
        if layout.params.opacity < 0.7 {
            text_style = self.palette.muted;
        }

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(card_title(layout));
        let inner = block.inner(rect);
        block.render(rect, buf);

        let item = &self.carousel.items()[layout.index];
        let label = item
            .alt_text
            .as_deref()
            .unwrap_or_else(|| basename(&item.source));
        Paragraph::new(label)
            .style(text_style)
            .wrap(Wrap { trim: true })
            .render(inner, buf);
    }

    fn render_footer(&self, area: Rect, buf: &mut Buffer) {
        let footer = Rect {
            y: area.y + area.height - 1,
            height: 1,
            ..area
        };

        if self.carousel.has_navigation() {
            buf.set_string(footer.x, footer.y, "\u{2039}", self.palette.accent);
            buf.set_string(
                footer.x + footer.width - 1,
                footer.y,
                "\u{203a}",
                self.palette.accent,
            );
        }

        let counter = format!(
            "{}/{}",
            self.carousel.active_index() + 1,
            self.carousel.len()
        );
        let caption = self
            .carousel
            .active_item()
            .and_then(|item| item.caption.as_deref());
        let text = match caption {
            Some(caption) => format!("{counter}  {caption}"),
            None => counter,
        };
        let max_width = footer.width.saturating_sub(4) as usize;
        let text = truncate_to_width(&text, max_width);
        let x = footer.x + (footer.width.saturating_sub(text.chars().count() as u16)) / 2;
        buf.set_string(x, footer.y, &text, self.palette.muted);
    }
}

/// Map one card's visual parameters onto a cell rectangle within `area`.
///
/// The offset is a percentage of the pane width anchored at the center, so
/// ±40% lands the mid cards half a card away and ±80% pushes the back cards
/// to the edges. Scale shrinks both dimensions around the card center.
pub fn card_rect(area: Rect, params: &VisualParams) -> Rect {
    let base_w =
        ((u32::from(area.width) * u32::from(BASE_CARD_WIDTH_PCT) / 100) as u16).max(6);
    let base_h = area.height.max(3);

    let w = ((f32::from(base_w) * params.scale) as u16).max(4);
    let h = ((f32::from(base_h) * params.scale) as u16).max(3);

    let center = i32::from(area.x) + i32::from(area.width) / 2
        + i32::from(area.width) * i32::from(params.offset_pct) / 200;
    let x = center - i32::from(w) / 2;
    let y = i32::from(area.y) + i32::from(area.height.saturating_sub(h)) / 2;

    Rect {
        x: x.max(0) as u16,
        y: y.max(0) as u16,
        width: w,
        height: h,
    }
}

/// Title line for a card: its 1-indexed slot (the digit key that activates
/// it) plus a lean glyph standing in for the perspective rotation.
fn card_title(layout: &ItemLayout) -> Line<'static> {
    let number = layout.index + 1;
    let text = if layout.params.rotation_deg < 0.0 {
        format!(" {number} \u{2571}")
    } else if layout.params.rotation_deg > 0.0 {
        format!("\u{2572} {number} ")
    } else {
        format!(" {number} ")
    };
    Line::from(text)
}

fn clip(rect: Rect, bounds: Rect) -> Option<Rect> {
    let clipped = rect.intersection(bounds);
    if clipped.width == 0 || clipped.height == 0 {
        None
    } else {
        Some(clipped)
    }
}

fn vertical_center(area: Rect, height: u16) -> Rect {
    Rect {
        y: area.y + area.height.saturating_sub(height) / 2,
        height: height.min(area.height),
        ..area
    }
}

fn basename(source: &str) -> &str {
    source.rsplit('/').next().unwrap_or(source)
}

fn truncate_to_width(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        text.to_string()
    } else {
        text.chars().take(max.saturating_sub(1)).collect::<String>() + "\u{2026}"
    }
}
