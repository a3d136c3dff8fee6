//! Vertical timeline rendering.
//!
//! Entries alternate sides around a center spine: even entries put the text
//! card on the left and the gallery on the right, odd entries mirror.
//! The whole timeline is drawn into an off-screen buffer at its natural
//! height and the scrolled window is copied into the frame, so partially
//! visible entries clip cleanly at both edges.

use crate::model::Entry;
use crate::state::AppState;
use crate::view::carousel::{CarouselWidget, GALLERY_HEIGHT};
use crate::view::styles::Palette;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Paragraph, Widget, Wrap};
use unicode_width::UnicodeWidthStr;

/// Width of the center spine column holding the dot and date marker.
const SPINE_WIDTH: u16 = 12;

/// Blank rows between consecutive entries.
const ENTRY_SPACING: u16 = 1;

/// Minimum rows an entry occupies (dot plus date marker).
const MIN_ENTRY_ROWS: u16 = 3;

/// Renders the timeline for the current scroll offset.
///
/// The caller clamps the scroll offset against [`content_height`] before
/// rendering.
pub struct TimelineWidget<'a> {
    state: &'a AppState,
    palette: &'a Palette,
}

impl<'a> TimelineWidget<'a> {
    /// Create a timeline widget over the current state.
    pub fn new(state: &'a AppState, palette: &'a Palette) -> Self {
        Self { state, palette }
    }
}

impl Widget for TimelineWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width < SPINE_WIDTH + 8 || area.height == 0 {
            return;
        }
        let entries = &self.state.portfolio().entries;
        if entries.is_empty() {
            let msg = Paragraph::new(Line::styled("No entries to display.", self.palette.muted))
                .centered();
            let y = area.y + area.height / 2;
            msg.render(Rect::new(area.x, y, area.width, 1), buf);
            return;
        }

        let heights = entry_heights(self.state, area.width);
        let total: usize = heights.iter().map(|h| usize::from(*h)).sum();
        let total_u16 = total.min(usize::from(u16::MAX)) as u16;

        let mut virtual_buf = Buffer::empty(Rect::new(0, 0, area.width, total_u16));
        Block::default()
            .style(self.palette.background)
            .render(virtual_buf.area, &mut virtual_buf);

        let mut y = 0u16;
        for (index, height) in heights.iter().enumerate() {
            let slot = Rect::new(0, y, area.width, height - ENTRY_SPACING);
            self.render_entry(index, slot, &mut virtual_buf);
            y = y.saturating_add(*height);
        }

        let max = total.saturating_sub(usize::from(area.height));
        let offset = self.state.scroll.vertical_offset.min(max) as u16;
        let visible = area.height.min(total_u16.saturating_sub(offset));
        for row in 0..visible {
            for col in 0..area.width {
                buf[(area.x + col, area.y + row)] = virtual_buf[(col, offset + row)].clone();
            }
        }
    }
}

impl TimelineWidget<'_> {
    fn render_entry(&self, index: usize, slot: Rect, buf: &mut Buffer) {
        let entry = &self.state.portfolio().entries[index];
        let focused = self.state.focused_entry == Some(index);
        let side_w = (slot.width - SPINE_WIDTH) / 2;
        let right_x = slot.x + side_w + SPINE_WIDTH;

        // Even entries carry the card on the left, odd on the right.
        let (card_x, gallery_x) = if index % 2 == 0 {
            (slot.x, right_x)
        } else {
            (right_x, slot.x)
        };

        self.render_spine(entry, focused, slot, side_w, buf);

        let card_h = card_height(entry, side_w).min(slot.height);
        let card = Rect::new(card_x, slot.y, side_w, card_h);
        self.render_card(entry, focused, card, buf);

        if let Some(carousel) = self.state.carousel(index) {
            let gallery_h = GALLERY_HEIGHT.min(slot.height);
            let gallery = Rect::new(gallery_x, slot.y, side_w, gallery_h);
            CarouselWidget::new(carousel, self.palette, focused).render(gallery, buf);
        }
    }

    fn render_spine(&self, entry: &Entry, focused: bool, slot: Rect, side_w: u16, buf: &mut Buffer) {
        let center = slot.x + side_w + SPINE_WIDTH / 2;
        for row in 0..slot.height + ENTRY_SPACING {
            buf.set_string(center, slot.y + row, "\u{2502}", self.palette.frame);
        }
        let dot_style = if focused {
            self.palette.accent
        } else {
            self.palette.frame
        };
        buf.set_string(center, slot.y, "\u{25cf}", dot_style);

        let marker = entry.date_marker();
        if !marker.is_empty() && slot.height > 1 {
            let width = marker.width().min(usize::from(SPINE_WIDTH)) as u16;
            let x = (slot.x + side_w + SPINE_WIDTH / 2).saturating_sub(width / 2);
            buf.set_stringn(
                x,
                slot.y + 1,
                &marker,
                usize::from(SPINE_WIDTH),
                self.palette.muted,
            );
        }
    }

    fn render_card(&self, entry: &Entry, focused: bool, area: Rect, buf: &mut Buffer) {
        if area.height < 2 {
            return;
        }
        let border_style = if focused {
            self.palette.accent
        } else {
            self.palette.frame
        };
        let mut block = Block::default()
            .borders(Borders::ALL)
            .border_style(border_style);
        if let Some(title) = &entry.title {
            block = block.title(Line::styled(format!(" {title} "), self.palette.accent));
        }
        let inner = block.inner(area);
        block.render(area, buf);
        if inner.height == 0 {
            return;
        }

        let mut y = inner.y;
        if let Some(description) = &entry.description {
            let lines = wrapped_line_count(description, inner.width).min(inner.height);
            Paragraph::new(description.as_str())
                .style(self.palette.text)
                .wrap(Wrap { trim: true })
                .render(Rect::new(inner.x, y, inner.width, lines), buf);
            y += lines;
        }
        if !entry.tags.is_empty() && y < inner.y + inner.height {
            let tags = entry
                .tags
                .iter()
                .map(|t| format!("#{t}"))
                .collect::<Vec<_>>()
                .join(" ");
            buf.set_stringn(inner.x, y, &tags, usize::from(inner.width), self.palette.tag);
            y += 1;
        }
        if let Some(link) = &entry.link {
            if y < inner.y + inner.height {
                let text = format!("{} \u{2197}", link.display_label());
                buf.set_stringn(inner.x, y, &text, usize::from(inner.width), self.palette.link);
            }
        }
    }
}

/// Rows of `text` after greedy word wrap at `width` columns.
pub fn wrapped_line_count(text: &str, width: u16) -> u16 {
    if width == 0 {
        return 0;
    }
    let width = usize::from(width);
    let mut lines = 0u16;
    for raw_line in text.lines() {
        if raw_line.trim().is_empty() {
            lines += 1;
            continue;
        }
        let mut used = 0usize;
        let mut line_open = false;
        for word in raw_line.split_whitespace() {
            let w = word.width().min(width);
            if !line_open {
                lines += 1;
                line_open = true;
                used = w;
            } else if used + 1 + w <= width {
                used += 1 + w;
            } else {
                lines += 1;
                used = w;
            }
        }
        if !line_open {
            lines += 1;
        }
    }
    lines.max(1)
}

/// Height of an entry's text card (borders included) at `column_width`.
pub fn card_height(entry: &Entry, column_width: u16) -> u16 {
    let inner_width = column_width.saturating_sub(2);
    let mut inner = 0u16;
    if let Some(description) = &entry.description {
        inner += wrapped_line_count(description, inner_width);
    }
    if !entry.tags.is_empty() {
        inner += 1;
    }
    if entry.link.is_some() {
        inner += 1;
    }
    inner.max(1) + 2
}

/// Rows each entry occupies (spacing included) at `area_width`.
pub fn entry_heights(state: &AppState, area_width: u16) -> Vec<u16> {
    let side_w = area_width.saturating_sub(SPINE_WIDTH) / 2;
    state
        .portfolio()
        .entries
        .iter()
        .enumerate()
        .map(|(index, entry)| {
            let card = card_height(entry, side_w);
            let gallery = if state.carousel(index).is_some() {
                GALLERY_HEIGHT
            } else {
                0
            };
            card.max(gallery).max(MIN_ENTRY_ROWS) + ENTRY_SPACING
        })
        .collect()
}

/// Total rendered rows of the timeline at `area_width`.
pub fn content_height(state: &AppState, area_width: u16) -> usize {
    entry_heights(state, area_width)
        .iter()
        .map(|h| usize::from(*h))
        .sum()
}

/// Row offset of each entry's first line, for focus-follow scrolling.
pub fn entry_offsets(state: &AppState, area_width: u16) -> Vec<usize> {
    let mut offsets = Vec::new();
    let mut y = 0usize;
    for height in entry_heights(state, area_width) {
        offsets.push(y);
        y += usize::from(height);
    }
    offsets
}
