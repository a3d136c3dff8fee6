//! Application state and transitions.
//!
//! `AppState` is the root state type containing the parsed document, one
//! carousel per entry that has images, and all UI state. State transitions
//! are plain methods with no side effects; the shell persists the theme and
//! owns the terminal.

use crate::carousel::{ActivateOutcome, CarouselState};
use crate::model::{resolve_source, Portfolio};
use crate::state::theme::ThemeMode;

/// Rows from the bottom within which the to-latest indicator dims; there is
/// nothing left to jump to from there.
pub const NEAR_BOTTOM_ROWS: usize = 3;

// ===== AppState =====

/// Root application state. Pure data, no side effects.
#[derive(Debug, Clone)]
pub struct AppState {
    /// The parsed document; all other fields are UI state.
    portfolio: Portfolio,

    /// One slot per entry, in entry order. `Some` for entries that carry
    /// image values (the carousel may still be empty after drops); `None`
    /// for entries with no images at all.
    carousels: Vec<Option<CarouselState>>,

    /// Vertical scroll through the rendered timeline.
    pub scroll: ScrollState,

    /// Entry receiving carousel key actions. `None` only for an empty
    /// timeline.
    pub focused_entry: Option<usize>,

    /// Current theme mode.
    pub theme: ThemeMode,

    /// Whether the help overlay is shown.
    pub help_visible: bool,

    /// The image opened in the enlarge overlay, if any.
    pub open_image: Option<OpenImage>,
}

impl AppState {
    /// Create state from a parsed document.
    ///
    /// Builds one carousel per entry with images and focuses the latest
    /// entry (the document is in ascending date order, so the last one).
    pub fn new(portfolio: Portfolio, images_dir: &str, theme: ThemeMode) -> Self {
        let carousels = build_carousels(&portfolio, images_dir);
        let focused_entry = portfolio.entries.len().checked_sub(1);

        Self {
            portfolio,
            carousels,
            scroll: ScrollState::default(),
            focused_entry,
            theme,
            help_visible: false,
            open_image: None,
        }
    }

    /// Replace the document after a reload, rebuilding carousels and
    /// clamping focus. Scroll position is kept (clamped during render).
    pub fn replace_portfolio(&mut self, portfolio: Portfolio, images_dir: &str) {
        self.carousels = build_carousels(&portfolio, images_dir);
        self.portfolio = portfolio;
        let count = self.portfolio.entries.len();
        self.focused_entry = match self.focused_entry {
            Some(idx) if count > 0 => Some(idx.min(count - 1)),
            _ => count.checked_sub(1),
        };
        self.open_image = None;
    }

    /// The parsed document.
    pub fn portfolio(&self) -> &Portfolio {
        &self.portfolio
    }

    /// Carousel for the entry at `index`, if that entry has images.
    pub fn carousel(&self, index: usize) -> Option<&CarouselState> {
        self.carousels.get(index).and_then(|c| c.as_ref())
    }

    /// Carousel of the focused entry.
    pub fn focused_carousel(&self) -> Option<&CarouselState> {
        self.focused_entry.and_then(|idx| self.carousel(idx))
    }

    fn focused_carousel_mut(&mut self) -> Option<&mut CarouselState> {
        let idx = self.focused_entry?;
        self.carousels.get_mut(idx)?.as_mut()
    }

    /// Move focus to the next (newer) entry, clamped at the end.
    pub fn focus_next_entry(&mut self) {
        let count = self.portfolio.entries.len();
        if count == 0 {
            return;
        }
        self.focused_entry = Some(match self.focused_entry {
            Some(idx) => (idx + 1).min(count - 1),
            None => 0,
        });
    }

    /// Move focus to the previous (older) entry, clamped at the start.
    pub fn focus_prev_entry(&mut self) {
        if self.portfolio.entries.is_empty() {
            return;
        }
        self.focused_entry = Some(match self.focused_entry {
            Some(idx) => idx.saturating_sub(1),
            None => 0,
        });
    }

    /// Step the focused entry's carousel. No-op without a focused carousel
    /// or with fewer than two items.
    pub fn step_carousel(&mut self, delta: isize) {
        if let Some(carousel) = self.focused_carousel_mut() {
            carousel.step(delta);
        }
    }

    /// Activate a carousel item by 1-indexed position (digit keys).
    ///
    /// Activating the front item opens it in the overlay instead of
    /// navigating; out-of-range positions are ignored.
    pub fn activate_image(&mut self, position: usize) {
        if position == 0 {
            return;
        }
        let Some(carousel) = self.focused_carousel_mut() else {
            return;
        };
        if carousel.activate(position - 1) == ActivateOutcome::OpenActive {
            self.open_active_image();
        }
    }

    /// Open the focused carousel's front item in the enlarge overlay.
    pub fn open_active_image(&mut self) {
        let Some(item) = self.focused_carousel().and_then(|c| c.active_item()) else {
            return;
        };
        self.open_image = Some(OpenImage {
            source: item.source.clone(),
            alt_text: item.alt_text.clone(),
            caption: item.caption.clone(),
        });
    }

    /// Toggle the theme and return the new mode for persistence.
    pub fn toggle_theme(&mut self, prefers_dark: bool) -> ThemeMode {
        self.theme = self.theme.toggled(prefers_dark);
        self.theme
    }

    /// Dismiss whichever overlay is on top (image first, then help).
    pub fn close_overlay(&mut self) {
        if self.open_image.is_some() {
            self.open_image = None;
        } else {
            self.help_visible = false;
        }
    }

    /// Whether any overlay is currently shown.
    pub fn overlay_visible(&self) -> bool {
        self.help_visible || self.open_image.is_some()
    }
}

fn build_carousels(portfolio: &Portfolio, images_dir: &str) -> Vec<Option<CarouselState>> {
    portfolio
        .entries
        .iter()
        .map(|entry| {
            if entry.has_images() {
                Some(CarouselState::build(&entry.images, |src| {
                    resolve_source(src, images_dir)
                }))
            } else {
                None
            }
        })
        .collect()
}

// ===== OpenImage =====

/// The image shown in the enlarge overlay.
#[derive(Debug, Clone, PartialEq)]
pub struct OpenImage {
    /// Resolved image reference.
    pub source: String,
    /// Alternative text.
    pub alt_text: Option<String>,
    /// Caption text.
    pub caption: Option<String>,
}

// ===== ScrollState =====

/// Vertical scroll through the rendered timeline.
///
/// Offsets are in rendered rows. The maximum is supplied by the view,
/// which knows the content height for the current viewport.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScrollState {
    /// Rows scrolled down from the top.
    pub vertical_offset: usize,
}

impl ScrollState {
    /// Scroll up by `amount`, saturating at 0.
    pub fn scroll_up(&mut self, amount: usize) {
        self.vertical_offset = self.vertical_offset.saturating_sub(amount);
    }

    /// Scroll down by `amount`, clamped to `max`.
    pub fn scroll_down(&mut self, amount: usize, max: usize) {
        self.vertical_offset = (self.vertical_offset + amount).min(max);
    }

    /// Jump to the top.
    pub fn scroll_to_top(&mut self) {
        self.vertical_offset = 0;
    }

    /// Jump to the bottom (the latest entry).
    pub fn scroll_to_latest(&mut self, max: usize) {
        self.vertical_offset = max;
    }

    /// Clamp the offset after the content or viewport changed.
    pub fn clamp(&mut self, max: usize) {
        self.vertical_offset = self.vertical_offset.min(max);
    }

    /// Whether the viewport is at the very bottom.
    pub fn at_bottom(&self, max: usize) -> bool {
        self.vertical_offset >= max
    }

    /// Whether the viewport is within [`NEAR_BOTTOM_ROWS`] of the bottom;
    /// the to-latest indicator dims when this holds.
    pub fn near_bottom(&self, max: usize) -> bool {
        max.saturating_sub(self.vertical_offset) <= NEAR_BOTTOM_ROWS
    }
}
