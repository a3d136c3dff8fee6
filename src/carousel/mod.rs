//! Stacked-card image carousel (pure state).
//!
//! A carousel is built once per entry from that entry's raw image values,
//! owns its item list and active index for the lifetime of the page, and is
//! mutated only by [`CarouselState::step`] and [`CarouselState::activate`].
//! No operation errors or panics: malformed descriptors are dropped at
//! construction, degenerate navigation is a no-op, and out-of-range
//! activation is ignored.

pub mod layout;

pub use layout::{
    classify, compute_layout, rel, CarouselOptions, ItemLayout, SlotBucket, StackLayer,
    VisualParams,
};

use crate::model::{normalize_image, ImageData};
use tracing::warn;

/// One realized carousel item: a resolved source plus display metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct CarouselItem {
    /// Resolved, display-ready image reference. Never empty.
    pub source: String,
    /// Alternative text.
    pub alt_text: Option<String>,
    /// Caption text.
    pub caption: Option<String>,
}

/// Outcome of [`CarouselState::activate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivateOutcome {
    /// The index was valid and different; the carousel moved to it.
    Moved,
    /// The index was the active one; the caller should open the image.
    OpenActive,
    /// The index was out of range; nothing happened.
    Ignored,
}

/// Carousel state: a fixed item list plus the front-facing index.
///
/// Invariant: `active_index < items.len()` whenever the list is non-empty.
#[derive(Debug, Clone, PartialEq)]
pub struct CarouselState {
    items: Vec<CarouselItem>,
    active_index: usize,
    options: CarouselOptions,
}

impl CarouselState {
    /// Build a carousel from raw image values with the default visuals.
    ///
    /// Each value is normalized, resolved through `resolver`, and dropped
    /// if its resolved source comes back empty. Exclusion happens before
    /// the item count is fixed, so the active-index range only ever covers
    /// displayable items. An all-dropped (or empty) input yields a valid,
    /// empty carousel.
    pub fn build<R>(images: &[ImageData], resolver: R) -> Self
    where
        R: Fn(&str) -> String,
    {
        Self::with_options(images, resolver, CarouselOptions::default())
    }

    /// Build a carousel with custom visual parameters.
    pub fn with_options<R>(images: &[ImageData], resolver: R, options: CarouselOptions) -> Self
    where
        R: Fn(&str) -> String,
    {
        let mut items = Vec::with_capacity(images.len());
        for data in images {
            let normalized = normalize_image(data);
            let resolved = resolver(&normalized.source);
            if resolved.is_empty() {
                warn!(?data, "Dropping image with empty resolved source");
                continue;
            }
            items.push(CarouselItem {
                source: resolved,
                alt_text: normalized.alt_text,
                caption: normalized.caption,
            });
        }

        Self {
            items,
            active_index: 0,
            options,
        }
    }

    /// Number of realized items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the carousel has no items at all.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The realized items, in construction order.
    pub fn items(&self) -> &[CarouselItem] {
        &self.items
    }

    /// Index of the front-facing item. Meaningless when empty.
    pub fn active_index(&self) -> usize {
        self.active_index
    }

    /// The front-facing item, if any.
    pub fn active_item(&self) -> Option<&CarouselItem> {
        self.items.get(self.active_index)
    }

    /// Whether prev/next affordances should be shown. Hidden for 0 or 1
    /// items, where stepping has no visible effect.
    pub fn has_navigation(&self) -> bool {
        self.items.len() > 1
    }

    /// Step the active index by `delta`, wrapping circularly.
    ///
    /// Tolerates any integer delta. No-op when fewer than two items exist
    /// (also guards the modulo against an empty list).
    pub fn step(&mut self, delta: isize) {
        let n = self.items.len();
        if n <= 1 {
            return;
        }
        self.active_index =
            (self.active_index as isize + delta).rem_euclid(n as isize) as usize;
    }

    /// Activate the item at `index`.
    ///
    /// A valid, non-active index becomes the new front card. Activating the
    /// already-active item is not a navigation; the caller interprets
    /// [`ActivateOutcome::OpenActive`] as "open/enlarge this image".
    /// Out-of-range indices are ignored.
    pub fn activate(&mut self, index: usize) -> ActivateOutcome {
        if index >= self.items.len() {
            return ActivateOutcome::Ignored;
        }
        if index == self.active_index {
            return ActivateOutcome::OpenActive;
        }
        self.active_index = index;
        ActivateOutcome::Moved
    }

    /// Compute the visual descriptor for every item.
    ///
    /// Descriptors are in item order; renderers should draw them sorted by
    /// [`StackLayer`], back first.
    pub fn layout(&self) -> Vec<ItemLayout> {
        compute_layout(self.active_index, self.items.len(), &self.options)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{resolve_source, IMAGES_DIR};

    fn resolver(src: &str) -> String {
        resolve_source(src, IMAGES_DIR)
    }

    fn reference(name: &str) -> ImageData {
        ImageData::Reference(name.to_string())
    }

    fn build(names: &[&str]) -> CarouselState {
        let images: Vec<ImageData> = names.iter().map(|n| reference(n)).collect();
        CarouselState::build(&images, resolver)
    }

    // ===== Construction =====

    #[test]
    fn construction_resolves_sources() {
        let carousel = build(&["a.png", "https://x/y.png"]);
        assert_eq!(carousel.len(), 2);
        assert_eq!(carousel.items()[0].source, "images/a.png");
        assert_eq!(carousel.items()[1].source, "https://x/y.png");
        assert_eq!(carousel.active_index(), 0);
    }

    #[test]
    fn malformed_values_are_dropped_not_errors() {
        let images = vec![
            reference("a.png"),
            ImageData::Invalid(serde_json::json!(42)),
            ImageData::Detailed {
                src: None,
                alt: Some("no source".to_string()),
                caption: None,
                width: None,
                height: None,
            },
            reference("b.png"),
        ];
        let carousel = CarouselState::build(&images, resolver);
        assert_eq!(carousel.len(), 2, "only displayable items are realized");
        assert_eq!(carousel.items()[1].source, "images/b.png");
    }

    #[test]
    fn empty_input_yields_valid_empty_carousel() {
        let carousel = build(&[]);
        assert!(carousel.is_empty());
        assert!(carousel.active_item().is_none());
        assert!(carousel.layout().is_empty());
        assert!(!carousel.has_navigation());
    }

    #[test]
    fn all_dropped_input_yields_empty_carousel() {
        let images = vec![ImageData::Invalid(serde_json::json!(null))];
        let carousel = CarouselState::build(&images, resolver);
        assert!(carousel.is_empty());
    }

    #[test]
    fn item_metadata_survives_realization() {
        let images = vec![ImageData::Detailed {
            src: Some("plan.png".to_string()),
            alt: Some("Plan".to_string()),
            caption: Some("The plan".to_string()),
            width: Some(800.0),
            height: None,
        }];
        let carousel = CarouselState::build(&images, resolver);
        let item = carousel.active_item().expect("one item");
        assert_eq!(item.source, "images/plan.png");
        assert_eq!(item.alt_text.as_deref(), Some("Plan"));
        assert_eq!(item.caption.as_deref(), Some("The plan"));
    }

    // ===== step =====

    #[test]
    fn step_wraps_forward_and_backward() {
        let mut carousel = build(&["a.png", "b.png", "c.png"]);
        carousel.step(1);
        assert_eq!(carousel.active_index(), 1);
        carousel.step(-2);
        assert_eq!(carousel.active_index(), 2, "negative steps wrap around");
        carousel.step(1);
        assert_eq!(carousel.active_index(), 0);
    }

    #[test]
    fn step_tolerates_large_deltas() {
        let mut carousel = build(&["a.png", "b.png", "c.png", "d.png", "e.png"]);
        carousel.step(12);
        assert_eq!(carousel.active_index(), 2);
        carousel.step(-100);
        assert_eq!(carousel.active_index(), 2);
    }

    #[test]
    fn step_is_inert_for_singleton() {
        let mut carousel = build(&["only.png"]);
        carousel.step(1);
        assert_eq!(carousel.active_index(), 0);
        carousel.step(-1);
        assert_eq!(carousel.active_index(), 0);
        assert!(!carousel.has_navigation());
    }

    #[test]
    fn step_is_inert_for_empty() {
        let mut carousel = build(&[]);
        carousel.step(1);
        carousel.step(-5);
        assert!(carousel.is_empty());
    }

    // ===== activate =====

    #[test]
    fn activate_moves_to_valid_index() {
        let mut carousel = build(&["a.png", "b.png", "c.png"]);
        assert_eq!(carousel.activate(2), ActivateOutcome::Moved);
        assert_eq!(carousel.active_index(), 2);
    }

    #[test]
    fn activate_on_active_is_open_not_navigation() {
        let mut carousel = build(&["a.png", "b.png"]);
        carousel.step(1);
        let before = carousel.clone();
        assert_eq!(carousel.activate(1), ActivateOutcome::OpenActive);
        assert_eq!(carousel, before, "activate(active) must not change state");
    }

    #[test]
    fn activate_out_of_range_is_ignored() {
        let mut carousel = build(&["a.png", "b.png"]);
        assert_eq!(carousel.activate(7), ActivateOutcome::Ignored);
        assert_eq!(carousel.active_index(), 0);
    }

    #[test]
    fn activate_on_empty_is_ignored() {
        let mut carousel = build(&[]);
        assert_eq!(carousel.activate(0), ActivateOutcome::Ignored);
    }

    // ===== layout =====

    #[test]
    fn layout_follows_active_index() {
        let mut carousel = build(&["a.png", "b.png", "c.png", "d.png", "e.png"]);
        carousel.activate(2);
        let buckets: Vec<_> = carousel.layout().iter().map(|l| l.bucket).collect();
        assert_eq!(
            buckets,
            vec![
                SlotBucket::FarPrev,
                SlotBucket::Prev,
                SlotBucket::Active,
                SlotBucket::Next,
                SlotBucket::FarNext,
            ]
        );
    }

    #[test]
    fn custom_options_flow_through_layout() {
        let mut options = CarouselOptions::default();
        options.next.offset_pct = 25;
        let images = vec![reference("a.png"), reference("b.png"), reference("c.png")];
        let carousel = CarouselState::with_options(&images, resolver, options);
        let layouts = carousel.layout();
        assert_eq!(layouts[1].params.offset_pct, 25);
    }
}
