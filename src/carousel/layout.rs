//! Pure layout computation for the stacked-card carousel.
//!
//! The layout pass maps every item index to a declarative visual
//! descriptor. Rendering backends consume descriptors without this module
//! knowing anything about them.

/// Stacking layer of a card, back to front. Back layers draw first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum StackLayer {
    /// Far cards, mostly hidden behind the rest.
    Back,
    /// Immediate neighbors of the active card.
    Mid,
    /// The active card.
    Front,
}

/// Visual parameters for one card position.
///
/// A renderer composes these as: horizontal translate (percent of the
/// viewport, anchored at center), then perspective rotation around the
/// vertical axis, then uniform scale. The composition order is part of the
/// contract; reordering changes the visual result.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VisualParams {
    /// Horizontal offset from center, in percent of the viewport width.
    pub offset_pct: i16,
    /// Uniform scale factor.
    pub scale: f32,
    /// Rotation around the vertical axis, in degrees.
    pub rotation_deg: f32,
    /// Opacity in `[0, 1]`.
    pub opacity: f32,
    /// Stacking layer.
    pub stack: StackLayer,
}

/// Relative-position bucket of an item with respect to the active item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotBucket {
    /// `rel == 0`: the front-facing item.
    Active,
    /// `rel == 1`: immediate next.
    Next,
    /// `rel == n-1`: immediate previous.
    Prev,
    /// `1 < rel <= n/2`: far "next" side.
    FarNext,
    /// Everything else: far "previous" side.
    FarPrev,
}

/// Visual parameter set per bucket.
///
/// Defaults reproduce the fixed card fan: neighbors at ±40% offset, far
/// cards at ±80%, with decreasing scale and opacity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CarouselOptions {
    /// Parameters for the active card.
    pub active: VisualParams,
    /// Parameters for the immediate next card.
    pub next: VisualParams,
    /// Parameters for the immediate previous card.
    pub prev: VisualParams,
    /// Parameters for far cards on the "next" side.
    pub far_next: VisualParams,
    /// Parameters for far cards on the "previous" side.
    pub far_prev: VisualParams,
}

impl Default for CarouselOptions {
    fn default() -> Self {
        Self {
            active: VisualParams {
                offset_pct: 0,
                scale: 1.0,
                rotation_deg: 0.0,
                opacity: 1.0,
                stack: StackLayer::Front,
            },
            next: VisualParams {
                offset_pct: 40,
                scale: 0.9,
                rotation_deg: -12.0,
                opacity: 0.9,
                stack: StackLayer::Mid,
            },
            prev: VisualParams {
                offset_pct: -40,
                scale: 0.9,
                rotation_deg: 12.0,
                opacity: 0.9,
                stack: StackLayer::Mid,
            },
            far_next: VisualParams {
                offset_pct: 80,
                scale: 0.8,
                rotation_deg: -16.0,
                opacity: 0.6,
                stack: StackLayer::Back,
            },
            far_prev: VisualParams {
                offset_pct: -80,
                scale: 0.8,
                rotation_deg: 16.0,
                opacity: 0.6,
                stack: StackLayer::Back,
            },
        }
    }
}

impl CarouselOptions {
    /// Look up the parameter set for a bucket.
    pub fn params_for(&self, bucket: SlotBucket) -> VisualParams {
        match bucket {
            SlotBucket::Active => self.active,
            SlotBucket::Next => self.next,
            SlotBucket::Prev => self.prev,
            SlotBucket::FarNext => self.far_next,
            SlotBucket::FarPrev => self.far_prev,
        }
    }
}

/// Computed layout for one carousel item.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ItemLayout {
    /// Item index in the carousel's item list.
    pub index: usize,
    /// Relative-position bucket this item landed in.
    pub bucket: SlotBucket,
    /// Visual parameters for the bucket.
    pub params: VisualParams,
}

/// Circular distance of `index` from `active`, normalized into `[0, n)`.
///
/// # Panics
///
/// Panics in debug builds when `n == 0`; callers guard the degenerate case.
pub fn rel(index: usize, active: usize, n: usize) -> usize {
    debug_assert!(n > 0, "rel is undefined for an empty item list");
    (index as isize - active as isize).rem_euclid(n as isize) as usize
}

/// Classify a relative position into its bucket.
///
/// Arms are evaluated in listed order and the first match wins. For small
/// `n` the index ranges overlap (`n == 2` has `rel 1 == n-1`); the order
/// below resolves those collisions deterministically.
pub fn classify(rel: usize, n: usize) -> SlotBucket {
    if rel == 0 {
        SlotBucket::Active
    } else if rel == 1 {
        SlotBucket::Next
    } else if rel == n - 1 {
        SlotBucket::Prev
    } else if rel <= n / 2 {
        SlotBucket::FarNext
    } else {
        SlotBucket::FarPrev
    }
}

/// Compute layout descriptors for all `n` items around `active`.
///
/// Returns an empty vector when `n == 0`.
pub fn compute_layout(active: usize, n: usize, options: &CarouselOptions) -> Vec<ItemLayout> {
    (0..n)
        .map(|index| {
            let bucket = classify(rel(index, active, n), n);
            ItemLayout {
                index,
                bucket,
                params: options.params_for(bucket),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rel_of_active_is_zero() {
        for n in 1..=8 {
            for active in 0..n {
                assert_eq!(rel(active, active, n), 0);
            }
        }
    }

    #[test]
    fn rel_is_always_in_range() {
        for n in 1..=8 {
            for active in 0..n {
                for index in 0..n {
                    let r = rel(index, active, n);
                    assert!(r < n, "rel({index}, {active}, {n}) = {r} out of range");
                }
            }
        }
    }

    #[test]
    fn five_items_active_two_matches_reference_fan() {
        // rel values for indices [0..5] with active=2 are [3, 4, 0, 1, 2]
        let layouts = compute_layout(2, 5, &CarouselOptions::default());
        let buckets: Vec<_> = layouts.iter().map(|l| l.bucket).collect();
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
        let offsets: Vec<_> = layouts.iter().map(|l| l.params.offset_pct).collect();
        assert_eq!(offsets, vec![-80, -40, 0, 40, 80]);
    }

    #[test]
    fn two_items_classify_as_active_and_next() {
        // rel 1 == n-1 here; the rel==1 arm wins by evaluation order.
        assert_eq!(classify(0, 2), SlotBucket::Active);
        assert_eq!(classify(1, 2), SlotBucket::Next);
    }

    #[test]
    fn three_items_have_no_far_cards() {
        assert_eq!(classify(0, 3), SlotBucket::Active);
        assert_eq!(classify(1, 3), SlotBucket::Next);
        assert_eq!(classify(2, 3), SlotBucket::Prev);
    }

    #[test]
    fn four_items_put_the_opposite_card_far_next() {
        assert_eq!(classify(1, 4), SlotBucket::Next);
        assert_eq!(classify(2, 4), SlotBucket::FarNext);
        assert_eq!(classify(3, 4), SlotBucket::Prev);
    }

    #[test]
    fn far_buckets_split_at_half() {
        // n=7, floor(n/2)=3: rel 2..=3 far-next, rel 4..=5 far-prev
        assert_eq!(classify(2, 7), SlotBucket::FarNext);
        assert_eq!(classify(3, 7), SlotBucket::FarNext);
        assert_eq!(classify(4, 7), SlotBucket::FarPrev);
        assert_eq!(classify(5, 7), SlotBucket::FarPrev);
        assert_eq!(classify(6, 7), SlotBucket::Prev);
    }

    #[test]
    fn default_params_match_reference_table() {
        let opts = CarouselOptions::default();
        assert_eq!(opts.active.scale, 1.0);
        assert_eq!(opts.active.opacity, 1.0);
        assert_eq!(opts.next.offset_pct, 40);
        assert_eq!(opts.next.rotation_deg, -12.0);
        assert_eq!(opts.prev.offset_pct, -40);
        assert_eq!(opts.prev.rotation_deg, 12.0);
        assert_eq!(opts.far_next.opacity, 0.6);
        assert_eq!(opts.far_prev.offset_pct, -80);
        assert_eq!(opts.active.stack, StackLayer::Front);
        assert_eq!(opts.next.stack, StackLayer::Mid);
        assert_eq!(opts.far_prev.stack, StackLayer::Back);
    }

    #[test]
    fn empty_layout_is_empty() {
        assert!(compute_layout(0, 0, &CarouselOptions::default()).is_empty());
    }

    #[test]
    fn stack_layers_order_back_to_front() {
        assert!(StackLayer::Back < StackLayer::Mid);
        assert!(StackLayer::Mid < StackLayer::Front);
    }
}
