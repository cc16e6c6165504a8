// Copyright 2025 the Wayfind Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Wayfind Hit: cursor-to-location hit testing.
//!
//! This crate decides which named map location, if any, sits under the
//! cursor. A location is a hit iff the Euclidean distance from the query
//! point to the location is strictly less than the pick radius.
//!
//! The resolution rule is deliberately not nearest-match. When locations
//! cluster and the cursor sits inside more than one pick circle, a
//! nearest-match rule makes the highlight flip between neighbors on every
//! sub-pixel movement. Instead:
//!
//! 1. If the previously highlighted location still qualifies, it stays
//!    highlighted.
//! 2. Otherwise the list is scanned in order and the first qualifying
//!    location wins.
//! 3. If nothing qualifies, there is no hit.
//!
//! Callers keep the previous result between frames and thread it back in;
//! the crate itself is stateless.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::Point;
//! use wayfind_hit::{HitParams, find_hit};
//!
//! let spots = [Point::new(100.0, 100.0), Point::new(110.0, 100.0)];
//! let params = HitParams::default();
//!
//! // Both spots are within the radius; with no prior highlight the first
//! // in list order wins.
//! let hit = find_hit(Point::new(105.0, 100.0), None, &spots, &params);
//! assert_eq!(hit, Some(0));
//!
//! // With spot 1 already highlighted, it is kept even though spot 0 is
//! // closer.
//! let hit = find_hit(Point::new(105.0, 100.0), Some(1), &spots, &params);
//! assert_eq!(hit, Some(1));
//! ```
//!
//! This crate is `no_std`.

#![no_std]

use kurbo::Point;

/// Parameters controlling hit resolution.
#[derive(Clone, Copy, Debug)]
pub struct HitParams {
    /// Distance threshold for a query point to hit a location.
    ///
    /// The comparison is strict: a point exactly on the circle is a miss.
    pub pick_radius: f64,
}

impl Default for HitParams {
    fn default() -> Self {
        Self { pick_radius: 20.0 }
    }
}

/// Anything with a world-space position that can be hit tested.
///
/// Implemented for [`Point`] so plain coordinate slices work directly;
/// applications implement it for their own location types.
pub trait HitTarget {
    /// World-space position of this target.
    fn world_pos(&self) -> Point;
}

impl HitTarget for Point {
    fn world_pos(&self) -> Point {
        *self
    }
}

/// Returns `true` if `pt` hits a target at `center` under `params`.
///
/// Compares squared distances; for a nonnegative radius this is the same
/// strict test as comparing Euclidean distances.
#[must_use]
pub fn is_within(pt: Point, center: Point, params: &HitParams) -> bool {
    pt.distance_squared(center) < params.pick_radius * params.pick_radius
}

/// Resolves which target in `items`, if any, is hit by `world`.
///
/// `prev` is the index of the previously highlighted target, threaded back
/// in by the caller. The previous target is kept for as long as it still
/// qualifies; only then is the list scanned in order for the first
/// qualifying target. Indices out of range in `prev` are treated as no
/// prior highlight.
#[must_use]
pub fn find_hit<T: HitTarget>(
    world: Point,
    prev: Option<usize>,
    items: &[T],
    params: &HitParams,
) -> Option<usize> {
    if let Some(index) = prev
        && let Some(item) = items.get(index)
        && is_within(world, item.world_pos(), params)
    {
        return Some(index);
    }

    items
        .iter()
        .position(|item| is_within(world, item.world_pos(), params))
}
