// Copyright 2025 the Wayfind Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Result of attempting to pan the viewport by a delta.
///
/// Produced by [`crate::PanViewport::try_pan`]. A rejected pan leaves the
/// origin untouched; callers typically skip the redraw in that case.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[must_use]
pub enum PanOutcome {
    /// The whole delta was applied and the origin moved.
    Applied,
    /// Applying the delta would have exposed area beyond the image on at
    /// least one edge; the delta was discarded in full.
    Rejected,
}

impl PanOutcome {
    /// Returns `true` if the delta was applied.
    pub fn is_applied(self) -> bool {
        self == Self::Applied
    }
}

/// Per-axis report of a viewport that is larger than the map image.
///
/// When the view exceeds the image along an axis there is no origin that
/// satisfies the containment invariant on that axis. Snapping then aligns
/// the image's minimum edge with the view origin and reports the excess
/// here so shells can letterbox or rescale.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AxisExcess {
    /// The view is wider than the image.
    pub x: bool,
    /// The view is taller than the image.
    pub y: bool,
}

impl AxisExcess {
    /// Returns `true` if the view exceeds the image on either axis.
    #[must_use]
    pub fn any(self) -> bool {
        self.x || self.y
    }
}
