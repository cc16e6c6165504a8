// Copyright 2025 the Wayfind Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Affine, Point, Size, Vec2};

use crate::outcome::{AxisExcess, PanOutcome};

/// Pannable viewport over a fixed-size map image.
///
/// `PanViewport` tracks the device-pixel size of the drawable surface, the
/// pan origin (the screen-space offset of the image's top-left corner), and
/// an explicit transform / inverse-transform pair mapping between world and
/// screen space. It can be used to:
/// - Convert points between world (map image) and screen coordinates.
/// - Apply drag deltas with all-or-nothing bound clamping.
/// - Adapt to surface resizes without ever exposing area beyond the image.
///
/// The transform pair is identity today; it is kept as independent state so
/// a zoom can later change the linear part without touching call sites.
#[derive(Clone, Debug)]
pub struct PanViewport {
    view_size: Size,
    image_size: Option<Size>,
    origin: Vec2,
    transform: Affine,
    inverse: Affine,
}

impl PanViewport {
    /// Creates a viewport over a surface of the given device-pixel size.
    ///
    /// - The initial origin is zero (image top-left at the surface origin).
    /// - The transform pair is identity.
    /// - No image size is set, so panning is unclamped until
    ///   [`PanViewport::set_image_size`] is called.
    #[must_use]
    pub fn new(view_size: Size) -> Self {
        Self {
            view_size,
            image_size: None,
            origin: Vec2::ZERO,
            transform: Affine::IDENTITY,
            inverse: Affine::IDENTITY,
        }
    }

    /// Returns the current surface size in device pixels.
    #[must_use]
    pub fn view_size(&self) -> Size {
        self.view_size
    }

    /// Returns the map image size, if one has been reported.
    #[must_use]
    pub fn image_size(&self) -> Option<Size> {
        self.image_size
    }

    /// Returns the pan origin: the screen-space offset of the image's
    /// top-left corner.
    #[must_use]
    pub fn origin(&self) -> Vec2 {
        self.origin
    }

    /// Sets the pan origin directly, without clamping.
    ///
    /// This is an escape hatch for restoring a known-good origin (for
    /// example the initial centering of the map). Interactive panning goes
    /// through [`PanViewport::try_pan`] instead.
    pub fn set_origin(&mut self, origin: Vec2) {
        self.origin = origin;
    }

    /// Returns the world → screen transform, excluding the pan origin.
    #[must_use]
    pub fn transform(&self) -> Affine {
        self.transform
    }

    /// Returns the screen → world transform, excluding the pan origin.
    #[must_use]
    pub fn inverse(&self) -> Affine {
        self.inverse
    }

    /// Replaces the transform pair.
    ///
    /// The inverse is computed once here and stored; conversions never
    /// invert on the fly. `transform` must be invertible.
    pub fn set_transform(&mut self, transform: Affine) {
        self.transform = transform;
        self.inverse = transform.inverse();
    }

    /// Sets or clears the map image size.
    ///
    /// This is typically called from the image-load callback. Setting a
    /// size immediately re-clamps the origin so the containment invariant
    /// holds from the first frame the image is drawn.
    pub fn set_image_size(&mut self, size: Option<Size>) {
        self.image_size = size;
        self.snap_to_bounds();
    }

    /// Converts a screen-space point into world (map image) coordinates.
    #[must_use]
    pub fn to_world(&self, screen: Point) -> Point {
        let unpanned = self.inverse * screen;
        unpanned - self.origin
    }

    /// Converts a world (map image) point into screen coordinates.
    #[must_use]
    pub fn to_screen(&self, world: Point) -> Point {
        self.transform * world + self.origin
    }

    /// Attempts to pan by a screen-space delta.
    ///
    /// While an image size is present the delta is applied only if all four
    /// viewport edges stay inside the image; otherwise the whole delta is
    /// discarded for this event and the origin is unchanged. Per-axis
    /// partial application is deliberately not done here — the hard stop is
    /// what makes dragging against the edge feel solid.
    ///
    /// Without an image size there is nothing to clamp against and the
    /// delta passes through unchanged.
    pub fn try_pan(&mut self, delta: Vec2) -> PanOutcome {
        let Some(image) = self.image_size else {
            self.origin += delta;
            return PanOutcome::Applied;
        };

        let candidate = self.origin + delta;
        let right_ok = candidate.x + image.width >= self.view_size.width;
        let left_ok = candidate.x <= 0.0;
        let bottom_ok = candidate.y + image.height >= self.view_size.height;
        let top_ok = candidate.y <= 0.0;

        if right_ok && left_ok && bottom_ok && top_ok {
            self.origin = candidate;
            PanOutcome::Applied
        } else {
            PanOutcome::Rejected
        }
    }

    /// Updates the surface size and re-clamps the origin per axis.
    ///
    /// Unlike [`PanViewport::try_pan`], each offending edge is snapped to
    /// the image boundary independently, so the viewport is valid again
    /// even from a degenerate prior state. There is no debouncing; the
    /// invariant holds between any two consecutive resizes.
    pub fn set_view_size(&mut self, size: Size) {
        self.view_size = size;
        self.snap_to_bounds();
    }

    /// Clamps the origin so no viewport edge exposes area beyond the image.
    ///
    /// Each axis is corrected independently. When the view exceeds the
    /// image along an axis, the image's minimum edge is aligned with the
    /// view origin; [`PanViewport::exceeds_image`] reports the condition.
    /// Without an image size this is a no-op.
    pub fn snap_to_bounds(&mut self) {
        let Some(image) = self.image_size else {
            return;
        };
        self.origin.x = snap_axis(self.origin.x, image.width, self.view_size.width);
        self.origin.y = snap_axis(self.origin.y, image.height, self.view_size.height);
    }

    /// Reports, per axis, whether the view is larger than the image.
    ///
    /// On such an axis no origin satisfies containment; the shell decides
    /// how to react (letterbox, rescale, or accept the exposed band).
    /// Without an image size both axes report `false`.
    #[must_use]
    pub fn exceeds_image(&self) -> AxisExcess {
        match self.image_size {
            Some(image) => AxisExcess {
                x: image.width < self.view_size.width,
                y: image.height < self.view_size.height,
            },
            None => AxisExcess::default(),
        }
    }

    /// Snapshot of the current viewport state for debugging and inspection.
    #[must_use]
    pub fn debug_info(&self) -> PanViewportDebugInfo {
        PanViewportDebugInfo {
            view_size: self.view_size,
            image_size: self.image_size,
            origin: self.origin,
            transform: self.transform,
            excess: self.exceeds_image(),
        }
    }
}

/// Clamp one axis of the origin into the valid band `[view - image, 0]`.
///
/// When the image is smaller than the view the band is empty; the result
/// collapses to `0.0`, aligning the image's minimum edge with the view.
fn snap_axis(origin: f64, image: f64, view: f64) -> f64 {
    origin.max(view - image).min(0.0)
}

/// Debug snapshot of a [`PanViewport`] state.
#[derive(Clone, Copy, Debug)]
pub struct PanViewportDebugInfo {
    /// Current surface size in device pixels.
    pub view_size: Size,
    /// Map image size, if reported.
    pub image_size: Option<Size>,
    /// Pan origin (screen offset of the image's top-left corner).
    pub origin: Vec2,
    /// World → screen transform, excluding the pan origin.
    pub transform: Affine,
    /// Per-axis view-exceeds-image report.
    pub excess: AxisExcess,
}
