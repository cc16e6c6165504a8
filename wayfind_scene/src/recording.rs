// Copyright 2025 the Wayfind Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Recording backend for tests and debugging.
//!
//! This is intentionally *not* a reference renderer: it rasterizes
//! nothing and establishes no golden pixels. It exists so tests can
//! assert on the calls a composition emitted and on their order.

use kurbo::Point;
use peniko::Color;
use smallvec::SmallVec;

use crate::{ImageHandle, SceneBackend};

/// One recorded draw call, with positions in screen coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DrawCall {
    /// Background image drawn at its natural size.
    Image {
        /// Image that was drawn.
        image: ImageHandle,
        /// Screen position of the image's top-left corner.
        origin: Point,
    },
    /// Stroked circle outline.
    Circle {
        /// Screen-space center.
        center: Point,
        /// Circle radius.
        radius: f64,
        /// Stroke width.
        width: f64,
        /// Stroke color.
        color: Color,
    },
    /// Stroked line segment.
    Line {
        /// Screen-space segment start.
        from: Point,
        /// Screen-space segment end.
        to: Point,
        /// Stroke width.
        width: f64,
        /// Stroke color.
        color: Color,
    },
}

/// [`SceneBackend`] that records calls instead of drawing.
///
/// A full frame of this application fits in a handful of calls, so the
/// buffer is inline-allocated for the common case.
#[derive(Clone, Debug, Default)]
pub struct RecordingBackend {
    calls: SmallVec<[DrawCall; 8]>,
}

impl RecordingBackend {
    /// Returns the recorded calls in emission order.
    #[must_use]
    pub fn calls(&self) -> &[DrawCall] {
        &self.calls
    }

    /// Clears the recording for the next frame.
    pub fn clear(&mut self) {
        self.calls.clear();
    }
}

impl SceneBackend for RecordingBackend {
    fn draw_image(&mut self, image: ImageHandle, origin: Point) {
        self.calls.push(DrawCall::Image { image, origin });
    }

    fn stroke_circle(&mut self, center: Point, radius: f64, width: f64, color: Color) {
        self.calls.push(DrawCall::Circle {
            center,
            radius,
            width,
            color,
        });
    }

    fn stroke_line(&mut self, from: Point, to: Point, width: f64, color: Color) {
        self.calls.push(DrawCall::Line {
            from,
            to,
            width,
            color,
        });
    }
}
