// Copyright 2025 the Wayfind Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Wayfind Scene: composing the map frame into backend draw calls.
//!
//! This crate turns the current view state and overlay content into an
//! ordered sequence of draw calls against a [`SceneBackend`]. It keeps no
//! state of its own: [`compose`] is a pure function of its inputs, and the
//! same inputs always produce the same calls in the same order.
//!
//! The draw order is part of the contract, because later calls occlude
//! earlier ones:
//!
//! 1. Background map image at the pan origin.
//! 2. Highlighted-location circle (yellow), if any.
//! 3. Source circle (green), if set.
//! 4. Destination circle (blue), if set.
//! 5. Route segments (yellow polyline), only when both endpoints are set.
//!
//! Overlay positions and route segments arrive in world coordinates and
//! are converted to screen space through the viewport's transform engine
//! at draw time; nothing is pre-transformed upstream.
//!
//! Backends are expected to be thin: a raster canvas, a GPU renderer, or
//! the in-crate [`RecordingBackend`] used by tests to assert on emitted
//! calls and their order.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Size};
//! use wayfind_scene::{ImageHandle, Overlay, RecordingBackend, compose};
//! use wayfind_view2d::PanViewport;
//!
//! let mut view = PanViewport::new(Size::new(800.0, 600.0));
//! view.set_image_size(Some(Size::new(3000.0, 2500.0)));
//!
//! let overlay = Overlay {
//!     background: Some(ImageHandle(0)),
//!     highlighted: Some(Point::new(120.0, 80.0)),
//!     source: None,
//!     destination: None,
//!     route: &[],
//! };
//!
//! let mut backend = RecordingBackend::default();
//! compose(&view, &overlay, &mut backend);
//! assert_eq!(backend.calls().len(), 2); // image + highlight circle
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod recording;

use kurbo::{Line, Point};
use peniko::Color;
use peniko::color::palette;
use wayfind_view2d::PanViewport;

pub use recording::{DrawCall, RecordingBackend};

/// Radius, in world units, of the circle marking a location.
pub const LOCATION_RADIUS: f64 = 20.0;

/// Stroke width of location circles and route segments.
pub const STROKE_WIDTH: f64 = 5.0;

/// Color of the hover-highlight circle.
pub const HIGHLIGHT_COLOR: Color = palette::css::YELLOW;

/// Color of the source circle.
pub const SOURCE_COLOR: Color = palette::css::GREEN;

/// Color of the destination circle.
pub const DESTINATION_COLOR: Color = palette::css::BLUE;

/// Color of route segments.
pub const ROUTE_COLOR: Color = palette::css::YELLOW;

/// Opaque handle to the background raster image.
///
/// The backend owns the actual pixels; composition only names the image
/// and says where its top-left corner goes.
#[repr(transparent)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct ImageHandle(pub u32);

/// Overlay content for one frame, in world coordinates.
///
/// This is a borrowed view of the application's selection and route
/// state; composing a frame does not take ownership of anything.
#[derive(Clone, Copy, Debug)]
pub struct Overlay<'a> {
    /// Background image, once loading has completed.
    pub background: Option<ImageHandle>,
    /// World position of the hover-highlighted location.
    pub highlighted: Option<Point>,
    /// World position of the selected source.
    pub source: Option<Point>,
    /// World position of the selected destination.
    pub destination: Option<Point>,
    /// Route segments in world coordinates.
    pub route: &'a [Line],
}

/// Sink for the draw calls produced by [`compose`].
///
/// Implementations perform the calls immediately (a real renderer) or
/// record them ([`RecordingBackend`]). All positions handed to a backend
/// are in screen coordinates; world → screen conversion has already
/// happened.
pub trait SceneBackend {
    /// Draw the background image with its top-left corner at `origin`,
    /// at the image's natural size.
    fn draw_image(&mut self, image: ImageHandle, origin: Point);

    /// Stroke a circle outline.
    fn stroke_circle(&mut self, center: Point, radius: f64, width: f64, color: Color);

    /// Stroke a line segment.
    fn stroke_line(&mut self, from: Point, to: Point, width: f64, color: Color);
}

/// Composes one frame of the map scene into backend draw calls.
///
/// A pure function of `(view, overlay)`: background first, then the
/// highlight, source, and destination circles, then the route polyline.
/// Until a background image is present nothing is drawn at all — the
/// overlay has no meaning without the map under it.
///
/// The route is drawn only while both a source and a destination are set,
/// even if stale segments are still present in `overlay.route`.
pub fn compose<B: SceneBackend>(view: &PanViewport, overlay: &Overlay<'_>, backend: &mut B) {
    let Some(background) = overlay.background else {
        return;
    };
    backend.draw_image(background, view.origin().to_point());

    if let Some(world) = overlay.highlighted {
        stroke_mark(view, backend, world, HIGHLIGHT_COLOR);
    }
    if let Some(world) = overlay.source {
        stroke_mark(view, backend, world, SOURCE_COLOR);
    }
    if let Some(world) = overlay.destination {
        stroke_mark(view, backend, world, DESTINATION_COLOR);
    }

    if overlay.source.is_some() && overlay.destination.is_some() {
        for segment in overlay.route {
            backend.stroke_line(
                view.to_screen(segment.p0),
                view.to_screen(segment.p1),
                STROKE_WIDTH,
                ROUTE_COLOR,
            );
        }
    }
}

fn stroke_mark<B: SceneBackend>(view: &PanViewport, backend: &mut B, world: Point, color: Color) {
    backend.stroke_circle(view.to_screen(world), LOCATION_RADIUS, STROKE_WIDTH, color);
}
