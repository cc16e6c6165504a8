// Copyright 2025 the Wayfind Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Wayfind View 2D: a pannable viewport over a fixed map image.
//!
//! This crate provides a small, headless model of a view onto a world-space
//! map where the view extents are expressed in device pixels. It focuses on:
//! - Screen ↔ world coordinate conversion through an explicit transform /
//!   inverse-transform pair composed with a pan origin.
//! - Bounded panning: a drag delta is applied only if the whole viewport
//!   stays inside the map image, and rejected wholesale otherwise.
//! - Resize adaptation: when the view surface changes size, the pan origin
//!   is corrected per axis so no edge exposes area beyond the image.
//!
//! It does **not** own any scene, image decoding, or rendering backend.
//! Callers are expected to:
//! - Feed pointer deltas into [`PanViewport::try_pan`] and apply a redraw
//!   when the outcome is [`PanOutcome::Applied`].
//! - Report surface size changes via [`PanViewport::set_view_size`].
//! - Report the map image dimensions once loading completes via
//!   [`PanViewport::set_image_size`].
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Size, Vec2};
//! use wayfind_view2d::{PanOutcome, PanViewport};
//!
//! // An 800x600 surface over a 3000x2500 map image.
//! let mut view = PanViewport::new(Size::new(800.0, 600.0));
//! view.set_image_size(Some(Size::new(3000.0, 2500.0)));
//! view.set_origin(Vec2::new(-1250.0, -1000.0));
//!
//! // Convert the cursor position into map coordinates for hit testing.
//! let world = view.to_world(Point::new(400.0, 300.0));
//! assert_eq!(world, Point::new(1650.0, 1300.0));
//!
//! // Drag the map. A delta that would expose the area left of the image is
//! // rejected in full; the origin does not move.
//! assert_eq!(view.try_pan(Vec2::new(-2500.0, 0.0)), PanOutcome::Rejected);
//! ```
//!
//! ## Design notes
//!
//! - The transform and its inverse are stored as an explicit pair so a
//!   future zoom can replace the linear part without touching conversion
//!   call sites. Today the linear part is identity.
//! - Drag clamping is all-or-nothing per event; resize clamping snaps each
//!   offending edge to the image boundary independently. The two policies
//!   are deliberately different: hard-stop rejection feels right under the
//!   cursor, while resize must restore validity from any prior state.
//! - Without an image size, clamping is not applicable and panning passes
//!   through unchanged.
//!
//! This crate is `no_std`.

#![no_std]

mod outcome;
mod viewport;

pub use outcome::{AxisExcess, PanOutcome};
pub use viewport::{PanViewport, PanViewportDebugInfo};
