// Copyright 2025 the Wayfind Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Wayfind Pointer: a pointer state machine for map interaction.
//!
//! This crate tracks button/drag/hover state across pointer events and
//! turns each event into zero or more [`PointerAction`]s for the host to
//! carry out. It owns no viewport, no location list, and no rendering;
//! hosts apply pan deltas through their bound policy, run hover probes
//! through their hit tester, and resolve clicks against their selection.
//!
//! Events are expected to arrive from the whole window, not just the map
//! surface: a drag that started on the map keeps panning while the cursor
//! strays over other UI. The host owns that subscription as a scoped
//! resource (subscribe on mount, tear down on unmount) and forwards every
//! event here with an `over_surface` flag.
//!
//! ## Event gating
//!
//! An event is processed when it is over the map surface **or** a press
//! that started on the surface is still held. Everything else is ignored,
//! which is what keeps sidebar interaction from disturbing the map.
//!
//! ## Wheel disambiguation
//!
//! Some platforms deliver the same physical scroll through both a legacy
//! and a standard event API. [`WheelPolicy::Recognized`] accepts a single
//! configured source and is the default; [`WheelPolicy::FirstClaim`]
//! reproduces the historical behavior where the first source to fire
//! claims the gesture, and exists as an explicit opt-in for hosts that
//! still receive duplicates.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Vec2};
//! use wayfind_pointer::{PointerAction, PointerEvent, PointerTracker};
//!
//! let mut tracker = PointerTracker::default();
//! let to_world = |p: Point| p; // identity transform for the example
//!
//! // Press on the surface, then drag: the tracker asks the host to pan.
//! tracker.advance(
//!     PointerEvent::Down { screen: Point::new(10.0, 10.0), over_surface: true },
//!     to_world,
//! );
//! let actions = tracker.advance(
//!     PointerEvent::Move { screen: Point::new(14.0, 13.0), over_surface: true },
//!     to_world,
//! );
//! assert_eq!(actions, [PointerAction::Pan(Vec2::new(4.0, 3.0))]);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod tracker;
mod wheel;

pub use tracker::{CursorIcon, PointerAction, PointerEvent, PointerState, PointerTracker};
pub use wheel::{WheelDevice, WheelPolicy};
