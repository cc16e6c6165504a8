// Copyright 2025 the Wayfind Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Wayfind Map: the assembled campus map core.
//!
//! This crate glues the Wayfind building blocks into the interactive map
//! described at the top of the workspace: a pannable campus image where
//! hovering discovers named locations, clicking picks a route source and
//! destination, and a computed route is overlaid as a polyline.
//!
//! - [`wayfind_view2d`] supplies the viewport: screen ↔ world conversion
//!   and bounded panning.
//! - [`wayfind_pointer`] turns window-level pointer events into actions.
//! - [`wayfind_hit`] resolves which location is under the cursor.
//! - [`wayfind_scene`] composes the frame into backend draw calls.
//!
//! [`MapCore`] owns that assembly plus the loaded [`Location`] list, the
//! selection, and the displayed [`Route`]. Everything the core cannot do
//! alone — fetching data, presenting notices, drawing pixels — crosses a
//! boundary trait from [`boundary`].
//!
//! ## Shell integration sketch
//!
//! ```rust
//! use kurbo::Size;
//! use wayfind_map::boundary::{RouteQuery, SelectionDelegate};
//! use wayfind_map::{Location, MapCore};
//!
//! struct Shell {
//!     pending: Option<(u64, String, String)>,
//! }
//!
//! impl SelectionDelegate for Shell {
//!     fn source_changed(&mut self, _source: Option<&Location>) {
//!         // Update the sidebar dropdown.
//!     }
//!     fn destination_changed(&mut self, _destination: Option<&Location>) {}
//!     fn route_needed(&mut self, query: Option<RouteQuery<'_>>) {
//!         // Kick off the fetch; report back with the same generation
//!         // via `MapCore::apply_route_response`.
//!         self.pending = query.map(|q| q.to_owned_query());
//!     }
//! }
//!
//! let mut core = MapCore::new(Size::new(800.0, 600.0));
//! let mut shell = Shell { pending: None };
//! core.set_locations(vec![Location {
//!     short_name: "CSE".into(),
//!     long_name: "Computer Science".into(),
//!     x: 2259.7,
//!     y: 1715.5,
//! }]);
//! let changed = core.set_source(Some("CSE"), &mut shell);
//! assert!(changed);
//! ```
//!
//! This crate is `no_std` + `alloc`; the `std` feature (default) adds
//! `std::error::Error` impls for the boundary error types.

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod boundary;
mod map;
mod model;
mod subscription;

pub use map::MapCore;
pub use model::{Location, MapPoint, Route, Segment, Selection};
pub use subscription::{EventSubscription, ScopedSubscription};
