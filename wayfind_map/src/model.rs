// Copyright 2025 the Wayfind Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Wire-compatible data model: locations, route segments, and routes.
//!
//! Field names on the wire are camelCase to match the campus path service,
//! which serializes its Java model objects verbatim.

use alloc::string::String;
use alloc::vec::Vec;

use kurbo::{Line, Point};
use serde::{Deserialize, Serialize};
use wayfind_hit::HitTarget;

/// A named location on the campus map, in world coordinates.
///
/// Immutable once loaded; the location list is fetched once and replaced
/// only on a full reset.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    /// Unique identifier, used in route queries.
    pub short_name: String,
    /// Human-readable display label.
    pub long_name: String,
    /// World-space X coordinate.
    pub x: f64,
    /// World-space Y coordinate.
    pub y: f64,
}

impl Location {
    /// World-space position of this location.
    #[must_use]
    pub fn world_pos(&self) -> Point {
        Point::new(self.x, self.y)
    }
}

impl HitTarget for Location {
    fn world_pos(&self) -> Point {
        Self::world_pos(self)
    }
}

/// A point on the route, in world coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct MapPoint {
    /// World-space X coordinate.
    pub x: f64,
    /// World-space Y coordinate.
    pub y: f64,
}

impl From<MapPoint> for Point {
    fn from(p: MapPoint) -> Self {
        Self::new(p.x, p.y)
    }
}

/// One straight segment of a route, in world coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    /// Segment start point.
    pub start: MapPoint,
    /// Segment end point.
    pub end: MapPoint,
    /// Cost of walking this segment, carried from the service.
    #[serde(default)]
    pub cost: f64,
}

impl Segment {
    /// This segment as a kurbo line, for drawing.
    #[must_use]
    pub fn to_line(self) -> Line {
        Line::new(Point::from(self.start), Point::from(self.end))
    }
}

/// A computed route between two locations.
///
/// Replaced wholesale on every new source/destination pair; never
/// partially updated.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Route {
    /// Ordered route segments.
    pub path: Vec<Segment>,
    /// Total route cost, carried from the service.
    #[serde(default)]
    pub cost: f64,
}

impl Route {
    /// Route segments as kurbo lines, in order.
    pub fn lines(&self) -> impl Iterator<Item = Line> + '_ {
        self.path.iter().map(|segment| segment.to_line())
    }
}

/// Borrowed view of the current selection.
///
/// The exclusivity invariant holds: `source` and `destination` are never
/// the same location while both are present.
#[derive(Clone, Copy, Debug)]
pub struct Selection<'a> {
    /// Selected route start.
    pub source: Option<&'a Location>,
    /// Selected route destination.
    pub destination: Option<&'a Location>,
    /// Location currently under the cursor.
    pub highlighted: Option<&'a Location>,
}
