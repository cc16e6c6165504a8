// Copyright 2025 the Wayfind Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Boundary contracts between the map core and the application shell.
//!
//! The core never performs I/O. Location and route retrieval, the side
//! panel, and user-facing notices all live behind these traits; the shell
//! implements them and forwards results back into
//! [`MapCore`](crate::MapCore).

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use crate::model::{Location, Route};

pub use wayfind_pointer::CursorIcon;

/// Source of the campus location list.
///
/// Resolution is asynchronous at the platform level; by the time the
/// shell calls this the transport has either produced a full list or
/// failed. A failure defers map mounting and is surfaced to the user.
pub trait LocationSource {
    /// Fetches the complete location list.
    fn fetch_locations(&mut self) -> Result<Vec<Location>, FetchError>;
}

/// Source of computed routes between two locations.
pub trait RouteSource {
    /// Fetches a route between two locations named by short name.
    fn fetch_route(&mut self, source: &str, destination: &str) -> Result<Route, RouteError>;
}

/// Shell-side observer of selection changes made by the map core.
///
/// Both the on-map click path and the sidebar-equivalent entry points
/// funnel through these callbacks, and every selection change is followed
/// by a [`SelectionDelegate::route_needed`] call.
pub trait SelectionDelegate {
    /// The route source changed. `None` means it was deselected.
    fn source_changed(&mut self, source: Option<&Location>);

    /// The route destination changed. `None` means it was deselected.
    fn destination_changed(&mut self, destination: Option<&Location>);

    /// The route shown on the map must be recomputed.
    ///
    /// `Some` carries the query to run; the shell fetches it (via a
    /// [`RouteSource`]) and reports back through
    /// [`MapCore::apply_route_response`](crate::MapCore::apply_route_response)
    /// with the query's generation. `None` means an endpoint is missing;
    /// the core has already cleared the displayed route and nothing needs
    /// fetching.
    fn route_needed(&mut self, query: Option<RouteQuery<'_>>);

    /// The cursor affordance over the map surface changed.
    fn cursor_changed(&mut self, _icon: CursorIcon) {}
}

/// A route recomputation request issued to the shell.
///
/// The generation fences stale responses: responses for an older
/// generation than the core's current one are dropped on arrival.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RouteQuery<'a> {
    /// Generation stamp for this request.
    pub generation: u64,
    /// Short name of the route source.
    pub source: &'a str,
    /// Short name of the route destination.
    pub destination: &'a str,
}

impl RouteQuery<'_> {
    /// An owned copy of this query, for shells that fetch asynchronously.
    #[must_use]
    pub fn to_owned_query(&self) -> (u64, String, String) {
        (
            self.generation,
            String::from(self.source),
            String::from(self.destination),
        )
    }
}

/// The location list could not be retrieved.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FetchError {
    /// The service could not be reached at the transport level.
    Unavailable,
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unavailable => write!(f, "the location service could not be reached"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for FetchError {}

/// A route could not be produced.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RouteError {
    /// The service answered, but no path exists between the endpoints.
    NoPath,
    /// The service could not be reached at the transport level.
    Unavailable,
}

impl fmt::Display for RouteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoPath => write!(f, "no path exists between the selected locations"),
            Self::Unavailable => write!(f, "the route service could not be reached"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for RouteError {}

/// A user-facing message produced by the core for the shell to present.
///
/// The core never panics and never logs; failure surfaces as a notice
/// plus "no update this frame".
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Notice {
    /// No path exists between the selected source and destination.
    NoPath,
    /// A service could not be reached; the user should retry.
    ServiceUnavailable,
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoPath => write!(
                f,
                "No path exists between the source and destination. Please pick a new source and destination."
            ),
            Self::ServiceUnavailable => {
                write!(f, "The server is not currently running. Please try again.")
            }
        }
    }
}
