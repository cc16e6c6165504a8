// Copyright 2025 the Wayfind Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;
use alloc::vec::Vec;

use hashbrown::HashMap;
use kurbo::{Line, Point, Size, Vec2};

use wayfind_hit::{HitParams, find_hit, is_within};
use wayfind_pointer::{PointerAction, PointerEvent, PointerTracker, WheelPolicy};
use wayfind_scene::{ImageHandle, Overlay, SceneBackend, compose};
use wayfind_view2d::PanViewport;

use crate::boundary::{Notice, RouteError, RouteQuery, SelectionDelegate};
use crate::model::{Location, Route, Selection};

/// The assembled map core.
///
/// `MapCore` owns the viewport, the pointer tracker, the loaded location
/// list, and the selection/route state, and wires them together: pointer
/// and resize events come in, selection callbacks and redraw requests go
/// out, and [`MapCore::render`] composes the current frame.
///
/// All mutation happens synchronously inside the event entry points; the
/// shell drives them from its single event loop. The asynchronous
/// boundaries (image load, location fetch, route fetch) re-enter through
/// [`MapCore::set_background`], [`MapCore::set_locations`], and
/// [`MapCore::apply_route_response`].
#[derive(Debug)]
pub struct MapCore {
    view: PanViewport,
    tracker: PointerTracker,
    hit_params: HitParams,
    locations: Vec<Location>,
    by_short_name: HashMap<String, usize>,
    highlighted: Option<usize>,
    source: Option<usize>,
    destination: Option<usize>,
    route: Option<Route>,
    background: Option<ImageHandle>,
    route_generation: u64,
    needs_redraw: bool,
}

impl MapCore {
    /// Creates a core for a surface of the given size, with the default
    /// wheel policy and pick radius.
    #[must_use]
    pub fn new(view_size: Size) -> Self {
        Self::with_wheel_policy(view_size, WheelPolicy::default())
    }

    /// Creates a core with an explicit wheel policy.
    #[must_use]
    pub fn with_wheel_policy(view_size: Size, wheel_policy: WheelPolicy) -> Self {
        Self {
            view: PanViewport::new(view_size),
            tracker: PointerTracker::new(wheel_policy),
            hit_params: HitParams::default(),
            locations: Vec::new(),
            by_short_name: HashMap::new(),
            highlighted: None,
            source: None,
            destination: None,
            route: None,
            background: None,
            route_generation: 0,
            needs_redraw: false,
        }
    }

    /// Returns the viewport.
    #[must_use]
    pub fn view(&self) -> &PanViewport {
        &self.view
    }

    /// Sets the pan origin directly, e.g. for the initial map centering.
    pub fn set_origin(&mut self, origin: Vec2) {
        self.view.set_origin(origin);
        self.needs_redraw = true;
    }

    /// Returns the loaded locations in fetch order.
    #[must_use]
    pub fn locations(&self) -> &[Location] {
        &self.locations
    }

    /// Looks a location up by its short name.
    #[must_use]
    pub fn location(&self, short_name: &str) -> Option<&Location> {
        self.by_short_name
            .get(short_name)
            .map(|&index| &self.locations[index])
    }

    /// Returns the current selection.
    #[must_use]
    pub fn selection(&self) -> Selection<'_> {
        Selection {
            source: self.source.map(|i| &self.locations[i]),
            destination: self.destination.map(|i| &self.locations[i]),
            highlighted: self.highlighted.map(|i| &self.locations[i]),
        }
    }

    /// Returns the currently displayed route, if any.
    #[must_use]
    pub fn route(&self) -> Option<&Route> {
        self.route.as_ref()
    }

    /// Replaces the location list, typically once after the initial fetch.
    ///
    /// Any selection or highlight referring to the old list is cleared;
    /// the displayed route is dropped and in-flight route responses are
    /// fenced off.
    pub fn set_locations(&mut self, locations: Vec<Location>) {
        self.by_short_name = locations
            .iter()
            .enumerate()
            .map(|(index, location)| (location.short_name.clone(), index))
            .collect();
        self.locations = locations;
        self.highlighted = None;
        self.source = None;
        self.destination = None;
        self.route = None;
        self.route_generation += 1;
        self.needs_redraw = true;
    }

    /// Reports the loaded background image and its natural size.
    ///
    /// Called from the image-load callback. The viewport re-clamps
    /// immediately so the first drawn frame already satisfies the
    /// containment invariant.
    pub fn set_background(&mut self, image: ImageHandle, size: Size) {
        self.background = Some(image);
        self.view.set_image_size(Some(size));
        self.needs_redraw = true;
    }

    /// Processes one window-level pointer event.
    pub fn handle_pointer<D: SelectionDelegate>(&mut self, event: PointerEvent, delegate: &mut D) {
        let actions = {
            let view = &self.view;
            self.tracker.advance(event, |p| view.to_world(p))
        };
        for action in actions {
            match action {
                PointerAction::Pan(delta) => {
                    if self.view.try_pan(delta).is_applied() {
                        self.needs_redraw = true;
                    }
                }
                PointerAction::Probe(world) => self.probe(world),
                PointerAction::ResolveClick(world) => self.resolve_click(world, delegate),
                PointerAction::Cursor(icon) => delegate.cursor_changed(icon),
                // Zoom is not implemented; the transform pair is ready for
                // it but wheel input currently goes nowhere.
                PointerAction::Scroll(_) => {}
            }
        }
    }

    /// Reacts to a surface resize.
    pub fn handle_resize(&mut self, size: Size) {
        self.view.set_view_size(size);
        self.needs_redraw = true;
    }

    /// Sidebar-equivalent entry point: selects or clears the source by
    /// short name.
    ///
    /// Returns `false` if the name is unknown (nothing changes). If the
    /// new source equals the current destination, the destination is
    /// cleared first so the exclusivity invariant holds.
    pub fn set_source<D: SelectionDelegate>(
        &mut self,
        short_name: Option<&str>,
        delegate: &mut D,
    ) -> bool {
        let Ok(resolved) = self.resolve(short_name) else {
            return false;
        };
        if resolved.is_some() && resolved == self.destination {
            self.destination = None;
            delegate.destination_changed(None);
        }
        self.source = resolved;
        delegate.source_changed(resolved.map(|i| &self.locations[i]));
        self.needs_redraw = true;
        self.request_route(delegate);
        true
    }

    /// Sidebar-equivalent entry point: selects or clears the destination
    /// by short name.
    ///
    /// Returns `false` if the name is unknown (nothing changes). If the
    /// new destination equals the current source, the source is cleared
    /// first so the exclusivity invariant holds.
    pub fn set_destination<D: SelectionDelegate>(
        &mut self,
        short_name: Option<&str>,
        delegate: &mut D,
    ) -> bool {
        let Ok(resolved) = self.resolve(short_name) else {
            return false;
        };
        if resolved.is_some() && resolved == self.source {
            self.source = None;
            delegate.source_changed(None);
        }
        self.destination = resolved;
        delegate.destination_changed(resolved.map(|i| &self.locations[i]));
        self.needs_redraw = true;
        self.request_route(delegate);
        true
    }

    /// Applies a route response from the shell.
    ///
    /// Responses for a generation older than the latest request are stale
    /// and dropped without touching any state. The returned notice, if
    /// any, is for the shell to present to the user.
    pub fn apply_route_response(
        &mut self,
        generation: u64,
        result: Result<Route, RouteError>,
    ) -> Option<Notice> {
        if generation != self.route_generation {
            return None;
        }
        match result {
            Ok(route) => {
                self.route = Some(route);
                self.needs_redraw = true;
                None
            }
            Err(RouteError::NoPath) => {
                // Selection is retained so the user can pick a different
                // destination.
                self.route = None;
                self.needs_redraw = true;
                Some(Notice::NoPath)
            }
            Err(RouteError::Unavailable) => Some(Notice::ServiceUnavailable),
        }
    }

    /// Clears selection, route, highlight, and pointer state.
    ///
    /// The shell invokes this for its full reset; it already knows the
    /// selection is gone, so no delegate callbacks fire. In-flight route
    /// responses are fenced off by bumping the generation.
    pub fn reset(&mut self) {
        self.source = None;
        self.destination = None;
        self.highlighted = None;
        self.route = None;
        self.tracker.reset();
        self.route_generation += 1;
        self.needs_redraw = true;
    }

    /// Returns whether a redraw is pending, clearing the flag.
    pub fn take_redraw(&mut self) -> bool {
        core::mem::take(&mut self.needs_redraw)
    }

    /// Composes the current frame into backend draw calls.
    pub fn render<B: SceneBackend>(&self, backend: &mut B) {
        let lines: Vec<Line> = match &self.route {
            Some(route) => route.lines().collect(),
            None => Vec::new(),
        };
        let overlay = Overlay {
            background: self.background,
            highlighted: self.highlighted.map(|i| self.locations[i].world_pos()),
            source: self.source.map(|i| self.locations[i].world_pos()),
            destination: self.destination.map(|i| self.locations[i].world_pos()),
            route: &lines,
        };
        compose(&self.view, &overlay, backend);
    }

    /// Maps `Some(name)` to a location index, `None` to a cleared slot.
    /// `Err` means the name is unknown.
    fn resolve(&self, short_name: Option<&str>) -> Result<Option<usize>, ()> {
        match short_name {
            Some(name) => match self.by_short_name.get(name) {
                Some(&index) => Ok(Some(index)),
                None => Err(()),
            },
            None => Ok(None),
        }
    }

    fn probe(&mut self, world: Point) {
        let hit = find_hit(world, self.highlighted, &self.locations, &self.hit_params);
        if hit != self.highlighted {
            self.highlighted = hit;
            self.needs_redraw = true;
        }
    }

    fn resolve_click<D: SelectionDelegate>(&mut self, world: Point, delegate: &mut D) {
        let Some(index) = self.highlighted else {
            // Nothing highlighted: the press only armed panning.
            return;
        };
        if !is_within(world, self.locations[index].world_pos(), &self.hit_params) {
            return;
        }

        if self.source == Some(index) {
            self.source = None;
            delegate.source_changed(None);
        } else if self.destination == Some(index) {
            self.destination = None;
            delegate.destination_changed(None);
        } else if self.source.is_none() {
            self.source = Some(index);
            delegate.source_changed(Some(&self.locations[index]));
        } else {
            self.destination = Some(index);
            delegate.destination_changed(Some(&self.locations[index]));
        }
        self.needs_redraw = true;
        self.request_route(delegate);
    }

    /// Issues a route recompute request for the current endpoints.
    ///
    /// Every request gets a fresh generation, so any response still in
    /// flight for the previous endpoints becomes stale. With an endpoint
    /// missing there is nothing to compute and the displayed route is
    /// cleared immediately.
    fn request_route<D: SelectionDelegate>(&mut self, delegate: &mut D) {
        self.route_generation += 1;
        match (self.source, self.destination) {
            (Some(source), Some(destination)) => {
                delegate.route_needed(Some(RouteQuery {
                    generation: self.route_generation,
                    source: &self.locations[source].short_name,
                    destination: &self.locations[destination].short_name,
                }));
            }
            _ => {
                self.route = None;
                self.needs_redraw = true;
                delegate.route_needed(None);
            }
        }
    }
}
