// Copyright 2025 the Wayfind Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Integration tests for the assembled map core: click selection, route
//! recomputation and fencing, and the pan/hover event flow.

use kurbo::{Point, Size, Vec2};
use wayfind_map::boundary::{CursorIcon, Notice, RouteError, RouteQuery, SelectionDelegate};
use wayfind_map::{Location, MapCore, MapPoint, Route, Segment};
use wayfind_pointer::PointerEvent;
use wayfind_scene::{DrawCall, ImageHandle, RecordingBackend};

#[derive(Default)]
struct TestShell {
    source_events: Vec<Option<String>>,
    destination_events: Vec<Option<String>>,
    route_queries: Vec<Option<(u64, String, String)>>,
    cursors: Vec<CursorIcon>,
}

impl SelectionDelegate for TestShell {
    fn source_changed(&mut self, source: Option<&Location>) {
        self.source_events.push(source.map(|l| l.short_name.clone()));
    }

    fn destination_changed(&mut self, destination: Option<&Location>) {
        self.destination_events
            .push(destination.map(|l| l.short_name.clone()));
    }

    fn route_needed(&mut self, query: Option<RouteQuery<'_>>) {
        self.route_queries.push(query.map(|q| q.to_owned_query()));
    }

    fn cursor_changed(&mut self, icon: CursorIcon) {
        self.cursors.push(icon);
    }
}

impl TestShell {
    fn last_query(&self) -> (u64, String, String) {
        self.route_queries
            .last()
            .cloned()
            .flatten()
            .expect("expected a route query")
    }
}

fn location(short: &str, x: f64, y: f64) -> Location {
    Location {
        short_name: short.to_string(),
        long_name: format!("{short} Building"),
        x,
        y,
    }
}

/// Core over a 3000x2500 image in an 800x600 view with the origin at
/// zero, so world and screen coordinates coincide.
fn campus_core() -> MapCore {
    let mut core = MapCore::new(Size::new(800.0, 600.0));
    core.set_background(ImageHandle(0), Size::new(3000.0, 2500.0));
    core.set_locations(vec![
        location("A", 100.0, 100.0),
        location("B", 110.0, 100.0),
        location("C", 300.0, 300.0),
    ]);
    let _ = core.take_redraw();
    core
}

fn move_to(core: &mut MapCore, shell: &mut TestShell, x: f64, y: f64) {
    core.handle_pointer(
        PointerEvent::Move {
            screen: Point::new(x, y),
            over_surface: true,
        },
        shell,
    );
}

fn click_at(core: &mut MapCore, shell: &mut TestShell, x: f64, y: f64) {
    move_to(core, shell, x, y);
    core.handle_pointer(
        PointerEvent::Down {
            screen: Point::new(x, y),
            over_surface: true,
        },
        shell,
    );
    core.handle_pointer(
        PointerEvent::Up {
            screen: Point::new(x, y),
            over_surface: true,
        },
        shell,
    );
}

fn segment(x0: f64, y0: f64, x1: f64, y1: f64) -> Segment {
    Segment {
        start: MapPoint { x: x0, y: y0 },
        end: MapPoint { x: x1, y: y1 },
        cost: 0.0,
    }
}

#[test]
fn hover_highlights_and_unhighlights() {
    let mut core = campus_core();
    let mut shell = TestShell::default();

    move_to(&mut core, &mut shell, 300.0, 295.0);
    assert_eq!(
        core.selection().highlighted.map(|l| l.short_name.as_str()),
        Some("C")
    );
    assert!(core.take_redraw());

    move_to(&mut core, &mut shell, 600.0, 50.0);
    assert!(core.selection().highlighted.is_none());
    assert!(core.take_redraw());
}

#[test]
fn clicking_a_highlighted_location_toggles_the_source() {
    let mut core = campus_core();
    let mut shell = TestShell::default();

    // First click selects C as the source, exactly one callback.
    click_at(&mut core, &mut shell, 300.0, 300.0);
    assert_eq!(shell.source_events, [Some("C".to_string())]);
    assert_eq!(
        core.selection().source.map(|l| l.short_name.as_str()),
        Some("C")
    );
    // No destination yet: the recompute request resolves to "nothing to
    // fetch".
    assert_eq!(shell.route_queries, [None]);

    // Clicking C again deselects it.
    click_at(&mut core, &mut shell, 300.0, 300.0);
    assert_eq!(
        shell.source_events,
        [Some("C".to_string()), None],
        "deselection must fire exactly one more callback"
    );
    assert!(core.selection().source.is_none());
}

#[test]
fn second_location_becomes_the_destination_and_requests_a_route() {
    let mut core = campus_core();
    let mut shell = TestShell::default();

    click_at(&mut core, &mut shell, 300.0, 300.0); // C as source
    click_at(&mut core, &mut shell, 100.0, 100.0); // A as destination

    assert_eq!(shell.destination_events, [Some("A".to_string())]);
    let (_, source, destination) = shell.last_query();
    assert_eq!((source.as_str(), destination.as_str()), ("C", "A"));
}

#[test]
fn clicking_the_destination_deselects_it_and_clears_the_route() {
    let mut core = campus_core();
    let mut shell = TestShell::default();

    click_at(&mut core, &mut shell, 300.0, 300.0);
    click_at(&mut core, &mut shell, 100.0, 100.0);
    let (generation, _, _) = shell.last_query();
    let route = Route {
        path: vec![segment(300.0, 300.0, 100.0, 100.0)],
        cost: 283.0,
    };
    assert_eq!(core.apply_route_response(generation, Ok(route)), None);
    assert!(core.route().is_some());

    click_at(&mut core, &mut shell, 100.0, 100.0);
    assert_eq!(
        shell.destination_events,
        [Some("A".to_string()), None]
    );
    assert!(core.route().is_none(), "route cleared with its endpoint");
}

#[test]
fn source_and_destination_are_never_the_same_location() {
    let mut core = campus_core();
    let mut shell = TestShell::default();

    assert!(core.set_source(Some("A"), &mut shell));
    assert!(core.set_destination(Some("A"), &mut shell));

    let selection = core.selection();
    assert!(selection.source.is_none(), "source yields to the new destination");
    assert_eq!(
        selection.destination.map(|l| l.short_name.as_str()),
        Some("A")
    );

    // And the same from the other direction.
    assert!(core.set_source(Some("A"), &mut shell));
    let selection = core.selection();
    assert_eq!(selection.source.map(|l| l.short_name.as_str()), Some("A"));
    assert!(selection.destination.is_none());
}

#[test]
fn unknown_short_names_are_rejected_without_side_effects() {
    let mut core = campus_core();
    let mut shell = TestShell::default();

    assert!(!core.set_source(Some("nope"), &mut shell));
    assert!(shell.source_events.is_empty());
    assert!(shell.route_queries.is_empty());
}

#[test]
fn no_path_clears_the_route_but_keeps_the_selection() {
    let mut core = campus_core();
    let mut shell = TestShell::default();

    core.set_source(Some("C"), &mut shell);
    core.set_destination(Some("A"), &mut shell);
    let (generation, _, _) = shell.last_query();
    let route = Route {
        path: vec![segment(300.0, 300.0, 100.0, 100.0)],
        cost: 283.0,
    };
    core.apply_route_response(generation, Ok(route));

    // The user picks a new destination that turns out to be unreachable.
    core.set_destination(Some("B"), &mut shell);
    let (generation, _, _) = shell.last_query();
    let notice = core.apply_route_response(generation, Err(RouteError::NoPath));

    assert_eq!(notice, Some(Notice::NoPath));
    assert!(core.route().is_none());
    let selection = core.selection();
    assert_eq!(selection.source.map(|l| l.short_name.as_str()), Some("C"));
    assert_eq!(
        selection.destination.map(|l| l.short_name.as_str()),
        Some("B")
    );
}

#[test]
fn transport_failure_leaves_route_state_untouched() {
    let mut core = campus_core();
    let mut shell = TestShell::default();

    core.set_source(Some("C"), &mut shell);
    core.set_destination(Some("A"), &mut shell);
    let (generation, _, _) = shell.last_query();
    let notice = core.apply_route_response(generation, Err(RouteError::Unavailable));

    assert_eq!(notice, Some(Notice::ServiceUnavailable));
    assert!(core.route().is_none());
    assert_eq!(
        core.selection().source.map(|l| l.short_name.as_str()),
        Some("C")
    );
}

#[test]
fn stale_route_responses_are_dropped() {
    let mut core = campus_core();
    let mut shell = TestShell::default();

    core.set_source(Some("C"), &mut shell);
    core.set_destination(Some("A"), &mut shell);
    let (stale_generation, _, _) = shell.last_query();

    // A newer request supersedes the one in flight.
    core.set_destination(Some("B"), &mut shell);
    let (fresh_generation, _, _) = shell.last_query();
    assert!(fresh_generation > stale_generation);

    let stale_route = Route {
        path: vec![segment(300.0, 300.0, 100.0, 100.0)],
        cost: 283.0,
    };
    let notice = core.apply_route_response(stale_generation, Ok(stale_route));
    assert_eq!(notice, None);
    assert!(core.route().is_none(), "stale response must not land");

    let fresh_route = Route {
        path: vec![segment(300.0, 300.0, 110.0, 100.0)],
        cost: 275.0,
    };
    core.apply_route_response(fresh_generation, Ok(fresh_route));
    assert!(core.route().is_some());
}

#[test]
fn drag_pans_within_bounds_and_rejects_at_the_edge() {
    let mut core = campus_core();
    let mut shell = TestShell::default();

    // Press on empty map: no selection callbacks, pan armed.
    core.handle_pointer(
        PointerEvent::Down {
            screen: Point::new(500.0, 400.0),
            over_surface: true,
        },
        &mut shell,
    );
    assert!(shell.source_events.is_empty());
    let _ = core.take_redraw();

    // Dragging down-right would expose area above/left of the image
    // (origin may not go positive); rejected wholesale.
    move_to(&mut core, &mut shell, 510.0, 405.0);
    assert_eq!(core.view().origin(), Vec2::ZERO);
    assert!(!core.take_redraw());

    // Dragging up-left scrolls the map.
    move_to(&mut core, &mut shell, 490.0, 395.0);
    assert_eq!(core.view().origin(), Vec2::new(-20.0, -10.0));
    assert!(core.take_redraw());

    core.handle_pointer(
        PointerEvent::Up {
            screen: Point::new(490.0, 395.0),
            over_surface: true,
        },
        &mut shell,
    );
    assert_eq!(shell.cursors, [CursorIcon::Move]);
}

#[test]
fn resize_snaps_the_origin_and_requests_a_redraw() {
    let mut core = campus_core();
    core.set_origin(Vec2::new(-2200.0, -1900.0));
    let _ = core.take_redraw();

    core.handle_resize(Size::new(1000.0, 700.0));
    assert!(core.take_redraw());
    let origin = core.view().origin();
    assert_eq!(origin, Vec2::new(-2000.0, -1800.0));
}

#[test]
fn reset_clears_selection_route_and_pointer_state() {
    let mut core = campus_core();
    let mut shell = TestShell::default();

    core.set_source(Some("C"), &mut shell);
    core.set_destination(Some("A"), &mut shell);
    let (generation, _, _) = shell.last_query();

    core.reset();
    let selection = core.selection();
    assert!(selection.source.is_none());
    assert!(selection.destination.is_none());
    assert!(selection.highlighted.is_none());
    assert!(core.route().is_none());

    // A response for the pre-reset request arrives late; it is fenced off.
    let route = Route {
        path: vec![segment(300.0, 300.0, 100.0, 100.0)],
        cost: 283.0,
    };
    assert_eq!(core.apply_route_response(generation, Ok(route)), None);
    assert!(core.route().is_none());

    // Locations survive a reset; the shell refetches only on full reload.
    assert_eq!(core.locations().len(), 3);
}

#[test]
fn render_composes_background_marks_and_route() {
    let mut core = campus_core();
    let mut shell = TestShell::default();

    core.set_source(Some("C"), &mut shell);
    core.set_destination(Some("A"), &mut shell);
    let (generation, _, _) = shell.last_query();
    let route = Route {
        path: vec![
            segment(300.0, 300.0, 200.0, 200.0),
            segment(200.0, 200.0, 100.0, 100.0),
        ],
        cost: 283.0,
    };
    core.apply_route_response(generation, Ok(route));

    let mut backend = RecordingBackend::default();
    core.render(&mut backend);

    let calls = backend.calls();
    // Image, source circle, destination circle, two route lines.
    assert_eq!(calls.len(), 5);
    assert!(matches!(calls[0], DrawCall::Image { .. }));
    match calls[1] {
        DrawCall::Circle { center, .. } => assert_eq!(center, Point::new(300.0, 300.0)),
        ref other => panic!("expected the source circle, got {other:?}"),
    }
    assert!(matches!(calls[4], DrawCall::Line { .. }));
}
