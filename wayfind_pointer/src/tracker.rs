// Copyright 2025 the Wayfind Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;
use kurbo::{Point, Vec2};

use crate::wheel::{WheelClaim, WheelDevice, WheelPolicy};

/// A pointer event forwarded by the host's window-wide subscription.
///
/// `over_surface` is `true` when the event target is the map surface
/// itself rather than surrounding UI. Positions are in screen coordinates
/// relative to the surface origin.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PointerEvent {
    /// The pointer moved.
    Move {
        /// Screen position of the pointer.
        screen: Point,
        /// Whether the event target is the map surface.
        over_surface: bool,
    },
    /// The primary button was pressed.
    Down {
        /// Screen position of the pointer.
        screen: Point,
        /// Whether the event target is the map surface.
        over_surface: bool,
    },
    /// The primary button was released.
    Up {
        /// Screen position of the pointer.
        screen: Point,
        /// Whether the event target is the map surface.
        over_surface: bool,
    },
    /// A wheel event from one of the wheel-capable sources.
    Wheel {
        /// Which event API delivered this event.
        device: WheelDevice,
        /// Scroll amount, in the host's wheel units.
        delta: f64,
    },
}

/// Cursor affordance requested after a button release.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CursorIcon {
    /// The grab/move cursor shown while hovering the map surface.
    Move,
    /// The platform default cursor.
    Default,
}

/// An action the host must carry out in response to a pointer event.
///
/// The tracker never mutates the viewport or selection itself; it reports
/// what should happen and the host routes each action to the right
/// collaborator (pan policy, hit tester, click resolution).
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PointerAction {
    /// Attempt to pan the viewport by this screen-space delta.
    ///
    /// The host applies it through its bound policy and moves the origin
    /// only if the policy accepts.
    Pan(Vec2),
    /// Run the hit tester at this world position and update the highlight.
    Probe(Point),
    /// Resolve a click at this world position against the current
    /// highlight and selection.
    ResolveClick(Point),
    /// Update the cursor affordance.
    Cursor(CursorIcon),
    /// A wheel event was accepted from the recognized source.
    ///
    /// Reserved for a future zoom; hosts may ignore it today.
    Scroll(f64),
}

/// Transient pointer bookkeeping.
///
/// A plain value object: every field is written by
/// [`PointerTracker::advance`] and nothing else. Exposed for inspection
/// and tests rather than for mutation.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PointerState {
    /// Current screen position.
    pub screen: Point,
    /// Screen position from the previous processed event.
    pub screen_prev: Point,
    /// Current world position, as of the last processed event.
    pub world: Point,
    /// Whether the primary button is currently held.
    pub button_down: bool,
    /// Whether the held press started on the map surface.
    ///
    /// This is what keeps a pan alive while the cursor strays over other
    /// UI mid-drag.
    pub press_on_surface: bool,
    /// Whether the pointer is currently over the map surface.
    pub over_surface: bool,
}

/// Pointer state machine for map interaction.
///
/// Feed every window-level pointer event into [`PointerTracker::advance`]
/// together with the current screen → world conversion; carry out the
/// returned actions in order.
#[derive(Clone, Copy, Debug, Default)]
pub struct PointerTracker {
    state: PointerState,
    wheel_policy: WheelPolicy,
    wheel_claim: WheelClaim,
}

impl PointerTracker {
    /// Creates a tracker with an explicit wheel policy.
    ///
    /// [`PointerTracker::default`] uses the recognized-standard-source
    /// policy.
    #[must_use]
    pub fn new(wheel_policy: WheelPolicy) -> Self {
        Self {
            state: PointerState::default(),
            wheel_policy,
            wheel_claim: WheelClaim::default(),
        }
    }

    /// Returns the current pointer bookkeeping.
    #[must_use]
    pub fn state(&self) -> PointerState {
        self.state
    }

    /// Clears all transient state, including any held wheel claim.
    pub fn reset(&mut self) {
        self.state = PointerState::default();
        self.wheel_claim.reset();
    }

    /// Processes one pointer event, returning the actions for the host.
    ///
    /// `to_world` is the current screen → world conversion (pan origin
    /// included); it is queried at most once per event.
    ///
    /// Events that are neither over the surface nor part of a held press
    /// that started on the surface are ignored and produce no actions.
    pub fn advance(
        &mut self,
        event: PointerEvent,
        to_world: impl Fn(Point) -> Point,
    ) -> Vec<PointerAction> {
        let mut actions = Vec::new();
        match event {
            PointerEvent::Move {
                screen,
                over_surface,
            } => {
                self.state.over_surface = over_surface;
                if !self.engaged() {
                    return actions;
                }
                self.track(screen, &to_world);
                if self.state.button_down {
                    actions.push(PointerAction::Pan(self.state.screen - self.state.screen_prev));
                } else {
                    actions.push(PointerAction::Probe(self.state.world));
                }
            }
            PointerEvent::Down {
                screen,
                over_surface,
            } => {
                self.state.over_surface = over_surface;
                if !self.engaged() {
                    return actions;
                }
                self.track(screen, &to_world);
                self.state.button_down = true;
                self.state.press_on_surface = true;
                // Click resolution happens in the host, which knows the
                // current highlight and selection. A press over empty map
                // resolves to nothing there and merely armed the pan.
                actions.push(PointerAction::ResolveClick(self.state.world));
            }
            PointerEvent::Up {
                screen,
                over_surface,
            } => {
                let was_engaged = self.engaged() || over_surface;
                self.state.over_surface = over_surface;
                self.state.button_down = false;
                self.state.press_on_surface = false;
                if !was_engaged {
                    return actions;
                }
                self.track(screen, &to_world);
                let icon = if over_surface {
                    CursorIcon::Move
                } else {
                    CursorIcon::Default
                };
                actions.push(PointerAction::Cursor(icon));
            }
            PointerEvent::Wheel { device, delta } => {
                if !self.engaged() {
                    return actions;
                }
                if self.wheel_claim.accepts(self.wheel_policy, device) {
                    actions.push(PointerAction::Scroll(delta));
                }
            }
        }
        actions
    }

    /// An event is processed when it targets the surface or continues a
    /// press that started there.
    fn engaged(&self) -> bool {
        self.state.over_surface || self.state.press_on_surface
    }

    fn track(&mut self, screen: Point, to_world: &impl Fn(Point) -> Point) {
        self.state.screen_prev = self.state.screen;
        self.state.screen = screen;
        self.state.world = to_world(screen);
    }
}
