// Copyright 2025 the Wayfind Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Wheel-source disambiguation.
//!
//! A single physical scroll can surface through more than one event API.
//! These types decide which source a tracker listens to so one scroll is
//! never processed twice.

/// The event API a wheel event arrived through.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WheelDevice {
    /// The modern, standardized wheel event stream.
    Standard,
    /// The legacy wheel event stream still fired by some platforms.
    Legacy,
}

/// How a tracker decides which wheel source to accept.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WheelPolicy {
    /// Accept only the given source and ignore all others.
    ///
    /// This is the default, with [`WheelDevice::Standard`] recognized.
    Recognized(WheelDevice),
    /// Accept whichever source fires first and hold that claim until the
    /// tracker is reset.
    ///
    /// This reproduces the historical first-event-wins race. It only
    /// exists for hosts whose platform delivers duplicate legacy and
    /// standard events for the same scroll and cannot tell which stream
    /// is authoritative up front.
    FirstClaim,
}

impl Default for WheelPolicy {
    fn default() -> Self {
        Self::Recognized(WheelDevice::Standard)
    }
}

/// Tracks which wheel source currently holds the claim.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) struct WheelClaim {
    claimed: Option<WheelDevice>,
}

impl WheelClaim {
    /// Returns `true` if an event from `device` should be processed.
    pub(crate) fn accepts(&mut self, policy: WheelPolicy, device: WheelDevice) -> bool {
        match policy {
            WheelPolicy::Recognized(recognized) => device == recognized,
            WheelPolicy::FirstClaim => match self.claimed {
                Some(holder) => holder == device,
                None => {
                    self.claimed = Some(device);
                    true
                }
            },
        }
    }

    /// Releases any held claim.
    pub(crate) fn reset(&mut self) {
        self.claimed = None;
    }
}
