// Copyright 2025 the Wayfind Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scoped platform event subscriptions.
//!
//! Pointer events are subscribed at the window/document level rather than
//! on the map surface, so a drag keeps panning while the cursor strays
//! over other UI. That subscription must not outlive the map: it is
//! modeled as a scoped resource that is started on mount and torn down
//! when the guard drops, instead of ambient global listeners.

/// A platform event subscription that can be torn down.
///
/// The host implements this over its windowing layer; the core only needs
/// to know how to stop listening.
pub trait EventSubscription {
    /// Stops delivering events. Called at most once.
    fn unsubscribe(&mut self);
}

/// Guard that tears down an [`EventSubscription`] on drop.
#[derive(Debug)]
pub struct ScopedSubscription<S: EventSubscription> {
    inner: Option<S>,
}

impl<S: EventSubscription> ScopedSubscription<S> {
    /// Takes ownership of an active subscription.
    #[must_use]
    pub fn new(subscription: S) -> Self {
        Self {
            inner: Some(subscription),
        }
    }

    /// Tears the subscription down now instead of at end of scope.
    pub fn cancel(mut self) {
        if let Some(mut subscription) = self.inner.take() {
            subscription.unsubscribe();
        }
    }
}

impl<S: EventSubscription> Drop for ScopedSubscription<S> {
    fn drop(&mut self) {
        if let Some(mut subscription) = self.inner.take() {
            subscription.unsubscribe();
        }
    }
}
