// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scoped registration of document-level ("global") listeners.
//!
//! A drag must keep receiving moves after the pointer leaves the widget, and a
//! focused slider listens for keys on the whole document. Those bindings live
//! outside the widget, so leaking one (or binding twice) is easy. Here every
//! registration returns a [`Subscription`] that is not `Clone` and can only be
//! given back through [`GlobalListeners::release`]; the host mirrors
//! [`GlobalListeners::active`] into its real event bindings.
//!
//! ```
//! use understory_slider::listeners::{GlobalListeners, ListenerKinds};
//!
//! let mut listeners = GlobalListeners::default();
//! let drag = listeners.acquire(ListenerKinds::POINTER_MOVE | ListenerKinds::POINTER_UP);
//! assert!(listeners.active().contains(ListenerKinds::POINTER_UP));
//!
//! listeners.release(drag);
//! assert!(listeners.active().is_empty());
//! assert_eq!(listeners.outstanding(), 0);
//! ```

use bitflags::bitflags;

bitflags! {
    /// Kinds of global listener a slider may hold.
    #[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
    pub struct ListenerKinds: u8 {
        /// Document key presses, while focused.
        const KEY_DOWN = 1 << 0;
        /// Mouse moves during a mouse drag.
        const POINTER_MOVE = 1 << 1;
        /// Mouse release ending a mouse drag.
        const POINTER_UP = 1 << 2;
        /// Touch moves during a touch drag.
        const TOUCH_MOVE = 1 << 3;
        /// Touch end ending a touch drag.
        const TOUCH_END = 1 << 4;
        /// Window resizes, for the whole mounted lifetime.
        const RESIZE = 1 << 5;
    }
}

/// Proof of a registration; hand it back to [`GlobalListeners::release`].
#[must_use = "dropping a subscription leaks its listeners; release it"]
#[derive(Debug, PartialEq, Eq)]
pub struct Subscription {
    kinds: ListenerKinds,
}

impl Subscription {
    /// The listener kinds this subscription holds.
    #[must_use]
    pub fn kinds(&self) -> ListenerKinds {
        self.kinds
    }
}

/// Registry of currently bound global listeners.
#[derive(Debug, Default)]
pub struct GlobalListeners {
    active: ListenerKinds,
    acquired: u64,
    released: u64,
}

impl GlobalListeners {
    /// Registers `kinds`.
    ///
    /// Each kind may be held by one subscription at a time; registering a
    /// kind twice is a logic error and panics in debug builds.
    pub fn acquire(&mut self, kinds: ListenerKinds) -> Subscription {
        debug_assert!(
            !self.active.intersects(kinds),
            "listeners {:?} registered twice",
            self.active & kinds
        );
        self.active |= kinds;
        self.acquired += 1;
        Subscription { kinds }
    }

    /// Unregisters everything `subscription` holds.
    pub fn release(&mut self, subscription: Subscription) {
        debug_assert!(
            self.active.contains(subscription.kinds),
            "released listeners {:?} that were not registered",
            subscription.kinds - self.active
        );
        self.active.remove(subscription.kinds);
        self.released += 1;
    }

    /// Releases the subscription in `slot`, if any. Returns what was released.
    pub fn release_slot(&mut self, slot: &mut Option<Subscription>) -> ListenerKinds {
        match slot.take() {
            Some(subscription) => {
                let kinds = subscription.kinds;
                self.release(subscription);
                kinds
            }
            None => ListenerKinds::empty(),
        }
    }

    /// Listener kinds currently bound.
    #[must_use]
    pub fn active(&self) -> ListenerKinds {
        self.active
    }

    /// Returns `true` if every kind in `kinds` is bound.
    #[must_use]
    pub fn is_active(&self, kinds: ListenerKinds) -> bool {
        self.active.contains(kinds)
    }

    /// Subscriptions handed out and not yet released.
    #[must_use]
    pub fn outstanding(&self) -> u64 {
        self.acquired - self.released
    }
}
