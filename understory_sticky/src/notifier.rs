// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tiered resize subscriptions.
//!
//! [`ResizeNotifier`] only records who is subscribed and in which order they
//! should run. Hosts own the handlers and execute them: call
//! [`ResizeNotifier::notify`] from the platform's resize event and look each
//! key up in whatever table holds the handlers (see
//! [`StickySet`](crate::StickySet) for the sticky case).
//!
//! Handlers that change layout go in [`Tier::First`] or [`Tier::Main`];
//! handlers that measure layout go in [`Tier::Last`] so they observe the
//! final sizes.
//!
//! ```rust
//! use understory_sticky::{ResizeNotifier, Tier};
//!
//! let mut notifier = ResizeNotifier::new();
//! notifier.subscribe("measure", Tier::Last);
//! notifier.subscribe("grid", Tier::Main);
//! notifier.subscribe("fonts", Tier::First);
//!
//! let order: Vec<_> = notifier.dispatch_order().copied().collect();
//! assert_eq!(order, ["fonts", "grid", "measure"]);
//! ```

use alloc::vec::Vec;

/// Priority tier of a resize subscription.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Tier {
    /// Runs before everything else.
    First,
    /// The default tier.
    Main,
    /// Runs after all other tiers.
    Last,
}

impl Tier {
    /// Tiers in dispatch order.
    pub const ALL: [Self; 3] = [Self::First, Self::Main, Self::Last];

    const fn index(self) -> usize {
        match self {
            Self::First => 0,
            Self::Main => 1,
            Self::Last => 2,
        }
    }
}

/// Ordered resize subscriptions keyed by `K`.
///
/// Within a tier, keys run in subscription order. Callers must not rely on
/// their position relative to peers in the same tier.
#[derive(Clone, Debug)]
pub struct ResizeNotifier<K> {
    tiers: [Vec<K>; 3],
}

impl<K> Default for ResizeNotifier<K> {
    fn default() -> Self {
        Self {
            tiers: [Vec::new(), Vec::new(), Vec::new()],
        }
    }
}

impl<K: PartialEq> ResizeNotifier<K> {
    /// Creates an empty notifier.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Subscribes `key` at `tier`.
    ///
    /// Subscribing a key already present in that tier keeps its original
    /// position.
    pub fn subscribe(&mut self, key: K, tier: Tier) {
        let keys = &mut self.tiers[tier.index()];
        if !keys.contains(&key) {
            keys.push(key);
        }
    }

    /// Removes `key` from `tier`, returning whether it was subscribed there.
    pub fn unsubscribe(&mut self, key: &K, tier: Tier) -> bool {
        let keys = &mut self.tiers[tier.index()];
        match keys.iter().position(|k| k == key) {
            Some(i) => {
                keys.remove(i);
                true
            }
            None => false,
        }
    }

    /// Returns whether `key` is subscribed at `tier`.
    #[must_use]
    pub fn is_subscribed(&self, key: &K, tier: Tier) -> bool {
        self.tiers[tier.index()].contains(key)
    }

    /// Total number of subscriptions across all tiers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tiers.iter().map(Vec::len).sum()
    }

    /// Returns `true` if nothing is subscribed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tiers.iter().all(Vec::is_empty)
    }

    /// Iterates keys in dispatch order: tier by tier, then subscription order.
    pub fn dispatch_order(&self) -> impl Iterator<Item = &K> + '_ {
        self.tiers.iter().flatten()
    }

    /// Calls `f` for each subscribed key in dispatch order.
    pub fn notify(&self, mut f: impl FnMut(&K)) {
        for key in self.dispatch_order() {
            f(key);
        }
    }
}
