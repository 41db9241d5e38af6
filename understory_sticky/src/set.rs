// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A group of controllers sharing one resize notifier.

use alloc::collections::BTreeMap;
use alloc::vec::Vec;

use crate::controller::StickyController;
use crate::host::{ScrollSource, StickyHost};
use crate::id::StickyId;
use crate::notifier::ResizeNotifier;

/// Owns sticky controllers and routes host notifications to them.
///
/// A host typically keeps one `StickySet` per document, forwards its resize
/// event to [`handle_resize`](Self::handle_resize) and each scroll event to
/// [`handle_scroll`](Self::handle_scroll). Unbound controllers receive
/// neither.
#[derive(Debug)]
pub struct StickySet<E> {
    controllers: BTreeMap<StickyId, StickyController<E>>,
    notifier: ResizeNotifier<StickyId>,
}

impl<E> Default for StickySet<E> {
    fn default() -> Self {
        Self {
            controllers: BTreeMap::new(),
            notifier: ResizeNotifier::default(),
        }
    }
}

impl<E: Clone + PartialEq> StickySet<E> {
    /// Creates an empty set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Takes ownership of `controller` (bound or not) and returns its id.
    ///
    /// Inserting an already bound controller is only meaningful if it was
    /// bound against [`notifier_mut`](Self::notifier_mut).
    pub fn insert(&mut self, controller: StickyController<E>) -> StickyId {
        let id = controller.id();
        self.controllers.insert(id, controller);
        id
    }

    /// Unbinds (if needed) and returns the controller for `id`.
    pub fn remove<H>(&mut self, host: &mut H, id: StickyId) -> Option<StickyController<E>>
    where
        H: StickyHost<Element = E>,
    {
        let mut controller = self.controllers.remove(&id)?;
        if controller.is_active() {
            controller.unbind(host, &mut self.notifier);
        }
        Some(controller)
    }

    /// Returns the controller for `id`.
    #[must_use]
    pub fn get(&self, id: StickyId) -> Option<&StickyController<E>> {
        self.controllers.get(&id)
    }

    /// Returns the controller for `id` mutably.
    pub fn get_mut(&mut self, id: StickyId) -> Option<&mut StickyController<E>> {
        self.controllers.get_mut(&id)
    }

    /// Returns the number of controllers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.controllers.len()
    }

    /// Returns `true` if the set holds no controllers.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.controllers.is_empty()
    }

    /// Iterates controllers in id (creation) order.
    pub fn iter(&self) -> impl Iterator<Item = &StickyController<E>> + '_ {
        self.controllers.values()
    }

    /// Returns the resize notifier shared by the set's controllers.
    #[must_use]
    pub fn notifier(&self) -> &ResizeNotifier<StickyId> {
        &self.notifier
    }

    /// Returns the resize notifier mutably, for binding controllers outside
    /// the set.
    pub fn notifier_mut(&mut self) -> &mut ResizeNotifier<StickyId> {
        &mut self.notifier
    }

    /// Binds the controller for `id`. Returns `false` if there is none.
    pub fn bind<H>(&mut self, host: &mut H, id: StickyId) -> bool
    where
        H: StickyHost<Element = E>,
    {
        self.with(id, |controller, notifier| {
            controller.bind(host, notifier);
        })
    }

    /// Unbinds the controller for `id`. Returns `false` if there is none.
    pub fn unbind<H>(&mut self, host: &mut H, id: StickyId) -> bool
    where
        H: StickyHost<Element = E>,
    {
        self.with(id, |controller, notifier| {
            controller.unbind(host, notifier);
        })
    }

    /// Rebinds the controller for `id`. Returns `false` if there is none.
    pub fn rebind<H>(&mut self, host: &mut H, id: StickyId) -> bool
    where
        H: StickyHost<Element = E>,
    {
        self.with(id, |controller, notifier| {
            controller.rebind(host, notifier);
        })
    }

    /// Refreshes the controller for `id`. Returns `false` if there is none.
    pub fn refresh<H>(&mut self, host: &mut H, id: StickyId) -> bool
    where
        H: StickyHost<Element = E>,
    {
        self.with(id, |controller, _| {
            controller.refresh(host);
        })
    }

    /// Binds every unbound controller, in id order.
    pub fn bind_all<H>(&mut self, host: &mut H)
    where
        H: StickyHost<Element = E>,
    {
        for controller in self.controllers.values_mut() {
            if !controller.is_active() {
                controller.bind(host, &mut self.notifier);
            }
        }
    }

    /// Unbinds every bound controller, in id order.
    pub fn unbind_all<H>(&mut self, host: &mut H)
    where
        H: StickyHost<Element = E>,
    {
        for controller in self.controllers.values_mut() {
            if controller.is_active() {
                controller.unbind(host, &mut self.notifier);
            }
        }
    }

    /// Runs [`StickyController::resize`] for every subscribed controller, in
    /// notifier order.
    pub fn handle_resize<H>(&mut self, host: &mut H)
    where
        H: StickyHost<Element = E>,
    {
        let order: Vec<StickyId> = self.notifier.dispatch_order().copied().collect();
        for id in order {
            if let Some(controller) = self.controllers.get_mut(&id) {
                controller.resize(host);
            }
        }
    }

    /// Runs [`StickyController::update`] for every bound controller that
    /// listens to `source`.
    pub fn handle_scroll<H>(&mut self, host: &mut H, source: &ScrollSource<E>)
    where
        H: StickyHost<Element = E>,
    {
        for controller in self.controllers.values_mut() {
            if controller.is_active() && controller.scroll_source() == source {
                controller.update(host);
            }
        }
    }

    fn with(
        &mut self,
        id: StickyId,
        f: impl FnOnce(&mut StickyController<E>, &mut ResizeNotifier<StickyId>),
    ) -> bool {
        match self.controllers.get_mut(&id) {
            Some(controller) => {
                f(controller, &mut self.notifier);
                true
            }
            None => false,
        }
    }
}
