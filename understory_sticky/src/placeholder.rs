// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The in-flow proxy that reserves the element's space while it is fixed.

use kurbo::Size;

use crate::host::StickyHost;

/// A proxy node inserted right after the tracked element.
///
/// Hidden while the element is in flow; shown while it is fixed, so content
/// below does not jump up into the vacated space. Its box always mirrors the
/// element's outer size.
#[derive(Debug)]
pub(crate) struct Placeholder<E> {
    node: E,
}

impl<E: Clone + PartialEq> Placeholder<E> {
    /// Inserts a hidden placeholder after `element`.
    pub(crate) fn create<H>(host: &mut H, element: &E, class: &str) -> Self
    where
        H: StickyHost<Element = E>,
    {
        let node = host.insert_placeholder(element, class);
        host.set_visible(&node, false);
        Self { node }
    }

    pub(crate) fn node(&self) -> &E {
        &self.node
    }

    pub(crate) fn resize<H>(&self, host: &mut H, size: Size)
    where
        H: StickyHost<Element = E>,
    {
        host.set_size(&self.node, size);
    }

    pub(crate) fn set_visible<H>(&self, host: &mut H, visible: bool)
    where
        H: StickyHost<Element = E>,
    {
        host.set_visible(&self.node, visible);
    }

    pub(crate) fn is_visible<H>(&self, host: &H) -> bool
    where
        H: StickyHost<Element = E>,
    {
        host.is_visible(&self.node)
    }

    pub(crate) fn top_offset<H>(&self, host: &H) -> f64
    where
        H: StickyHost<Element = E>,
    {
        host.top_offset(&self.node)
    }

    /// Removes the node from the document.
    pub(crate) fn destroy<H>(self, host: &mut H)
    where
        H: StickyHost<Element = E>,
    {
        host.remove(&self.node);
    }
}
