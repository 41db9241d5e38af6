// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The seam between a controller and the document it positions.

use kurbo::Size;

use crate::id::StickyId;
use crate::style::{StyleProperty, StyleValue};

/// Where the scroll offset driving a controller comes from.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub enum ScrollSource<E> {
    /// The document viewport.
    #[default]
    Viewport,
    /// A scrollable element.
    Element(E),
}

/// How the tracked element's width is chosen on every resize.
///
/// Fixed elements leave normal flow and lose their containing block's width,
/// so the controller pins an explicit width.
#[derive(Clone, Debug, PartialEq)]
pub enum WidthSource<E> {
    /// A constant width in CSS pixels.
    Fixed(f64),
    /// Copy the current content width of another element.
    Element(E),
}

/// Document access for a sticky controller.
///
/// Implement this for whatever owns the real nodes: a browser binding, a
/// retained UI tree, or a test double. All offsets are document-relative and
/// share the space of [`StickyHost::scroll_top`].
///
/// The controller only ever writes the properties named by [`StyleProperty`],
/// the state classes, and the placeholder node it asked the host to create.
pub trait StickyHost {
    /// Node handle. Cheap to clone; equality means "same node".
    type Element: Clone + PartialEq;

    /// Returns the parent of `element`, if any.
    fn parent(&self, element: &Self::Element) -> Option<Self::Element>;

    /// Returns the top edge of `element`'s border box in document space.
    fn top_offset(&self, element: &Self::Element) -> f64;

    /// Returns the content width of `element`.
    fn width(&self, element: &Self::Element) -> f64;

    /// Returns the border-box size of `element`, including padding and
    /// borders.
    fn outer_size(&self, element: &Self::Element) -> Size;

    /// Returns the height of the viewport.
    fn viewport_height(&self) -> f64;

    /// Returns the current vertical scroll offset of `source`.
    fn scroll_top(&self, source: &ScrollSource<Self::Element>) -> f64;

    /// Writes one inline style property. [`StyleValue::Unset`] removes the
    /// override.
    fn set_style(&mut self, element: &Self::Element, property: StyleProperty, value: StyleValue);

    /// Adds (`enabled == true`) or removes a class.
    fn set_class(&mut self, element: &Self::Element, class: &str, enabled: bool);

    /// Creates an empty block carrying `class` and inserts it as the next
    /// sibling of `after`.
    fn insert_placeholder(&mut self, after: &Self::Element, class: &str) -> Self::Element;

    /// Sets the explicit width and height of `element`.
    fn set_size(&mut self, element: &Self::Element, size: Size);

    /// Shows or hides `element`. Hidden elements take no space.
    fn set_visible(&mut self, element: &Self::Element, visible: bool);

    /// Returns whether `element` is currently shown.
    fn is_visible(&self, element: &Self::Element) -> bool;

    /// Detaches `element` from the document.
    fn remove(&mut self, element: &Self::Element);

    /// Starts routing scroll notifications from `source` for `id`.
    ///
    /// The host should forward them to
    /// [`StickyController::update`](crate::StickyController::update), either
    /// directly or through [`StickySet::handle_scroll`](crate::StickySet::handle_scroll).
    fn listen_scroll(&mut self, source: &ScrollSource<Self::Element>, id: StickyId);

    /// Stops routing scroll notifications from `source` for `id`.
    fn unlisten_scroll(&mut self, source: &ScrollSource<Self::Element>, id: StickyId);
}
