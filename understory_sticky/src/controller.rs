// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The per-element sticky state machine and its lifecycle.

use alloc::boxed::Box;
use core::fmt;

use crate::host::{ScrollSource, StickyHost, WidthSource};
use crate::id::StickyId;
use crate::notifier::{ResizeNotifier, Tier};
use crate::placeholder::Placeholder;
use crate::placement::{Geometry, Margins, Placement, Resolved, Transition, resolve};
use crate::style::{StateClasses, StyleProperty, StyleValue};

const LOG_TARGET: &str = "understory_sticky";

/// Lifecycle and transition hooks. Every hook defaults to a no-op.
///
/// ```rust
/// use understory_sticky::{Placement, StickyCallbacks};
///
/// let callbacks = StickyCallbacks::new()
///     .on_did_stop(|placement| assert!(placement.is_stop()))
///     .on_did_start(|previous| assert_ne!(previous, Placement::Middle));
/// ```
pub struct StickyCallbacks {
    on_bind: Box<dyn FnMut()>,
    on_will_unbind: Box<dyn FnMut()>,
    on_did_start: Box<dyn FnMut(Placement)>,
    on_did_stop: Box<dyn FnMut(Placement)>,
}

impl StickyCallbacks {
    /// Creates a set of no-op hooks.
    #[must_use]
    pub fn new() -> Self {
        Self {
            on_bind: Box::new(|| {}),
            on_will_unbind: Box::new(|| {}),
            on_did_start: Box::new(|_| {}),
            on_did_stop: Box::new(|_| {}),
        }
    }

    /// Runs after [`StickyController::bind`] has set everything up, before
    /// the first update.
    #[must_use]
    pub fn on_bind(mut self, f: impl FnMut() + 'static) -> Self {
        self.on_bind = Box::new(f);
        self
    }

    /// Runs at the very start of [`StickyController::unbind`], while the
    /// element still carries its sticky styles.
    #[must_use]
    pub fn on_will_unbind(mut self, f: impl FnMut() + 'static) -> Self {
        self.on_will_unbind = Box::new(f);
        self
    }

    /// Runs when the element starts floating; receives the stop it left
    /// ([`Placement::Top`] or [`Placement::Bottom`]).
    #[must_use]
    pub fn on_did_start(mut self, f: impl FnMut(Placement) + 'static) -> Self {
        self.on_did_start = Box::new(f);
        self
    }

    /// Runs when the element reaches a stop; receives that stop.
    #[must_use]
    pub fn on_did_stop(mut self, f: impl FnMut(Placement) + 'static) -> Self {
        self.on_did_stop = Box::new(f);
        self
    }

    fn fire(&mut self, transition: Transition) {
        match transition {
            Transition::Started(previous) => (self.on_did_start)(previous),
            Transition::Stopped(placement) => (self.on_did_stop)(placement),
        }
    }
}

impl Default for StickyCallbacks {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for StickyCallbacks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StickyCallbacks").finish_non_exhaustive()
    }
}

/// Construction options for a [`StickyController`].
///
/// Unset options default to: scroll the viewport, copy the parent's width,
/// use the parent as container, zero margins, default
/// [`StateClasses`], no-op callbacks.
#[derive(Debug)]
pub struct StickyOptions<E> {
    scroll: ScrollSource<E>,
    width: Option<WidthSource<E>>,
    container: Option<E>,
    margins: Margins,
    classes: Option<StateClasses>,
    callbacks: StickyCallbacks,
}

impl<E> Default for StickyOptions<E> {
    fn default() -> Self {
        Self {
            scroll: ScrollSource::Viewport,
            width: None,
            container: None,
            margins: Margins::default(),
            classes: Some(StateClasses::DEFAULT),
            callbacks: StickyCallbacks::new(),
        }
    }
}

impl<E> StickyOptions<E> {
    /// Creates default options.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the element whose scroll offset drives positioning.
    #[must_use]
    pub fn scroll(mut self, scroll: ScrollSource<E>) -> Self {
        self.scroll = scroll;
        self
    }

    /// Sets how the element's width is chosen.
    #[must_use]
    pub fn width(mut self, width: WidthSource<E>) -> Self {
        self.width = Some(width);
        self
    }

    /// Sets the container the element docks against.
    #[must_use]
    pub fn container(mut self, container: E) -> Self {
        self.container = Some(container);
        self
    }

    /// Sets the gap between the viewport top and the floating element.
    #[must_use]
    pub fn top(mut self, top: f64) -> Self {
        self.margins.top = top;
        self
    }

    /// Sets the gap between the viewport bottom and a tall floating element.
    #[must_use]
    pub fn bottom(mut self, bottom: f64) -> Self {
        self.margins.bottom = bottom;
        self
    }

    /// Sets the distance from the container's bottom edge at which the
    /// element docks.
    #[must_use]
    pub fn container_bottom(mut self, container_bottom: f64) -> Self {
        self.margins.container_bottom = container_bottom;
        self
    }

    /// Replaces all three margins.
    #[must_use]
    pub fn margins(mut self, margins: Margins) -> Self {
        self.margins = margins;
        self
    }

    /// Sets the class names mirrored onto the element.
    #[must_use]
    pub fn classes(mut self, classes: StateClasses) -> Self {
        self.classes = Some(classes);
        self
    }

    /// Disables state classes on the element. The placeholder still gets the
    /// default placeholder class.
    #[must_use]
    pub fn without_classes(mut self) -> Self {
        self.classes = None;
        self
    }

    /// Sets the lifecycle and transition hooks.
    #[must_use]
    pub fn callbacks(mut self, callbacks: StickyCallbacks) -> Self {
        self.callbacks = callbacks;
        self
    }
}

/// Keeps one element sticky within its container.
///
/// The controller is headless: every operation that touches the document
/// takes the [`StickyHost`]. Construction reads the parent relationship and
/// nothing else; [`bind`](Self::bind) does all the setup and
/// [`unbind`](Self::unbind) undoes it.
///
/// Hosts forward scroll notifications to [`update`](Self::update) and resize
/// notifications to [`resize`](Self::resize); [`StickySet`](crate::StickySet)
/// does that routing for a group of controllers.
///
/// Calling [`bind`](Self::bind) on a bound controller (or
/// [`unbind`](Self::unbind) on an unbound one) is a caller error; it is logged
/// and ignored.
#[derive(Debug)]
pub struct StickyController<E> {
    id: StickyId,
    element: E,
    container: E,
    width: Option<WidthSource<E>>,
    scroll: ScrollSource<E>,
    margins: Margins,
    classes: Option<StateClasses>,
    callbacks: StickyCallbacks,
    placeholder: Option<Placeholder<E>>,
    active: bool,
    placement: Option<Placement>,
    geometry: Geometry,
}

impl<E: Clone + PartialEq> StickyController<E> {
    /// Creates an unbound controller for `element`.
    ///
    /// When the element has no parent and no container or width was given,
    /// the element serves as its own container and its width is left alone.
    #[must_use]
    pub fn new<H>(host: &H, element: E, options: StickyOptions<E>) -> Self
    where
        H: StickyHost<Element = E>,
    {
        let StickyOptions {
            scroll,
            width,
            container,
            margins,
            classes,
            callbacks,
        } = options;
        let parent = host.parent(&element);
        let container = container
            .or_else(|| parent.clone())
            .unwrap_or_else(|| element.clone());
        let width = width.or_else(|| parent.map(WidthSource::Element));

        Self {
            id: StickyId::next(),
            element,
            container,
            width,
            scroll,
            margins,
            classes,
            callbacks,
            placeholder: None,
            active: false,
            placement: None,
            geometry: Geometry::default(),
        }
    }

    /// Returns the controller's id.
    #[must_use]
    pub fn id(&self) -> StickyId {
        self.id
    }

    /// Returns the tracked element.
    #[must_use]
    pub fn element(&self) -> &E {
        &self.element
    }

    /// Returns the container the element docks against.
    #[must_use]
    pub fn container(&self) -> &E {
        &self.container
    }

    /// Returns the scroll source.
    #[must_use]
    pub fn scroll_source(&self) -> &ScrollSource<E> {
        &self.scroll
    }

    /// Returns the width source, if any.
    #[must_use]
    pub fn width_source(&self) -> Option<&WidthSource<E>> {
        self.width.as_ref()
    }

    /// Returns the configured margins.
    #[must_use]
    pub fn margins(&self) -> Margins {
        self.margins
    }

    /// Returns `true` between [`bind`](Self::bind) and
    /// [`unbind`](Self::unbind).
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Returns the last applied placement; `None` before the first bind.
    #[must_use]
    pub fn placement(&self) -> Option<Placement> {
        self.placement
    }

    /// Returns the cached geometry. Only meaningful while active.
    #[must_use]
    pub fn geometry(&self) -> Geometry {
        self.geometry
    }

    /// Returns the placeholder node while active.
    #[must_use]
    pub fn placeholder(&self) -> Option<&E> {
        self.placeholder.as_ref().map(Placeholder::node)
    }

    /// Returns the hooks for replacement after construction.
    pub fn callbacks_mut(&mut self) -> &mut StickyCallbacks {
        &mut self.callbacks
    }

    /// Activates the controller.
    ///
    /// Registers the scroll listener and a [`Tier::Last`] resize
    /// subscription (both keyed by [`id`](Self::id)), inserts the hidden
    /// placeholder, measures, records [`Placement::Top`] without firing
    /// transition hooks, runs the `on_bind` hook and finally applies the
    /// placement for the current scroll offset.
    pub fn bind<H>(&mut self, host: &mut H, notifier: &mut ResizeNotifier<StickyId>) -> &mut Self
    where
        H: StickyHost<Element = E>,
    {
        if self.active {
            log::warn!(target: LOG_TARGET, "{}: bind called while already bound", self.id);
            return self;
        }
        self.active = true;

        host.listen_scroll(&self.scroll, self.id);
        notifier.subscribe(self.id, Tier::Last);

        let class = self
            .classes
            .as_ref()
            .map_or(StateClasses::DEFAULT.placeholder, |c| c.placeholder);
        self.placeholder = Some(Placeholder::create(host, &self.element, class));

        self.measure(host);
        self.set_placement(host, Placement::Top);
        log::debug!(target: LOG_TARGET, "{}: bound", self.id);

        (self.callbacks.on_bind)();
        self.update(host);
        self
    }

    /// Deactivates the controller and undoes everything
    /// [`bind`](Self::bind) did.
    ///
    /// The `on_will_unbind` hook runs first, while the element is still
    /// positioned. Afterwards the element's `position`, `top`, `bottom` and
    /// `width` are unset, state classes are removed and the placeholder is
    /// gone.
    pub fn unbind<H>(&mut self, host: &mut H, notifier: &mut ResizeNotifier<StickyId>) -> &mut Self
    where
        H: StickyHost<Element = E>,
    {
        if !self.active {
            log::warn!(target: LOG_TARGET, "{}: unbind called while not bound", self.id);
            return self;
        }

        (self.callbacks.on_will_unbind)();
        self.active = false;

        host.unlisten_scroll(&self.scroll, self.id);
        notifier.unsubscribe(&self.id, Tier::Last);

        for property in StyleProperty::ALL {
            host.set_style(&self.element, property, StyleValue::Unset);
        }
        if let Some(classes) = &self.classes {
            for class in classes.states() {
                host.set_class(&self.element, class, false);
            }
        }
        if let Some(placeholder) = self.placeholder.take() {
            placeholder.destroy(host);
        }

        log::debug!(target: LOG_TARGET, "{}: unbound", self.id);
        self
    }

    /// Unbinds and binds again, picking up structural changes such as a
    /// moved element.
    pub fn rebind<H>(&mut self, host: &mut H, notifier: &mut ResizeNotifier<StickyId>) -> &mut Self
    where
        H: StickyHost<Element = E>,
    {
        self.unbind(host, notifier).bind(host, notifier)
    }

    /// Re-measures and repositions without waiting for a resize event.
    pub fn refresh<H>(&mut self, host: &mut H) -> &mut Self
    where
        H: StickyHost<Element = E>,
    {
        self.resize(host);
        self
    }

    /// Resize handler: recomputes width, placeholder box and geometry, then
    /// updates. Does nothing while inactive.
    pub fn resize<H>(&mut self, host: &mut H)
    where
        H: StickyHost<Element = E>,
    {
        if !self.active {
            return;
        }
        self.measure(host);
        self.update(host);
    }

    /// Scroll handler: applies the placement for the current scroll offset
    /// and fires a transition hook if it changed. Does nothing while
    /// inactive.
    ///
    /// Repeated calls with unchanged inputs write the same styles and fire
    /// nothing.
    pub fn update<H>(&mut self, host: &mut H)
    where
        H: StickyHost<Element = E>,
    {
        if !self.active {
            return;
        }

        let scroll_top = host.scroll_top(&self.scroll);
        let resolved = resolve(scroll_top, &self.geometry, &self.margins);
        self.apply(host, &resolved);

        if let Some(transition) = Transition::between(self.placement, resolved.placement) {
            log::debug!(
                target: LOG_TARGET,
                "{}: {:?} at scroll_top {scroll_top}",
                self.id,
                transition,
            );
            self.callbacks.fire(transition);
            self.set_placement(host, resolved.placement);
        }
    }

    /// Snapshot of the controller state for debugging and inspection.
    #[must_use]
    pub fn debug_info(&self) -> StickyDebugInfo {
        StickyDebugInfo {
            id: self.id,
            active: self.active,
            placement: self.placement,
            geometry: self.geometry,
            margins: self.margins,
            has_placeholder: self.placeholder.is_some(),
        }
    }

    fn apply<H>(&self, host: &mut H, resolved: &Resolved)
    where
        H: StickyHost<Element = E>,
    {
        host.set_style(&self.element, StyleProperty::Position, resolved.position);
        host.set_style(&self.element, StyleProperty::Bottom, resolved.bottom);
        host.set_style(&self.element, StyleProperty::Top, resolved.top);
        if let Some(placeholder) = &self.placeholder {
            placeholder.set_visible(host, resolved.placement.is_engaged());
        }
    }

    fn measure<H>(&mut self, host: &mut H)
    where
        H: StickyHost<Element = E>,
    {
        match &self.width {
            Some(WidthSource::Fixed(width)) => {
                host.set_style(&self.element, StyleProperty::Width, StyleValue::Px(*width));
            }
            Some(WidthSource::Element(reference)) => {
                let width = host.width(reference);
                host.set_style(&self.element, StyleProperty::Width, StyleValue::Px(width));
            }
            None => {}
        }

        let outer = host.outer_size(&self.element);
        if let Some(placeholder) = &self.placeholder {
            placeholder.resize(host, outer);
        }

        // While fixed, the element's own offset follows the viewport; the
        // visible placeholder holds its place in flow.
        let element_top = match &self.placeholder {
            Some(placeholder) if placeholder.is_visible(&*host) => {
                placeholder.top_offset(&*host)
            }
            _ => host.top_offset(&self.element),
        };

        self.geometry = Geometry {
            element_top,
            element_height: outer.height,
            container_top: host.top_offset(&self.container),
            container_height: host.outer_size(&self.container).height,
            viewport_height: host.viewport_height(),
        };
        log::trace!(target: LOG_TARGET, "{}: measured {:?}", self.id, self.geometry);
    }

    fn set_placement<H>(&mut self, host: &mut H, placement: Placement)
    where
        H: StickyHost<Element = E>,
    {
        if let Some(classes) = &self.classes {
            if let Some(previous) = self.placement {
                host.set_class(&self.element, classes.for_placement(previous), false);
            }
            host.set_class(&self.element, classes.for_placement(placement), true);
        }
        self.placement = Some(placement);
    }
}

/// Debug snapshot of a [`StickyController`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StickyDebugInfo {
    /// Controller id.
    pub id: StickyId,
    /// Whether the controller is bound.
    pub active: bool,
    /// Last applied placement.
    pub placement: Option<Placement>,
    /// Cached geometry.
    pub geometry: Geometry,
    /// Configured margins.
    pub margins: Margins,
    /// Whether a placeholder currently exists.
    pub has_placeholder: bool,
}
