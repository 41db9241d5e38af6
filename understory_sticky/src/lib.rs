// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_sticky --heading-base-level=0

//! Understory Sticky: keep an element on screen while its container scrolls by.
//!
//! A sticky element sits in normal flow until its container scrolls into
//! view, then becomes `position: fixed` a set distance below the viewport top,
//! and finally docks against the bottom of its container once floating would
//! carry it past the container's end. A hidden placeholder reserves the
//! element's space in flow while it is fixed.
//!
//! The crate is headless. It never owns a document; hosts implement
//! [`StickyHost`] over their nodes (browser DOM, a retained UI tree, a test
//! double) and forward scroll and resize notifications. The pieces are:
//!
//! - [`resolve`]: the pure decision from scroll offset, [`Geometry`] and
//!   [`Margins`] to a [`Placement`] plus the inline styles expressing it.
//! - [`StickyController`]: per-element state (cached geometry, current
//!   placement, placeholder) with `bind`/`unbind`/`rebind`/`refresh` and
//!   transition hooks ([`StickyCallbacks`]).
//! - [`ResizeNotifier`]: tiered resize subscriptions; controllers subscribe in
//!   [`Tier::Last`] so they measure after layout-affecting handlers.
//! - [`StickySet`]: owns many controllers and routes notifications to them.
//!
//! ## Minimal example
//!
//! ```rust
//! use understory_sticky::{Geometry, Margins, Placement, resolve};
//!
//! // A 100px sidebar at y=500 in a 2000px column, 800px viewport, 20px gap.
//! let geometry = Geometry {
//!     element_top: 500.0,
//!     element_height: 100.0,
//!     container_top: 500.0,
//!     container_height: 2000.0,
//!     viewport_height: 800.0,
//! };
//! let margins = Margins::new(20.0, 0.0, 0.0);
//!
//! assert_eq!(resolve(0.0, &geometry, &margins).placement, Placement::Top);
//! assert_eq!(resolve(485.0, &geometry, &margins).placement, Placement::Middle);
//! assert_eq!(resolve(2390.0, &geometry, &margins).placement, Placement::Bottom);
//! ```
//!
//! ## Host integration
//!
//! With a [`StickyHost`] implementation, a typical setup looks like:
//!
//! ```rust,ignore
//! let mut stickies = StickySet::new();
//! let sidebar = StickyController::new(
//!     &dom,
//!     sidebar_node,
//!     StickyOptions::new()
//!         .top(20.0)
//!         .callbacks(StickyCallbacks::new().on_did_stop(|p| log::info!("stopped at {p:?}"))),
//! );
//! let id = stickies.insert(sidebar);
//! stickies.bind(&mut dom, id);
//!
//! // From the host's event loop:
//! stickies.handle_scroll(&mut dom, &ScrollSource::Viewport);
//! stickies.handle_resize(&mut dom);
//! ```
//!
//! Geometry is measured on bind and on resize only; scrolling reuses the
//! cached values. Call [`StickyController::refresh`] after changing layout
//! without a resize, and [`StickyController::rebind`] after moving the
//! element.
//!
//! ## Features
//!
//! - `std` (default): forwards to `kurbo/std`.
//! - `libm`: forwards to `kurbo/libm` for `no_std` builds.
//! - `serde`: `Serialize`/`Deserialize` for [`Margins`] and [`Placement`].
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod controller;
mod host;
mod id;
mod notifier;
mod placeholder;
mod placement;
mod set;
mod style;

pub use controller::{StickyCallbacks, StickyController, StickyDebugInfo, StickyOptions};
pub use host::{ScrollSource, StickyHost, WidthSource};
pub use id::StickyId;
pub use notifier::{ResizeNotifier, Tier};
pub use placement::{Geometry, Margins, Placement, Resolved, Transition, resolve};
pub use set::StickySet;
pub use style::{StateClasses, StyleProperty, StyleValue};
