// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The placement decision: which of the three sticky states applies for a
//! given scroll offset, and which inline styles express it.
//!
//! Everything here is a pure function of [`Geometry`], [`Margins`] and the
//! scroll offset, so it can be tested (and reused by other hosts) without a
//! controller.

use crate::style::StyleValue;

/// Where the tracked element currently sits.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Placement {
    /// In normal flow; the container has not been scrolled far enough.
    #[default]
    Top,
    /// Fixed to the viewport, floating while the container scrolls by.
    Middle,
    /// Fixed and docked against the bottom edge of the container.
    Bottom,
}

impl Placement {
    /// Returns `true` when the element is taken out of flow
    /// ([`Placement::Middle`] or [`Placement::Bottom`]).
    #[must_use]
    pub const fn is_engaged(self) -> bool {
        !matches!(self, Self::Top)
    }

    /// Returns `true` for the two resting states, [`Placement::Top`] and
    /// [`Placement::Bottom`].
    #[must_use]
    pub const fn is_stop(self) -> bool {
        !matches!(self, Self::Middle)
    }

    /// Returns the lowercase name (`"top"`, `"middle"` or `"bottom"`).
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Top => "top",
            Self::Middle => "middle",
            Self::Bottom => "bottom",
        }
    }
}

/// Caller-supplied offsets, in the same units as the geometry.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Margins {
    /// Gap kept between the viewport top and the floating element.
    pub top: f64,
    /// Gap kept between the viewport bottom and the element when it is
    /// taller than the viewport.
    pub bottom: f64,
    /// Distance from the container's bottom edge at which the element docks.
    pub container_bottom: f64,
}

impl Margins {
    /// Creates margins from the three offsets.
    #[must_use]
    pub const fn new(top: f64, bottom: f64, container_bottom: f64) -> Self {
        Self {
            top,
            bottom,
            container_bottom,
        }
    }
}

/// Cached measurements, refreshed on bind and on every resize.
///
/// Offsets are document-relative, in the same space as the scroll offset.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Geometry {
    /// Natural top offset of the element (or of its placeholder while fixed).
    pub element_top: f64,
    /// Outer height of the element.
    pub element_height: f64,
    /// Top offset of the container.
    pub container_top: f64,
    /// Outer height of the container.
    pub container_height: f64,
    /// Height of the viewport.
    pub viewport_height: f64,
}

impl Geometry {
    /// Returns `true` if the element plus its top and bottom margins fits in
    /// the viewport.
    #[must_use]
    pub fn fits(&self, margins: &Margins) -> bool {
        margins.top + self.element_height + margins.bottom <= self.viewport_height
    }

    /// Document offset of the line the element docks against.
    #[must_use]
    pub fn container_end(&self, margins: &Margins) -> f64 {
        self.container_top + self.container_height - margins.container_bottom
    }
}

/// The outcome of [`resolve`]: a placement plus the inline styles for it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Resolved {
    /// The computed state.
    pub placement: Placement,
    /// Value for `position`.
    pub position: StyleValue,
    /// Value for `top`.
    pub top: StyleValue,
    /// Value for `bottom`.
    pub bottom: StyleValue,
}

impl Resolved {
    const IN_FLOW: Self = Self {
        placement: Placement::Top,
        position: StyleValue::Unset,
        top: StyleValue::Unset,
        bottom: StyleValue::Unset,
    };

    fn docked(bottom: f64) -> Self {
        Self {
            placement: Placement::Bottom,
            position: StyleValue::Fixed,
            top: StyleValue::Unset,
            bottom: StyleValue::Px(bottom),
        }
    }

    fn floating(top: StyleValue, bottom: StyleValue) -> Self {
        Self {
            placement: Placement::Middle,
            position: StyleValue::Fixed,
            top,
            bottom,
        }
    }
}

/// Computes the placement for `scroll_top`.
///
/// The element engages once the scroll offset passes its top (less the top
/// margin) and the viewport reaches at least its bottom (plus the bottom
/// margin). While engaged it either floats at the top margin (or at the
/// bottom margin when it is taller than the viewport), or docks against the
/// container's end once floating would carry it past that line.
///
/// Degenerate geometry is not rejected; whichever branch the comparisons
/// select is returned.
///
/// ```rust
/// use understory_sticky::{Geometry, Margins, Placement, StyleValue, resolve};
///
/// let geometry = Geometry {
///     element_top: 500.0,
///     element_height: 100.0,
///     container_top: 500.0,
///     container_height: 2000.0,
///     viewport_height: 800.0,
/// };
/// let margins = Margins::new(20.0, 0.0, 0.0);
///
/// assert_eq!(resolve(0.0, &geometry, &margins).placement, Placement::Top);
///
/// let floating = resolve(485.0, &geometry, &margins);
/// assert_eq!(floating.placement, Placement::Middle);
/// assert_eq!(floating.top, StyleValue::Px(20.0));
///
/// let docked = resolve(2390.0, &geometry, &margins);
/// assert_eq!(docked.placement, Placement::Bottom);
/// assert_eq!(docked.bottom, StyleValue::Px(690.0));
/// ```
#[must_use]
pub fn resolve(scroll_top: f64, geometry: &Geometry, margins: &Margins) -> Resolved {
    let g = geometry;
    let engaged = scroll_top > g.element_top - margins.top
        && scroll_top + g.viewport_height >= g.element_top + g.element_height + margins.bottom;
    if !engaged {
        return Resolved::IN_FLOW;
    }

    let end = g.container_end(margins);
    let dock_offset = scroll_top + g.viewport_height - end;

    if g.fits(margins) {
        let travel = g.container_height - g.element_height - margins.top - margins.container_bottom;
        if scroll_top - g.container_top >= travel {
            Resolved::docked(dock_offset)
        } else {
            Resolved::floating(StyleValue::Px(margins.top), StyleValue::Unset)
        }
    } else if scroll_top + g.viewport_height - margins.bottom >= end {
        Resolved::docked(dock_offset)
    } else {
        Resolved::floating(StyleValue::Unset, StyleValue::Px(margins.bottom))
    }
}

/// The callback a placement change triggers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Transition {
    /// The element left a stop and started floating; carries the stop it
    /// left.
    Started(Placement),
    /// The element reached a stop; carries that stop.
    Stopped(Placement),
}

impl Transition {
    /// Classifies a move from `previous` to `next`.
    ///
    /// Returns `None` when nothing changed. A missing `previous` (never
    /// bound) is treated as [`Placement::Top`].
    #[must_use]
    pub fn between(previous: Option<Placement>, next: Placement) -> Option<Self> {
        let previous = previous.unwrap_or_default();
        if previous == next {
            None
        } else if next.is_stop() {
            Some(Self::Stopped(next))
        } else {
            Some(Self::Started(previous))
        }
    }
}
