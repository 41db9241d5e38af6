// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Inline style properties and values written to the tracked element.

use core::fmt;

use crate::placement::Placement;

/// The inline style properties a sticky controller touches.
///
/// Nothing else on the tracked element is ever written, so unbinding only has
/// to reset these four.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StyleProperty {
    /// CSS `position`.
    Position,
    /// CSS `top`.
    Top,
    /// CSS `bottom`.
    Bottom,
    /// CSS `width`.
    Width,
}

impl StyleProperty {
    /// All properties, in the order they are reset on unbind.
    pub const ALL: [Self; 4] = [Self::Position, Self::Bottom, Self::Top, Self::Width];

    /// Returns the CSS property name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Position => "position",
            Self::Top => "top",
            Self::Bottom => "bottom",
            Self::Width => "width",
        }
    }
}

impl fmt::Display for StyleProperty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// An inline style value.
///
/// Formatting via [`Display`](fmt::Display) yields the exact string a host
/// should assign: the empty string for [`StyleValue::Unset`] (which removes
/// the inline override), `fixed`, or a pixel length such as `20px`.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub enum StyleValue {
    /// Remove the inline override and fall back to the stylesheet.
    #[default]
    Unset,
    /// `position: fixed`.
    Fixed,
    /// A length in CSS pixels.
    Px(f64),
}

impl StyleValue {
    /// Returns `true` for [`StyleValue::Unset`].
    #[must_use]
    pub const fn is_unset(&self) -> bool {
        matches!(self, Self::Unset)
    }

    /// Returns the pixel length, if this is one.
    #[must_use]
    pub const fn as_px(&self) -> Option<f64> {
        match self {
            Self::Px(v) => Some(*v),
            _ => None,
        }
    }
}

impl fmt::Display for StyleValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unset => Ok(()),
            Self::Fixed => f.write_str("fixed"),
            // Normalize `-0.0`.
            Self::Px(v) if *v == 0.0 => f.write_str("0px"),
            Self::Px(v) => write!(f, "{v}px"),
        }
    }
}

/// Class names mirrored onto the tracked element and its placeholder.
///
/// Exactly one of the three state classes is present on the element while it
/// is bound, matching its current [`Placement`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StateClasses {
    /// Class for [`Placement::Top`].
    pub top: &'static str,
    /// Class for [`Placement::Middle`].
    pub middle: &'static str,
    /// Class for [`Placement::Bottom`].
    pub bottom: &'static str,
    /// Class given to the placeholder node when it is created.
    pub placeholder: &'static str,
}

impl StateClasses {
    /// `sticky-top`, `sticky-middle`, `sticky-bottom` and `sticky-placeholder`.
    pub const DEFAULT: Self = Self {
        top: "sticky-top",
        middle: "sticky-middle",
        bottom: "sticky-bottom",
        placeholder: "sticky-placeholder",
    };

    /// Returns the class for a placement.
    #[must_use]
    pub const fn for_placement(&self, placement: Placement) -> &'static str {
        match placement {
            Placement::Top => self.top,
            Placement::Middle => self.middle,
            Placement::Bottom => self.bottom,
        }
    }

    /// Iterates over the three state classes.
    pub fn states(&self) -> impl Iterator<Item = &'static str> {
        [self.top, self.middle, self.bottom].into_iter()
    }
}

impl Default for StateClasses {
    fn default() -> Self {
        Self::DEFAULT
    }
}
