// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Process-unique controller identifiers.

use core::fmt;
use core::sync::atomic::{AtomicU32, Ordering};

static NEXT_ID: AtomicU32 = AtomicU32::new(0);

/// Identifies one [`StickyController`](crate::StickyController).
///
/// Ids are minted from a process-wide counter when a controller is created
/// and never reused, so they can key resize subscriptions and scroll
/// listeners without collisions between instances.
///
/// Displays as `sticky_<n>`, which hosts can use directly as an event
/// namespace.
///
/// ```rust
/// use understory_sticky::StickyId;
///
/// let a = StickyId::next();
/// let b = StickyId::next();
/// assert_ne!(a, b);
/// assert!(a.to_string().starts_with("sticky_"));
/// ```
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct StickyId(u32);

impl StickyId {
    /// Mints a fresh id.
    #[must_use]
    pub fn next() -> Self {
        Self(NEXT_ID.fetch_add(1, Ordering::Relaxed))
    }

    /// Returns the raw counter value.
    #[must_use]
    #[inline]
    pub const fn get(self) -> u32 {
        self.0
    }
}

impl fmt::Debug for StickyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("StickyId").field(&self.0).finish()
    }
}

impl fmt::Display for StickyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "sticky_{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use alloc::format;

    use super::StickyId;

    #[test]
    fn ids_are_monotonic() {
        let a = StickyId::next();
        let b = StickyId::next();
        assert!(b > a);
        assert_eq!(format!("{a}"), format!("sticky_{}", a.get()));
    }
}
