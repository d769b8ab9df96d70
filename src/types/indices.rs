//! Strongly-typed index newtypes.
//!
//! The model output is a two-dimensional `[depth, time]` array. Keeping the
//! two axes as distinct types prevents a depth level from being used where a
//! time step is expected (and vice versa) when slicing column state.

use std::fmt;

/// Macro to generate index newtypes with common functionality.
macro_rules! define_index {
    (
        $(#[$meta:meta])*
        $name:ident, $display_prefix:literal
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
        #[repr(transparent)]
        pub struct $name(usize);

        impl $name {
            /// Create a new index.
            #[inline]
            pub const fn new(index: usize) -> Self {
                Self(index)
            }

            /// Get the raw index value.
            #[inline]
            pub const fn get(self) -> usize {
                self.0
            }

            /// First index (0).
            pub const ZERO: Self = Self(0);

            /// Increment index by one.
            #[inline]
            pub fn next(self) -> Self {
                Self(self.0 + 1)
            }

            /// Decrement index by one, saturating at zero.
            #[inline]
            pub fn prev(self) -> Self {
                Self(self.0.saturating_sub(1))
            }

            /// Iterator over [0, n).
            pub fn iter(n: usize) -> impl Iterator<Item = $name> + ExactSizeIterator {
                (0..n).map($name)
            }

            /// Iterator over [start, end).
            pub fn range_iter(start: $name, end: $name) -> impl Iterator<Item = $name> + ExactSizeIterator {
                (start.0..end.0).map($name)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}{}", $display_prefix, self.0)
            }
        }

        impl From<usize> for $name {
            #[inline]
            fn from(index: usize) -> Self {
                Self(index)
            }
        }

        impl From<$name> for usize {
            #[inline]
            fn from(idx: $name) -> usize {
                idx.0
            }
        }

        // Allow using as array index
        impl<T> std::ops::Index<$name> for [T] {
            type Output = T;
            #[inline]
            fn index(&self, idx: $name) -> &T {
                &self[idx.0]
            }
        }

        impl<T> std::ops::IndexMut<$name> for [T] {
            #[inline]
            fn index_mut(&mut self, idx: $name) -> &mut T {
                &mut self[idx.0]
            }
        }

        impl<T> std::ops::Index<$name> for Vec<T> {
            type Output = T;
            #[inline]
            fn index(&self, idx: $name) -> &T {
                &self[idx.0]
            }
        }

        impl<T> std::ops::IndexMut<$name> for Vec<T> {
            #[inline]
            fn index_mut(&mut self, idx: $name) -> &mut T {
                &mut self[idx.0]
            }
        }
    };
}

define_index!(
    /// Depth level in the model column (0 = surface cell).
    ///
    /// # Example
    ///
    /// ```
    /// use pwp_rs::types::DepthIndex;
    ///
    /// let z = DepthIndex::new(4);
    /// assert_eq!(z.get(), 4);
    /// assert_eq!(z.next().get(), 5);
    /// ```
    DepthIndex,
    "z"
);

define_index!(
    /// Model time step (0 = initial profile).
    ///
    /// # Example
    ///
    /// ```
    /// use pwp_rs::types::TimeIndex;
    ///
    /// let n = TimeIndex::new(12);
    /// assert_eq!(n.prev().get(), 11);
    /// ```
    TimeIndex,
    "t"
);

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_depth_index() {
        let idx = DepthIndex::new(42);
        assert_eq!(idx.get(), 42);
        assert_eq!(usize::from(idx), 42);
    }

    #[test]
    fn test_index_arithmetic() {
        let idx = TimeIndex::new(5);
        assert_eq!(idx.next().get(), 6);
        assert_eq!(idx.prev().get(), 4);

        // Saturating at zero
        assert_eq!(TimeIndex::ZERO.prev().get(), 0);
    }

    #[test]
    fn test_array_indexing() {
        let mut data = vec![10.0, 20.0, 30.0];
        let idx = DepthIndex::new(1);
        assert_eq!(data[idx], 20.0);

        data[idx] = 25.0;
        assert_eq!(data.as_slice()[idx], 25.0);
    }

    #[test]
    fn test_range_iter() {
        let indices: Vec<_> =
            DepthIndex::range_iter(DepthIndex::new(3), DepthIndex::new(7)).collect();
        assert_eq!(indices.len(), 4);
        assert_eq!(indices[0].get(), 3);
        assert_eq!(indices[3].get(), 6);
        assert_eq!(TimeIndex::iter(5).len(), 5);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", DepthIndex::new(7)), "z7");
        assert_eq!(format!("{}", TimeIndex::new(3)), "t3");
    }
}
