//! Ordering strategies for [`BinaryMinHeap`](crate::BinaryMinHeap).
//!
//! A heap is parameterized over a [`Compare`] implementation chosen once at
//! construction. [`Natural`] defers to the element's [`Ord`] impl, and any
//! closure `Fn(&T, &T) -> Ordering` can be injected instead.

use std::cmp::Ordering;

/// A total ordering over `T`, used to decide which element is smaller.
///
/// Implementations must be a strict weak ordering and must stay consistent for
/// as long as the compared elements are in a heap.
///
/// # Examples
///
/// ```
/// # use min_pq::*;
/// # use std::cmp::Ordering;
/// let by_len = |a: &&str, b: &&str| a.len().cmp(&b.len());
/// assert_eq!(by_len.compare(&"ab", &"c"), Ordering::Greater);
/// assert_eq!(Natural.compare(&1, &2), Ordering::Less);
/// ```
pub trait Compare<T: ?Sized> {
    /// Compares `a` with `b`.
    fn compare(&self, a: &T, b: &T) -> Ordering;
}

/// Orders elements by their own [`Ord`] implementation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Natural;

impl<T: Ord + ?Sized> Compare<T> for Natural {
    #[inline(always)]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        a.cmp(b)
    }
}

impl<T: ?Sized, F> Compare<T> for F
where
    F: Fn(&T, &T) -> Ordering,
{
    #[inline(always)]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self(a, b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn natural_matches_ord() {
        assert_eq!(Natural.compare(&3, &1), Ordering::Greater);
        assert_eq!(Natural.compare(&1, &1), Ordering::Equal);
        assert_eq!(Natural.compare("a", "b"), Ordering::Less);
    }

    #[test]
    fn closure_is_a_comparator() {
        let reverse = |a: &i32, b: &i32| b.cmp(a);
        assert_eq!(reverse.compare(&3, &1), Ordering::Less);
        assert_eq!(reverse.compare(&1, &3), Ordering::Greater);
    }

    #[test]
    fn fn_item_is_a_comparator() {
        fn by_abs(a: &i64, b: &i64) -> Ordering {
            a.abs().cmp(&b.abs())
        }
        assert_eq!(by_abs.compare(&-5, &2), Ordering::Greater);
    }
}
