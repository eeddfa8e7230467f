//! A growable binary min-heap priority queue with natural or injected ordering.
//!
//! [`BinaryMinHeap`] keeps its elements in a 1-indexed array so that the parent of
//! slot `k` is `k / 2` and its children are `2k` and `2k + 1`. Storage doubles when
//! full and halves once it drops to a quarter full.
//!
//! The ordering is chosen once at construction: [`Natural`] uses the element's
//! [`Ord`] impl, and any `Fn(&T, &T) -> Ordering` can be injected instead.
//!
//! ```
//! # use min_pq::*;
//! let mut heap = BinaryMinHeap::from_items([4, 2, 5, 1, 3]);
//! assert_eq!(heap.peek_min(), Ok(&1));
//! heap.insert(0);
//! assert_eq!(heap.extract_min(), Ok(0));
//! assert_eq!(heap.iter().collect::<Vec<_>>(), [1, 2, 3, 4, 5]);
//! ```
#![doc(html_root_url = "https://docs.rs/min_pq")]
#![crate_name = "min_pq"]
#![warn(
    missing_debug_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unused_lifetimes,
    unused_import_braces
)]
#![deny(missing_docs, unsafe_op_in_unsafe_fn)]
#![cfg_attr(all(nightly, feature = "unstable"), feature(slice_swap_unchecked))]

mod compare;
mod error;

pub use compare::{Compare, Natural};
pub use error::{HeapError, InvariantError};

use std::{
    cmp::Ordering,
    fmt::{self, Debug, Formatter},
    iter::{self, FusedIterator},
};
use tracing::{debug, trace};

/// A minimum-oriented priority queue backed by a binary heap.
///
/// `C` decides the ordering and is fixed for the heap's lifetime.
#[derive(Clone)]
pub struct BinaryMinHeap<T, C = Natural> {
    n: usize,
    // pq[0] is unused, live elements are in pq[1..=n]
    pq: Vec<Option<T>>,
    cmp: C,
}

impl<T: Ord> BinaryMinHeap<T> {
    /// Creates a new empty heap ordered by `T`'s [`Ord`] impl.
    ///
    /// # Examples
    ///
    /// ```
    /// # use min_pq::*;
    /// let heap: BinaryMinHeap<i32> = BinaryMinHeap::new();
    /// assert!(heap.is_empty());
    /// ```
    pub fn new() -> Self {
        Self::with_comparator(Natural)
    }

    /// Creates a new empty heap with room for `capacity` elements before the first resize.
    ///
    /// # Examples
    ///
    /// ```
    /// # use min_pq::*;
    /// let heap: BinaryMinHeap<i32> = BinaryMinHeap::with_capacity(16);
    /// assert_eq!(heap.capacity(), 16);
    /// ```
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_capacity_and_comparator(capacity, Natural)
    }

    /// Builds a heap holding exactly `items`, in linear time.
    ///
    /// # Examples
    ///
    /// ```
    /// # use min_pq::*;
    /// let mut heap = BinaryMinHeap::from_items(vec![4, 2, 5, 1, 3]);
    /// assert_eq!(heap.extract_min(), Ok(1));
    /// assert_eq!(heap.extract_min(), Ok(2));
    /// ```
    pub fn from_items<I>(items: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        Self::from_items_with_comparator(items, Natural)
    }
}

impl<T, C> BinaryMinHeap<T, C>
where
    C: Compare<T>,
{
    /// Creates a new empty heap ordered by `cmp`.
    ///
    /// `cmp` returning [`Ordering::Less`] means its first argument is extracted first.
    ///
    /// # Examples
    ///
    /// ```
    /// # use min_pq::*;
    /// let mut heap = BinaryMinHeap::with_comparator(|a: &i32, b: &i32| b.cmp(a));
    /// heap.insert(3);
    /// heap.insert(1);
    /// assert_eq!(heap.extract_min(), Ok(3));
    /// ```
    pub fn with_comparator(cmp: C) -> Self {
        Self::with_capacity_and_comparator(1, cmp)
    }

    /// Creates a new empty heap ordered by `cmp`, with room for `capacity` elements.
    pub fn with_capacity_and_comparator(capacity: usize, cmp: C) -> Self {
        Self {
            n: 0,
            pq: iter::repeat_with(|| None).take(capacity + 1).collect(),
            cmp,
        }
    }

    /// Builds a heap ordered by `cmp` holding exactly `items`.
    ///
    /// Items are copied into place and then sunk from the last internal node up to the
    /// root, which takes O(n) comparisons rather than the O(n log n) of repeated inserts.
    ///
    /// # Examples
    ///
    /// ```
    /// # use min_pq::*;
    /// let by_len = |a: &&str, b: &&str| a.len().cmp(&b.len());
    /// let mut heap = BinaryMinHeap::from_items_with_comparator(["ccc", "a", "bb"], by_len);
    /// assert_eq!(heap.extract_min(), Ok("a"));
    /// ```
    pub fn from_items_with_comparator<I>(items: I, cmp: C) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        let pq: Vec<Option<T>> = iter::once(None)
            .chain(items.into_iter().map(Some))
            .collect();
        let mut heap = Self {
            n: pq.len() - 1,
            pq,
            cmp,
        };
        for k in (1..=heap.n / 2).rev() {
            heap.sink(k);
        }
        debug!(n = heap.n, "built heap from items");
        heap.verify();
        heap
    }

    /// Returns a reference to the smallest element.
    ///
    /// # Errors
    ///
    /// [`HeapError::Underflow`] if the heap is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// # use min_pq::*;
    /// let mut heap = BinaryMinHeap::new();
    /// assert_eq!(heap.peek_min(), Err(HeapError::Underflow));
    /// heap.insert(5);
    /// heap.insert(2);
    /// assert_eq!(heap.peek_min(), Ok(&2));
    /// ```
    #[inline(always)]
    pub fn peek_min(&self) -> Result<&T, HeapError> {
        match self.n {
            0 => Err(HeapError::Underflow),
            _ => self.pq[1].as_ref().ok_or(HeapError::Underflow),
        }
    }

    /// Adds `x` to the heap.
    ///
    /// # Time Complexity
    ///
    /// Amortized O(log n). Doubles the storage first when it is full, which costs O(n).
    ///
    /// # Examples
    ///
    /// ```
    /// # use min_pq::*;
    /// let mut heap = BinaryMinHeap::new();
    /// heap.insert(1);
    /// assert_eq!(heap.size(), 1);
    /// ```
    pub fn insert(&mut self, x: T) {
        if self.n == self.pq.len() - 1 {
            self.resize(2 * self.pq.len());
        }
        self.n += 1;
        self.pq[self.n] = Some(x);
        self.swim(self.n);
        self.verify();
    }

    /// Removes and returns the smallest element.
    ///
    /// # Errors
    ///
    /// [`HeapError::Underflow`] if the heap is empty.
    ///
    /// # Time Complexity
    ///
    /// Amortized O(log n). Halves the storage once it is a quarter full, which costs O(n).
    ///
    /// # Examples
    ///
    /// ```
    /// # use min_pq::*;
    /// let mut heap = BinaryMinHeap::new();
    /// heap.insert(2);
    /// heap.insert(1);
    /// assert_eq!(heap.extract_min(), Ok(1));
    /// assert_eq!(heap.extract_min(), Ok(2));
    /// assert_eq!(heap.extract_min(), Err(HeapError::Underflow));
    /// ```
    pub fn extract_min(&mut self) -> Result<T, HeapError> {
        if self.n == 0 {
            return Err(HeapError::Underflow);
        }
        let min = self.pq[1].take();
        // Moves the last element to the root and leaves its old slot empty
        self.exch(1, self.n);
        self.n -= 1;
        self.sink(1);
        if self.n > 0 && self.n == (self.pq.len() - 1) / 4 {
            self.resize(self.pq.len() / 2);
        }
        self.verify();
        min.ok_or(HeapError::Underflow)
    }

    /// Checks that the storage is consistent and heap ordered.
    ///
    /// Slot 0 must be empty, slots `1..=n` populated, every slot after `n` empty,
    /// and no element may be greater than either of its children.
    ///
    /// Never called by the heap itself unless the `check-invariants` feature is enabled.
    pub fn check_invariants(&self) -> Result<(), InvariantError> {
        if self.pq.len() <= self.n {
            return Err(InvariantError::new(format!(
                "storage of {} slots cannot hold {} elements",
                self.pq.len(),
                self.n
            )));
        }
        if self.pq[0].is_some() {
            return Err(InvariantError::new("slot 0 is occupied"));
        }
        if let Some(k) = (1..=self.n).find(|&k| self.pq[k].is_none()) {
            return Err(InvariantError::new(format!("slot {k} is empty")));
        }
        if let Some(k) = (self.n + 1..self.pq.len()).find(|&k| self.pq[k].is_some()) {
            return Err(InvariantError::new(format!(
                "slot {k} is occupied past size {}",
                self.n
            )));
        }
        self.check_order(1)
    }

    fn check_order(&self, k: usize) -> Result<(), InvariantError> {
        if k > self.n {
            return Ok(());
        }
        for child in [2 * k, 2 * k + 1] {
            if child <= self.n && self.greater(k, child) {
                return Err(InvariantError::new(format!(
                    "slot {k} is greater than its child {child}"
                )));
            }
        }
        self.check_order(2 * k)?;
        self.check_order(2 * k + 1)
    }

    #[inline(always)]
    fn verify(&self) {
        #[cfg(all(feature = "check-invariants", debug_assertions))]
        {
            if let Err(err) = self.check_invariants() {
                panic!("{err}");
            }
        }
    }

    fn swim(&mut self, mut k: usize) {
        while k > 1 && self.greater(k / 2, k) {
            self.exch(k / 2, k);
            k /= 2;
        }
    }

    fn sink(&mut self, mut k: usize) {
        while 2 * k <= self.n {
            let mut j = 2 * k;
            if j < self.n && self.greater(j, j + 1) {
                j += 1;
            }
            if !self.greater(k, j) {
                break;
            }
            self.exch(k, j);
            k = j;
        }
    }

    // The only place the ordering strategy is consulted
    #[inline(always)]
    fn greater(&self, i: usize, j: usize) -> bool {
        match (&self.pq[i], &self.pq[j]) {
            (Some(a), Some(b)) => self.cmp.compare(a, b) == Ordering::Greater,
            _ => false,
        }
    }
}

impl<T, C> BinaryMinHeap<T, C> {
    /// Returns the number of elements.
    ///
    /// # Examples
    ///
    /// ```
    /// # use min_pq::*;
    /// let heap = BinaryMinHeap::from_items([3, 1, 2]);
    /// assert_eq!(heap.size(), 3);
    /// ```
    #[inline(always)]
    pub fn size(&self) -> usize {
        self.n
    }

    /// Returns the number of elements. Same as [`size`](Self::size).
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.n
    }

    /// Returns true if there are no elements.
    ///
    /// # Examples
    ///
    /// ```
    /// # use min_pq::*;
    /// let mut heap = BinaryMinHeap::new();
    /// assert!(heap.is_empty());
    /// heap.insert(1);
    /// assert!(!heap.is_empty());
    /// ```
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.n == 0
    }

    /// Returns how many elements fit before the storage has to grow.
    #[inline(always)]
    pub fn capacity(&self) -> usize {
        self.pq.len() - 1
    }

    /// Returns the ordering strategy this heap was built with.
    #[inline(always)]
    pub fn comparator(&self) -> &C {
        &self.cmp
    }

    /// Returns an iterator over a snapshot of the elements in ascending order.
    ///
    /// The snapshot is taken immediately, so later changes to this heap do not affect it.
    /// Each call takes a fresh snapshot.
    ///
    /// # Examples
    ///
    /// ```
    /// # use min_pq::*;
    /// let mut heap = BinaryMinHeap::from_items([3, 1, 4, 2]);
    /// let iter = heap.iter();
    /// heap.insert(0);
    /// assert_eq!(iter.collect::<Vec<_>>(), [1, 2, 3, 4]);
    /// ```
    pub fn iter(&self) -> SortedIter<T, C>
    where
        T: Clone,
        C: Clone,
    {
        SortedIter { heap: self.clone() }
    }

    /// Consumes the heap and returns its elements in ascending order.
    pub fn into_sorted_vec(self) -> Vec<T>
    where
        C: Compare<T>,
    {
        self.into_iter().collect()
    }

    fn resize(&mut self, slots: usize) {
        debug_assert!(slots > self.n);
        trace!(from = self.capacity(), to = slots - 1, "resizing heap storage");
        self.pq.resize_with(slots, || None);
        if slots < self.pq.capacity() {
            self.pq.shrink_to_fit();
        }
    }

    #[inline(always)]
    fn exch(&mut self, i: usize, j: usize) {
        #[cfg(all(nightly, feature = "unstable"))]
        // # Safety
        // Callers only pass indices in `1..=n`, and `n < pq.len()`
        unsafe {
            self.pq.swap_unchecked(i, j);
        }
        #[cfg(not(all(nightly, feature = "unstable")))]
        self.pq.swap(i, j);
    }
}

impl<T, C> Debug for BinaryMinHeap<T, C>
where
    T: Debug,
{
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        let data: Vec<&T> = self.pq[1..=self.n].iter().flatten().collect();
        f.debug_struct("BinaryMinHeap")
            .field("n", &self.n)
            .field("data", &data)
            .finish()
    }
}

impl<T, C> Default for BinaryMinHeap<T, C>
where
    C: Compare<T> + Default,
{
    fn default() -> Self {
        Self::with_comparator(C::default())
    }
}

impl<T, C> Extend<T> for BinaryMinHeap<T, C>
where
    C: Compare<T>,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for x in iter {
            self.insert(x);
        }
    }
}

impl<T: Ord> FromIterator<T> for BinaryMinHeap<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_items(iter)
    }
}

impl<T: Ord> From<Vec<T>> for BinaryMinHeap<T> {
    fn from(items: Vec<T>) -> Self {
        Self::from_items(items)
    }
}

impl<T, C> IntoIterator for BinaryMinHeap<T, C>
where
    C: Compare<T>,
{
    type Item = T;
    type IntoIter = SortedIter<T, C>;

    fn into_iter(self) -> Self::IntoIter {
        SortedIter { heap: self }
    }
}

/// Iterator yielding elements in ascending order by draining a heap it owns.
///
/// Returned by [`BinaryMinHeap::iter`] over a private snapshot, and by
/// [`BinaryMinHeap::into_iter`] over the heap itself.
pub struct SortedIter<T, C = Natural> {
    heap: BinaryMinHeap<T, C>,
}

impl<T, C> Iterator for SortedIter<T, C>
where
    C: Compare<T>,
{
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.heap.extract_min().ok()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let size = self.heap.len();
        (size, Some(size))
    }
}

impl<T, C> Debug for SortedIter<T, C>
where
    T: Debug,
{
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        f.debug_struct("SortedIter")
            .field("heap", &self.heap)
            .finish()
    }
}

impl<T, C: Compare<T>> ExactSizeIterator for SortedIter<T, C> {}
impl<T, C: Compare<T>> FusedIterator for SortedIter<T, C> {}
