//! Exact running median over a stream of values

use std::{cmp::Reverse, collections::BinaryHeap};

/// The middle of a distribution, as reported by [`RunningMedian::median`]
///
/// How a pair of middle values is combined is up to the caller.
/// For donation amounts, see [`crate::Amount::rounded_median`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Midpoint<T> {
    /// An odd number of values has been seen, so there is a single middle value
    Exact(T),
    /// An even number of values has been seen: the median lies between these two
    Between(T, T),
}

/// Max-ordered heap holding the smaller half of the values seen
#[derive(Debug, Clone)]
struct LowerHalf<T: Ord>(BinaryHeap<T>);

impl<T: Ord> LowerHalf<T> {
    fn len(&self) -> usize {
        self.0.len()
    }

    fn max(&self) -> Option<&T> {
        self.0.peek()
    }

    fn push(&mut self, value: T) {
        self.0.push(value);
    }

    fn pop_max(&mut self) -> Option<T> {
        self.0.pop()
    }
}

/// Min-ordered heap holding the larger half of the values seen
#[derive(Debug, Clone)]
struct UpperHalf<T: Ord>(BinaryHeap<Reverse<T>>);

impl<T: Ord> UpperHalf<T> {
    fn len(&self) -> usize {
        self.0.len()
    }

    fn min(&self) -> Option<&T> {
        self.0.peek().map(|Reverse(v)| v)
    }

    fn push(&mut self, value: T) {
        self.0.push(Reverse(value));
    }

    fn pop_min(&mut self) -> Option<T> {
        self.0.pop().map(|Reverse(v)| v)
    }
}

/// Exact median of every value inserted so far
///
/// Values are split between two heaps: a max-heap over the lower half and a min-heap over the upper half.
/// The lower half always holds either the same number of values as the upper half, or exactly one more,
/// so the median can be read off the tops of the heaps in constant time.
///
/// Insertion is `O(log n)`, and every inserted value is retained: space is `O(n)`.
/// Values can't be removed once inserted.
///
/// Any totally ordered type works; it doesn't need to be numeric.
#[derive(Debug, Clone)]
pub struct RunningMedian<T: Ord> {
    lower: LowerHalf<T>,
    upper: UpperHalf<T>,
}

impl<T: Ord> Default for RunningMedian<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Ord> RunningMedian<T> {
    /// Constructs an empty [`Self`]
    pub fn new() -> Self {
        Self {
            lower: LowerHalf(BinaryHeap::new()),
            upper: UpperHalf(BinaryHeap::new()),
        }
    }

    /// Total number of values inserted so far
    pub fn len(&self) -> usize {
        self.lower.len() + self.upper.len()
    }

    /// Whether no values have been inserted yet
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of values currently in the lower half
    pub fn lower_len(&self) -> usize {
        self.lower.len()
    }

    /// Number of values currently in the upper half
    pub fn upper_len(&self) -> usize {
        self.upper.len()
    }

    /// Folds a new value into the distribution
    pub fn insert(&mut self, value: T) {
        match self.lower.max() {
            Some(max) if value >= *max => self.upper.push(value),
            _ => self.lower.push(value),
        }

        // Each insert grows one side by one, so at most one move is needed
        if self.lower.len() > self.upper.len() + 1 {
            if let Some(max) = self.lower.pop_max() {
                self.upper.push(max);
            }
        } else if self.upper.len() > self.lower.len() {
            if let Some(min) = self.upper.pop_min() {
                self.lower.push(min);
            }
        }

        debug_assert!(self.lower.len() - self.upper.len() <= 1);
    }

    /// The median of every value inserted so far, or [`None`] if nothing has been inserted
    pub fn median(&self) -> Option<Midpoint<T>>
    where
        T: Clone,
    {
        let low = self.lower.max()?;

        if self.lower.len() > self.upper.len() {
            Some(Midpoint::Exact(low.clone()))
        } else {
            let high = self.upper.min()?;
            Some(Midpoint::Between(low.clone(), high.clone()))
        }
    }
}
