//! `PriorityQueue` - a min-priority queue implemented with a binary heap.
//!
//! Entries are `(value, priority)` pairs. The entry with the smallest priority is always
//! at the front. Each `enqueue` restores the heap property with a single sift-up, so a
//! sequence of `n` operations costs \(O(n \log n)\) rather than a full re-sort per insert.
//!
//! There is no decrease-key. Callers that need one (Dijkstra) enqueue the value again
//! with the better priority and discard stale entries when they surface.

use core::cmp::Ordering;
use core::fmt;

use crate::error::{Error, Result};

/// A min-priority queue keyed by `P`.
///
/// Priorities only need `PartialOrd`, so floating point weights work. Priorities that
/// cannot be compared (NaN) are treated as equal to everything; they never panic but
/// their position relative to other entries is unspecified.
///
/// Ties between equal priorities are broken arbitrarily. The queue is not stable.
///
/// ### Performance Characteristics
/// | Operation | Complexity |
/// |-----------|------------|
/// | `enqueue` | \(O(\log n)\) |
/// | `dequeue` / `pop` | \(O(\log n)\) |
/// | `peek` | \(O(1)\) |
pub struct PriorityQueue<T, P> {
    data: Vec<(T, P)>,
}

impl<T, P: PartialOrd> PriorityQueue<T, P> {
    /// Creates an empty queue.
    pub fn new() -> Self {
        Self { data: Vec::new() }
    }

    /// Creates an empty queue with room for `capacity` entries.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            data: Vec::with_capacity(capacity),
        }
    }

    /// Returns the number of entries in the queue.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns `true` if the queue holds no entries.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns the capacity of the backing storage.
    pub fn capacity(&self) -> usize {
        self.data.capacity()
    }

    /// Inserts `value` with the given `priority`.
    pub fn enqueue(&mut self, value: T, priority: P) {
        self.data.push((value, priority));
        self.sift_up(self.data.len() - 1);
    }

    /// Removes and returns the entry with the smallest priority.
    ///
    /// # Errors
    /// Returns [`Error::EmptyQueue`] if the queue is empty.
    pub fn dequeue(&mut self) -> Result<(T, P)> {
        self.pop().ok_or(Error::EmptyQueue)
    }

    /// Removes and returns the entry with the smallest priority, or `None` if empty.
    pub fn pop(&mut self) -> Option<(T, P)> {
        if self.data.is_empty() {
            return None;
        }
        let last_idx = self.data.len() - 1;
        self.data.swap(0, last_idx);
        let entry = self.data.pop()?;
        if !self.data.is_empty() {
            self.sift_down(0);
        }
        Some(entry)
    }

    /// Returns the entry with the smallest priority without removing it.
    pub fn peek(&self) -> Option<(&T, &P)> {
        self.data.first().map(|(value, priority)| (value, priority))
    }

    /// Removes every entry.
    pub fn clear(&mut self) {
        self.data.clear();
    }

    /// Consumes the queue and returns its entries in ascending priority order.
    pub fn into_sorted_vec(mut self) -> Vec<(T, P)> {
        let mut sorted = Vec::with_capacity(self.data.len());
        while let Some(entry) = self.pop() {
            sorted.push(entry);
        }
        sorted
    }

    fn sift_up(&mut self, mut node: usize) {
        while node > 0 {
            let parent = (node - 1) / 2;
            if self.less(node, parent) {
                self.data.swap(parent, node);
                node = parent;
            } else {
                break;
            }
        }
    }

    fn sift_down(&mut self, mut node: usize) {
        let len = self.data.len();
        loop {
            let left = 2 * node + 1;
            if left >= len {
                break;
            }
            let right = left + 1;
            let mut smaller = left;
            if right < len && self.less(right, left) {
                smaller = right;
            }

            if self.less(smaller, node) {
                self.data.swap(node, smaller);
                node = smaller;
            } else {
                break;
            }
        }
    }

    // Strictly-less on priorities; incomparable pairs are never "less".
    fn less(&self, a: usize, b: usize) -> bool {
        matches!(
            self.data[a].1.partial_cmp(&self.data[b].1),
            Some(Ordering::Less)
        )
    }
}

impl<T, P> PriorityQueue<T, P> {
    /// Iterates over all entries in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&T, &P)> + '_ {
        self.data.iter().map(|(value, priority)| (value, priority))
    }
}

impl<T, P: PartialOrd> Default for PriorityQueue<T, P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, P: PartialOrd> Extend<(T, P)> for PriorityQueue<T, P> {
    fn extend<I: IntoIterator<Item = (T, P)>>(&mut self, iter: I) {
        for (value, priority) in iter {
            self.enqueue(value, priority);
        }
    }
}

impl<T, P: PartialOrd> FromIterator<(T, P)> for PriorityQueue<T, P> {
    fn from_iter<I: IntoIterator<Item = (T, P)>>(iter: I) -> Self {
        let mut queue = Self::new();
        queue.extend(iter);
        queue
    }
}

impl<T, P: fmt::Debug + PartialOrd> fmt::Debug for PriorityQueue<T, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PriorityQueue")
            .field("len", &self.len())
            .field("min_priority", &self.peek().map(|(_, p)| p))
            .finish()
    }
}
