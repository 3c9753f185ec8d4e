//! # Indexed Priority Queue
//!
//! A binary min-heap whose order is decided by a caller-supplied comparator.
//!
//! Next to the heap the queue keeps a map from every element to its slot, which gives
//! constant time membership tests and lets any element be removed in logarithmic time,
//! not only the minimum.

use std::cmp::Ordering;
use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;

use prim_common::error::QueueError;

type Comparator<E> = Box<dyn Fn(&E, &E) -> Ordering>;

/// Operations every priority queue exposes.
pub trait Queue<E> {
    /// `true` if the queue holds no element. O(1).
    fn is_empty(&self) -> bool;

    /// Number of queued elements. O(1).
    fn len(&self) -> usize;

    /// Inserts `element`, unless an equal element is already queued. O(log n).
    fn push(&mut self, element: E) -> bool;

    /// `true` if an element equal to `element` is queued. O(1).
    fn contains(&self, element: &E) -> bool;

    /// The smallest element, if any. O(1).
    fn top(&self) -> Option<&E>;

    /// Removes and returns the smallest element. O(log n).
    fn pop(&mut self) -> Result<E, QueueError>;

    /// Removes `element` wherever it sits in the queue. O(log n).
    fn remove(&mut self, element: &E) -> bool;
}

pub struct PriorityQueue<E> {
    comparator: Comparator<E>,
    heap: Vec<E>,
    index: HashMap<E, usize>,
}

impl<E> PriorityQueue<E>
where
    E: Eq + Hash + Clone,
{
    pub fn new(comparator: impl Fn(&E, &E) -> Ordering + 'static) -> Self {
        Self::with_capacity(0, comparator)
    }

    pub fn with_capacity(capacity: usize, comparator: impl Fn(&E, &E) -> Ordering + 'static) -> Self {
        Self {
            comparator: Box::new(comparator),
            heap: Vec::with_capacity(capacity),
            index: HashMap::with_capacity(capacity),
        }
    }

    /// Iterates the queued elements in heap order, which is not sorted order.
    pub fn iter(&self) -> impl Iterator<Item = &E> {
        self.heap.iter()
    }

    fn less(&self, a: usize, b: usize) -> bool {
        (self.comparator)(&self.heap[a], &self.heap[b]) == Ordering::Less
    }

    fn swap(&mut self, a: usize, b: usize) {
        if a == b {
            return;
        }

        self.heap.swap(a, b);
        if let Some(slot) = self.index.get_mut(&self.heap[a]) {
            *slot = a;
        }
        if let Some(slot) = self.index.get_mut(&self.heap[b]) {
            *slot = b;
        }
    }

    fn sift_up(&mut self, mut idx: usize) -> usize {
        while idx > 0 {
            let parent = (idx - 1) / 2;
            if !self.less(idx, parent) {
                break;
            }
            self.swap(idx, parent);
            idx = parent;
        }
        idx
    }

    fn sift_down(&mut self, mut idx: usize) {
        loop {
            let left = 2 * idx + 1;
            let right = left + 1;
            let mut smallest = idx;

            if left < self.heap.len() && self.less(left, smallest) {
                smallest = left;
            }
            if right < self.heap.len() && self.less(right, smallest) {
                smallest = right;
            }
            if smallest == idx {
                break;
            }

            self.swap(idx, smallest);
            idx = smallest;
        }
    }

    /// Takes the element at `idx` out of the heap and repairs the slot it leaves behind.
    fn take(&mut self, idx: usize) -> E {
        let last = self.heap.len() - 1;
        self.swap(idx, last);

        let element = self.heap.swap_remove(last);
        self.index.remove(&element);

        // The element moved into `idx` may belong above or below it.
        if idx < self.heap.len() {
            let settled = self.sift_up(idx);
            self.sift_down(settled);
        }

        element
    }
}

impl<E> PriorityQueue<E>
where
    E: Ord + Hash + Clone,
{
    /// A queue ordered by the natural order of `E`.
    pub fn min() -> Self {
        Self::new(|a: &E, b: &E| a.cmp(b))
    }
}

impl<E> Queue<E> for PriorityQueue<E>
where
    E: Eq + Hash + Clone,
{
    fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    fn len(&self) -> usize {
        self.heap.len()
    }

    fn push(&mut self, element: E) -> bool {
        if self.contains(&element) {
            return false;
        }

        let idx = self.heap.len();
        self.index.insert(element.clone(), idx);
        self.heap.push(element);
        self.sift_up(idx);
        true
    }

    fn contains(&self, element: &E) -> bool {
        self.index.contains_key(element)
    }

    fn top(&self) -> Option<&E> {
        self.heap.first()
    }

    fn pop(&mut self) -> Result<E, QueueError> {
        if self.heap.is_empty() {
            return Err(QueueError::Empty);
        }
        Ok(self.take(0))
    }

    fn remove(&mut self, element: &E) -> bool {
        match self.index.get(element).copied() {
            Some(idx) => {
                self.take(idx);
                true
            }
            None => false,
        }
    }
}

impl<E: fmt::Debug> fmt::Debug for PriorityQueue<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PriorityQueue")
            .field("heap", &self.heap)
            .finish_non_exhaustive()
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
