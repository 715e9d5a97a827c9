use std::cmp::Reverse;
use std::collections::BinaryHeap;
use std::fmt::Debug;

/// A min-priority frontier over (vertex, tentative distance) snapshots
///
/// Entries are immutable once pushed. Improving a vertex's tentative
/// distance means pushing a fresh snapshot; the superseded entry stays in
/// the heap and surfaces later, where the caller's visited check discards
/// it. Lazy deletion replaces a decrease-key operation and never disturbs
/// the heap invariant.
#[derive(Debug)]
pub struct Frontier<V, P>
where
    V: Copy + Eq + Ord + Debug,
    P: Copy + Ord + Debug,
{
    /// The underlying binary heap, min-ordered by priority
    heap: BinaryHeap<Reverse<(P, V)>>,
}

impl<V, P> Frontier<V, P>
where
    V: Copy + Eq + Ord + Debug,
    P: Copy + Ord + Debug,
{
    /// Creates a new empty frontier
    pub fn new() -> Self {
        Frontier {
            heap: BinaryHeap::new(),
        }
    }

    /// Returns true if the frontier has no pending entries
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Returns the number of pending entries, stale ones included
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Pushes a (vertex, tentative distance) snapshot into the frontier
    pub fn push(&mut self, vertex: V, priority: P) {
        self.heap.push(Reverse((priority, vertex)));
    }

    /// Removes and returns the globally minimum pending entry
    pub fn pop(&mut self) -> Option<(V, P)> {
        self.heap
            .pop()
            .map(|Reverse((priority, vertex))| (vertex, priority))
    }

    /// Returns the minimum pending entry without removing it
    pub fn peek(&self) -> Option<(V, P)> {
        self.heap
            .peek()
            .map(|Reverse((priority, vertex))| (*vertex, *priority))
    }

    /// Clears the frontier
    pub fn clear(&mut self) {
        self.heap.clear();
    }
}

impl<V, P> Default for Frontier<V, P>
where
    V: Copy + Eq + Ord + Debug,
    P: Copy + Ord + Debug,
{
    fn default() -> Self {
        Self::new()
    }
}
