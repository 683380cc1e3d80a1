use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

use crate::graph::types::{NodeId, Weight};

/// Frontier queue entry, ordered by priority then push sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeapEntry {
    pub priority: Weight,
    pub seq: u64,
    pub node: NodeId,
}

impl PartialOrd for HeapEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HeapEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        self.priority
            .cmp(&other.priority)
            .then_with(|| self.seq.cmp(&other.seq))
    }
}

/// Min-priority queue with lazy deletion.
///
/// Entries are never removed or re-keyed once pushed; a node may sit in the
/// queue several times and callers discard stale entries at pop time. Among
/// equal priorities, entries pop in the order they were pushed.
#[derive(Debug, Default)]
pub struct Frontier {
    heap: BinaryHeap<Reverse<HeapEntry>>,
    next_seq: u64,
}

impl Frontier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, priority: Weight, node: NodeId) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.heap.push(Reverse(HeapEntry {
            priority,
            seq,
            node,
        }));
    }

    /// Remove the minimum entry as `(priority, node)`
    pub fn pop(&mut self) -> Option<(Weight, NodeId)> {
        self.heap
            .pop()
            .map(|Reverse(entry)| (entry.priority, entry.node))
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Total number of pushes since creation
    pub fn pushed(&self) -> u64 {
        self.next_seq
    }
}
