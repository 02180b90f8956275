use std::{cmp::Ordering, collections::BinaryHeap};


/// Min-priority queue
/// Items with equal priority come out in insertion order, so the payload
/// never needs to be comparable itself.
#[derive(Debug)]
pub struct PriorityQueue<T, P> {
    heap: BinaryHeap<Entry<T, P>>,
    next_seq: u64,
}

impl<T, P: Ord> PriorityQueue<T, P> {

    pub fn new() -> Self {
        Self {
            heap: BinaryHeap::new(),
            next_seq: 0,
        }
    }

    /// Insert an item - O(log n)
    pub fn put(&mut self, item: T, priority: P) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.heap.push(Entry { priority, seq, item });
    }

    /// Remove the item with the smallest priority - O(log n)
    pub fn get(&mut self) -> Option<T> {
        self.get_with_priority().map(|(item, _)| item)
    }

    /// Remove the item with the smallest priority along with that priority
    pub fn get_with_priority(&mut self) -> Option<(T, P)> {
        self.heap.pop().map(|Entry { item, priority, .. }| (item, priority))
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }
}

impl<T, P: Ord> Default for PriorityQueue<T, P> {
    fn default() -> Self {
        Self::new()
    }
}


/// Heap entry
/// - BinaryHeap is a max-heap, so ordering is reversed on (priority, seq)
#[derive(Debug)]
struct Entry<T, P> {
    priority: P,
    seq: u64,
    item: T,
}

impl<T, P: Ord> Ord for Entry<T, P> {
    fn cmp(&self, other: &Self) -> Ordering {
        other.priority.cmp(&self.priority)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}
impl<T, P: Ord> PartialOrd for Entry<T, P> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
impl<T, P: Ord> PartialEq for Entry<T, P> {
    fn eq(&self, other: &Self) -> bool {
        self.priority == other.priority && self.seq == other.seq
    }
}
impl<T, P: Ord> Eq for Entry<T, P> {}
