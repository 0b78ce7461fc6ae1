use std::cmp::Ordering;
use std::collections::{BinaryHeap, VecDeque};

use crate::maze::Cell;

/// Cells discovered but not yet expanded.
///
/// Implementations decide the expansion order. `priority` is ignored by orderings
/// that do not rank cells.
pub trait Frontier {
    fn push(&mut self, cell: Cell, priority: f64);

    fn pop(&mut self) -> Option<Cell>;

    fn is_empty(&self) -> bool;

    fn len(&self) -> usize;

    fn clear(&mut self);
}

/// first in, first out
#[derive(Debug, Default)]
pub struct FifoFrontier {
    queue: VecDeque<Cell>,
}

impl Frontier for FifoFrontier {
    fn push(&mut self, cell: Cell, _priority: f64) {
        self.queue.push_back(cell);
    }

    fn pop(&mut self) -> Option<Cell> {
        self.queue.pop_front()
    }

    fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    fn len(&self) -> usize {
        self.queue.len()
    }

    fn clear(&mut self) {
        self.queue.clear();
    }
}

#[derive(Debug, Clone, Copy)]
struct Entry {
    priority: f64,
    seq: u64,
    cell: Cell,
}

impl Ord for Entry {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .priority
            .total_cmp(&self.priority)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for Entry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Entry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Entry {}

/// lowest priority first, equal priorities in insertion order
#[derive(Debug, Default)]
pub struct PriorityFrontier {
    heap: BinaryHeap<Entry>,
    seq: u64,
}

impl Frontier for PriorityFrontier {
    fn push(&mut self, cell: Cell, priority: f64) {
        self.heap.push(Entry {
            priority,
            seq: self.seq,
            cell,
        });
        self.seq += 1;
    }

    fn pop(&mut self) -> Option<Cell> {
        self.heap.pop().map(|entry| entry.cell)
    }

    fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    fn len(&self) -> usize {
        self.heap.len()
    }

    fn clear(&mut self) {
        self.heap.clear();
        self.seq = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn drain(frontier: &mut impl Frontier) -> Vec<Cell> {
        std::iter::from_fn(|| frontier.pop()).collect()
    }

    #[test]
    fn fifo_keeps_arrival_order() {
        let mut frontier = FifoFrontier::default();
        frontier.push(Cell::new(0, 2), 9.0);
        frontier.push(Cell::new(0, 1), 1.0);
        frontier.push(Cell::new(0, 3), 5.0);

        assert_eq!(frontier.len(), 3);
        assert_eq!(
            drain(&mut frontier),
            vec![Cell::new(0, 2), Cell::new(0, 1), Cell::new(0, 3)]
        );
        assert!(frontier.is_empty());
    }

    #[test]
    fn priority_is_stable_on_ties() {
        let mut frontier = PriorityFrontier::default();
        frontier.push(Cell::new(1, 0), 2.0);
        frontier.push(Cell::new(2, 0), 1.0);
        frontier.push(Cell::new(3, 0), 2.0);
        frontier.push(Cell::new(4, 0), 1.0);
        frontier.push(Cell::new(5, 0), 0.5);

        assert_eq!(
            drain(&mut frontier),
            vec![
                Cell::new(5, 0),
                Cell::new(2, 0),
                Cell::new(4, 0),
                Cell::new(1, 0),
                Cell::new(3, 0)
            ]
        );
    }

    #[test]
    fn fractional_priorities_order() {
        let mut frontier = PriorityFrontier::default();
        frontier.push(Cell::new(0, 0), 3.002);
        frontier.push(Cell::new(0, 1), 3.001);

        assert_eq!(frontier.pop(), Some(Cell::new(0, 1)));
    }

    #[test]
    fn clear_empties() {
        let mut frontier = PriorityFrontier::default();
        frontier.push(Cell::new(0, 0), 1.0);
        frontier.clear();

        assert!(frontier.is_empty());
        assert_eq!(frontier.pop(), None);
    }
}
