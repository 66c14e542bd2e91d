//! Search tree storage.
//!
//! Nodes live in an arena and point at their parent by index; the plan
//! itself travels in the frontier entry and is dropped once the node has been
//! expanded. The winning path is rebuilt by walking parents back to the root.

use std::cmp::Ordering;

use stowage_core::{ContainerMove, StowagePlan};

/// A node in the search tree.
#[derive(Debug, Clone)]
pub(crate) struct SearchNode {
    /// Parent node index (None for root).
    parent: Option<usize>,
    /// The move that led here from the parent.
    mv: Option<ContainerMove>,
    /// Crane time from the root.
    cost: u64,
    /// Number of moves from the root.
    depth: usize,
}

impl SearchNode {
    #[inline]
    pub(crate) fn cost(&self) -> u64 {
        self.cost
    }

    #[inline]
    pub(crate) fn depth(&self) -> usize {
        self.depth
    }
}

/// Append-only node storage.
#[derive(Debug, Default)]
pub(crate) struct NodeArena {
    nodes: Vec<SearchNode>,
}

impl NodeArena {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Stores the root node and returns its index.
    pub(crate) fn push_root(&mut self) -> usize {
        self.nodes.push(SearchNode {
            parent: None,
            mv: None,
            cost: 0,
            depth: 0,
        });
        self.nodes.len() - 1
    }

    /// Stores a child of `parent` reached by `mv`.
    pub(crate) fn push_child(&mut self, parent: usize, mv: ContainerMove, cost: u64) -> usize {
        let depth = self.nodes[parent].depth + 1;
        self.nodes.push(SearchNode {
            parent: Some(parent),
            mv: Some(mv),
            cost,
            depth,
        });
        self.nodes.len() - 1
    }

    #[inline]
    pub(crate) fn get(&self, index: usize) -> &SearchNode {
        &self.nodes[index]
    }

    pub(crate) fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns the moves from the root to `index`, in execution order.
    pub(crate) fn path(&self, index: usize) -> Vec<ContainerMove> {
        let mut moves = Vec::with_capacity(self.nodes[index].depth);
        let mut current = Some(index);
        while let Some(i) = current {
            let node = &self.nodes[i];
            moves.extend(node.mv);
            current = node.parent;
        }
        moves.reverse();
        moves
    }
}

/// A frontier entry ordered for a max-heap so the lowest `f` pops first,
/// ties going to the entry generated earliest.
#[derive(Debug)]
pub(crate) struct FrontierEntry {
    /// `g + h`.
    pub(crate) priority: u64,
    /// Insertion counter.
    pub(crate) sequence: u64,
    pub(crate) node: usize,
    pub(crate) plan: StowagePlan,
}

impl PartialEq for FrontierEntry {
    fn eq(&self, other: &Self) -> bool {
        self.priority == other.priority && self.sequence == other.sequence
    }
}

impl Eq for FrontierEntry {}

impl Ord for FrontierEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed on both keys
        other
            .priority
            .cmp(&self.priority)
            .then_with(|| other.sequence.cmp(&self.sequence))
    }
}

impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BinaryHeap;
    use stowage_core::Position;

    fn entry(priority: u64, sequence: u64) -> FrontierEntry {
        FrontierEntry {
            priority,
            sequence,
            node: 0,
            plan: StowagePlan::empty(),
        }
    }

    #[test]
    fn test_heap_pops_lowest_priority_then_earliest() {
        let mut heap = BinaryHeap::new();
        heap.push(entry(5, 0));
        heap.push(entry(3, 2));
        heap.push(entry(3, 1));
        heap.push(entry(7, 3));

        let order: Vec<_> = std::iter::from_fn(|| heap.pop())
            .map(|e| (e.priority, e.sequence))
            .collect();
        assert_eq!(order, vec![(3, 1), (3, 2), (5, 0), (7, 3)]);
    }

    #[test]
    fn test_path_reconstruction() {
        let a = ContainerMove::crane(Position::new(1, 1), Position::new(1, 7), 10);
        let b = ContainerMove::slide(Position::new(1, 2), Position::new(1, 3), 20);

        let mut arena = NodeArena::new();
        let root = arena.push_root();
        let first = arena.push_child(root, a, 6);
        let _sibling = arena.push_child(root, b, 1);
        let second = arena.push_child(first, b, 7);

        assert_eq!(arena.len(), 4);
        assert_eq!(arena.get(second).depth(), 2);
        assert_eq!(arena.get(second).cost(), 7);
        assert_eq!(arena.path(second), vec![a, b]);
        assert!(arena.path(root).is_empty());
    }
}
