use std::{
    cmp::Ordering,
    collections::{BinaryHeap, VecDeque},
};

use super::heuristic::Heuristic;
use super::node::Node;
use crate::errors::SearchError;
use crate::grid::Cell;


/// Open set of generated but not yet expanded nodes
pub trait Frontier {
    fn add(&mut self, node: Node);

    /// Next node to expand, EmptyFrontier when nothing is left
    fn remove(&mut self) -> Result<Node, SearchError>;

    fn is_empty(&self) -> bool;

    /// Linear scan over the current contents
    fn contains_state(&self, state: Cell) -> bool;

    fn len(&self) -> usize;
}


/// Last in, first out - depth-first search
#[derive(Debug, Default)]
pub struct StackFrontier {
    nodes: Vec<Node>,
}

impl StackFrontier {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Frontier for StackFrontier {
    fn add(&mut self, node: Node) {
        self.nodes.push(node);
    }

    fn remove(&mut self) -> Result<Node, SearchError> {
        self.nodes.pop().ok_or(SearchError::EmptyFrontier)
    }

    fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    fn contains_state(&self, state: Cell) -> bool {
        self.nodes.iter().any(|n| n.state() == state)
    }

    fn len(&self) -> usize {
        self.nodes.len()
    }
}


/// First in, first out - breadth-first search
#[derive(Debug, Default)]
pub struct QueueFrontier {
    nodes: VecDeque<Node>,
}

impl QueueFrontier {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Frontier for QueueFrontier {
    fn add(&mut self, node: Node) {
        self.nodes.push_back(node);
    }

    fn remove(&mut self) -> Result<Node, SearchError> {
        self.nodes.pop_front().ok_or(SearchError::EmptyFrontier)
    }

    fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    fn contains_state(&self, state: Cell) -> bool {
        self.nodes.iter().any(|n| n.state() == state)
    }

    fn len(&self) -> usize {
        self.nodes.len()
    }
}


/// Heap entry keyed by (f_cost, seq)
#[derive(Debug)]
struct Entry {
    f_cost: usize, // cost + heuristic
    seq: u64, // insertion counter, earlier wins on equal f_cost
    node: Node,
}

// BinaryHeap pops the largest, so the comparison is reversed
impl Ord for Entry {
    fn cmp(&self, other: &Self) -> Ordering {
        other.f_cost.cmp(&self.f_cost)
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
        self.f_cost == other.f_cost && self.seq == other.seq
    }
}
impl Eq for Entry {}


/// Smallest f = cost + h(state) first - A* search
/// Insert only, no decrease-key: the same state can sit in the heap several times
pub struct PriorityFrontier<'h> {
    heap: BinaryHeap<Entry>,
    heuristic: &'h dyn Heuristic,
    counter: u64,
}

impl<'h> PriorityFrontier<'h> {
    pub fn new(heuristic: &'h dyn Heuristic) -> Self {
        Self {
            heap: BinaryHeap::new(),
            heuristic,
            counter: 0,
        }
    }
}

impl Frontier for PriorityFrontier<'_> {
    fn add(&mut self, node: Node) {
        // saturates so a usize::MAX estimate sorts last instead of wrapping
        let f_cost = node.cost().saturating_add(self.heuristic.estimate(node.state()));
        self.heap.push(Entry { f_cost, seq: self.counter, node });
        self.counter += 1;
    }

    fn remove(&mut self) -> Result<Node, SearchError> {
        self.heap.pop().map(|e| e.node).ok_or(SearchError::EmptyFrontier)
    }

    fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    fn contains_state(&self, state: Cell) -> bool {
        self.heap.iter().any(|e| e.node.state() == state)
    }

    fn len(&self) -> usize {
        self.heap.len()
    }
}
