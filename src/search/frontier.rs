use std::cmp::Reverse;
use std::collections::{BinaryHeap, VecDeque};

use crate::node::{NodeId, SearchNode};

/// Order in which discovered nodes are handed back for expansion.
pub trait Frontier {
    fn push(&mut self, id: NodeId, node: &SearchNode);
    fn pop(&mut self) -> Option<NodeId>;
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// First in, first out.
#[derive(Debug, Default)]
pub struct FifoFrontier(VecDeque<NodeId>);

impl Frontier for FifoFrontier {
    fn push(&mut self, id: NodeId, _node: &SearchNode) {
        self.0.push_back(id);
    }

    fn pop(&mut self) -> Option<NodeId> {
        self.0.pop_front()
    }

    fn len(&self) -> usize {
        self.0.len()
    }
}

/// Last in, first out.
#[derive(Debug, Default)]
pub struct LifoFrontier(Vec<NodeId>);

impl Frontier for LifoFrontier {
    fn push(&mut self, id: NodeId, _node: &SearchNode) {
        self.0.push(id);
    }

    fn pop(&mut self) -> Option<NodeId> {
        self.0.pop()
    }

    fn len(&self) -> usize {
        self.0.len()
    }
}

/// Lowest score first. Equal scores pop in push order, since node ids are
/// allocated in push order.
#[derive(Debug, Default)]
pub struct PriorityFrontier(BinaryHeap<Reverse<(u32, NodeId)>>);

impl Frontier for PriorityFrontier {
    fn push(&mut self, id: NodeId, node: &SearchNode) {
        self.0.push(Reverse((node.score, id)));
    }

    fn pop(&mut self) -> Option<NodeId> {
        self.0.pop().map(|Reverse((_, id))| id)
    }

    fn len(&self) -> usize {
        self.0.len()
    }
}
