// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Partial paths queued during N-best search.

use crate::lattice::Node;
use std::cmp::Ordering;

/// The EOS end of a path, queued until its cheapest completion is explored.
///
/// `tail_path` runs from EOS back toward BOS. `tail_path_cost` is the cost
/// committed by the tail. `whole_path_cost` adds the path cost of the tail's
/// earliest node, which is the exact cost of the cheapest full path through
/// the tail.
#[derive(Debug, Clone, PartialEq)]
pub struct Cap<'v> {
    tail_path: Vec<Node<'v>>,
    tail_path_cost: i32,
    whole_path_cost: i32,
}

impl<'v> Cap<'v> {
    pub fn new(tail_path: Vec<Node<'v>>, tail_path_cost: i32, whole_path_cost: i32) -> Self {
        Self {
            tail_path,
            tail_path_cost,
            whole_path_cost,
        }
    }

    pub fn tail_path(&self) -> &[Node<'v>] {
        &self.tail_path
    }

    pub fn tail_path_cost(&self) -> i32 {
        self.tail_path_cost
    }

    pub fn whole_path_cost(&self) -> i32 {
        self.whole_path_cost
    }

    pub fn into_tail_path(self) -> Vec<Node<'v>> {
        self.tail_path
    }
}

/// A cap in the search queue.
///
/// `BinaryHeap` is a max-heap, so the ordering is reversed: the cheapest cap
/// is the greatest, and among equal costs the earliest queued.
#[derive(Debug)]
pub(crate) struct QueuedCap<'v> {
    pub(crate) cap: Cap<'v>,
    pub(crate) sequence: u64,
}

impl Ord for QueuedCap<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .cap
            .whole_path_cost
            .cmp(&self.cap.whole_path_cost)
            .then_with(|| other.sequence.cmp(&self.sequence))
    }
}

impl PartialOrd for QueuedCap<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for QueuedCap<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for QueuedCap<'_> {}
