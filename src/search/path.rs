// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Complete lattice paths.

use crate::lattice::Node;

/// A path from BOS to EOS with its total cost.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Path<'v> {
    nodes: Vec<Node<'v>>,
    cost: i32,
}

impl<'v> Path<'v> {
    /// Create a path from BOS-first `nodes`.
    pub fn new(nodes: Vec<Node<'v>>, cost: i32) -> Self {
        Self { nodes, cost }
    }

    pub fn nodes(&self) -> &[Node<'v>] {
        &self.nodes
    }

    pub fn cost(&self) -> i32 {
        self.cost
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn into_nodes(self) -> Vec<Node<'v>> {
        self.nodes
    }
}
