// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Lattice vertices.
//!
//! A node is one occurrence of a vocabulary entry in the lattice, together with
//! its linkage to the preceding step and its best-known cost from BOS.
//!
//! # Cost Invariant
//!
//! For every node except BOS:
//!
//! ```text
//! path_cost == node_cost + min_i(preceding_edge_costs[i] + preceding_nodes[i].path_cost)
//! ```
//!
//! and `best_preceding_node` is the first index attaining that minimum. BOS has
//! `path_cost == node_cost == 0`. Costs saturate at `i32::MAX`, which stands
//! for "unreachable".

use crate::input::Input;
use crate::vocabulary::{EntryView, Value};
use std::any::Any;
use std::fmt;
use std::rc::Rc;

/// A vertex of the lattice.
///
/// `preceding_edge_costs` is shared with the step table (or, for EOS, with the
/// caller of [`Lattice::settle`](crate::Lattice::settle)); cloning a node only
/// bumps a reference count.
#[derive(Clone)]
pub struct Node<'v> {
    key: Option<&'v Input>,
    value: Option<&'v Value>,
    index_in_step: usize,
    preceding_step: Option<usize>,
    preceding_edge_costs: Rc<[i32]>,
    best_preceding_node: Option<usize>,
    node_cost: i32,
    path_cost: i32,
}

impl<'v> Node<'v> {
    /// Create the BOS node.
    pub fn bos(preceding_edge_costs: Rc<[i32]>) -> Self {
        Self {
            key: None,
            value: None,
            index_in_step: 0,
            preceding_step: None,
            preceding_edge_costs,
            best_preceding_node: None,
            node_cost: 0,
            path_cost: 0,
        }
    }

    /// Create an EOS node with precomputed linkage and cost.
    pub fn eos(
        preceding_step: usize,
        preceding_edge_costs: Rc<[i32]>,
        best_preceding_node: usize,
        path_cost: i32,
    ) -> Self {
        Self {
            key: None,
            value: None,
            index_in_step: 0,
            preceding_step: Some(preceding_step),
            preceding_edge_costs,
            best_preceding_node: Some(best_preceding_node),
            node_cost: EntryView::BOS_EOS.cost(),
            path_cost,
        }
    }

    /// Create a node for an entry.
    ///
    /// # Arguments
    ///
    /// * `entry` - the vocabulary entry; its cost becomes the node cost
    /// * `index_in_step` - position of this node within its own step
    /// * `preceding_step` - index of the step this node's token starts after
    /// * `preceding_edge_costs` - edge cost from every node of `preceding_step`
    /// * `best_preceding_node` - index of the cheapest predecessor
    /// * `path_cost` - cost of the best path from BOS through this node
    pub fn new(
        entry: &EntryView<'v>,
        index_in_step: usize,
        preceding_step: usize,
        preceding_edge_costs: Rc<[i32]>,
        best_preceding_node: usize,
        path_cost: i32,
    ) -> Self {
        Self {
            key: entry.key(),
            value: entry.value(),
            index_in_step,
            preceding_step: Some(preceding_step),
            preceding_edge_costs,
            best_preceding_node: Some(best_preceding_node),
            node_cost: entry.cost(),
            path_cost,
        }
    }

    /// The entry key; `None` for BOS and EOS.
    pub fn key(&self) -> Option<&'v Input> {
        self.key
    }

    pub fn value(&self) -> Option<&'v Value> {
        self.value
    }

    /// The payload as a `T`, if there is one of that type.
    pub fn value_as<T: Any>(&self) -> Option<&'v T> {
        self.value.and_then(|value| value.downcast_ref::<T>())
    }

    pub fn index_in_step(&self) -> usize {
        self.index_in_step
    }

    /// The step this node follows; `None` for BOS.
    pub fn preceding_step(&self) -> Option<usize> {
        self.preceding_step
    }

    pub fn preceding_edge_costs(&self) -> &[i32] {
        &self.preceding_edge_costs
    }

    /// The shared handle to the edge cost array.
    pub fn preceding_edge_costs_handle(&self) -> &Rc<[i32]> {
        &self.preceding_edge_costs
    }

    /// Index of the cheapest predecessor; `None` for BOS.
    pub fn best_preceding_node(&self) -> Option<usize> {
        self.best_preceding_node
    }

    pub fn node_cost(&self) -> i32 {
        self.node_cost
    }

    pub fn path_cost(&self) -> i32 {
        self.path_cost
    }

    /// This node as an entry view, for connection lookups.
    pub fn entry(&self) -> EntryView<'v> {
        EntryView::new(self.key, self.value, self.node_cost)
    }

    pub fn is_bos(&self) -> bool {
        self.key.is_none() && self.preceding_step.is_none()
    }
}

/// Keys compare by value, values by identity of the referent.
impl<'b> PartialEq<Node<'b>> for Node<'_> {
    fn eq(&self, other: &Node<'b>) -> bool {
        let same_value = match (self.value, other.value) {
            (None, None) => true,
            (Some(one), Some(another)) => {
                std::ptr::addr_eq(one as *const Value, another as *const Value)
            }
            _ => false,
        };
        self.key == other.key
            && same_value
            && self.index_in_step == other.index_in_step
            && self.preceding_step == other.preceding_step
            && self.preceding_edge_costs[..] == other.preceding_edge_costs[..]
            && self.best_preceding_node == other.best_preceding_node
            && self.node_cost == other.node_cost
            && self.path_cost == other.path_cost
    }
}

impl fmt::Debug for Node<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("key", &self.key)
            .field("has_value", &self.value.is_some())
            .field("index_in_step", &self.index_in_step)
            .field("preceding_step", &self.preceding_step)
            .field("preceding_edge_costs", &&self.preceding_edge_costs[..])
            .field("best_preceding_node", &self.best_preceding_node)
            .field("node_cost", &self.node_cost)
            .field("path_cost", &self.path_cost)
            .finish()
    }
}
