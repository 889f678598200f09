// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! The word lattice and its forward Viterbi pass.
//!
//! The lattice is a list of steps. Step 0 holds the BOS node; each call to
//! [`Lattice::push_back`] appends one step holding every entry that ends with
//! the newly pushed fragment. A token may span several fragments, so a node in
//! step k may follow any step before k.
//!
//! # Cost Propagation
//!
//! When a node is created, its costs are computed from the already-settled
//! step it follows:
//!
//! ```text
//! edge[i]   = vocabulary.find_connection(preceding_nodes[i], entry)
//! best      = argmin_i(preceding_nodes[i].path_cost + edge[i])
//! path_cost = preceding_nodes[best].path_cost + edge[best] + entry.cost
//! ```
//!
//! Steps are never modified once pushed, so this is a single forward dynamic
//! programming pass and no step is revisited. [`Lattice::settle`] performs the
//! same relaxation for a synthetic EOS node over the last step.
//!
//! # Example
//!
//! ```
//! use word_lattice::{Entry, HashMapVocabulary, Input, Lattice};
//!
//! let vocabulary = HashMapVocabulary::new(
//!     vec![
//!         (Input::from("ab"), vec![Entry::new("AB", "ab", 5)]),
//!         (Input::from("a"), vec![Entry::new("A", "a", 1)]),
//!         (Input::from("b"), vec![Entry::new("B", "b", 1)]),
//!     ],
//!     vec![
//!         ((None, Some(Input::from("AB"))), 0),
//!         ((None, Some(Input::from("A"))), 0),
//!         ((Some(Input::from("A")), Some(Input::from("B"))), 1),
//!         ((Some(Input::from("AB")), None), 0),
//!         ((Some(Input::from("B")), None), 0),
//!     ],
//! );
//!
//! let mut lattice = Lattice::new(&vocabulary);
//! lattice.push_back(Input::from("a")).unwrap();
//! lattice.push_back(Input::from("b")).unwrap();
//! assert_eq!(lattice.step_count(), 3);
//!
//! let (eos, _) = lattice.settle().unwrap();
//! assert_eq!(eos.path_cost(), 3); // A + B beats AB
//! ```

pub mod node;
pub mod options;
pub mod step;

pub use node::Node;
pub use options::{LatticeOptions, MissingConnection};
pub use step::Step;

use crate::error::{LatticeError, Result};
use crate::input::Input;
use crate::vocabulary::{EntryView, Vocabulary};
use std::cell::Cell;
use std::rc::Rc;
use tracing::{debug, warn};

/// Cost of a missing connection or an unreachable node.
pub const INFINITE_COST: i32 = i32::MAX;

/// Add costs, keeping [`INFINITE_COST`] absorbing.
pub(crate) fn add_cost(one: i32, another: i32) -> i32 {
    if one == INFINITE_COST || another == INFINITE_COST {
        INFINITE_COST
    } else {
        one.saturating_add(another)
    }
}

/// A word lattice over the fragments pushed so far.
///
/// The lattice borrows its vocabulary; every node borrows entry keys and
/// values from it. It accepts input until it is settled.
pub struct Lattice<'v> {
    vocabulary: &'v dyn Vocabulary,
    options: LatticeOptions,
    input: Option<Input>,
    steps: Vec<Step<'v>>,
    settled: Cell<bool>,
}

impl<'v> Lattice<'v> {
    /// Create a lattice holding only the BOS step.
    pub fn new(vocabulary: &'v dyn Vocabulary) -> Self {
        Self::with_options(vocabulary, LatticeOptions::default())
    }

    pub fn with_options(vocabulary: &'v dyn Vocabulary, options: LatticeOptions) -> Self {
        Self {
            vocabulary,
            options,
            input: None,
            steps: vec![Step::bos()],
            settled: Cell::new(false),
        }
    }

    pub fn options(&self) -> LatticeOptions {
        self.options
    }

    /// Number of steps, BOS step included.
    pub fn step_count(&self) -> usize {
        self.steps.len()
    }

    /// The nodes of `step`.
    ///
    /// Fails with [`LatticeError::OutOfRange`] if `step >= step_count()`.
    pub fn nodes_at(&self, step: usize) -> Result<&[Node<'v>]> {
        self.steps
            .get(step)
            .map(Step::nodes)
            .ok_or(LatticeError::OutOfRange {
                index: step,
                len: self.steps.len(),
            })
    }

    /// True once [`settle`](Self::settle) has succeeded.
    pub fn is_settled(&self) -> bool {
        self.settled.get()
    }

    /// The concatenation of every fragment pushed so far.
    pub fn input(&self) -> Option<&Input> {
        self.input.as_ref()
    }

    /// Push one input fragment and append the step of nodes ending with it.
    ///
    /// Every suffix of the concatenated input that starts at an earlier step
    /// boundary is looked up in the vocabulary; each entry found becomes a node
    /// following that step. Under [`MissingConnection::Unreachable`] a node
    /// with no connected predecessor is kept with a path cost of
    /// [`INFINITE_COST`].
    ///
    /// Fails with [`LatticeError::InvalidArgument`] if `input` is of a different
    /// variant than the fragments already pushed, if no entry ends with it, or
    /// if a connection is missing under [`MissingConnection::Reject`]. Fails
    /// with [`LatticeError::Logic`] once the lattice is settled. The lattice is
    /// unchanged on failure.
    pub fn push_back(&mut self, input: Input) -> Result<()> {
        if self.settled.get() {
            return Err(LatticeError::Logic("the lattice is settled"));
        }
        let previous_length = match self.input.as_mut() {
            Some(buffer) => {
                let previous_length = buffer.length();
                buffer.append(input)?;
                Some(previous_length)
            }
            None => {
                self.input = Some(input);
                None
            }
        };

        match self.build_step() {
            Ok(step) => {
                debug!(
                    step = self.steps.len(),
                    nodes = step.nodes().len(),
                    input_tail = step.input_tail(),
                    "pushed input fragment"
                );
                self.steps.push(step);
                Ok(())
            }
            Err(error) => {
                self.restore_input(previous_length)?;
                Err(error)
            }
        }
    }

    /// Close the lattice with an EOS node following the last step.
    ///
    /// Returns the EOS node and its preceding edge costs. The steps are not
    /// modified, so calling this again yields an equal result, but the lattice
    /// accepts no further input.
    ///
    /// Fails with [`LatticeError::InvalidArgument`] if no node of the last step
    /// connects to EOS, or if a connection is missing under
    /// [`MissingConnection::Reject`].
    pub fn settle(&self) -> Result<(Node<'v>, Rc<[i32]>)> {
        let last_step_index = self.steps.len() - 1;
        let last_step = &self.steps[last_step_index];

        let edge_costs = self.preceding_edge_costs(last_step, &EntryView::BOS_EOS)?;
        let (best, best_cost) = best_preceding_node(last_step, &edge_costs);
        if best_cost == INFINITE_COST {
            return Err(LatticeError::invalid_argument(
                "no node of the last step connects to EOS",
            ));
        }

        let path_cost = add_cost(best_cost, EntryView::BOS_EOS.cost());
        debug!(
            preceding_step = last_step_index,
            best_preceding_node = best,
            path_cost,
            "settled lattice"
        );
        self.settled.set(true);
        let eos = Node::eos(last_step_index, Rc::clone(&edge_costs), best, path_cost);
        Ok((eos, edge_costs))
    }

    fn build_step(&self) -> Result<Step<'v>> {
        let vocabulary = self.vocabulary;
        let buffer = self
            .input
            .as_ref()
            .ok_or_else(|| LatticeError::invalid_argument("no input has been pushed"))?;
        let input_length = buffer.length();

        let mut nodes = Vec::new();
        for (step_index, step) in self.steps.iter().enumerate() {
            let key = buffer.create_subrange(step.input_tail(), input_length - step.input_tail())?;
            for entry in vocabulary.find_entries(&key) {
                let edge_costs = self.preceding_edge_costs(step, &entry)?;
                let (best, best_cost) = best_preceding_node(step, &edge_costs);
                let path_cost = add_cost(best_cost, entry.cost());
                nodes.push(Node::new(
                    &entry,
                    nodes.len(),
                    step_index,
                    edge_costs,
                    best,
                    path_cost,
                ));
            }
        }

        if nodes.is_empty() {
            warn!(step = self.steps.len(), "no node is found for the input");
            return Err(LatticeError::invalid_argument(
                "no node is found for the input",
            ));
        }
        if nodes.iter().all(|node| node.path_cost() == INFINITE_COST) {
            warn!(step = self.steps.len(), "no reachable node for the input");
        }
        Ok(Step::new(input_length, nodes))
    }

    fn preceding_edge_costs(&self, step: &Step<'v>, entry: &EntryView<'_>) -> Result<Rc<[i32]>> {
        step.nodes()
            .iter()
            .map(|node| match self.vocabulary.find_connection(node, entry) {
                Some(connection) => Ok(connection.cost()),
                None => match self.options.missing_connection {
                    MissingConnection::Unreachable => Ok(INFINITE_COST),
                    MissingConnection::Reject => Err(LatticeError::invalid_argument(format!(
                        "no connection from node {} of the step ending at offset {}",
                        node.index_in_step(),
                        step.input_tail()
                    ))),
                },
            })
            .collect()
    }

    fn restore_input(&mut self, previous_length: Option<usize>) -> Result<()> {
        self.input = match (self.input.take(), previous_length) {
            (Some(buffer), Some(length)) => Some(buffer.create_subrange(0, length)?),
            _ => None,
        };
        Ok(())
    }
}

/// The first predecessor minimising `path_cost + edge cost`, and that minimum.
fn best_preceding_node(step: &Step<'_>, edge_costs: &[i32]) -> (usize, i32) {
    let mut best = (0, INFINITE_COST);
    for (index, (node, &edge_cost)) in step.nodes().iter().zip(edge_costs).enumerate() {
        let cost = add_cost(node.path_cost(), edge_cost);
        if index == 0 || cost < best.1 {
            best = (index, cost);
        }
    }
    best
}
