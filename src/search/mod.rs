// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Lazy N-best path search.
//!
//! After [`Lattice::settle`] the path cost of every node is the exact cost of
//! the cheapest path from BOS to it. The search runs backward from EOS and uses
//! those costs as an exact completion estimate, so it never materialises more
//! of the search space than the paths actually requested.
//!
//! # Algorithm
//!
//! The queue holds [caps](Cap): EOS ends of paths, ordered by the cost of
//! their cheapest completion. It is seeded with one cap per predecessor of
//! EOS. Each advance:
//!
//! 1. pops the cheapest cap;
//! 2. completes it toward BOS by following best predecessors, and at every
//!    node on the way queues one cap per *other* predecessor;
//! 3. yields the completed path, whose cost is the cap's whole path cost.
//!
//! Every full path is yielded exactly once, in non-decreasing cost order.
//! Among equal costs caps are taken in the order they were queued.
//!
//! A [`Constraint`] prunes the search: a cap whose tail cannot be the EOS end
//! of a matching path is never queued, and a popped cap whose best completion
//! stops matching is discarded (its already-queued alternatives survive).
//!
//! # Example
//!
//! ```
//! use word_lattice::{Constraint, Entry, HashMapVocabulary, Input, Lattice, NBestIterator};
//!
//! let vocabulary = HashMapVocabulary::new(
//!     vec![(Input::from("a"), vec![Entry::new("A", 1, 5), Entry::new("A", 2, 7)])],
//!     vec![
//!         ((None, Some(Input::from("A"))), 0),
//!         ((Some(Input::from("A")), None), 0),
//!     ],
//! );
//! let mut lattice = Lattice::new(&vocabulary);
//! lattice.push_back(Input::from("a")).unwrap();
//! let (eos, _) = lattice.settle().unwrap();
//!
//! let costs: Vec<i32> = NBestIterator::new(&lattice, eos, Constraint::empty())
//!     .unwrap()
//!     .map(|path| path.cost())
//!     .collect();
//! assert_eq!(costs, vec![5, 7]);
//! ```

pub mod cap;
pub mod path;
pub mod statistics;

pub use cap::Cap;
pub use path::Path;
pub use statistics::{Counters, SearchStatistics};

use crate::constraint::Constraint;
use crate::error::{LatticeError, Result};
use crate::lattice::{add_cost, Lattice, Node, INFINITE_COST};
use cap::QueuedCap;
use std::collections::BinaryHeap;
use std::fmt;
use std::iter::FusedIterator;
use std::rc::Rc;
use tracing::trace;

#[derive(Debug, Default)]
enum Position<'v> {
    Unstarted,
    At(Path<'v>),
    #[default]
    Exhausted,
}

/// Iterator over the paths of a settled lattice, cheapest first.
///
/// The iterator borrows the lattice for its whole lifetime and owns its
/// constraint. [`NBestIterator::default`] is an exhausted iterator, equal to
/// every other exhausted iterator.
#[derive(Default)]
pub struct NBestIterator<'l, 'v> {
    lattice: Option<&'l Lattice<'v>>,
    eos_node: Option<Node<'v>>,
    constraint: Constraint<'v>,
    caps: BinaryHeap<QueuedCap<'v>>,
    next_sequence: u64,
    position: Position<'v>,
    /// The path the next advance will yield.
    upcoming: Option<Path<'v>>,
    index: usize,
    statistics: SearchStatistics,
}

impl<'l, 'v> NBestIterator<'l, 'v> {
    /// Start a search over `lattice`.
    ///
    /// # Arguments
    ///
    /// * `lattice` - the lattice to search
    /// * `eos_node` - the EOS node returned by [`Lattice::settle`]
    /// * `constraint` - the pattern every yielded path must match
    ///
    /// The first path is computed eagerly, so [`has_next`](Self::has_next) is
    /// exact. Fails with [`LatticeError::InvalidArgument`] if `eos_node` does
    /// not follow a step of `lattice`.
    pub fn new(
        lattice: &'l Lattice<'v>,
        eos_node: Node<'v>,
        constraint: Constraint<'v>,
    ) -> Result<Self> {
        let preceding_step = eos_node.preceding_step().ok_or_else(|| {
            LatticeError::invalid_argument("the EOS node does not follow any step")
        })?;
        let preceding_nodes = lattice.nodes_at(preceding_step)?;
        let edge_costs = Rc::clone(eos_node.preceding_edge_costs_handle());
        check_edge_costs(preceding_nodes, &edge_costs)?;

        let mut iterator = Self {
            lattice: Some(lattice),
            eos_node: Some(eos_node.clone()),
            constraint,
            position: Position::Unstarted,
            ..Self::default()
        };

        for (preceding_node, &edge_cost) in preceding_nodes.iter().zip(edge_costs.iter()) {
            let base = add_cost(eos_node.node_cost(), edge_cost);
            let whole_path_cost = add_cost(base, preceding_node.path_cost());
            if whole_path_cost == INFINITE_COST {
                continue;
            }
            iterator.offer(Cap::new(
                vec![eos_node.clone(), preceding_node.clone()],
                add_cost(base, preceding_node.node_cost()),
                whole_path_cost,
            ));
        }

        iterator.upcoming = iterator.open_next()?;
        Ok(iterator)
    }

    /// Move to the next path and return it.
    ///
    /// Fails with [`LatticeError::Logic`] if there is no next path. Any
    /// failure leaves the iterator exhausted.
    pub fn advance(&mut self) -> Result<&Path<'v>> {
        let Some(path) = self.upcoming.take() else {
            self.position = Position::Exhausted;
            return Err(LatticeError::Logic("advanced past the last path"));
        };
        match self.open_next() {
            Ok(upcoming) => self.upcoming = upcoming,
            Err(error) => {
                // Popped caps are gone, so the search cannot resume.
                self.caps.clear();
                self.position = Position::Exhausted;
                return Err(error);
            }
        }

        self.index += 1;
        self.statistics.increment_counter(Counters::PathsYielded);
        trace!(index = self.index, cost = path.cost(), "yielded path");
        self.position = Position::At(path);
        self.current()
    }

    /// The path most recently advanced to.
    ///
    /// Fails with [`LatticeError::Logic`] before the first advance and after
    /// exhaustion.
    pub fn current(&self) -> Result<&Path<'v>> {
        match &self.position {
            Position::At(path) => Ok(path),
            Position::Unstarted => Err(LatticeError::Logic("the iterator has not been advanced")),
            Position::Exhausted => Err(LatticeError::Logic("the iterator is exhausted")),
        }
    }

    /// The path the next advance will yield, without advancing.
    ///
    /// Fails with [`LatticeError::Logic`] if there is no next path.
    pub fn peek(&self) -> Result<&Path<'v>> {
        self.upcoming
            .as_ref()
            .ok_or(LatticeError::Logic("no path follows"))
    }

    pub fn has_next(&self) -> bool {
        self.upcoming.is_some()
    }

    /// True when there is neither a current nor a next path.
    pub fn is_exhausted(&self) -> bool {
        !matches!(self.position, Position::At(_)) && self.upcoming.is_none()
    }

    pub fn eos_node(&self) -> Option<&Node<'v>> {
        self.eos_node.as_ref()
    }

    pub fn constraint(&self) -> &Constraint<'v> {
        &self.constraint
    }

    pub fn statistics(&self) -> &SearchStatistics {
        &self.statistics
    }

    /// Queue `cap` if its tail can still match the constraint.
    fn offer(&mut self, cap: Cap<'v>) {
        if !self.constraint.matches_tail(cap.tail_path()) {
            self.statistics
                .increment_counter(Counters::CapsPrunedByConstraint);
            return;
        }
        trace!(
            whole_path_cost = cap.whole_path_cost(),
            tail_length = cap.tail_path().len(),
            "queued cap"
        );
        self.statistics.increment_counter(Counters::CapsQueued);
        self.caps.push(QueuedCap {
            cap,
            sequence: self.next_sequence,
        });
        self.next_sequence += 1;
    }

    /// Pop caps until one completes to a matching path.
    fn open_next(&mut self) -> Result<Option<Path<'v>>> {
        let Some(lattice) = self.lattice else {
            return Ok(None);
        };
        while let Some(QueuedCap { cap, .. }) = self.caps.pop() {
            let whole_path_cost = cap.whole_path_cost();
            let mut tail_path_cost = cap.tail_path_cost();
            let mut tail_path = cap.into_tail_path();

            if self.complete(lattice, &mut tail_path, &mut tail_path_cost)? {
                tail_path.reverse();
                return Ok(Some(Path::new(tail_path, whole_path_cost)));
            }
            self.statistics.increment_counter(Counters::CapsDiscarded);
            trace!(whole_path_cost, "discarded cap");
        }
        Ok(None)
    }

    /// Extend `tail_path` to BOS through best predecessors, queueing the
    /// alternatives passed on the way.
    ///
    /// Returns false if the extended tail stops matching the constraint.
    fn complete(
        &mut self,
        lattice: &'l Lattice<'v>,
        tail_path: &mut Vec<Node<'v>>,
        tail_path_cost: &mut i32,
    ) -> Result<bool> {
        loop {
            let Some(node) = tail_path.last() else {
                return Ok(false);
            };
            let (Some(preceding_step), Some(best)) =
                (node.preceding_step(), node.best_preceding_node())
            else {
                // BOS
                return Ok(true);
            };
            let edge_costs = Rc::clone(node.preceding_edge_costs_handle());
            let preceding_nodes = lattice.nodes_at(preceding_step)?;
            check_edge_costs(preceding_nodes, &edge_costs)?;

            for (index, (preceding_node, &edge_cost)) in
                preceding_nodes.iter().zip(edge_costs.iter()).enumerate()
            {
                if index == best {
                    continue;
                }
                let base = add_cost(*tail_path_cost, edge_cost);
                let whole_path_cost = add_cost(base, preceding_node.path_cost());
                if whole_path_cost == INFINITE_COST {
                    continue;
                }
                let mut alternative = tail_path.clone();
                alternative.push(preceding_node.clone());
                self.offer(Cap::new(
                    alternative,
                    add_cost(base, preceding_node.node_cost()),
                    whole_path_cost,
                ));
            }

            let best_node = preceding_nodes.get(best).ok_or(LatticeError::OutOfRange {
                index: best,
                len: preceding_nodes.len(),
            })?;
            *tail_path_cost = add_cost(
                add_cost(*tail_path_cost, edge_costs[best]),
                best_node.node_cost(),
            );
            tail_path.push(best_node.clone());
            if !self.constraint.matches_tail(tail_path) {
                return Ok(false);
            }
        }
    }
}

fn check_edge_costs(preceding_nodes: &[Node<'_>], edge_costs: &[i32]) -> Result<()> {
    if preceding_nodes.len() == edge_costs.len() {
        Ok(())
    } else {
        Err(LatticeError::invalid_argument(format!(
            "{} edge costs for a step of {} nodes",
            edge_costs.len(),
            preceding_nodes.len()
        )))
    }
}

impl<'v> Iterator for NBestIterator<'_, 'v> {
    type Item = Path<'v>;

    fn next(&mut self) -> Option<Path<'v>> {
        self.advance().ok().cloned()
    }
}

impl FusedIterator for NBestIterator<'_, '_> {}

/// Exhausted iterators are all equal. Otherwise iterators are equal when they
/// search the same lattice, from equal EOS nodes, under equal constraints, and
/// have advanced equally far.
impl PartialEq for NBestIterator<'_, '_> {
    fn eq(&self, other: &Self) -> bool {
        match (self.is_exhausted(), other.is_exhausted()) {
            (true, true) => true,
            (false, false) => {
                let same_lattice = match (self.lattice, other.lattice) {
                    (Some(one), Some(another)) => std::ptr::eq(one, another),
                    _ => false,
                };
                same_lattice
                    && self.eos_node == other.eos_node
                    && self.constraint == other.constraint
                    && self.index == other.index
            }
            _ => false,
        }
    }
}

impl fmt::Debug for NBestIterator<'_, '_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NBestIterator")
            .field("index", &self.index)
            .field("queued_caps", &self.caps.len())
            .field("has_next", &self.has_next())
            .field("exhausted", &self.is_exhausted())
            .finish()
    }
}
