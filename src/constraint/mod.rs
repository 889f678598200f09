// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Path constraints.
//!
//! A constraint is a pattern of nodes and wildcards, written in BOS-first
//! order. Paths are presented to the matcher in reverse (EOS-first) order,
//! which is the order in which the N-best search discovers them.
//!
//! # Matching
//!
//! [`Constraint::matches`] accepts a reverse path iff the path can be split
//! into consecutive segments, one per pattern element:
//!
//! - a node element consumes one position holding an equal node;
//! - `wildcard(n)` consumes exactly `n` positions;
//! - `wildcard(UNBOUNDED)` consumes any number of positions, including none.
//!
//! [`Constraint::matches_tail`] accepts a reverse *tail*, the EOS end of a
//! path whose BOS end is not yet known, iff some such split exists in which the
//! trailing pattern elements consume the tail and the earliest of them may
//! continue into the unknown prefix. A tail that already reaches BOS must match
//! fully.
//!
//! Both walk the reversed pattern keeping the set of reachable path positions,
//! so matching is `O(pattern length × path length)`.
//!
//! # Example
//!
//! ```
//! use word_lattice::{Constraint, ConstraintElement, UNBOUNDED};
//! use word_lattice::{Entry, HashMapVocabulary, Input, Lattice};
//!
//! let vocabulary = HashMapVocabulary::new(
//!     vec![(Input::from("a"), vec![Entry::new("A", "a", 1)])],
//!     vec![
//!         ((None, Some(Input::from("A"))), 0),
//!         ((Some(Input::from("A")), None), 0),
//!     ],
//! );
//! let mut lattice = Lattice::new(&vocabulary);
//! lattice.push_back(Input::from("a")).unwrap();
//! let (eos, _) = lattice.settle().unwrap();
//!
//! let bos = lattice.nodes_at(0).unwrap()[0].clone();
//! let a = lattice.nodes_at(1).unwrap()[0].clone();
//! let reverse_path = [eos.clone(), a.clone(), bos.clone()];
//!
//! let constraint = Constraint::new(vec![
//!     ConstraintElement::node(bos),
//!     ConstraintElement::wildcard(UNBOUNDED),
//!     ConstraintElement::node(eos),
//! ]);
//! assert!(constraint.matches(&reverse_path));
//! assert!(constraint.matches_tail(&reverse_path[..2]));
//! ```

pub mod element;

pub use element::{ConstraintElement, WildcardSpan, UNBOUNDED};

use crate::lattice::Node;

/// A pattern that N-best paths must match.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Constraint<'v> {
    pattern: Vec<ConstraintElement<'v>>,
}

impl<'v> Constraint<'v> {
    /// Create a constraint from a BOS-first pattern.
    pub fn new(pattern: Vec<ConstraintElement<'v>>) -> Self {
        Self { pattern }
    }

    /// The constraint every path satisfies.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn pattern(&self) -> &[ConstraintElement<'v>] {
        &self.pattern
    }

    pub fn is_empty(&self) -> bool {
        self.pattern.is_empty()
    }

    /// True iff the complete `reverse_path` (EOS first) matches the pattern.
    pub fn matches(&self, reverse_path: &[Node<'_>]) -> bool {
        self.is_empty() || self.walk(reverse_path, false)
    }

    /// True iff `reverse_tail_path` (EOS first) can be the EOS end of some
    /// matching path.
    pub fn matches_tail(&self, reverse_tail_path: &[Node<'_>]) -> bool {
        if self.is_empty() {
            return true;
        }
        let reaches_bos = reverse_tail_path.last().is_some_and(Node::is_bos);
        self.walk(reverse_tail_path, !reaches_bos)
    }

    fn walk(&self, reverse_path: &[Node<'_>], partial: bool) -> bool {
        let len = reverse_path.len();
        let mut reachable = vec![false; len + 1];
        reachable[0] = true;

        for element in self.pattern.iter().rev() {
            let mut next = vec![false; len + 1];
            for position in (0..=len).filter(|&position| reachable[position]) {
                if partial && element.overflows(position, len) {
                    return true;
                }
                match element {
                    ConstraintElement::Node(node) => {
                        if position < len && *node == reverse_path[position] {
                            next[position + 1] = true;
                        }
                    }
                    ConstraintElement::Wildcard(WildcardSpan::Exactly(span)) => {
                        if let Some(end) = position.checked_add(*span).filter(|&end| end <= len) {
                            next[end] = true;
                        }
                    }
                    ConstraintElement::Wildcard(WildcardSpan::Any) => {
                        // Later positions are covered by this one.
                        next[position..].fill(true);
                        break;
                    }
                }
            }
            if !next.contains(&true) {
                return false;
            }
            reachable = next;
        }

        // The pattern is used up; a partial tail still has a prefix to match.
        !partial && reachable[len]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vocabulary::Entry;
    use std::rc::Rc;

    struct Fixture {
        entries: Vec<Entry>,
    }

    impl Fixture {
        fn new() -> Self {
            Self {
                entries: vec![
                    Entry::new("a", 'a', 1),
                    Entry::new("b", 'b', 2),
                    Entry::new("c", 'c', 3),
                ],
            }
        }

        /// BOS, a, b, c, EOS in reverse order.
        fn reverse_path(&self) -> Vec<Node<'_>> {
            let mut forward = vec![Node::bos(Rc::from(Vec::new()))];
            for (index, entry) in self.entries.iter().enumerate() {
                forward.push(Node::new(&entry.as_view(), 0, index, Rc::from(vec![0]), 0, 0));
            }
            forward.push(Node::eos(3, Rc::from(vec![0]), 0, 0));
            forward.reverse();
            forward
        }
    }

    fn node<'v>(reverse_path: &[Node<'v>], forward_index: usize) -> ConstraintElement<'v> {
        ConstraintElement::node(reverse_path[reverse_path.len() - 1 - forward_index].clone())
    }

    #[test]
    fn test_empty_matches_everything() {
        let fixture = Fixture::new();
        let path = fixture.reverse_path();
        let constraint = Constraint::empty();
        assert!(constraint.matches(&path));
        assert!(constraint.matches(&[]));
        assert!(constraint.matches_tail(&path[..1]));
    }

    #[test]
    fn test_exact_pattern() {
        let fixture = Fixture::new();
        let path = fixture.reverse_path();
        let constraint = Constraint::new((0..5).map(|index| node(&path, index)).collect());

        assert!(constraint.matches(&path));
        for len in 1..=path.len() {
            assert!(constraint.matches_tail(&path[..len]), "tail of {len}");
        }
        assert!(!constraint.matches(&path[..4]));
    }

    #[test]
    fn test_exact_pattern_rejects_wrong_node() {
        let fixture = Fixture::new();
        let path = fixture.reverse_path();
        // BOS, a, c, EOS
        let constraint = Constraint::new(vec![
            node(&path, 0),
            node(&path, 1),
            node(&path, 3),
            node(&path, 4),
        ]);
        assert!(!constraint.matches(&path));
        assert!(constraint.matches_tail(&path[..2]));
        assert!(!constraint.matches_tail(&path[..3]));
    }

    #[test]
    fn test_counted_wildcard() {
        let fixture = Fixture::new();
        let path = fixture.reverse_path();

        let three = Constraint::new(vec![node(&path, 0), ConstraintElement::wildcard(3), node(&path, 4)]);
        assert!(three.matches(&path));

        let two = Constraint::new(vec![node(&path, 0), ConstraintElement::wildcard(2), node(&path, 4)]);
        assert!(!two.matches(&path));
        // The tail EOS, c, b fits: the wildcard takes c and b, BOS is still to come.
        assert!(two.matches_tail(&path[..3]));
        // EOS, c, b, a cannot: a would have to be BOS.
        assert!(!two.matches_tail(&path[..4]));
    }

    #[test]
    fn test_unbounded_wildcard() {
        let fixture = Fixture::new();
        let path = fixture.reverse_path();

        let anything = Constraint::new(vec![ConstraintElement::wildcard(UNBOUNDED)]);
        assert!(anything.matches(&path));
        assert!(anything.matches(&[]));

        let through_b = Constraint::new(vec![
            node(&path, 0),
            ConstraintElement::wildcard(UNBOUNDED),
            node(&path, 2),
            ConstraintElement::wildcard(UNBOUNDED),
            node(&path, 4),
        ]);
        assert!(through_b.matches(&path));
        for len in 1..=path.len() {
            assert!(through_b.matches_tail(&path[..len]), "tail of {len}");
        }

        let twice_b = Constraint::new(vec![
            ConstraintElement::wildcard(UNBOUNDED),
            node(&path, 2),
            ConstraintElement::wildcard(UNBOUNDED),
            node(&path, 2),
            ConstraintElement::wildcard(UNBOUNDED),
        ]);
        assert!(!twice_b.matches(&path));
    }

    #[test]
    fn test_adjacent_unbounded_wildcards() {
        let fixture = Fixture::new();
        let path = fixture.reverse_path();
        let constraint = Constraint::new(vec![
            node(&path, 0),
            ConstraintElement::wildcard(UNBOUNDED),
            ConstraintElement::wildcard(UNBOUNDED),
            node(&path, 4),
        ]);
        assert!(constraint.matches(&path));
    }

    #[test]
    fn test_tail_reaching_bos_must_match_fully() {
        let fixture = Fixture::new();
        let path = fixture.reverse_path();
        // EOS, c, b, a, then something before BOS.
        let constraint = Constraint::new(vec![
            node(&path, 0),
            ConstraintElement::wildcard(1),
            ConstraintElement::wildcard(3),
            node(&path, 4),
        ]);
        assert!(!constraint.matches(&path));
        assert!(constraint.matches_tail(&path[..4]));
        assert!(!constraint.matches_tail(&path));
    }

    #[test]
    fn test_pattern_longer_than_tail_is_pending() {
        let fixture = Fixture::new();
        let path = fixture.reverse_path();
        let constraint = Constraint::new(vec![node(&path, 1), node(&path, 4)]);
        assert!(constraint.matches_tail(&path[..1]));
        assert!(!constraint.matches_tail(&path[..2]));
        // The pattern is used up by EOS, a, leaving BOS unmatched.
        assert!(!constraint.matches(&[path[0].clone(), path[3].clone(), path[4].clone()]));
    }
}
