// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Constraint pattern elements.

use crate::lattice::Node;

/// Wildcard span meaning "any number of nodes".
pub const UNBOUNDED: usize = usize::MAX;

/// How many path positions a wildcard consumes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WildcardSpan {
    Exactly(usize),
    /// Zero or more positions.
    Any,
}

impl From<usize> for WildcardSpan {
    fn from(span: usize) -> Self {
        if span == UNBOUNDED {
            WildcardSpan::Any
        } else {
            WildcardSpan::Exactly(span)
        }
    }
}

/// One unit of a constraint pattern.
#[derive(Debug, Clone, PartialEq)]
pub enum ConstraintElement<'v> {
    /// Matches exactly one path position holding an equal node.
    Node(Node<'v>),
    Wildcard(WildcardSpan),
}

impl<'v> ConstraintElement<'v> {
    pub fn node(node: Node<'v>) -> Self {
        ConstraintElement::Node(node)
    }

    /// A wildcard over `span` nodes, or over any number of nodes if `span` is
    /// [`UNBOUNDED`].
    pub fn wildcard(span: usize) -> Self {
        ConstraintElement::Wildcard(WildcardSpan::from(span))
    }

    /// True if this element, starting at `position` of a tail of length `len`,
    /// would need positions beyond the end of the tail.
    pub(crate) fn overflows(&self, position: usize, len: usize) -> bool {
        match self {
            ConstraintElement::Node(_) => position >= len,
            ConstraintElement::Wildcard(WildcardSpan::Exactly(span)) => {
                position.saturating_add(*span) > len
            }
            ConstraintElement::Wildcard(WildcardSpan::Any) => true,
        }
    }
}
