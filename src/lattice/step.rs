// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Lattice steps.

use crate::lattice::Node;
use std::rc::Rc;

/// The nodes ending after a fixed number of pushed fragments.
///
/// `input_tail` is the length of the concatenated input consumed up to this
/// step; tokens starting after this step are looked up from that offset.
#[derive(Debug, Clone)]
pub struct Step<'v> {
    input_tail: usize,
    nodes: Vec<Node<'v>>,
}

impl<'v> Step<'v> {
    pub(crate) fn new(input_tail: usize, nodes: Vec<Node<'v>>) -> Self {
        Self { input_tail, nodes }
    }

    /// Step 0: a single BOS node.
    pub(crate) fn bos() -> Self {
        Self::new(0, vec![Node::bos(Rc::from(Vec::new()))])
    }

    pub fn input_tail(&self) -> usize {
        self.input_tail
    }

    pub fn nodes(&self) -> &[Node<'v>] {
        &self.nodes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bos_step() {
        let step = Step::bos();
        assert_eq!(step.input_tail(), 0);
        assert_eq!(step.nodes().len(), 1);
        assert!(step.nodes()[0].is_bos());
    }
}
