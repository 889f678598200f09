// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Lattice construction options.

/// What the lattice does when the vocabulary has no connection between a
/// preceding node and a candidate entry.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MissingConnection {
    /// Treat the edge as infinitely costly. A node with no finite edge is kept
    /// with a path cost of [`INFINITE_COST`](crate::INFINITE_COST) and never
    /// appears on a yielded path.
    #[default]
    Unreachable,

    /// Reject the input as soon as any required connection is missing.
    Reject,
}

/// Options for [`Lattice::with_options`](crate::Lattice::with_options).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LatticeOptions {
    pub missing_connection: MissingConnection,
}

impl LatticeOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn missing_connection(mut self, policy: MissingConnection) -> Self {
        self.missing_connection = policy;
        self
    }
}
