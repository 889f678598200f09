// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Word lattice with Viterbi cost propagation and lazy N-best search.
//!
//! A [`Lattice`] is built by pushing input fragments one at a time. Each push
//! looks up, in a [`Vocabulary`], every entry whose key is a suffix of the
//! input ending with the new fragment, and links it to the step where that
//! suffix starts. Nodes and connections carry additive costs, and each new
//! node records the cheapest way to reach it from BOS.
//!
//! Once the input is complete, [`Lattice::settle`] closes the lattice with an
//! EOS node, and an [`NBestIterator`] yields complete paths cheapest first,
//! optionally restricted by a [`Constraint`].
//!
//! # Architecture
//!
//! - [`input`]: the keys entries are looked up by, either strings or a custom
//!   backend.
//! - [`vocabulary`]: entries, connections, and the lookup trait, with an
//!   in-memory [`HashMapVocabulary`].
//! - [`lattice`]: steps of nodes and the forward Viterbi pass.
//! - [`constraint`]: node and wildcard patterns over paths.
//! - [`search`]: the N-best iterator and its statistics.
//!
//! # Lifetimes
//!
//! Nodes borrow keys and values from the vocabulary (`'v`); an iterator also
//! borrows the lattice (`'l`). The lattice cannot be pushed to while an
//! iterator over it is alive.
//!
//! # Example
//!
//! ```
//! use word_lattice::{Constraint, Entry, HashMapVocabulary, Input, Lattice, NBestIterator};
//!
//! let vocabulary = HashMapVocabulary::new(
//!     vec![
//!         (Input::from("ab"), vec![Entry::new("ab", "ab", 9)]),
//!         (Input::from("a"), vec![Entry::new("a", "a", 3)]),
//!         (Input::from("b"), vec![Entry::new("b", "b", 3)]),
//!     ],
//!     vec![
//!         ((None, Some(Input::from("ab"))), 0),
//!         ((None, Some(Input::from("a"))), 0),
//!         ((Some(Input::from("a")), Some(Input::from("b"))), 1),
//!         ((Some(Input::from("ab")), None), 0),
//!         ((Some(Input::from("b")), None), 0),
//!     ],
//! );
//!
//! let mut lattice = Lattice::new(&vocabulary);
//! lattice.push_back(Input::from("a")).unwrap();
//! lattice.push_back(Input::from("b")).unwrap();
//! let (eos, _) = lattice.settle().unwrap();
//!
//! let segmentations: Vec<(Vec<&str>, i32)> = NBestIterator::new(&lattice, eos, Constraint::empty())
//!     .unwrap()
//!     .map(|path| {
//!         let words = path
//!             .nodes()
//!             .iter()
//!             .filter_map(|node| node.value_as::<&str>().copied())
//!             .collect();
//!         (words, path.cost())
//!     })
//!     .collect();
//! assert_eq!(segmentations, vec![(vec!["a", "b"], 7), (vec!["ab"], 9)]);
//! ```

pub mod constraint;
pub mod error;
pub mod input;
pub mod lattice;
pub mod search;
pub mod vocabulary;

// Re-export commonly used types
pub use constraint::{Constraint, ConstraintElement, WildcardSpan, UNBOUNDED};
pub use error::{LatticeError, Result};
pub use input::{Input, StringInput};
pub use lattice::{Lattice, LatticeOptions, MissingConnection, Node, INFINITE_COST};
pub use search::{Cap, Counters, NBestIterator, Path, SearchStatistics};
pub use vocabulary::{Connection, Entry, EntryView, HashMapVocabulary, Value, Vocabulary};
