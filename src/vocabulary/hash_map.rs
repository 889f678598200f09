// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! In-memory vocabulary backed by hash maps.
//!
//! Entries are looked up by input key. Connections are looked up by the
//! *entry* keys of the origin node and the destination entry, with `None`
//! standing for the BOS/EOS sentinel.
//!
//! # Example
//!
//! ```
//! use word_lattice::{Entry, HashMapVocabulary, Input, Lattice};
//!
//! let vocabulary = HashMapVocabulary::new(
//!     vec![(Input::from("a"), vec![Entry::new("A", "alpha", 10)])],
//!     vec![
//!         ((None, Some(Input::from("A"))), 1),
//!         ((Some(Input::from("A")), None), 2),
//!     ],
//! );
//!
//! let mut lattice = Lattice::new(&vocabulary);
//! lattice.push_back(Input::from("a")).unwrap();
//! let (eos, _) = lattice.settle().unwrap();
//! assert_eq!(eos.path_cost(), 13);
//! ```

use crate::input::Input;
use crate::lattice::Node;
use crate::vocabulary::{Connection, Entry, EntryView, Vocabulary};
use std::collections::HashMap;

/// Slot used for the BOS/EOS sentinel in the connection table.
const BOS_EOS_ID: usize = 0;

/// A vocabulary holding all entries and connection costs in memory.
#[derive(Debug, Default)]
pub struct HashMapVocabulary {
    entries: HashMap<Input, Vec<Entry>>,
    /// Entry keys interned to small ids; id 0 is the sentinel.
    key_ids: HashMap<Input, usize>,
    connections: HashMap<(usize, usize), i32>,
}

impl HashMapVocabulary {
    /// Build a vocabulary.
    ///
    /// # Arguments
    ///
    /// * `entries` - input key and the entries it can become
    /// * `connections` - (origin entry key, destination entry key) and the cost
    ///   of that transition; `None` is the BOS/EOS sentinel
    ///
    /// Later duplicates replace earlier ones.
    pub fn new(
        entries: impl IntoIterator<Item = (Input, Vec<Entry>)>,
        connections: impl IntoIterator<Item = ((Option<Input>, Option<Input>), i32)>,
    ) -> Self {
        let mut vocabulary = Self {
            entries: entries.into_iter().collect(),
            key_ids: HashMap::new(),
            connections: HashMap::new(),
        };
        for ((from, to), cost) in connections {
            let from = vocabulary.intern(from);
            let to = vocabulary.intern(to);
            vocabulary.connections.insert((from, to), cost);
        }
        vocabulary
    }

    /// Number of input keys with entries.
    pub fn key_count(&self) -> usize {
        self.entries.len()
    }

    /// Number of connections.
    pub fn connection_count(&self) -> usize {
        self.connections.len()
    }

    fn intern(&mut self, key: Option<Input>) -> usize {
        let Some(key) = key else {
            return BOS_EOS_ID;
        };
        let next_id = self.key_ids.len() + 1;
        *self.key_ids.entry(key).or_insert(next_id)
    }

    fn id_of(&self, key: Option<&Input>) -> Option<usize> {
        match key {
            None => Some(BOS_EOS_ID),
            Some(key) => self.key_ids.get(key).copied(),
        }
    }
}

impl Vocabulary for HashMapVocabulary {
    fn find_entries(&self, key: &Input) -> Vec<EntryView<'_>> {
        self.entries
            .get(key)
            .map(|entries| entries.iter().map(Entry::as_view).collect())
            .unwrap_or_default()
    }

    fn find_connection(&self, from: &Node<'_>, to: &EntryView<'_>) -> Option<Connection> {
        let from = self.id_of(from.key())?;
        let to = self.id_of(to.key())?;
        self.connections
            .get(&(from, to))
            .copied()
            .map(Connection::new)
    }
}
