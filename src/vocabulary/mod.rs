// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Vocabulary entries, connections and the lookup capability.
//!
//! A vocabulary answers two questions for the lattice:
//! - which entries can a given input key become ([`Vocabulary::find_entries`])
//! - what it costs to move from one node to an entry ([`Vocabulary::find_connection`])
//!
//! Entries are returned as [`EntryView`]s borrowing the vocabulary's storage,
//! so nodes built from them live no longer than the vocabulary itself.

pub mod hash_map;

pub use hash_map::HashMapVocabulary;

use crate::input::Input;
use crate::lattice::Node;
use std::any::Any;
use std::fmt;

/// Dynamically typed payload carried by an entry.
pub type Value = dyn Any;

/// An owned vocabulary entry: a key, an optional payload and a cost.
pub struct Entry {
    key: Option<Input>,
    value: Option<Box<Value>>,
    cost: i32,
}

impl Entry {
    pub fn new(key: impl Into<Input>, value: impl Any, cost: i32) -> Self {
        Self {
            key: Some(key.into()),
            value: Some(Box::new(value)),
            cost,
        }
    }

    /// An entry with no payload. Connection tables only care about keys.
    pub fn key_only(key: impl Into<Input>, cost: i32) -> Self {
        Self {
            key: Some(key.into()),
            value: None,
            cost,
        }
    }

    /// An owned copy of the BOS/EOS sentinel.
    pub fn bos_eos() -> Self {
        Self {
            key: None,
            value: None,
            cost: 0,
        }
    }

    pub fn key(&self) -> Option<&Input> {
        self.key.as_ref()
    }

    pub fn value(&self) -> Option<&Value> {
        self.value.as_deref()
    }

    pub fn cost(&self) -> i32 {
        self.cost
    }

    pub fn as_view(&self) -> EntryView<'_> {
        EntryView::new(self.key(), self.value(), self.cost)
    }
}

impl fmt::Debug for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Entry")
            .field("key", &self.key)
            .field("has_value", &self.value.is_some())
            .field("cost", &self.cost)
            .finish()
    }
}

/// A non-owning projection of an entry.
#[derive(Clone, Copy)]
pub struct EntryView<'v> {
    key: Option<&'v Input>,
    value: Option<&'v Value>,
    cost: i32,
}

impl<'v> EntryView<'v> {
    /// The BOS/EOS sentinel: no key, no value, cost 0.
    pub const BOS_EOS: EntryView<'static> = EntryView {
        key: None,
        value: None,
        cost: 0,
    };

    pub const fn new(key: Option<&'v Input>, value: Option<&'v Value>, cost: i32) -> Self {
        Self { key, value, cost }
    }

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

    pub fn cost(&self) -> i32 {
        self.cost
    }

    pub fn is_bos_eos(&self) -> bool {
        self.key.is_none()
    }
}

impl fmt::Debug for EntryView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EntryView")
            .field("key", &self.key)
            .field("has_value", &self.value.is_some())
            .field("cost", &self.cost)
            .finish()
    }
}

/// The cost of moving from one node to an entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Connection {
    cost: i32,
}

impl Connection {
    pub const fn new(cost: i32) -> Self {
        Self { cost }
    }

    pub fn cost(&self) -> i32 {
        self.cost
    }
}

/// Entry and connection lookup consumed by the lattice.
///
/// Implementations may be backed by anything (hash maps, tries, external
/// stores); lookups are synchronous.
pub trait Vocabulary {
    /// All entries whose input key is `key`.
    fn find_entries(&self, key: &Input) -> Vec<EntryView<'_>>;

    /// The connection from `from` to `to`, or `None` if there is none.
    fn find_connection(&self, from: &Node<'_>, to: &EntryView<'_>) -> Option<Connection>;
}
