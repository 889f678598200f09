// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Input keys.
//!
//! An [`Input`] is an opaque, comparable, hashable and sliceable key. The
//! lattice concatenates pushed fragments into one buffer and hands subranges
//! of it to the vocabulary, so the only operations it needs are length,
//! subrange and append.
//!
//! Two variants are built in:
//! - [`StringInput`]: an owned string buffer, sliced by byte offsets
//! - [`CustomInput`]: a boxed [`InputBackend`] supplied by the caller, for keys
//!   backed by external storage (a trie cursor, an interned symbol table, ...)
//!
//! # Example
//!
//! ```
//! use word_lattice::Input;
//!
//! let mut input = Input::from("[HakataTosu]");
//! input.append(Input::from("[TosuOmuta]")).unwrap();
//! assert_eq!(input.length(), 23);
//!
//! let tail = input.create_subrange(12, 11).unwrap();
//! assert_eq!(tail, Input::from("[TosuOmuta]"));
//! ```

pub mod custom;
pub mod string;

pub use custom::{CustomInput, InputBackend};
pub use string::StringInput;

use crate::error::{LatticeError, Result};
use std::hash::{Hash, Hasher};

/// A key fragment pushed into a lattice, or a key looked up in a vocabulary.
#[derive(Debug, Clone)]
pub enum Input {
    /// An owned string buffer.
    String(StringInput),
    /// A caller-defined key.
    Custom(CustomInput),
}

impl Input {
    /// Length of the key, in the variant's own units (bytes for strings).
    pub fn length(&self) -> usize {
        match self {
            Input::String(input) => input.length(),
            Input::Custom(input) => input.length(),
        }
    }

    /// Check whether the key is empty.
    pub fn is_empty(&self) -> bool {
        self.length() == 0
    }

    /// Create a new key covering `length` units starting at `offset`.
    ///
    /// Fails with [`LatticeError::OutOfRange`] when the range exceeds the key.
    pub fn create_subrange(&self, offset: usize, length: usize) -> Result<Input> {
        match self {
            Input::String(input) => input.create_subrange(offset, length).map(Input::String),
            Input::Custom(input) => input.create_subrange(offset, length).map(Input::Custom),
        }
    }

    /// Append another key of the same variant, taking ownership of it.
    ///
    /// Fails with [`LatticeError::InvalidArgument`] when the variants differ;
    /// `self` is left untouched in that case.
    pub fn append(&mut self, another: Input) -> Result<()> {
        match (self, another) {
            (Input::String(input), Input::String(another)) => {
                input.append(another);
                Ok(())
            }
            (Input::Custom(input), Input::Custom(another)) => input.append(another),
            _ => Err(LatticeError::invalid_argument(
                "cannot append inputs of different variants",
            )),
        }
    }

    /// The string variant, if this is one.
    pub fn as_string(&self) -> Option<&StringInput> {
        match self {
            Input::String(input) => Some(input),
            Input::Custom(_) => None,
        }
    }

    /// The custom variant, if this is one.
    pub fn as_custom(&self) -> Option<&CustomInput> {
        match self {
            Input::String(_) => None,
            Input::Custom(input) => Some(input),
        }
    }
}

impl PartialEq for Input {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Input::String(one), Input::String(another)) => one == another,
            (Input::Custom(one), Input::Custom(another)) => one == another,
            _ => false,
        }
    }
}

impl Eq for Input {}

impl Hash for Input {
    fn hash<H: Hasher>(&self, state: &mut H) {
        std::mem::discriminant(self).hash(state);
        match self {
            Input::String(input) => input.hash(state),
            Input::Custom(input) => input.hash(state),
        }
    }
}

impl From<&str> for Input {
    fn from(value: &str) -> Self {
        Input::String(StringInput::new(value))
    }
}

impl From<String> for Input {
    fn from(value: String) -> Self {
        Input::String(StringInput::new(value))
    }
}

impl From<StringInput> for Input {
    fn from(value: StringInput) -> Self {
        Input::String(value)
    }
}

impl From<CustomInput> for Input {
    fn from(value: CustomInput) -> Self {
        Input::Custom(value)
    }
}
