// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! String-buffer input.

use crate::error::{LatticeError, Result};

/// An input backed by an owned `String`. Offsets and lengths are in bytes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct StringInput {
    value: String,
}

impl StringInput {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
        }
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
    }

    pub fn length(&self) -> usize {
        self.value.len()
    }

    /// Slice `length` bytes starting at `offset`.
    ///
    /// A range that splits a UTF-8 sequence is an invalid argument rather than
    /// out of range.
    pub fn create_subrange(&self, offset: usize, length: usize) -> Result<StringInput> {
        let end = offset
            .checked_add(length)
            .filter(|&end| end <= self.value.len())
            .ok_or(LatticeError::OutOfRange {
                index: offset.saturating_add(length),
                len: self.value.len(),
            })?;

        self.value
            .get(offset..end)
            .map(StringInput::new)
            .ok_or_else(|| {
                LatticeError::invalid_argument(format!(
                    "subrange {}..{} does not fall on character boundaries",
                    offset, end
                ))
            })
    }

    pub fn append(&mut self, another: StringInput) {
        self.value.push_str(&another.value);
    }
}
