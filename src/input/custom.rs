// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Caller-defined inputs.
//!
//! A [`CustomInput`] wraps a boxed [`InputBackend`]. The backend plays the role
//! of an opaque context plus its operations: it reports its length, compares
//! and hashes itself, clones itself, produces subranges and absorbs appended
//! backends of its own type. Subranges and clones are independent backends
//! released by `Drop` when the owning input goes away.
//!
//! # Example
//!
//! ```
//! use std::any::Any;
//! use word_lattice::input::{CustomInput, InputBackend};
//! use word_lattice::{Input, LatticeError, Result};
//!
//! #[derive(Debug, Clone, PartialEq, Hash)]
//! struct Symbols(Vec<u32>);
//!
//! impl InputBackend for Symbols {
//!     fn length(&self) -> usize { self.0.len() }
//!     fn equal_to(&self, another: &dyn InputBackend) -> bool {
//!         another.as_any().downcast_ref::<Self>() == Some(self)
//!     }
//!     fn hash_value(&self) -> u64 { self.0.iter().map(|&s| u64::from(s)).sum() }
//!     fn clone_backend(&self) -> Box<dyn InputBackend> { Box::new(self.clone()) }
//!     fn create_subrange(&self, offset: usize, length: usize) -> Result<Box<dyn InputBackend>> {
//!         self.0
//!             .get(offset..offset + length)
//!             .map(|s| Box::new(Symbols(s.to_vec())) as Box<dyn InputBackend>)
//!             .ok_or(LatticeError::OutOfRange { index: offset + length, len: self.0.len() })
//!     }
//!     fn append(&mut self, another: Box<dyn InputBackend>) -> Result<()> {
//!         let another = another
//!             .into_any()
//!             .downcast::<Self>()
//!             .map_err(|_| LatticeError::InvalidArgument("not symbols".into()))?;
//!         self.0.extend(another.0);
//!         Ok(())
//!     }
//!     fn as_any(&self) -> &dyn Any { self }
//!     fn into_any(self: Box<Self>) -> Box<dyn Any> { self }
//! }
//!
//! let mut input = Input::from(CustomInput::new(Symbols(vec![1, 2])));
//! input.append(Input::from(CustomInput::new(Symbols(vec![3])))).unwrap();
//! assert_eq!(input.length(), 3);
//! assert_eq!(
//!     input.create_subrange(1, 2).unwrap(),
//!     Input::from(CustomInput::new(Symbols(vec![2, 3])))
//! );
//! ```

use crate::error::{LatticeError, Result};
use std::any::Any;
use std::fmt;
use std::hash::{Hash, Hasher};

/// Operations a caller-defined key must provide.
///
/// `equal_to` and `hash_value` must be consistent with each other: backends
/// that compare equal must hash to the same value.
pub trait InputBackend: fmt::Debug {
    /// Length in the backend's own units.
    fn length(&self) -> usize;

    /// Compare with another backend, which may be of a different type.
    fn equal_to(&self, another: &dyn InputBackend) -> bool;

    fn hash_value(&self) -> u64;

    fn clone_backend(&self) -> Box<dyn InputBackend>;

    /// Create an independent backend covering `offset..offset + length`.
    fn create_subrange(&self, offset: usize, length: usize) -> Result<Box<dyn InputBackend>>;

    /// Absorb another backend.
    ///
    /// Only called with a backend of the same concrete type; an implementation
    /// may still reject it with [`LatticeError::InvalidArgument`].
    fn append(&mut self, another: Box<dyn InputBackend>) -> Result<()>;

    fn as_any(&self) -> &dyn Any;

    fn into_any(self: Box<Self>) -> Box<dyn Any>;
}

/// An input whose behaviour is supplied by an [`InputBackend`].
#[derive(Debug)]
pub struct CustomInput {
    backend: Box<dyn InputBackend>,
}

impl CustomInput {
    pub fn new(backend: impl InputBackend + 'static) -> Self {
        Self::from_boxed(Box::new(backend))
    }

    pub fn from_boxed(backend: Box<dyn InputBackend>) -> Self {
        Self { backend }
    }

    pub fn backend(&self) -> &dyn InputBackend {
        self.backend.as_ref()
    }

    /// The backend as its concrete type, if it is a `T`.
    pub fn downcast_ref<T: 'static>(&self) -> Option<&T> {
        self.backend.as_any().downcast_ref::<T>()
    }

    pub fn length(&self) -> usize {
        self.backend.length()
    }

    pub fn create_subrange(&self, offset: usize, length: usize) -> Result<CustomInput> {
        self.backend
            .create_subrange(offset, length)
            .map(CustomInput::from_boxed)
    }

    /// Append another custom input backed by the same concrete type.
    pub fn append(&mut self, another: CustomInput) -> Result<()> {
        if Any::type_id(self.backend.as_any()) != Any::type_id(another.backend.as_any()) {
            return Err(LatticeError::invalid_argument(
                "cannot append custom inputs with different backends",
            ));
        }
        self.backend.append(another.backend)
    }
}

impl Clone for CustomInput {
    fn clone(&self) -> Self {
        Self {
            backend: self.backend.clone_backend(),
        }
    }
}

impl PartialEq for CustomInput {
    fn eq(&self, other: &Self) -> bool {
        self.backend.equal_to(other.backend.as_ref())
    }
}

impl Eq for CustomInput {}

impl Hash for CustomInput {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(self.backend.hash_value());
    }
}
