// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Search over caller-defined inputs and a caller-defined vocabulary.
//!
//! The input is a sequence of digits; the vocabulary groups adjacent digits
//! into numbers, with a penalty for every split.

mod common;

use common::init_tracing;
use std::any::Any;
use std::collections::HashMap;
use word_lattice::input::{CustomInput, InputBackend};
use word_lattice::{
    Connection, Constraint, Entry, EntryView, Input, Lattice, LatticeError, NBestIterator, Node,
    Result, Vocabulary,
};

#[derive(Debug, Clone, PartialEq)]
struct Digits(Vec<u32>);

impl InputBackend for Digits {
    fn length(&self) -> usize {
        self.0.len()
    }

    fn equal_to(&self, another: &dyn InputBackend) -> bool {
        another.as_any().downcast_ref::<Self>() == Some(self)
    }

    fn hash_value(&self) -> u64 {
        self.0
            .iter()
            .fold(0, |hash: u64, &digit| hash.wrapping_mul(31).wrapping_add(u64::from(digit)))
    }

    fn clone_backend(&self) -> Box<dyn InputBackend> {
        Box::new(self.clone())
    }

    fn create_subrange(&self, offset: usize, length: usize) -> Result<Box<dyn InputBackend>> {
        let end = offset
            .checked_add(length)
            .filter(|&end| end <= self.0.len())
            .ok_or(LatticeError::OutOfRange {
                index: offset.saturating_add(length),
                len: self.0.len(),
            })?;
        Ok(Box::new(Digits(self.0[offset..end].to_vec())))
    }

    fn append(&mut self, another: Box<dyn InputBackend>) -> Result<()> {
        let another = another
            .into_any()
            .downcast::<Self>()
            .map_err(|_| LatticeError::InvalidArgument("not digits".into()))?;
        self.0.extend(another.0);
        Ok(())
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn into_any(self: Box<Self>) -> Box<dyn Any> {
        self
    }
}

fn digits(values: &[u32]) -> Input {
    Input::from(CustomInput::new(Digits(values.to_vec())))
}

/// Numbers of up to three digits, each split costing `SPLIT_PENALTY`.
struct NumberVocabulary {
    entries: HashMap<Input, Vec<Entry>>,
}

const SPLIT_PENALTY: i32 = 2;

impl NumberVocabulary {
    fn new(costs: Vec<(Vec<u32>, i32)>) -> Self {
        let entries = costs
            .into_iter()
            .map(|(key, cost)| {
                let number = key.iter().fold(0, |number, &digit| number * 10 + digit);
                (digits(&key), vec![Entry::new(digits(&key), number, cost)])
            })
            .collect();
        Self { entries }
    }
}

impl Vocabulary for NumberVocabulary {
    fn find_entries(&self, key: &Input) -> Vec<EntryView<'_>> {
        self.entries
            .get(key)
            .map(|entries| entries.iter().map(Entry::as_view).collect())
            .unwrap_or_default()
    }

    fn find_connection(&self, from: &Node<'_>, to: &EntryView<'_>) -> Option<Connection> {
        if from.is_bos() || to.is_bos_eos() {
            Some(Connection::new(0))
        } else {
            Some(Connection::new(SPLIT_PENALTY))
        }
    }
}

fn vocabulary() -> NumberVocabulary {
    NumberVocabulary::new(vec![
        (vec![1], 5),
        (vec![2], 5),
        (vec![3], 5),
        (vec![1, 2], 8),
        (vec![2, 3], 11),
        (vec![1, 2, 3], 20),
    ])
}

fn numbers(path: &word_lattice::Path<'_>) -> Vec<u32> {
    path.nodes()
        .iter()
        .filter_map(|node| node.value_as::<u32>().copied())
        .collect()
}

#[test]
fn test_custom_segmentation() {
    init_tracing();
    let vocabulary = vocabulary();
    let mut lattice = Lattice::new(&vocabulary);
    for digit in 1..=3 {
        lattice.push_back(digits(&[digit])).unwrap();
    }
    assert_eq!(lattice.step_count(), 4);
    assert_eq!(lattice.input(), Some(&digits(&[1, 2, 3])));

    let (eos, _) = lattice.settle().unwrap();
    assert_eq!(eos.path_cost(), 15);

    let found: Vec<_> = NBestIterator::new(&lattice, eos, Constraint::empty())
        .unwrap()
        .map(|path| (numbers(&path), path.cost()))
        .collect();
    assert_eq!(
        found,
        vec![
            (vec![12, 3], 15),
            (vec![1, 23], 18),
            (vec![1, 2, 3], 19),
            (vec![123], 20),
        ]
    );
}

#[test]
fn test_multi_digit_fragment() {
    let vocabulary = vocabulary();
    let mut lattice = Lattice::new(&vocabulary);
    lattice.push_back(digits(&[1, 2])).unwrap();
    lattice.push_back(digits(&[3])).unwrap();

    let (eos, _) = lattice.settle().unwrap();
    let costs: Vec<_> = NBestIterator::new(&lattice, eos, Constraint::empty())
        .unwrap()
        .map(|path| path.cost())
        .collect();
    // "1" alone never ends at a step boundary.
    assert_eq!(costs, vec![15, 20]);
}

#[test]
fn test_string_fragment_after_custom_is_rejected() {
    let vocabulary = vocabulary();
    let mut lattice = Lattice::new(&vocabulary);
    lattice.push_back(digits(&[1])).unwrap();

    let result = lattice.push_back(Input::from("2"));
    assert!(matches!(result, Err(LatticeError::InvalidArgument(_))));
    assert_eq!(lattice.step_count(), 2);
    assert_eq!(lattice.input(), Some(&digits(&[1])));
}

#[test]
fn test_unknown_digit_is_rejected() {
    let vocabulary = vocabulary();
    let mut lattice = Lattice::new(&vocabulary);
    lattice.push_back(digits(&[1])).unwrap();
    assert!(lattice.push_back(digits(&[9])).is_err());
    assert_eq!(lattice.input(), Some(&digits(&[1])));
}
