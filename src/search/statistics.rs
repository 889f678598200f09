// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Search statistics
//!
//! Counters kept by an N-best iterator while it expands caps.

use strum::EnumCount;
use strum_macros::EnumCount as EnumCountMacro;

#[derive(EnumCountMacro, Debug, Copy, Clone, PartialEq, Eq)]
#[repr(u8)]
pub enum Counters {
    /// Caps pushed onto the queue.
    CapsQueued,
    /// Candidate caps rejected because their tail cannot match the constraint.
    CapsPrunedByConstraint,
    /// Popped caps whose best completion stopped matching the constraint.
    CapsDiscarded,
    PathsYielded,
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SearchStatistics {
    stats: [u64; Counters::COUNT],
}

impl SearchStatistics {
    pub fn new() -> Self {
        SearchStatistics::default()
    }

    /// Increment the specified counter by 1.
    pub(crate) fn increment_counter(&mut self, counter: Counters) {
        self.stats[counter as usize] += 1;
    }

    /// Get the current value of the specified counter.
    pub fn get(&self, counter: Counters) -> u64 {
        self.stats[counter as usize]
    }
}
