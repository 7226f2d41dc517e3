// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Statistics
//!
//! Each advance fills a [`Tally`]; the [`Statistics`] held by the search context
//! adds it to the running totals and appends the generation's "+"/"-" counts.

use strum::EnumCount;
use strum_macros::{EnumCount as EnumCountMacro, EnumIter, IntoStaticStr};

use crate::engine::GenerationReport;

#[derive(Debug, EnumCountMacro, EnumIter, IntoStaticStr, Copy, Clone, PartialEq, Eq)]
#[repr(u8)]
pub enum Counters {
    /// Source staircases classified "+".
    Survivors,
    /// Source staircases classified "-".
    Retired,
    /// Shifted candidates, always admitted.
    ShiftAdmitted,
    /// Extended candidates that passed both tests.
    ExtendAdmitted,
    /// Extended candidates rejected by the descent-test.
    DescentSuperseded,
    /// Extended candidates rejected by the ascent-test.
    AscentSuperseded,
}

/// A fixed set of counters, one per [`Counters`] variant.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Tally {
    stats: [u64; Counters::COUNT],
}

impl Tally {
    pub fn increment(&mut self, counter: Counters) {
        self.stats[counter as usize] += 1;
    }

    pub fn get(&self, counter: Counters) -> u64 {
        self.stats[counter as usize]
    }

    pub fn add(&mut self, other: &Tally) {
        for (total, value) in self.stats.iter_mut().zip(other.stats) {
            *total += value;
        }
    }

    pub fn classification(&self) -> ClassificationCounts {
        ClassificationCounts {
            plus: self.get(Counters::Survivors),
            minus: self.get(Counters::Retired),
        }
    }
}

/// How the staircases of one generation were classified.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ClassificationCounts {
    pub plus: u64,
    pub minus: u64,
}

impl ClassificationCounts {
    pub fn total(&self) -> u64 {
        self.plus + self.minus
    }
}

#[derive(Debug, Default)]
pub struct Statistics {
    totals: Tally,
    /// Indexed by the generation of the classified staircases.
    per_generation: Vec<ClassificationCounts>,
}

impl Statistics {
    pub fn new() -> Statistics {
        Statistics::default()
    }

    /// Fold in the report of the advance that produced `report.generation`.
    ///
    /// That advance classified the staircases of `report.generation - 1`.
    pub fn record(&mut self, report: &GenerationReport) {
        debug_assert_eq!(report.generation, self.per_generation.len() + 1);
        self.totals.add(&report.tally);
        self.per_generation.push(report.counts());
    }

    /// Running total for `counter` over all generations so far.
    pub fn get(&self, counter: Counters) -> u64 {
        self.totals.get(counter)
    }

    /// Classification of the staircases of `generation`, once known.
    pub fn generation(&self, generation: usize) -> Option<ClassificationCounts> {
        self.per_generation.get(generation).copied()
    }

    pub fn generations(&self) -> &[ClassificationCounts] {
        &self.per_generation
    }
}
