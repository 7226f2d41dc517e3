// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Generation-advance engine.
//!
//! Data flows strictly forward: the pool of generation `g-1` is consumed to
//! produce the pool of generation `g`, and every staircase of `g-1` is
//! classified on the way.
//!
//! For each source staircase `rect`:
//!
//! 1. `rect.shifted()` is admitted unconditionally; shifting preserves
//!    extremality.
//! 2. `rect.extended()` is admitted unless the descent-test, or failing that
//!    the ascent-test with reference `(g-1, 1)`, says it is superseded.
//! 3. `rect` itself is classified by the ascent-test on `rect.extended()`
//!    with reference `(g, 0)`: superseded means "-" (extremal now, gone in
//!    the next generation), otherwise "+" (extremal for good). Only "+"
//!    staircases are emitted.
//!
//! Admission order follows the source pool, shifted before extended, so that
//! output is reproducible.

pub mod registry;

pub use registry::{Registry, Retention};

use std::fmt;

use strum_macros::Display;
use tracing::debug;

use crate::dominance::{ascent_superseded, descent_superseded};
use crate::error::{InvariantViolation, SearchError};
use crate::geometry::{Staircase, RETIRED_MARKER, SURVIVES_MARKER};
use crate::output::Emitter;
use crate::state::{ClassificationCounts, Counters, Tally};

/// Fate of a source staircase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum Classification {
    /// Remains extremal in every later generation.
    #[strum(serialize = "+")]
    Survives,
    /// Extremal in this generation, superseded in the next one.
    #[strum(serialize = "-")]
    Retired,
}

impl Classification {
    /// The marker written after a staircase's signature.
    pub fn marker(self) -> char {
        match self {
            Classification::Survives => SURVIVES_MARKER,
            Classification::Retired => RETIRED_MARKER,
        }
    }
}

/// Summary of one advance, from generation `generation - 1` to `generation`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationReport {
    pub generation: usize,
    /// Size of the pool that was consumed (generation `generation - 1`).
    pub source_size: usize,
    /// Size of the pool that was produced.
    pub pool_size: usize,
    pub tally: Tally,
}

impl GenerationReport {
    pub fn counts(&self) -> ClassificationCounts {
        self.tally.classification()
    }
}

impl fmt::Display for GenerationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let counts = self.counts();
        write!(
            f,
            "Gen: {} size={} plus={} minus={} total={}",
            self.generation,
            self.source_size,
            counts.plus,
            counts.minus,
            counts.total()
        )
    }
}

/// The new pool together with its report.
#[derive(Debug, Clone)]
pub struct Advance {
    pub pool: Vec<Staircase>,
    pub report: GenerationReport,
}

/// Classify a source staircase from its extension by a zero column.
fn classify(extended: &Staircase, generation: usize) -> Result<Classification, InvariantViolation> {
    if ascent_superseded(extended.heights(), generation)? {
        Ok(Classification::Retired)
    } else {
        Ok(Classification::Survives)
    }
}

/// Derive generation `generation` from `source`, the pool of `generation - 1`.
///
/// Surviving source staircases are passed to `emitter` in pool order.
pub fn advance<E: Emitter + ?Sized>(
    source: &[Staircase],
    generation: usize,
    emitter: &mut E,
) -> Result<Advance, SearchError> {
    let previous = generation
        .checked_sub(1)
        .ok_or(InvariantViolation::NoPreviousGeneration)?;

    let mut pool = Vec::with_capacity(source.len() * 2);
    let mut tally = Tally::default();

    for rect in source {
        if rect.generation() != previous {
            return Err(InvariantViolation::WrongGeneration {
                expected: previous,
                found: rect.generation(),
            }
            .into());
        }

        pool.push(rect.shifted());
        tally.increment(Counters::ShiftAdmitted);

        let extended = rect.extended();
        let classification = classify(&extended, generation)?;

        if descent_superseded(extended.heights())? {
            tally.increment(Counters::DescentSuperseded);
        } else if ascent_superseded(extended.heights(), previous)? {
            tally.increment(Counters::AscentSuperseded);
        } else {
            pool.push(extended);
            tally.increment(Counters::ExtendAdmitted);
        }

        match classification {
            Classification::Survives => {
                tally.increment(Counters::Survivors);
                emitter.emit(rect)?;
            }
            Classification::Retired => tally.increment(Counters::Retired),
        }
    }

    let report = GenerationReport {
        generation,
        source_size: source.len(),
        pool_size: pool.len(),
        tally,
    };
    debug!(
        generation,
        source = report.source_size,
        pool = report.pool_size,
        descent = tally.get(Counters::DescentSuperseded),
        ascent = tally.get(Counters::AscentSuperseded),
        "advanced generation"
    );
    Ok(Advance { pool, report })
}
