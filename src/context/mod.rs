// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Search context: the driver that owns all state of a run.
//!
//! The SearchContext combines:
//! - the configuration (how many generations, what to retain)
//! - the registry of per-generation pools
//! - the statistics accumulated so far
//!
//! There is no process-wide state; independent contexts can run side by side.

use crate::config::SearchConfig;
use crate::engine::{advance, Advance, GenerationReport, Registry};
use crate::error::SearchError;
use crate::output::Emitter;
use crate::state::Statistics;

#[derive(Debug)]
pub struct SearchContext {
    pub config: SearchConfig,
    pub registry: Registry,
    pub statistics: Statistics,
}

impl SearchContext {
    /// A context seeded with generation 0.
    pub fn new(config: SearchConfig) -> Self {
        let registry = Registry::new(config.retention);
        Self {
            config,
            registry,
            statistics: Statistics::new(),
        }
    }

    /// The latest generation computed so far.
    pub fn generation(&self) -> usize {
        self.registry.latest_generation()
    }

    /// Advance by one generation.
    pub fn step<E: Emitter + ?Sized>(&mut self, emitter: &mut E) -> Result<GenerationReport, SearchError> {
        let generation = self.registry.latest_generation() + 1;
        let Advance { pool, report } = advance(self.registry.latest(), generation, emitter)?;
        self.registry.push(generation, pool)?;
        self.statistics.record(&report);
        Ok(report)
    }

    /// Advance until `config.generations` is reached, reporting each step to `progress`.
    pub fn run<E, F>(&mut self, emitter: &mut E, mut progress: F) -> Result<(), SearchError>
    where
        E: Emitter + ?Sized,
        F: FnMut(&GenerationReport),
    {
        while self.generation() < self.config.generations {
            let report = self.step(emitter)?;
            progress(&report);
        }
        Ok(())
    }

    /// Size of the pool of the latest generation.
    pub fn final_pool_size(&self) -> usize {
        self.registry.latest().len()
    }
}

impl Default for SearchContext {
    fn default() -> Self {
        SearchContext::new(SearchConfig::default())
    }
}
