// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Per-generation pools.
//!
//! Generation 0 is seeded with `[[0]]`. Each later generation is pushed
//! exactly once, in order, and never mutated afterwards. Since an advance
//! only reads the latest pool, older generations may be dropped.

use std::collections::VecDeque;

use crate::error::InvariantViolation;
use crate::geometry::Staircase;

/// Which generations the registry keeps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Retention {
    /// Only the two most recent generations.
    #[default]
    LastTwo,
    /// Every generation since the seed.
    Full,
}

#[derive(Debug)]
pub struct Registry {
    /// Generation of `pools[0]`.
    first: usize,
    pools: VecDeque<Vec<Staircase>>,
    retention: Retention,
}

impl Registry {
    /// A registry holding only generation 0.
    pub fn new(retention: Retention) -> Self {
        let mut pools = VecDeque::new();
        pools.push_back(vec![Staircase::seed()]);
        Self {
            first: 0,
            pools,
            retention,
        }
    }

    pub fn latest_generation(&self) -> usize {
        self.first + self.pools.len() - 1
    }

    /// The oldest generation still held.
    pub fn oldest_generation(&self) -> usize {
        self.first
    }

    pub fn latest(&self) -> &[Staircase] {
        self.pools.back().map(Vec::as_slice).unwrap_or(&[])
    }

    /// The pool of `generation`, if it has been computed and not discarded.
    pub fn get(&self, generation: usize) -> Option<&[Staircase]> {
        let offset = generation.checked_sub(self.first)?;
        self.pools.get(offset).map(Vec::as_slice)
    }

    /// Append the pool of `generation`, which must follow the latest one.
    pub fn push(&mut self, generation: usize, pool: Vec<Staircase>) -> Result<(), InvariantViolation> {
        let latest = self.latest_generation();
        if generation != latest + 1 {
            return Err(InvariantViolation::OutOfOrderGeneration {
                latest,
                found: generation,
            });
        }
        self.pools.push_back(pool);
        if self.retention == Retention::LastTwo {
            while self.pools.len() > 2 {
                self.pools.pop_front();
                self.first += 1;
            }
        }
        Ok(())
    }
}

impl Default for Registry {
    fn default() -> Self {
        Registry::new(Retention::default())
    }
}
