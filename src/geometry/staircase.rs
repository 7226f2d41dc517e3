// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Staircase profiles.
//!
//! A staircase of generation `g` is stored as column heights `r[0 ..= g]`:
//!
//! ```text
//!   r[g] == 0
//!   r[i] - r[i+1] ∈ {0, 1}
//! ```
//!
//! Two kinds of boundary cell, for a column `i < g`, drive the dominance tests:
//!
//! - removable (an N-point): the top cell of column `i` can be deleted,
//!   `(i == 0 || r[i-1] == r[i]) && r[i] > r[i+1]`, at height `j = r[i]`;
//! - addable (a P-point): a cell can be added on top of column `i`,
//!   `(i == 0 || r[i-1] > r[i]) && r[i+1] == r[i]`, at height `j = r[i] + 1`.
//!
//! These are recomputed on every call and never cached.

use std::fmt;
use std::iter;

use crate::error::{Check, InvariantViolation};

/// Is column `i` of `r` removable? Requires `i + 1 < r.len()`.
#[inline]
pub fn is_removable(r: &[u32], i: usize) -> bool {
    (i == 0 || r[i - 1] == r[i]) && r[i] > r[i + 1]
}

/// Is column `i` of `r` addable? Requires `i + 1 < r.len()`.
#[inline]
pub fn is_addable(r: &[u32], i: usize) -> bool {
    (i == 0 || r[i - 1] > r[i]) && r[i + 1] == r[i]
}

/// An immutable, validated staircase profile.
///
/// New staircases are only ever derived by copying ([`Staircase::shifted`],
/// [`Staircase::extended`]); a staircase held in a pool is never mutated.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Staircase {
    heights: Vec<u32>,
}

impl Staircase {
    /// The single staircase of generation 0: `[0]`.
    pub fn seed() -> Self {
        Self { heights: vec![0] }
    }

    /// Validate `heights` and wrap them.
    pub fn new(heights: Vec<u32>) -> Result<Self, InvariantViolation> {
        let last = *heights.last().ok_or(InvariantViolation::EmptyStaircase)?;
        if last != 0 {
            return Err(InvariantViolation::TrailingNotZero {
                check: Check::Construction,
                found: last,
            });
        }
        for (column, step) in heights.windows(2).enumerate() {
            let (from, to) = (step[0], step[1]);
            if to > from || from - to > 1 {
                return Err(InvariantViolation::InvalidStep { column, from, to });
            }
        }
        Ok(Self { heights })
    }

    /// Rebuild the staircase whose [signature](Staircase::signature) is `signature`.
    ///
    /// Every 0/1 string is the signature of exactly one staircase, found by
    /// reading the string right to left from the baseline.
    pub fn from_signature(signature: &str) -> Result<Self, InvariantViolation> {
        let drops = signature
            .chars()
            .enumerate()
            .map(|(position, found)| match found {
                '0' => Ok(0),
                '1' => Ok(1),
                _ => Err(InvariantViolation::InvalidSignature { position, found }),
            })
            .collect::<Result<Vec<u32>, _>>()?;

        let mut heights = vec![0; drops.len() + 1];
        for k in (0..drops.len()).rev() {
            heights[k] = heights[k + 1] + drops[k];
        }
        Ok(Self { heights })
    }

    /// The generation `g`; the staircase has `g + 1` columns.
    pub fn generation(&self) -> usize {
        self.heights.len() - 1
    }

    pub fn heights(&self) -> &[u32] {
        &self.heights
    }

    /// Raise every column by one and append a zero column.
    ///
    /// The result is always extremal in the next generation.
    pub fn shifted(&self) -> Staircase {
        Staircase {
            heights: self.heights.iter().map(|v| v + 1).chain(iter::once(0)).collect(),
        }
    }

    /// Append a zero column.
    pub fn extended(&self) -> Staircase {
        let mut heights = Vec::with_capacity(self.heights.len() + 1);
        heights.extend_from_slice(&self.heights);
        heights.push(0);
        Staircase { heights }
    }

    /// One character per step: `0` where `r[k] == r[k-1]`, `1` where it drops.
    pub fn signature(&self) -> String {
        self.heights
            .windows(2)
            .map(|step| if step[0] == step[1] { '0' } else { '1' })
            .collect()
    }
}

impl fmt::Display for Staircase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.signature())
    }
}

impl fmt::Debug for Staircase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Staircase{:?}", self.heights)
    }
}
