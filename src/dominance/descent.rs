// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! The descent-test (NPN).
//!
//! The last column `g` has just been appended, and its point `(g, 0)` is the
//! removable reference. The profile is superseded when, for some removable
//! `(i1, j1)` and addable `(i2, j2)` with `i1 < i2 < g`,
//!
//! ```text
//!   (g - i1) / j1  <=  (g - i2) / j2
//! ```
//!
//! Column `g - 1` is never an addable witness, so the scan starts at `g - 2`
//! and keeps the maximum slope over addable cells.

use tracing::trace;

use super::checked_generation;
use crate::error::{Check, InvariantViolation};
use crate::geometry::staircase::{is_addable, is_removable};
use crate::geometry::{Ratio, SHORT_GENERATION};

/// Is `r`, just extended by a zero column, superseded?
pub fn descent_superseded(r: &[u32]) -> Result<bool, InvariantViolation> {
    let g = checked_generation(r, Check::Descent)?;
    if g <= SHORT_GENERATION {
        return Ok(false);
    }

    // (column, slope) of the steepest addable cell seen so far.
    let mut max_addable: Option<(usize, Ratio)> = None;

    for idx in (0..g - 1).rev() {
        let run = (g - idx) as u64;
        let height = u64::from(r[idx]);

        if is_addable(r, idx) {
            let slope = Ratio::new(run, height + 1);
            match max_addable {
                Some((_, max)) if !slope.is_greater(max) => {}
                _ => max_addable = Some((idx, slope)),
            }
        }

        if let Some((addable, max)) = max_addable {
            if is_removable(r, idx) {
                let slope = Ratio::new(run, height);
                if !slope.is_greater(max) {
                    trace!(removable = idx, addable, %max, %slope, "descent-test superseded");
                    return Ok(true);
                }
            }
        }
    }
    Ok(false)
}
