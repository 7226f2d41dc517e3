// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! The ascent-test (PNP).
//!
//! The reference point `(i3, j3)` is an addable point: either `(g, 0)`, the
//! point just added, or `(g-1, 1)` for a profile ending `[.., 1, 0, 0]`.
//! The profile is superseded when, for some addable `(i1, j1)` and removable
//! `(i2, j2)` with `i1 < i2 < i3`,
//!
//! ```text
//!   (i3 - i1) / (j1 - j3)  >=  (i3 - i2) / (j2 - j3)
//! ```
//!
//! Scanning leftwards, the minimum slope over removable cells is kept; each
//! addable cell is checked against it.

use tracing::trace;

use super::checked_generation;
use crate::error::{Check, InvariantViolation};
use crate::geometry::staircase::{is_addable, is_removable};
use crate::geometry::{Ratio, SHORT_GENERATION};

/// Is `r`, with reference column `i3`, superseded?
///
/// `i3` must be `g` or `g - 1`, and in the latter case `r[g-1]` must be zero.
pub fn ascent_superseded(r: &[u32], i3: usize) -> Result<bool, InvariantViolation> {
    let g = checked_generation(r, Check::Ascent)?;
    if g <= SHORT_GENERATION {
        return Ok(false);
    }

    let j3: u64 = if i3 == g {
        0
    } else if i3 == g - 1 {
        if r[i3] != 0 {
            return Err(InvariantViolation::ReferenceNotBaseline { i3, height: r[i3] });
        }
        1
    } else {
        return Err(InvariantViolation::UnexpectedReferenceIndex { i3, generation: g });
    };

    // (column, slope) of the shallowest removable cell seen so far.
    let mut min_removable: Option<(usize, Ratio)> = None;

    for idx in (0..i3).rev() {
        let run = (i3 - idx) as u64;
        let height = u64::from(r[idx]);

        if is_removable(r, idx) {
            let slope = Ratio::new(run, height - j3);
            match min_removable {
                Some((_, min)) if !min.is_greater(slope) => {}
                _ => min_removable = Some((idx, slope)),
            }
        }

        if let Some((removable, min)) = min_removable {
            if is_addable(r, idx) {
                let slope = Ratio::new(run, height + 1 - j3);
                if !min.is_greater(slope) {
                    trace!(addable = idx, removable, i3, %min, %slope, "ascent-test superseded");
                    return Ok(true);
                }
            }
        }
    }
    Ok(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_profiles_never_superseded() {
        assert_eq!(ascent_superseded(&[0], 0), Ok(false));
        assert_eq!(ascent_superseded(&[1, 1, 1, 0], 3), Ok(false));
        assert_eq!(ascent_superseded(&[0, 0, 0, 0], 2), Ok(false));
    }

    #[test]
    fn test_added_point_reference() {
        // Column 0 is addable at height 2, column 2 removable at height 1:
        // 4/2 >= 2/1, so the pair dominates.
        assert_eq!(ascent_superseded(&[1, 1, 1, 0, 0], 4), Ok(true));
        assert_eq!(ascent_superseded(&[2, 2, 2, 1, 0, 0], 4), Ok(true));
        assert_eq!(ascent_superseded(&[2, 2, 1, 1, 0, 0], 4), Ok(false));
        assert_eq!(ascent_superseded(&[1, 1, 0, 0, 0], 4), Ok(false));
        assert_eq!(ascent_superseded(&[3, 3, 3, 2, 1, 0, 0], 5), Ok(true));
    }

    #[test]
    fn test_lowered_reference() {
        assert_eq!(ascent_superseded(&[1, 1, 1, 0, 0], 3), Ok(false));
        assert_eq!(ascent_superseded(&[2, 1, 0, 0, 0], 3), Ok(false));
        // The removable cell at column 1 has height 1 == j3: an unbounded slope.
        assert_eq!(ascent_superseded(&[1, 1, 0, 0, 0], 3), Ok(false));
    }

    #[test]
    fn test_trailing_not_zero() {
        assert_eq!(
            ascent_superseded(&[2, 1, 1, 1, 1], 4),
            Err(InvariantViolation::TrailingNotZero {
                check: Check::Ascent,
                found: 1
            })
        );
    }

    #[test]
    fn test_unexpected_reference() {
        assert_eq!(
            ascent_superseded(&[1, 1, 1, 0, 0], 2),
            Err(InvariantViolation::UnexpectedReferenceIndex { i3: 2, generation: 4 })
        );
        assert_eq!(
            ascent_superseded(&[2, 2, 2, 1, 0], 3),
            Err(InvariantViolation::ReferenceNotBaseline { i3: 3, height: 1 })
        );
    }
}
