// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Exact comparison of slopes stored as numerator/denominator pairs.
//!
//! The dominance tests compare slopes at the boundary of equality, so no
//! floating point is used anywhere. Pairs are never reduced to lowest terms;
//! comparison is by cross-multiplication, widened to `u128` so that no
//! product of two `u64` components can overflow.

use std::fmt;

/// A non-negative rational `num / den`, kept unreduced.
///
/// A zero denominator is accepted. Cross-multiplication then orders it above
/// every pair with a positive denominator and a non-zero numerator, which is
/// exactly how the ascent-test expects a removable cell at the reference
/// height to behave.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Ratio {
    pub num: u64,
    pub den: u64,
}

impl Ratio {
    pub const fn new(num: u64, den: u64) -> Self {
        Self { num, den }
    }

    /// Returns true iff `self > other`, i.e. `self.num * other.den > other.num * self.den`.
    #[inline]
    pub fn is_greater(self, other: Ratio) -> bool {
        u128::from(self.num) * u128::from(other.den) > u128::from(other.num) * u128::from(self.den)
    }
}

impl fmt::Display for Ratio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.num, self.den)
    }
}
