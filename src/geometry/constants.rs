// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Constants for the staircase search.

/// Staircases of generation `SHORT_GENERATION` or less are too short to hold
/// a dominance witness: both supersession tests return false for them.
pub const SHORT_GENERATION: usize = 3;

/// Default number of generations to compute.
pub const DEFAULT_GENERATIONS: usize = 60;

/// Environment variable overriding [`DEFAULT_GENERATIONS`].
pub const GENERATIONS_ENV: &str = "STAIRCASE_GENERATIONS";

/// Marker appended to the signature of a staircase that stays extremal.
pub const SURVIVES_MARKER: char = '+';

/// Marker for a staircase that is superseded in the next generation.
pub const RETIRED_MARKER: char = '-';
