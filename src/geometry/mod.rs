// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Geometric types for staircases.
//!
//! - Ratio: exact, unreduced slopes compared by cross-multiplication
//! - Staircase: validated column heights, with removable/addable cells

pub mod constants;
pub mod rational;
pub mod staircase;

// Re-export for convenience
pub use constants::*;
pub use rational::Ratio;
pub use staircase::Staircase;
