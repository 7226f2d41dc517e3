// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Property tests over random staircases and slopes.

use proptest::prelude::*;

use staircase_search::dominance::{ascent_superseded, descent_superseded};
use staircase_search::geometry::SHORT_GENERATION;
use staircase_search::output::RecordCollector;
use staircase_search::{advance, Ratio, Staircase};

fn from_bits(bits: Vec<bool>) -> Staircase {
    let signature: String = bits.iter().map(|&b| if b { '1' } else { '0' }).collect();
    Staircase::from_signature(&signature).unwrap()
}

/// A random valid staircase of generation `0..max_generation`.
fn staircase_strategy(max_generation: usize) -> impl Strategy<Value = Staircase> {
    proptest::collection::vec(any::<bool>(), 0..max_generation).prop_map(from_bits)
}

/// A random pool of staircases sharing generation `generation`.
fn pool_strategy(generation: usize) -> impl Strategy<Value = Vec<Staircase>> {
    proptest::collection::vec(
        proptest::collection::vec(any::<bool>(), generation).prop_map(from_bits),
        0..20,
    )
}

fn generation_and_pool() -> impl Strategy<Value = (usize, Vec<Staircase>)> {
    (0usize..12).prop_flat_map(|generation| (Just(generation), pool_strategy(generation)))
}

fn ratio_strategy() -> impl Strategy<Value = Ratio> {
    (0u64..1_000, 1u64..1_000).prop_map(|(num, den)| Ratio::new(num, den))
}

proptest! {
    #[test]
    fn prop_signature_round_trip(s in staircase_strategy(40)) {
        prop_assert_eq!(Staircase::from_signature(&s.signature()).unwrap(), s.clone());
        prop_assert_eq!(Staircase::new(s.heights().to_vec()).unwrap(), s.clone());
        prop_assert_eq!(s.signature().len(), s.generation());
    }

    #[test]
    fn prop_derived_staircases_are_valid(s in staircase_strategy(40)) {
        let shifted = s.shifted();
        let extended = s.extended();
        prop_assert_eq!(shifted.generation(), s.generation() + 1);
        prop_assert_eq!(extended.generation(), s.generation() + 1);
        prop_assert!(Staircase::new(shifted.heights().to_vec()).is_ok());
        prop_assert!(Staircase::new(extended.heights().to_vec()).is_ok());
    }

    #[test]
    fn prop_tests_are_total_on_extensions(s in staircase_strategy(40)) {
        let extended = s.extended();
        let g = extended.generation();
        let descent = descent_superseded(extended.heights());
        let lowered = ascent_superseded(extended.heights(), g - 1);
        let added = ascent_superseded(extended.heights(), g);
        prop_assert!(descent.is_ok());
        prop_assert!(lowered.is_ok());
        prop_assert!(added.is_ok());
        if g <= SHORT_GENERATION {
            prop_assert_eq!(descent, Ok(false));
            prop_assert_eq!(lowered, Ok(false));
            prop_assert_eq!(added, Ok(false));
        }
    }

    #[test]
    fn prop_advance_preserves_invariants((generation, pool) in generation_and_pool()) {
        let mut records = RecordCollector::new();
        let next = advance(&pool, generation + 1, &mut records).unwrap();
        for s in &next.pool {
            prop_assert_eq!(s.generation(), generation + 1);
            prop_assert!(Staircase::new(s.heights().to_vec()).is_ok());
        }
        let counts = next.report.counts();
        prop_assert_eq!(counts.total() as usize, pool.len());
        prop_assert_eq!(counts.plus as usize, records.records.len());
        prop_assert!(next.pool.len() >= pool.len());
    }

    #[test]
    fn prop_ratio_antisymmetric(x in ratio_strategy(), y in ratio_strategy()) {
        prop_assert!(!(x.is_greater(y) && y.is_greater(x)));
        let equal = u128::from(x.num) * u128::from(y.den) == u128::from(y.num) * u128::from(x.den);
        prop_assert_eq!(x.is_greater(y) || y.is_greater(x), !equal);
    }

    #[test]
    fn prop_ratio_transitive(x in ratio_strategy(), y in ratio_strategy(), z in ratio_strategy()) {
        if x.is_greater(y) && y.is_greater(z) {
            prop_assert!(x.is_greater(z));
        }
    }

    #[test]
    fn prop_ratio_ignores_scaling(x in ratio_strategy(), k in 1u64..1_000) {
        let scaled = Ratio::new(x.num * k, x.den * k);
        prop_assert!(!scaled.is_greater(x));
        prop_assert!(!x.is_greater(scaled));
    }
}
