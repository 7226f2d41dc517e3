// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Common test utilities shared across integration tests.

#![allow(dead_code)]

use staircase_search::config::SearchConfig;
use staircase_search::output::RecordCollector;
use staircase_search::{GenerationReport, Retention, SearchContext, Staircase};

/// A staircase from literal heights, which must be valid.
pub fn staircase(heights: &[u32]) -> Staircase {
    Staircase::new(heights.to_vec()).expect("test staircase must be valid")
}

/// Run a fresh search to `generations`, collecting records and reports.
pub fn run_to(
    generations: usize,
    retention: Retention,
) -> (SearchContext, Vec<String>, Vec<GenerationReport>) {
    let mut ctx = SearchContext::new(SearchConfig {
        generations,
        retention,
        quiet: true,
    });
    let mut collector = RecordCollector::new();
    let mut reports = Vec::new();
    ctx.run(&mut collector, |report| reports.push(report.clone()))
        .expect("search must not violate invariants");
    (ctx, collector.records, reports)
}

/// Check the structural invariants of every staircase in `pool`.
pub fn assert_valid_pool(pool: &[Staircase], generation: usize) {
    for s in pool {
        let r = s.heights();
        assert_eq!(r.len(), generation + 1, "{:?} in generation {}", s, generation);
        assert_eq!(r[generation], 0, "{:?} does not end at zero", s);
        for step in r.windows(2) {
            assert!(
                step[0] == step[1] || step[0] == step[1] + 1,
                "{:?} has an invalid step",
                s
            );
        }
    }
}
