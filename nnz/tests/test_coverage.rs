/*
 * SPDX-FileCopyrightText: 2026 The graph-nnz authors
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use anyhow::Result;
use dsi_progress_logger::no_logging;
use graph_nnz::prelude::*;

fn p(key: &str) -> Pattern {
    key.parse().unwrap()
}

fn counts_of(width: usize, occurrences: &[(&str, u64)]) -> Result<PatternCounts> {
    let mut counts = PatternCounts::new(PatternSpace::new(width)?);
    for &(key, n) in occurrences {
        for _ in 0..n {
            counts.increment(p(key));
        }
    }
    Ok(counts)
}

fn assert_close(a: f64, b: f64) {
    assert!((a - b).abs() < 1e-9, "{} != {}", a, b);
}

#[test]
fn test_report() -> Result<()> {
    let counts = counts_of(2, &[("10", 3), ("01", 1)])?;
    let report = CoverageReport::new(&counts, 4)?;
    assert_eq!(report.stats.len(), 4);
    let stats = report.stats.iter().find(|s| s.pattern == p("10")).unwrap();
    assert_eq!(stats.count, 3);
    assert_eq!(stats.ones, 1);
    assert_eq!(stats.nnz, 3);
    assert_close(stats.coverage, 75.0);
    assert_close(report.total_coverage(), 100.0);

    assert_eq!(
        CoverageReport::new(&counts, 0),
        Err(CoverageError::EmptyGraph)
    );
    Ok(())
}

#[test]
fn test_orderings() -> Result<()> {
    let counts = counts_of(2, &[("11", 1), ("10", 3), ("01", 3)])?;
    let report = CoverageReport::new(&counts, 10)?;

    let by_freq = report
        .by_frequency()
        .iter()
        .map(|s| s.pattern.key())
        .collect::<Vec<_>>();
    // ties keep the canonical order
    assert_eq!(by_freq, ["10", "01", "11", "00"]);

    let by_cov = report
        .by_coverage()
        .iter()
        .map(|s| s.pattern.key())
        .collect::<Vec<_>>();
    assert_eq!(by_cov, ["10", "01", "11", "00"]);

    let by_density = report
        .by_density()
        .iter()
        .map(|s| s.pattern.key())
        .collect::<Vec<_>>();
    assert_eq!(by_density, ["11", "10", "01", "00"]);
    Ok(())
}

#[test]
fn test_partial_credit() -> Result<()> {
    // 1111 covers 3 * 4 / 20 = 60% of the arcs
    let counts = counts_of(4, &[("1111", 3), ("1110", 1), ("1000", 5)])?;
    let analysis = analyze(&counts, 20, 50.0)?;
    let selection = analysis.selection.unwrap();
    assert_eq!(selection.selected.len(), 1);
    assert_eq!(selection.selected[0].pattern, p("1111"));
    assert_close(selection.selected[0].coverage, 60.0);
    assert_close(selection.selected[0].allocated, 50.0);
    assert!(selection.selected[0].is_partial());
    assert_close(selection.remaining, 0.0);
    assert_close(selection.covered(), 50.0);
    Ok(())
}

#[test]
fn test_prefix_monotonicity() -> Result<()> {
    let counts = counts_of(4, &[("1111", 3), ("1110", 1), ("1000", 5)])?;
    let report = CoverageReport::new(&counts, 20)?;

    let t70 = CoverageSelection::greedy(&report, 70.0)?;
    assert_eq!(
        t70.selected.iter().map(|s| s.pattern.key()).collect::<Vec<_>>(),
        ["1111", "1110"]
    );
    assert!(!t70.selected[0].is_partial());
    assert_close(t70.selected[1].allocated, 10.0);

    let mut previous: Vec<Pattern> = vec![];
    for target in [5.0, 30.0, 60.0, 70.0, 75.0, 90.0, 99.0] {
        let selection = CoverageSelection::greedy(&report, target)?;
        let patterns = selection
            .selected
            .iter()
            .map(|s| s.pattern)
            .collect::<Vec<_>>();
        let full = previous.len().saturating_sub(1);
        assert_eq!(&patterns[..full], &previous[..full]);
        previous = patterns;
    }
    Ok(())
}

#[test]
fn test_target_met_exactly() -> Result<()> {
    // 14 + 7 arcs out of 30 are exactly 70%
    let counts = counts_of(2, &[("11", 7), ("10", 7), ("01", 9)])?;
    let report = CoverageReport::new(&counts, 30)?;
    let selection = CoverageSelection::greedy(&report, 70.0)?;
    assert_eq!(
        selection
            .selected
            .iter()
            .map(|s| s.pattern.key())
            .collect::<Vec<_>>(),
        ["11", "10"]
    );
    assert!(selection.selected.iter().all(|s| !s.is_partial()));
    assert_eq!(selection.remaining, 0.0);
    Ok(())
}

#[test]
fn test_exhausted() -> Result<()> {
    let counts = counts_of(4, &[("1111", 1)])?;
    let selection = CoverageSelection::greedy(&CoverageReport::new(&counts, 20)?, 90.0)?;
    // patterns with no coverage always fit in the budget
    assert_eq!(selection.selected.len(), 16);
    assert_close(selection.covered(), 20.0);
    assert_close(selection.remaining, 70.0);
    Ok(())
}

#[test]
fn test_degenerate_targets() -> Result<()> {
    let counts = counts_of(4, &[("1111", 3)])?;
    assert!(analyze(&counts, 20, 100.0)?.selection.is_none());

    let selection = analyze(&counts, 20, 0.0)?.selection.unwrap();
    assert!(selection.selected.is_empty());

    assert!(matches!(
        analyze(&counts, 20, -1.0),
        Err(CoverageError::InvalidTarget { .. })
    ));
    assert!(analyze(&counts, 20, f64::NAN).is_err());
    assert_eq!(analyze(&counts, 0, 50.0), Err(CoverageError::EmptyGraph));
    Ok(())
}

#[test]
fn test_pipeline() -> Result<()> {
    let graph = AdjGraph::from_arcs([(0, 1), (1, 2)], false);
    let run = || -> Result<Analysis> {
        let counts = scan(&graph, graph.max_dim(), 2, no_logging![])?;
        Ok(analyze(&counts, graph.num_arcs(), 80.0)?)
    };
    let analysis = run()?;
    assert_eq!(analysis, run()?);

    let selection = analysis.selection.as_ref().unwrap();
    // 11 has no occurrences, 10 covers 75%, 01 gets the remaining 5%
    assert_eq!(
        selection
            .selected
            .iter()
            .map(|s| (s.pattern.key(), s.allocated))
            .collect::<Vec<_>>(),
        [("11".to_owned(), 0.0), ("10".to_owned(), 75.0), ("01".to_owned(), 5.0)]
    );
    Ok(())
}

#[cfg(feature = "serde")]
#[test]
fn test_serde() -> Result<()> {
    let counts = counts_of(2, &[("10", 3), ("01", 1)])?;
    let analysis = analyze(&counts, 4, 50.0)?;
    let json = serde_json::to_string(&analysis)?;
    let back: Analysis = serde_json::from_str(&json)?;
    assert_eq!(analysis, back);
    Ok(())
}
