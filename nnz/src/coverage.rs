/*
 * SPDX-FileCopyrightText: 2026 The graph-nnz authors
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Nonzero coverage of patterns.
//!
//! The coverage of a pattern is the percentage of the arcs of the graph that
//! are accounted for by its occurrences, that is, the number of ones of the
//! pattern times its count, divided by the number of arcs.
//!
//! Given a target coverage, [`CoverageSelection::greedy`] picks patterns by
//! decreasing number of ones (ties broken by canonical order) until the
//! target is met. This is a single greedy pass: each pattern is taken in
//! full while it fits in the remaining budget, and the first pattern that
//! does not fit is credited with the remaining budget only, after which the
//! selection stops.

use crate::patterns::Pattern;
use crate::scan::PatternCounts;
use itertools::Itertools;
use std::cmp::Reverse;
use thiserror::Error;

/// Errors of coverage analysis.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CoverageError {
    /// There are no arcs, so percentages are undefined.
    #[error("The graph has no arcs")]
    EmptyGraph,

    /// The target coverage is not a percentage.
    #[error("Invalid target coverage {target}: it must be between 0 and 100")]
    InvalidTarget { target: f64 },
}

#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
/// Statistics about a single pattern.
pub struct PatternStats {
    pub pattern: Pattern,
    /// Number of occurrences.
    pub count: u64,
    /// Number of ones in the pattern.
    pub ones: usize,
    /// Number of arcs covered by the occurrences (`ones * count`).
    pub nnz: u64,
    /// Percentage of the arcs of the graph covered by the occurrences.
    pub coverage: f64,
}

#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
/// Per-pattern statistics, in canonical pattern order.
pub struct CoverageReport {
    pub num_arcs: u64,
    pub stats: Vec<PatternStats>,
}

impl CoverageReport {
    /// Computes the statistics of `counts` with respect to a graph with
    /// `num_arcs` arcs.
    pub fn new(counts: &PatternCounts, num_arcs: u64) -> Result<Self, CoverageError> {
        if num_arcs == 0 {
            return Err(CoverageError::EmptyGraph);
        }
        let stats = counts
            .iter()
            .map(|(pattern, count)| {
                let ones = pattern.ones();
                let nnz = ones as u64 * count;
                PatternStats {
                    pattern,
                    count,
                    ones,
                    nnz,
                    coverage: nnz as f64 / num_arcs as f64 * 100.0,
                }
            })
            .collect();
        Ok(Self { num_arcs, stats })
    }

    /// Returns the statistics by decreasing count; ties are in canonical
    /// order.
    pub fn by_frequency(&self) -> Vec<&PatternStats> {
        self.stats
            .iter()
            .sorted_by_key(|s| Reverse(s.count))
            .collect()
    }

    /// Returns the statistics by decreasing coverage; ties are in canonical
    /// order.
    pub fn by_coverage(&self) -> Vec<&PatternStats> {
        self.stats
            .iter()
            .sorted_by(|a, b| b.coverage.total_cmp(&a.coverage))
            .collect()
    }

    /// Returns the statistics by decreasing number of ones; ties are in
    /// canonical order.
    pub fn by_density(&self) -> Vec<&PatternStats> {
        self.stats
            .iter()
            .sorted_by_key(|s| Reverse(s.ones))
            .collect()
    }

    /// Returns the overall coverage of all windows scanned.
    ///
    /// This can be less than 100%, as rows are not scanned uniformly.
    pub fn total_coverage(&self) -> f64 {
        self.stats.iter().map(|s| s.nnz).sum::<u64>() as f64 / self.num_arcs as f64 * 100.0
    }
}

#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
/// A pattern chosen by the greedy selection.
pub struct SelectedPattern {
    pub pattern: Pattern,
    /// The coverage of the pattern.
    pub coverage: f64,
    /// The part of the target credited to the pattern. It is smaller than
    /// `coverage` only for the last, partially used, pattern.
    pub allocated: f64,
}

impl SelectedPattern {
    pub fn is_partial(&self) -> bool {
        self.allocated < self.coverage
    }
}

#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
/// The result of the greedy selection of densest patterns.
pub struct CoverageSelection {
    pub target: f64,
    pub selected: Vec<SelectedPattern>,
    /// The part of the target that could not be covered.
    pub remaining: f64,
}

impl CoverageSelection {
    /// Selects the densest patterns of `report` until `target` percent of the
    /// arcs is covered.
    pub fn greedy(report: &CoverageReport, target: f64) -> Result<Self, CoverageError> {
        if !(0.0..=100.0).contains(&target) {
            return Err(CoverageError::InvalidTarget { target });
        }
        let num_arcs = report.num_arcs as f64;
        // budget in hundredths of arcs, exact for integer targets
        let mut budget = target * num_arcs;
        let mut selected = vec![];
        for stats in report.by_density() {
            if budget <= 0.0 {
                break;
            }
            let needed = (stats.nnz * 100) as f64;
            if needed <= budget {
                budget -= needed;
                selected.push(SelectedPattern {
                    pattern: stats.pattern,
                    coverage: stats.coverage,
                    allocated: stats.coverage,
                });
            } else {
                selected.push(SelectedPattern {
                    pattern: stats.pattern,
                    coverage: stats.coverage,
                    allocated: budget / num_arcs,
                });
                budget = 0.0;
            }
        }
        let remaining = budget / num_arcs;
        log::debug!(
            "Selected {} patterns for a target coverage of {}%",
            selected.len(),
            target
        );
        Ok(Self {
            target,
            selected,
            remaining,
        })
    }

    /// Returns the sum of the allocated percentages.
    pub fn covered(&self) -> f64 {
        self.selected.iter().map(|s| s.allocated).sum()
    }
}

#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
/// The complete result of an analysis.
pub struct Analysis {
    pub report: CoverageReport,
    /// The greedy selection; it is missing if the target coverage is 100%
    /// or more.
    pub selection: Option<CoverageSelection>,
}

/// Computes the coverage report of `counts` and, if `target` is less than
/// 100, the greedy selection of densest patterns reaching it.
pub fn analyze(
    counts: &PatternCounts,
    num_arcs: u64,
    target: f64,
) -> Result<Analysis, CoverageError> {
    if target.is_nan() || target < 0.0 {
        return Err(CoverageError::InvalidTarget { target });
    }
    let report = CoverageReport::new(counts, num_arcs)?;
    log::info!(
        "Windows scanned: {}; overall coverage: {:.2}%",
        counts.total(),
        report.total_coverage()
    );
    let selection = if target >= 100.0 {
        None
    } else {
        Some(CoverageSelection::greedy(&report, target)?)
    };
    Ok(Analysis { report, selection })
}
