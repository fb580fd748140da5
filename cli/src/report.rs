/*
 * SPDX-FileCopyrightText: 2026 The graph-nnz authors
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Textual reports.

use clap::ValueEnum;
use graph_nnz::prelude::*;
use std::io::{self, Write};

#[derive(Debug, Copy, Clone, PartialEq, Eq, ValueEnum)]
/// Orderings of the report.
pub enum SortBy {
    /// By decreasing number of occurrences.
    Npatterns,
    /// By decreasing nonzero coverage.
    Coverage,
}

impl SortBy {
    pub fn sort<'a>(&self, report: &'a CoverageReport) -> Vec<&'a PatternStats> {
        match self {
            SortBy::Npatterns => report.by_frequency(),
            SortBy::Coverage => report.by_coverage(),
        }
    }
}

fn key_width(rows: &[&PatternStats]) -> usize {
    rows.first().map_or(0, |s| s.pattern.width()).max("Pattern".len())
}

/// Writes one line per pattern with key, value, count, covered arcs and
/// coverage, followed by a summary.
pub fn write_report(
    out: &mut impl Write,
    report: &CoverageReport,
    rows: &[&PatternStats],
) -> io::Result<()> {
    let w = key_width(rows);
    writeln!(
        out,
        "{:>w$} {:>10} {:>14} {:>14} {:>10}",
        "Pattern", "Value", "Count", "NNZ", "Coverage"
    )?;
    for stats in rows {
        writeln!(
            out,
            "{:>w$} {:>10} {:>14} {:>14} {:>10}",
            stats.pattern.key(),
            stats.pattern.value(),
            stats.count,
            stats.nnz,
            format!("{:.2}%", stats.coverage),
        )?;
    }
    writeln!(out)?;
    writeln!(out, "     Arcs: {:>14}", report.num_arcs)?;
    writeln!(
        out,
        "  Windows: {:>14}",
        report.stats.iter().map(|s| s.count).sum::<u64>()
    )?;
    writeln!(out, " Coverage: {:>13.2}%", report.total_coverage())?;
    Ok(())
}

/// Writes the patterns chosen by the greedy selection, with their coverage
/// and the part of the target they were credited with.
pub fn write_selection(out: &mut impl Write, selection: &CoverageSelection) -> io::Result<()> {
    writeln!(
        out,
        "Densest patterns covering {}% of the arcs:",
        selection.target
    )?;
    let w = selection
        .selected
        .first()
        .map_or(0, |s| s.pattern.width())
        .max("Pattern".len());
    writeln!(
        out,
        "{:>w$} {:>6} {:>10} {:>10}",
        "Pattern", "Ones", "Coverage", "Allocated"
    )?;
    for selected in &selection.selected {
        writeln!(
            out,
            "{:>w$} {:>6} {:>10} {:>10}{}",
            selected.pattern.key(),
            selected.pattern.ones(),
            format!("{:.2}%", selected.coverage),
            format!("{:.2}%", selected.allocated),
            if selected.is_partial() { " (partial)" } else { "" },
        )?;
    }
    writeln!(out)?;
    writeln!(out, "  Covered: {:>13.2}%", selection.covered())?;
    if selection.remaining > 0.0 {
        writeln!(out, "    Unmet: {:>13.2}%", selection.remaining)?;
    }
    Ok(())
}
