/*
 * SPDX-FileCopyrightText: 2026 The graph-nnz authors
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Bar charts of pattern counts and coverages.
//!
//! Charts are rendered as PNG files. Bars are labelled with the pattern keys
//! when there are at most [`MAX_KEY_LABELS`] patterns in the pattern space,
//! and with their decimal values otherwise.

use anyhow::Result;
use graph_nnz::prelude::*;
use plotters::prelude::*;
use std::path::Path;

/// Beyond this number of patterns, keys are unreadable.
pub const MAX_KEY_LABELS: usize = 30;

/// Returns the bar labels for `rows` within a pattern space of size
/// `universe`.
pub fn labels(rows: &[&PatternStats], universe: usize) -> Vec<String> {
    rows.iter()
        .map(|s| {
            if universe > MAX_KEY_LABELS {
                s.pattern.value().to_string()
            } else {
                s.pattern.key()
            }
        })
        .collect()
}

fn bar_chart(
    path: &Path,
    caption: &str,
    y_desc: &str,
    labels: &[String],
    values: &[f64],
    color: RGBColor,
) -> Result<()> {
    let root = BitMapBackend::new(path, (1280, 720)).into_drawing_area();
    root.fill(&WHITE)?;

    let max = values.iter().copied().fold(0.0, f64::max);
    let max = if max > 0.0 { max * 1.05 } else { 1.0 };

    let mut chart = ChartBuilder::on(&root)
        .caption(caption, ("sans-serif", 28))
        .margin(20)
        .x_label_area_size(50)
        .y_label_area_size(80)
        .build_cartesian_2d((0..values.len()).into_segmented(), 0.0..max)?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_labels(values.len())
        .x_label_formatter(&|value| match value {
            SegmentValue::Exact(i) | SegmentValue::CenterOf(i) => {
                labels.get(*i).cloned().unwrap_or_default()
            }
            SegmentValue::Last => String::new(),
        })
        .x_desc("Pattern")
        .y_desc(y_desc)
        .draw()?;

    chart.draw_series(
        Histogram::vertical(&chart)
            .style(color.filled())
            .margin(4)
            .data(values.iter().copied().enumerate()),
    )?;

    root.present()?;
    Ok(())
}

/// Plots the number of occurrences of each pattern.
pub fn plot_counts(path: impl AsRef<Path>, rows: &[&PatternStats], universe: usize) -> Result<()> {
    let values = rows.iter().map(|s| s.count as f64).collect::<Vec<_>>();
    bar_chart(
        path.as_ref(),
        "Pattern occurrences",
        "Count",
        &labels(rows, universe),
        &values,
        BLUE,
    )
}

/// Plots the nonzero coverage of each pattern.
pub fn plot_coverage(
    path: impl AsRef<Path>,
    rows: &[&PatternStats],
    universe: usize,
) -> Result<()> {
    let values = rows.iter().map(|s| s.coverage).collect::<Vec<_>>();
    bar_chart(
        path.as_ref(),
        "Nonzero coverage",
        "Coverage (%)",
        &labels(rows, universe),
        &values,
        RED,
    )
}
