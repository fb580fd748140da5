/*
 * SPDX-FileCopyrightText: 2026 The graph-nnz authors
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use crate::report::{self, SortBy};
use crate::{GlobalArgs, NumThreadsArg, create_parent_dir, get_thread_pool, plot, prefixed};
use anyhow::{Context, Result, ensure};
use clap::Args;
use dsi_progress_logger::prelude::*;
use graph_nnz::prelude::*;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

#[derive(Args, Debug)]
pub struct CliArgs {
    #[arg(long)]
    /// The edge list: one arc per line, given by two whitespace-separated
    /// node identifiers.
    pub input: PathBuf,

    #[arg(long, conflicts_with = "undirected")]
    /// Read the edge list as a directed graph.
    pub directed: bool,

    #[arg(long)]
    /// Read the edge list as an undirected graph, adding each edge in both
    /// directions (the default).
    pub undirected: bool,

    #[arg(long, conflicts_with = "no_rename")]
    /// Renumber nodes densely from zero in order of appearance.
    pub rename: bool,

    #[arg(long)]
    /// Use node identifiers as they are (the default).
    pub no_rename: bool,

    #[arg(long, default_value_t = 4)]
    /// The pattern-matching vector size, that is, the width of the windows.
    pub vsize: usize,

    #[arg(long, default_value_t = 100, value_parser = clap::value_parser!(u8).range(0..=100))]
    /// The target coverage (percentage of arcs) for the selection of the
    /// densest patterns; 100 disables the selection.
    pub coverage: u8,

    #[arg(long, value_enum, default_value_t = SortBy::Npatterns)]
    /// How to sort the patterns in the report.
    pub sortby: SortBy,

    #[arg(long, default_value = "output")]
    /// The stem of the chart files (count_<stem>.png and perc_<stem>.png).
    pub out: PathBuf,

    #[arg(long, default_value_t = -1, allow_negative_numbers = true)]
    /// Print (and plot) only the first patterns of the report; a negative
    /// value means all of them.
    pub top: isize,

    #[arg(long)]
    /// Render bar charts of counts and coverages.
    pub plot: bool,

    #[arg(long)]
    /// Also store the full analysis in this file as JSON.
    pub json: Option<PathBuf>,

    #[arg(long, default_value_t = '#')]
    /// Ignore lines of the edge list that start with this symbol.
    pub line_comment_symbol: char,

    #[clap(flatten)]
    pub num_threads: NumThreadsArg,
}

impl CliArgs {
    pub fn load_options(&self) -> LoadOptions {
        LoadOptions {
            directed: self.directed,
            rename: self.rename,
            line_comment_symbol: Some(self.line_comment_symbol),
        }
    }

    /// Returns the number of patterns to report, if limited.
    pub fn top(&self) -> Option<usize> {
        usize::try_from(self.top).ok()
    }
}

pub fn main(global_args: GlobalArgs, args: CliArgs) -> Result<()> {
    let mut pl = ProgressLogger::default();
    pl.display_memory(true);
    if let Some(duration) = global_args.log_interval {
        pl.log_interval(duration);
    }

    check_width(args.vsize)?;
    let graph = load_edge_list_file(&args.input, &args.load_options(), &mut pl)?.graph;
    ensure!(graph.num_arcs() > 0, CoverageError::EmptyGraph);

    let counts = if args.num_threads.num_threads > 1 {
        let thread_pool = get_thread_pool(args.num_threads.num_threads)?;
        let mut cpl = concurrent_progress_logger![item_name = "row"];
        cpl.display_memory(true);
        if let Some(duration) = global_args.log_interval {
            cpl.log_interval(duration);
        }
        par_scan(&graph, graph.max_dim(), args.vsize, &thread_pool, &mut cpl)
    } else {
        scan(&graph, graph.max_dim(), args.vsize, &mut pl)
    }
    .context("Could not scan the adjacency rows")?;

    let analysis = analyze(&counts, graph.num_arcs(), f64::from(args.coverage))?;
    let rows = args.sortby.sort(&analysis.report);
    let rows = &rows[..args.top().map_or(rows.len(), |top| top.min(rows.len()))];

    let mut stdout = std::io::stdout().lock();
    report::write_report(&mut stdout, &analysis.report, rows)?;
    if let Some(selection) = &analysis.selection {
        writeln!(stdout)?;
        report::write_selection(&mut stdout, selection)?;
    }
    stdout.flush()?;

    if args.plot && rows.is_empty() {
        log::warn!("No patterns to plot");
    } else if args.plot {
        let universe = counts.space().len();
        let count_path = prefixed(&args.out, "count_", "png");
        let perc_path = prefixed(&args.out, "perc_", "png");
        create_parent_dir(&count_path)?;
        log::info!("Plotting counts to {}", count_path.display());
        plot::plot_counts(&count_path, rows, universe)?;
        log::info!("Plotting coverages to {}", perc_path.display());
        plot::plot_coverage(&perc_path, rows, universe)?;
    }

    if let Some(json) = &args.json {
        create_parent_dir(json)?;
        log::info!("Storing the analysis in JSON format at {}", json.display());
        let file = std::fs::File::create(json)
            .with_context(|| format!("Could not create {}", json.display()))?;
        let mut file = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut file, &analysis)
            .with_context(|| format!("Could not write the analysis to {}", json.display()))?;
        file.flush()?;
    }

    Ok(())
}
