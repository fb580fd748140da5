/*
 * SPDX-FileCopyrightText: 2026 The graph-nnz authors
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Loading of graphs from edge lists.
//!
//! An edge list is a text file with one edge per line, specified by two
//! whitespace-separated nonnegative integers (source and target); further
//! columns are ignored. Lines starting with the
//! [comment symbol](LoadOptions::line_comment_symbol) are skipped. Any other
//! line that cannot be parsed aborts the loading.

use crate::graphs::adj_graph::AdjGraph;
use anyhow::Context;
use dsi_progress_logger::prelude::*;
use std::collections::HashMap;
use std::io::{BufRead, BufReader};
use std::path::Path;
use thiserror::Error;

/// Errors that can occur while reading an edge list.
#[derive(Error, Debug)]
pub enum ParseError {
    /// The underlying reader failed.
    #[error("I/O error while reading the edge list")]
    Io(#[from] std::io::Error),

    /// A line does not contain a valid edge.
    #[error("Invalid edge at line {line} ({content:?}): {reason}")]
    InvalidLine {
        line: usize,
        content: String,
        reason: String,
    },
}

/// Options controlling how an edge list is turned into an [`AdjGraph`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadOptions {
    /// If false, each edge is inserted in both directions.
    pub directed: bool,
    /// If true, node identifiers are renumbered densely from zero in order of
    /// appearance.
    pub rename: bool,
    /// Lines whose first non-blank character is this symbol are skipped.
    pub line_comment_symbol: Option<char>,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            directed: false,
            rename: false,
            line_comment_symbol: Some('#'),
        }
    }
}

/// A graph read from an edge list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedGraph {
    pub graph: AdjGraph,
    /// If renaming was enabled, the original identifier of each node, indexed
    /// by the new identifier.
    pub names: Option<Vec<usize>>,
}

/// Assigns dense identifiers to node labels in order of appearance.
#[derive(Debug, Default)]
struct Renamer {
    ids: HashMap<usize, usize>,
    names: Vec<usize>,
}

impl Renamer {
    fn rename(&mut self, node: usize) -> usize {
        *self.ids.entry(node).or_insert_with(|| {
            self.names.push(node);
            self.names.len() - 1
        })
    }
}

fn parse_node(
    token: Option<&str>,
    which: &str,
    line: usize,
    content: &str,
) -> Result<usize, ParseError> {
    let invalid = |reason: String| ParseError::InvalidLine {
        line,
        content: content.to_owned(),
        reason,
    };
    let token = token.ok_or_else(|| invalid(format!("missing {which} node")))?;
    token
        .parse::<usize>()
        .map_err(|err| invalid(format!("cannot parse {which} node {token:?}: {err}")))
}

/// Reads an edge list from `reader`.
pub fn load_edge_list(
    reader: impl BufRead,
    options: &LoadOptions,
    pl: &mut impl ProgressLog,
) -> Result<LoadedGraph, ParseError> {
    let mut graph = AdjGraph::new();
    let mut renamer = options.rename.then(Renamer::default);

    pl.item_name("line").expected_updates(None);
    pl.start("Reading edge list...");

    for (line_num, line) in reader.lines().enumerate() {
        let line = line?;
        if let Some(symbol) = options.line_comment_symbol {
            if line.trim_start().starts_with(symbol) {
                continue;
            }
        }

        let mut tokens = line.split_whitespace();
        let src = parse_node(tokens.next(), "source", line_num + 1, &line)?;
        let dst = parse_node(tokens.next(), "target", line_num + 1, &line)?;

        let (src, dst) = match renamer.as_mut() {
            Some(renamer) => {
                let src = renamer.rename(src);
                (src, renamer.rename(dst))
            }
            None => (src, dst),
        };

        graph.add_edge(src, dst, options.directed);
        pl.light_update();
    }
    pl.done();

    log::info!(
        "Read {} arcs; the adjacency rows have {} columns",
        graph.num_arcs(),
        graph.max_dim()
    );

    Ok(LoadedGraph {
        graph,
        names: renamer.map(|r| r.names),
    })
}

/// Reads an edge list from the file at `path`.
pub fn load_edge_list_file(
    path: impl AsRef<Path>,
    options: &LoadOptions,
    pl: &mut impl ProgressLog,
) -> anyhow::Result<LoadedGraph> {
    let path = path.as_ref();
    log::info!(
        "Parsing graph file {} as a{} graph; renaming of vertices is {}",
        path.display(),
        if options.directed { " directed" } else { "n undirected" },
        if options.rename { "on" } else { "off" },
    );
    let file = std::fs::File::open(path)
        .with_context(|| format!("Could not open edge list {}", path.display()))?;
    load_edge_list(BufReader::new(file), options, pl)
        .with_context(|| format!("Could not load edge list {}", path.display()))
}
