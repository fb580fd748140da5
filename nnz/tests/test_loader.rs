/*
 * SPDX-FileCopyrightText: 2026 The graph-nnz authors
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use anyhow::Result;
use dsi_progress_logger::no_logging;
use graph_nnz::prelude::*;
use std::io::{Cursor, Write};

fn load(input: &str, options: &LoadOptions) -> Result<LoadedGraph, ParseError> {
    load_edge_list(Cursor::new(input), options, no_logging![])
}

#[test]
fn test_undirected() -> Result<()> {
    let loaded = load("0 1\n1 2\n", &LoadOptions::default())?;
    let graph = loaded.graph;
    assert_eq!(graph.num_arcs(), 4);
    assert_eq!(graph.max_dim(), 3);
    assert_eq!(graph.num_rows(), 3);
    assert_eq!(graph.successors(0).unwrap().iter().copied().collect::<Vec<_>>(), [1]);
    assert_eq!(graph.successors(1).unwrap().iter().copied().collect::<Vec<_>>(), [0, 2]);
    assert_eq!(graph.successors(2).unwrap().iter().copied().collect::<Vec<_>>(), [1]);
    assert!(loaded.names.is_none());
    Ok(())
}

#[test]
fn test_directed() -> Result<()> {
    let options = LoadOptions {
        directed: true,
        ..Default::default()
    };
    let graph = load("0 1\n1 2\n", &options)?.graph;
    assert_eq!(graph.num_arcs(), 2);
    assert_eq!(graph.max_dim(), 3);
    assert!(graph.has_arc(0, 1));
    assert!(!graph.has_arc(1, 0));
    assert_eq!(graph.outdegree(2), 0);
    assert!(graph.successors(2).is_none());
    Ok(())
}

#[test]
fn test_duplicates_are_counted() -> Result<()> {
    let options = LoadOptions {
        directed: true,
        ..Default::default()
    };
    let graph = load("0 1\n0 1\n", &options)?.graph;
    assert_eq!(graph.num_arcs(), 2);
    assert_eq!(graph.outdegree(0), 1);
    Ok(())
}

#[test]
fn test_rename() -> Result<()> {
    let options = LoadOptions {
        rename: true,
        ..Default::default()
    };
    let loaded = load("10 20\n30\t20 extra columns\n", &options)?;
    assert_eq!(loaded.names, Some(vec![10, 20, 30]));
    assert_eq!(loaded.graph.max_dim(), 3);
    assert!(loaded.graph.has_arc(0, 1));
    assert!(loaded.graph.has_arc(1, 2));
    assert!(loaded.graph.has_arc(2, 1));

    let graph = load("10 20\n30 20\n", &LoadOptions::default())?.graph;
    assert_eq!(graph.max_dim(), 31);
    assert!(graph.has_arc(30, 20));
    Ok(())
}

#[test]
fn test_comments() -> Result<()> {
    let graph = load("# a comment\n0 1\n  # another one\n", &LoadOptions::default())?.graph;
    assert_eq!(graph.num_arcs(), 2);

    let options = LoadOptions {
        line_comment_symbol: None,
        ..Default::default()
    };
    assert!(load("# a comment\n0 1\n", &options).is_err());
    Ok(())
}

#[test]
fn test_malformed_lines() {
    match load("0 1\n1 x\n", &LoadOptions::default()) {
        Err(ParseError::InvalidLine { line, content, .. }) => {
            assert_eq!(line, 2);
            assert_eq!(content, "1 x");
        }
        other => panic!("Unexpected result {:?}", other),
    }
    assert!(matches!(
        load("0\n", &LoadOptions::default()),
        Err(ParseError::InvalidLine { line: 1, .. })
    ));
    assert!(matches!(
        load("0 1\n\n2 3\n", &LoadOptions::default()),
        Err(ParseError::InvalidLine { line: 2, .. })
    ));
    assert!(load("-1 2\n", &LoadOptions::default()).is_err());
}

#[test]
fn test_load_file() -> Result<()> {
    let mut file = tempfile::NamedTempFile::new()?;
    writeln!(file, "0 3")?;
    writeln!(file, "2 3")?;
    file.flush()?;
    let graph = load_edge_list_file(file.path(), &LoadOptions::default(), no_logging![])?.graph;
    assert_eq!(graph.num_arcs(), 4);
    assert_eq!(graph.max_dim(), 4);

    let options = LoadOptions::default();
    assert!(load_edge_list_file("/nonexistent/graph.txt", &options, no_logging![]).is_err());
    Ok(())
}

#[test]
fn test_from_arcs() {
    let graph = AdjGraph::from_arcs([(0, 1), (1, 2)], false);
    let loaded = load("0 1\n1 2\n", &LoadOptions::default()).unwrap();
    assert_eq!(graph, loaded.graph);
}
