/*
 * SPDX-FileCopyrightText: 2026 The graph-nnz authors
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use std::collections::{BTreeMap, BTreeSet};

/// A mutable adjacency-set graph mapping each node with at least one
/// successor to the [`BTreeSet`] of its successors.
///
/// Nodes are sparse: a node identifier can be arbitrarily large without
/// allocating anything for the identifiers below it. Successor sets enforce
/// uniqueness, but [`num_arcs`](AdjGraph::num_arcs) counts every insertion,
/// duplicates included, as this is the number the coverage percentages are
/// computed against.
///
/// The number of columns of the (implicit) dense adjacency matrix is given by
/// [`max_dim`](AdjGraph::max_dim), that is, the largest node identifier seen
/// plus one.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AdjGraph {
    /// The number of arcs inserted in the graph.
    num_arcs: u64,
    /// One plus the largest node identifier seen, or zero.
    max_dim: usize,
    /// For each node with successors, its set of successors.
    succ: BTreeMap<usize, BTreeSet<usize>>,
}

impl AdjGraph {
    /// Creates a new empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a graph from a list of arcs.
    ///
    /// If `directed` is false every arc is inserted in both directions.
    pub fn from_arcs(arcs: impl IntoIterator<Item = (usize, usize)>, directed: bool) -> Self {
        let mut graph = Self::new();
        for (u, v) in arcs {
            graph.add_edge(u, v, directed);
        }
        graph
    }

    /// Marks `node` as part of the graph, extending [`max_dim`](Self::max_dim)
    /// if necessary, without adding any arc.
    pub fn add_node(&mut self, node: usize) {
        self.max_dim = self.max_dim.max(node.saturating_add(1));
    }

    /// Adds the arc (`u`, `v`) and returns whether it is a new one.
    ///
    /// The arc is counted in [`num_arcs`](Self::num_arcs) even if it was
    /// already present.
    pub fn add_arc(&mut self, u: usize, v: usize) -> bool {
        self.add_node(u);
        self.add_node(v);
        self.num_arcs += 1;
        self.succ.entry(u).or_default().insert(v)
    }

    /// Adds an edge: the arc (`u`, `v`) and, if `directed` is false, the arc
    /// (`v`, `u`), too.
    pub fn add_edge(&mut self, u: usize, v: usize, directed: bool) {
        self.add_arc(u, v);
        if !directed {
            self.add_arc(v, u);
        }
    }

    /// Returns the number of arc insertions.
    pub fn num_arcs(&self) -> u64 {
        self.num_arcs
    }

    /// Returns the length of a dense adjacency row.
    pub fn max_dim(&self) -> usize {
        self.max_dim
    }

    /// Returns the number of nodes having at least one successor.
    pub fn num_rows(&self) -> usize {
        self.succ.len()
    }

    /// Returns the number of distinct successors of `node`.
    pub fn outdegree(&self, node: usize) -> usize {
        self.succ.get(&node).map_or(0, BTreeSet::len)
    }

    /// Returns the successors of `node`, if it has any.
    pub fn successors(&self, node: usize) -> Option<&BTreeSet<usize>> {
        self.succ.get(&node)
    }

    /// Returns whether the arc (`u`, `v`) is present.
    pub fn has_arc(&self, u: usize, v: usize) -> bool {
        self.succ.get(&u).is_some_and(|s| s.contains(&v))
    }

    /// Iterates over the nodes with successors, in increasing order, together
    /// with their successor sets.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &BTreeSet<usize>)> + '_ {
        self.succ.iter().map(|(&node, succ)| (node, succ))
    }
}
