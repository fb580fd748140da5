/*
 * SPDX-FileCopyrightText: 2026 The graph-nnz authors
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Scanning of adjacency rows into pattern counts.
//!
//! Each row of the adjacency matrix is seen as a dense row of
//! [`max_dim`](AdjGraph::max_dim) bits, without ever materializing it. A
//! cursor starts at position 0 and:
//!
//! - moves forward one position at a time while it sits on a zero, which in
//!   practice means jumping to the next successor;
//! - on a one, takes the window of `width` positions starting at the cursor;
//!   if the window would exceed the row, it is shifted left so that it ends
//!   exactly at the end of the row (in which case it might overlap the
//!   previous window);
//! - counts the pattern of the window, and advances by `width`.
//!
//! Thus only windows starting on a one are counted, and windows of a single
//! pass never overlap, except for the final shifted one.

use crate::graphs::adj_graph::AdjGraph;
use crate::patterns::{Pattern, PatternError, PatternSpace};
use dsi_progress_logger::prelude::*;
use rayon::prelude::*;
use rayon::ThreadPool;
use std::collections::BTreeSet;

/// Occurrence counts for every pattern of a [`PatternSpace`].
///
/// Every pattern has a count, possibly zero, and iteration follows the
/// canonical order of the space.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatternCounts {
    space: PatternSpace,
    /// The counts, indexed by pattern value.
    counts: Box<[u64]>,
}

impl PatternCounts {
    /// Creates a zeroed table.
    pub fn new(space: PatternSpace) -> Self {
        Self {
            space,
            counts: vec![0; space.len()].into_boxed_slice(),
        }
    }

    pub fn space(&self) -> PatternSpace {
        self.space
    }

    pub fn width(&self) -> usize {
        self.space.width()
    }

    /// Returns the count of `pattern`.
    ///
    /// # Panics
    ///
    /// If the pattern has a different width.
    pub fn get(&self, pattern: Pattern) -> u64 {
        assert_eq!(pattern.width(), self.width());
        self.counts[pattern.value() as usize]
    }

    /// Increments the count of `pattern`.
    pub fn increment(&mut self, pattern: Pattern) {
        assert_eq!(pattern.width(), self.width());
        self.counts[pattern.value() as usize] += 1;
    }

    /// Returns the sum of all counts, that is, the number of windows scanned.
    pub fn total(&self) -> u64 {
        self.counts.iter().sum()
    }

    /// Returns the number of nonzeros in all windows scanned.
    pub fn nnz(&self) -> u64 {
        self.iter().map(|(p, c)| p.ones() as u64 * c).sum()
    }

    /// Iterates over patterns and counts in canonical order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = (Pattern, u64)> + '_ {
        self.space
            .iter()
            .map(|pattern| (pattern, self.counts[pattern.value() as usize]))
    }

    /// Adds the counts of `other` to this table.
    pub fn merge(&mut self, other: &Self) {
        assert_eq!(self.space, other.space);
        for (a, b) in self.counts.iter_mut().zip(other.counts.iter()) {
            *a += b;
        }
    }
}

/// Scans a single row, adding the windows it contains to `counts`, which is
/// indexed by pattern value.
///
/// The caller must guarantee that `0 < width <= max_dim`.
pub fn scan_row(succ: &BTreeSet<usize>, max_dim: usize, width: usize, counts: &mut [u64]) {
    debug_assert!(width > 0 && width <= max_dim);
    let mut cursor = 0;
    while cursor < max_dim {
        // skip the run of zeros
        let Some(&next) = succ.range(cursor..max_dim).next() else {
            break;
        };
        cursor = next;
        if max_dim - cursor < width {
            cursor = max_dim - width;
        }

        let mut value = 0_usize;
        for &pos in succ.range(cursor..cursor + width) {
            value |= 1 << (width - 1 - (pos - cursor));
        }
        counts[value] += 1;

        cursor += width;
    }
}

fn check_dims(max_dim: usize, width: usize) -> Result<PatternSpace, PatternError> {
    let space = PatternSpace::new(width)?;
    if max_dim < width {
        return Err(PatternError::RowTooShort { max_dim, width });
    }
    Ok(space)
}

/// Scans all rows of `graph`, seen as dense rows of length `max_dim`, and
/// counts the patterns of width `width` they contain.
///
/// # Errors
///
/// [`PatternError::InvalidWidth`] if the width is not valid, and
/// [`PatternError::RowTooShort`] if `max_dim` is smaller than the width.
pub fn scan(
    graph: &AdjGraph,
    max_dim: usize,
    width: usize,
    pl: &mut impl ProgressLog,
) -> Result<PatternCounts, PatternError> {
    let space = check_dims(max_dim, width)?;
    log::info!("Pattern matching vector size is {}", width);

    let mut counts = PatternCounts::new(space);
    pl.item_name("row")
        .expected_updates(Some(graph.num_rows()));
    pl.start("Scanning rows...");

    for (_node, succ) in graph.iter() {
        scan_row(succ, max_dim, width, &mut counts.counts);
        pl.light_update();
    }
    pl.done();

    Ok(counts)
}

/// Parallel version of [`scan`].
///
/// Rows are scanned using the given thread pool, each worker accumulating a
/// partial table; partial tables are then summed, so the result is the same
/// as that of [`scan`].
pub fn par_scan(
    graph: &AdjGraph,
    max_dim: usize,
    width: usize,
    thread_pool: &ThreadPool,
    pl: &mut impl ConcurrentProgressLog,
) -> Result<PatternCounts, PatternError> {
    let space = check_dims(max_dim, width)?;
    log::info!(
        "Pattern matching vector size is {}; scanning with {} threads",
        width,
        thread_pool.current_num_threads()
    );

    pl.item_name("row")
        .expected_updates(Some(graph.num_rows()));
    pl.start("Scanning rows in parallel...");

    let rows = graph.iter().map(|(_, succ)| succ).collect::<Vec<_>>();
    let len = space.len();
    let counts = thread_pool.install(|| {
        rows.par_iter()
            .fold_with(
                (vec![0_u64; len], pl.clone()),
                |(mut counts, mut pl), succ| {
                    scan_row(succ, max_dim, width, &mut counts);
                    pl.light_update();
                    (counts, pl)
                },
            )
            .map(|(counts, _)| counts)
            .reduce(
                || vec![0_u64; len],
                |mut a, b| {
                    for (x, y) in a.iter_mut().zip(b) {
                        *x += y;
                    }
                    a
                },
            )
    });
    pl.done();

    Ok(PatternCounts {
        space,
        counts: counts.into_boxed_slice(),
    })
}
