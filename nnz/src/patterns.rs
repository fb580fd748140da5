/*
 * SPDX-FileCopyrightText: 2026 The graph-nnz authors
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Bit patterns of fixed width and their canonical enumeration.
//!
//! A [`Pattern`] of width *W* is a sequence of *W* bits describing a window
//! of an adjacency row: the first position of the window is the most
//! significant bit. Its canonical key is the concatenation of its bits, most
//! significant first (e.g., `1101`), and its value is the binary
//! interpretation of the key.
//!
//! The [`PatternSpace`] of width *W* enumerates all 2*ᵂ* patterns as a nested
//! iteration over the alphabet {1, 0}, with the most significant bit varying
//! slowest: `1111`, `1110`, `1101`, …, `0000`. In other words, patterns come
//! by decreasing value. This order is the tie-breaking order for every
//! derived ranking.

use std::fmt::{self, Display, Formatter};
use std::str::FromStr;
use thiserror::Error;

/// The maximum supported width: counting tables have 2*ᵂ* entries.
pub const MAX_WIDTH: usize = 24;

/// Errors on the width of patterns.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PatternError {
    /// The width is zero or too large.
    #[error("Invalid vector size {width}: it must be between 1 and {max}")]
    InvalidWidth { width: usize, max: usize },

    /// The width is larger than the adjacency rows.
    #[error("The vector size {width} is larger than the length of the adjacency rows ({max_dim})")]
    RowTooShort { max_dim: usize, width: usize },

    /// A pattern key contains characters other than `0` and `1`.
    #[error("Invalid pattern key {key:?}")]
    InvalidKey { key: String },
}

/// Checks that `width` is a usable pattern width.
pub fn check_width(width: usize) -> Result<(), PatternError> {
    if width == 0 || width > MAX_WIDTH {
        return Err(PatternError::InvalidWidth {
            width,
            max: MAX_WIDTH,
        });
    }
    Ok(())
}

#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// A fixed-width sequence of bits.
pub struct Pattern {
    value: u32,
    width: usize,
}

impl Pattern {
    /// Creates the pattern of the given width with the given value.
    ///
    /// # Panics
    ///
    /// If the width is invalid or the value does not fit in it.
    pub fn new(value: u32, width: usize) -> Self {
        assert!(
            check_width(width).is_ok(),
            "Invalid pattern width {width}"
        );
        assert!(
            u64::from(value) < 1 << width,
            "Value {value} does not fit in {width} bits"
        );
        Self { value, width }
    }

    /// Returns the binary interpretation of the key.
    pub fn value(&self) -> u32 {
        self.value
    }

    pub fn width(&self) -> usize {
        self.width
    }

    /// Returns the number of ones (nonzeros) in the pattern.
    pub fn ones(&self) -> usize {
        self.value.count_ones() as usize
    }

    /// Returns the bit at the given position of the window, where position 0
    /// is the most significant bit.
    pub fn bit(&self, pos: usize) -> bool {
        assert!(pos < self.width);
        (self.value >> (self.width - 1 - pos)) & 1 != 0
    }

    /// Returns the position of this pattern in the canonical enumeration.
    pub fn rank(&self) -> usize {
        ((1_usize << self.width) - 1) - self.value as usize
    }

    /// Returns the canonical key of the pattern (e.g., `1101`).
    pub fn key(&self) -> String {
        self.to_string()
    }
}

impl Display for Pattern {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for pos in 0..self.width {
            f.write_str(if self.bit(pos) { "1" } else { "0" })?;
        }
        Ok(())
    }
}

impl FromStr for Pattern {
    type Err = PatternError;

    fn from_str(key: &str) -> Result<Self, Self::Err> {
        let invalid = || PatternError::InvalidKey {
            key: key.to_owned(),
        };
        check_width(key.len()).map_err(|_| invalid())?;
        let mut value = 0;
        for c in key.chars() {
            value = value << 1
                | match c {
                    '0' => 0,
                    '1' => 1,
                    _ => return Err(invalid()),
                };
        }
        Ok(Self {
            value,
            width: key.len(),
        })
    }
}

/// The set of all patterns of a given width, in canonical order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PatternSpace {
    width: usize,
}

impl PatternSpace {
    pub fn new(width: usize) -> Result<Self, PatternError> {
        check_width(width)?;
        Ok(Self { width })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    /// Returns the number of patterns, that is, 2*ᵂ*.
    pub fn len(&self) -> usize {
        1 << self.width
    }

    /// A pattern space is never empty.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Returns the pattern of given rank in the canonical enumeration.
    pub fn get(&self, rank: usize) -> Pattern {
        assert!(rank < self.len());
        Pattern {
            value: (self.len() - 1 - rank) as u32,
            width: self.width,
        }
    }

    /// Iterates over the patterns in canonical order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = Pattern> + DoubleEndedIterator + use<> {
        let space = *self;
        (0..self.len()).map(move |rank| space.get(rank))
    }
}

/// Returns all patterns of the given width in canonical order.
pub fn enumerate(width: usize) -> Result<Vec<Pattern>, PatternError> {
    Ok(PatternSpace::new(width)?.iter().collect())
}
