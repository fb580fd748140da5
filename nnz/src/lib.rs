/*
 * SPDX-FileCopyrightText: 2026 The graph-nnz authors
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

#![doc = include_str!("../README.md")]
#![deny(unstable_features)]
#![deny(trivial_casts)]
#![deny(unconditional_recursion)]
#![deny(clippy::empty_loop)]
#![deny(unreachable_code)]
#![deny(unreachable_pub)]
#![deny(unreachable_patterns)]
#![deny(unused_macro_rules)]
#![deny(unused_doc_comments)]

pub mod coverage;
pub mod graphs;
pub mod loader;
pub mod patterns;
pub mod scan;

pub mod prelude {
    pub use crate::coverage::*;
    pub use crate::graphs::prelude::*;
    pub use crate::loader::*;
    pub use crate::patterns::*;
    pub use crate::scan::*;
}
