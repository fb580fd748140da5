/*
 * SPDX-FileCopyrightText: 2026 The graph-nnz authors
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use anyhow::Result;
use graph_nnz_cli::cli_main;
use graph_nnz_cli::init_env_logger;

pub fn main() -> Result<()> {
    init_env_logger()?;
    cli_main(std::env::args_os())
}
