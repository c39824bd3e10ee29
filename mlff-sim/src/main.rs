// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ADNT Sarl <info@adnt.io>

//! Host-side dry run of the MLFF boot selector.
//!
//! Usage:
//!   mlff-sim                      # no update flag stored
//!   mlff-sim --flag 1             # update requested
//!   mlff-sim --flag 1 --hw-init-failures 2 --trace

mod cli;
mod sim;

use anyhow::Result;
use clap::Parser;

fn main() -> Result<()> {
    let args = cli::Cli::parse();
    cli::run(args)
}
