// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ADNT Sarl <info@adnt.io>

//! Command-line interface definitions.

use anyhow::Result;
use clap::Parser;

use mlff_common::PartitionSelect;

use crate::sim::{self, SimConfig, SimPlatform};

/// Command-line arguments.
#[derive(Parser, Debug)]
#[command(name = "mlff-sim")]
#[command(about = "Dry run of the MLFF boot selector against a simulated device")]
pub struct Cli {
    /// Stored system/update value (absent if omitted)
    #[arg(short, long)]
    pub flag: Option<u8>,

    /// Make the settings store fail with this esp_err_t code
    #[arg(long, value_name = "CODE", value_parser = parse_code, allow_hyphen_values = true)]
    pub read_error: Option<i32>,

    /// Number of boot attempts whose hardware init fails
    #[arg(long, default_value = "0")]
    pub hw_init_failures: u32,

    /// Number of boot attempts whose partition table load fails
    #[arg(long, default_value = "0")]
    pub table_failures: u32,

    /// Give up after this many restarts
    #[arg(long, default_value = "3")]
    pub restart_limit: u32,

    /// Log every state entered
    #[arg(short, long)]
    pub trace: bool,
}

impl Cli {
    fn config(&self) -> SimConfig {
        SimConfig {
            flag: self.flag,
            read_error: self.read_error,
            hw_init_failures: self.hw_init_failures,
            table_failures: self.table_failures,
            trace: self.trace,
        }
    }
}

/// Accept decimal or `0x`-prefixed hex error codes.
fn parse_code(s: &str) -> Result<i32, String> {
    let parsed = match s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        Some(hex) => i32::from_str_radix(hex, 16),
        None => s.parse(),
    };
    parsed.map_err(|e| format!("invalid error code '{s}': {e}"))
}

/// Run the simulation and print the log and decision.
pub fn run(cli: Cli) -> Result<()> {
    let mut platform = SimPlatform::new(cli.config());
    let result = sim::simulate(&mut platform, cli.restart_limit);

    for line in platform.lines() {
        println!("{line}");
    }

    let report = result?;
    println!();
    match report.select {
        PartitionSelect::Factory => println!("Boot:     factory"),
        PartitionSelect::Index(index) => println!("Boot:     index {index}"),
    }
    println!("Selector: {}", report.select.as_raw());
    println!("Restarts: {}", report.restarts);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let cli = Cli::try_parse_from(["mlff-sim"]).unwrap();
        assert_eq!(cli.flag, None);
        assert_eq!(cli.read_error, None);
        assert_eq!(cli.hw_init_failures, 0);
        assert_eq!(cli.table_failures, 0);
        assert_eq!(cli.restart_limit, 3);
        assert!(!cli.trace);
    }

    #[test]
    fn flag_and_failures() {
        let cli = Cli::try_parse_from([
            "mlff-sim",
            "--flag",
            "1",
            "--hw-init-failures",
            "2",
            "--table-failures",
            "1",
            "--trace",
        ])
        .unwrap();
        let config = cli.config();
        assert_eq!(config.flag, Some(1));
        assert_eq!(config.hw_init_failures, 2);
        assert_eq!(config.table_failures, 1);
        assert!(config.trace);
    }

    #[test]
    fn read_error_accepts_hex_and_decimal() {
        let cli = Cli::try_parse_from(["mlff-sim", "--read-error", "0x1102"]).unwrap();
        assert_eq!(cli.read_error, Some(0x1102));

        let cli = Cli::try_parse_from(["mlff-sim", "--read-error", "-1"]).unwrap();
        assert_eq!(cli.read_error, Some(-1));
    }

    #[test]
    fn flag_out_of_range_is_rejected() {
        assert!(Cli::try_parse_from(["mlff-sim", "--flag", "256"]).is_err());
    }
}
