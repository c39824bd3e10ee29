// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ADNT Sarl <info@adnt.io>

//! Simulated boot platform.
//!
//! Replays the bootloader's boot sequence on the host: each `run_boot` call
//! is one power-on, and a restart simply starts the next attempt.

use std::time::Instant;

use anyhow::{bail, Result};
use log::Level;

use mlff_common::settings::{ReadRequest, SettingsError, LOG_TAG};
use mlff_common::{
    run_boot, BootEvent, BootPlatform, BootState, IdfLine, PartitionSelect, PlatformError,
    RestartCause,
};

/// What the simulated device looks like.
#[derive(Clone, Debug, Default)]
pub struct SimConfig {
    /// Stored `system/update` value; `None` means the key is absent.
    pub flag: Option<u8>,
    /// Error code returned by the settings store instead of a value.
    pub read_error: Option<i32>,
    /// Number of attempts whose hardware init fails.
    pub hw_init_failures: u32,
    /// Number of attempts whose partition table load fails.
    pub table_failures: u32,
    /// Record state transitions in the log.
    pub trace: bool,
}

/// Terminal action of one boot attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SimExit {
    Restart(RestartCause),
    Boot(PartitionSelect),
}

pub struct SimPlatform {
    config: SimConfig,
    started: Instant,
    hw_init_calls: u32,
    table_calls: u32,
    lines: Vec<String>,
}

impl SimPlatform {
    pub fn new(config: SimConfig) -> Self {
        Self {
            config,
            started: Instant::now(),
            hw_init_calls: 0,
            table_calls: 0,
            lines: Vec::new(),
        }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    fn log(&mut self, level: Level, message: &str) {
        let timestamp_ms = u32::try_from(self.started.elapsed().as_millis()).unwrap_or(u32::MAX);
        let line = IdfLine {
            level,
            timestamp_ms,
            tag: LOG_TAG,
            message: &message,
        };
        self.lines.push(line.to_string());
    }
}

impl BootPlatform for SimPlatform {
    type Table = ();
    type Exit = SimExit;

    fn hardware_init(&mut self) -> Result<(), PlatformError> {
        self.hw_init_calls += 1;
        if self.hw_init_calls <= self.config.hw_init_failures {
            Err(PlatformError::Esp(-1))
        } else {
            Ok(())
        }
    }

    fn read_settings_u8(&mut self, _request: &ReadRequest) -> Result<u8, SettingsError> {
        if let Some(code) = self.config.read_error {
            return Err(SettingsError::from_esp_code(code));
        }
        self.config.flag.ok_or(SettingsError::NotFound)
    }

    fn load_partition_table(&mut self) -> Result<(), PlatformError> {
        self.table_calls += 1;
        if self.table_calls <= self.config.table_failures {
            Err(PlatformError::Failed)
        } else {
            Ok(())
        }
    }

    fn report(&mut self, event: BootEvent) {
        self.log(event.level(), event.message());
    }

    fn enter(&mut self, state: BootState) {
        if self.config.trace {
            self.log(Level::Info, &format!("-> {state:?}"));
        }
    }

    fn restart(&mut self, cause: RestartCause) -> SimExit {
        SimExit::Restart(cause)
    }

    fn load_boot_image(&mut self, _table: (), select: PartitionSelect) -> SimExit {
        SimExit::Boot(select)
    }
}

/// Outcome of a simulated power-on, including any restarts.
#[derive(Debug)]
pub struct SimReport {
    pub select: PartitionSelect,
    pub restarts: u32,
}

/// Boot until an image is selected, restarting on fatal errors.
///
/// On hardware the restart loop is unbounded; here it gives up after
/// `restart_limit` restarts. The log stays available on `platform` either way.
pub fn simulate(platform: &mut SimPlatform, restart_limit: u32) -> Result<SimReport> {
    let mut restarts = 0;

    loop {
        match run_boot(platform) {
            SimExit::Boot(select) => return Ok(SimReport { select, restarts }),
            SimExit::Restart(cause) => {
                restarts += 1;
                if restarts > restart_limit {
                    bail!("device restarted {restarts} times, last cause: {cause:?}");
                }
            }
        }
    }
}
