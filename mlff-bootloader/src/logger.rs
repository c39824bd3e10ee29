// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ADNT Sarl <info@adnt.io>

//! `log` sink printing ESP-IDF style lines on the ROM console.

use log::{LevelFilter, Metadata, Record};

use mlff_common::IdfLine;

use crate::idf;

struct ConsoleLogger;

static LOGGER: ConsoleLogger = ConsoleLogger;

impl log::Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let line = IdfLine {
                level: record.level(),
                timestamp_ms: idf::timestamp_ms(),
                tag: record.target(),
                message: record.args(),
            };
            esp_println::println!("{}", line);
        }
    }

    fn flush(&self) {}
}

/// `CONFIG_BOOTLOADER_LOG_LEVEL`, passed in by the IDF component build.
fn max_level() -> LevelFilter {
    match option_env!("MLFF_LOG_LEVEL") {
        Some("0") => LevelFilter::Off,
        Some("1") => LevelFilter::Error,
        Some("2") => LevelFilter::Warn,
        Some("4") => LevelFilter::Debug,
        Some("5") => LevelFilter::Trace,
        _ => LevelFilter::Info,
    }
}

/// Install the console logger.
///
/// # Safety
///
/// Must run once, on the boot core, before anything else logs.
pub unsafe fn init() {
    // The RISC-V targets lack compare-and-swap; only one core runs here.
    if unsafe { log::set_logger_racy(&LOGGER) }.is_ok() {
        unsafe { log::set_max_level_racy(max_level()) };
    }
}
