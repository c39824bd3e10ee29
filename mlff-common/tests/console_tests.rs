// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ADNT Sarl <info@adnt.io>

//! Unit tests for the console line format.

use log::Level;
use mlff_common::console::{level_letter, IdfLine};
use mlff_common::{BootEvent, LOG_TAG};

fn make_line(level: Level, timestamp_ms: u32, message: &str) -> String {
    IdfLine {
        level,
        timestamp_ms,
        tag: LOG_TAG,
        message: &message,
    }
    .to_string()
}

// --- Level prefix tests ---

#[test]
fn test_level_letters() {
    assert_eq!(level_letter(Level::Error), 'E');
    assert_eq!(level_letter(Level::Warn), 'W');
    assert_eq!(level_letter(Level::Info), 'I');
    assert_eq!(level_letter(Level::Debug), 'D');
    assert_eq!(level_letter(Level::Trace), 'V');
}

// --- Line format tests ---

#[test]
fn test_boot_lines_are_plain_text() {
    let event = BootEvent::BootingMain;
    assert_eq!(
        make_line(event.level(), 312, event.message()),
        "E (312) MLFF_BOOT: Booting Main..."
    );

    let event = BootEvent::PartitionTableFailed;
    assert_eq!(
        make_line(event.level(), 45, event.message()),
        "E (45) MLFF_BOOT: load partition table error!"
    );
}

#[test]
fn test_line_has_no_newline() {
    let line = make_line(Level::Info, 0, "-> HwInit");
    assert_eq!(line, "I (0) MLFF_BOOT: -> HwInit");
    assert!(!line.contains('\n'));
}

#[test]
fn test_line_with_format_args() {
    let line = IdfLine {
        level: Level::Debug,
        timestamp_ms: u32::MAX,
        tag: "boot",
        message: &format_args!("{}/{} unavailable", "system", "update"),
    }
    .to_string();
    assert_eq!(line, "D (4294967295) boot: system/update unavailable");
}
