// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ADNT Sarl <info@adnt.io>

//! ESP-IDF console line format.
//!
//! The bootloader prints its own status as `E (1234) tag: message`; our
//! lines use the same shape so they read as part of the same stream on
//! `idf.py monitor` or any serial terminal.

use core::fmt;

use log::Level;

/// Single-letter level prefix used by ESP-IDF logs.
pub fn level_letter(level: Level) -> char {
    match level {
        Level::Error => 'E',
        Level::Warn => 'W',
        Level::Info => 'I',
        Level::Debug => 'D',
        Level::Trace => 'V',
    }
}

/// One log line, rendered without the trailing newline.
pub struct IdfLine<'a> {
    pub level: Level,
    /// Milliseconds since boot.
    pub timestamp_ms: u32,
    pub tag: &'a str,
    pub message: &'a dyn fmt::Display,
}

impl fmt::Display for IdfLine<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({}) {}: {}",
            level_letter(self.level),
            self.timestamp_ms,
            self.tag,
            self.message
        )
    }
}
