// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ADNT Sarl <info@adnt.io>

//! Common types and boot-selection logic for the MLFF bootloader hook.
//!
//! This crate supports both `no_std` (embedded) and `std` (host) environments:
//! - Default: `no_std` mode for the bootloader
//! - `std` feature: host tools and simulation

#![cfg_attr(not(feature = "std"), no_std)]

pub mod boot_fsm;
pub mod console;
pub mod settings;

// Re-export commonly used types
pub use boot_fsm::{
    run_boot, select_partition, BootEvent, BootPlatform, BootState, PartitionSelect, PlatformError,
    RestartCause,
};
pub use console::IdfLine;
pub use settings::{ReadRequest, SettingsError, ValueType};
pub use settings::{LOG_TAG, SETTINGS_PARTITION, UPDATE_KEY, UPDATE_NAMESPACE};
