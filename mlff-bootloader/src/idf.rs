// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ADNT Sarl <info@adnt.io>

//! Bindings to the ESP-IDF bootloader support components.
//!
//! The bootloader build links these in from `bootloader_support` and
//! `nvs_flash` (bootloader flavour). Only the handful of calls the boot
//! selector needs are declared, with safe wrappers returning `Result`.

use core::ffi::{c_char, c_int};

use mlff_common::settings::{ReadRequest, SettingsError, ESP_OK, NVS_KEY_NAME_MAX_LEN};
use mlff_common::PlatformError;

pub type EspErr = i32;

const MAX_OTA_SLOTS: usize = 16;

/// `esp_partition_pos_t`
#[repr(C)]
#[derive(Clone, Copy, Default)]
pub struct PartitionPos {
    pub offset: u32,
    pub size: u32,
}

/// `bootloader_state_t`, filled in by the partition table loader.
#[repr(C)]
#[derive(Clone, Copy, Default)]
pub struct BootloaderState {
    pub ota_info: PartitionPos,
    pub factory: PartitionPos,
    pub test: PartitionPos,
    pub ota: [PartitionPos; MAX_OTA_SLOTS],
    pub app_count: u32,
    pub selected_subtype: u32,
}

/// `nvs_bootloader_str_value_ref_t`
#[allow(dead_code)]
#[repr(C)]
#[derive(Clone, Copy)]
struct NvsStrValueRef {
    buff: *mut c_char,
    buff_len: usize,
}

/// `nvs_bootloader_value_t`
#[allow(dead_code)]
#[repr(C)]
#[derive(Clone, Copy)]
union NvsValue {
    u8_val: u8,
    u16_val: u16,
    u32_val: u32,
    u64_val: u64,
    str_val: NvsStrValueRef,
}

/// `nvs_bootloader_read_list_t`
#[repr(C)]
struct NvsReadListEntry {
    namespace_name: *const c_char,
    value_type: u32,
    key_name: *const c_char,
    result_code: EspErr,
    value: NvsValue,
    namespace_index: u8,
}

unsafe extern "C" {
    fn bootloader_init() -> EspErr;
    fn bootloader_reset() -> !;
    fn bootloader_utility_load_partition_table(bs: *mut BootloaderState) -> bool;
    fn bootloader_utility_load_boot_image(bs: *const BootloaderState, start_index: c_int) -> !;
    fn nvs_bootloader_read(
        partition_name: *const c_char,
        read_list_count: usize,
        read_list: *mut NvsReadListEntry,
    ) -> EspErr;
    fn esp_log_early_timestamp() -> u32;
}

/// NUL-terminated copy of an NVS name.
type CName = [u8; NVS_KEY_NAME_MAX_LEN + 1];

fn c_name(name: &str) -> Result<CName, SettingsError> {
    let bytes = name.as_bytes();
    if bytes.is_empty() || bytes.len() > NVS_KEY_NAME_MAX_LEN || bytes.contains(&0) {
        return Err(SettingsError::InvalidName);
    }
    let mut buf = [0u8; NVS_KEY_NAME_MAX_LEN + 1];
    buf[..bytes.len()].copy_from_slice(bytes);
    Ok(buf)
}

/// Early hardware bring-up: clocks, flash, cache, console.
pub fn init() -> Result<(), PlatformError> {
    match unsafe { bootloader_init() } {
        ESP_OK => Ok(()),
        code => Err(PlatformError::Esp(code)),
    }
}

/// Reset the chip. Never returns.
pub fn reset() -> ! {
    unsafe { bootloader_reset() }
}

/// Read a single u8 entry from an NVS partition.
///
/// Both the call status and the record's own status must be `ESP_OK`: the
/// reader reports missing keys per record, not through its return value.
pub fn nvs_read_u8(request: &ReadRequest) -> Result<u8, SettingsError> {
    let partition = c_name(request.partition)?;
    let namespace = c_name(request.namespace)?;
    let key = c_name(request.key)?;

    let mut entry = NvsReadListEntry {
        namespace_name: namespace.as_ptr().cast(),
        value_type: u32::from(request.value_type.code()),
        key_name: key.as_ptr().cast(),
        result_code: ESP_OK,
        value: NvsValue { u64_val: 0 },
        namespace_index: 0,
    };

    let ret = unsafe { nvs_bootloader_read(partition.as_ptr().cast(), 1, &mut entry) };
    if ret != ESP_OK {
        return Err(SettingsError::StoreUnavailable(ret));
    }
    if entry.result_code != ESP_OK {
        return Err(SettingsError::from_esp_code(entry.result_code));
    }

    Ok(unsafe { entry.value.u8_val })
}

/// Parse the partition table into a fresh bootloader state.
pub fn load_partition_table() -> Result<BootloaderState, PlatformError> {
    let mut bs = BootloaderState::default();
    if unsafe { bootloader_utility_load_partition_table(&mut bs) } {
        Ok(bs)
    } else {
        Err(PlatformError::Failed)
    }
}

/// Load, verify and jump to the application image chosen by `start_index`.
/// Never returns; on failure the loader resets the chip itself.
pub fn load_boot_image(bs: &BootloaderState, start_index: i32) -> ! {
    unsafe { bootloader_utility_load_boot_image(bs, start_index) }
}

/// Milliseconds since boot, as used by the IDF early log.
pub fn timestamp_ms() -> u32 {
    unsafe { esp_log_early_timestamp() }
}
