// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ADNT Sarl <info@adnt.io>

//! Persisted settings consulted by the boot selector.
//!
//! The settings store itself (NVS) is provided by the bootloader SDK; this
//! module only describes what is asked of it and how the answer is read.

// --- Settings location ---

/// Label of the NVS data partition holding the settings.
pub const SETTINGS_PARTITION: &str = "nvs";
pub const UPDATE_NAMESPACE: &str = "system";
pub const UPDATE_KEY: &str = "update";

/// Flag value that requests booting the update partition.
pub const UPDATE_REQUESTED: u8 = 1;

// --- Partition selection ---

/// Index handed to the image loader when an update is requested.
pub const UPDATE_PARTITION_INDEX: u8 = 0;
/// Raw selector value meaning "default/factory partition".
pub const FACTORY_SELECT_RAW: i32 = -1;

/// NVS namespace and key names are at most 15 bytes (16 with the NUL).
pub const NVS_KEY_NAME_MAX_LEN: usize = 15;

pub const LOG_TAG: &str = "MLFF_BOOT";

// --- SDK error codes (`esp_err_t`) ---

pub const ESP_OK: i32 = 0;
pub const ESP_FAIL: i32 = -1;
pub const ESP_ERR_INVALID_ARG: i32 = 0x102;
pub const ESP_ERR_NOT_FOUND: i32 = 0x105;

pub const ESP_ERR_NVS_BASE: i32 = 0x1100;
pub const ESP_ERR_NVS_NOT_INITIALIZED: i32 = ESP_ERR_NVS_BASE + 0x01;
pub const ESP_ERR_NVS_NOT_FOUND: i32 = ESP_ERR_NVS_BASE + 0x02;
pub const ESP_ERR_NVS_TYPE_MISMATCH: i32 = ESP_ERR_NVS_BASE + 0x03;
pub const ESP_ERR_NVS_INVALID_NAME: i32 = ESP_ERR_NVS_BASE + 0x06;
pub const ESP_ERR_NVS_KEY_TOO_LONG: i32 = ESP_ERR_NVS_BASE + 0x09;
pub const ESP_ERR_NVS_PART_NOT_FOUND: i32 = ESP_ERR_NVS_BASE + 0x0F;

/// NVS value type codes (`nvs_type_t`).
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ValueType {
    U8 = 0x01,
    I8 = 0x11,
    U16 = 0x02,
    I16 = 0x12,
    U32 = 0x04,
    I32 = 0x14,
    U64 = 0x08,
    I64 = 0x18,
    Str = 0x21,
}

impl ValueType {
    pub fn code(self) -> u8 {
        self as u8
    }
}

/// Why a settings read produced no usable value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SettingsError {
    /// The settings partition could not be opened (carries the SDK error code).
    StoreUnavailable(i32),
    NotFound,
    TypeMismatch,
    InvalidName,
    /// Any other per-record failure reported by the store.
    Read(i32),
}

impl SettingsError {
    /// Classify a non-`ESP_OK` code returned by the NVS reader.
    pub fn from_esp_code(code: i32) -> Self {
        match code {
            ESP_ERR_NVS_NOT_FOUND | ESP_ERR_NOT_FOUND => Self::NotFound,
            ESP_ERR_NVS_TYPE_MISMATCH => Self::TypeMismatch,
            ESP_ERR_NVS_INVALID_NAME | ESP_ERR_NVS_KEY_TOO_LONG => Self::InvalidName,
            ESP_ERR_NVS_PART_NOT_FOUND | ESP_ERR_NVS_NOT_INITIALIZED => {
                Self::StoreUnavailable(code)
            }
            _ => Self::Read(code),
        }
    }
}

/// A single typed lookup in the settings store.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReadRequest {
    pub partition: &'static str,
    pub namespace: &'static str,
    pub key: &'static str,
    pub value_type: ValueType,
}

impl ReadRequest {
    /// The `"system"/"update"` u8 lookup in the `"nvs"` partition.
    pub const fn update_flag() -> Self {
        Self {
            partition: SETTINGS_PARTITION,
            namespace: UPDATE_NAMESPACE,
            key: UPDATE_KEY,
            value_type: ValueType::U8,
        }
    }

    /// Check the names against the NVS limits.
    pub fn validate(&self) -> Result<(), SettingsError> {
        if is_valid_name(self.partition)
            && is_valid_name(self.namespace)
            && is_valid_name(self.key)
        {
            Ok(())
        } else {
            Err(SettingsError::InvalidName)
        }
    }
}

fn is_valid_name(name: &str) -> bool {
    !name.is_empty() && name.len() <= NVS_KEY_NAME_MAX_LEN && !name.as_bytes().contains(&0)
}

/// Interpret the outcome of the update-flag read.
///
/// Only a successful read of exactly [`UPDATE_REQUESTED`] asks for the
/// update partition; every failure means "no update".
pub fn update_requested(read: Result<u8, SettingsError>) -> bool {
    matches!(read, Ok(UPDATE_REQUESTED))
}
