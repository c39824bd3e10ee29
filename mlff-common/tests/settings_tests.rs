// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ADNT Sarl <info@adnt.io>

//! Unit tests for settings constants and the update-flag read request.

use mlff_common::settings::{
    update_requested, ReadRequest, SettingsError, ValueType, ESP_ERR_NOT_FOUND,
    ESP_ERR_NVS_NOT_FOUND, ESP_ERR_NVS_PART_NOT_FOUND, ESP_FAIL, FACTORY_SELECT_RAW, LOG_TAG,
    NVS_KEY_NAME_MAX_LEN, SETTINGS_PARTITION, UPDATE_KEY, UPDATE_NAMESPACE,
    UPDATE_PARTITION_INDEX, UPDATE_REQUESTED,
};

fn make_request(namespace: &'static str, key: &'static str) -> ReadRequest {
    ReadRequest {
        namespace,
        key,
        ..ReadRequest::update_flag()
    }
}

// --- Constants tests ---

#[test]
fn test_settings_location() {
    assert_eq!(SETTINGS_PARTITION, "nvs");
    assert_eq!(UPDATE_NAMESPACE, "system");
    assert_eq!(UPDATE_KEY, "update");
}

#[test]
fn test_selector_constants() {
    assert_eq!(UPDATE_REQUESTED, 1);
    assert_eq!(UPDATE_PARTITION_INDEX, 0);
    assert_eq!(FACTORY_SELECT_RAW, -1);
}

#[test]
fn test_log_tag() {
    assert_eq!(LOG_TAG, "MLFF_BOOT");
}

#[test]
fn test_value_type_codes() {
    assert_eq!(ValueType::U8.code(), 0x01);
    assert_eq!(ValueType::I8.code(), 0x11);
    assert_eq!(ValueType::U16.code(), 0x02);
    assert_eq!(ValueType::I16.code(), 0x12);
    assert_eq!(ValueType::U32.code(), 0x04);
    assert_eq!(ValueType::I32.code(), 0x14);
    assert_eq!(ValueType::U64.code(), 0x08);
    assert_eq!(ValueType::I64.code(), 0x18);
    assert_eq!(ValueType::Str.code(), 0x21);
}

// --- ReadRequest tests ---

#[test]
fn test_update_flag_request() {
    let request = ReadRequest::update_flag();
    assert_eq!(request.partition, SETTINGS_PARTITION);
    assert_eq!(request.namespace, UPDATE_NAMESPACE);
    assert_eq!(request.key, UPDATE_KEY);
    assert_eq!(request.value_type, ValueType::U8);
}

#[test]
fn test_update_flag_request_is_valid() {
    assert_eq!(ReadRequest::update_flag().validate(), Ok(()));
}

#[test]
fn test_name_at_max_length_is_valid() {
    let request = make_request("system", "fifteen_chars__");
    assert_eq!(request.key.len(), NVS_KEY_NAME_MAX_LEN);
    assert_eq!(request.validate(), Ok(()));
}

#[test]
fn test_name_too_long_is_rejected() {
    let request = make_request("system", "sixteen_chars___");
    assert_eq!(request.validate(), Err(SettingsError::InvalidName));
}

#[test]
fn test_empty_names_are_rejected() {
    assert_eq!(
        make_request("", "update").validate(),
        Err(SettingsError::InvalidName)
    );
    assert_eq!(
        make_request("system", "").validate(),
        Err(SettingsError::InvalidName)
    );
}

#[test]
fn test_name_with_nul_is_rejected() {
    let request = make_request("sys\0tem", "update");
    assert_eq!(request.validate(), Err(SettingsError::InvalidName));
}

// --- update_requested tests ---

#[test]
fn test_update_requested_only_for_one() {
    assert!(update_requested(Ok(1)));
    assert!(!update_requested(Ok(0)));
    assert!(!update_requested(Ok(2)));
    assert!(!update_requested(Ok(u8::MAX)));
}

#[test]
fn test_update_requested_false_on_any_error() {
    assert!(!update_requested(Err(SettingsError::NotFound)));
    assert!(!update_requested(Err(SettingsError::StoreUnavailable(-1))));
    assert!(!update_requested(Err(SettingsError::TypeMismatch)));
    assert!(!update_requested(Err(SettingsError::InvalidName)));
    assert!(!update_requested(Err(SettingsError::Read(0x1102))));
}

// --- SettingsError::from_esp_code tests ---

#[test]
fn test_error_from_not_found_codes() {
    assert_eq!(
        SettingsError::from_esp_code(ESP_ERR_NVS_NOT_FOUND),
        SettingsError::NotFound
    );
    assert_eq!(
        SettingsError::from_esp_code(ESP_ERR_NOT_FOUND),
        SettingsError::NotFound
    );
}

#[test]
fn test_error_from_type_mismatch() {
    assert_eq!(
        SettingsError::from_esp_code(0x1103),
        SettingsError::TypeMismatch
    );
}

#[test]
fn test_error_from_name_codes() {
    assert_eq!(
        SettingsError::from_esp_code(0x1106),
        SettingsError::InvalidName
    );
    assert_eq!(
        SettingsError::from_esp_code(0x1109),
        SettingsError::InvalidName
    );
}

#[test]
fn test_error_from_partition_codes() {
    assert_eq!(
        SettingsError::from_esp_code(ESP_ERR_NVS_PART_NOT_FOUND),
        SettingsError::StoreUnavailable(0x110F)
    );
    assert_eq!(
        SettingsError::from_esp_code(0x1101),
        SettingsError::StoreUnavailable(0x1101)
    );
}

#[test]
fn test_error_from_other_codes() {
    assert_eq!(SettingsError::from_esp_code(ESP_FAIL), SettingsError::Read(-1));
    assert_eq!(
        SettingsError::from_esp_code(0x1234),
        SettingsError::Read(0x1234)
    );
}
