// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ADNT Sarl <info@adnt.io>

//! `BootPlatform` backed by the ESP-IDF bootloader components.

use core::convert::Infallible;

use mlff_common::settings::{ReadRequest, SettingsError, LOG_TAG};
use mlff_common::{BootEvent, BootPlatform, BootState, PartitionSelect, PlatformError, RestartCause};

use crate::idf::{self, BootloaderState};

pub struct IdfPlatform {
    _private: (),
}

impl IdfPlatform {
    /// Only the boot entry point may own the platform.
    pub(crate) fn new() -> Self {
        Self { _private: () }
    }
}

impl BootPlatform for IdfPlatform {
    type Table = BootloaderState;
    type Exit = Infallible;

    fn hardware_init(&mut self) -> Result<(), PlatformError> {
        idf::init()
    }

    fn read_settings_u8(&mut self, request: &ReadRequest) -> Result<u8, SettingsError> {
        let read = idf::nvs_read_u8(request);
        if let Err(err) = read {
            log::debug!(
                target: LOG_TAG,
                "{}/{} unavailable: {:?}",
                request.namespace,
                request.key,
                err
            );
        }
        read
    }

    fn load_partition_table(&mut self) -> Result<BootloaderState, PlatformError> {
        idf::load_partition_table()
    }

    fn report(&mut self, event: BootEvent) {
        log::log!(target: LOG_TAG, event.level(), "{}", event.message());
    }

    fn enter(&mut self, state: BootState) {
        log::trace!(target: LOG_TAG, "-> {:?}", state);
    }

    fn restart(&mut self, cause: RestartCause) -> Infallible {
        log::trace!(target: LOG_TAG, "restarting ({:?})", cause);
        idf::reset()
    }

    fn load_boot_image(&mut self, table: BootloaderState, select: PartitionSelect) -> Infallible {
        log::debug!(
            target: LOG_TAG,
            "loading image, {} apps, selector {}",
            table.app_count,
            select.as_raw()
        );
        idf::load_boot_image(&table, select.as_raw())
    }
}
