// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ADNT Sarl <info@adnt.io>

//! Boot partition selection FSM - pure logic without hardware dependencies.
//!
//! The sequence is `HwInit -> FlagRead -> TableLoad -> ImageLoad`, with
//! `Restart` reachable from `HwInit` and `TableLoad`. Every collaborator
//! (hardware bring-up, settings store, partition table, image loader, reset)
//! sits behind [`BootPlatform`], so the decision logic can be exercised on
//! the host with a recording platform.

use log::Level;

use crate::settings::{
    update_requested, ReadRequest, SettingsError, FACTORY_SELECT_RAW, UPDATE_PARTITION_INDEX,
};

/// Which application image the image loader should start.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PartitionSelect {
    /// Let the loader pick the default/factory image.
    Factory,
    /// Explicit application slot.
    Index(u8),
}

impl PartitionSelect {
    pub fn from_update_flag(update: bool) -> Self {
        if update {
            Self::Index(UPDATE_PARTITION_INDEX)
        } else {
            Self::Factory
        }
    }

    /// Selector value as passed to the image loader.
    pub fn as_raw(self) -> i32 {
        match self {
            Self::Factory => FACTORY_SELECT_RAW,
            Self::Index(index) => i32::from(index),
        }
    }

    pub fn is_update(self) -> bool {
        self == Self::Index(UPDATE_PARTITION_INDEX)
    }
}

/// States of the boot sequence.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BootState {
    HwInit,
    FlagRead,
    TableLoad,
    ImageLoad,
    Restart,
}

/// Why the boot attempt is abandoned with a device reset.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RestartCause {
    HardwareInit,
    PartitionTable,
}

/// Failure of a fatal boot step.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlatformError {
    /// SDK call returned a non-`ESP_OK` code.
    Esp(i32),
    /// SDK call reported failure without a code.
    Failed,
}

/// Status lines emitted while booting.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BootEvent {
    BootingMain,
    BootingUpdate,
    HardwareInitFailed,
    PartitionTableFailed,
}

impl BootEvent {
    pub fn message(self) -> &'static str {
        match self {
            Self::BootingMain => "Booting Main...",
            Self::BootingUpdate => "Booting Update...",
            Self::HardwareInitFailed => "hardware init error!",
            Self::PartitionTableFailed => "load partition table error!",
        }
    }

    /// Boot path lines are logged at error level so they survive the
    /// bootloader's usual log filtering.
    pub fn level(self) -> Level {
        Level::Error
    }

    pub fn is_boot_path(self) -> bool {
        matches!(self, Self::BootingMain | Self::BootingUpdate)
    }
}

/// Collaborators the boot sequence depends on.
///
/// On target `Exit` is uninhabited: `restart` and `load_boot_image` never
/// return. Host implementations use it to record how the sequence ended.
pub trait BootPlatform {
    /// Loaded partition table.
    type Table;
    type Exit;

    fn hardware_init(&mut self) -> Result<(), PlatformError>;

    fn read_settings_u8(&mut self, request: &ReadRequest) -> Result<u8, SettingsError>;

    fn load_partition_table(&mut self) -> Result<Self::Table, PlatformError>;

    fn report(&mut self, event: BootEvent);

    /// Called on entry to every state.
    fn enter(&mut self, _state: BootState) {}

    fn restart(&mut self, cause: RestartCause) -> Self::Exit;

    fn load_boot_image(&mut self, table: Self::Table, select: PartitionSelect) -> Self::Exit;
}

enum Stage<T> {
    HwInit,
    FlagRead,
    TableLoad(PartitionSelect),
    ImageLoad(T, PartitionSelect),
    Restart(RestartCause),
}

impl<T> Stage<T> {
    fn state(&self) -> BootState {
        match self {
            Stage::HwInit => BootState::HwInit,
            Stage::FlagRead => BootState::FlagRead,
            Stage::TableLoad(_) => BootState::TableLoad,
            Stage::ImageLoad(..) => BootState::ImageLoad,
            Stage::Restart(_) => BootState::Restart,
        }
    }
}

/// Read the update flag and turn it into a partition selector.
///
/// A failed or rejected read is treated as "no update".
pub fn select_partition<P: BootPlatform>(platform: &mut P) -> PartitionSelect {
    let request = ReadRequest::update_flag();
    let read = request
        .validate()
        .and_then(|()| platform.read_settings_u8(&request));

    let select = PartitionSelect::from_update_flag(update_requested(read));
    if select.is_update() {
        platform.report(BootEvent::BootingUpdate);
    } else {
        platform.report(BootEvent::BootingMain);
    }
    select
}

/// Run the boot sequence to its terminal state.
///
/// Returns whatever the platform's terminal action returns; on target that
/// is never.
pub fn run_boot<P: BootPlatform>(platform: &mut P) -> P::Exit {
    let mut stage = Stage::HwInit;

    loop {
        platform.enter(stage.state());

        stage = match stage {
            Stage::HwInit => match platform.hardware_init() {
                Ok(()) => Stage::FlagRead,
                Err(_) => {
                    platform.report(BootEvent::HardwareInitFailed);
                    Stage::Restart(RestartCause::HardwareInit)
                }
            },
            Stage::FlagRead => Stage::TableLoad(select_partition(platform)),
            Stage::TableLoad(select) => match platform.load_partition_table() {
                Ok(table) => Stage::ImageLoad(table, select),
                Err(_) => {
                    platform.report(BootEvent::PartitionTableFailed);
                    Stage::Restart(RestartCause::PartitionTable)
                }
            },
            Stage::ImageLoad(table, select) => return platform.load_boot_image(table, select),
            Stage::Restart(cause) => return platform.restart(cause),
        };
    }
}
