// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ADNT Sarl <info@adnt.io>

//! MLFF second-stage bootloader hook for ESP32.
//!
//! Replaces the bootloader `main` component: the ROM loader jumps to
//! `call_start_cpu0`, which reads the `system/update` flag from NVS and boots
//! either the factory image or update slot 0. Everything else (flash, cache,
//! partition table, image loading) is done by the ESP-IDF bootloader support
//! components this library is linked against.
//!
//! Only meaningful on the bare-metal target; host builds are empty so the
//! workspace can still be built and tested on a development machine.

#![cfg_attr(target_os = "none", no_std)]

#[cfg(target_os = "none")]
mod idf;
#[cfg(target_os = "none")]
mod logger;
#[cfg(target_os = "none")]
mod platform;
#[cfg(all(target_os = "none", feature = "newlib"))]
mod runtime;

#[cfg(target_os = "none")]
mod entry {
    use mlff_common::settings::LOG_TAG;

    use crate::platform::IdfPlatform;
    use crate::{idf, logger};

    /// We arrive here after the ROM loader has copied this stage to RAM.
    /// Hardware is mostly uninitialized and the flash cache is down, but
    /// there is a stack.
    #[unsafe(no_mangle)]
    pub extern "C" fn call_start_cpu0() -> ! {
        // SAFETY: first thing on the only running core.
        unsafe { logger::init() };

        let mut platform = IdfPlatform::new();
        match mlff_common::run_boot(&mut platform) {}
    }

    /// A panic is one more fatal condition: log it and start over.
    #[panic_handler]
    fn panic(info: &core::panic::PanicInfo) -> ! {
        log::error!(target: LOG_TAG, "{}", info);
        idf::reset()
    }
}
