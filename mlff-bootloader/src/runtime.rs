// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ADNT Sarl <info@adnt.io>

//! newlib reentrancy hook.
//!
//! If any newlib function ends up linked into the bootloader it asks for the
//! current `struct _reent` through `__getreent`. There is a single thread, so
//! the answer is always the global one set up by the C runtime before
//! `call_start_cpu0` runs.

use core::ptr::{self, NonNull};

/// Opaque `struct _reent`.
#[repr(C)]
pub struct Reent {
    _private: [u8; 0],
}

#[allow(non_upper_case_globals)]
unsafe extern "C" {
    static _global_impure_ptr: *mut Reent;
}

/// Handle to the process-wide reentrancy state. Pass it to whatever needs
/// newlib state instead of reaching for the global.
#[derive(Clone, Copy)]
pub struct ReentContext(NonNull<Reent>);

impl ReentContext {
    /// The context installed by the runtime, if it has been set up.
    pub fn global() -> Option<Self> {
        let raw = unsafe { ptr::addr_of!(_global_impure_ptr).read() };
        NonNull::new(raw).map(Self)
    }

    pub fn as_ptr(self) -> *mut Reent {
        self.0.as_ptr()
    }
}

#[unsafe(no_mangle)]
pub extern "C" fn __getreent() -> *mut Reent {
    ReentContext::global().map_or(ptr::null_mut(), ReentContext::as_ptr)
}
