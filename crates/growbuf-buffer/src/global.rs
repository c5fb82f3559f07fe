// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use alloc::alloc::{alloc, alloc_zeroed, dealloc};
use core::alloc::Layout;
use core::ptr::NonNull;

use crate::error::AllocError;
use crate::traits::{AllocInit, Allocator};

/// The process-wide allocator registered with `#[global_allocator]`.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Global;

impl Allocator for Global {
    fn allocate(&self, layout: Layout, init: AllocInit) -> Result<NonNull<u8>, AllocError> {
        debug_assert!(layout.size() != 0, "zero-sized blocks are never requested");

        // SAFETY: layout has a non-zero size
        let ptr = unsafe {
            match init {
                AllocInit::Uninitialized => alloc(layout),
                AllocInit::Zeroed => alloc_zeroed(layout),
            }
        };

        NonNull::new(ptr).ok_or(AllocError::OutOfMemory {
            size: layout.size(),
            align: layout.align(),
        })
    }

    unsafe fn deallocate(&self, ptr: NonNull<u8>, layout: Layout) {
        // SAFETY (PRECONDITIONS ARE MET): ptr was returned by `allocate` with this layout
        unsafe { dealloc(ptr.as_ptr(), layout) }
    }
}
