// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use core::alloc::Layout;
use core::ptr::NonNull;

use crate::error::AllocError;

/// Initial contents of a freshly allocated block.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AllocInit {
    /// The new memory is left uninitialized.
    Uninitialized,
    /// The new memory is zeroed.
    Zeroed,
}

/// Source of raw memory blocks for a [`RawBuffer`](crate::RawBuffer).
///
/// Buffers never request zero-sized blocks: zero-capacity buffers and
/// buffers of zero-sized types are represented without touching the
/// allocator.
pub trait Allocator {
    /// Allocates a block that fits `layout`.
    ///
    /// # Errors
    ///
    /// Returns [`AllocError::OutOfMemory`] if the block cannot be provided.
    fn allocate(&self, layout: Layout, init: AllocInit) -> Result<NonNull<u8>, AllocError>;

    /// Frees a block previously returned by [`allocate`](Allocator::allocate).
    ///
    /// # Safety
    ///
    /// `ptr` must come from `allocate` on this allocator (or a clone sharing
    /// its state) with the same `layout`, and must not have been freed yet.
    unsafe fn deallocate(&self, ptr: NonNull<u8>, layout: Layout);
}

impl<A: Allocator + ?Sized> Allocator for &A {
    #[inline]
    fn allocate(&self, layout: Layout, init: AllocInit) -> Result<NonNull<u8>, AllocError> {
        (**self).allocate(layout, init)
    }

    #[inline]
    unsafe fn deallocate(&self, ptr: NonNull<u8>, layout: Layout) {
        // SAFETY: forwarded verbatim, caller upholds the contract
        unsafe { (**self).deallocate(ptr, layout) }
    }
}
