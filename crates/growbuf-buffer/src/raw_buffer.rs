// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! RawBuffer - owned block of element slots.
//!
//! The buffer only tracks storage. Which slots hold live values is the
//! owner's business: dropping a `RawBuffer` frees the block without running
//! any element destructor.

use core::alloc::Layout;
use core::marker::PhantomData;
use core::mem;
use core::ptr::{self, NonNull};

use log::{debug, error, trace};

use crate::error::AllocError;
use crate::global::Global;
use crate::traits::{AllocInit, Allocator};

/// An owned, contiguous block of `capacity` slots for values of type `T`.
///
/// Zero-capacity buffers and buffers of zero-sized types never touch the
/// allocator; their pointer is dangling but well aligned.
///
/// # Example
///
/// ```rust
/// use growbuf_buffer::{AllocError, AllocInit, RawBuffer};
///
/// fn example() -> Result<(), AllocError> {
///     let mut buffer = RawBuffer::<u32>::try_with_capacity(4, AllocInit::Zeroed)?;
///     assert_eq!(buffer.capacity(), 4);
///
///     // Move slots [0, 4) into an 8-slot block, starting at slot 2.
///     unsafe { buffer.relocate(8, 0, 4, 2, AllocInit::Uninitialized)? };
///     assert_eq!(buffer.capacity(), 8);
///     Ok(())
/// }
/// # example().unwrap();
/// ```
pub struct RawBuffer<T, A: Allocator = Global> {
    ptr: NonNull<T>,
    capacity: usize,
    alloc: A,
    _marker: PhantomData<T>,
}

// SAFETY: RawBuffer owns its block exclusively, like Box<[T]>
unsafe impl<T: Send, A: Allocator + Send> Send for RawBuffer<T, A> {}
// SAFETY: shared access only hands out raw pointers; writes require the owner's &mut
unsafe impl<T: Sync, A: Allocator + Sync> Sync for RawBuffer<T, A> {}

impl<T> RawBuffer<T, Global> {
    /// Creates an empty buffer with zero capacity backed by [`Global`].
    pub const fn new() -> Self {
        Self::new_in(Global)
    }

    /// Allocates a buffer of `capacity` slots backed by [`Global`].
    ///
    /// # Errors
    ///
    /// Returns [`AllocError`] if the block cannot be allocated.
    pub fn try_with_capacity(capacity: usize, init: AllocInit) -> Result<Self, AllocError> {
        Self::try_with_capacity_in(capacity, init, Global)
    }
}

impl<T> Default for RawBuffer<T, Global> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, A: Allocator> RawBuffer<T, A> {
    const IS_ZST: bool = mem::size_of::<T>() == 0;

    /// Creates an empty buffer with zero capacity.
    pub const fn new_in(alloc: A) -> Self {
        Self {
            ptr: NonNull::dangling(),
            capacity: 0,
            alloc,
            _marker: PhantomData,
        }
    }

    /// Allocates a buffer of `capacity` slots from `alloc`.
    ///
    /// # Errors
    ///
    /// Returns [`AllocError`] if the block cannot be allocated; `alloc` is
    /// dropped in that case.
    pub fn try_with_capacity_in(
        capacity: usize,
        init: AllocInit,
        alloc: A,
    ) -> Result<Self, AllocError> {
        let ptr = Self::allocate_slots(&alloc, capacity, init)?;

        Ok(Self {
            ptr,
            capacity,
            alloc,
            _marker: PhantomData,
        })
    }

    /// Returns the number of slots in the buffer.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns a reference to the allocator backing this buffer.
    #[inline]
    pub fn allocator(&self) -> &A {
        &self.alloc
    }

    /// Returns a raw pointer to the first slot.
    #[inline]
    pub fn as_ptr(&self) -> *const T {
        self.ptr.as_ptr()
    }

    /// Returns a raw mutable pointer to the first slot.
    #[inline]
    pub fn as_mut_ptr(&mut self) -> *mut T {
        self.ptr.as_ptr()
    }

    /// Returns a raw pointer to slot `index`.
    ///
    /// # Safety
    ///
    /// `index <= capacity()`.
    #[inline]
    pub unsafe fn slot(&self, index: usize) -> *const T {
        debug_assert!(index <= self.capacity);
        // SAFETY (PRECONDITIONS ARE MET): index is within (or one past) the block
        unsafe { self.ptr.as_ptr().add(index) }
    }

    /// Returns a raw mutable pointer to slot `index`.
    ///
    /// # Safety
    ///
    /// `index <= capacity()`.
    #[inline]
    pub unsafe fn slot_mut(&mut self, index: usize) -> *mut T {
        debug_assert!(index <= self.capacity);
        // SAFETY (PRECONDITIONS ARE MET): index is within (or one past) the block
        unsafe { self.ptr.as_ptr().add(index) }
    }

    /// Moves `count` slots starting at `src` into a fresh block of
    /// `new_capacity` slots, placing them at `dst`, then frees the old block.
    ///
    /// Only the `count` slots are copied, never the whole old capacity. On
    /// error nothing changes: the old block, its contents and the capacity
    /// are left exactly as they were.
    ///
    /// # Safety
    ///
    /// - `src + count <= capacity()`
    /// - `dst + count <= new_capacity`
    ///
    /// Every pointer previously derived from this buffer dangles once this
    /// returns `Ok`.
    ///
    /// # Errors
    ///
    /// Returns [`AllocError`] if the new block cannot be allocated.
    pub unsafe fn relocate(
        &mut self,
        new_capacity: usize,
        src: usize,
        count: usize,
        dst: usize,
        init: AllocInit,
    ) -> Result<(), AllocError> {
        debug_assert!(src + count <= self.capacity);
        debug_assert!(dst + count <= new_capacity);

        let new_ptr = Self::allocate_slots(&self.alloc, new_capacity, init)?;

        trace!(
            "relocating {} slots: [{}..{}) of {} -> [{}..{}) of {}",
            count,
            src,
            src + count,
            self.capacity,
            dst,
            dst + count,
            new_capacity
        );

        // SAFETY (PRECONDITIONS ARE MET): both ranges are in bounds and the blocks are distinct
        unsafe {
            ptr::copy_nonoverlapping(self.ptr.as_ptr().add(src), new_ptr.as_ptr().add(dst), count);
        }

        let old_capacity = self.capacity;
        self.free_block();
        self.ptr = new_ptr;
        self.capacity = new_capacity;

        debug!("buffer grew from {} to {} slots", old_capacity, new_capacity);

        Ok(())
    }

    /// Frees the block and leaves the buffer with zero capacity.
    ///
    /// Slot contents are discarded without being dropped.
    pub fn release(&mut self) {
        self.free_block();
        self.ptr = NonNull::dangling();
        self.capacity = 0;
    }

    fn layout_for(capacity: usize) -> Result<Layout, AllocError> {
        Layout::array::<T>(capacity).map_err(|_| AllocError::CapacityOverflow)
    }

    fn allocate_slots(alloc: &A, capacity: usize, init: AllocInit) -> Result<NonNull<T>, AllocError> {
        if Self::IS_ZST || capacity == 0 {
            return Ok(NonNull::dangling());
        }

        let layout = Self::layout_for(capacity)?;

        match alloc.allocate(layout, init) {
            Ok(ptr) => Ok(ptr.cast()),
            Err(e) => {
                error!(
                    "failed to allocate {} slots ({} bytes): {}",
                    capacity,
                    layout.size(),
                    e
                );
                Err(e)
            }
        }
    }

    fn free_block(&mut self) {
        if Self::IS_ZST || self.capacity == 0 {
            return;
        }

        // Infallible here: the same layout was computed when the block was allocated.
        if let Ok(layout) = Self::layout_for(self.capacity) {
            // SAFETY (PRECONDITIONS ARE MET): ptr was allocated by self.alloc with this layout
            unsafe { self.alloc.deallocate(self.ptr.cast(), layout) }
        }
    }
}

impl<T, A: Allocator> Drop for RawBuffer<T, A> {
    fn drop(&mut self) {
        self.free_block();
    }
}

impl<T, A: Allocator> core::fmt::Debug for RawBuffer<T, A> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("RawBuffer")
            .field("capacity", &self.capacity)
            .finish_non_exhaustive()
    }
}
