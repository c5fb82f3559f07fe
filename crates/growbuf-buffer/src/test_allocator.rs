// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use alloc::rc::Rc;
use core::alloc::Layout;
use core::cell::Cell;
use core::ptr::NonNull;

use crate::error::AllocError;
use crate::global::Global;
use crate::traits::{AllocInit, Allocator};

/// Failure injection for [`TestAllocator`].
///
/// This is only available with the `test_utils` feature. The behaviour is
/// sticky: once set, it remains active until changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AllocatorBehaviour {
    /// Normal behaviour - no injected failures.
    None,
    /// Every `allocate()` call fails with `OutOfMemory`.
    FailAtAllocate,
    /// The next `n` allocations succeed, every later one fails.
    FailAfter(usize),
}

impl Default for AllocatorBehaviour {
    fn default() -> Self {
        Self::None
    }
}

#[derive(Debug, Default)]
struct AllocatorState {
    behaviour: Cell<AllocatorBehaviour>,
    allocations: Cell<usize>,
    deallocations: Cell<usize>,
    failures: Cell<usize>,
}

/// Counting allocator with failure injection, backed by [`Global`].
///
/// Clones share their counters and behaviour, so a test can keep one handle
/// while a container owns another.
///
/// # Example
///
/// ```rust
/// // test_utils feature required in dev-dependencies
/// use growbuf_buffer::{AllocInit, AllocatorBehaviour, RawBuffer, TestAllocator};
///
/// let alloc = TestAllocator::new();
/// alloc.change_behaviour(AllocatorBehaviour::FailAtAllocate);
///
/// let result = RawBuffer::<u8, _>::try_with_capacity_in(8, AllocInit::Uninitialized, alloc.clone());
/// assert!(result.is_err());
/// assert_eq!(alloc.failures(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct TestAllocator {
    state: Rc<AllocatorState>,
}

impl TestAllocator {
    /// Creates an allocator with no injected failures.
    pub fn new() -> Self {
        Self::default()
    }

    /// Changes the failure behaviour for this allocator and all its clones.
    pub fn change_behaviour(&self, behaviour: AllocatorBehaviour) {
        self.state.behaviour.set(behaviour);
    }

    /// Returns the active behaviour.
    pub fn behaviour(&self) -> AllocatorBehaviour {
        self.state.behaviour.get()
    }

    /// Number of successful allocations.
    pub fn allocations(&self) -> usize {
        self.state.allocations.get()
    }

    /// Number of deallocations.
    pub fn deallocations(&self) -> usize {
        self.state.deallocations.get()
    }

    /// Number of blocks currently allocated.
    pub fn live_allocations(&self) -> usize {
        self.allocations() - self.deallocations()
    }

    /// Number of rejected allocation requests.
    pub fn failures(&self) -> usize {
        self.state.failures.get()
    }

    fn should_fail(&self) -> bool {
        match self.state.behaviour.get() {
            AllocatorBehaviour::None => false,
            AllocatorBehaviour::FailAtAllocate => true,
            AllocatorBehaviour::FailAfter(0) => true,
            AllocatorBehaviour::FailAfter(n) => {
                self.state.behaviour.set(AllocatorBehaviour::FailAfter(n - 1));
                false
            }
        }
    }
}

impl Allocator for TestAllocator {
    fn allocate(&self, layout: Layout, init: AllocInit) -> Result<NonNull<u8>, AllocError> {
        if self.should_fail() {
            self.state.failures.set(self.state.failures.get() + 1);
            return Err(AllocError::OutOfMemory {
                size: layout.size(),
                align: layout.align(),
            });
        }

        let ptr = Global.allocate(layout, init)?;
        self.state.allocations.set(self.state.allocations.get() + 1);

        Ok(ptr)
    }

    unsafe fn deallocate(&self, ptr: NonNull<u8>, layout: Layout) {
        self.state
            .deallocations
            .set(self.state.deallocations.get() + 1);

        // SAFETY (PRECONDITIONS ARE MET): every block handed out came from Global
        unsafe { Global.deallocate(ptr, layout) }
    }
}
