// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use crate::{AllocError, AllocInit, AllocatorBehaviour, RawBuffer, TestAllocator};

fn filled(alloc: &TestAllocator, capacity: usize) -> RawBuffer<u32, TestAllocator> {
    let mut buffer: RawBuffer<u32, TestAllocator> =
        RawBuffer::try_with_capacity_in(capacity, AllocInit::Uninitialized, alloc.clone())
            .expect("Failed to allocate");

    for i in 0..capacity {
        unsafe { buffer.slot_mut(i).write(i as u32 * 10) };
    }

    buffer
}

fn read_all(buffer: &RawBuffer<u32, TestAllocator>, start: usize, count: usize) -> Vec<u32> {
    (start..start + count)
        .map(|i| unsafe { buffer.slot(i).read() })
        .collect()
}

// =============================================================================
// new() / new_in()
// =============================================================================

#[test]
fn test_new_has_zero_capacity() {
    let buffer: RawBuffer<u64> = RawBuffer::new();
    assert_eq!(buffer.capacity(), 0);
}

#[test]
fn test_new_in_does_not_allocate() {
    let alloc = TestAllocator::new();
    let buffer: RawBuffer<u64, _> = RawBuffer::new_in(alloc.clone());

    assert_eq!(buffer.capacity(), 0);
    assert_eq!(alloc.allocations(), 0);

    drop(buffer);
    assert_eq!(alloc.deallocations(), 0);
}

// =============================================================================
// try_with_capacity_in()
// =============================================================================

#[test]
fn test_try_with_capacity_in_allocates_once() {
    let alloc = TestAllocator::new();
    let buffer: RawBuffer<u64, _> =
        RawBuffer::try_with_capacity_in(32, AllocInit::Uninitialized, alloc.clone())
            .expect("Failed to allocate");

    assert_eq!(buffer.capacity(), 32);
    assert_eq!(alloc.live_allocations(), 1);

    drop(buffer);
    assert_eq!(alloc.live_allocations(), 0);
}

#[test]
fn test_try_with_capacity_zeroed() {
    let buffer: RawBuffer<u32> =
        RawBuffer::try_with_capacity(16, AllocInit::Zeroed).expect("Failed to allocate");

    for i in 0..16 {
        assert_eq!(unsafe { buffer.slot(i).read() }, 0);
    }
}

#[test]
fn test_try_with_capacity_zero_does_not_allocate() {
    let alloc = TestAllocator::new();
    let buffer: RawBuffer<u32, _> =
        RawBuffer::try_with_capacity_in(0, AllocInit::Zeroed, alloc.clone())
            .expect("Failed to allocate");

    assert_eq!(buffer.capacity(), 0);
    assert_eq!(alloc.allocations(), 0);
}

#[test]
fn test_try_with_capacity_zst_does_not_allocate() {
    let alloc = TestAllocator::new();
    let buffer: RawBuffer<(), _> =
        RawBuffer::try_with_capacity_in(1024, AllocInit::Uninitialized, alloc.clone())
            .expect("Failed to allocate");

    assert_eq!(buffer.capacity(), 1024);
    assert_eq!(alloc.allocations(), 0);
}

#[test]
fn test_try_with_capacity_overflow() {
    let result = RawBuffer::<u64>::try_with_capacity(usize::MAX / 4, AllocInit::Uninitialized);

    assert!(matches!(result, Err(AllocError::CapacityOverflow)));
}

#[test]
fn test_try_with_capacity_allocation_failure() {
    let alloc = TestAllocator::new();
    alloc.change_behaviour(AllocatorBehaviour::FailAtAllocate);

    let result =
        RawBuffer::<u32, _>::try_with_capacity_in(8, AllocInit::Uninitialized, alloc.clone());

    assert!(matches!(
        result,
        Err(AllocError::OutOfMemory { size: 32, align: 4 })
    ));
    assert_eq!(alloc.failures(), 1);
    assert_eq!(alloc.allocations(), 0);
}

// =============================================================================
// relocate()
// =============================================================================

#[test]
fn test_relocate_copies_live_range_to_offset() {
    let alloc = TestAllocator::new();
    let mut buffer = filled(&alloc, 4);

    unsafe {
        buffer
            .relocate(8, 1, 2, 3, AllocInit::Zeroed)
            .expect("Failed to relocate");
    }

    assert_eq!(buffer.capacity(), 8);
    assert_eq!(read_all(&buffer, 3, 2), vec![10, 20]);
    // Slots outside the copied range come from the zeroed block.
    assert_eq!(read_all(&buffer, 0, 3), vec![0, 0, 0]);
    assert_eq!(read_all(&buffer, 5, 3), vec![0, 0, 0]);
}

#[test]
fn test_relocate_frees_old_block() {
    let alloc = TestAllocator::new();
    let mut buffer = filled(&alloc, 4);

    unsafe {
        buffer
            .relocate(8, 0, 4, 0, AllocInit::Uninitialized)
            .expect("Failed to relocate");
        buffer
            .relocate(16, 0, 4, 0, AllocInit::Uninitialized)
            .expect("Failed to relocate");
    }

    assert_eq!(alloc.allocations(), 3);
    assert_eq!(alloc.deallocations(), 2);
    assert_eq!(alloc.live_allocations(), 1);
    assert_eq!(read_all(&buffer, 0, 4), vec![0, 10, 20, 30]);
}

#[test]
fn test_relocate_failure_leaves_buffer_untouched() {
    let alloc = TestAllocator::new();
    let mut buffer = filled(&alloc, 4);
    let old_ptr = buffer.as_ptr();

    alloc.change_behaviour(AllocatorBehaviour::FailAtAllocate);

    let result = unsafe { buffer.relocate(8, 0, 4, 2, AllocInit::Uninitialized) };

    assert!(matches!(result, Err(AllocError::OutOfMemory { .. })));
    assert_eq!(buffer.capacity(), 4);
    assert_eq!(buffer.as_ptr(), old_ptr);
    assert_eq!(read_all(&buffer, 0, 4), vec![0, 10, 20, 30]);
    assert_eq!(alloc.live_allocations(), 1);
}

#[test]
fn test_relocate_from_zero_capacity() {
    let alloc = TestAllocator::new();
    let mut buffer: RawBuffer<u32, _> = RawBuffer::new_in(alloc.clone());

    unsafe {
        buffer
            .relocate(1, 0, 0, 0, AllocInit::Uninitialized)
            .expect("Failed to relocate");
        buffer.slot_mut(0).write(5);
    }

    assert_eq!(buffer.capacity(), 1);
    assert_eq!(read_all(&buffer, 0, 1), vec![5]);
    assert_eq!(alloc.deallocations(), 0);
}

// =============================================================================
// release()
// =============================================================================

#[test]
fn test_release_frees_and_resets() {
    let alloc = TestAllocator::new();
    let mut buffer = filled(&alloc, 8);

    buffer.release();

    assert_eq!(buffer.capacity(), 0);
    assert_eq!(alloc.live_allocations(), 0);

    // Releasing twice is harmless.
    buffer.release();
    assert_eq!(alloc.deallocations(), 1);
}

// =============================================================================
// Debug
// =============================================================================

#[test]
fn test_debug_shows_capacity_only() {
    let buffer: RawBuffer<u8> =
        RawBuffer::try_with_capacity(4, AllocInit::Zeroed).expect("Failed to allocate");

    let dbg = format!("{:?}", buffer);
    assert!(dbg.contains("RawBuffer"));
    assert!(dbg.contains("capacity: 4"));
}
