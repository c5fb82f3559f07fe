// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use std::cell::Cell;
use std::rc::Rc;

use super::support::DropCounter;
use crate::{AllocatorBehaviour, ContainerError, GrowStack, TestAllocator};

// =============================================================================
// new() / with_capacity() / default()
// =============================================================================

#[test]
fn test_new() {
    let stack: GrowStack<u8> = GrowStack::new().expect("Failed to create GrowStack");

    assert!(stack.is_empty());
    assert_eq!(stack.len(), 0);
    assert_eq!(stack.capacity(), 32);
}

#[test]
fn test_with_capacity_and_default() {
    let stack: GrowStack<u8> = GrowStack::with_capacity(4).expect("Failed to create GrowStack");
    assert_eq!(stack.capacity(), 4);

    let mut stack: GrowStack<u8> = GrowStack::default();
    assert_eq!(stack.capacity(), 0);

    stack.push(1).expect("Failed to push(..)");
    assert_eq!(stack.capacity(), 32);
}

// =============================================================================
// push() / pop() / top()
// =============================================================================

#[test]
fn test_lifo_order_across_growth() {
    let mut stack = GrowStack::new().expect("Failed to create GrowStack");
    for i in 0..100u32 {
        stack.push(i).expect("Failed to push(..)");
        assert_eq!(stack.top(), Ok(&i));
    }

    assert_eq!(stack.capacity(), 128);

    for i in (0..100u32).rev() {
        assert_eq!(stack.pop(), Some(i));
    }
    assert_eq!(stack.pop(), None);
}

#[test]
fn test_pop_on_empty_is_noop() {
    let mut stack: GrowStack<u8> = GrowStack::new().expect("Failed to create GrowStack");

    assert_eq!(stack.pop(), None);
    assert_eq!(stack.len(), 0);
    assert_eq!(stack.capacity(), 32);
}

#[test]
fn test_top_on_empty_fails() {
    let mut stack: GrowStack<u8> = GrowStack::new().expect("Failed to create GrowStack");

    assert_eq!(stack.top(), Err(ContainerError::EmptyContainer));
    assert_eq!(stack.top_mut(), Err(ContainerError::EmptyContainer));

    // A popped value is not reachable through top().
    stack.push(1).expect("Failed to push(..)");
    stack.pop();
    assert_eq!(stack.top(), Err(ContainerError::EmptyContainer));
}

#[test]
fn test_top_mut() {
    let mut stack = GrowStack::new().expect("Failed to create GrowStack");
    stack.push(1).expect("Failed to push(..)");
    stack.push(2).expect("Failed to push(..)");

    *stack.top_mut().expect("Failed to top_mut()") = 20;

    assert_eq!(stack.pop(), Some(20));
    assert_eq!(stack.top(), Ok(&1));
}

#[test]
fn test_push_allocation_failure_leaves_stack_untouched() {
    let alloc = TestAllocator::new();
    let mut stack = GrowStack::with_capacity_in(2, alloc.clone()).expect("Failed to create GrowStack");
    stack.push(1u8).expect("Failed to push(..)");
    stack.push(2u8).expect("Failed to push(..)");

    alloc.change_behaviour(AllocatorBehaviour::FailAtAllocate);

    assert!(matches!(
        stack.push(3),
        Err(ContainerError::AllocationFailure(_))
    ));
    assert_eq!(stack.len(), 2);
    assert_eq!(stack.capacity(), 2);
    assert_eq!(stack.top(), Ok(&2));
}

#[test]
fn test_new_in_fails_when_allocator_refuses() {
    let alloc = TestAllocator::new();
    alloc.change_behaviour(AllocatorBehaviour::FailAtAllocate);

    assert!(GrowStack::<u8, _>::new_in(alloc).is_err());
}

// =============================================================================
// clear() / release() / try_clone()
// =============================================================================

#[test]
fn test_clear_and_release() {
    let drops = Rc::new(Cell::new(0));
    let alloc = TestAllocator::new();
    let mut stack = GrowStack::new_in(alloc.clone()).expect("Failed to create GrowStack");
    for i in 0..40 {
        stack
            .push(DropCounter::new(i, &drops))
            .expect("Failed to push(..)");
    }

    stack.clear();
    assert_eq!(drops.get(), 40);
    assert_eq!(stack.capacity(), 64);

    stack.release();
    assert_eq!(stack.capacity(), 0);
    assert_eq!(alloc.live_allocations(), 0);
}

#[test]
fn test_try_clone() {
    let mut stack = GrowStack::new().expect("Failed to create GrowStack");
    stack.push("a").expect("Failed to push(..)");
    stack.push("b").expect("Failed to push(..)");

    let mut copy = stack.try_clone().expect("Failed to try_clone()");

    assert_eq!(copy, stack);
    assert_eq!(copy.pop(), Some("b"));
    assert_eq!(stack.top(), Ok(&"b"));
}

#[test]
fn test_debug_lists_bottom_to_top() {
    let mut stack = GrowStack::new().expect("Failed to create GrowStack");
    stack.push(1).expect("Failed to push(..)");
    stack.push(2).expect("Failed to push(..)");

    assert_eq!(format!("{:?}", stack), "[1, 2]");
}
