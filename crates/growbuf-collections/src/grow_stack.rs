// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use core::fmt;

use growbuf_buffer::{Allocator, Global};

use crate::error::ContainerError;
use crate::grow_vec::GrowVec;

/// A last-in-first-out stack over [`GrowVec`]'s tail growth.
///
/// Only the top of the stack is reachable. Pushing past capacity doubles the
/// buffer; a failed growth leaves the stack unchanged.
///
/// # Example
///
/// ```rust
/// use growbuf_collections::{ContainerError, GrowStack};
///
/// fn example() -> Result<(), ContainerError> {
///     let mut stack = GrowStack::new()?;
///
///     stack.push(1)?;
///     stack.push(2)?;
///     assert_eq!(*stack.top()?, 2);
///
///     assert_eq!(stack.pop(), Some(2));
///     assert_eq!(stack.pop(), Some(1));
///     assert_eq!(stack.pop(), None);
///     assert_eq!(stack.top(), Err(ContainerError::EmptyContainer));
///     Ok(())
/// }
/// # example().unwrap();
/// ```
pub struct GrowStack<T, A: Allocator = Global> {
    inner: GrowVec<T, A>,
}

impl<T> GrowStack<T, Global> {
    /// Creates an empty stack with [`growbuf_buffer::DEFAULT_CAPACITY`] slots.
    ///
    /// # Errors
    ///
    /// Returns [`ContainerError::AllocationFailure`] if the buffer cannot be allocated.
    pub fn new() -> Result<Self, ContainerError> {
        GrowVec::new().map(|inner| Self { inner })
    }

    /// Creates an empty stack with exactly `capacity` slots.
    ///
    /// # Errors
    ///
    /// Returns [`ContainerError::AllocationFailure`] if the buffer cannot be allocated.
    pub fn with_capacity(capacity: usize) -> Result<Self, ContainerError> {
        GrowVec::with_capacity(capacity).map(|inner| Self { inner })
    }
}

impl<T, A: Allocator> GrowStack<T, A> {
    /// Creates an empty stack with [`growbuf_buffer::DEFAULT_CAPACITY`] slots from `alloc`.
    ///
    /// # Errors
    ///
    /// Returns [`ContainerError::AllocationFailure`] if the buffer cannot be allocated.
    pub fn new_in(alloc: A) -> Result<Self, ContainerError> {
        GrowVec::new_in(alloc).map(|inner| Self { inner })
    }

    /// Creates an empty stack with exactly `capacity` slots from `alloc`.
    ///
    /// # Errors
    ///
    /// Returns [`ContainerError::AllocationFailure`] if the buffer cannot be allocated.
    pub fn with_capacity_in(capacity: usize, alloc: A) -> Result<Self, ContainerError> {
        GrowVec::with_capacity_in(capacity, alloc).map(|inner| Self { inner })
    }

    /// Returns the number of elements on the stack.
    #[inline]
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Returns `true` if the stack holds no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Returns the number of allocated slots.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.inner.capacity()
    }

    /// Pushes `value` on top.
    ///
    /// # Errors
    ///
    /// Returns [`ContainerError::AllocationFailure`] if growth fails; the stack is unchanged.
    pub fn push(&mut self, value: T) -> Result<(), ContainerError> {
        self.inner.push_back(value)
    }

    /// Removes and returns the top element, or `None` if the stack is empty.
    pub fn pop(&mut self) -> Option<T> {
        self.inner.pop_back()
    }

    /// Returns the top element.
    ///
    /// # Errors
    ///
    /// Returns [`ContainerError::EmptyContainer`] if the stack is empty.
    pub fn top(&self) -> Result<&T, ContainerError> {
        self.inner.back()
    }

    /// Returns the top element mutably.
    ///
    /// # Errors
    ///
    /// Returns [`ContainerError::EmptyContainer`] if the stack is empty.
    pub fn top_mut(&mut self) -> Result<&mut T, ContainerError> {
        self.inner.back_mut()
    }

    /// Drops every element. Capacity is unchanged.
    pub fn clear(&mut self) {
        self.inner.clear();
    }

    /// Creates a copy with the same capacity, using a clone of the allocator.
    ///
    /// # Errors
    ///
    /// Returns [`ContainerError::AllocationFailure`] if the copy cannot be allocated.
    pub fn try_clone(&self) -> Result<Self, ContainerError>
    where
        T: Clone,
        A: Clone,
    {
        self.inner.try_clone().map(|inner| Self { inner })
    }

    /// Drops every element and frees the buffer, leaving a zero-capacity stack.
    pub fn release(&mut self) {
        self.inner.release();
    }
}

impl<T> Default for GrowStack<T, Global> {
    /// Creates an empty stack with zero capacity. Nothing is allocated.
    fn default() -> Self {
        Self {
            inner: GrowVec::default(),
        }
    }
}

impl<T: PartialEq, A: Allocator, B: Allocator> PartialEq<GrowStack<T, B>> for GrowStack<T, A> {
    fn eq(&self, other: &GrowStack<T, B>) -> bool {
        self.inner == other.inner
    }
}

impl<T: Eq, A: Allocator> Eq for GrowStack<T, A> {}

impl<T: fmt::Debug, A: Allocator> fmt::Debug for GrowStack<T, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.inner.iter()).finish()
    }
}
