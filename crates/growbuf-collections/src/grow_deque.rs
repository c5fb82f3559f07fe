// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Double-ended growable array that keeps its live range centered.
//!
//! The live elements occupy the contiguous slot range `[front, back)` of the
//! backing buffer. `push_front` walks `front` towards slot 0, `push_back`
//! walks `back` towards `capacity`. When either end runs out of slots the
//! buffer doubles and the live range is copied into the middle of the new
//! block, so both ends get the same amount of slack no matter which one
//! triggered the growth.
//!
//! ```text
//! capacity 8, front 3, back 6
//! [ . . . a b c . . ]
//!         ^     ^
//!       front  back
//! ```

use core::ops::{Deref, DerefMut};
use core::{fmt, ptr, slice};

use growbuf_buffer::{AllocInit, Allocator, DEFAULT_CAPACITY, Global, RawBuffer, grown_capacity};
use log::debug;

use crate::error::ContainerError;

/// Offset at which `live` slots sit centered in a block of `capacity` slots.
#[inline]
const fn centered_offset(capacity: usize, live: usize) -> usize {
    (capacity - live) / 2
}

/// A double-ended growable array with centered amortized growth.
///
/// Every reallocation re-centers the live range: after growth, the free
/// slots before `front` and after `back` differ by at most one. Indexing is
/// O(1) and the live range is always contiguous, so the deque derefs to a
/// slice.
///
/// Every operation that may grow is fallible. If the allocator refuses the
/// new block, the call returns [`ContainerError::AllocationFailure`] and the
/// deque is left exactly as it was.
///
/// # Example
///
/// ```rust
/// use growbuf_collections::{ContainerError, GrowDeque};
///
/// fn example() -> Result<(), ContainerError> {
///     let mut deque = GrowDeque::new()?;
///
///     deque.push_back(1)?;
///     deque.push_front(2)?;
///     deque.push_back(3)?;
///
///     assert_eq!(deque.as_slice(), &[2, 1, 3]);
///     assert_eq!(deque.pop_front(), Some(2));
///     assert_eq!(*deque.back()?, 3);
///     Ok(())
/// }
/// # example().unwrap();
/// ```
pub struct GrowDeque<T, A: Allocator = Global> {
    buf: RawBuffer<T, A>,
    front: usize,
    back: usize,
}

impl<T> GrowDeque<T, Global> {
    /// Creates an empty deque centered in [`DEFAULT_CAPACITY`] zeroed slots.
    ///
    /// # Errors
    ///
    /// Returns [`ContainerError::AllocationFailure`] if the buffer cannot be allocated.
    pub fn new() -> Result<Self, ContainerError> {
        Self::new_in(Global)
    }

    /// Creates an empty deque centered in exactly `capacity` zeroed slots.
    ///
    /// # Errors
    ///
    /// Returns [`ContainerError::AllocationFailure`] if the buffer cannot be allocated.
    pub fn with_capacity(capacity: usize) -> Result<Self, ContainerError> {
        Self::with_capacity_in(capacity, Global)
    }
}

impl<T, A: Allocator> GrowDeque<T, A> {
    /// Creates an empty deque centered in [`DEFAULT_CAPACITY`] slots from `alloc`.
    ///
    /// # Errors
    ///
    /// Returns [`ContainerError::AllocationFailure`] if the buffer cannot be allocated.
    pub fn new_in(alloc: A) -> Result<Self, ContainerError> {
        Self::with_capacity_in(DEFAULT_CAPACITY, alloc)
    }

    /// Creates an empty deque centered in exactly `capacity` slots from `alloc`.
    ///
    /// # Errors
    ///
    /// Returns [`ContainerError::AllocationFailure`] if the buffer cannot be allocated.
    pub fn with_capacity_in(capacity: usize, alloc: A) -> Result<Self, ContainerError> {
        let buf = RawBuffer::try_with_capacity_in(capacity, AllocInit::Zeroed, alloc)?;
        let middle = capacity / 2;

        Ok(Self {
            buf,
            front: middle,
            back: middle,
        })
    }

    /// Returns the number of elements in the deque.
    #[inline]
    pub fn len(&self) -> usize {
        self.back - self.front
    }

    /// Returns `true` if the deque contains no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.back == self.front
    }

    /// Returns the number of allocated slots.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.buf.capacity()
    }

    /// Returns a reference to the allocator backing this deque.
    pub fn allocator(&self) -> &A {
        self.buf.allocator()
    }

    #[cfg(test)]
    pub(crate) fn offsets(&self) -> (usize, usize) {
        (self.front, self.back)
    }

    /// Returns the live elements, front to back, as a slice.
    pub fn as_slice(&self) -> &[T] {
        // SAFETY: slots [front, back) are initialized
        unsafe { slice::from_raw_parts(self.buf.slot(self.front), self.len()) }
    }

    /// Returns the live elements, front to back, as a mutable slice.
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        let len = self.len();
        // SAFETY: slots [front, back) are initialized
        unsafe { slice::from_raw_parts_mut(self.buf.slot_mut(self.front), len) }
    }

    /// Returns the element at logical position `index`.
    ///
    /// # Errors
    ///
    /// Returns [`ContainerError::IndexOutOfBounds`] if `index >= len()`.
    pub fn at(&self, index: usize) -> Result<&T, ContainerError> {
        let len = self.len();
        self.as_slice()
            .get(index)
            .ok_or(ContainerError::IndexOutOfBounds { index, len })
    }

    /// Returns the element at logical position `index` mutably.
    ///
    /// # Errors
    ///
    /// Returns [`ContainerError::IndexOutOfBounds`] if `index >= len()`.
    pub fn at_mut(&mut self, index: usize) -> Result<&mut T, ContainerError> {
        let len = self.len();
        self.as_mut_slice()
            .get_mut(index)
            .ok_or(ContainerError::IndexOutOfBounds { index, len })
    }

    /// Returns the first element.
    ///
    /// # Errors
    ///
    /// Returns [`ContainerError::EmptyContainer`] if the deque is empty.
    pub fn front(&self) -> Result<&T, ContainerError> {
        self.as_slice().first().ok_or(ContainerError::EmptyContainer)
    }

    /// Returns the first element mutably.
    ///
    /// # Errors
    ///
    /// Returns [`ContainerError::EmptyContainer`] if the deque is empty.
    pub fn front_mut(&mut self) -> Result<&mut T, ContainerError> {
        self.as_mut_slice()
            .first_mut()
            .ok_or(ContainerError::EmptyContainer)
    }

    /// Returns the last element.
    ///
    /// # Errors
    ///
    /// Returns [`ContainerError::EmptyContainer`] if the deque is empty.
    pub fn back(&self) -> Result<&T, ContainerError> {
        self.as_slice().last().ok_or(ContainerError::EmptyContainer)
    }

    /// Returns the last element mutably.
    ///
    /// # Errors
    ///
    /// Returns [`ContainerError::EmptyContainer`] if the deque is empty.
    pub fn back_mut(&mut self) -> Result<&mut T, ContainerError> {
        self.as_mut_slice()
            .last_mut()
            .ok_or(ContainerError::EmptyContainer)
    }

    /// Moves the live range into a bigger block, centered together with
    /// `incoming` slots that are about to be filled.
    ///
    /// `before` of the incoming slots go ahead of the current front, the rest
    /// after the current back. Once the caller fills them, the resulting live
    /// range of `len + incoming` elements is centered in the new block.
    #[cold]
    #[inline(never)]
    fn grow_centered(&mut self, incoming: usize, before: usize) -> Result<(), ContainerError> {
        debug_assert!(before <= incoming);

        let len = self.len();
        let required = len + incoming;
        let new_capacity = grown_capacity(self.capacity(), required)?;
        let dst = centered_offset(new_capacity, required) + before;

        // SAFETY (PRECONDITIONS ARE MET): [front, back) is within the old block, and
        // dst + len = centered_offset + before + len <= new_capacity
        unsafe {
            self.buf
                .relocate(new_capacity, self.front, len, dst, AllocInit::Zeroed)?;
        }

        self.front = dst;
        self.back = dst + len;

        debug!(
            "deque re-centered {} elements at [{}..{}) of {} slots",
            len, self.front, self.back, new_capacity
        );

        Ok(())
    }

    /// Gives a zero-capacity deque the layout `new()` produces: a
    /// [`DEFAULT_CAPACITY`] block with the empty range at its middle.
    #[cold]
    #[inline(never)]
    fn init_default(&mut self) -> Result<(), ContainerError> {
        debug_assert!(self.is_empty());

        // SAFETY (PRECONDITIONS ARE MET): capacity is 0, so nothing is copied
        unsafe {
            self.buf
                .relocate(DEFAULT_CAPACITY, 0, 0, 0, AllocInit::Zeroed)?;
        }

        let middle = DEFAULT_CAPACITY / 2;
        self.front = middle;
        self.back = middle;

        Ok(())
    }

    /// Shifts the live range in place so that `target_len` slots starting at
    /// the current front would be centered.
    fn recenter_in_place(&mut self, target_len: usize) {
        let len = self.len();
        let dst = centered_offset(self.capacity(), target_len);

        // SAFETY (PRECONDITIONS ARE MET): target_len <= capacity, so dst + len <= capacity;
        // ptr::copy handles the overlap
        unsafe {
            let src = self.buf.slot_mut(self.front);
            let dst_ptr = self.buf.slot_mut(dst);
            ptr::copy(src, dst_ptr, len);
        }

        self.front = dst;
        self.back = dst + len;
    }

    /// Appends `value` after the last element.
    ///
    /// Grows (and re-centers) when `back` has reached the end of the buffer.
    /// A zero-capacity deque first gets the [`DEFAULT_CAPACITY`] layout of `new()`.
    ///
    /// # Errors
    ///
    /// Returns [`ContainerError::AllocationFailure`] if growth fails; `value`
    /// is dropped and the deque is unchanged.
    pub fn push_back(&mut self, value: T) -> Result<(), ContainerError> {
        if self.capacity() == 0 {
            self.init_default()?;
        }

        if self.back == self.capacity() {
            self.grow_centered(1, 0)?;
        }

        // SAFETY: back < capacity
        unsafe { self.buf.slot_mut(self.back).write(value) };
        self.back += 1;

        Ok(())
    }

    /// Prepends `value` before the first element.
    ///
    /// Grows (and re-centers) when `front` has reached slot 0.
    /// A zero-capacity deque first gets the [`DEFAULT_CAPACITY`] layout of `new()`.
    ///
    /// # Errors
    ///
    /// Returns [`ContainerError::AllocationFailure`] if growth fails; `value`
    /// is dropped and the deque is unchanged.
    pub fn push_front(&mut self, value: T) -> Result<(), ContainerError> {
        if self.capacity() == 0 {
            self.init_default()?;
        }

        if self.front == 0 {
            self.grow_centered(1, 1)?;
        }

        self.front -= 1;
        // SAFETY: front < back <= capacity
        unsafe { self.buf.slot_mut(self.front).write(value) };

        Ok(())
    }

    /// Removes and returns the last element, or `None` if the deque is empty.
    ///
    /// Popping an empty deque changes nothing, offsets included.
    pub fn pop_back(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }

        self.back -= 1;
        // SAFETY: slot back was initialized and is now outside the live range
        Some(unsafe { self.buf.slot(self.back).read() })
    }

    /// Removes and returns the first element, or `None` if the deque is empty.
    ///
    /// Popping an empty deque changes nothing, offsets included.
    pub fn pop_front(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }

        // SAFETY: slot front is initialized
        let value = unsafe { self.buf.slot(self.front).read() };
        self.front += 1;

        Some(value)
    }

    /// Inserts `value` at logical position `index`.
    ///
    /// Inserting at either end is a push. Interior inserts block-move one side
    /// of the live range by a slot: the tail moves right when the buffer has
    /// room after `back`, otherwise the head moves left into the room before
    /// `front`. Only when neither end has room does the deque grow. O(len) in
    /// the worst case.
    ///
    /// # Errors
    ///
    /// - [`ContainerError::IndexOutOfBounds`] if `index > len()`.
    /// - [`ContainerError::AllocationFailure`] if growth fails; the deque is unchanged.
    pub fn insert(&mut self, index: usize, value: T) -> Result<(), ContainerError> {
        let len = self.len();

        if index > len {
            return Err(ContainerError::IndexOutOfBounds { index, len });
        }

        if index == len {
            return self.push_back(value);
        }

        if index == 0 {
            return self.push_front(value);
        }

        if self.back == self.capacity() && self.front == 0 {
            self.grow_centered(1, 0)?;
        }

        if self.back < self.capacity() {
            // SAFETY (PRECONDITIONS ARE MET): back < capacity, so the shifted tail stays in bounds
            unsafe {
                let p = self.buf.slot_mut(self.front + index);
                ptr::copy(p, p.add(1), len - index);
                p.write(value);
            }
            self.back += 1;
        } else {
            // SAFETY (PRECONDITIONS ARE MET): front > 0, so the shifted head stays in bounds
            unsafe {
                let head = self.buf.slot_mut(self.front);
                ptr::copy(head, head.sub(1), index);
                head.add(index - 1).write(value);
            }
            self.front -= 1;
        }

        Ok(())
    }

    /// Removes and returns the element at logical position `index`.
    ///
    /// The shorter side of the live range is block-moved over the gap.
    ///
    /// # Errors
    ///
    /// Returns [`ContainerError::IndexOutOfBounds`] if `index >= len()`.
    pub fn erase(&mut self, index: usize) -> Result<T, ContainerError> {
        let len = self.len();

        if index >= len {
            return Err(ContainerError::IndexOutOfBounds { index, len });
        }

        // SAFETY (PRECONDITIONS ARE MET): index < len, both moved ranges are within [front, back)
        let value = unsafe {
            let head = self.buf.slot_mut(self.front);
            let value = head.add(index).read();

            if index < len / 2 {
                ptr::copy(head, head.add(1), index);
                self.front += 1;
            } else {
                ptr::copy(head.add(index + 1), head.add(index), len - index - 1);
                self.back -= 1;
            }

            value
        };

        Ok(value)
    }

    /// Shortens the deque to `new_len` elements, dropping from the back.
    ///
    /// No-op if `new_len >= len()`. Never reallocates.
    pub fn truncate(&mut self, new_len: usize) {
        let len = self.len();
        if new_len >= len {
            return;
        }

        let new_back = self.front + new_len;
        self.back = new_back;

        // SAFETY: slots [new_back, new_back + len - new_len) were initialized and are now outside the live range
        unsafe {
            ptr::drop_in_place(ptr::slice_from_raw_parts_mut(
                self.buf.slot_mut(new_back),
                len - new_len,
            ));
        }
    }

    /// Resizes the deque to `n` elements.
    ///
    /// Growing appends `T::default()` values at the back. If the buffer lacks
    /// room after `back`, the resized live range is centered: in place when
    /// `n` fits in the current capacity, otherwise in a block grown by
    /// doubling. Shrinking drops from the back and never frees slack.
    ///
    /// # Errors
    ///
    /// Returns [`ContainerError::AllocationFailure`] if growth fails; the deque is unchanged.
    pub fn resize(&mut self, n: usize) -> Result<(), ContainerError>
    where
        T: Default,
    {
        let len = self.len();

        if n <= len {
            self.truncate(n);
            return Ok(());
        }

        let extra = n - len;
        if extra > self.capacity() - self.back {
            if n <= self.capacity() {
                self.recenter_in_place(n);
            } else {
                self.grow_centered(extra, 0)?;
            }
        }

        let end = self.front + n;
        while self.back < end {
            // SAFETY: back < front + n <= capacity
            unsafe { self.buf.slot_mut(self.back).write(T::default()) };
            self.back += 1;
        }

        Ok(())
    }

    /// Drops every element and re-centers the empty range. Capacity is unchanged.
    pub fn clear(&mut self) {
        self.truncate(0);

        let middle = self.capacity() / 2;
        self.front = middle;
        self.back = middle;
    }

    /// Creates a copy with the same capacity and the same placement of the
    /// live range, using a clone of the allocator.
    ///
    /// # Errors
    ///
    /// Returns [`ContainerError::AllocationFailure`] if the copy cannot be allocated.
    pub fn try_clone(&self) -> Result<Self, ContainerError>
    where
        T: Clone,
        A: Clone,
    {
        let mut copy = Self::with_capacity_in(self.capacity(), self.allocator().clone())?;
        copy.front = self.front;
        copy.back = self.front;

        for item in self.as_slice() {
            // SAFETY: copy.back < self.back <= capacity
            unsafe { copy.buf.slot_mut(copy.back).write(item.clone()) };
            copy.back += 1;
        }

        Ok(copy)
    }

    /// Drops every element and frees the buffer, leaving a zero-capacity deque.
    ///
    /// The deque stays usable: the next push allocates [`DEFAULT_CAPACITY`]
    /// slots and centers the range, like `new()`.
    pub fn release(&mut self) {
        self.truncate(0);
        self.buf.release();
        self.front = 0;
        self.back = 0;
    }
}

impl<T> Default for GrowDeque<T, Global> {
    /// Creates an empty deque with zero capacity. Nothing is allocated until
    /// the first push, which takes the `new()` layout.
    fn default() -> Self {
        Self {
            buf: RawBuffer::new(),
            front: 0,
            back: 0,
        }
    }
}

impl<T, A: Allocator> Drop for GrowDeque<T, A> {
    fn drop(&mut self) {
        let len = self.len();
        // SAFETY: slots [front, back) are initialized; the buffer frees the block afterwards
        unsafe {
            ptr::drop_in_place(ptr::slice_from_raw_parts_mut(
                self.buf.slot_mut(self.front),
                len,
            ));
        }
    }
}

impl<T, A: Allocator> Deref for GrowDeque<T, A> {
    type Target = [T];

    fn deref(&self) -> &Self::Target {
        self.as_slice()
    }
}

impl<T, A: Allocator> DerefMut for GrowDeque<T, A> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.as_mut_slice()
    }
}

impl<'a, T, A: Allocator> IntoIterator for &'a GrowDeque<T, A> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.as_slice().iter()
    }
}

impl<'a, T, A: Allocator> IntoIterator for &'a mut GrowDeque<T, A> {
    type Item = &'a mut T;
    type IntoIter = slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.as_mut_slice().iter_mut()
    }
}

impl<T: PartialEq, A: Allocator, B: Allocator> PartialEq<GrowDeque<T, B>> for GrowDeque<T, A> {
    fn eq(&self, other: &GrowDeque<T, B>) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: Eq, A: Allocator> Eq for GrowDeque<T, A> {}

impl<T: fmt::Debug, A: Allocator> fmt::Debug for GrowDeque<T, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.as_slice()).finish()
    }
}
