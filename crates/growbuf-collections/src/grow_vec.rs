// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use core::ops::{Deref, DerefMut};
use core::{fmt, ptr, slice};

use growbuf_buffer::{AllocInit, Allocator, DEFAULT_CAPACITY, Global, RawBuffer, grown_capacity};

use crate::error::ContainerError;

/// A contiguous growable array with amortized doubling growth.
///
/// Live elements occupy slots `[0, len)` of the backing buffer. When a
/// mutation needs more slots than the buffer holds, `GrowVec` allocates a
/// block twice as large (repeating the doubling for bulk requests), moves the
/// live elements over and frees the old block.
///
/// Every operation that may grow is fallible. If the allocator refuses the
/// new block, the call returns [`ContainerError::AllocationFailure`] and the
/// vector is left exactly as it was: same length, same capacity, same
/// elements, and the new value is not inserted.
///
/// # Example
///
/// ```rust
/// use growbuf_collections::{ContainerError, GrowVec};
///
/// fn example() -> Result<(), ContainerError> {
///     let mut vec = GrowVec::new()?;
///     assert_eq!(vec.capacity(), 32);
///
///     for i in 0..33 {
///         vec.push_back(i)?;
///     }
///
///     // The 33rd push doubled the buffer.
///     assert_eq!(vec.capacity(), 64);
///     assert_eq!(*vec.at(32)?, 32);
///     Ok(())
/// }
/// # example().unwrap();
/// ```
pub struct GrowVec<T, A: Allocator = Global> {
    buf: RawBuffer<T, A>,
    len: usize,
}

impl<T> GrowVec<T, Global> {
    /// Creates an empty vector with [`DEFAULT_CAPACITY`] slots.
    ///
    /// # Errors
    ///
    /// Returns [`ContainerError::AllocationFailure`] if the buffer cannot be allocated.
    pub fn new() -> Result<Self, ContainerError> {
        Self::new_in(Global)
    }

    /// Creates an empty vector with exactly `capacity` slots.
    ///
    /// # Errors
    ///
    /// Returns [`ContainerError::AllocationFailure`] if the buffer cannot be allocated.
    pub fn with_capacity(capacity: usize) -> Result<Self, ContainerError> {
        Self::with_capacity_in(capacity, Global)
    }
}

impl<T, A: Allocator> GrowVec<T, A> {
    /// Creates an empty vector with [`DEFAULT_CAPACITY`] slots from `alloc`.
    ///
    /// # Errors
    ///
    /// Returns [`ContainerError::AllocationFailure`] if the buffer cannot be allocated.
    pub fn new_in(alloc: A) -> Result<Self, ContainerError> {
        Self::with_capacity_in(DEFAULT_CAPACITY, alloc)
    }

    /// Creates an empty vector with exactly `capacity` slots from `alloc`.
    ///
    /// # Errors
    ///
    /// Returns [`ContainerError::AllocationFailure`] if the buffer cannot be allocated.
    pub fn with_capacity_in(capacity: usize, alloc: A) -> Result<Self, ContainerError> {
        let buf = RawBuffer::try_with_capacity_in(capacity, AllocInit::Uninitialized, alloc)?;

        Ok(Self { buf, len: 0 })
    }

    /// Returns the number of elements in the vector.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the vector contains no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the number of allocated slots.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.buf.capacity()
    }

    /// Returns a reference to the allocator backing this vector.
    pub fn allocator(&self) -> &A {
        self.buf.allocator()
    }

    /// Returns the live elements as a slice.
    pub fn as_slice(&self) -> &[T] {
        // SAFETY: slots [0, len) are initialized
        unsafe { slice::from_raw_parts(self.buf.as_ptr(), self.len) }
    }

    /// Returns the live elements as a mutable slice.
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        // SAFETY: slots [0, len) are initialized
        unsafe { slice::from_raw_parts_mut(self.buf.as_mut_ptr(), self.len) }
    }

    /// Returns the element at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`ContainerError::IndexOutOfBounds`] if `index >= len()`.
    pub fn at(&self, index: usize) -> Result<&T, ContainerError> {
        let len = self.len;
        self.as_slice()
            .get(index)
            .ok_or(ContainerError::IndexOutOfBounds { index, len })
    }

    /// Returns the element at `index` mutably.
    ///
    /// # Errors
    ///
    /// Returns [`ContainerError::IndexOutOfBounds`] if `index >= len()`.
    pub fn at_mut(&mut self, index: usize) -> Result<&mut T, ContainerError> {
        let len = self.len;
        self.as_mut_slice()
            .get_mut(index)
            .ok_or(ContainerError::IndexOutOfBounds { index, len })
    }

    /// Returns the first element.
    ///
    /// # Errors
    ///
    /// Returns [`ContainerError::EmptyContainer`] if the vector is empty.
    pub fn front(&self) -> Result<&T, ContainerError> {
        self.as_slice().first().ok_or(ContainerError::EmptyContainer)
    }

    /// Returns the first element mutably.
    ///
    /// # Errors
    ///
    /// Returns [`ContainerError::EmptyContainer`] if the vector is empty.
    pub fn front_mut(&mut self) -> Result<&mut T, ContainerError> {
        self.as_mut_slice()
            .first_mut()
            .ok_or(ContainerError::EmptyContainer)
    }

    /// Returns the last element.
    ///
    /// # Errors
    ///
    /// Returns [`ContainerError::EmptyContainer`] if the vector is empty.
    pub fn back(&self) -> Result<&T, ContainerError> {
        self.as_slice().last().ok_or(ContainerError::EmptyContainer)
    }

    /// Returns the last element mutably.
    ///
    /// # Errors
    ///
    /// Returns [`ContainerError::EmptyContainer`] if the vector is empty.
    pub fn back_mut(&mut self) -> Result<&mut T, ContainerError> {
        self.as_mut_slice()
            .last_mut()
            .ok_or(ContainerError::EmptyContainer)
    }

    /// Grows to at least `min_capacity` slots, doubling the current capacity.
    ///
    /// Only the `len` live elements are moved; a failed allocation leaves
    /// the vector untouched.
    #[cold]
    #[inline(never)]
    fn grow_to(&mut self, min_capacity: usize) -> Result<(), ContainerError> {
        let new_capacity = grown_capacity(self.capacity(), min_capacity)?;

        // SAFETY (PRECONDITIONS ARE MET): len <= capacity < new_capacity
        unsafe {
            self.buf
                .relocate(new_capacity, 0, self.len, 0, AllocInit::Uninitialized)?;
        }

        Ok(())
    }

    #[inline(always)]
    fn maybe_grow_to(&mut self, min_capacity: usize) -> Result<(), ContainerError> {
        if self.capacity() >= min_capacity {
            return Ok(());
        }

        self.grow_to(min_capacity)
    }

    /// Appends `value` after the last element, growing if the vector is full.
    ///
    /// # Errors
    ///
    /// Returns [`ContainerError::AllocationFailure`] if growth fails; `value`
    /// is dropped and the vector is unchanged.
    pub fn push_back(&mut self, value: T) -> Result<(), ContainerError> {
        self.maybe_grow_to(self.len + 1)?;

        // SAFETY: len < capacity after maybe_grow_to
        unsafe { self.buf.slot_mut(self.len).write(value) };
        self.len += 1;

        Ok(())
    }

    /// Removes and returns the last element, or `None` if the vector is empty.
    ///
    /// Popping an empty vector changes nothing.
    pub fn pop_back(&mut self) -> Option<T> {
        if self.len == 0 {
            return None;
        }

        self.len -= 1;
        // SAFETY: slot len was initialized and is now outside the live range
        Some(unsafe { self.buf.slot(self.len).read() })
    }

    /// Inserts `value` at `index`, shifting `[index, len)` one slot right.
    ///
    /// Inserting at `index == len()` is equivalent to [`push_back`](Self::push_back).
    ///
    /// # Errors
    ///
    /// - [`ContainerError::IndexOutOfBounds`] if `index > len()`.
    /// - [`ContainerError::AllocationFailure`] if growth fails; the vector is unchanged.
    pub fn insert(&mut self, index: usize, value: T) -> Result<(), ContainerError> {
        if index > self.len {
            return Err(ContainerError::IndexOutOfBounds {
                index,
                len: self.len,
            });
        }

        self.maybe_grow_to(self.len + 1)?;

        // SAFETY (PRECONDITIONS ARE MET): index <= len < capacity
        unsafe {
            let p = self.buf.slot_mut(index);
            ptr::copy(p, p.add(1), self.len - index);
            p.write(value);
        }
        self.len += 1;

        Ok(())
    }

    /// Removes and returns the element at `index`, shifting the tail left.
    ///
    /// # Errors
    ///
    /// Returns [`ContainerError::IndexOutOfBounds`] if `index >= len()`.
    pub fn erase(&mut self, index: usize) -> Result<T, ContainerError> {
        if index >= self.len {
            return Err(ContainerError::IndexOutOfBounds {
                index,
                len: self.len,
            });
        }

        // SAFETY (PRECONDITIONS ARE MET): index < len
        let value = unsafe {
            let p = self.buf.slot_mut(index);
            let value = p.read();
            ptr::copy(p.add(1), p, self.len - index - 1);
            value
        };
        self.len -= 1;

        Ok(value)
    }

    /// Drops the elements in `[from, to)` and closes the gap.
    ///
    /// An empty range (`from == to`) is a no-op.
    ///
    /// # Errors
    ///
    /// Returns [`ContainerError::RangeOutOfBounds`] if `from > to` or `to > len()`.
    pub fn erase_range(&mut self, from: usize, to: usize) -> Result<(), ContainerError> {
        if from > to || to > self.len {
            return Err(ContainerError::RangeOutOfBounds {
                from,
                to,
                len: self.len,
            });
        }

        let old_len = self.len;
        // A panicking destructor leaks the tail instead of double-dropping it.
        self.len = from;

        // SAFETY (PRECONDITIONS ARE MET): [from, to) and [to, old_len) are initialized
        unsafe {
            let base = self.buf.as_mut_ptr();
            ptr::drop_in_place(ptr::slice_from_raw_parts_mut(base.add(from), to - from));
            ptr::copy(base.add(to), base.add(from), old_len - to);
        }
        self.len = old_len - (to - from);

        Ok(())
    }

    /// Shortens the vector to `new_len` elements, dropping the rest.
    ///
    /// No-op if `new_len >= len()`. Capacity is unchanged.
    pub fn truncate(&mut self, new_len: usize) {
        if new_len >= self.len {
            return;
        }

        let tail = self.len - new_len;
        self.len = new_len;

        // SAFETY: slots [new_len, new_len + tail) were initialized and are now outside the live range
        unsafe {
            ptr::drop_in_place(ptr::slice_from_raw_parts_mut(
                self.buf.slot_mut(new_len),
                tail,
            ));
        }
    }

    /// Drops every element. Capacity is unchanged.
    pub fn clear(&mut self) {
        self.truncate(0);
    }

    /// Ensures room for `n` elements and truncates to `n` if shorter.
    ///
    /// Capacity grows by doubling until it reaches `n`. Growing never changes
    /// the length: the vector does not zero-fill or default-fill new slots,
    /// they simply become available to later pushes. Use
    /// [`resize_with`](Self::resize_with) to fill. Shrinking never frees
    /// capacity.
    ///
    /// # Example
    ///
    /// ```rust
    /// use growbuf_collections::GrowVec;
    ///
    /// let mut vec = GrowVec::new().unwrap();
    /// vec.push_back(1u8).unwrap();
    ///
    /// vec.resize(100).unwrap();
    /// assert_eq!(vec.len(), 1);
    /// assert_eq!(vec.capacity(), 128);
    ///
    /// vec.resize(0).unwrap();
    /// assert!(vec.is_empty());
    /// assert_eq!(vec.capacity(), 128);
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`ContainerError::AllocationFailure`] if growth fails; the vector is unchanged.
    pub fn resize(&mut self, n: usize) -> Result<(), ContainerError> {
        self.maybe_grow_to(n)?;
        self.truncate(n);

        Ok(())
    }

    /// Resizes to exactly `n` elements, filling new slots with values from `f`.
    ///
    /// # Errors
    ///
    /// Returns [`ContainerError::AllocationFailure`] if growth fails; the vector is unchanged.
    pub fn resize_with<F>(&mut self, n: usize, mut f: F) -> Result<(), ContainerError>
    where
        F: FnMut() -> T,
    {
        if n <= self.len {
            self.truncate(n);
            return Ok(());
        }

        self.maybe_grow_to(n)?;

        while self.len < n {
            // SAFETY: len < n <= capacity
            unsafe { self.buf.slot_mut(self.len).write(f()) };
            self.len += 1;
        }

        Ok(())
    }

    /// Requests room for at least `capacity` elements, allocating exactly
    /// `capacity` slots when the current buffer is smaller.
    ///
    /// # Errors
    ///
    /// Returns [`ContainerError::AllocationFailure`] if the block cannot be allocated.
    pub fn reserve_exact(&mut self, capacity: usize) -> Result<(), ContainerError> {
        if capacity <= self.capacity() {
            return Ok(());
        }

        // SAFETY (PRECONDITIONS ARE MET): len <= current capacity < capacity
        unsafe {
            self.buf
                .relocate(capacity, 0, self.len, 0, AllocInit::Uninitialized)?;
        }

        Ok(())
    }

    /// Appends clones of every element in `src`.
    ///
    /// Growth happens at most once, by doubling until everything fits.
    ///
    /// # Errors
    ///
    /// Returns [`ContainerError::AllocationFailure`] if growth fails; nothing is appended.
    pub fn extend_from_slice(&mut self, src: &[T]) -> Result<(), ContainerError>
    where
        T: Clone,
    {
        self.maybe_grow_to(self.len + src.len())?;

        for item in src {
            // SAFETY: len < len_before + src.len() <= capacity
            unsafe { self.buf.slot_mut(self.len).write(item.clone()) };
            self.len += 1;
        }

        Ok(())
    }

    /// Creates a deep copy with the same capacity, using a clone of the allocator.
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
        copy.extend_from_slice(self.as_slice())?;

        Ok(copy)
    }

    /// Drops every element and frees the buffer, leaving a zero-capacity vector.
    ///
    /// The vector stays usable: the next push allocates [`DEFAULT_CAPACITY`] slots.
    pub fn release(&mut self) {
        self.clear();
        self.buf.release();
    }
}

impl<T> Default for GrowVec<T, Global> {
    /// Creates an empty vector with zero capacity. Nothing is allocated.
    fn default() -> Self {
        Self {
            buf: RawBuffer::new(),
            len: 0,
        }
    }
}

impl<T, A: Allocator> Drop for GrowVec<T, A> {
    fn drop(&mut self) {
        // SAFETY: slots [0, len) are initialized; the buffer frees the block afterwards
        unsafe {
            ptr::drop_in_place(ptr::slice_from_raw_parts_mut(
                self.buf.as_mut_ptr(),
                self.len,
            ));
        }
    }
}

impl<T, A: Allocator> Deref for GrowVec<T, A> {
    type Target = [T];

    fn deref(&self) -> &Self::Target {
        self.as_slice()
    }
}

impl<T, A: Allocator> DerefMut for GrowVec<T, A> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.as_mut_slice()
    }
}

impl<'a, T, A: Allocator> IntoIterator for &'a GrowVec<T, A> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.as_slice().iter()
    }
}

impl<'a, T, A: Allocator> IntoIterator for &'a mut GrowVec<T, A> {
    type Item = &'a mut T;
    type IntoIter = slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.as_mut_slice().iter_mut()
    }
}

impl<T: PartialEq, A: Allocator, B: Allocator> PartialEq<GrowVec<T, B>> for GrowVec<T, A> {
    fn eq(&self, other: &GrowVec<T, B>) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: Eq, A: Allocator> Eq for GrowVec<T, A> {}

impl<T: fmt::Debug, A: Allocator> fmt::Debug for GrowVec<T, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.as_slice()).finish()
    }
}
