// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Capacity growth policy shared by every container.

use crate::error::AllocError;

/// Number of slots allocated by the default constructors.
pub const DEFAULT_CAPACITY: usize = 32;

/// Returns the capacity a full buffer of `current` slots grows to.
///
/// The capacity doubles at least once, then keeps doubling until it can hold
/// `required` slots. A zero capacity starts over at [`DEFAULT_CAPACITY`]
/// (32 → 64 → 128 ...).
/// Over a run of N insertions this bounds the number of reallocations to
/// O(log N).
///
/// # Errors
///
/// Returns [`AllocError::CapacityOverflow`] if doubling overflows `usize`.
///
/// # Example
///
/// ```rust
/// use growbuf_buffer::grown_capacity;
///
/// assert_eq!(grown_capacity(32, 33), Ok(64));
/// assert_eq!(grown_capacity(32, 100), Ok(128));
/// assert_eq!(grown_capacity(0, 1), Ok(32));
/// ```
pub fn grown_capacity(current: usize, required: usize) -> Result<usize, AllocError> {
    let mut capacity = if current == 0 {
        DEFAULT_CAPACITY
    } else {
        current
            .checked_mul(2)
            .ok_or(AllocError::CapacityOverflow)?
    };

    while capacity < required {
        capacity = capacity
            .checked_mul(2)
            .ok_or(AllocError::CapacityOverflow)?;
    }

    Ok(capacity)
}
