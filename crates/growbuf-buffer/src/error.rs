// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Error types for growbuf-buffer.

use thiserror::Error;

/// Errors raised while acquiring storage for a buffer.
#[derive(Debug, Error, Clone, Copy, Eq, PartialEq)]
pub enum AllocError {
    /// The allocator could not satisfy the request.
    #[error("allocator failed to provide {size} bytes (align {align})")]
    OutOfMemory {
        /// Requested size in bytes.
        size: usize,
        /// Requested alignment in bytes.
        align: usize,
    },

    /// The requested capacity cannot be represented.
    ///
    /// Raised when doubling overflows `usize` or when the byte size of the
    /// buffer would exceed `isize::MAX`.
    #[error("capacity overflow: requested buffer exceeds isize::MAX bytes")]
    CapacityOverflow,
}
