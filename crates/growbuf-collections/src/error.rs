// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Error types for growbuf-collections.

use growbuf_buffer::AllocError;
use thiserror::Error;

/// Errors returned by container operations.
///
/// Two kinds exist. [`AllocationFailure`](ContainerError::AllocationFailure)
/// is recoverable: the container is left exactly as it was before the call
/// and the operation is reported as not applied. Every other variant is a
/// precondition violation by the caller, surfaced immediately instead of
/// reading outside the live range.
#[derive(Debug, Error, Clone, Copy, Eq, PartialEq)]
pub enum ContainerError {
    /// Growing the backing buffer failed.
    #[error("allocation failure: {0}")]
    AllocationFailure(#[from] AllocError),

    /// An index was outside the live range.
    #[error("index {index} out of bounds for length {len}")]
    IndexOutOfBounds {
        /// The offending index.
        index: usize,
        /// Number of live elements.
        len: usize,
    },

    /// A `[from, to)` range was reversed or outside the live range.
    #[error("range {from}..{to} out of bounds for length {len}")]
    RangeOutOfBounds {
        /// Range start.
        from: usize,
        /// Range end (exclusive).
        to: usize,
        /// Number of live elements.
        len: usize,
    },

    /// A terminal accessor (`front`, `back`, `top`) was called on an empty container.
    #[error("container is empty")]
    EmptyContainer,
}

impl ContainerError {
    /// Returns `true` for caller contract violations, `false` for allocation failures.
    pub fn is_precondition_violation(&self) -> bool {
        !matches!(self, Self::AllocationFailure(_))
    }
}
