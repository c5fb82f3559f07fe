// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Growable contiguous containers with fallible, amortized growth.
//!
//! - [`GrowVec`]: growable array, grows at the tail.
//! - [`GrowDeque`]: double-ended growable array. Its live range is re-centered
//!   in the new block on every growth, so both ends get equal slack.
//! - [`GrowStack`]: LIFO specialization of [`GrowVec`].
//!
//! All three share the doubling engine of [`growbuf_buffer`]: a full buffer
//! doubles (repeatedly, for bulk requests), only the live elements are
//! copied, and the old block is freed.
//!
//! # Failure Model
//!
//! - Growth that cannot be satisfied returns
//!   [`ContainerError::AllocationFailure`]. The container is left exactly as
//!   it was and the element is not inserted.
//! - Out-of-range indices and terminal accessors on empty containers return
//!   explicit precondition errors. Nothing outside the live range is ever
//!   handed out.
//!
//! # Invalidation
//!
//! Any operation that may grow relocates the buffer. The borrow checker
//! already forbids holding element references across `&mut self` calls; raw
//! pointers obtained through `as_ptr()` on the dereferenced slice dangle after
//! growth and must not be used.
//!
//! # Example
//!
//! ```rust
//! use growbuf_collections::{ContainerError, GrowVec};
//!
//! fn example() -> Result<(), ContainerError> {
//!     let mut vec = GrowVec::new()?;
//!     assert_eq!(vec.capacity(), 32);
//!
//!     for i in 0..33 {
//!         vec.push_back(i)?;
//!     }
//!
//!     assert_eq!(vec.capacity(), 64);
//!     assert_eq!(*vec.at(32)?, 32);
//!     assert!(vec.at(33).is_err());
//!     Ok(())
//! }
//! # example().unwrap();
//! ```
//!
//! # Test Utilities
//!
//! Enable the `test_utils` feature to get `TestAllocator` and drive the
//! allocation-failure paths of your own code:
//!
//! ```toml
//! [dev-dependencies]
//! growbuf-collections = { version = "*", features = ["test_utils"] }
//! ```
//!
//! ```rust
//! // test_utils feature required in dev-dependencies
//! use growbuf_collections::{AllocatorBehaviour, ContainerError, GrowVec, TestAllocator};
//!
//! let alloc = TestAllocator::new();
//! let mut vec = GrowVec::with_capacity_in(1, alloc.clone()).unwrap();
//! vec.push_back(1u8).unwrap();
//!
//! alloc.change_behaviour(AllocatorBehaviour::FailAtAllocate);
//! assert!(matches!(vec.push_back(2), Err(ContainerError::AllocationFailure(_))));
//! assert_eq!(vec.as_slice(), &[1]);
//! ```

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]
#![warn(unsafe_op_in_unsafe_fn)]

#[cfg(test)]
mod tests;

mod error;
mod grow_deque;
mod grow_stack;
mod grow_vec;

pub use error::ContainerError;
pub use grow_deque::GrowDeque;
pub use grow_stack::GrowStack;
pub use grow_vec::GrowVec;

pub use growbuf_buffer::{AllocError, AllocInit, Allocator, DEFAULT_CAPACITY, Global};

#[cfg(any(test, feature = "test_utils"))]
pub use growbuf_buffer::{AllocatorBehaviour, TestAllocator};
