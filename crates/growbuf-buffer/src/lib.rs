// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Owned slot buffers and the amortized growth policy behind growbuf's containers.
//!
//! # Building Blocks
//!
//! - [`RawBuffer`]: an owned, contiguous block of `capacity` slots. It allocates,
//!   relocates a live sub-range into a bigger block, and frees. It never drops
//!   element values; that is the owning container's job.
//! - [`grown_capacity`]: the doubling policy. A full buffer doubles, and keeps
//!   doubling until a bulk request fits.
//! - [`Allocator`]: the seam between buffers and memory. [`Global`] forwards to
//!   the registered global allocator.
//!
//! # Failure Model
//!
//! Every operation that allocates is fallible and returns [`AllocError`].
//! A failed relocation leaves the buffer exactly as it was: same block, same
//! capacity, same contents.
//!
//! # Example
//!
//! ```rust
//! use growbuf_buffer::{AllocError, AllocInit, RawBuffer, grown_capacity};
//!
//! fn example() -> Result<(), AllocError> {
//!     let mut buffer = RawBuffer::<u64>::try_with_capacity(2, AllocInit::Uninitialized)?;
//!
//!     unsafe {
//!         buffer.slot_mut(0).write(7);
//!         buffer.slot_mut(1).write(9);
//!     }
//!
//!     let new_capacity = grown_capacity(buffer.capacity(), 3)?;
//!     unsafe { buffer.relocate(new_capacity, 0, 2, 0, AllocInit::Uninitialized)? };
//!
//!     assert_eq!(buffer.capacity(), 4);
//!     assert_eq!(unsafe { buffer.slot(1).read() }, 9);
//!     Ok(())
//! }
//! # example().unwrap();
//! ```
//!
//! # Test Utilities
//!
//! Enable the `test_utils` feature to inject allocation failures:
//!
//! ```toml
//! [dev-dependencies]
//! growbuf-buffer = { version = "*", features = ["test_utils"] }
//! ```
//!
//! Then use [`TestAllocator`] with [`AllocatorBehaviour`] to drive error paths.

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]
#![warn(unsafe_op_in_unsafe_fn)]

extern crate alloc;

#[cfg(test)]
mod tests;

mod error;
mod global;
mod growth;
mod raw_buffer;
mod traits;

#[cfg(any(test, feature = "test_utils"))]
mod test_allocator;

pub use error::AllocError;
pub use global::Global;
pub use growth::{DEFAULT_CAPACITY, grown_capacity};
pub use raw_buffer::RawBuffer;
pub use traits::{AllocInit, Allocator};

#[cfg(any(test, feature = "test_utils"))]
pub use test_allocator::{AllocatorBehaviour, TestAllocator};
