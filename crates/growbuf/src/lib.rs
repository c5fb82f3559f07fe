// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! <p align="center"><em>Growable contiguous containers with fallible amortized growth.</em></p>
//!
//! ---
//!
//! growbuf provides three containers over one storage engine:
//!
//! - **[`GrowVec`]**: growable array. Pushing past capacity doubles the buffer.
//! - **[`GrowDeque`]**: double-ended growable array. Every growth re-centers
//!   the live range in the new block, so `push_front` and `push_back` runs
//!   are equally cheap afterwards.
//! - **[`GrowStack`]**: LIFO stack over the vector's tail growth.
//!
//! # Guarantees
//!
//! - **No silent failures**: every operation that may allocate returns a
//!   `Result`. A failed growth leaves the container exactly as it was.
//! - **No stale reads**: out-of-range indices and `front`/`back`/`top` on an
//!   empty container are explicit errors.
//! - **Amortized O(1) pushes**: N pushes cause O(log N) reallocations, and
//!   each reallocation copies only the live elements.
//! - **`no_std` compatible**: only `alloc` is required.
//!
//! # Installation
//!
//! ```toml
//! [dependencies]
//! growbuf = "0.1.0-rc.1"
//! ```
//!
//! # Quick Start
//!
//! ```rust
//! use growbuf::{ContainerError, GrowDeque, GrowStack, GrowVec};
//!
//! fn main() -> Result<(), ContainerError> {
//!     let mut vec = GrowVec::new()?;
//!     vec.push_back(1)?;
//!     vec.insert(0, 0)?;
//!     assert_eq!(vec.as_slice(), &[0, 1]);
//!
//!     let mut deque = GrowDeque::new()?;
//!     deque.push_back('b')?;
//!     deque.push_front('a')?;
//!     assert_eq!(deque.as_slice(), &['a', 'b']);
//!
//!     let mut stack = GrowStack::new()?;
//!     stack.push("x")?;
//!     assert_eq!(stack.top()?, &"x");
//!
//!     Ok(())
//! }
//! ```
//!
//! # Invalidation
//!
//! Growth relocates the buffer. Raw pointers taken from a container's slice
//! before an operation that may grow must not be used after it.
//!
//! # Custom Allocators
//!
//! Every container takes an [`Allocator`](buffer::Allocator) parameter,
//! [`Global`](buffer::Global) by default. The `_in` constructors accept any
//! other implementation.
//!
//! # Test Utilities
//!
//! The `test-utils` feature exposes a counting allocator with failure
//! injection under [`support::test_utils`].

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]

pub mod support;

pub use growbuf_buffer as buffer;
pub use growbuf_collections::{ContainerError, GrowDeque, GrowStack, GrowVec};
