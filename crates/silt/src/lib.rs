// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! # silt
//!
//! Fossil-derived binary delta codec: given a *source* and a *target*
//! byte buffer, [`create`] produces a compact delta such that [`apply`]
//! reconstructs the target from the source byte-for-byte.
//!
//! The codec is a pure function over immutable byte buffers. It never
//! suspends, never performs I/O and shares no state between calls;
//! concurrent calls on separate threads are safe as long as each owns its
//! buffers.
//!
//! ## Core operations
//!
//! - [`create`]: source + target → delta, optionally Zstandard-framed
//! - [`apply`]: source + delta → target, compression auto-detected
//! - [`apply_batch`]: fold a delta chain, halting on the first error
//! - [`output_size`]: declared target length without applying
//!
//! ## Wire format
//!
//! A varint header carrying the target length, then copy records
//! (`varint(cnt) '@' varint(ofst) ','`) and insert records
//! (`varint(cnt) ':' <cnt bytes>`) in application order, then a varint
//! checksum and `';'`. The whole stream may be wrapped in a single
//! Zstandard frame, recognised on apply by the `28 B5 2F FD` magic.
//!
//! ## Example
//!
//! ```rust
//! use silt::{apply, create, DeltaOptions};
//!
//! let source = b"Hello world!";
//! let target = b"Hello Bare world!";
//!
//! let options = DeltaOptions::default();
//! let delta = create(source, target, &options)?;
//!
//! assert_eq!(apply(source, &delta, &options)?, target);
//! # Ok::<(), silt::DeltaError>(())
//! ```

#![warn(unsafe_op_in_unsafe_fn)]

#[cfg(test)]
mod tests;

mod checksum;
mod compress;
mod decode;
mod encode;
mod error;
mod extend;
mod index;
mod options;
mod rolling;
mod varint;

pub use compress::ZSTD_MAGIC;
pub use decode::{apply, apply_batch, output_size};
pub use encode::create;
pub use error::DeltaError;
pub use options::{DeltaOptions, DEFAULT_SEARCH_DEPTH, DEFAULT_WINDOW};
