// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Error types for silt.

use std::collections::TryReserveError;

use thiserror::Error;

/// Errors surfaced by delta creation and application.
#[derive(Debug, Error)]
pub enum DeltaError {
    /// The delta byte stream is not a valid command stream.
    #[error("malformed delta: {0}")]
    Malformed(&'static str),

    /// A copy command reaches outside the source, or a command would write
    /// past the declared output length.
    #[error("out of bounds: offset {offset} + len {len} exceeds {limit}")]
    SourceMismatch {
        /// Start of the offending range.
        offset: usize,
        /// Length of the offending range.
        len: usize,
        /// Bound that was exceeded (source length or declared output length).
        limit: usize,
    },

    /// Compressing the command stream failed.
    #[error("zstd compression failed: {0}")]
    Compression(#[source] std::io::Error),

    /// The delta starts with the Zstandard magic but the frame is invalid.
    #[error("zstd frame rejected: {0}")]
    Decompression(#[source] std::io::Error),

    /// A heap reservation failed.
    #[error(transparent)]
    Allocation(#[from] TryReserveError),
}
