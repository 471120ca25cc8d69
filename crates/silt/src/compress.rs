// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Optional Zstandard framing around the command stream.
//!
//! Deltas are sniffed by magic prefix on apply: a buffer starting with the
//! Zstandard magic is decompressed first, anything else is treated as a
//! raw command stream. Sniffing is on magic only; a raw delta cannot start
//! with the magic in practice because no command stream begins with 0x28
//! followed by that exact tail, but adversarial spoofing simply fails
//! decompression.

use crate::error::DeltaError;

/// Zstandard frame magic as it appears on the wire.
pub const ZSTD_MAGIC: [u8; 4] = [0x28, 0xB5, 0x2F, 0xFD];

/// Compression level for the wrapper frame.
const LEVEL: i32 = 1;

/// True when `delta` starts with a Zstandard frame header.
#[inline(always)]
pub fn is_compressed(delta: &[u8]) -> bool {
    delta.len() >= ZSTD_MAGIC.len() && delta[..ZSTD_MAGIC.len()] == ZSTD_MAGIC
}

/// Wraps the whole command stream (header and trailer included) in a
/// single Zstandard frame.
pub fn wrap(stream: &[u8]) -> Result<Vec<u8>, DeltaError> {
    zstd::encode_all(stream, LEVEL).map_err(DeltaError::Compression)
}

/// Removes the compression frame when the magic matches; raw deltas pass
/// through as `None`.
///
/// The frame carries its content size, so decompression preallocates the
/// scratch buffer.
pub fn unwrap(delta: &[u8]) -> Result<Option<Vec<u8>>, DeltaError> {
    if !is_compressed(delta) {
        return Ok(None);
    }

    zstd::decode_all(delta)
        .map(Some)
        .map_err(DeltaError::Decompression)
}
