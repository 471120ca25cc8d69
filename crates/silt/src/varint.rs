// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Self-delimiting unsigned varint codec.
//!
//! The first byte carries small values inline; 0xFD, 0xFE and 0xFF
//! introduce little-endian 2-, 4- and 8-byte follow-ons. The encoder only
//! ever needs the 1-, 3- and 5-byte forms for 32-bit values, but the
//! decoder accepts the full scheme.

use crate::error::DeltaError;

/// Largest value carried inline in the first byte.
const INLINE_MAX: u8 = 0xFC;
/// First byte introducing a little-endian u16 follow-on.
const TAG_U16: u8 = 0xFD;
/// First byte introducing a little-endian u32 follow-on.
const TAG_U32: u8 = 0xFE;
/// First byte introducing a little-endian u64 follow-on.
const TAG_U64: u8 = 0xFF;

/// Number of bytes [`encode_into`] appends for `v`.
#[inline(always)]
pub fn encoded_len(v: u32) -> usize {
    if v <= INLINE_MAX as u32 {
        1
    } else if v <= u16::MAX as u32 {
        3
    } else {
        5
    }
}

/// Appends the shortest encoding of `v` to `out`.
#[inline]
pub fn encode_into(out: &mut Vec<u8>, v: u32) {
    if v <= INLINE_MAX as u32 {
        out.push(v as u8);
    } else if v <= u16::MAX as u32 {
        out.push(TAG_U16);
        out.extend_from_slice(&(v as u16).to_le_bytes());
    } else {
        out.push(TAG_U32);
        out.extend_from_slice(&v.to_le_bytes());
    }
}

/// Decodes one varint from the front of `buf`.
///
/// Returns the value and the number of bytes consumed. Over-long encodings
/// decode like their shortest form; values above `u32::MAX` are rejected.
pub fn decode(buf: &[u8]) -> Result<(u32, usize), DeltaError> {
    let &first = buf
        .first()
        .ok_or(DeltaError::Malformed("varint: empty input"))?;

    match first {
        TAG_U16 => {
            let b = buf
                .get(1..3)
                .ok_or(DeltaError::Malformed("varint: truncated u16 follow-on"))?;
            Ok((u16::from_le_bytes([b[0], b[1]]) as u32, 3))
        }
        TAG_U32 => {
            let b = buf
                .get(1..5)
                .ok_or(DeltaError::Malformed("varint: truncated u32 follow-on"))?;
            Ok((u32::from_le_bytes([b[0], b[1], b[2], b[3]]), 5))
        }
        TAG_U64 => {
            let b = buf
                .get(1..9)
                .ok_or(DeltaError::Malformed("varint: truncated u64 follow-on"))?;
            let v = u64::from_le_bytes([b[0], b[1], b[2], b[3], b[4], b[5], b[6], b[7]]);
            if v > u32::MAX as u64 {
                return Err(DeltaError::Malformed("varint: value exceeds 32 bits"));
            }
            Ok((v as u32, 9))
        }
        inline => Ok((inline as u32, 1)),
    }
}
