// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Single-pass delta applier.
//!
//! Consumes the command stream once, copying from the source or reading
//! inline literals into an output buffer sized from the header. Every
//! bound the wire format implies is checked explicitly before the copy.

use log::debug;

use crate::checksum::checksum;
use crate::compress;
use crate::encode::{OP_COPY, OP_COPY_END, OP_END, OP_INSERT};
use crate::error::DeltaError;
use crate::options::DeltaOptions;
use crate::varint;

/// Reconstructs the target from `source` and `delta`.
///
/// A delta starting with the Zstandard magic is decompressed first;
/// `options.compressed` is advisory only. With `options.verify_checksum`
/// the trailer checksum is recomputed over the output and compared.
pub fn apply(source: &[u8], delta: &[u8], options: &DeltaOptions) -> Result<Vec<u8>, DeltaError> {
    let out = match compress::unwrap(delta)? {
        Some(stream) => apply_stream(source, &stream, options),
        None => apply_stream(source, delta, options),
    }?;

    debug!("applied delta: {} bytes -> {} bytes", delta.len(), out.len());

    Ok(out)
}

/// Applies `deltas` in order, each step feeding the next.
///
/// Halts on the first failing step and propagates its error.
pub fn apply_batch<D: AsRef<[u8]>>(
    source: &[u8],
    deltas: &[D],
    options: &DeltaOptions,
) -> Result<Vec<u8>, DeltaError> {
    let mut current: Option<Vec<u8>> = None;

    for delta in deltas {
        let base = current.as_deref().unwrap_or(source);
        current = Some(apply(base, delta.as_ref(), options)?);
    }

    match current {
        Some(out) => Ok(out),
        None => {
            // Zero deltas: the target is the source itself.
            let mut out = Vec::new();
            out.try_reserve_exact(source.len())?;
            out.extend_from_slice(source);
            Ok(out)
        }
    }
}

/// Decodes the declared output length without applying the delta.
///
/// Compressed deltas are unwrapped first.
pub fn output_size(delta: &[u8]) -> Result<usize, DeltaError> {
    match compress::unwrap(delta)? {
        Some(stream) => header(&stream),
        None => header(delta),
    }
}

fn header(stream: &[u8]) -> Result<usize, DeltaError> {
    let (len, _) = varint::decode(stream)?;
    Ok(len as usize)
}

fn apply_stream(
    source: &[u8],
    stream: &[u8],
    options: &DeltaOptions,
) -> Result<Vec<u8>, DeltaError> {
    let mut cursor = stream;
    let len = read_varint(&mut cursor)? as usize;

    let mut out = Vec::new();
    out.try_reserve_exact(len)?;

    loop {
        let cnt = read_varint(&mut cursor)? as usize;

        match take_byte(&mut cursor)? {
            OP_COPY => {
                let ofst = read_varint(&mut cursor)? as usize;
                if take_byte(&mut cursor)? != OP_COPY_END {
                    return Err(DeltaError::Malformed("copy: missing ',' terminator"));
                }
                // Subtraction keeps the checks overflow-free for any
                // decoded cnt/ofst; out.len() never exceeds len.
                if cnt > len - out.len() {
                    return Err(DeltaError::SourceMismatch {
                        offset: out.len(),
                        len: cnt,
                        limit: len,
                    });
                }
                if ofst > source.len() || cnt > source.len() - ofst {
                    return Err(DeltaError::SourceMismatch {
                        offset: ofst,
                        len: cnt,
                        limit: source.len(),
                    });
                }
                out.extend_from_slice(&source[ofst..ofst + cnt]);
            }
            OP_INSERT => {
                let literal = cursor
                    .get(..cnt)
                    .ok_or(DeltaError::Malformed("insert: truncated literal"))?;
                if cnt > len - out.len() {
                    return Err(DeltaError::SourceMismatch {
                        offset: out.len(),
                        len: cnt,
                        limit: len,
                    });
                }
                out.extend_from_slice(literal);
                cursor = &cursor[cnt..];
            }
            OP_END => {
                if out.len() != len {
                    return Err(DeltaError::Malformed("trailer: output length mismatch"));
                }
                if options.verify_checksum && checksum(&out) != cnt as u32 {
                    return Err(DeltaError::Malformed("trailer: checksum mismatch"));
                }
                return Ok(out);
            }
            _ => return Err(DeltaError::Malformed("unknown command discriminator")),
        }
    }
}

#[inline(always)]
fn take_byte(cursor: &mut &[u8]) -> Result<u8, DeltaError> {
    let (&byte, rest) = cursor
        .split_first()
        .ok_or(DeltaError::Malformed("unterminated command stream"))?;
    *cursor = rest;
    Ok(byte)
}

#[inline(always)]
fn read_varint(cursor: &mut &[u8]) -> Result<u32, DeltaError> {
    let (value, used) = varint::decode(cursor)?;
    *cursor = &cursor[used..];
    Ok(value)
}
