// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Delta encoder.
//!
//! Walks the target with a rolling hash, looks candidate blocks up in the
//! source index, verifies them byte-for-byte, extends verified windows in
//! both directions and emits the copy/insert command stream with a
//! trailing checksum. Greedy policy: the longest paying match at the
//! earliest target position wins.

use log::debug;

use crate::checksum::checksum;
use crate::compress;
use crate::error::DeltaError;
use crate::extend::{backward_match, forward_match};
use crate::index::SourceIndex;
use crate::options::DeltaOptions;
use crate::rolling::RollingHash;
use crate::varint;

/// Copy discriminator byte.
pub(crate) const OP_COPY: u8 = b'@';
/// Copy terminator byte.
pub(crate) const OP_COPY_END: u8 = b',';
/// Insert discriminator byte.
pub(crate) const OP_INSERT: u8 = b':';
/// Stream terminator byte.
pub(crate) const OP_END: u8 = b';';

// Reserved beyond the target length; covers the framing of a worst-case
// all-insert delta.
const OUTPUT_SLACK: usize = 1024;

/// Produces a delta that transforms `source` into `target`.
///
/// The delta applied to `source` yields `target` byte-for-byte. With
/// `options.compressed` the command stream is wrapped in a Zstandard
/// frame. The only failure modes are allocation and compression; every
/// pair of inputs admits a valid delta.
pub fn create(source: &[u8], target: &[u8], options: &DeltaOptions) -> Result<Vec<u8>, DeltaError> {
    debug_assert!(
        target.len() <= u32::MAX as usize && source.len() <= u32::MAX as usize,
        "inputs beyond 4 GiB are not representable in the wire format"
    );

    let stream = emit_stream(source, target, options)?;

    let delta = if options.compressed {
        compress::wrap(&stream)?
    } else {
        stream
    };

    debug!(
        "created delta: source {} target {} delta {} (compressed: {})",
        source.len(),
        target.len(),
        delta.len(),
        options.compressed
    );

    Ok(delta)
}

fn emit_stream(
    source: &[u8],
    target: &[u8],
    options: &DeltaOptions,
) -> Result<Vec<u8>, DeltaError> {
    let window = options.window();
    let depth = options.depth();

    let mut delta = Vec::new();
    delta.try_reserve_exact(target.len() + OUTPUT_SLACK)?;

    varint::encode_into(&mut delta, target.len() as u32);

    // A source without a single spare block cannot be indexed; the whole
    // target goes out as one literal.
    if source.len() <= window {
        if !target.is_empty() {
            put_insert(&mut delta, target);
        }
        put_trailer(&mut delta, target);
        return Ok(delta);
    }

    let index = SourceIndex::build(source, window)?;

    let mut base = 0usize;
    while base + window < target.len() {
        let mut hash = RollingHash::init(&target[base..base + window]);
        let mut i = 0usize;

        let mut best_cnt = 0usize;
        let mut best_ofst = 0usize;
        let mut best_litsz = 0usize;

        loop {
            let mut remaining = depth;
            let mut candidate = index.probe(hash.value());

            while let Some(block) = candidate {
                if remaining == 0 {
                    break;
                }
                remaining -= 1;

                let i_src = block as usize * window;
                let y = base + i;

                // Hash collision unless the windows agree byte-for-byte.
                if source[i_src..i_src + window] != target[y..y + window] {
                    candidate = index.next(block);
                    continue;
                }

                let fwd = forward_match(&source[i_src + window..], &target[y + window..]);
                let back = backward_match(&source[..i_src], &target[base..y]);

                let ofst = i_src - back;
                let cnt = back + window + fwd;
                let litsz = i - back;

                let overhead = varint::encoded_len(litsz as u32)
                    + varint::encoded_len(cnt as u32)
                    + varint::encoded_len(ofst as u32)
                    + 3;

                // The match must pay for its own framing, and a longer
                // match always displaces a shorter one.
                if cnt >= overhead && cnt > best_cnt {
                    best_cnt = cnt;
                    best_ofst = ofst;
                    best_litsz = litsz;
                }

                candidate = index.next(block);
            }

            if best_cnt > 0 {
                if best_litsz > 0 {
                    put_insert(&mut delta, &target[base..base + best_litsz]);
                    base += best_litsz;
                }
                put_copy(&mut delta, best_cnt, best_ofst);
                base += best_cnt;
                break;
            }

            if base + i + window >= target.len() {
                // End of target with no paying match: insert the rest.
                put_insert(&mut delta, &target[base..]);
                base = target.len();
                break;
            }

            hash.next(target[base + i + window]);
            i += 1;
        }
    }

    if base < target.len() {
        put_insert(&mut delta, &target[base..]);
    }

    put_trailer(&mut delta, target);

    Ok(delta)
}

fn put_insert(delta: &mut Vec<u8>, literal: &[u8]) {
    varint::encode_into(delta, literal.len() as u32);
    delta.push(OP_INSERT);
    delta.extend_from_slice(literal);
}

fn put_copy(delta: &mut Vec<u8>, cnt: usize, ofst: usize) {
    varint::encode_into(delta, cnt as u32);
    delta.push(OP_COPY);
    varint::encode_into(delta, ofst as u32);
    delta.push(OP_COPY_END);
}

fn put_trailer(delta: &mut Vec<u8>, target: &[u8]) {
    varint::encode_into(delta, checksum(target));
    delta.push(OP_END);
}
