// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Test utilities for silt crates.
//!
//! Deterministic buffer generators and mutators: every function is a pure
//! function of its seed, so failing cases replay exactly.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Uniformly random bytes.
pub fn random_bytes(seed: u64, len: usize) -> Vec<u8> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut buf = vec![0u8; len];
    rng.fill(&mut buf[..]);
    buf
}

/// Compressible text-like bytes: lowercase words, spaces and newlines.
pub fn text_like(seed: u64, len: usize) -> Vec<u8> {
    const WORDS: &[&str] = &[
        "the", "quick", "brown", "fox", "jumps", "over", "lazy", "dog", "delta", "stream",
        "window", "block",
    ];

    let mut rng = StdRng::seed_from_u64(seed);
    let mut buf = Vec::with_capacity(len + 8);
    while buf.len() < len {
        buf.extend_from_slice(WORDS[rng.random_range(0..WORDS.len())].as_bytes());
        buf.push(if rng.random_range(0..10) == 0 { b'\n' } else { b' ' });
    }
    buf.truncate(len);
    buf
}

/// Overwrites `count` random positions with random bytes.
///
/// Positions may repeat; an empty input is returned unchanged.
pub fn with_point_edits(data: &[u8], seed: u64, count: usize) -> Vec<u8> {
    let mut out = data.to_vec();
    if out.is_empty() {
        return out;
    }

    let mut rng = StdRng::seed_from_u64(seed);
    for _ in 0..count {
        let at = rng.random_range(0..out.len());
        out[at] = rng.random();
    }
    out
}

/// Inserts `len` random bytes at a random position.
pub fn with_inserted_span(data: &[u8], seed: u64, len: usize) -> Vec<u8> {
    let mut rng = StdRng::seed_from_u64(seed);
    let at = rng.random_range(0..=data.len());

    let mut span = vec![0u8; len];
    rng.fill(&mut span[..]);

    let mut out = Vec::with_capacity(data.len() + len);
    out.extend_from_slice(&data[..at]);
    out.extend_from_slice(&span);
    out.extend_from_slice(&data[at..]);
    out
}

/// Removes a span of up to `len` bytes starting at a random position.
pub fn with_deleted_span(data: &[u8], seed: u64, len: usize) -> Vec<u8> {
    if data.is_empty() {
        return Vec::new();
    }

    let mut rng = StdRng::seed_from_u64(seed);
    let at = rng.random_range(0..data.len());
    let end = (at + len).min(data.len());

    let mut out = Vec::with_capacity(data.len() - (end - at));
    out.extend_from_slice(&data[..at]);
    out.extend_from_slice(&data[end..]);
    out
}
