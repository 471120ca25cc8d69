// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Output checksum: wrapping sum of big-endian 4-byte words.
//!
//! Corruption detector only, not a MAC.

/// Sums `data` as big-endian u32 words, zero-padding the final partial
/// word, wrapping on overflow.
pub fn checksum(data: &[u8]) -> u32 {
    let mut sum: u32 = 0;

    let mut words = data.chunks_exact(4);
    for word in &mut words {
        sum = sum.wrapping_add(u32::from_be_bytes([word[0], word[1], word[2], word[3]]));
    }

    let tail = words.remainder();
    if !tail.is_empty() {
        let mut word = [0u8; 4];
        word[..tail.len()].copy_from_slice(tail);
        sum = sum.wrapping_add(u32::from_be_bytes(word));
    }

    sum
}
