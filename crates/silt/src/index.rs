// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Hash-to-block index over non-overlapping source blocks.
//!
//! The source is partitioned into N window-sized blocks; block `k` starts
//! at byte `k * window`. `landmark` maps a hash slot to the newest block
//! hashed into it, `collide` chains older blocks sharing the slot. The
//! index never checks for hash collisions; the encoder verifies candidates
//! byte-for-byte.

use log::trace;

use crate::error::DeltaError;
use crate::rolling::RollingHash;

/// Sentinel marking an empty slot or the end of a collision chain.
const NONE: u32 = u32::MAX;

/// Closed-addressing index built once per encode.
pub struct SourceIndex {
    landmark: Vec<u32>,
    collide: Vec<u32>,
    slots: usize,
}

impl SourceIndex {
    /// Indexes `source` in `window`-sized blocks.
    ///
    /// The caller guarantees `source.len() > window`, so at least one full
    /// block exists.
    pub fn build(source: &[u8], window: usize) -> Result<Self, DeltaError> {
        let blocks = source.len() / window;
        debug_assert!(blocks > 0, "source must contain at least one full block");

        let mut landmark = Vec::new();
        landmark.try_reserve_exact(blocks)?;
        landmark.resize(blocks, NONE);

        let mut collide = Vec::new();
        collide.try_reserve_exact(blocks)?;
        collide.resize(blocks, NONE);

        // Insert in block order; pushing onto the chain head leaves the
        // newest block first on every chain.
        for k in 0..blocks {
            let start = k * window;
            let hash = RollingHash::one_shot(&source[start..start + window]);
            let slot = hash as usize % blocks;
            collide[k] = landmark[slot];
            landmark[slot] = k as u32;
        }

        trace!("indexed {} bytes: {blocks} blocks of {window}", source.len());

        Ok(Self {
            landmark,
            collide,
            slots: blocks,
        })
    }

    /// Newest block in the slot for hash `h`, if any.
    #[inline(always)]
    pub fn probe(&self, h: u32) -> Option<u32> {
        let k = self.landmark[h as usize % self.slots];
        (k != NONE).then_some(k)
    }

    /// Next block in the collision chain after `k`.
    #[inline(always)]
    pub fn next(&self, k: u32) -> Option<u32> {
        let n = self.collide[k as usize];
        (n != NONE).then_some(n)
    }
}
