// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Tuning knobs for delta creation and application.

/// Default rolling-hash window size in bytes.
pub const DEFAULT_WINDOW: usize = 16;

/// Default bound on collision-chain candidates inspected per position.
pub const DEFAULT_SEARCH_DEPTH: usize = 250;

/// Options shared by [`create`](crate::create) and
/// [`apply`](crate::apply). `Default` gives the stock configuration.
#[derive(Debug, Clone)]
pub struct DeltaOptions {
    /// Rolling-hash window size. Must be a power of two and at least 2;
    /// anything else is silently replaced by [`DEFAULT_WINDOW`].
    pub hash_window_size: usize,

    /// Upper bound on collision-chain candidates inspected per target
    /// position. Bounds worst-case index walks on pathological hash
    /// distributions.
    pub search_depth: usize,

    /// On create, wrap the command stream in a Zstandard frame. On apply
    /// this is advisory only; the frame is auto-detected from the magic
    /// bytes.
    pub compressed: bool,

    /// On apply, recompute the checksum over the produced output and
    /// compare it against the trailer. The trailer is always emitted
    /// correctly regardless of this flag.
    pub verify_checksum: bool,
}

impl Default for DeltaOptions {
    fn default() -> Self {
        Self {
            hash_window_size: DEFAULT_WINDOW,
            search_depth: DEFAULT_SEARCH_DEPTH,
            compressed: false,
            verify_checksum: false,
        }
    }
}

impl DeltaOptions {
    /// The effective window size after normalisation.
    #[inline(always)]
    pub(crate) fn window(&self) -> usize {
        if self.hash_window_size >= 2 && self.hash_window_size.is_power_of_two() {
            self.hash_window_size
        } else {
            DEFAULT_WINDOW
        }
    }

    /// The effective search depth; at least one candidate is always probed.
    #[inline(always)]
    pub(crate) fn depth(&self) -> usize {
        self.search_depth.max(1)
    }
}
