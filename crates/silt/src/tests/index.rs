// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use crate::index::SourceIndex;
use crate::rolling::RollingHash;

use silt_test_utils::random_bytes;

#[test]
fn test_index_every_block_in_exactly_one_chain() {
    let window = 16;
    let source = random_bytes(3, 1024 + 7);
    let blocks = source.len() / window;

    let index = SourceIndex::build(&source, window).unwrap();

    let mut seen = vec![false; blocks];
    for slot in 0..blocks {
        // h < blocks maps to slot h, so this walks every chain once.
        let mut cur = index.probe(slot as u32);
        while let Some(k) = cur {
            assert!(!seen[k as usize], "block {k} chained twice");
            seen[k as usize] = true;
            cur = index.next(k);
        }
    }

    assert!(seen.iter().all(|&s| s), "some block missing from all chains");
}

#[test]
fn test_index_probe_reaches_hashed_block() {
    let window = 16;
    let source = random_bytes(5, 512);

    let index = SourceIndex::build(&source, window).unwrap();

    // The block covering bytes 64..80 must be reachable from its own hash.
    let hash = RollingHash::one_shot(&source[64..80]);
    let mut cur = index.probe(hash);
    let mut found = false;
    while let Some(k) = cur {
        if k == 4 {
            found = true;
            break;
        }
        cur = index.next(k);
    }

    assert!(found, "block 4 not reachable from its hash slot");
}

#[test]
fn test_index_chains_newest_first() {
    let window = 16;
    let block = random_bytes(9, window);

    // Two identical blocks land in the same slot; the later one must head
    // the chain.
    let mut source = Vec::new();
    source.extend_from_slice(&block);
    source.extend_from_slice(&block);

    let index = SourceIndex::build(&source, window).unwrap();
    let hash = RollingHash::one_shot(&block);

    assert_eq!(index.probe(hash), Some(1));
    assert_eq!(index.next(1), Some(0));
    assert_eq!(index.next(0), None);
}

#[test]
fn test_index_trailing_partial_block_ignored() {
    let window = 16;
    // 40 bytes: two full blocks, 8 bytes of tail that must not be indexed.
    let source = random_bytes(17, 40);

    let index = SourceIndex::build(&source, window).unwrap();

    let mut reachable = 0;
    for slot in 0..2u32 {
        let mut cur = index.probe(slot);
        while let Some(k) = cur {
            assert!(k < 2);
            reachable += 1;
            cur = index.next(k);
        }
    }
    assert_eq!(reachable, 2);
}
