// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use crate::rolling::RollingHash;

use silt_test_utils::random_bytes;

#[test]
fn test_rolling_init_matches_one_shot() {
    for window in [2usize, 4, 16, 64, 256] {
        let data = random_bytes(7, window);
        let hash = RollingHash::init(&data);
        assert_eq!(hash.value(), RollingHash::one_shot(&data), "window {window}");
    }
}

#[test]
fn test_rolling_slide_matches_one_shot_at_every_position() {
    let window = 16;
    let data = random_bytes(11, 512);

    let mut hash = RollingHash::init(&data[..window]);
    for start in 1..=data.len() - window {
        hash.next(data[start + window - 1]);
        assert_eq!(
            hash.value(),
            RollingHash::one_shot(&data[start..start + window]),
            "window at {start}"
        );
    }
}

#[test]
fn test_rolling_slide_matches_one_shot_small_window() {
    let window = 4;
    let data = random_bytes(13, 64);

    let mut hash = RollingHash::init(&data[..window]);
    for start in 1..=data.len() - window {
        hash.next(data[start + window - 1]);
        assert_eq!(
            hash.value(),
            RollingHash::one_shot(&data[start..start + window]),
            "window at {start}"
        );
    }
}

#[test]
fn test_rolling_hand_computed_window_of_two() {
    // z = [1, 2]: a = 3, b = 2*1 + 1*2 = 4.
    assert_eq!(RollingHash::one_shot(&[1, 2]), (4u32 << 16) | 3);
}

#[test]
fn test_rolling_composite_packs_a_in_low_half() {
    let data = [0x05, 0x00];
    // a = 5, b = 2*5 = 10.
    let v = RollingHash::one_shot(&data);
    assert_eq!(v & 0xFFFF, 5);
    assert_eq!(v >> 16, 10);
}

#[test]
fn test_rolling_accumulators_wrap_modulo_u16() {
    let data = vec![0xFF; 1024];
    let v = RollingHash::one_shot(&data);
    // a = 1024 * 255 mod 2^16.
    assert_eq!(v & 0xFFFF, (1024u32 * 255) % 65536);
}
