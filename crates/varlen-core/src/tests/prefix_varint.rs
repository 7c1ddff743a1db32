// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use varlen_test_utils::{EQUIDISTANT_SAMPLE_SIZE, boundary_samples, equidistant_unsigned};

use crate::codecs::PrefixVarint;
use crate::support::test_utils::{assert_roundtrip, assert_truncated_prefixes, assert_vectors};
use crate::traits::VarintCodec;

const VECTORS: &[(&[u8], u64)] = &[
    (&[0x01], 0),
    (&[0xFF], 127),
    (&[0xE2, 0x02], 184),
    (&[0xE2, 0x03], 248),
    (&[0xC2, 0x23], 2288),
    (&[0xFC, 0xFF, 0x07], 65535),
    (&[0xF8, 0xFF, 0xFF, 0x0F], 16777215),
    (&[0xF0, 0xFF, 0xFF, 0xFF, 0x1F], 4294967295),
    (&[0xC0, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0x7F], 281474976710655),
    (&[0x80, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF], 72057594037927935),
    (&[0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x01], 72057594037927936),
    (
        &[0x00, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF],
        u64::MAX,
    ),
];

#[test]
fn test_prefix_varint_vectors() {
    assert_vectors::<PrefixVarint>(VECTORS);
}

#[test]
fn test_prefix_varint_truncated_prefixes() {
    for (bytes, _) in VECTORS {
        assert_truncated_prefixes::<PrefixVarint>(bytes);
    }
}

#[test]
fn test_prefix_varint_length_from_first_byte() {
    for bits in 1..=64u32 {
        let value = if bits == 64 { u64::MAX } else { (1u64 << bits) - 1 };
        let encoded = PrefixVarint::encode(value).expect("Failed to encode(..)");

        let expected = if bits > 56 { 9 } else { bits.div_ceil(7) as usize };
        assert_eq!(encoded.len(), expected, "{bits}-bit value");

        let first = encoded[0];
        let tagged_len = if first == 0 { 9 } else { first.trailing_zeros() as usize + 1 };
        assert_eq!(tagged_len, encoded.len(), "{bits}-bit value");
    }
}

#[test]
fn test_prefix_varint_length_boundaries() {
    let thresholds: Vec<u64> = (1..=8).map(|groups| (1u64 << (7 * groups)) - 1).collect();

    for value in boundary_samples(&thresholds) {
        assert_roundtrip::<PrefixVarint>(value);
    }
}

#[test]
fn test_prefix_varint_equidistant_roundtrip() {
    for value in equidistant_unsigned(EQUIDISTANT_SAMPLE_SIZE) {
        assert_roundtrip::<PrefixVarint>(value);
    }
}

#[test]
fn test_prefix_varint_accepts_overlong_encodings() {
    // 0 in the 2-byte and 9-byte forms
    assert_eq!(PrefixVarint::decode(&[0x02, 0x00]), Ok(0));
    assert_eq!(PrefixVarint::decode(&[0x00; 9]), Ok(0));
    // 127 in the 8-byte form
    assert_eq!(
        PrefixVarint::decode(&[0x80, 0x7F, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00]),
        Ok(127)
    );
}
