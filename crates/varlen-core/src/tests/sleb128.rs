// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use varlen_test_utils::{EQUIDISTANT_SAMPLE_SIZE, equidistant_signed, signed_boundary_samples};

use crate::codecs::SignedLeb128;
use crate::error::DecodeError;
use crate::support::test_utils::{assert_roundtrip, assert_truncated_prefixes, assert_vectors};
use crate::traits::VarintCodec;

const VECTORS: &[(&[u8], i64)] = &[
    (
        &[0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x7F],
        i64::MIN,
    ),
    (&[0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x7F], -72057594037927936),
    (&[0x80, 0x80, 0x80, 0x80, 0x7F], -268435456),
    (&[0x9B, 0xF1, 0x59], -624485),
    (&[0xC0, 0xBB, 0x78], -123456),
    (&[0xFF, 0x7E], -129),
    (&[0x80, 0x7F], -128),
    (&[0x81, 0x7F], -127),
    (&[0xBF, 0x7F], -65),
    (&[0x40], -64),
    (&[0x7E], -2),
    (&[0x7F], -1),
    (&[0x00], 0),
    (&[0x3F], 63),
    (&[0xC0, 0x00], 64),
    (&[0xFF, 0x00], 127),
    (&[0x80, 0x01], 128),
    (&[0xE5, 0x8E, 0x26], 624485),
    (&[0x80, 0x80, 0x80, 0x80, 0x01], 268435456),
    (&[0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x01], 72057594037927936),
    (
        &[0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0x00],
        i64::MAX,
    ),
];

#[test]
fn test_sleb128_vectors() {
    assert_vectors::<SignedLeb128>(VECTORS);
}

#[test]
fn test_sleb128_truncated_prefixes() {
    for (bytes, _) in VECTORS {
        assert_truncated_prefixes::<SignedLeb128>(bytes);
    }
}

#[test]
fn test_sleb128_length_boundaries() {
    // Largest magnitude per length: 6, 13, 20, ... bits
    let thresholds: Vec<u64> = (1..=9).map(|groups| (1u64 << (7 * groups - 1)) - 1).collect();

    for value in signed_boundary_samples(&thresholds) {
        assert_roundtrip::<SignedLeb128>(value);
    }

    for (groups, &threshold) in thresholds.iter().enumerate() {
        let positive = threshold as i64;
        let negative = -positive - 1;

        assert_eq!(SignedLeb128::encoded_len(positive), Ok(groups + 1));
        assert_eq!(SignedLeb128::encoded_len(positive + 1), Ok(groups + 2));
        assert_eq!(SignedLeb128::encoded_len(negative), Ok(groups + 1));
        assert_eq!(SignedLeb128::encoded_len(negative - 1), Ok(groups + 2));
    }
}

#[test]
fn test_sleb128_equidistant_roundtrip() {
    for value in equidistant_signed(EQUIDISTANT_SAMPLE_SIZE) {
        assert_roundtrip::<SignedLeb128>(value);
    }
}

#[test]
fn test_sleb128_accepts_overlong_encodings() {
    assert_eq!(SignedLeb128::decode(&[0x80, 0x00]), Ok(0));
    assert_eq!(SignedLeb128::decode(&[0xFF, 0x7F]), Ok(-1));
    assert_eq!(SignedLeb128::decode(&[0xC0, 0xFF, 0x7F]), Ok(-64));

    // Sign padding past bit 63
    let mut padded = vec![0xFF; 12];
    padded.push(0x7F);
    assert_eq!(SignedLeb128::decode(&padded), Ok(-1));
}

#[test]
fn test_sleb128_rejects_values_outside_i64() {
    // 2^63
    let mut bytes = vec![0x80; 9];
    bytes.push(0x01);
    assert_eq!(
        SignedLeb128::decode(&bytes),
        Err(DecodeError::Overflow { codec: "sleb128" })
    );

    // Padding that flips sign half way
    let mut bytes = vec![0x80; 9];
    bytes.push(0xFF);
    bytes.push(0x00);
    assert_eq!(
        SignedLeb128::decode(&bytes),
        Err(DecodeError::Overflow { codec: "sleb128" })
    );
}
