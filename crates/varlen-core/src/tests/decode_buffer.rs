// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use crate::error::DecodeError;
use crate::traits::DecodeBuffer;

#[test]
fn test_slice_read_byte_consumes_one_byte() {
    let mut cursor: &[u8] = &[0x01, 0x02];

    assert_eq!(cursor.read_byte(), Ok(0x01));
    assert_eq!(cursor, &[0x02]);
    assert_eq!(cursor.read_byte(), Ok(0x02));
    assert!(cursor.is_empty());
    assert_eq!(cursor.read_byte(), Err(DecodeError::TruncatedInput));
}

#[test]
fn test_slice_read_exact() {
    let mut cursor: &[u8] = &[1, 2, 3, 4, 5];
    let mut dst = [0u8; 3];

    cursor.read_exact(&mut dst).expect("Failed to read_exact(..)");

    assert_eq!(dst, [1, 2, 3]);
    assert_eq!(cursor, &[4, 5]);
}

#[test]
fn test_slice_read_exact_does_not_consume_on_truncation() {
    let mut cursor: &[u8] = &[1, 2];
    let mut dst = [0u8; 3];

    assert_eq!(cursor.read_exact(&mut dst), Err(DecodeError::TruncatedInput));
    assert_eq!(cursor, &[1, 2]);
    assert_eq!(dst, [0, 0, 0]);
}

#[test]
fn test_slice_read_exact_empty_destination() {
    let mut cursor: &[u8] = &[];

    assert_eq!(cursor.read_exact(&mut [0u8; 0]), Ok(()));
}

#[test]
fn test_read_uint_le() {
    let mut cursor: &[u8] = &[0x34, 0x12, 0x78, 0x56, 0x34, 0x12, 0xEF, 0xCD, 0xAB];

    assert_eq!(cursor.read_uint_le(2), Ok(0x1234));
    assert_eq!(cursor.read_uint_le(0), Ok(0));
    assert_eq!(cursor.read_uint_le(4), Ok(0x1234_5678));
    assert_eq!(cursor.read_uint_le(4), Err(DecodeError::TruncatedInput));
    assert_eq!(cursor.read_uint_le(3), Ok(0xAB_CDEF));
}

#[test]
fn test_read_uint_be() {
    let mut cursor: &[u8] = &[0x12, 0x34, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF];

    assert_eq!(cursor.read_uint_be(2), Ok(0x1234));
    assert_eq!(cursor.read_uint_be(8), Ok(u64::MAX));
    assert!(cursor.is_empty());
}
