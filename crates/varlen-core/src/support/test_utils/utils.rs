// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use core::fmt::Debug;

use crate::error::DecodeError;
use crate::traits::VarintCodec;

use super::test_breaker::{TestBreakerBehaviour, TestBreakerSource};

/// Checks `value <-> bytes` in both directions for every pair.
///
/// Decoding must consume exactly `bytes.len()` bytes, and the canonical length
/// reported by `encoded_len` must agree.
pub fn assert_vectors<C>(vectors: &[(&[u8], C::Value)])
where
    C: VarintCodec,
    C::Value: PartialEq + Debug,
{
    for &(bytes, value) in vectors {
        let encoded = C::encode(value).expect("Failed to encode(..)");
        assert_eq!(encoded, bytes, "{}: encode({value:?})", C::NAME);

        let len = C::encoded_len(value).expect("Failed to encoded_len(..)");
        assert_eq!(len, bytes.len(), "{}: encoded_len({value:?})", C::NAME);

        let mut source = TestBreakerSource::new(TestBreakerBehaviour::None, bytes);
        let decoded = C::decode_from(&mut source).expect("Failed to decode_from(..)");
        assert_eq!(decoded, value, "{}: decode({bytes:02X?})", C::NAME);
        assert_eq!(source.consumed(), bytes.len(), "{}: decode({bytes:02X?}) consumed", C::NAME);
    }
}

/// encode -> decode -> encode, asserting the value and the bytes survive.
pub fn assert_roundtrip<C>(value: C::Value)
where
    C: VarintCodec,
    C::Value: PartialEq + Debug,
{
    let encoded = C::encode(value).expect("Failed to encode(..)");

    assert!(encoded.len() <= C::MAX_ENCODED_LEN);
    assert_eq!(
        encoded.len(),
        C::encoded_len(value).expect("Failed to encoded_len(..)")
    );

    let mut cursor = encoded.as_slice();
    let decoded = C::decode_from(&mut cursor).expect("Failed to decode_from(..)");
    assert_eq!(decoded, value, "{}: roundtrip", C::NAME);
    assert!(cursor.is_empty(), "{}: trailing bytes after decode", C::NAME);

    let reencoded = C::encode(decoded).expect("Failed to encode(..)");
    assert_eq!(reencoded, encoded, "{}: re-encode", C::NAME);
}

/// Every strict prefix of `bytes` must fail with `TruncatedInput`.
pub fn assert_truncated_prefixes<C>(bytes: &[u8])
where
    C: VarintCodec,
    C::Value: Debug,
{
    for len in 0..bytes.len() {
        let result = C::decode(&bytes[..len]);
        assert!(
            matches!(result, Err(DecodeError::TruncatedInput)),
            "{}: decode of {len}-byte prefix of {bytes:02X?} returned {result:?}",
            C::NAME
        );
    }
}
