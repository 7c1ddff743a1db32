// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use crate::codecs::{LeSqlite2, PrefixVarint, Sqlite4Vli};
use crate::error::DecodeError;
use crate::support::test_utils::{TestBreakerBehaviour, TestBreakerSource};
use crate::traits::{DecodeBuffer, VarintCodec};

#[test]
fn test_breaker_none_reads_through() {
    let bytes = [0xF9, 0x12, 0x34, 0x56];
    let mut source = TestBreakerSource::new(TestBreakerBehaviour::None, &bytes);

    assert_eq!(Sqlite4Vli::decode_from(&mut source), Ok(2288 + 0x1234));
    assert_eq!(source.consumed(), 3);
    assert_eq!(source.remaining(), &[0x56]);
}

#[test]
fn test_breaker_truncate_after() {
    let bytes = PrefixVarint::encode(u64::MAX).expect("Failed to encode(..)");

    for limit in 0..bytes.len() {
        let mut source = TestBreakerSource::new(TestBreakerBehaviour::TruncateAfter(limit), &bytes);
        assert_eq!(
            PrefixVarint::decode_from(&mut source),
            Err(DecodeError::TruncatedInput)
        );
    }

    let mut source = TestBreakerSource::new(TestBreakerBehaviour::TruncateAfter(bytes.len()), &bytes);
    assert_eq!(PrefixVarint::decode_from(&mut source), Ok(u64::MAX));
}

#[test]
fn test_breaker_force_error() {
    let forced = DecodeError::Overflow { codec: "forced" };
    let mut source = TestBreakerSource::new(TestBreakerBehaviour::ForceError(forced), &[0x00]);

    assert_eq!(LeSqlite2::decode_from(&mut source), Err(forced));
    assert_eq!(source.consumed(), 0);
    assert_eq!(source.reads(), 1);

    source.set_behaviour(TestBreakerBehaviour::None);
    assert_eq!(LeSqlite2::decode_from(&mut source), Ok(0));
    assert_eq!(source.reads(), 2);
}

#[test]
fn test_breaker_counts_wide_reads_once() {
    // Wide tiers are read with a single read_exact
    let bytes = LeSqlite2::encode(u64::MAX).expect("Failed to encode(..)");
    let mut source = TestBreakerSource::new(TestBreakerBehaviour::None, &bytes);

    assert_eq!(LeSqlite2::decode_from(&mut source), Ok(u64::MAX));
    assert_eq!(source.reads(), 2);
}

#[test]
fn test_breaker_read_exact_does_not_consume_on_failure() {
    let mut source = TestBreakerSource::new(TestBreakerBehaviour::TruncateAfter(2), &[1, 2, 3]);
    let mut dst = [0u8; 3];

    assert_eq!(source.read_exact(&mut dst), Err(DecodeError::TruncatedInput));
    assert_eq!(source.consumed(), 0);
    assert_eq!(source.read_byte(), Ok(1));
}
