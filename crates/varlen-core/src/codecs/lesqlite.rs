// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Little-endian SQLite-style varint (leSQLite).
//!
//! ```text
//! B0        bytes  value
//! 0-184     1      B0
//! 185-248   2      185 + 256 * (B0 - 185) + B1
//! 249-255   3-9    (B0 - 247) little-endian bytes
//! ```
//!
//! More than 7 bits fit in 1 byte and a bit more than 14 bits in 2 bytes, at
//! the cost of a 3-byte tier that only holds 16 bits. The wide tiers decode
//! with a single unaligned load.

use crate::codec_buffer::CodecBuffer;
use crate::error::{DecodeError, EncodeError};
use crate::primitives::{byte_of, octets};
use crate::traits::{DecodeBuffer, VarintCodec};

const ONE_BYTE_MAX: u64 = 184;
const TWO_BYTE_MAX: u64 = 16559;
const WIDE_TIER_BASE: u8 = 247;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct LeSqlite;

impl VarintCodec for LeSqlite {
    type Value = u64;

    const NAME: &'static str = "lesqlite";
    const SIGNED: bool = false;
    const MAX_ENCODED_LEN: usize = 9;

    fn encoded_len(value: u64) -> Result<usize, EncodeError> {
        let len = if value <= ONE_BYTE_MAX {
            1
        } else if value <= TWO_BYTE_MAX {
            2
        } else {
            1 + octets(value, 2)
        };

        Ok(len)
    }

    fn try_encode_into(value: u64, buf: &mut CodecBuffer) -> Result<(), EncodeError> {
        if value <= ONE_BYTE_MAX {
            buf.write_byte(byte_of(value, Self::NAME)?)?;
        } else if value <= TWO_BYTE_MAX {
            let adjusted = value - 185;
            buf.write_byte(byte_of(185 + adjusted / 256, Self::NAME)?)?;
            buf.write_byte(byte_of(adjusted % 256, Self::NAME)?)?;
        } else {
            let len = octets(value, 2);
            buf.write_byte(WIDE_TIER_BASE + len as u8)?;
            buf.write_slice(&value.to_le_bytes()[..len])?;
        }

        Ok(())
    }

    fn decode_from<B: DecodeBuffer + ?Sized>(buf: &mut B) -> Result<u64, DecodeError> {
        let first = buf.read_byte()?;

        match first {
            0..=184 => Ok(u64::from(first)),
            185..=248 => {
                let low = buf.read_byte()?;
                Ok(185 + 256 * u64::from(first - 185) + u64::from(low))
            }
            _ => buf.read_uint_le(usize::from(first - WIDE_TIER_BASE)),
        }
    }
}
