// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Second leSQLite variant with a smoother step between 2 and 3 bytes.
//!
//! The first byte falls in one of four ranges:
//!
//! ```text
//! B0        values      formula
//! 0-177     178         B0
//! 178-241   2^14        178 + ((B0 - 178) << 8) + B1
//! 242-249   2^19        16562 + ((B0 - 242) << 16) + (B1 << 8) + B2
//! 250-255   2^24..2^64  (B0 - 247) little-endian bytes
//! ```

use crate::codec_buffer::CodecBuffer;
use crate::error::{DecodeError, EncodeError};
use crate::primitives::{byte_of, octets};
use crate::traits::{DecodeBuffer, VarintCodec};

const ONE_BYTE_MAX: u64 = 177;
const TWO_BYTE_MAX: u64 = 16561;
const THREE_BYTE_MAX: u64 = 524287;
const WIDE_TIER_BASE: u8 = 247;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct LeSqlite2;

impl VarintCodec for LeSqlite2 {
    type Value = u64;

    const NAME: &'static str = "lesqlite2";
    const SIGNED: bool = false;
    const MAX_ENCODED_LEN: usize = 9;

    fn encoded_len(value: u64) -> Result<usize, EncodeError> {
        let len = if value <= ONE_BYTE_MAX {
            1
        } else if value <= TWO_BYTE_MAX {
            2
        } else if value <= THREE_BYTE_MAX {
            3
        } else {
            1 + octets(value, 3)
        };

        Ok(len)
    }

    fn try_encode_into(value: u64, buf: &mut CodecBuffer) -> Result<(), EncodeError> {
        if value <= ONE_BYTE_MAX {
            buf.write_byte(byte_of(value, Self::NAME)?)?;
        } else if value <= TWO_BYTE_MAX {
            let adjusted = value - 178;
            buf.write_byte(byte_of(178 + (adjusted >> 8), Self::NAME)?)?;
            buf.write_byte(byte_of(adjusted & 0xFF, Self::NAME)?)?;
        } else if value <= THREE_BYTE_MAX {
            let adjusted = value - 16562;
            buf.write_byte(byte_of(242 + (adjusted >> 16), Self::NAME)?)?;
            buf.write_byte(byte_of((adjusted >> 8) & 0xFF, Self::NAME)?)?;
            buf.write_byte(byte_of(adjusted & 0xFF, Self::NAME)?)?;
        } else {
            let len = octets(value, 3);
            buf.write_byte(WIDE_TIER_BASE + len as u8)?;
            buf.write_slice(&value.to_le_bytes()[..len])?;
        }

        Ok(())
    }

    fn decode_from<B: DecodeBuffer + ?Sized>(buf: &mut B) -> Result<u64, DecodeError> {
        let first = buf.read_byte()?;

        match first {
            0..=177 => Ok(u64::from(first)),
            178..=241 => {
                let low = buf.read_byte()?;
                Ok(178 + (u64::from(first - 178) << 8) + u64::from(low))
            }
            242..=249 => Ok(16562 + (u64::from(first - 242) << 16) + buf.read_uint_be(2)?),
            _ => buf.read_uint_le(usize::from(first - WIDE_TIER_BASE)),
        }
    }
}
