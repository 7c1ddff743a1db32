// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! SQLite4 variable-length integer.
//!
//! Reference: <https://sqlite.org/src4/doc/trunk/www/varint.wiki>
//!
//! The numeric value of the first byte B0 selects the tier:
//!
//! ```text
//! B0        bytes  value
//! 0-240     1      B0
//! 241-248   2      240 + 256 * (B0 - 241) + B1
//! 249       3      2288 + 256 * B1 + B2
//! 250-255   4-9    (B0 - 247) big-endian bytes
//! ```
//!
//! Sort order of the encodings matches the numeric order of the values.

use crate::codec_buffer::CodecBuffer;
use crate::error::{DecodeError, EncodeError};
use crate::primitives::{byte_of, octets};
use crate::traits::{DecodeBuffer, VarintCodec};

const ONE_BYTE_MAX: u64 = 240;
const TWO_BYTE_MAX: u64 = 2287;
const THREE_BYTE_MAX: u64 = 67823;
/// Tier byte minus payload length for the big-endian tiers.
const WIDE_TIER_BASE: u8 = 247;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Sqlite4Vli;

impl VarintCodec for Sqlite4Vli {
    type Value = u64;

    const NAME: &'static str = "sqlite4-vli";
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
            let adjusted = value - 240;
            buf.write_byte(byte_of(241 + adjusted / 256, Self::NAME)?)?;
            buf.write_byte(byte_of(adjusted % 256, Self::NAME)?)?;
        } else if value <= THREE_BYTE_MAX {
            let adjusted = value - 2288;
            buf.write_byte(249)?;
            buf.write_byte(byte_of(adjusted / 256, Self::NAME)?)?;
            buf.write_byte(byte_of(adjusted % 256, Self::NAME)?)?;
        } else {
            let len = octets(value, 3);
            buf.write_byte(WIDE_TIER_BASE + len as u8)?;
            buf.write_slice(&value.to_be_bytes()[8 - len..])?;
        }

        Ok(())
    }

    fn decode_from<B: DecodeBuffer + ?Sized>(buf: &mut B) -> Result<u64, DecodeError> {
        let first = buf.read_byte()?;

        match first {
            0..=240 => Ok(u64::from(first)),
            241..=248 => {
                let low = buf.read_byte()?;
                Ok(240 + 256 * u64::from(first - 241) + u64::from(low))
            }
            249 => Ok(2288 + buf.read_uint_be(2)?),
            _ => buf.read_uint_be(usize::from(first - WIDE_TIER_BASE)),
        }
    }
}
