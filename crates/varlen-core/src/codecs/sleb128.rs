// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Signed LEB128 (two's complement, sign-extended from bit 6 of the last byte).

use crate::codec_buffer::CodecBuffer;
use crate::error::{DecodeError, EncodeError};
use crate::primitives::byte_of;
use crate::traits::{DecodeBuffer, VarintCodec};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct SignedLeb128;

impl VarintCodec for SignedLeb128 {
    type Value = i64;

    const NAME: &'static str = "sleb128";
    const SIGNED: bool = true;
    const MAX_ENCODED_LEN: usize = 10;

    #[inline(always)]
    fn encoded_len(value: i64) -> Result<usize, EncodeError> {
        let redundant = if value < 0 {
            value.leading_ones()
        } else {
            value.leading_zeros()
        };
        // Magnitude bits plus one sign bit
        let bits = (i64::BITS - redundant + 1) as usize;

        Ok(bits.div_ceil(7))
    }

    fn try_encode_into(mut value: i64, buf: &mut CodecBuffer) -> Result<(), EncodeError> {
        loop {
            let byte = byte_of((value & 0x7F) as u64, Self::NAME)?;
            value >>= 7;

            // The remaining bits must all equal bit 6 of the byte just produced.
            let sign_bit = byte & 0x40 != 0;
            if (value == 0 && !sign_bit) || (value == -1 && sign_bit) {
                buf.write_byte(byte)?;
                return Ok(());
            }

            buf.write_byte(byte | 0x80)?;
        }
    }

    fn decode_from<B: DecodeBuffer + ?Sized>(buf: &mut B) -> Result<i64, DecodeError> {
        let mut result = 0u64;
        let mut shift = 0u32;
        let mut padding: Option<u8> = None;

        loop {
            let byte = buf.read_byte()?;
            let group = byte & 0x7F;

            if shift < 63 {
                result |= u64::from(group) << shift;
            } else {
                // From bit 63 on, every group is pure sign padding.
                let consistent = padding.is_none_or(|p| p == group);
                if !(group == 0x00 || group == 0x7F) || !consistent {
                    return Err(DecodeError::Overflow { codec: Self::NAME });
                }
                if padding.is_none() {
                    result |= u64::from(group) << 63;
                    padding = Some(group);
                }
            }

            if byte & 0x80 == 0 {
                let filled = shift + 7;
                if filled < u64::BITS && byte & 0x40 != 0 {
                    result |= u64::MAX << filled;
                }

                return Ok(result as i64);
            }

            shift = shift.saturating_add(7);
        }
    }
}
