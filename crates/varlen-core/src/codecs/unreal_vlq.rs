// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Unreal Engine package "compact index".
//!
//! Reference: <https://web.archive.org/web/20100820185656/http://unreal.epicgames.com/Packages.htm>
//!
//! ```text
//! byte 0     S C x x x x x x   sign, continuation, 6 magnitude bits
//! bytes 1-3  C x x x x x x x   continuation, 7 magnitude bits
//! byte 4     x x x x x x x x   8 magnitude bits, always last
//! ```
//!
//! Magnitude is stored least-significant group first. The cascade stops at
//! 5 bytes, which caps the magnitude at 35 bits.

use crate::codec_buffer::CodecBuffer;
use crate::error::{DecodeError, DomainError, EncodeError};
use crate::primitives::byte_of;
use crate::traits::{DecodeBuffer, VarintCodec};

/// Largest magnitude the 5-byte cascade can carry (6 + 7 + 7 + 7 + 8 bits).
pub const UNREAL_MAX_MAGNITUDE: u64 = (1 << 35) - 1;

const SIGN: u8 = 0x80;
const HEAD_MORE: u8 = 0x40;
const MORE: u8 = 0x80;
/// Index of the final byte, which carries 8 raw bits.
const LAST: usize = 4;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct UnrealSignedVlq;

impl UnrealSignedVlq {
    fn magnitude(value: i64) -> Result<u64, DomainError> {
        let magnitude = value.unsigned_abs();

        if magnitude > UNREAL_MAX_MAGNITUDE {
            return Err(DomainError {
                codec: Self::NAME,
                reason: "magnitude exceeds 35 bits",
            });
        }

        Ok(magnitude)
    }
}

impl VarintCodec for UnrealSignedVlq {
    type Value = i64;

    const NAME: &'static str = "unreal-vlq";
    const SIGNED: bool = true;
    const MAX_ENCODED_LEN: usize = 5;

    fn encoded_len(value: i64) -> Result<usize, EncodeError> {
        let len = match Self::magnitude(value)? {
            0..0x40 => 1,
            0x40..0x2000 => 2,
            0x2000..0x10_0000 => 3,
            0x10_0000..0x800_0000 => 4,
            _ => 5,
        };

        Ok(len)
    }

    fn try_encode_into(value: i64, buf: &mut CodecBuffer) -> Result<(), EncodeError> {
        let magnitude = Self::magnitude(value)?;
        let len = Self::encoded_len(value)?;

        let mut head = byte_of(magnitude & 0x3F, Self::NAME)?;
        if value < 0 {
            head |= SIGN;
        }
        if len > 1 {
            head |= HEAD_MORE;
        }
        buf.write_byte(head)?;

        let mut rest = magnitude >> 6;
        for index in 1..len {
            let byte = if index == LAST {
                byte_of(rest, Self::NAME)?
            } else {
                let mut byte = byte_of(rest & 0x7F, Self::NAME)?;
                if index + 1 < len {
                    byte |= MORE;
                }
                rest >>= 7;
                byte
            };
            buf.write_byte(byte)?;
        }

        Ok(())
    }

    fn decode_from<B: DecodeBuffer + ?Sized>(buf: &mut B) -> Result<i64, DecodeError> {
        let head = buf.read_byte()?;
        let mut magnitude = u64::from(head & 0x3F);
        let mut shift = 6;
        let mut more = head & HEAD_MORE != 0;

        for index in 1..=LAST {
            if !more {
                break;
            }

            let byte = buf.read_byte()?;
            if index == LAST {
                magnitude |= u64::from(byte) << shift;
                break;
            }

            magnitude |= u64::from(byte & 0x7F) << shift;
            more = byte & MORE != 0;
            shift += 7;
        }

        // At most 35 bits, always representable
        let magnitude = magnitude as i64;

        Ok(if head & SIGN != 0 { -magnitude } else { magnitude })
    }
}
