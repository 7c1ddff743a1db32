// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Unsigned LEB128, as used by DWARF and WebAssembly.
//!
//! Each byte carries 7 bits of data, least-significant group first. The MSB
//! is a continuation flag, set on every byte but the last.
//!
//! ```text
//! 624485 = 0b100110_0001110_1100101
//!        -> 0xE5 0x8E 0x26
//! ```

use crate::codec_buffer::CodecBuffer;
use crate::error::{DecodeError, EncodeError};
use crate::primitives::{byte_of, septets};
use crate::traits::{DecodeBuffer, VarintCodec};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct UnsignedLeb128;

impl VarintCodec for UnsignedLeb128 {
    type Value = u64;

    const NAME: &'static str = "uleb128";
    const SIGNED: bool = false;
    const MAX_ENCODED_LEN: usize = 10;

    #[inline(always)]
    fn encoded_len(value: u64) -> Result<usize, EncodeError> {
        Ok(septets(value))
    }

    fn try_encode_into(mut value: u64, buf: &mut CodecBuffer) -> Result<(), EncodeError> {
        loop {
            let byte = byte_of(value & 0x7F, Self::NAME)?;
            value >>= 7;

            if value == 0 {
                buf.write_byte(byte)?;
                return Ok(());
            }

            buf.write_byte(byte | 0x80)?;
        }
    }

    fn decode_from<B: DecodeBuffer + ?Sized>(buf: &mut B) -> Result<u64, DecodeError> {
        let mut result = 0u64;
        let mut shift = 0u32;

        loop {
            let byte = buf.read_byte()?;
            let group = u64::from(byte & 0x7F);

            match shift {
                0..=56 => result |= group << shift,
                // Only bit 63 is left
                63 if group <= 1 => result |= group << shift,
                // Zero padding past bit 63 is tolerated
                _ if group == 0 => {}
                _ => return Err(DecodeError::Overflow { codec: Self::NAME }),
            }

            if byte & 0x80 == 0 {
                return Ok(result);
            }

            shift = shift.saturating_add(7);
        }
    }
}
