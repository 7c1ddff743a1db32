// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Variable-length quantity as used by Standard MIDI Files.
//!
//! Same 7-bit groups as LEB128 but most-significant group first; the
//! continuation flag is clear only on the final byte.

use crate::codec_buffer::CodecBuffer;
use crate::error::{DecodeError, EncodeError};
use crate::primitives::{byte_of, septets};
use crate::traits::{DecodeBuffer, VarintCodec};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Vlq;

impl VarintCodec for Vlq {
    type Value = u64;

    const NAME: &'static str = "vlq";
    const SIGNED: bool = false;
    const MAX_ENCODED_LEN: usize = 10;

    #[inline(always)]
    fn encoded_len(value: u64) -> Result<usize, EncodeError> {
        Ok(septets(value))
    }

    fn try_encode_into(value: u64, buf: &mut CodecBuffer) -> Result<(), EncodeError> {
        let groups = septets(value);

        for index in (0..groups).rev() {
            let mut byte = byte_of((value >> (7 * index)) & 0x7F, Self::NAME)?;
            if index != 0 {
                byte |= 0x80;
            }
            buf.write_byte(byte)?;
        }

        Ok(())
    }

    fn decode_from<B: DecodeBuffer + ?Sized>(buf: &mut B) -> Result<u64, DecodeError> {
        let mut result = 0u64;

        loop {
            let byte = buf.read_byte()?;

            if result >> (u64::BITS - 7) != 0 {
                return Err(DecodeError::Overflow { codec: Self::NAME });
            }
            result = (result << 7) | u64::from(byte & 0x7F);

            if byte & 0x80 == 0 {
                return Ok(result);
            }
        }
    }
}
