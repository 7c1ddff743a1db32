// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! PrefixVarint (WebAssembly/design#601).
//!
//! LEB128 with all tag bits moved to the low bits of the first byte. The
//! trailing-zero count of byte 0 gives the number of bytes that follow:
//!
//! ```text
//! xxxxxxx1  7 bits in 1 byte
//! xxxxxx10 14 bits in 2 bytes
//! xxxxx100 21 bits in 3 bytes
//! xxxx1000 28 bits in 4 bytes
//! xxx10000 35 bits in 5 bytes
//! xx100000 42 bits in 6 bytes
//! x1000000 49 bits in 7 bytes
//! 10000000 56 bits in 8 bytes
//! 00000000 64 bits in 9 bytes
//! ```
//!
//! Payload bytes after the first are little-endian.

use crate::codec_buffer::CodecBuffer;
use crate::error::{DecodeError, EncodeError};
use crate::primitives::{bit_length, byte_of, septets};
use crate::traits::{DecodeBuffer, VarintCodec};

/// Largest payload that still carries a tag in byte 0.
const TAGGED_BITS: u32 = 56;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct PrefixVarint;

impl VarintCodec for PrefixVarint {
    type Value = u64;

    const NAME: &'static str = "prefix-varint";
    const SIGNED: bool = false;
    const MAX_ENCODED_LEN: usize = 9;

    #[inline(always)]
    fn encoded_len(value: u64) -> Result<usize, EncodeError> {
        if bit_length(value) > TAGGED_BITS {
            return Ok(Self::MAX_ENCODED_LEN);
        }

        Ok(septets(value))
    }

    fn try_encode_into(value: u64, buf: &mut CodecBuffer) -> Result<(), EncodeError> {
        if bit_length(value) > TAGGED_BITS {
            buf.write_byte(0)?;
            buf.write_slice(&value.to_le_bytes())?;
            return Ok(());
        }

        // 1..=8 bytes, the tag takes `len` bits of byte 0
        let len = septets(value);
        let head_bits = 8 - len as u32;
        let tag = 1u64 << (len - 1);
        let head = ((value & ((1u64 << head_bits) - 1)) << len) | tag;

        buf.write_byte(byte_of(head, Self::NAME)?)?;
        buf.write_slice(&(value >> head_bits).to_le_bytes()[..len - 1])?;

        Ok(())
    }

    fn decode_from<B: DecodeBuffer + ?Sized>(buf: &mut B) -> Result<u64, DecodeError> {
        let first = buf.read_byte()?;

        if first == 0 {
            return buf.read_uint_le(8);
        }

        let extra = first.trailing_zeros();
        let head_bits = 7 - extra;
        let head = u64::from(first) >> (extra + 1);
        let tail = buf.read_uint_le(extra as usize)?;

        Ok(head | (tail << head_bits))
    }
}
