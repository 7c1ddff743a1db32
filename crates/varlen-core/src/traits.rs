// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use alloc::vec::Vec;

use crate::codec_buffer::CodecBuffer;
use crate::error::{DecodeError, EncodeError};

/// Sequential byte source consumed by every decoder.
///
/// Implementations advance their cursor by exactly the number of bytes
/// handed out and fail with [`DecodeError::TruncatedInput`] when fewer bytes
/// remain than requested.
pub trait DecodeBuffer {
    fn read_byte(&mut self) -> Result<u8, DecodeError>;
    fn read_exact(&mut self, dst: &mut [u8]) -> Result<(), DecodeError>;

    /// Reads `len` (at most 8) bytes as a little-endian unsigned integer.
    #[inline(always)]
    fn read_uint_le(&mut self, len: usize) -> Result<u64, DecodeError> {
        debug_assert!(len <= 8, "read_uint_le: len ({len}) > 8");

        let mut bytes = [0u8; 8];
        self.read_exact(&mut bytes[..len])?;

        Ok(u64::from_le_bytes(bytes))
    }

    /// Reads `len` (at most 8) bytes as a big-endian unsigned integer.
    #[inline(always)]
    fn read_uint_be(&mut self, len: usize) -> Result<u64, DecodeError> {
        debug_assert!(len <= 8, "read_uint_be: len ({len}) > 8");

        let mut bytes = [0u8; 8];
        self.read_exact(&mut bytes[8 - len..])?;

        Ok(u64::from_be_bytes(bytes))
    }
}

/// A variable-length integer format.
///
/// Codecs are zero-sized markers; every operation is an associated function.
/// Implementors provide [`encoded_len`](Self::encoded_len),
/// [`try_encode_into`](Self::try_encode_into) and
/// [`decode_from`](Self::decode_from); the rest is derived:
/// - **try_encode_into**: the raw bit-packing, may leave partial output on error
/// - **encode_into**: public entry point, rolls the buffer back on error
pub trait VarintCodec {
    type Value: Copy;

    /// Canonical codec name, also accepted by [`CodecKind`](crate::CodecKind)'s `FromStr`.
    const NAME: &'static str;
    const SIGNED: bool;
    /// Longest canonical encoding of any value in the domain.
    const MAX_ENCODED_LEN: usize;

    /// Length of the canonical encoding of `value`.
    fn encoded_len(value: Self::Value) -> Result<usize, EncodeError>;

    /// Raw encoder, may leave partial output in `buf` on error.
    ///
    /// Call [`encode_into`](Self::encode_into) for an all-or-nothing write.
    fn try_encode_into(value: Self::Value, buf: &mut CodecBuffer) -> Result<(), EncodeError>;

    fn decode_from<B: DecodeBuffer + ?Sized>(buf: &mut B) -> Result<Self::Value, DecodeError>;

    /// Appends the canonical encoding of `value` to `buf`.
    ///
    /// On error `buf` is left exactly as it was before the call.
    #[inline(always)]
    fn encode_into(value: Self::Value, buf: &mut CodecBuffer) -> Result<(), EncodeError> {
        let mark = buf.len();
        let result = Self::try_encode_into(value, buf);

        if result.is_err() {
            buf.truncate(mark);
        }

        result
    }

    fn encode(value: Self::Value) -> Result<Vec<u8>, EncodeError> {
        let mut buf = CodecBuffer::with_capacity(Self::encoded_len(value)?);
        Self::encode_into(value, &mut buf)?;

        debug_assert_eq!(buf.remaining(), 0, "{}: encoded_len mismatch", Self::NAME);

        Ok(buf.into_vec())
    }

    /// Encodes `values` back to back into a single byte vector.
    fn encode_all(values: &[Self::Value]) -> Result<Vec<u8>, EncodeError> {
        let mut capacity = 0;
        for &value in values {
            capacity += Self::encoded_len(value)?;
        }

        let mut buf = CodecBuffer::with_capacity(capacity);
        for &value in values {
            Self::encode_into(value, &mut buf)?;
        }

        Ok(buf.into_vec())
    }

    /// Decodes one value from the front of `bytes`. Trailing bytes are ignored.
    #[inline(always)]
    fn decode(bytes: &[u8]) -> Result<Self::Value, DecodeError> {
        let mut cursor = bytes;
        Self::decode_from(&mut cursor)
    }

    /// Decodes consecutive values until `bytes` is exhausted.
    fn decode_all(bytes: &[u8]) -> Result<Vec<Self::Value>, DecodeError> {
        let mut cursor = bytes;
        let mut values = Vec::new();

        while !cursor.is_empty() {
            values.push(Self::decode_from(&mut cursor)?);
        }

        Ok(values)
    }
}
