// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Runtime selection of a codec.
//!
//! [`CodecKind`] names one of the eight formats and dispatches to it with
//! values widened to `i128`, wide enough for both `u64` and `i64` domains.

use alloc::string::ToString;
use alloc::vec::Vec;
use core::fmt;
use core::str::FromStr;

use crate::codec_buffer::CodecBuffer;
use crate::codecs::{
    LeSqlite, LeSqlite2, PrefixVarint, SignedLeb128, Sqlite4Vli, UnrealSignedVlq, UnsignedLeb128,
    Vlq,
};
use crate::error::{DecodeError, DomainError, EncodeError, UnknownCodecError};
use crate::traits::{DecodeBuffer, VarintCodec};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CodecKind {
    UnsignedLeb128,
    SignedLeb128,
    Vlq,
    PrefixVarint,
    Sqlite4Vli,
    LeSqlite,
    LeSqlite2,
    UnrealSignedVlq,
}

macro_rules! dispatch {
    ($kind:expr, $codec:ident => $body:expr) => {
        match $kind {
            CodecKind::UnsignedLeb128 => {
                type $codec = UnsignedLeb128;
                $body
            }
            CodecKind::SignedLeb128 => {
                type $codec = SignedLeb128;
                $body
            }
            CodecKind::Vlq => {
                type $codec = Vlq;
                $body
            }
            CodecKind::PrefixVarint => {
                type $codec = PrefixVarint;
                $body
            }
            CodecKind::Sqlite4Vli => {
                type $codec = Sqlite4Vli;
                $body
            }
            CodecKind::LeSqlite => {
                type $codec = LeSqlite;
                $body
            }
            CodecKind::LeSqlite2 => {
                type $codec = LeSqlite2;
                $body
            }
            CodecKind::UnrealSignedVlq => {
                type $codec = UnrealSignedVlq;
                $body
            }
        }
    };
}

fn narrow<C>(value: i128) -> Result<C::Value, DomainError>
where
    C: VarintCodec,
    C::Value: TryFrom<i128>,
{
    C::Value::try_from(value).map_err(|_| DomainError {
        codec: C::NAME,
        reason: if !C::SIGNED && value < 0 {
            "negative value for an unsigned codec"
        } else {
            "value outside the 64-bit domain"
        },
    })
}

impl CodecKind {
    pub const ALL: [CodecKind; 8] = [
        CodecKind::UnsignedLeb128,
        CodecKind::SignedLeb128,
        CodecKind::Vlq,
        CodecKind::PrefixVarint,
        CodecKind::Sqlite4Vli,
        CodecKind::LeSqlite,
        CodecKind::LeSqlite2,
        CodecKind::UnrealSignedVlq,
    ];

    pub const fn name(self) -> &'static str {
        dispatch!(self, C => C::NAME)
    }

    pub const fn is_signed(self) -> bool {
        dispatch!(self, C => C::SIGNED)
    }

    pub const fn max_encoded_len(self) -> usize {
        dispatch!(self, C => C::MAX_ENCODED_LEN)
    }

    pub fn encoded_len(self, value: i128) -> Result<usize, EncodeError> {
        let result = dispatch!(self, C => {
            narrow::<C>(value)
                .map_err(EncodeError::from)
                .and_then(C::encoded_len)
        });

        #[cfg(feature = "tracing")]
        trace_encode(self.name(), "encoded_len", value, result.as_ref().copied());

        result
    }

    /// Appends the encoding of `value`; `buf` is untouched on error.
    pub fn encode_into(self, value: i128, buf: &mut CodecBuffer) -> Result<(), EncodeError> {
        #[cfg(feature = "tracing")]
        let mark = buf.len();
        let result = dispatch!(self, C => {
            narrow::<C>(value)
                .map_err(EncodeError::from)
                .and_then(|value| C::encode_into(value, buf))
        });

        #[cfg(feature = "tracing")]
        trace_encode(
            self.name(),
            "encode_into",
            value,
            result.as_ref().map(|_| buf.len() - mark),
        );

        result
    }

    pub fn encode(self, value: i128) -> Result<Vec<u8>, EncodeError> {
        let result = dispatch!(self, C => {
            narrow::<C>(value)
                .map_err(EncodeError::from)
                .and_then(C::encode)
        });

        #[cfg(feature = "tracing")]
        trace_encode(self.name(), "encode", value, result.as_ref().map(Vec::len));

        result
    }

    pub fn decode_from<B: DecodeBuffer + ?Sized>(self, buf: &mut B) -> Result<i128, DecodeError> {
        let result = dispatch!(self, C => C::decode_from(buf).map(i128::from));

        #[cfg(feature = "tracing")]
        match &result {
            Ok(value) => tracing::trace!(codec = self.name(), value = %value, "decoded"),
            Err(error) => tracing::debug!(codec = self.name(), %error, "decode failed"),
        }

        result
    }

    pub fn decode(self, bytes: &[u8]) -> Result<i128, DecodeError> {
        let mut cursor = bytes;
        self.decode_from(&mut cursor)
    }
}

/// One event per encode-side call, successful or not.
#[cfg(feature = "tracing")]
fn trace_encode(
    codec: &'static str,
    op: &'static str,
    value: i128,
    outcome: Result<usize, &EncodeError>,
) {
    match outcome {
        Ok(len) => tracing::trace!(codec, op, value = %value, len, "encoded"),
        Err(error) => tracing::debug!(codec, op, value = %value, %error, "encode failed"),
    }
}

impl fmt::Display for CodecKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Case-insensitive, `_` and `-` interchangeable.
fn names_match(input: &str, name: &str) -> bool {
    let normalize = |b: u8| if b == b'_' { b'-' } else { b.to_ascii_lowercase() };

    input.len() == name.len()
        && input
            .bytes()
            .zip(name.bytes())
            .all(|(a, b)| normalize(a) == normalize(b))
}

impl FromStr for CodecKind {
    type Err = UnknownCodecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let input = s.trim();

        CodecKind::ALL
            .into_iter()
            .find(|kind| names_match(input, kind.name()))
            .ok_or_else(|| UnknownCodecError {
                name: input.to_string(),
            })
    }
}
