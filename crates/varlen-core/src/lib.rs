// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Core implementation of the varlen variable-length integer codecs.
#![cfg_attr(not(any(test, feature = "std")), no_std)]

extern crate alloc;

#[cfg(test)]
mod tests;

mod codec_buffer;
mod codecs;
mod decode_buffer;
mod error;
mod kind;
mod primitives;
mod traits;

#[cfg(feature = "std")]
mod io;

#[cfg(any(test, feature = "test-utils"))]
pub mod support;

pub use codec_buffer::{CodecBuffer, MAX_ENCODED_LEN};
pub use codecs::{
    LeSqlite, LeSqlite2, PrefixVarint, SignedLeb128, Sqlite4Vli, UNREAL_MAX_MAGNITUDE,
    UnrealSignedVlq, UnsignedLeb128, Vlq,
};
pub use error::{CodecBufferError, DecodeError, DomainError, EncodeError, UnknownCodecError};
#[cfg(feature = "std")]
pub use io::IoSource;
pub use kind::CodecKind;
pub use primitives::byte_of;
pub use traits::{DecodeBuffer, VarintCodec};
