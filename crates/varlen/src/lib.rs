// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! <p align="center"><em>Variable-length integer codecs for Rust.</em></p>
//!
//! ---
//!
//! Varlen packs 64-bit integers into as few bytes as their magnitude needs,
//! in eight wire formats found in the wild.
//!
//! # Codecs
//!
//! | Codec               | Name            | Domain          | Max bytes |
//! |---------------------|-----------------|-----------------|-----------|
//! | [`UnsignedLeb128`]  | `uleb128`       | `u64`           | 10        |
//! | [`SignedLeb128`]    | `sleb128`       | `i64`           | 10        |
//! | [`Vlq`]             | `vlq`           | `u64`           | 10        |
//! | [`PrefixVarint`]    | `prefix-varint` | `u64`           | 9         |
//! | [`Sqlite4Vli`]      | `sqlite4-vli`   | `u64`           | 9         |
//! | [`LeSqlite`]        | `lesqlite`      | `u64`           | 9         |
//! | [`LeSqlite2`]       | `lesqlite2`     | `u64`           | 9         |
//! | [`UnrealSignedVlq`] | `unreal-vlq`    | `\|i\| < 2^35`  | 5         |
//!
//! Every encoder emits the shortest (canonical) form. Decoders accept
//! over-long forms and stop at the end of the first value, leaving any
//! trailing bytes in the source.
//!
//! # Installation
//!
//! ```toml
//! [dependencies]
//! varlen = "0.1.0-rc.1"
//! ```
//!
//! Features:
//! - **`std`** (default): [`IoSource`] over any [`std::io::Read`]
//! - **`tracing`**: `trace`/`debug` events from [`CodecKind`] dispatch
//! - **`test-utils`**: error-injecting sources and vector assertions under `support`
//!
//! # Quick Start
//!
//! ```rust
//! use varlen::{DecodeError, UnsignedLeb128, VarintCodec};
//!
//! let bytes = UnsignedLeb128::encode(624485)?;
//! assert_eq!(bytes, [0xE5, 0x8E, 0x26]);
//!
//! assert_eq!(UnsignedLeb128::decode(&bytes), Ok(624485));
//! assert_eq!(UnsignedLeb128::decode(&bytes[..2]), Err(DecodeError::TruncatedInput));
//! # Ok::<(), varlen::EncodeError>(())
//! ```
//!
//! ## Streams
//!
//! Decoders read from any [`DecodeBuffer`]. Slices advance in place:
//!
//! ```rust
//! use varlen::{Sqlite4Vli, VarintCodec};
//!
//! let bytes = Sqlite4Vli::encode_all(&[1, 240, 2287, u64::MAX])?;
//!
//! let mut cursor = bytes.as_slice();
//! assert_eq!(Sqlite4Vli::decode_from(&mut cursor), Ok(1));
//! assert_eq!(Sqlite4Vli::decode_all(cursor), Ok(vec![240, 2287, u64::MAX]));
//! # Ok::<(), varlen::EncodeError>(())
//! ```
//!
//! ## Choosing a codec at runtime
//!
//! ```rust
//! use varlen::CodecKind;
//!
//! let kind: CodecKind = "unreal_vlq".parse()?;
//! assert_eq!(kind.encode(-74)?, [0xCA, 0x01]);
//! assert!(kind.encode(1 << 40).is_err());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
#![cfg_attr(not(any(test, feature = "std")), no_std)]

pub use varlen_core::{
    CodecBuffer, CodecBufferError, CodecKind, DecodeBuffer, DecodeError, DomainError, EncodeError,
    LeSqlite, LeSqlite2, MAX_ENCODED_LEN, PrefixVarint, SignedLeb128, Sqlite4Vli,
    UNREAL_MAX_MAGNITUDE, UnknownCodecError, UnrealSignedVlq, UnsignedLeb128, VarintCodec, Vlq,
    byte_of,
};

#[cfg(feature = "std")]
pub use varlen_core::IoSource;

#[cfg(feature = "test-utils")]
pub use varlen_core::support;
