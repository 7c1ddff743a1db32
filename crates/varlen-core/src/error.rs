// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use alloc::string::String;
use core::error;
use core::fmt;

use thiserror::Error;

#[derive(Debug, Error, Eq, PartialEq)]
pub enum CodecBufferError {
    #[error("CapacityExceeded")]
    CapacityExceeded,
}

#[derive(Debug, Error, Eq, PartialEq)]
pub enum EncodeError {
    #[error("DomainError: {0}")]
    DomainError(#[from] DomainError),

    #[error("CodecBufferError: {0}")]
    CodecBufferError(#[from] CodecBufferError),
}

#[derive(Debug, Error, Clone, Copy, Eq, PartialEq)]
pub enum DecodeError {
    /// The source ran out of bytes before a complete encoding was read.
    #[error("TruncatedInput")]
    TruncatedInput,

    /// The encoded value does not fit the codec's 64-bit value type.
    #[error("Overflow: {codec} value exceeds 64 bits")]
    Overflow { codec: &'static str },

    #[cfg(feature = "std")]
    #[error("Io: {0}")]
    Io(std::io::ErrorKind),
}

/// A value handed to `encode` lies outside the codec's representable domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DomainError {
    pub codec: &'static str,
    pub reason: &'static str,
}

impl fmt::Display for DomainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.codec, self.reason)
    }
}

impl error::Error for DomainError {}

#[derive(Debug, Error, Eq, PartialEq)]
#[error("UnknownCodec: {name}")]
pub struct UnknownCodecError {
    pub name: String,
}
