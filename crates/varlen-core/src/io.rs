// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! [`DecodeBuffer`] over any [`std::io::Read`].

use std::io::{ErrorKind, Read};

use crate::error::DecodeError;
use crate::traits::DecodeBuffer;

/// Adapts a reader to the decoders.
///
/// End of stream maps to [`DecodeError::TruncatedInput`], any other I/O
/// failure to [`DecodeError::Io`]. Bytes pulled from the reader by a failed
/// read are lost, as with [`Read::read_exact`].
#[derive(Debug)]
pub struct IoSource<R> {
    inner: R,
    bytes_read: u64,
}

impl<R: Read> IoSource<R> {
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            bytes_read: 0,
        }
    }

    /// Total bytes handed to decoders so far.
    pub fn bytes_read(&self) -> u64 {
        self.bytes_read
    }

    pub fn get_ref(&self) -> &R {
        &self.inner
    }

    pub fn into_inner(self) -> R {
        self.inner
    }
}

impl<R: Read> DecodeBuffer for IoSource<R> {
    #[inline(always)]
    fn read_byte(&mut self) -> Result<u8, DecodeError> {
        let mut byte = [0u8; 1];
        self.read_exact(&mut byte)?;

        Ok(byte[0])
    }

    fn read_exact(&mut self, dst: &mut [u8]) -> Result<(), DecodeError> {
        self.inner.read_exact(dst).map_err(|e| {
            if e.kind() == ErrorKind::UnexpectedEof {
                DecodeError::TruncatedInput
            } else {
                DecodeError::Io(e.kind())
            }
        })?;
        self.bytes_read += dst.len() as u64;

        Ok(())
    }
}
