// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use super::error::DecodeError;
use super::traits::DecodeBuffer;

impl DecodeBuffer for &[u8] {
    #[inline(always)]
    fn read_byte(&mut self) -> Result<u8, DecodeError> {
        let (&byte, rest) = self.split_first().ok_or(DecodeError::TruncatedInput)?;

        // Shrink the slice - consume the byte we read
        *self = rest;

        Ok(byte)
    }

    #[inline(always)]
    fn read_exact(&mut self, dst: &mut [u8]) -> Result<(), DecodeError> {
        let len = dst.len();

        if self.len() < len {
            return Err(DecodeError::TruncatedInput);
        }

        let (head, rest) = self.split_at(len);
        dst.copy_from_slice(head);

        // Shrink the slice - consume the bytes we read
        *self = rest;

        Ok(())
    }
}
