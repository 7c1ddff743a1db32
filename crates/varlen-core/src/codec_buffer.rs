// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Bounded output buffer for encoders.
use alloc::vec::Vec;

use smallvec::SmallVec;

use crate::error::CodecBufferError;

/// Longest encoding produced by any codec in this crate (LEB128 of a 64-bit value).
pub const MAX_ENCODED_LEN: usize = 10;

/// Append-only byte buffer with a fixed capacity.
///
/// A single encoded value always fits inline; batches larger than
/// [`MAX_ENCODED_LEN`] spill to the heap once, at construction.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CodecBuffer {
    capacity: usize,
    bytes: SmallVec<[u8; MAX_ENCODED_LEN]>,
}

impl CodecBuffer {
    #[inline(always)]
    fn debug_assert_invariant(&self) {
        debug_assert!(
            self.bytes.len() <= self.capacity,
            "Invariant violated: cursor ({}) <= capacity ({})",
            self.bytes.len(),
            self.capacity
        );
    }

    #[inline(always)]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            capacity,
            bytes: SmallVec::with_capacity(capacity),
        }
    }

    #[inline(always)]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Bytes that can still be written before [`CodecBufferError::CapacityExceeded`].
    #[inline(always)]
    pub fn remaining(&self) -> usize {
        self.capacity - self.bytes.len()
    }

    #[inline(always)]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    #[inline(always)]
    pub fn as_slice(&self) -> &[u8] {
        &self.bytes
    }

    #[inline(always)]
    pub fn clear(&mut self) {
        self.bytes.clear();
    }

    /// Drops everything written after the first `len` bytes.
    #[inline(always)]
    pub fn truncate(&mut self, len: usize) {
        self.bytes.truncate(len);
    }

    #[inline(always)]
    pub fn write_byte(&mut self, byte: u8) -> Result<(), CodecBufferError> {
        if self.remaining() == 0 {
            return Err(CodecBufferError::CapacityExceeded);
        }

        self.bytes.push(byte);

        // Invariant must be preserved before returning.
        self.debug_assert_invariant();

        Ok(())
    }

    #[inline(always)]
    pub fn write_slice(&mut self, src: &[u8]) -> Result<(), CodecBufferError> {
        if src.len() > self.remaining() {
            return Err(CodecBufferError::CapacityExceeded);
        }

        self.bytes.extend_from_slice(src);

        // Invariant must be preserved before returning.
        self.debug_assert_invariant();

        Ok(())
    }

    /// Hands the written bytes over as a `Vec<u8>`.
    #[inline(always)]
    pub fn into_vec(self) -> Vec<u8> {
        self.bytes.into_vec()
    }
}
