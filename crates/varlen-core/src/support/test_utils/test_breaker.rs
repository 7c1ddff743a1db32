// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use crate::error::DecodeError;
use crate::traits::DecodeBuffer;

/// Behavior control for error injection testing in varlen decoders.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TestBreakerBehaviour {
    /// Normal behavior (no error injection).
    #[default]
    None,
    /// Pretend the source ends after the given number of bytes.
    TruncateAfter(usize),
    /// Fail every read with the given error.
    ForceError(DecodeError),
}

/// Slice-backed [`DecodeBuffer`] that records how it is consumed.
#[derive(Debug, Clone)]
pub struct TestBreakerSource<'a> {
    /// Controls error injection behavior.
    pub behaviour: TestBreakerBehaviour,
    bytes: &'a [u8],
    cursor: usize,
    reads: usize,
}

impl<'a> TestBreakerSource<'a> {
    pub fn new(behaviour: TestBreakerBehaviour, bytes: &'a [u8]) -> Self {
        Self {
            behaviour,
            bytes,
            cursor: 0,
            reads: 0,
        }
    }

    pub fn set_behaviour(&mut self, behaviour: TestBreakerBehaviour) {
        self.behaviour = behaviour;
    }

    /// Bytes handed out so far.
    pub fn consumed(&self) -> usize {
        self.cursor
    }

    /// Successful and failed read calls so far.
    pub fn reads(&self) -> usize {
        self.reads
    }

    pub fn remaining(&self) -> &'a [u8] {
        &self.bytes[self.cursor..]
    }
}

impl DecodeBuffer for TestBreakerSource<'_> {
    fn read_byte(&mut self) -> Result<u8, DecodeError> {
        let mut byte = [0u8; 1];
        self.read_exact(&mut byte)?;

        Ok(byte[0])
    }

    fn read_exact(&mut self, dst: &mut [u8]) -> Result<(), DecodeError> {
        self.reads += 1;

        let end = self.cursor + dst.len();
        let limit = match self.behaviour {
            TestBreakerBehaviour::None => self.bytes.len(),
            TestBreakerBehaviour::TruncateAfter(limit) => limit.min(self.bytes.len()),
            TestBreakerBehaviour::ForceError(error) => return Err(error),
        };

        if end > limit {
            return Err(DecodeError::TruncatedInput);
        }

        dst.copy_from_slice(&self.bytes[self.cursor..end]);
        self.cursor = end;

        Ok(())
    }
}
