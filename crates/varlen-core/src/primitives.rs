// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use crate::error::DomainError;

/// Narrows `value` to a single output byte.
///
/// Values above 255 are reported as a [`DomainError`] against `codec`.
#[inline(always)]
pub fn byte_of(value: u64, codec: &'static str) -> Result<u8, DomainError> {
    u8::try_from(value).map_err(|_| DomainError {
        codec,
        reason: "byte value exceeds 255",
    })
}

/// Number of significant bits in `value` (0 for 0).
#[inline(always)]
pub(crate) const fn bit_length(value: u64) -> u32 {
    u64::BITS - value.leading_zeros()
}

/// Number of 7-bit groups needed to hold `value`, at least one.
#[inline(always)]
pub(crate) const fn septets(value: u64) -> usize {
    let bits = bit_length(value) as usize;
    if bits == 0 { 1 } else { bits.div_ceil(7) }
}

/// Number of whole bytes needed to hold `value`, at least `min`.
#[inline(always)]
pub(crate) const fn octets(value: u64, min: usize) -> usize {
    let bytes = (bit_length(value) as usize).div_ceil(8);
    if bytes < min { min } else { bytes }
}
