// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

pub const EQUIDISTANT_SAMPLE_SIZE: usize = 250;

/// Generates n equidistant values in [0, u64::MAX]
pub fn equidistant_unsigned(n: usize) -> Vec<u64> {
    assert!(n >= 2, "at least two samples are required");

    let step = u64::MAX / (n as u64 - 1);
    let mut result = Vec::with_capacity(n);

    for i in 0..n {
        let val = if i == n - 1 {
            u64::MAX // Force last element to be MAX
        } else {
            (i as u64) * step
        };
        result.push(val);
    }

    result
}

/// Generates n equidistant values in [i64::MIN, i64::MAX]
pub fn equidistant_signed(n: usize) -> Vec<i64> {
    assert!(n >= 2, "at least two samples are required");

    let range = (i64::MAX as i128 - i64::MIN as i128) as u128;
    let step = range / (n as u128 - 1);
    let mut result = Vec::with_capacity(n);

    for i in 0..n {
        let val = if i == n - 1 {
            i64::MAX // Force last element to be MAX
        } else {
            (i64::MIN as i128 + (i as u128 * step) as i128) as i64
        };
        result.push(val);
    }

    result
}

/// Every threshold together with its direct neighbours, sorted and deduplicated.
///
/// Tier thresholds are the last value of a length class, so `t` and `t + 1`
/// straddle the switch to the next encoded length.
pub fn boundary_samples(thresholds: &[u64]) -> Vec<u64> {
    let mut result: Vec<u64> = thresholds
        .iter()
        .flat_map(|&t| [t.checked_sub(1), Some(t), t.checked_add(1)])
        .flatten()
        .collect();

    result.push(0);
    result.push(u64::MAX);
    result.sort_unstable();
    result.dedup();
    result
}

/// Signed counterpart of [`boundary_samples`]: each sample is mirrored to its
/// negation, keeping only magnitudes representable in `i64`.
pub fn signed_boundary_samples(thresholds: &[u64]) -> Vec<i64> {
    let mut result: Vec<i64> = boundary_samples(thresholds)
        .into_iter()
        .filter_map(|m| i64::try_from(m).ok())
        .flat_map(|m| [m, -m])
        .collect();

    result.push(i64::MIN);
    result.sort_unstable();
    result.dedup();
    result
}

/// All strict prefixes of `bytes`, shortest first (including the empty one).
pub fn strict_prefixes(bytes: &[u8]) -> impl Iterator<Item = &[u8]> {
    (0..bytes.len()).map(move |len| &bytes[..len])
}
