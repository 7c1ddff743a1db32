// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Test utilities for varlen crates.
//!
//! ## License
//!
//! GPL-3.0-only

mod samples;

pub use samples::{
    EQUIDISTANT_SAMPLE_SIZE, boundary_samples, equidistant_signed, equidistant_unsigned,
    signed_boundary_samples, strict_prefixes,
};
