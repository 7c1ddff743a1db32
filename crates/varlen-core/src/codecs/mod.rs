// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

mod lesqlite;
mod lesqlite2;
mod prefix_varint;
mod sleb128;
mod sqlite4_vli;
mod uleb128;
mod unreal_vlq;
mod vlq;

pub use lesqlite::LeSqlite;
pub use lesqlite2::LeSqlite2;
pub use prefix_varint::PrefixVarint;
pub use sleb128::SignedLeb128;
pub use sqlite4_vli::Sqlite4Vli;
pub use uleb128::UnsignedLeb128;
pub use unreal_vlq::{UNREAL_MAX_MAGNITUDE, UnrealSignedVlq};
pub use vlq::Vlq;
