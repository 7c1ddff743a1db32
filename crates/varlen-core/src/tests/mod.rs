// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

mod decode_buffer;
mod prefix_varint;
mod sleb128;
mod test_breaker;
